// ==========================================
// 销售明细规范化 - 管道配置
// ==========================================
// 职责: 运行参数、默认值、校验
// 来源: 命令行参数（见 cli_args.rs）+ 内置默认值；不读取环境变量，不写配置文件
// ==========================================

use crate::domain::types::KeyOrdering;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// 内置默认值
pub mod defaults {
    pub const INPUT_PATH: &str = "sales.csv";
    pub const OUTPUT_DIR: &str = ".";
    pub const CUSTOMERS_FILE: &str = "Customers.csv";
    pub const PRODUCTS_FILE: &str = "Products.csv";
    pub const SALES_FILE: &str = "Sales.csv";
    pub const LOCALE: &str = "zh-CN";
}

/// 日期格式（按顺序尝试，首个匹配生效）
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%d.%m.%Y"];

/// 日期时间格式（日期格式均不匹配时尝试，只保留日期部分）
pub const DEFAULT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// 空值标记（精确匹配，匹配前先 TRIM）
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const SUPPORTED_LOCALES: &[&str] = &["zh-CN", "en"];

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("配置值无效 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// PipelineConfig - 管道运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    // ===== 输入/输出 =====
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub customers_file: String,
    pub products_file: String,
    pub sales_file: String,
    pub report_path: Option<PathBuf>,

    // ===== 清洗规则 =====
    pub date_formats: Vec<String>,
    pub datetime_formats: Vec<String>,
    pub null_markers: Vec<String>,

    // ===== 代理键 =====
    pub key_ordering: KeyOrdering,

    // ===== 界面 =====
    pub locale: String,
    pub json_logs: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(defaults::INPUT_PATH),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            customers_file: defaults::CUSTOMERS_FILE.to_string(),
            products_file: defaults::PRODUCTS_FILE.to_string(),
            sales_file: defaults::SALES_FILE.to_string(),
            report_path: None,
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|s| s.to_string()).collect(),
            datetime_formats: DEFAULT_DATETIME_FORMATS.iter().map(|s| s.to_string()).collect(),
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
            key_ordering: KeyOrdering::default(),
            locale: defaults::LOCALE.to_string(),
            json_logs: false,
        }
    }
}

impl PipelineConfig {
    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("customers_file", &self.customers_file),
            ("products_file", &self.products_file),
            ("sales_file", &self.sales_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.clone(),
                    message: "输出文件名不能为空".to_string(),
                });
            }
        }

        if self.date_formats.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "date_formats".to_string(),
                value: "[]".to_string(),
                message: "至少需要一种日期格式".to_string(),
            });
        }

        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                value: self.locale.clone(),
                message: format!("仅支持 {}", SUPPORTED_LOCALES.join(" / ")),
            });
        }

        Ok(())
    }

    pub fn customers_path(&self) -> PathBuf {
        self.output_dir.join(&self.customers_file)
    }

    pub fn products_path(&self) -> PathBuf {
        self.output_dir.join(&self.products_file)
    }

    pub fn sales_path(&self) -> PathBuf {
        self.output_dir.join(&self.sales_file)
    }
}

// ==========================================
// 销售明细规范化 - 命令行参数
// ==========================================
// 工具: clap derive
// 职责: argv → CliArgs → PipelineConfig（校验在 PipelineConfig 中完成）
// ==========================================

use crate::config::pipeline_config::{defaults, ConfigError, PipelineConfig};
use crate::domain::types::KeyOrdering;
use clap::{CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// 代理键排序策略（命令行取值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyOrderingArg {
    /// 按名称字典序编号
    #[value(alias = "sorted")]
    Lexical,
    /// 按首次出现顺序编号
    #[value(alias = "first-seen")]
    FirstAppearance,
}

impl From<KeyOrderingArg> for KeyOrdering {
    fn from(value: KeyOrderingArg) -> Self {
        match value {
            KeyOrderingArg::Lexical => KeyOrdering::Lexical,
            KeyOrderingArg::FirstAppearance => KeyOrdering::FirstAppearance,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "sales-normalizer",
    version,
    about = "将扁平销售明细拆分为 Customers / Products / Sales 三张表"
)]
pub struct CliArgs {
    /// 输入文件（.csv / .xlsx / .xls）
    #[arg(default_value = defaults::INPUT_PATH)]
    pub input: PathBuf,

    /// 输出目录（不存在时自动创建）
    #[arg(default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// 写出 JSON 运行报告
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// 代理键排序策略
    #[arg(long, value_enum, default_value_t = KeyOrderingArg::Lexical)]
    pub key_ordering: KeyOrderingArg,

    /// 提示语言
    #[arg(long, default_value = defaults::LOCALE, value_parser = ["zh-CN", "en"])]
    pub lang: String,

    /// 以 JSON 行格式输出日志
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    /// 转换为管道配置并校验
    pub fn into_config(self) -> Result<PipelineConfig, ConfigError> {
        let config = PipelineConfig {
            input_path: self.input,
            output_dir: self.output_dir,
            report_path: self.report,
            key_ordering: self.key_ordering.into(),
            locale: self.lang,
            json_logs: self.log_json,
            ..PipelineConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

/// 尽力读取 --lang（参数有误时也能用所选语言输出错误提示）
pub fn requested_locale<I, T>(args: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::command()
        .ignore_errors(true)
        .try_get_matches_from(args)
        .ok()
        .and_then(|matches| matches.get_one::<String>("lang").cloned())
        .unwrap_or_else(|| defaults::LOCALE.to_string())
}

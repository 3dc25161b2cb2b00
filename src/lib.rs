// ==========================================
// 销售明细规范化 - 核心库
// ==========================================
// 输入: 扁平销售明细表（CSV / Excel）
// 输出: Customers / Products / Sales 三张规范化表
// 流程: 加载 → 清洗 → 代理键分配 → 拆分 → 写出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与表结构
pub mod domain;

// 导入层 - 加载与清洗
pub mod importer;

// 引擎层 - 代理键、拆分、编排
pub mod engine;

// 导出层 - 表写出
pub mod exporter;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::PipelineConfig;
pub use domain::{
    CleanedRecord, Customer, KeyOrdering, NormalizedTables, Product, RawRecord, SalesLine,
};
pub use engine::{
    Decomposer, KeyAssigner, NormalizationPipeline, PipelineError, PipelineReport,
    PipelineResult,
};
pub use exporter::{CsvTableWriter, TableWriter};
pub use importer::{DataCleanerImpl, FieldMapperImpl, UniversalFileParser};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "销售明细规范化";

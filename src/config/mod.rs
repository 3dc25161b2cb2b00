// ==========================================
// 销售明细规范化 - 配置层
// ==========================================
// 职责: 运行参数（输入/输出路径、排序策略、日期格式、空值标记）
// 来源: 命令行参数 + 内置默认值，不持久化
// ==========================================

pub mod cli_args;
pub mod pipeline_config;

// 重导出核心配置
pub use cli_args::{requested_locale, CliArgs, KeyOrderingArg};
pub use pipeline_config::{
    defaults, ConfigError, PipelineConfig, DEFAULT_DATETIME_FORMATS, DEFAULT_DATE_FORMATS, DEFAULT_NULL_MARKERS,
};

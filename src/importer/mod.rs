// ==========================================
// 销售明细规范化 - 导入层
// ==========================================
// 职责: 外部表格数据加载（Loader）与清洗（Cleaner）
// 支持: CSV，Excel
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod sales_importer_trait;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};

// 重导出 Trait 接口
pub use sales_importer_trait::{DataCleaner, FieldMapper, FileParser};

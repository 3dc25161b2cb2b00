// ==========================================
// 销售明细规范化 - 导出层
// ==========================================
// 职责: 三张规范化表写出（Writer）
// 格式: CSV，含表头，不含行号列
// ==========================================

pub mod error;
pub mod table_writer;

pub use error::{ExportError, ExportResult};
pub use table_writer::{write_table, CsvTableWriter, TableWriter, WrittenArtifacts};

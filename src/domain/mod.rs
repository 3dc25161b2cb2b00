// ==========================================
// 销售明细规范化 - 领域模型层
// ==========================================
// 职责: 定义原始记录、清洗记录、维度表/事实表行结构
// 红线: 不含文件读写逻辑，不含管道编排逻辑
// ==========================================

pub mod sales;
pub mod tables;
pub mod types;

// 重导出核心类型
pub use sales::{
    columns, CleanedRecord, CleanedTable, CleaningReport, KeyedRecord, KeyedTable, RawRecord, RawTable,
    SourceRow, SourceSheet, REQUIRED_COLUMNS,
};
pub use tables::{format_decimal, Customer, NormalizedTables, Product, SalesLine, TableRow};
pub use types::{DropReason, KeyOrdering};

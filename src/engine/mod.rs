// ==========================================
// 销售明细规范化 - 引擎层
// ==========================================
// 职责: 代理键分配、表拆分、管道编排
// 红线: 引擎不读写文件（由导入层/导出层负责）
// ==========================================

pub mod decomposer;
pub mod error;
pub mod key_assigner;
pub mod orchestrator;
pub mod report;

// 重导出核心引擎
pub use decomposer::Decomposer;
pub use error::{PipelineError, PipelineResult};
pub use key_assigner::KeyAssigner;
pub use orchestrator::NormalizationPipeline;
pub use report::PipelineReport;

// ==========================================
// 销售明细规范化 - 管道错误类型
// ==========================================
// 汇总导入/导出/配置三类错误；只有这些会中止管道
// ==========================================

use crate::config::ConfigError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// 输入文件缺失（尚未做任何转换和写出）
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, PipelineError::Import(ImportError::SourceNotFound(_)))
    }
}

/// Result 类型别名
pub type PipelineResult<T> = Result<T, PipelineError>;

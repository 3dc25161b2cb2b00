// ==========================================
// 销售明细规范化 - 导出模块错误类型
// ==========================================
// 写出失败视为致命错误，不重试；已写出的表不回滚
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("写出失败 ({path}): {message}")]
    SinkWriteFailure { path: String, message: String },
}

impl ExportError {
    pub fn sink<E: ToString>(path: &std::path::Path, err: E) -> Self {
        ExportError::SinkWriteFailure {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

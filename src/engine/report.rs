// ==========================================
// 销售明细规范化 - 运行报告
// ==========================================
// 用途: 记录一次管道运行的各阶段行数与输出文件
// 说明: 报告含 run_id 与时间戳，不属于三张输出表
// ==========================================

use crate::domain::sales::CleaningReport;
use crate::domain::types::KeyOrdering;
use crate::exporter::{ExportError, ExportResult, WrittenArtifacts};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub run_id: String,
    pub input_path: String,
    pub key_ordering: KeyOrdering,

    // ===== 各阶段行数 =====
    pub raw_rows: usize,
    pub cleaning: CleaningReport,
    pub customers: usize,
    pub products: usize,
    pub sales: usize,

    // ===== 输出 =====
    pub artifacts: WrittenArtifacts,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl PipelineReport {
    /// 写出 JSON 报告
    pub fn write_json(&self, path: &Path) -> ExportResult<()> {
        let file = File::create(path).map_err(|e| ExportError::sink(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| ExportError::sink(path, e))?;
        writer.flush().map_err(|e| ExportError::sink(path, e))
    }
}

// ==========================================
// 销售明细规范化 - 表写出器
// ==========================================
// 写出顺序: Customers → Products → Sales
// 任一表写出失败立即返回，之前写出的文件保留
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::tables::{NormalizedTables, TableRow};
use crate::exporter::error::{ExportError, ExportResult};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 已写出的文件路径
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WrittenArtifacts {
    pub customers: PathBuf,
    pub products: PathBuf,
    pub sales: PathBuf,
}

// ==========================================
// TableWriter Trait
// ==========================================
// 实现者: CsvTableWriter
pub trait TableWriter: Send + Sync {
    /// 写出三张表
    ///
    /// # 返回
    /// - Ok(WrittenArtifacts): 三个文件路径
    /// - Err(SinkWriteFailure): 目录创建/文件写入失败
    fn write_tables(&self, tables: &NormalizedTables) -> ExportResult<WrittenArtifacts>;
}

/// 写出单张表: 先写表头（空表也写），再逐行序列化
pub fn write_table<T: TableRow>(path: &Path, rows: &[T]) -> ExportResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ExportError::sink(path, e))?;

    writer
        .write_record(T::COLUMNS)
        .map_err(|e| ExportError::sink(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| ExportError::sink(path, e))?;
    }
    writer.flush().map_err(|e| ExportError::sink(path, e))?;

    debug!(path = %path.display(), rows = rows.len(), "表写出完成");
    Ok(())
}

// ==========================================
// CsvTableWriter - CSV 写出
// ==========================================
pub struct CsvTableWriter {
    output_dir: PathBuf,
    paths: WrittenArtifacts,
}

impl CsvTableWriter {
    pub fn new<P: Into<PathBuf>>(
        output_dir: P,
        customers_file: &str,
        products_file: &str,
        sales_file: &str,
    ) -> Self {
        let output_dir = output_dir.into();
        let paths = WrittenArtifacts {
            customers: output_dir.join(customers_file),
            products: output_dir.join(products_file),
            sales: output_dir.join(sales_file),
        };
        Self { output_dir, paths }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            paths: WrittenArtifacts {
                customers: config.customers_path(),
                products: config.products_path(),
                sales: config.sales_path(),
            },
        }
    }
}

impl TableWriter for CsvTableWriter {
    fn write_tables(&self, tables: &NormalizedTables) -> ExportResult<WrittenArtifacts> {
        fs::create_dir_all(&self.output_dir).map_err(|e| ExportError::sink(&self.output_dir, e))?;

        let artifacts = self.paths.clone();
        write_table(&artifacts.customers, &tables.customers)?;
        write_table(&artifacts.products, &tables.products)?;
        write_table(&artifacts.sales, &tables.sales)?;

        info!(
            customers = %artifacts.customers.display(),
            products = %artifacts.products.display(),
            sales = %artifacts.sales.display(),
            "三张表写出完成"
        );
        Ok(artifacts)
    }
}

// ==========================================
// 销售明细规范化 - 管道编排器
// ==========================================
// 流程（严格单向，无回环）:
//   load        : Path          → RawTable
//   clean       : RawTable      → CleanedTable
//   assign_keys : CleanedTable  → KeyedTable
//   decompose   : &KeyedTable   → NormalizedTables
//   write       : &NormalizedTables → WrittenArtifacts
// 每个阶段产出新表，不修改上一阶段的结果
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::sales::{CleanedTable, CleaningReport, KeyedTable, RawTable};
use crate::domain::tables::NormalizedTables;
use crate::engine::decomposer::Decomposer;
use crate::engine::error::PipelineResult;
use crate::engine::key_assigner::KeyAssigner;
use crate::engine::report::PipelineReport;
use crate::exporter::{CsvTableWriter, TableWriter, WrittenArtifacts};
use crate::importer::{
    DataCleaner, DataCleanerImpl, FieldMapper, FieldMapperImpl, FileParser, UniversalFileParser,
};
use chrono::Utc;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// NormalizationPipeline - 规范化管道
// ==========================================
pub struct NormalizationPipeline {
    config: PipelineConfig,

    // Loader
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,

    // Cleaner
    data_cleaner: Box<dyn DataCleaner>,

    // 引擎
    key_assigner: KeyAssigner,
    decomposer: Decomposer,

    // Writer
    table_writer: Box<dyn TableWriter>,
}

impl NormalizationPipeline {
    /// 按组件创建管道（测试中可替换任一组件）
    pub fn new(
        config: PipelineConfig,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        data_cleaner: Box<dyn DataCleaner>,
        key_assigner: KeyAssigner,
        table_writer: Box<dyn TableWriter>,
    ) -> Self {
        Self {
            config,
            file_parser,
            field_mapper,
            data_cleaner,
            key_assigner,
            decomposer: Decomposer,
            table_writer,
        }
    }

    /// 按配置装配默认组件
    pub fn from_config(config: PipelineConfig) -> Self {
        let data_cleaner = DataCleanerImpl::new(
            config.null_markers.clone(),
            config.date_formats.clone(),
            config.datetime_formats.clone(),
        );
        let key_assigner = KeyAssigner::new(config.key_ordering);
        let table_writer = CsvTableWriter::from_config(&config);

        Self::new(
            config,
            Box::new(UniversalFileParser),
            Box::new(FieldMapperImpl),
            Box::new(data_cleaner),
            key_assigner,
            Box::new(table_writer),
        )
    }

    // ==========================================
    // 阶段
    // ==========================================

    /// 阶段 1: 加载（不做部分加载；文件缺失 → SourceNotFound）
    #[instrument(skip(self, input), fields(input = %input.display()))]
    pub fn load(&self, input: &Path) -> PipelineResult<RawTable> {
        let sheet = self.file_parser.parse_to_sheet(input)?;
        let table = self.field_mapper.map_sheet(sheet)?;
        info!(rows = table.records.len(), "数据加载完成");
        Ok(table)
    }

    /// 阶段 2: 清洗
    pub fn clean(&self, raw: RawTable) -> CleanedTable {
        self.data_cleaner.clean(raw)
    }

    /// 阶段 3: 代理键分配
    pub fn assign_keys(&self, cleaned: CleanedTable) -> KeyedTable {
        self.key_assigner.assign(cleaned)
    }

    /// 阶段 4: 拆分
    pub fn decompose(&self, keyed: &KeyedTable) -> NormalizedTables {
        self.decomposer.decompose(keyed)
    }

    /// 阶段 5: 写出
    pub fn write(&self, tables: &NormalizedTables) -> PipelineResult<WrittenArtifacts> {
        Ok(self.table_writer.write_tables(tables)?)
    }

    // ==========================================
    // 组合
    // ==========================================

    /// 纯转换部分: clean → assign_keys → decompose
    pub fn transform(&self, raw: RawTable) -> (CleaningReport, NormalizedTables) {
        let cleaned = self.clean(raw);
        let report = cleaned.report.clone();
        let keyed = self.assign_keys(cleaned);
        let tables = self.decompose(&keyed);
        (report, tables)
    }

    /// 执行完整管道
    ///
    /// # 返回
    /// - Ok(PipelineReport): 各阶段行数与输出路径
    /// - Err: 配置非法 / 文件缺失 / 格式错误 / 写出失败（均为致命，不重试）
    #[instrument(skip(self), fields(run_id = tracing::field::Empty))]
    pub fn run(&self) -> PipelineResult<PipelineReport> {
        // 直接构造的配置未经命令行校验
        self.config.validate()?;

        let run_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("run_id", run_id.as_str());
        let started_at = Utc::now();

        let input = self.config.input_path.as_path();
        info!(input = %input.display(), ordering = %self.config.key_ordering, "开始规范化处理");

        let raw = self.load(input).map_err(|e| {
            error!(error = %e, "数据加载失败");
            e
        })?;
        let raw_rows = raw.records.len();

        let (cleaning, tables) = self.transform(raw);
        debug!(rows = cleaning.rows_out, "转换完成");

        let artifacts = self.write(&tables).map_err(|e| {
            error!(error = %e, "写出失败");
            e
        })?;

        let report = PipelineReport {
            run_id,
            input_path: input.display().to_string(),
            key_ordering: self.config.key_ordering,
            raw_rows,
            cleaning,
            customers: tables.customers.len(),
            products: tables.products.len(),
            sales: tables.sales.len(),
            artifacts,
            started_at,
            finished_at: Utc::now(),
        };

        if let Some(report_path) = &self.config.report_path {
            report.write_json(report_path)?;
            debug!(path = %report_path.display(), "运行报告已写出");
        }

        info!(
            customers = report.customers,
            products = report.products,
            sales = report.sales,
            "规范化处理完成"
        );
        Ok(report)
    }
}

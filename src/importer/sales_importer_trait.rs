// ==========================================
// 销售明细规范化 - 导入层 Trait
// ==========================================
// 职责: 定义加载/映射/清洗接口（不包含实现）
// 流程: FileParser → FieldMapper → DataCleaner
// ==========================================

use crate::domain::sales::{CleanedTable, RawRecord, RawTable, SourceRow, SourceSheet};
use crate::importer::error::ImportResult;
use chrono::NaiveDate;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（Loader）
// 实现者: CsvParser，ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为表头 + 原始行
    ///
    /// # 返回
    /// - Ok(SourceSheet): 全部数据行（不做部分加载）
    /// - Err(SourceNotFound): 文件不存在
    /// - Err: 格式错误、读取错误
    fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<SourceSheet>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 源列 → RawRecord 映射
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 校验表头包含全部必需列
    fn validate_headers(&self, headers: &[String]) -> ImportResult<()>;

    /// 将单行映射为 RawRecord
    fn map_to_raw_record(&self, row: SourceRow) -> ImportResult<RawRecord>;

    /// 校验表头并映射整张表
    fn map_sheet(&self, sheet: SourceSheet) -> ImportResult<RawTable> {
        self.validate_headers(&sheet.headers)?;
        let records = sheet
            .rows
            .into_iter()
            .map(|row| self.map_to_raw_record(row))
            .collect::<ImportResult<Vec<_>>>()?;
        Ok(RawTable { records })
    }
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 去重 + 类型转换 + 剔除无效行（Cleaner）
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// 判断是否为空值（空串或空值标记）
    fn is_null(&self, value: &str) -> bool;

    /// 小数转换；失败返回 None（无效标记）
    fn coerce_decimal(&self, value: &str) -> Option<f64>;

    /// 整数转换（允许 "50.0" 这类小数部分为 0 的写法）
    fn coerce_integer(&self, value: &str) -> Option<i64>;

    /// 日期转换；按配置的格式顺序尝试
    fn coerce_date(&self, value: &str) -> Option<NaiveDate>;

    /// 执行完整清洗
    ///
    /// # 步骤（顺序敏感）
    /// 1. 整行完全重复去重（保留首次出现）
    /// 2. 六个数值字段转换
    /// 3. 两个日期字段转换
    /// 4. 任一字段无效 → 整行剔除
    fn clean(&self, table: RawTable) -> CleanedTable;
}

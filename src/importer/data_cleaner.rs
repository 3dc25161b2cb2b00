// ==========================================
// 销售明细规范化 - 数据清洗器实现
// ==========================================
// 职责: 整行去重 / 数值与日期转换 / 剔除无效行
// 转换失败不是错误: 该行整体剔除，只体现在行数减少
// ==========================================

use crate::config::{DEFAULT_DATETIME_FORMATS, DEFAULT_DATE_FORMATS, DEFAULT_NULL_MARKERS};
use crate::domain::sales::{columns, CleanedRecord, CleanedTable, CleaningReport, RawRecord, RawTable};
use crate::domain::types::DropReason;
use crate::importer::error::ImportError;
use crate::importer::sales_importer_trait::DataCleaner as DataCleanerTrait;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use tracing::{debug, info};

pub struct DataCleaner {
    null_markers: HashSet<String>,
    date_formats: Vec<String>,
    datetime_formats: Vec<String>,
}

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new(
            DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_DATE_FORMATS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_DATETIME_FORMATS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl DataCleaner {
    /// 创建清洗器
    ///
    /// # 参数
    /// - null_markers: 视为空值的标记（精确匹配，已 TRIM）
    /// - date_formats: 日期格式列表（按顺序尝试）
    /// - datetime_formats: 日期时间格式列表（日期格式均不匹配时尝试，只取日期部分）
    pub fn new(
        null_markers: Vec<String>,
        date_formats: Vec<String>,
        datetime_formats: Vec<String>,
    ) -> Self {
        Self {
            null_markers: null_markers.into_iter().collect(),
            date_formats,
            datetime_formats,
        }
    }

    /// 步骤 1: 整行完全重复去重（保留首次出现）
    pub fn drop_duplicates(&self, records: Vec<RawRecord>) -> (Vec<RawRecord>, usize) {
        let keep: Vec<bool> = {
            let mut seen = HashSet::with_capacity(records.len());
            records.iter().map(|r| seen.insert(r.row_key())).collect()
        };

        let before = records.len();
        let unique: Vec<RawRecord> = records
            .into_iter()
            .zip(keep)
            .filter_map(|(record, first)| first.then_some(record))
            .collect();
        let removed = before - unique.len();
        (unique, removed)
    }

    /// 步骤 2-4: 单行转换；任一字段无效 → 返回该字段的失败原因
    pub fn coerce_record(&self, raw: &RawRecord) -> Result<CleanedRecord, ImportError> {
        let row = raw.row_number;

        for (field, value) in [
            (columns::ORDER_ID, &raw.order_id),
            (columns::COUNTRY, &raw.country),
            (columns::REGION, &raw.region),
            (columns::ITEM_TYPE, &raw.item_type),
        ] {
            self.require_text(value, field, row)?;
        }

        Ok(CleanedRecord {
            order_id: raw.order_id.trim().to_string(),
            country: raw.country.trim().to_string(),
            region: raw.region.trim().to_string(),
            item_type: raw.item_type.trim().to_string(),

            units_sold: self.require_integer(&raw.units_sold, columns::UNITS_SOLD, row)?,
            unit_price: self.require_decimal(&raw.unit_price, columns::UNIT_PRICE, row)?,
            unit_cost: self.require_decimal(&raw.unit_cost, columns::UNIT_COST, row)?,
            total_revenue: self.require_decimal(&raw.total_revenue, columns::TOTAL_REVENUE, row)?,
            total_cost: self.require_decimal(&raw.total_cost, columns::TOTAL_COST, row)?,
            total_profit: self.require_decimal(&raw.total_profit, columns::TOTAL_PROFIT, row)?,

            order_date: self.require_date(&raw.order_date, columns::ORDER_DATE, row)?,
            ship_date: self.require_date(&raw.ship_date, columns::SHIP_DATE, row)?,

            row_number: row,
        })
    }

    fn require_text(&self, value: &str, field: &str, row: usize) -> Result<(), ImportError> {
        if self.is_null(value) {
            return Err(missing(field, row));
        }
        Ok(())
    }

    fn require_decimal(&self, value: &str, field: &str, row: usize) -> Result<f64, ImportError> {
        if self.is_null(value) {
            return Err(missing(field, row));
        }
        self.coerce_decimal(value)
            .ok_or_else(|| ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                message: format!("无法解析为小数: {}", value),
            })
    }

    fn require_integer(&self, value: &str, field: &str, row: usize) -> Result<i64, ImportError> {
        if self.is_null(value) {
            return Err(missing(field, row));
        }
        self.coerce_integer(value)
            .ok_or_else(|| ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                message: format!("无法解析为整数: {}", value),
            })
    }

    fn require_date(&self, value: &str, field: &str, row: usize) -> Result<NaiveDate, ImportError> {
        if self.is_null(value) {
            return Err(missing(field, row));
        }
        self.coerce_date(value)
            .ok_or_else(|| ImportError::DateFormatError {
                row,
                field: field.to_string(),
                value: value.to_string(),
            })
    }
}

fn missing(field: &str, row: usize) -> ImportError {
    ImportError::MissingValue {
        row,
        field: field.to_string(),
    }
}

fn drop_reason(err: &ImportError) -> DropReason {
    match err {
        ImportError::MissingValue { .. } => DropReason::MissingValue,
        _ => DropReason::CoercionFailure,
    }
}

impl DataCleanerTrait for DataCleaner {
    fn is_null(&self, value: &str) -> bool {
        self.null_markers.contains(value.trim())
    }

    fn coerce_decimal(&self, value: &str) -> Option<f64> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    fn coerce_integer(&self, value: &str) -> Option<i64> {
        let trimmed = value.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Some(v);
        }
        // "50.0" 视为整数；"50.5" 无效
        self.coerce_decimal(trimmed)
            .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
            .map(|v| v as i64)
    }

    fn coerce_date(&self, value: &str) -> Option<NaiveDate> {
        let trimmed = value.trim();
        self.date_formats
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .or_else(|| {
                self.datetime_formats
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                    .map(|dt| dt.date())
            })
    }

    fn clean(&self, table: RawTable) -> CleanedTable {
        let mut report = CleaningReport {
            rows_in: table.records.len(),
            ..Default::default()
        };

        let (unique, duplicates_removed) = self.drop_duplicates(table.records);
        report.duplicates_removed = duplicates_removed;

        let mut records = Vec::with_capacity(unique.len());
        for raw in &unique {
            match self.coerce_record(raw) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let reason = drop_reason(&e);
                    debug!(row_number = raw.row_number, reason = %reason, error = %e, "剔除无效行");
                    match reason {
                        DropReason::MissingValue => report.missing_value_rows += 1,
                        _ => report.coercion_failure_rows += 1,
                    }
                }
            }
        }
        report.rows_out = records.len();

        info!(
            rows_in = report.rows_in,
            duplicates = report.duplicates_removed,
            missing = report.missing_value_rows,
            invalid = report.coercion_failure_rows,
            rows_out = report.rows_out,
            "数据清洗完成"
        );

        CleanedTable { records, report }
    }
}

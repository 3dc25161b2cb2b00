// ==========================================
// 销售明细规范化 - 销售记录领域模型
// ==========================================
// 管道阶段产物:
//   SourceSheet → RawTable → CleanedTable → KeyedTable
// 每个阶段生成新表，不修改上一阶段的数据
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// ==========================================
// 源表列名（大小写/空格敏感）
// ==========================================
pub mod columns {
    pub const ORDER_ID: &str = "Order ID";
    pub const ORDER_DATE: &str = "Order Date";
    pub const SHIP_DATE: &str = "Ship Date";
    pub const COUNTRY: &str = "Country";
    pub const REGION: &str = "Region";
    pub const ITEM_TYPE: &str = "Item Type";
    pub const UNITS_SOLD: &str = "Units Sold";
    pub const UNIT_PRICE: &str = "Unit Price";
    pub const UNIT_COST: &str = "Unit Cost";
    pub const TOTAL_REVENUE: &str = "Total Revenue";
    pub const TOTAL_COST: &str = "Total Cost";
    pub const TOTAL_PROFIT: &str = "Total Profit";
}

/// 源表必须包含的列
pub const REQUIRED_COLUMNS: [&str; 12] = [
    columns::COUNTRY,
    columns::REGION,
    columns::ITEM_TYPE,
    columns::ORDER_ID,
    columns::ORDER_DATE,
    columns::SHIP_DATE,
    columns::UNITS_SOLD,
    columns::UNIT_PRICE,
    columns::UNIT_COST,
    columns::TOTAL_REVENUE,
    columns::TOTAL_COST,
    columns::TOTAL_PROFIT,
];

// ==========================================
// SourceSheet - 文件解析产物（表头 + 行）
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SourceSheet {
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

#[derive(Debug, Clone)]
pub struct SourceRow {
    pub row_number: usize, // 数据行号（1 起，不含表头）
    pub values: HashMap<String, String>,
}

// ==========================================
// RawRecord - 原始销售行（未做类型转换）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub order_id: String,
    pub order_date: String,
    pub ship_date: String,
    pub country: String,
    pub region: String,
    pub item_type: String,
    pub units_sold: String,
    pub unit_price: String,
    pub unit_cost: String,
    pub total_revenue: String,
    pub total_cost: String,
    pub total_profit: String,

    // 非必需列（如 Sales Channel / Order Priority），按列名排序；只参与重复判定
    pub extra_columns: BTreeMap<String, String>,

    // 元信息（不参与重复判定）
    pub row_number: usize,
}

impl RawRecord {
    /// 整行重复判定键：必需列 + 全部非必需列
    pub fn row_key(&self) -> ([&str; 12], &BTreeMap<String, String>) {
        (self.field_values(), &self.extra_columns)
    }

    /// 十二个必需列的原始值
    pub fn field_values(&self) -> [&str; 12] {
        [
            self.order_id.as_str(),
            self.order_date.as_str(),
            self.ship_date.as_str(),
            self.country.as_str(),
            self.region.as_str(),
            self.item_type.as_str(),
            self.units_sold.as_str(),
            self.unit_price.as_str(),
            self.unit_cost.as_str(),
            self.total_revenue.as_str(),
            self.total_cost.as_str(),
            self.total_profit.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub records: Vec<RawRecord>,
}

// ==========================================
// CleanedRecord - 类型转换成功的销售行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub country: String,
    pub region: String,
    pub item_type: String,
    pub units_sold: i64,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,

    pub row_number: usize,
}

/// 清洗统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub rows_in: usize,
    pub duplicates_removed: usize,
    pub missing_value_rows: usize,
    pub coercion_failure_rows: usize,
    pub rows_out: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CleanedTable {
    pub records: Vec<CleanedRecord>,
    pub report: CleaningReport,
}

// ==========================================
// KeyedRecord - 附加代理键的清洗记录
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRecord {
    pub customer_id: u32,
    pub product_id: u32,
    pub record: CleanedRecord,
}

#[derive(Debug, Clone, Default)]
pub struct KeyedTable {
    pub records: Vec<KeyedRecord>,
    pub distinct_countries: usize,
    pub distinct_item_types: usize,
}

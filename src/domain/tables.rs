// ==========================================
// 销售明细规范化 - 输出表行结构
// ==========================================
// Customers: CustomerID, CustomerName, Region
// Products:  ProductID, ProductName, Category, UnitPrice
// Sales:     SalesOrderID, OrderDate, ProductID, CustomerID, Quantity, UnitPrice, LineTotal
// ==========================================

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

// ==========================================
// TableRow - 可写出的表行
// ==========================================
// COLUMNS 与 serde 字段名、顺序保持一致；空表也需写出表头
pub trait TableRow: Serialize {
    const COLUMNS: &'static [&'static str];
}

/// 小数输出格式: 整数值保留一位小数（2.0），其余取最短往返表示（9.33）
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn serialize_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_decimal(*value))
}

fn serialize_iso_date<S: Serializer>(
    value: &NaiveDate,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.format("%Y-%m-%d").to_string())
}

// ==========================================
// Customer - 客户维度
// ==========================================
// 客户即国家: CustomerName 取自 Country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    #[serde(rename = "CustomerID")]
    pub customer_id: u32,
    #[serde(rename = "CustomerName")]
    pub customer_name: String,
    #[serde(rename = "Region")]
    pub region: String,
}

impl TableRow for Customer {
    const COLUMNS: &'static [&'static str] = &["CustomerID", "CustomerName", "Region"];
}

// ==========================================
// Product - 产品维度
// ==========================================
// 占位: Category = ProductName，源数据没有独立的品类体系
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(rename = "ProductID")]
    pub product_id: u32,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "UnitPrice", serialize_with = "serialize_decimal")]
    pub unit_price: f64,
}

impl TableRow for Product {
    const COLUMNS: &'static [&'static str] = &["ProductID", "ProductName", "Category", "UnitPrice"];
}

// ==========================================
// SalesLine - 销售事实
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesLine {
    #[serde(rename = "SalesOrderID")]
    pub sales_order_id: String,
    #[serde(rename = "OrderDate", serialize_with = "serialize_iso_date")]
    pub order_date: NaiveDate,
    #[serde(rename = "ProductID")]
    pub product_id: u32,
    #[serde(rename = "CustomerID")]
    pub customer_id: u32,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "UnitPrice", serialize_with = "serialize_decimal")]
    pub unit_price: f64,
    #[serde(rename = "LineTotal", serialize_with = "serialize_decimal")]
    pub line_total: f64,
}

impl TableRow for SalesLine {
    const COLUMNS: &'static [&'static str] = &[
        "SalesOrderID",
        "OrderDate",
        "ProductID",
        "CustomerID",
        "Quantity",
        "UnitPrice",
        "LineTotal",
    ];
}

// ==========================================
// NormalizedTables - 拆分结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedTables {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sales: Vec<SalesLine>,
}

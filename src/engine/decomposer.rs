// ==========================================
// 销售明细规范化 - 表拆分引擎
// ==========================================
// 职责: 附键清洗记录 → Customers / Products / Sales 三张表
// 输入: KeyedTable（只读）
// 输出: NormalizedTables
// 规则:
//   - 维度表按代理键去重，保留首次出现的行，行序为首次出现顺序
//   - 事实表一行对应一条清洗记录，不去重
// ==========================================

use crate::domain::sales::{KeyedRecord, KeyedTable};
use crate::domain::tables::{Customer, NormalizedTables, Product, SalesLine};
use std::collections::HashSet;
use tracing::{info, instrument};

pub struct Decomposer;

impl Decomposer {
    #[instrument(skip(self, table), fields(count = table.records.len()))]
    pub fn decompose(&self, table: &KeyedTable) -> NormalizedTables {
        let tables = NormalizedTables {
            customers: self.project_customers(&table.records),
            products: self.project_products(&table.records),
            sales: self.project_sales(&table.records),
        };

        info!(
            customers = tables.customers.len(),
            products = tables.products.len(),
            sales = tables.sales.len(),
            "表拆分完成"
        );

        tables
    }

    /// 客户维度: {CustomerID，Country → CustomerName，Region}
    pub fn project_customers(&self, records: &[KeyedRecord]) -> Vec<Customer> {
        let mut seen = HashSet::new();
        records
            .iter()
            .filter(|r| seen.insert(r.customer_id))
            .map(|r| Customer {
                customer_id: r.customer_id,
                customer_name: r.record.country.clone(),
                region: r.record.region.clone(),
            })
            .collect()
    }

    /// 产品维度: {ProductID，Item Type → ProductName，Category，UnitPrice}
    ///
    /// Category 为占位列，直接取 ProductName；Unit Cost 不输出
    pub fn project_products(&self, records: &[KeyedRecord]) -> Vec<Product> {
        let mut seen = HashSet::new();
        records
            .iter()
            .filter(|r| seen.insert(r.product_id))
            .map(|r| Product {
                product_id: r.product_id,
                product_name: r.record.item_type.clone(),
                category: r.record.item_type.clone(),
                unit_price: r.record.unit_price,
            })
            .collect()
    }

    /// 销售事实: Order ID → SalesOrderID，Units Sold → Quantity，Total Revenue → LineTotal
    pub fn project_sales(&self, records: &[KeyedRecord]) -> Vec<SalesLine> {
        records
            .iter()
            .map(|r| SalesLine {
                sales_order_id: r.record.order_id.clone(),
                order_date: r.record.order_date,
                product_id: r.product_id,
                customer_id: r.customer_id,
                quantity: r.record.units_sold,
                unit_price: r.record.unit_price,
                line_total: r.record.total_revenue,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sales::CleanedRecord;
    use chrono::NaiveDate;

    fn keyed(
        order_id: &str,
        country: (&str, u32),
        region: &str,
        item_type: (&str, u32),
        unit_price: f64,
    ) -> KeyedRecord {
        KeyedRecord {
            customer_id: country.1,
            product_id: item_type.1,
            record: CleanedRecord {
                order_id: order_id.to_string(),
                order_date: NaiveDate::from_ymd_opt(2014, 10, 18).unwrap(),
                ship_date: NaiveDate::from_ymd_opt(2014, 10, 31).unwrap(),
                country: country.0.to_string(),
                region: region.to_string(),
                item_type: item_type.0.to_string(),
                units_sold: 10,
                unit_price,
                unit_cost: 1.0,
                total_revenue: unit_price * 10.0,
                total_cost: 10.0,
                total_profit: unit_price * 10.0 - 10.0,
                row_number: 1,
            },
        }
    }

    fn sample() -> Vec<KeyedRecord> {
        vec![
            keyed("1", ("USA", 1), "North America", ("Snacks", 1), 2.0),
            keyed("2", ("Chad", 0), "Sub-Saharan Africa", ("Snacks", 1), 2.5),
            keyed("3", ("USA", 1), "Americas", ("Fruits", 0), 9.33),
        ]
    }

    #[test]
    fn test_project_customers_first_occurrence_wins() {
        let customers = Decomposer.project_customers(&sample());

        assert_eq!(
            customers,
            vec![
                Customer {
                    customer_id: 1,
                    customer_name: "USA".to_string(),
                    region: "North America".to_string(),
                },
                Customer {
                    customer_id: 0,
                    customer_name: "Chad".to_string(),
                    region: "Sub-Saharan Africa".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_project_products_category_mirrors_name() {
        let products = Decomposer.project_products(&sample());

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_id, 1);
        assert_eq!(products[0].product_name, "Snacks");
        assert_eq!(products[0].category, "Snacks");
        assert_eq!(products[0].unit_price, 2.0);
        assert_eq!(products[1].product_name, "Fruits");
        assert_eq!(products[1].unit_price, 9.33);
    }

    #[test]
    fn test_project_sales_one_row_per_record() {
        let sales = Decomposer.project_sales(&sample());

        assert_eq!(sales.len(), 3);
        assert_eq!(sales[2].sales_order_id, "3");
        assert_eq!(sales[2].customer_id, 1);
        assert_eq!(sales[2].product_id, 0);
        assert_eq!(sales[2].quantity, 10);
        assert_eq!(sales[2].unit_price, 9.33);
        assert_eq!(sales[2].line_total, 9.33 * 10.0);
    }

    #[test]
    fn test_decompose_empty_table() {
        let tables = Decomposer.decompose(&KeyedTable::default());
        assert_eq!(tables, NormalizedTables::default());
    }
}

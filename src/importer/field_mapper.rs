// ==========================================
// 销售明细规范化 - 字段映射器实现
// ==========================================
// 职责: 源列名 → RawRecord 字段映射
// 列名必须完全匹配（大小写/空格敏感），不做类型转换
// ==========================================

use crate::domain::sales::{columns, RawRecord, SourceRow, REQUIRED_COLUMNS};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::sales_importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::{BTreeMap, HashMap};

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn validate_headers(&self, headers: &[String]) -> ImportResult<()> {
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ImportError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    fn map_to_raw_record(&self, row: SourceRow) -> ImportResult<RawRecord> {
        let values = &row.values;
        let record = RawRecord {
            order_id: self.get_string(values, columns::ORDER_ID),
            order_date: self.get_string(values, columns::ORDER_DATE),
            ship_date: self.get_string(values, columns::SHIP_DATE),
            country: self.get_string(values, columns::COUNTRY),
            region: self.get_string(values, columns::REGION),
            item_type: self.get_string(values, columns::ITEM_TYPE),
            units_sold: self.get_string(values, columns::UNITS_SOLD),
            unit_price: self.get_string(values, columns::UNIT_PRICE),
            unit_cost: self.get_string(values, columns::UNIT_COST),
            total_revenue: self.get_string(values, columns::TOTAL_REVENUE),
            total_cost: self.get_string(values, columns::TOTAL_COST),
            total_profit: self.get_string(values, columns::TOTAL_PROFIT),
            extra_columns: BTreeMap::new(),
            row_number: row.row_number,
        };

        // 其余列原样保留，供整行去重使用
        let extra_columns = row
            .values
            .into_iter()
            .filter(|(header, _)| !REQUIRED_COLUMNS.contains(&header.as_str()))
            .collect();

        Ok(RawRecord {
            extra_columns,
            ..record
        })
    }
}

impl FieldMapper {
    /// 提取字段；短行缺失的单元格按空串处理，交由清洗阶段剔除
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> String {
        row.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sales::SourceSheet;

    fn full_headers() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_validate_headers_ok_with_extra_columns() {
        let mut headers = full_headers();
        headers.push("Sales Channel".to_string());
        assert!(FieldMapper.validate_headers(&headers).is_ok());
    }

    #[test]
    fn test_validate_headers_is_case_sensitive() {
        let mut headers = full_headers();
        headers.retain(|h| h != "Item Type");
        headers.push("item type".to_string());

        let result = FieldMapper.validate_headers(&headers);
        assert!(matches!(result, Err(ImportError::MissingColumn { column }) if column == "Item Type"));
    }

    #[test]
    fn test_map_to_raw_record() {
        let mut values = HashMap::new();
        values.insert("Order ID".to_string(), "100".to_string());
        values.insert("Country".to_string(), " USA ".to_string());
        values.insert("Units Sold".to_string(), "50".to_string());
        values.insert("Order Priority".to_string(), "H".to_string());

        let record = FieldMapper
            .map_to_raw_record(SourceRow {
                row_number: 7,
                values,
            })
            .unwrap();

        assert_eq!(record.order_id, "100");
        assert_eq!(record.country, "USA");
        assert_eq!(record.units_sold, "50");
        assert_eq!(record.region, "");
        assert_eq!(record.row_number, 7);
        assert_eq!(record.extra_columns.len(), 1);
        assert_eq!(record.extra_columns["Order Priority"], "H");
    }

    #[test]
    fn test_map_sheet_rejects_missing_column_before_rows() {
        let sheet = SourceSheet {
            headers: vec!["Country".to_string()],
            rows: vec![],
        };
        assert!(matches!(
            FieldMapper.map_sheet(sheet),
            Err(ImportError::MissingColumn { .. })
        ));
    }
}

// ==========================================
// 销售明细规范化 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析（Loader）
// 支持: CSV (.csv) / Excel (.xlsx/.xls)
// ==========================================

use crate::domain::sales::{SourceRow, SourceSheet};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::sales_importer_trait::FileParser;
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Duration, NaiveDate};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::debug;

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::SourceNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// 组装一行；完全空白的行返回 None
fn build_row<I>(headers: &[String], values: I, row_number: usize) -> Option<SourceRow>
where
    I: Iterator<Item = String>,
{
    let mut row_map = HashMap::new();
    for (col_idx, value) in values.enumerate() {
        if let Some(header) = headers.get(col_idx) {
            row_map.insert(header.clone(), value.trim().to_string());
        }
    }

    if row_map.values().all(|v| v.is_empty()) {
        return None;
    }

    Some(SourceRow {
        row_number,
        values: row_map,
    })
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<SourceSheet> {
        let path = file_path;
        ensure_exists(path)?;

        let ext = extension_of(path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致，缺失字段按空值处理
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let values = record.iter().map(|v| v.to_string());
            if let Some(row) = build_row(&headers, values, row_idx + 1) {
                rows.push(row);
            }
        }

        debug!(path = %path.display(), rows = rows.len(), "CSV 解析完成");
        Ok(SourceSheet { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// 只读取第一个工作表，第一行为表头
pub struct ExcelParser;

impl ExcelParser {
    /// Excel 序列日期 → NaiveDate（1900 日期系统，以 1899-12-30 为 0）
    fn serial_to_date(serial: f64) -> Option<NaiveDate> {
        if !serial.is_finite() || serial < 0.0 {
            return None;
        }
        NaiveDate::from_ymd_opt(1899, 12, 30)
            .and_then(|base| base.checked_add_signed(Duration::days(serial.floor() as i64)))
    }

    fn cell_to_string(cell: &Data) -> String {
        match cell {
            Data::DateTime(dt) => Self::serial_to_date(dt.as_f64())
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| cell.to_string()),
            other => other.to_string(),
        }
    }
}

impl FileParser for ExcelParser {
    fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<SourceSheet> {
        let path = file_path;
        ensure_exists(path)?;

        let ext = extension_of(path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut data_rows = range.rows();
        let header_row = data_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, data_row) in data_rows.enumerate() {
            let values = data_row.iter().map(Self::cell_to_string);
            if let Some(row) = build_row(&headers, values, row_idx + 1) {
                rows.push(row);
            }
        }

        debug!(path = %path.display(), sheet = %sheet_name, rows = rows.len(), "Excel 解析完成");
        Ok(SourceSheet { headers, rows })
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<SourceSheet> {
        // 先检查存在性: 缺失文件统一报 SourceNotFound，而不是格式错误
        ensure_exists(file_path)?;

        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_to_sheet(file_path),
            "xlsx" | "xls" => ExcelParser.parse_to_sheet(file_path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = temp_csv(&["Country,Units Sold", "USA,50", " Chad , 7 "]);

        let sheet = CsvParser.parse_to_sheet(temp_file.path()).unwrap();

        assert_eq!(sheet.headers, vec!["Country", "Units Sold"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].values.get("Country"), Some(&"USA".to_string()));
        assert_eq!(sheet.rows[1].values.get("Country"), Some(&"Chad".to_string()));
        assert_eq!(sheet.rows[1].values.get("Units Sold"), Some(&"7".to_string()));
        assert_eq!(sheet.rows[1].row_number, 2);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_sheet(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::SourceNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let temp_file = temp_csv(&["Country,Units Sold", "USA,50", ",", "Chad,7"]);

        let sheet = CsvParser.parse_to_sheet(temp_file.path()).unwrap();

        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1].row_number, 3);
    }

    #[test]
    fn test_universal_parser_missing_file_wins_over_extension() {
        let result = UniversalFileParser.parse_to_sheet(Path::new("missing.parquet"));
        assert!(matches!(result, Err(ImportError::SourceNotFound(_))));
    }

    #[test]
    fn test_universal_parser_unsupported_format() {
        let temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let result = UniversalFileParser.parse_to_sheet(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "json"));
    }

    #[test]
    fn test_excel_serial_to_date() {
        assert_eq!(
            ExcelParser::serial_to_date(41930.0),
            NaiveDate::from_ymd_opt(2014, 10, 18)
        );
        assert_eq!(ExcelParser::serial_to_date(-1.0), None);
    }

    #[test]
    fn test_excel_parser_reads_fixture() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sales_sample.xlsx"));

        let sheet = ExcelParser.parse_to_sheet(path).unwrap();

        assert_eq!(sheet.headers.len(), 14);
        assert_eq!(sheet.headers[6], "Order ID");
        // 第 3 行为空白行，被跳过
        assert_eq!(sheet.rows.len(), 4);
        assert_eq!(sheet.rows[1].row_number, 3);

        let first = &sheet.rows[0].values;
        assert_eq!(first.get("Order Date"), Some(&"2014-10-18".to_string()));
        assert_eq!(first.get("Order ID"), Some(&"686800706".to_string()));
        assert_eq!(first.get("Unit Price"), Some(&"437.2".to_string()));
        // 文本格式日期原样保留
        assert_eq!(sheet.rows[1].values.get("Order Date"), Some(&"11/7/2011".to_string()));
    }
}

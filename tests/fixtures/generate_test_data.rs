// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成 6 个销售明细测试数据集 CSV 文件
// 输出: tests/fixtures/datasets/*.csv
// 说明: 数据由行号确定性推导，重复运行结果一致
// ==========================================

use chrono::{Duration, NaiveDate};
use csv::Writer;
use std::error::Error;
use std::fs::{self, File};

const OUTPUT_DIR: &str = "tests/fixtures/datasets";

// CSV 表头（与公开销售数据集列顺序一致）
const CSV_HEADER: &[&str] = &[
    "Region",
    "Country",
    "Item Type",
    "Sales Channel",
    "Order Priority",
    "Order Date",
    "Order ID",
    "Ship Date",
    "Units Sold",
    "Unit Price",
    "Unit Cost",
    "Total Revenue",
    "Total Cost",
    "Total Profit",
];

const MARKETS: &[(&str, &str)] = &[
    ("Libya", "Middle East and North Africa"),
    ("Canada", "North America"),
    ("Japan", "Asia"),
    ("Chad", "Sub-Saharan Africa"),
    ("Armenia", "Europe"),
    ("Tuvalu", "Australia and Oceania"),
    ("Grenada", "Central America and the Caribbean"),
    ("Mongolia", "Asia"),
];

// (商品，单价，单位成本)
const ITEMS: &[(&str, f64, f64)] = &[
    ("Baby Food", 255.28, 159.42),
    ("Cereal", 205.70, 117.11),
    ("Cosmetics", 437.20, 263.33),
    ("Fruits", 9.33, 6.92),
    ("Household", 668.27, 502.54),
    ("Office Supplies", 651.21, 524.96),
    ("Snacks", 152.58, 97.44),
    ("Vegetables", 154.06, 90.93),
];

// 销售记录结构
#[derive(Clone)]
struct SaleRecord {
    region: String,
    country: String,
    item_type: String,
    sales_channel: String,
    order_priority: String,
    order_date: String,
    order_id: String,
    ship_date: String,
    units_sold: String,
    unit_price: String,
    unit_cost: String,
    total_revenue: String,
    total_cost: String,
    total_profit: String,
}

impl SaleRecord {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.region.clone(),
            self.country.clone(),
            self.item_type.clone(),
            self.sales_channel.clone(),
            self.order_priority.clone(),
            self.order_date.clone(),
            self.order_id.clone(),
            self.ship_date.clone(),
            self.units_sold.clone(),
            self.unit_price.clone(),
            self.unit_cost.clone(),
            self.total_revenue.clone(),
            self.total_cost.clone(),
            self.total_profit.clone(),
        ]
    }
}

// 生成正常销售记录
fn generate_normal_record(index: usize) -> SaleRecord {
    let base = NaiveDate::from_ymd_opt(2010, 1, 1).expect("固定起始日期");
    let order_date = base + Duration::days((index * 37 % 2500) as i64);
    let ship_date = order_date + Duration::days(3 + (index % 40) as i64);

    let (country, region) = MARKETS[(index * 5 + index / 3) % MARKETS.len()];
    let (item, price, cost) = ITEMS[(index * 3 + index / 7) % ITEMS.len()];
    let units = 1 + (index * 7919 % 9999) as i64;
    let revenue = units as f64 * price;
    let total_cost = units as f64 * cost;

    SaleRecord {
        region: region.to_string(),
        country: country.to_string(),
        item_type: item.to_string(),
        sales_channel: ["Online", "Offline"][index % 2].to_string(),
        order_priority: ["H", "M", "L", "C"][index % 4].to_string(),
        order_date: order_date.format("%-m/%-d/%Y").to_string(),
        order_id: format!("{}", 100_000_000 + index * 7),
        ship_date: ship_date.format("%-m/%-d/%Y").to_string(),
        units_sold: units.to_string(),
        unit_price: format!("{:.2}", price),
        unit_cost: format!("{:.2}", cost),
        total_revenue: format!("{:.2}", revenue),
        total_cost: format!("{:.2}", total_cost),
        total_profit: format!("{:.2}", revenue - total_cost),
    }
}

fn write_dataset(name: &str, records: &[SaleRecord], note: &str) -> Result<(), Box<dyn Error>> {
    let path = format!("{}/{}", OUTPUT_DIR, name);
    let file = File::create(&path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 {} ({}条{})", name, records.len(), note);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(OUTPUT_DIR)?;

    // 1. 正常数据 (100条)
    generate_normal_data()?;

    // 2. 大数据集 (10000条)
    generate_large_dataset()?;

    // 3. 完全重复行
    generate_duplicates()?;

    // 4. 缺失值
    generate_missing_values()?;

    // 5. 类型错误
    generate_invalid_values()?;

    // 6. 混合问题
    generate_mixed_issues()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_normal_data() -> Result<(), Box<dyn Error>> {
    let records: Vec<_> = (0..100).map(generate_normal_record).collect();
    write_dataset("01_normal_data.csv", &records, "")
}

fn generate_large_dataset() -> Result<(), Box<dyn Error>> {
    let records: Vec<_> = (0..10000).map(|i| generate_normal_record(i + 10000)).collect();
    write_dataset("02_large_dataset.csv", &records, "")
}

fn generate_duplicates() -> Result<(), Box<dyn Error>> {
    // 15 条原始记录 + 5 条完全重复
    let mut records: Vec<_> = (0..15).map(|i| generate_normal_record(i + 20000)).collect();
    for i in [0, 3, 6, 9, 12] {
        records.push(records[i].clone());
    }
    write_dataset("03_duplicates.csv", &records, "，5条重复")
}

fn generate_missing_values() -> Result<(), Box<dyn Error>> {
    let markers = ["", "NA", "N/A", "NULL", "nan"];
    let mut records = Vec::new();

    for (i, marker) in markers.iter().enumerate() {
        let mut record = generate_normal_record(i + 30000);
        match i % 3 {
            0 => record.country = marker.to_string(),
            1 => record.order_date = marker.to_string(),
            _ => record.unit_price = marker.to_string(),
        }
        records.push(record);
    }

    // 对照组
    for i in 0..5 {
        records.push(generate_normal_record(i + 30010));
    }

    write_dataset("04_missing_values.csv", &records, "，5条缺失值")
}

fn generate_invalid_values() -> Result<(), Box<dyn Error>> {
    let mut records = Vec::new();

    let mut record = generate_normal_record(40000);
    record.units_sold = "abc".to_string();
    records.push(record);

    let mut record = generate_normal_record(40001);
    record.units_sold = "50.5".to_string();
    records.push(record);

    let mut record = generate_normal_record(40002);
    record.unit_price = "12,50".to_string();
    records.push(record);

    let mut record = generate_normal_record(40003);
    record.order_date = "not-a-date".to_string();
    records.push(record);

    let mut record = generate_normal_record(40004);
    record.ship_date = "13/45/2014".to_string();
    records.push(record);

    // 对照组
    for i in 0..5 {
        records.push(generate_normal_record(i + 40010));
    }

    write_dataset("05_invalid_values.csv", &records, "，5条类型错误")
}

fn generate_mixed_issues() -> Result<(), Box<dyn Error>> {
    // 正常数据 (10条)
    let mut records: Vec<_> = (0..10).map(|i| generate_normal_record(i + 50000)).collect();

    // 重复数据 (5条)
    for i in [0, 2, 4, 6, 8] {
        records.push(generate_normal_record(i + 50000));
    }

    // 缺失值 (5条)
    for i in 0..5 {
        let mut record = generate_normal_record(i + 50010);
        record.item_type = "".to_string();
        records.push(record);
    }

    // 类型错误 (5条)
    for i in 0..5 {
        let mut record = generate_normal_record(i + 50015);
        record.total_revenue = "INVALID".to_string();
        records.push(record);
    }

    write_dataset("06_mixed_issues.csv", &records, "，混合问题")
}

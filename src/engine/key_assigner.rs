// ==========================================
// 销售明细规范化 - 代理键分配引擎
// ==========================================
// 职责: Country → CustomerID，Item Type → ProductID
// 规则: 稠密、从 0 开始、同值同键、异值异键
// 两组分组互相独立，不共享编号
// ==========================================

use crate::domain::sales::{CleanedTable, KeyedRecord, KeyedTable};
use crate::domain::types::KeyOrdering;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, instrument};

// ==========================================
// KeyAssigner - 代理键分配
// ==========================================
pub struct KeyAssigner {
    ordering: KeyOrdering,
}

impl Default for KeyAssigner {
    fn default() -> Self {
        Self::new(KeyOrdering::default())
    }
}

impl KeyAssigner {
    pub fn new(ordering: KeyOrdering) -> Self {
        Self { ordering }
    }

    /// 为分组值排名
    ///
    /// # 规则
    /// - Lexical: 去重后按字符串排序（Unicode 码点序），依次编号 0..k
    /// - FirstAppearance: 按首次出现顺序编号 0..k
    ///
    /// # 返回
    /// - HashMap<分组值，代理键>
    pub fn rank_distinct<'a, I>(&self, values: I) -> HashMap<String, u32>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.ordering {
            KeyOrdering::Lexical => values
                .into_iter()
                .collect::<BTreeSet<&str>>()
                .into_iter()
                .zip(0u32..)
                .map(|(value, id)| (value.to_string(), id))
                .collect(),
            KeyOrdering::FirstAppearance => {
                let mut ranks: HashMap<String, u32> = HashMap::new();
                for value in values {
                    if !ranks.contains_key(value) {
                        let next_id = ranks.len() as u32;
                        ranks.insert(value.to_string(), next_id);
                    }
                }
                ranks
            }
        }
    }

    /// 为全部清洗记录分配 CustomerID / ProductID
    #[instrument(skip(self, table), fields(count = table.records.len(), ordering = %self.ordering))]
    pub fn assign(&self, table: CleanedTable) -> KeyedTable {
        let customer_ids = self.rank_distinct(table.records.iter().map(|r| r.country.as_str()));
        let product_ids = self.rank_distinct(table.records.iter().map(|r| r.item_type.as_str()));

        debug!(
            countries = customer_ids.len(),
            item_types = product_ids.len(),
            "分组排名完成"
        );

        let records = table
            .records
            .into_iter()
            .map(|record| KeyedRecord {
                customer_id: customer_ids[record.country.as_str()],
                product_id: product_ids[record.item_type.as_str()],
                record,
            })
            .collect();

        KeyedTable {
            records,
            distinct_countries: customer_ids.len(),
            distinct_item_types: product_ids.len(),
        }
    }
}

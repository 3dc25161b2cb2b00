// ==========================================
// 销售明细规范化 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 代理键排序策略 (Key Ordering)
// ==========================================
// 决定分组值 → 代理键的排名方式，两种策略均为确定性
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyOrdering {
    #[default]
    Lexical,         // 按分组值字典序排名（码点序）
    FirstAppearance, // 按清洗后数据中首次出现顺序排名
}

impl fmt::Display for KeyOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOrdering::Lexical => write!(f, "LEXICAL"),
            KeyOrdering::FirstAppearance => write!(f, "FIRST_APPEARANCE"),
        }
    }
}

// ==========================================
// 行剔除原因 (Drop Reason)
// ==========================================
// 清洗阶段按行剔除，不做字段级填补
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DropReason {
    MissingValue,     // 任一字段为空/空值标记
    CoercionFailure,  // 数值或日期字段无法转换
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MissingValue => write!(f, "MISSING_VALUE"),
            DropReason::CoercionFailure => write!(f, "COERCION_FAILURE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ordering_default_is_lexical() {
        assert_eq!(KeyOrdering::default(), KeyOrdering::Lexical);
    }

    #[test]
    fn test_display_matches_serde_name() {
        assert_eq!(KeyOrdering::FirstAppearance.to_string(), "FIRST_APPEARANCE");
        assert_eq!(
            serde_json::to_string(&KeyOrdering::FirstAppearance).unwrap(),
            "\"FIRST_APPEARANCE\""
        );
        assert_eq!(DropReason::CoercionFailure.to_string(), "COERCION_FAILURE");
    }
}

//! Receipts and their line items as delivered by the receipt store.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// One purchase or income event.
///
/// Missing or malformed fields degrade instead of rejecting the receipt: an
/// unreadable date becomes `None`, an absent type becomes `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_date")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub payer: PersonId,
    #[serde(default)]
    pub shop: String,
    #[serde(default)]
    pub transaction_type: TransactionType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

impl Receipt {
    pub fn new(
        id: i64,
        payment_date: NaiveDate,
        payer: PersonId,
        shop: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id,
            payment_date: Some(payment_date),
            payer,
            shop: shop.into(),
            transaction_type,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

/// A single categorised position on a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub value: ItemValue,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub owners: Vec<PersonId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl Item {
    pub fn new(id: i64, category: impl Into<String>, value: impl Into<ItemValue>) -> Self {
        Self {
            id,
            category: category.into(),
            value: value.into(),
            owners: Vec::new(),
            description: None,
            quantity: None,
        }
    }

    pub fn owned_by(mut self, owners: impl IntoIterator<Item = PersonId>) -> Self {
        self.owners = owners.into_iter().collect();
        self
    }
}

/// Raw item value. The store sends numbers, locale-formatted strings, or junk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ItemValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl ItemValue {
    /// Parses the value into a finite number, falling back to `0.0`.
    ///
    /// Strings accept either a comma or a period as decimal separator. Only the
    /// first comma is rewritten, so `"1,234,5"` parses to zero.
    pub fn parse_safe(&self) -> f64 {
        let parsed = match self {
            ItemValue::Number(value) => *value,
            ItemValue::Text(raw) => {
                let normalized = raw.replacen(',', ".", 1);
                let trimmed = normalized.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(0.0)
                }
            }
            ItemValue::Other(_) => 0.0,
        };
        if parsed.is_finite() {
            parsed
        } else {
            0.0
        }
    }
}

impl Default for ItemValue {
    fn default() -> Self {
        ItemValue::Other(serde_json::Value::Null)
    }
}

impl From<f64> for ItemValue {
    fn from(value: f64) -> Self {
        ItemValue::Number(value)
    }
}

impl From<&str> for ItemValue {
    fn from(value: &str) -> Self {
        ItemValue::Text(value.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(value: String) -> Self {
        ItemValue::Text(value)
    }
}

/// Direction of money flow recorded on a receipt.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
            TransactionType::Other => "other",
        };
        f.write_str(label)
    }
}

use chrono::NaiveDate;

use crate::domain::{PersonId, Receipt, TransactionType};

/// Item-level view of a receipt, borrowed from the receipt it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    pub receipt_id: i64,
    /// `None` when the receipt's date could not be read.
    pub payment_date: Option<NaiveDate>,
    pub payer: PersonId,
    pub shop: &'a str,
    pub transaction_type: TransactionType,

    pub item_id: i64,
    pub category: &'a str,
    pub value: f64,
    pub owners: &'a [PersonId],
}

/// Explodes receipts into line items, keeping receipt order then item order.
pub fn flatten_receipts(receipts: &[Receipt]) -> Vec<LineItem<'_>> {
    receipts
        .iter()
        .flat_map(|receipt| {
            receipt.items.iter().map(move |item| LineItem {
                receipt_id: receipt.id,
                payment_date: receipt.payment_date,
                payer: receipt.payer,
                shop: &receipt.shop,
                transaction_type: receipt.transaction_type,
                item_id: item.id,
                category: &item.category,
                value: item.value.parse_safe(),
                owners: &item.owners,
            })
        })
        .collect()
}

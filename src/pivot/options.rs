use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{PersonId, Receipt};

/// Distinct filter values present in a receipt set, sorted for pickers.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub shops: Vec<String>,
    pub categories: Vec<String>,
    pub payers: Vec<PersonId>,
    pub owners: Vec<PersonId>,
}

pub fn distinct_from_receipts(receipts: &[Receipt]) -> FilterOptions {
    let mut shops = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut payers = BTreeSet::new();
    let mut owners = BTreeSet::new();

    for receipt in receipts {
        shops.insert(receipt.shop.clone());
        payers.insert(receipt.payer);
        for item in &receipt.items {
            categories.insert(item.category.clone());
            owners.extend(item.owners.iter().copied());
        }
    }

    FilterOptions {
        shops: shops.into_iter().collect(),
        categories: categories.into_iter().collect(),
        payers: payers.into_iter().collect(),
        owners: owners.into_iter().collect(),
    }
}

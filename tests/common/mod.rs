#![allow(dead_code)]

use chrono::NaiveDate;
use receipt_pivot::domain::{
    GroupByField, Item, Person, PivotSpec, Receipt, TimeGrain, TransactionType,
};

pub const ANA: i64 = 1;
pub const BEN: i64 = 2;
pub const CAT: i64 = 3;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn roster() -> Vec<Person> {
    vec![
        Person::new(ANA, "Ana").as_payer().as_owner(),
        Person::new(BEN, "Ben").as_payer().as_owner(),
        Person::new(CAT, "Cat").as_owner(),
    ]
}

/// Spec with no filters, no time bucketing and no row cap.
pub fn open_spec(group_by: Vec<GroupByField>) -> PivotSpec {
    PivotSpec {
        transaction_type: None,
        time_grain: TimeGrain::None,
        group_by,
        limit: 0,
        ..PivotSpec::default()
    }
}

pub fn single_item(value: f64, owners: &[i64]) -> Vec<Receipt> {
    vec![
        Receipt::new(1, date(2024, 3, 10), ANA, "Market", TransactionType::Expense)
            .with_item(Item::new(1, "Food", value).owned_by(owners.iter().copied())),
    ]
}

/// A small household month: shared groceries, personal items, one income.
pub fn household() -> Vec<Receipt> {
    vec![
        Receipt::new(1, date(2024, 1, 1), ANA, "Market", TransactionType::Expense)
            .with_item(Item::new(1, "Food", 60.0).owned_by([ANA, BEN, CAT]))
            .with_item(Item::new(2, "Household", "15,50").owned_by([ANA])),
        Receipt::new(2, date(2024, 1, 8), BEN, "Pharmacy", TransactionType::Expense)
            .with_item(Item::new(3, "Health", 20.0).owned_by([BEN])),
        Receipt::new(3, date(2024, 1, 15), ANA, "Market", TransactionType::Expense)
            .with_item(Item::new(4, "Food", 40.0).owned_by([ANA, BEN]))
            .with_item(Item::new(5, "Food", 10.0)),
        Receipt::new(4, date(2024, 1, 31), BEN, "Employer", TransactionType::Income)
            .with_item(Item::new(6, "Salary", 3000.0).owned_by([BEN])),
        Receipt::new(5, date(2024, 2, 2), CAT, "Kiosk", TransactionType::Expense)
            .with_item(Item::new(7, "Press", "4.5").owned_by([CAT])),
    ]
}

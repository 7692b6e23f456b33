use chrono::NaiveDate;

use crate::domain::PivotSpec;

use super::line_item::LineItem;

/// Returns `true` when `line` passes every filter declared on `spec`.
///
/// Empty lists do not filter. A non-empty owner filter needs at least one of
/// the line's owners, so lines without owners never pass it. An undated line
/// fails any date bound.
pub fn retains(spec: &PivotSpec, line: &LineItem<'_>) -> bool {
    if !in_date_range(line.payment_date, spec.date_from, spec.date_to) {
        return false;
    }
    if let Some(kind) = spec.transaction_type {
        if line.transaction_type != kind {
            return false;
        }
    }
    if !spec.categories.is_empty() && !spec.categories.iter().any(|c| c == line.category) {
        return false;
    }
    if !spec.shops.is_empty() && !spec.shops.iter().any(|s| s == line.shop) {
        return false;
    }
    if !spec.payers.is_empty() && !spec.payers.contains(&line.payer) {
        return false;
    }
    if !spec.owners.is_empty() && !line.owners.iter().any(|o| spec.owners.contains(o)) {
        return false;
    }
    true
}

pub fn filter_line_items<'a>(lines: Vec<LineItem<'a>>, spec: &PivotSpec) -> Vec<LineItem<'a>> {
    lines.into_iter().filter(|line| retains(spec, line)).collect()
}

fn in_date_range(date: Option<NaiveDate>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    match date {
        Some(date) => {
            from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
        }
        None => from.is_none() && to.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PersonId, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn line<'a>(owners: &'a [PersonId]) -> LineItem<'a> {
        LineItem {
            receipt_id: 1,
            payment_date: Some(date(2024, 5, 15)),
            payer: 1,
            shop: "Market",
            transaction_type: TransactionType::Expense,
            item_id: 1,
            category: "Food",
            value: 10.0,
            owners,
        }
    }

    fn open_spec() -> PivotSpec {
        PivotSpec {
            transaction_type: None,
            ..PivotSpec::default()
        }
    }

    #[test]
    fn empty_filters_keep_everything() {
        assert!(retains(&open_spec(), &line(&[])));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let mut spec = open_spec();
        spec.date_from = Some(date(2024, 5, 15));
        spec.date_to = Some(date(2024, 5, 15));
        assert!(retains(&spec, &line(&[])));

        spec.date_from = Some(date(2024, 5, 16));
        assert!(!retains(&spec, &line(&[])));

        spec.date_from = None;
        spec.date_to = Some(date(2024, 5, 14));
        assert!(!retains(&spec, &line(&[])));
    }

    #[test]
    fn undated_lines_fail_any_date_bound() {
        let mut undated = line(&[]);
        undated.payment_date = None;
        let mut spec = open_spec();
        assert!(retains(&spec, &undated));

        spec.date_from = Some(date(2000, 1, 1));
        assert!(!retains(&spec, &undated));

        spec.date_from = None;
        spec.date_to = Some(date(2100, 1, 1));
        assert!(!retains(&spec, &undated));
    }

    #[test]
    fn transaction_type_must_match_exactly() {
        let mut spec = open_spec();
        spec.transaction_type = Some(TransactionType::Income);
        assert!(!retains(&spec, &line(&[])));
        spec.transaction_type = Some(TransactionType::Expense);
        assert!(retains(&spec, &line(&[])));
    }

    #[test]
    fn list_filters_require_membership() {
        let mut spec = open_spec();
        spec.categories = vec!["Rent".into()];
        assert!(!retains(&spec, &line(&[])));
        spec.categories = vec!["Rent".into(), "Food".into()];
        assert!(retains(&spec, &line(&[])));

        spec.shops = vec!["Other".into()];
        assert!(!retains(&spec, &line(&[])));
        spec.shops.clear();

        spec.payers = vec![2];
        assert!(!retains(&spec, &line(&[])));
        spec.payers = vec![1];
        assert!(retains(&spec, &line(&[])));
    }

    #[test]
    fn owner_filter_matches_any_owner() {
        let mut spec = open_spec();
        spec.owners = vec![1];
        assert!(!retains(&spec, &line(&[2, 3])));
        assert!(retains(&spec, &line(&[1, 3])));
        assert!(!retains(&spec, &line(&[])));
    }

    #[test]
    fn filter_line_items_keeps_order() {
        let mut spec = open_spec();
        spec.owners = vec![3];
        let a = [3];
        let b = [1];
        let c = [2, 3];
        let mut lines = vec![line(&a), line(&b), line(&c)];
        lines[2].item_id = 3;
        let kept = filter_line_items(lines, &spec);
        let ids: Vec<_> = kept.iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}

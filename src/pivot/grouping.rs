use crate::domain::{CellValue, Column, PersonId, TimeGrain};

use super::{
    line_item::LineItem,
    people::{resolve_name, PeopleIndex},
    time_bucket::time_bucket,
};

/// Owner label used when a line item has nobody attributed.
pub const UNATTRIBUTED: &str = "—";

/// Joins key parts. Unit separator never shows up in names or categories.
pub const KEY_SEPARATOR: char = '\u{1f}';

/// One aggregation input: a line item seen through at most one of its owners.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution<'l, 'a> {
    pub line: &'l LineItem<'a>,
    pub owner: Option<PersonId>,
}

/// Expands a line item into its aggregation contributions.
///
/// Owner fan-out yields one contribution per owner, or a single unattributed
/// one for an ownerless line. Without fan-out the line contributes once.
pub fn expand<'l, 'a>(line: &'l LineItem<'a>, fan_out_by_owner: bool) -> Vec<Contribution<'l, 'a>> {
    if fan_out_by_owner && !line.owners.is_empty() {
        line.owners
            .iter()
            .map(|owner| Contribution {
                line,
                owner: Some(*owner),
            })
            .collect()
    } else {
        vec![Contribution { line, owner: None }]
    }
}

/// Resolves the grouping columns of a contribution, in column order.
pub fn dimensions(
    contribution: &Contribution<'_, '_>,
    columns: &[Column],
    grain: TimeGrain,
    people: Option<&PeopleIndex>,
) -> Vec<(Column, CellValue)> {
    let line = contribution.line;
    columns
        .iter()
        .map(|column| {
            let cell = match column {
                Column::Time => CellValue::from(
                    line.payment_date.and_then(|date| time_bucket(date, grain)),
                ),
                Column::Category => CellValue::from(line.category.to_string()),
                Column::Shop => CellValue::from(line.shop.to_string()),
                Column::Payer => CellValue::from(resolve_name(people, line.payer)),
                Column::Owner => match contribution.owner {
                    Some(owner) => CellValue::from(resolve_name(people, owner)),
                    None => CellValue::from(UNATTRIBUTED.to_string()),
                },
                Column::Value | Column::Count => CellValue::Null,
            };
            (*column, cell)
        })
        .collect()
}

/// Stable identity of a group: stringified dimension values in column order.
pub fn group_key(dimensions: &[(Column, CellValue)]) -> String {
    let mut key = String::new();
    for (idx, (_, cell)) in dimensions.iter().enumerate() {
        if idx > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(&cell.key_text());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Person, TransactionType};
    use chrono::NaiveDate;

    fn line<'a>(owners: &'a [PersonId]) -> LineItem<'a> {
        LineItem {
            receipt_id: 1,
            payment_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            payer: 9,
            shop: "Pharmacy",
            transaction_type: TransactionType::Expense,
            item_id: 1,
            category: "Health",
            value: 18.0,
            owners,
        }
    }

    #[test]
    fn fan_out_yields_one_contribution_per_owner() {
        let owners = [1, 2, 3];
        let line = line(&owners);
        let expanded = expand(&line, true);
        let attributed: Vec<_> = expanded.iter().map(|c| c.owner).collect();
        assert_eq!(attributed, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(expand(&line, false).len(), 1);
    }

    #[test]
    fn ownerless_line_fans_out_once_unattributed() {
        let line = line(&[]);
        let expanded = expand(&line, true);
        assert_eq!(expanded.len(), 1);

        let dims = dimensions(&expanded[0], &[Column::Owner], TimeGrain::None, None);
        assert_eq!(dims, vec![(Column::Owner, CellValue::Text(UNATTRIBUTED.into()))]);
    }

    #[test]
    fn dimensions_follow_column_order_and_resolve_names() {
        let owners = [1];
        let line = line(&owners);
        let index = PeopleIndex::build(&[Person::new(1, "Ana").as_owner()]);
        let expanded = expand(&line, true);
        let columns = [Column::Time, Column::Payer, Column::Owner, Column::Shop, Column::Category];
        let dims = dimensions(&expanded[0], &columns, TimeGrain::Month, Some(&index));
        let labels: Vec<_> = dims.iter().map(|(_, cell)| cell.key_text()).collect();
        assert_eq!(labels, vec!["2024-02", "9", "Ana", "Pharmacy", "Health"]);
    }

    #[test]
    fn undated_line_buckets_to_null() {
        let mut line = line(&[]);
        line.payment_date = None;
        let expanded = expand(&line, false);
        let dims = dimensions(&expanded[0], &[Column::Time], TimeGrain::Day, None);
        assert_eq!(dims, vec![(Column::Time, CellValue::Null)]);
    }

    #[test]
    fn group_key_joins_with_separator() {
        let dims = vec![
            (Column::Category, CellValue::Text("a".into())),
            (Column::Shop, CellValue::Text("b".into())),
        ];
        assert_eq!(group_key(&dims), "a\u{1f}b");
        assert_eq!(group_key(&[]), "");
    }
}

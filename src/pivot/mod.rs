//! Pivot pipeline: flatten, filter, expand, aggregate, finalize.
//!
//! Every call allocates its own intermediate state, so independent calls can
//! run concurrently without coordination.

pub mod aggregate;
pub mod allocation;
pub mod filter;
pub mod finalize;
pub mod grouping;
pub mod line_item;
pub mod options;
pub mod people;
pub mod time_bucket;

pub use aggregate::{Aggregator, Group};
pub use allocation::allocated_value;
pub use filter::{filter_line_items, retains};
pub use finalize::{finalize, measure_value};
pub use grouping::{dimensions, expand, group_key, Contribution, KEY_SEPARATOR, UNATTRIBUTED};
pub use line_item::{flatten_receipts, LineItem};
pub use options::{distinct_from_receipts, FilterOptions};
pub use people::{resolve_name, PeopleIndex};
pub use time_bucket::{iso_week, time_bucket};

use crate::domain::{PivotResult, PivotSpec, Receipt};

/// Computes the pivot table of `receipts` under `spec`.
///
/// `people` only affects payer and owner labels; without it, ids are echoed.
pub fn compute_pivot(
    receipts: &[Receipt],
    spec: &PivotSpec,
    people: Option<&PeopleIndex>,
) -> PivotResult {
    let lines = flatten_receipts(receipts);
    let line_count = lines.len();
    let filtered = filter_line_items(lines, spec);

    let columns = spec.group_columns();
    let fan_out = spec.groups_by_owner();
    let mut aggregator = Aggregator::new();
    let mut contributions = 0usize;

    for line in &filtered {
        let share = allocated_value(line.value, line.owners, spec.owner_allocation);
        for contribution in expand(line, fan_out) {
            let dims = dimensions(&contribution, &columns, spec.time_grain, people);
            aggregator.add(group_key(&dims), dims, share);
            contributions += 1;
        }
    }

    let groups = aggregator.len();
    let result = finalize(aggregator.into_groups(), spec);

    tracing::debug!(
        receipts = receipts.len(),
        lines = line_count,
        filtered = filtered.len(),
        contributions,
        groups,
        rows = result.rows.len(),
        "pivot computed"
    );

    result
}

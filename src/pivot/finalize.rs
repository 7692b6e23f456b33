use crate::domain::{MeasureOp, PivotResult, PivotRow, PivotSpec, SortBy, SortDir};

use super::aggregate::Group;

/// Reported value of a group under `op`. An empty group averages to zero.
pub fn measure_value(op: MeasureOp, sum: f64, count: u64) -> f64 {
    match op {
        MeasureOp::Count => count as f64,
        MeasureOp::Sum => sum,
        MeasureOp::Avg => {
            if count == 0 {
                0.0
            } else {
                sum / count as f64
            }
        }
    }
}

/// Turns aggregated groups into the sorted, truncated result table.
pub fn finalize(groups: Vec<Group>, spec: &PivotSpec) -> PivotResult {
    let mut rows: Vec<PivotRow> = groups
        .into_iter()
        .map(|group| PivotRow {
            value: measure_value(spec.measure.op, group.sum, group.count),
            count: group.count,
            dimensions: group.dimensions,
        })
        .collect();

    sort_rows(&mut rows, spec.sort_by, spec.sort_dir);

    if spec.limit > 0 {
        rows.truncate(usize::try_from(spec.limit).unwrap_or(usize::MAX));
    }

    PivotResult {
        columns: spec.result_columns(),
        rows,
    }
}

/// Stable sort; ties keep aggregation order in both directions.
fn sort_rows(rows: &mut [PivotRow], sort_by: SortBy, sort_dir: SortDir) {
    let key = |row: &PivotRow| match sort_by {
        SortBy::Value => row.value,
        SortBy::Count => row.count as f64,
    };
    rows.sort_by(|a, b| {
        let ordering = key(a).total_cmp(&key(b));
        match sort_dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
}

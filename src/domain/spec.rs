//! Declarative pivot configuration supplied by the caller.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::{empty_as_none, PersonId},
        receipt::TransactionType,
    },
    errors::PivotError,
};

/// Full description of one pivot computation.
///
/// Filter fields left out of a JSON document are unset, as are `null` and
/// empty-string values for the dates and the transaction type. The remaining
/// fields fall back to the values of [`PivotSpec::default`] when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PivotSpec {
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_from: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_to: Option<NaiveDate>,

    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_type: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shops: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payers: Vec<PersonId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<PersonId>,

    #[serde(default = "PivotSpec::default_time_grain")]
    pub time_grain: TimeGrain,
    #[serde(default = "PivotSpec::default_group_by")]
    pub group_by: Vec<GroupByField>,

    #[serde(default)]
    pub measure: Measure,

    #[serde(default)]
    pub owner_allocation: OwnerAllocation,

    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_dir: SortDir,
    #[serde(default = "PivotSpec::default_limit")]
    pub limit: i64,
}

impl Default for PivotSpec {
    fn default() -> Self {
        Self {
            date_from: None,
            date_to: None,
            transaction_type: Some(TransactionType::Expense),
            categories: Vec::new(),
            shops: Vec::new(),
            payers: Vec::new(),
            owners: Vec::new(),
            time_grain: Self::default_time_grain(),
            group_by: Self::default_group_by(),
            measure: Measure::default(),
            owner_allocation: OwnerAllocation::default(),
            sort_by: SortBy::default(),
            sort_dir: SortDir::default(),
            limit: Self::default_limit(),
        }
    }
}

impl PivotSpec {
    pub fn default_time_grain() -> TimeGrain {
        TimeGrain::Month
    }

    pub fn default_group_by() -> Vec<GroupByField> {
        vec![GroupByField::Category]
    }

    pub fn default_limit() -> i64 {
        20
    }

    /// Parses a spec from JSON, rejecting unknown measure operators up front.
    pub fn from_json(raw: &str) -> Result<Self, PivotError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if let Some(op) = value.pointer("/measure/op").and_then(|op| op.as_str()) {
            op.parse::<MeasureOp>()?;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Checks structural constraints serde cannot express.
    pub fn validate(&self) -> Result<(), PivotError> {
        for (idx, field) in self.group_by.iter().enumerate() {
            if self.group_by[..idx].contains(field) {
                return Err(PivotError::InvalidSpec(format!(
                    "group-by dimension `{}` listed more than once",
                    field
                )));
            }
        }
        Ok(())
    }

    /// Ordered grouping columns: `time` first when bucketing, then `group_by`.
    pub fn group_columns(&self) -> Vec<Column> {
        let mut columns = Vec::with_capacity(self.group_by.len() + 1);
        if self.time_grain != TimeGrain::None {
            columns.push(Column::Time);
        }
        columns.extend(self.group_by.iter().map(|field| field.column()));
        columns
    }

    pub fn groups_by_owner(&self) -> bool {
        self.group_by.contains(&GroupByField::Owner)
    }

    /// Output column names: grouping columns followed by `value` and `count`.
    pub fn result_columns(&self) -> Vec<String> {
        self.group_columns()
            .into_iter()
            .chain([Column::Value, Column::Count])
            .map(|column| column.as_str().to_string())
            .collect()
    }
}

/// Calendar granularity used to bucket payment dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeGrain {
    None,
    Day,
    Week,
    Month,
    Year,
}

/// Dimensions a pivot can be grouped by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GroupByField {
    Category,
    Shop,
    Payer,
    Owner,
}

impl GroupByField {
    pub fn column(self) -> Column {
        match self {
            GroupByField::Category => Column::Category,
            GroupByField::Shop => Column::Shop,
            GroupByField::Payer => Column::Payer,
            GroupByField::Owner => Column::Owner,
        }
    }
}

impl fmt::Display for GroupByField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column().as_str())
    }
}

/// Columns that can appear in a [`PivotResult`](crate::domain::result::PivotResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Time,
    Category,
    Shop,
    Payer,
    Owner,
    Value,
    Count,
}

impl Column {
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Time => "time",
            Column::Category => "category",
            Column::Shop => "shop",
            Column::Payer => "payer",
            Column::Owner => "owner",
            Column::Value => "value",
            Column::Count => "count",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Measure {
    pub op: MeasureOp,
    #[serde(default)]
    pub field: MeasureField,
}

impl Measure {
    pub fn new(op: MeasureOp) -> Self {
        Self {
            op,
            field: MeasureField::Value,
        }
    }
}

/// Aggregation operator applied to each group.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MeasureOp {
    #[default]
    Sum,
    Count,
    Avg,
}

impl FromStr for MeasureOp {
    type Err = PivotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sum" => Ok(MeasureOp::Sum),
            "count" => Ok(MeasureOp::Count),
            "avg" => Ok(MeasureOp::Avg),
            other => Err(PivotError::UnknownMeasure(other.to_string())),
        }
    }
}

impl TryFrom<String> for MeasureOp {
    type Error = PivotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Field the measure reads. Item value is the only numeric field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MeasureField {
    #[default]
    Value,
}

/// How a shared item's value is attributed across its owners.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OwnerAllocation {
    #[default]
    SplitEven,
    FullValue,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Value,
    Count,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

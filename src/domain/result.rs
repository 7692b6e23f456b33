//! Output table produced by a pivot computation.

use serde::{
    ser::{SerializeMap, Serializer},
    Serialize,
};

use crate::domain::spec::Column;

/// A single cell of a pivot row.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Null,
}

impl CellValue {
    /// Text used when building group keys. `Null` stringifies as empty.
    pub fn key_text(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => number.to_string(),
            CellValue::Null => String::new(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map(CellValue::Text).unwrap_or(CellValue::Null)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// One aggregated group. Dimensions keep the grouping-column order.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub dimensions: Vec<(Column, CellValue)>,
    pub value: f64,
    pub count: u64,
}

impl PivotRow {
    /// Looks up a cell by column name, including `value` and `count`.
    pub fn get(&self, column: &str) -> Option<CellValue> {
        match column {
            "value" => Some(CellValue::Number(self.value)),
            "count" => Some(CellValue::Number(self.count as f64)),
            _ => self
                .dimensions
                .iter()
                .find(|(col, _)| col.as_str() == column)
                .map(|(_, cell)| cell.clone()),
        }
    }

    /// Convenience accessor for a textual dimension.
    pub fn label(&self, column: Column) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|(col, _)| *col == column)
            .and_then(|(_, cell)| cell.as_text())
    }
}

impl Serialize for PivotRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.dimensions.len() + 2))?;
        for (column, cell) in &self.dimensions {
            map.serialize_entry(column.as_str(), cell)?;
        }
        map.serialize_entry(Column::Value.as_str(), &self.value)?;
        map.serialize_entry(Column::Count.as_str(), &self.count)?;
        map.end()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct PivotResult {
    pub columns: Vec<String>,
    pub rows: Vec<PivotRow>,
}

impl PivotResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_serialize_as_records_in_column_order() {
        let row = PivotRow {
            dimensions: vec![
                (Column::Time, CellValue::Text("2024-02".into())),
                (Column::Owner, CellValue::Text("Ana".into())),
            ],
            value: 12.5,
            count: 2,
        };
        let encoded = serde_json::to_string(&row).unwrap();
        assert_eq!(
            encoded,
            r#"{"time":"2024-02","owner":"Ana","value":12.5,"count":2}"#
        );
    }

    #[test]
    fn result_serializes_columns_and_rows() {
        let result = PivotResult {
            columns: vec!["shop".into(), "value".into(), "count".into()],
            rows: vec![PivotRow {
                dimensions: vec![(Column::Shop, CellValue::Null)],
                value: 0.0,
                count: 1,
            }],
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "columns": ["shop", "value", "count"],
                "rows": [{"shop": null, "value": 0.0, "count": 1}]
            })
        );
    }

    #[test]
    fn get_reads_dimensions_and_measures() {
        let row = PivotRow {
            dimensions: vec![(Column::Category, CellValue::Text("Food".into()))],
            value: 3.0,
            count: 4,
        };
        assert_eq!(row.get("category"), Some(CellValue::Text("Food".into())));
        assert_eq!(row.get("count"), Some(CellValue::Number(4.0)));
        assert_eq!(row.get("shop"), None);
        assert_eq!(row.label(Column::Category), Some("Food"));
    }
}

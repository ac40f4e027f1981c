use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column key for the item name (x-axis of the chart).
pub const ITEM_KEY: &str = "Item";
/// Column key for the model prediction plotted as the primary series.
pub const PREDICTED_QUANTITY_KEY: &str = "Predicted_Quantity";
/// Optional column key produced when a sales plan was uploaded.
pub const FORECASTED_DEMAND_KEY: &str = "Forecasted_Ingredient_Demand";
/// The only column rendered with 2 decimal places in the orders table.
pub const AVG_WEEKLY_USAGE_KEY: &str = "Avg_Weekly_Usage";

/// One row of tabular data: column name -> value.
///
/// Key order is insertion order (serde_json `preserve_order`), so the
/// first row of a response defines the column order for the whole table.
pub type Record = Map<String, Value>;

/// Schema-agnostic ordered sequence of rows returned by the forecast
/// service. Rows are assumed (not verified) to share the shape of the
/// first row; downstream projections must tolerate heterogeneous rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(pub Vec<Record>);

impl RecordSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn rows(&self) -> &[Record] {
        &self.0
    }

    /// Column names taken from the first row, in their original order.
    /// Empty set for an empty sequence.
    pub fn columns(&self) -> Vec<String> {
        self.0
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// True if at least one row carries a numeric, non-NaN value under
    /// `key`. Presence detection for optional chart series: once a column
    /// is judged present, all rows are plotted as-is.
    pub fn has_numeric_column(&self, key: &str) -> bool {
        self.0.iter().any(|row| {
            row.get(key)
                .and_then(Value::as_f64)
                .is_some_and(|n| !n.is_nan())
        })
    }

    /// Per-row numeric values under `key`; `None` where the field is
    /// absent or not a number.
    pub fn numeric_values(&self, key: &str) -> Vec<Option<f64>> {
        self.0
            .iter()
            .map(|row| row.get(key).and_then(Value::as_f64))
            .collect()
    }

    /// Per-row display labels under `key` (category axis). Non-string
    /// values fall back to their JSON rendering, absent ones to "".
    pub fn labels(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .map(|row| match row.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(raw: serde_json::Value) -> RecordSet {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_columns_follow_first_row_order() {
        let set = rows(json!([
            {"Item": "Flour", "Current_Quantity": 3, "Avg_Weekly_Usage": 1.5},
            {"Avg_Weekly_Usage": 2.0, "Item": "Sugar", "Current_Quantity": 7}
        ]));
        assert_eq!(
            set.columns(),
            vec!["Item", "Current_Quantity", "Avg_Weekly_Usage"]
        );
    }

    #[test]
    fn test_columns_empty_set() {
        assert!(RecordSet::default().columns().is_empty());
        assert!(RecordSet::default().is_empty());
    }

    #[test]
    fn test_has_numeric_column_detects_single_row() {
        let set = rows(json!([
            {"Item": "Flour", "Forecasted_Ingredient_Demand": null},
            {"Item": "Sugar", "Forecasted_Ingredient_Demand": 4.5}
        ]));
        assert!(set.has_numeric_column(FORECASTED_DEMAND_KEY));
    }

    #[test]
    fn test_has_numeric_column_rejects_missing_and_null() {
        // pandas serializes missing demand as null; that column must not
        // produce a chart series
        let set = rows(json!([
            {"Item": "Flour", "Forecasted_Ingredient_Demand": null},
            {"Item": "Sugar"}
        ]));
        assert!(!set.has_numeric_column(FORECASTED_DEMAND_KEY));
    }

    #[test]
    fn test_has_numeric_column_rejects_strings() {
        let set = rows(json!([{"Item": "Flour", "Forecasted_Ingredient_Demand": "NaN"}]));
        assert!(!set.has_numeric_column(FORECASTED_DEMAND_KEY));
    }

    #[test]
    fn test_numeric_values_keep_row_positions() {
        let set = rows(json!([
            {"Item": "Flour", "Predicted_Quantity": 12.345},
            {"Item": "Sugar"},
            {"Item": "Salt", "Predicted_Quantity": 3}
        ]));
        assert_eq!(
            set.numeric_values(PREDICTED_QUANTITY_KEY),
            vec![Some(12.345), None, Some(3.0)]
        );
    }

    #[test]
    fn test_labels() {
        let set = rows(json!([
            {"Item": "Flour"},
            {"Item": 7},
            {"Unit": "kg"}
        ]));
        assert_eq!(set.labels(ITEM_KEY), vec!["Flour", "7", ""]);
    }

    #[test]
    fn test_roundtrip_is_transparent() {
        let raw = json!([{"Item": "Flour", "Predicted_Quantity": 12.0}]);
        let set: RecordSet = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(serde_json::to_value(&set).unwrap(), raw);
    }
}

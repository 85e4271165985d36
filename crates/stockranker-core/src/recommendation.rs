use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One scored stock entry returned by the ranking backend.
///
/// `id` and `score` are always present. Extra fields are backend-defined
/// and heterogeneous: the daily endpoint nests them under `extra_data`,
/// the upload endpoint flattens them next to `id`/`score`. Both forms are
/// accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecommendation {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<BTreeMap<String, Value>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl StockRecommendation {
    pub fn pe_ratio(&self) -> Option<f64> {
        self.number_field("P/E Ratio")
    }

    pub fn market_cap(&self) -> Option<f64> {
        self.number_field("Market Cap")
    }

    /// Value for the single "additional info" column of the upload table:
    /// the first extra field in lexicographic key order, with nested
    /// `extra_data` taking precedence over flattened extras. `None` when
    /// the item carries nothing beyond `id` and `score`.
    pub fn primary_extra(&self) -> Option<String> {
        self.extra_data
            .as_ref()
            .and_then(|m| m.iter().next())
            .or_else(|| self.extra.iter().next())
            .map(|(_, v)| display_value(v))
    }

    /// `primary_extra` with the dash the tables render for absent extras,
    /// so the fallback lives in one place.
    pub fn primary_extra_or_dash(&self) -> String {
        self.primary_extra().unwrap_or_else(|| "-".to_string())
    }

    fn number_field(&self, key: &str) -> Option<f64> {
        self.extra_data
            .as_ref()
            .and_then(|m| m.get(key))
            .or_else(|| self.extra.get(key))
            .and_then(Value::as_f64)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Backends send ids as either strings or numbers; normalize to a string.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "id must be a string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let item: StockRecommendation =
            serde_json::from_str(r#"{ "id": "AAPL", "score": 0.91 }"#).unwrap();
        assert_eq!(item.id, "AAPL");
        assert_eq!(item.score, 0.91);
        assert!(item.extra_data.is_none());
        assert!(item.extra.is_empty());
        assert_eq!(item.primary_extra(), None);
        assert_eq!(item.primary_extra_or_dash(), "-");
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let item: StockRecommendation =
            serde_json::from_str(r#"{ "id": 42, "score": 1.5 }"#).unwrap();
        assert_eq!(item.id, "42");
    }

    #[test]
    fn test_rejects_non_scalar_id() {
        let result: Result<StockRecommendation, _> =
            serde_json::from_str(r#"{ "id": ["AAPL"], "score": 1.0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_flattened_extras() {
        let item: StockRecommendation = serde_json::from_str(
            r#"{ "id": "MSFT", "score": 0.8, "Sector": "Tech", "Volume": 1200 }"#,
        )
        .unwrap();
        assert_eq!(item.extra.len(), 2);
        // BTreeMap order makes the picked field deterministic.
        assert_eq!(item.primary_extra().as_deref(), Some("Tech"));
    }

    #[test]
    fn test_nested_extra_data() {
        let item: StockRecommendation = serde_json::from_str(
            r#"{
                "id": "NVDA",
                "score": 0.97,
                "extra_data": { "P/E Ratio": 65.2, "Market Cap": 3200000000000.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(item.pe_ratio(), Some(65.2));
        assert_eq!(item.market_cap(), Some(3_200_000_000_000.0));
        assert_eq!(item.primary_extra().as_deref(), Some("3200000000000.0"));
    }

    #[test]
    fn test_nested_takes_precedence_over_flattened() {
        let item: StockRecommendation = serde_json::from_str(
            r#"{
                "id": "GOOG",
                "score": 0.5,
                "P/E Ratio": 10.0,
                "extra_data": { "P/E Ratio": 20.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(item.pe_ratio(), Some(20.0));
    }

    #[test]
    fn test_missing_ratio_fields() {
        let item: StockRecommendation =
            serde_json::from_str(r#"{ "id": "TSLA", "score": 0.3 }"#).unwrap();
        assert_eq!(item.pe_ratio(), None);
        assert_eq!(item.market_cap(), None);
    }
}

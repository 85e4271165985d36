use crate::error::RankerError;
use crate::messages;
use crate::recommendation::StockRecommendation;

/// Mutually exclusive UI condition of a result view.
///
/// Exactly one case is active at any time; loading, error and results are
/// never tracked as independent flags, so stale combinations (a spinner
/// next to an old error, results under a fresh error) cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Nothing requested yet, or input changed since the last request.
    #[default]
    Idle,
    /// Exactly one request is in flight.
    Loading,
    /// The last request failed with a user-facing message.
    Error(String),
    /// The last request succeeded but returned nothing to show.
    /// Informational, not a failure.
    Empty(String),
    /// The last request succeeded; items are in backend rank order.
    Loaded(Vec<StockRecommendation>),
}

impl ViewState {
    /// Outcome of the CSV upload. An empty `top_10` stays `Loaded`; the
    /// upload table simply renders no rows.
    pub fn from_predict(result: Result<Vec<StockRecommendation>, RankerError>) -> Self {
        match result {
            Ok(items) => ViewState::Loaded(items),
            Err(e) => ViewState::Error(e.user_message(messages::UPLOAD_FAILED)),
        }
    }

    /// Outcome of the daily recommendation fetch. An empty list is a
    /// distinct informational state rather than an error.
    pub fn from_recommend(result: Result<Vec<StockRecommendation>, RankerError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => {
                ViewState::Empty(messages::NO_RECOMMENDATIONS.to_string())
            }
            Ok(items) => ViewState::Loaded(items),
            Err(e) => ViewState::Error(e.user_message(messages::FETCH_FAILED)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, score: f64) -> StockRecommendation {
        serde_json::from_value(serde_json::json!({ "id": id, "score": score })).unwrap()
    }

    #[test]
    fn test_predict_success() {
        let state = ViewState::from_predict(Ok(vec![item("AAPL", 0.91)]));
        let ViewState::Loaded(items) = state else {
            panic!("expected Loaded");
        };
        assert_eq!(items[0].id, "AAPL");
    }

    #[test]
    fn test_predict_empty_stays_loaded() {
        assert_eq!(ViewState::from_predict(Ok(vec![])), ViewState::Loaded(vec![]));
    }

    #[test]
    fn test_predict_backend_detail() {
        let state = ViewState::from_predict(Err(RankerError::Backend("invalid file".into())));
        assert_eq!(state, ViewState::Error("invalid file".to_string()));
    }

    #[test]
    fn test_predict_transport_fallback() {
        let state = ViewState::from_predict(Err(RankerError::Transport("timeout".into())));
        assert_eq!(state, ViewState::Error(messages::UPLOAD_FAILED.to_string()));
    }

    #[test]
    fn test_recommend_empty_is_informational() {
        let state = ViewState::from_recommend(Ok(vec![]));
        assert_eq!(state, ViewState::Empty(messages::NO_RECOMMENDATIONS.to_string()));
    }

    #[test]
    fn test_recommend_non_empty() {
        let state = ViewState::from_recommend(Ok(vec![item("NVDA", 0.97)]));
        assert!(matches!(state, ViewState::Loaded(ref items) if items.len() == 1));
    }

    #[test]
    fn test_recommend_transport_fallback() {
        let state = ViewState::from_recommend(Err(RankerError::Transport("refused".into())));
        assert_eq!(state, ViewState::Error(messages::FETCH_FAILED.to_string()));
    }

    #[test]
    fn test_idempotent_for_identical_responses() {
        let body = r#"{ "top_k_recommendations": [{ "id": "AAPL", "score": 0.91 }] }"#;
        let first = ViewState::from_recommend(crate::response::decode_recommend(true, body));
        let second = ViewState::from_recommend(crate::response::decode_recommend(true, body));
        assert_eq!(first, second);
    }
}

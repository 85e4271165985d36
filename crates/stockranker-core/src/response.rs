//! Wire shapes of the two backend endpoints and their decoding rules.

use serde::{Deserialize, Serialize};

use crate::error::{RankerError, Result};
use crate::recommendation::StockRecommendation;

/// Success body of `POST /predict`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub top_10: Vec<StockRecommendation>,
}

/// Success body of `GET /recommend`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub top_k_recommendations: Vec<StockRecommendation>,
}

/// Error body both endpoints use. `detail` is optional; anything
/// unparseable is treated as having no detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Decodes the upload endpoint's response. `ok` is the HTTP-level success
/// flag; a missing `top_10` field decodes as an empty list.
pub fn decode_predict(ok: bool, body: &str) -> Result<Vec<StockRecommendation>> {
    if !ok {
        return Err(backend_error(body));
    }
    let resp: PredictResponse = serde_json::from_str(body)?;
    Ok(resp.top_10)
}

/// Decodes the daily recommendation endpoint's response.
pub fn decode_recommend(ok: bool, body: &str) -> Result<Vec<StockRecommendation>> {
    if !ok {
        return Err(backend_error(body));
    }
    let resp: RecommendResponse = serde_json::from_str(body)?;
    Ok(resp.top_k_recommendations)
}

fn backend_error(body: &str) -> RankerError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { detail: Some(detail) }) => RankerError::Backend(detail),
        _ => RankerError::Transport("error response without detail".to_string()),
    }
}

use gloo_net::http::Request;
use stockranker_core::{response, RankerError, StockRecommendation};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// Absolute address of the pre-computed daily recommendation service. The
/// upload endpoint is served from the app's own origin and stays relative.
const RECOMMEND_URL: &str = "http://localhost:8000/recommend";

/// POSTs the chosen CSV as a multipart form to the ranking endpoint and
/// returns the ranked `top_10` list.
pub async fn upload_csv(file: &File) -> Result<Vec<StockRecommendation>, RankerError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error)?;

    let resp = Request::post("/predict")
        .body(form)
        .map_err(|e| RankerError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| RankerError::Transport(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| RankerError::Transport(e.to_string()))?;
    response::decode_predict(resp.ok(), &body)
}

/// Fetches today's pre-computed `top_k_recommendations`.
pub async fn fetch_recommendations() -> Result<Vec<StockRecommendation>, RankerError> {
    let resp = Request::get(RECOMMEND_URL)
        .send()
        .await
        .map_err(|e| RankerError::Transport(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| RankerError::Transport(e.to_string()))?;
    response::decode_recommend(resp.ok(), &body)
}

fn js_error(value: JsValue) -> RankerError {
    RankerError::Transport(format!("{value:?}"))
}

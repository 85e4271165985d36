// Domain modules
pub mod error;
pub mod format;
pub mod messages;
pub mod recommendation;
pub mod response;
pub mod view_state;

pub use error::{RankerError, Result};
pub use format::{format_scaled, format_score};
pub use recommendation::StockRecommendation;
pub use response::{ErrorBody, PredictResponse, RecommendResponse};
pub use view_state::ViewState;

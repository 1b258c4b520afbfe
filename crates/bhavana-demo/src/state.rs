//! Shared application state

use bhavana_classifiers::SentimentPipeline;

/// State shared by all request handlers.
///
/// Holds only the prediction pipeline over the read-only artifact bundle;
/// requests are handled to completion with no history or session state.
#[derive(Clone)]
pub struct AppState {
    /// The prediction pipeline
    pub pipeline: SentimentPipeline,
}

impl AppState {
    pub fn new(pipeline: SentimentPipeline) -> Self {
        Self { pipeline }
    }
}

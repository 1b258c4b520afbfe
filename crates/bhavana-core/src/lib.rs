//! Bhavana Core
//!
//! Core types shared across the Bhavana sentiment demo components.
//!
//! This crate provides:
//! - The model-choice and sentiment category enums
//! - Prediction request/result types
//! - The total label-to-display mapping
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    present_label, ModelChoice, Prediction, PredictionRequest, Sentiment, SentimentDisplay,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{present_label, ModelChoice, Prediction, PredictionRequest, Sentiment};
}

//! Model trait and shared prediction contract

use crate::vectorizer::FeatureVector;
use bhavana_core::Result;

/// Trait for the pre-trained sentiment models.
///
/// Prediction is synchronous: a local dot-product pass over an
/// already-loaded artifact, expected to complete in bounded, small time.
/// Implementors return exactly one label from their class set.
pub trait SentimentModel: Send + Sync {
    /// Predict a label for the given feature vector
    fn predict(&self, features: &FeatureVector) -> Result<i32>;

    /// Get the model name
    fn name(&self) -> &str;

    /// The finite set of labels this model may emit
    fn classes(&self) -> &[i32];

    /// Dimension of the feature space the model was trained on
    fn n_features(&self) -> usize;
}

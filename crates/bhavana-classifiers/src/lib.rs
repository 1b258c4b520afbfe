//! Bhavana Classifiers
//!
//! Inference layer over the three pre-trained artifacts the demo runs on: a
//! fitted TF-IDF vectorizer, a linear support-vector model, and a
//! multinomial naive-Bayes model.
//!
//! Nothing here trains anything. Artifacts are deserialized from JSON files
//! produced elsewhere, loaded once per process, and shared read-only. The
//! whole prediction cycle is synchronous, local, in-process math.

pub mod artifacts;
pub mod config;
pub mod model;
pub mod naive_bayes;
pub mod pipeline;
pub mod svm;
pub mod vectorizer;

pub use artifacts::{ArtifactBundle, ArtifactLoader, ArtifactPaths};
pub use config::ArtifactConfig;
pub use model::SentimentModel;
pub use naive_bayes::MultinomialNbModel;
pub use pipeline::SentimentPipeline;
pub use svm::LinearSvmModel;
pub use vectorizer::{FeatureVector, TfidfVectorizer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::artifacts::{ArtifactBundle, ArtifactLoader, ArtifactPaths};
    pub use crate::model::SentimentModel;
    pub use crate::naive_bayes::MultinomialNbModel;
    pub use crate::pipeline::SentimentPipeline;
    pub use crate::svm::LinearSvmModel;
    pub use crate::vectorizer::{FeatureVector, TfidfVectorizer};
}

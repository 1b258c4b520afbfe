//! The single-step prediction pipeline

use crate::artifacts::{ArtifactBundle, ArtifactLoader};
use crate::model::SentimentModel;
use bhavana_core::{present_label, ModelChoice, Prediction, PredictionRequest, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Stateless request/response cycle over the loaded artifact bundle:
/// transform the text, predict with the chosen model, present the label.
///
/// Holds no per-request state; the bundle is shared read-only, so the
/// pipeline is cheap to clone and safe to call from concurrent handlers.
#[derive(Clone)]
pub struct SentimentPipeline {
    bundle: Arc<ArtifactBundle>,
}

impl SentimentPipeline {
    /// Build a pipeline over an already-loaded bundle
    pub fn new(bundle: Arc<ArtifactBundle>) -> Self {
        Self { bundle }
    }

    /// Build a pipeline from a loader, loading the bundle if needed
    pub fn from_loader(loader: &ArtifactLoader) -> Result<Self> {
        Ok(Self::new(loader.bundle()?))
    }

    /// The bundle this pipeline predicts with
    pub fn bundle(&self) -> &Arc<ArtifactBundle> {
        &self.bundle
    }

    /// Run one prediction cycle.
    ///
    /// Empty or whitespace-only text is accepted: it transforms to the zero
    /// vector and the model's intercept or prior decides the label.
    pub fn predict(&self, text: &str, choice: ModelChoice) -> Result<Prediction> {
        let start = Instant::now();

        let features = self.bundle.vectorizer.transform(text);
        let model = self.bundle.model(choice);
        let label = model.predict(&features)?;
        let display = present_label(label);

        let latency_us = start.elapsed().as_micros() as u64;
        debug!(
            model = model.name(),
            label,
            nnz = features.nnz(),
            latency_us,
            "prediction complete"
        );

        Ok(Prediction {
            label,
            display_text: display.text,
            sentiment: display.class,
            model: choice,
            latency_us,
        })
    }

    /// Run one prediction cycle from a request value
    pub fn predict_request(&self, request: &PredictionRequest) -> Result<Prediction> {
        self.predict(&request.text, request.model)
    }
}

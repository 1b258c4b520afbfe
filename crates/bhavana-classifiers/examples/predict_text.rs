//! Example: Loading artifacts and predicting sentiment
//!
//! This example shows how to:
//! 1. Point the loader at the three artifact files
//! 2. Build the prediction pipeline
//! 3. Predict with both models
//!
//! Run with: cargo run --example predict_text -- ./models

use bhavana_classifiers::{ArtifactLoader, ArtifactPaths, SentimentPipeline};
use bhavana_core::ModelChoice;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let models_dir = std::env::args().nth(1).unwrap_or_else(|| "./models".to_string());

    println!("Bhavana Prediction Example\n");
    println!("Loading artifacts from {models_dir}...");

    let loader = ArtifactLoader::new(ArtifactPaths::from_dir(&models_dir));
    let pipeline = SentimentPipeline::from_loader(&loader)?;

    let text = "यो फिल्म धेरै लामो र अल्छी लाग्दो छ";
    println!("Input: {text}\n");

    for choice in [ModelChoice::Svm, ModelChoice::NaiveBayes] {
        let prediction = pipeline.predict(text, choice)?;
        println!(
            "  {} -> {} (label {}, {}us)",
            choice.label(),
            prediction.display_text,
            prediction.label,
            prediction.latency_us
        );
    }

    Ok(())
}

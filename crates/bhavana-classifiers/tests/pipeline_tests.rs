//! End-to-end tests over on-disk artifact fixtures
//!
//! The fixtures are a miniature version of the real artifact set: a
//! ten-term Nepali vocabulary with IDF weights, a binary linear SVM, and a
//! binary multinomial naive-Bayes model sharing the same feature space.

use bhavana_classifiers::{
    ArtifactBundle, ArtifactLoader, ArtifactPaths, SentimentModel, SentimentPipeline,
};
use bhavana_core::{present_label, Error, ModelChoice, PredictionRequest, Sentiment};
use std::path::Path;
use std::sync::Arc;

const EXAMPLE_SENTENCE: &str = "यो फिल्म धेरै लामो र अल्छी लाग्दो छ";

fn vectorizer_json() -> serde_json::Value {
    serde_json::json!({
        "vocabulary": {
            "यो": 0,
            "फिल्म": 1,
            "धेरै": 2,
            "लामो": 3,
            "अल्छी": 4,
            "लाग्दो": 5,
            "राम्रो": 6,
            "मन": 7,
            "पर्यो": 8,
            "खराब": 9
        },
        "idf": [1.1, 1.2, 1.3, 1.6, 1.9, 1.8, 1.4, 1.5, 1.7, 1.6]
    })
}

fn svm_json() -> serde_json::Value {
    serde_json::json!({
        "classes": [-1, 1],
        "weights": [[0.1, 0.0, -0.2, -0.9, -1.2, -0.8, 1.4, 0.6, 0.7, -1.5]],
        "intercepts": [0.05]
    })
}

fn nb_json() -> serde_json::Value {
    serde_json::json!({
        "classes": [-1, 1],
        "class_log_prior": [-0.742, -0.646],
        "feature_log_prob": [
            [-2.5, -2.6, -2.4, -1.8, -1.5, -1.7, -3.5, -2.9, -3.0, -1.4],
            [-2.5, -2.5, -2.3, -3.2, -3.8, -3.4, -1.5, -2.2, -2.1, -3.9]
        ]
    })
}

fn write_fixtures(dir: &Path) -> ArtifactPaths {
    let paths = ArtifactPaths::from_dir(dir);
    std::fs::write(&paths.vectorizer, vectorizer_json().to_string()).unwrap();
    std::fs::write(&paths.svm, svm_json().to_string()).unwrap();
    std::fs::write(&paths.nb, nb_json().to_string()).unwrap();
    paths
}

fn fixture_pipeline(dir: &Path) -> SentimentPipeline {
    let paths = write_fixtures(dir);
    let bundle = Arc::new(ArtifactBundle::load(&paths).unwrap());
    SentimentPipeline::new(bundle)
}

#[test]
fn test_loader_returns_identity_equal_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ArtifactLoader::new(write_fixtures(dir.path()));

    let first = loader.bundle().unwrap();
    let second = loader.bundle().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_example_sentence_stays_in_label_space() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = fixture_pipeline(dir.path());

    let prediction = pipeline.predict(EXAMPLE_SENTENCE, ModelChoice::Svm).unwrap();

    let classes = pipeline.bundle().svm.classes();
    assert!(classes.contains(&prediction.label));

    let expected = present_label(prediction.label);
    assert_eq!(prediction.display_text, expected.text);
    assert_eq!(prediction.sentiment, expected.class);
}

#[test]
fn test_negative_review_under_both_models() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = fixture_pipeline(dir.path());

    for choice in ModelChoice::all() {
        let prediction = pipeline.predict(EXAMPLE_SENTENCE, choice).unwrap();
        assert_eq!(prediction.label, -1, "model {choice}");
        assert_eq!(prediction.display_text, "Negative");
        assert_eq!(prediction.sentiment, Sentiment::Negative);
    }
}

#[test]
fn test_positive_review_under_both_models() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = fixture_pipeline(dir.path());

    for choice in ModelChoice::all() {
        let prediction = pipeline.predict("राम्रो फिल्म मन पर्यो", choice).unwrap();
        assert_eq!(prediction.label, 1, "model {choice}");
        assert_eq!(prediction.display_text, "Positive");
        assert_eq!(prediction.sentiment, Sentiment::Positive);
    }
}

#[test]
fn test_empty_input_produces_a_defined_result() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = fixture_pipeline(dir.path());

    for text in ["", "   ", "\n"] {
        for choice in ModelChoice::all() {
            let prediction = pipeline.predict(text, choice).unwrap();
            let classes = pipeline.bundle().model(choice).classes();
            assert!(classes.contains(&prediction.label), "input {text:?}");
        }
    }
}

#[test]
fn test_out_of_vocabulary_input_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = fixture_pipeline(dir.path());

    // English text shares no tokens with the fitted Nepali vocabulary.
    let prediction = pipeline
        .predict("completely unrelated english text", ModelChoice::NaiveBayes)
        .unwrap();
    let expected = present_label(prediction.label);
    assert_eq!(prediction.display_text, expected.text);
}

#[test]
fn test_both_choices_round_trip_the_presenter() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = fixture_pipeline(dir.path());

    for choice in ModelChoice::all() {
        let request = PredictionRequest {
            text: EXAMPLE_SENTENCE.to_string(),
            model: choice,
        };
        let prediction = pipeline.predict_request(&request).unwrap();
        let expected = present_label(prediction.label);
        assert_eq!(prediction.display_text, expected.text);
        assert_eq!(prediction.sentiment, expected.class);
        assert_eq!(prediction.model, choice);
    }
}

#[test]
fn test_missing_artifact_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixtures(dir.path());
    std::fs::remove_file(&paths.svm).unwrap();

    let err = ArtifactBundle::load(&paths).unwrap_err();
    assert!(matches!(err, Error::Artifact(_)));
}

#[test]
fn test_corrupt_artifact_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixtures(dir.path());
    std::fs::write(&paths.nb, "{ truncated").unwrap();

    let err = ArtifactBundle::load(&paths).unwrap_err();
    assert!(matches!(err, Error::Artifact(_)));
}

#[test]
fn test_feature_space_mismatch_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_fixtures(dir.path());

    // A model trained on a different feature space than the vectorizer.
    let narrow_svm = serde_json::json!({
        "classes": [-1, 1],
        "weights": [[1.0, -1.0]],
        "intercepts": [0.0]
    });
    std::fs::write(&paths.svm, narrow_svm.to_string()).unwrap();

    let err = ArtifactBundle::load(&paths).unwrap_err();
    assert!(matches!(err, Error::Artifact(_)));
}

#[test]
fn test_loader_does_not_cache_failures() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::from_dir(dir.path());
    let loader = ArtifactLoader::new(paths);

    assert!(loader.bundle().is_err());

    write_fixtures(dir.path());
    assert!(loader.bundle().is_ok());
}

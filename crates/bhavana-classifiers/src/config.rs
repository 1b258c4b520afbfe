//! Configuration for artifact locations

use crate::artifacts::ArtifactPaths;
use bhavana_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Artifact location configuration (for YAML config files)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Path to the fitted TF-IDF vectorizer
    #[serde(default = "default_vectorizer_path")]
    pub vectorizer: PathBuf,

    /// Path to the trained SVM model
    #[serde(default = "default_svm_path")]
    pub svm: PathBuf,

    /// Path to the trained naive-Bayes model
    #[serde(default = "default_nb_path")]
    pub nb: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            vectorizer: default_vectorizer_path(),
            svm: default_svm_path(),
            nb: default_nb_path(),
        }
    }
}

impl ArtifactConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("invalid artifact config: {e}")))
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    /// Convert to loader paths
    pub fn to_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.vectorizer, &self.svm, &self.nb)
    }
}

fn default_vectorizer_path() -> PathBuf {
    PathBuf::from("./models/tfidf_vectorizer.json")
}

fn default_svm_path() -> PathBuf {
    PathBuf::from("./models/svm_model.json")
}

fn default_nb_path() -> PathBuf {
    PathBuf::from("./models/nb_model.json")
}

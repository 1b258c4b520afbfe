//! Artifact loading and the process-lifetime bundle

use crate::model::SentimentModel;
use crate::naive_bayes::MultinomialNbModel;
use crate::svm::LinearSvmModel;
use crate::vectorizer::TfidfVectorizer;
use bhavana_core::{Error, ModelChoice, Result};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Locations of the three serialized artifacts
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    /// Fitted TF-IDF vectorizer
    pub vectorizer: PathBuf,

    /// Trained linear SVM
    pub svm: PathBuf,

    /// Trained multinomial naive-Bayes model
    pub nb: PathBuf,
}

impl ArtifactPaths {
    /// Create paths from three explicit locations
    pub fn new(
        vectorizer: impl Into<PathBuf>,
        svm: impl Into<PathBuf>,
        nb: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vectorizer: vectorizer.into(),
            svm: svm.into(),
            nb: nb.into(),
        }
    }

    /// Conventional artifact filenames inside a models directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vectorizer: dir.join("tfidf_vectorizer.json"),
            svm: dir.join("svm_model.json"),
            nb: dir.join("nb_model.json"),
        }
    }
}

/// The immutable artifact triple the whole demo runs on.
///
/// Loaded once, never mutated, shared read-only for the process lifetime.
#[derive(Debug)]
pub struct ArtifactBundle {
    /// Fitted text-to-feature transformer
    pub vectorizer: TfidfVectorizer,

    /// Trained linear SVM
    pub svm: LinearSvmModel,

    /// Trained multinomial naive-Bayes model
    pub nb: MultinomialNbModel,
}

impl ArtifactBundle {
    /// Deserialize all three artifacts and cross-check their feature spaces.
    ///
    /// Any missing or corrupt artifact fails the whole load: prediction is
    /// impossible without the full triple, so there is no partial bundle and
    /// no fallback model.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let vectorizer = TfidfVectorizer::from_json(&read_artifact(&paths.vectorizer)?)?;
        info!(
            path = %paths.vectorizer.display(),
            n_features = vectorizer.n_features(),
            "loaded vectorizer artifact"
        );

        let svm = LinearSvmModel::from_json(&read_artifact(&paths.svm)?)?;
        info!(path = %paths.svm.display(), classes = ?svm.classes(), "loaded svm artifact");

        let nb = MultinomialNbModel::from_json(&read_artifact(&paths.nb)?)?;
        info!(path = %paths.nb.display(), classes = ?nb.classes(), "loaded naive-bayes artifact");

        for (name, n_features) in [("svm", svm.n_features()), ("naive-bayes", nb.n_features())] {
            if n_features != vectorizer.n_features() {
                return Err(Error::artifact(format!(
                    "{name} model expects {n_features} features but the vectorizer produces {}",
                    vectorizer.n_features()
                )));
            }
        }

        Ok(Self {
            vectorizer,
            svm,
            nb,
        })
    }

    /// The model behind a selector value
    pub fn model(&self, choice: ModelChoice) -> &dyn SentimentModel {
        match choice {
            ModelChoice::Svm => &self.svm,
            ModelChoice::NaiveBayes => &self.nb,
        }
    }
}

fn read_artifact(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::artifact(format!("failed to read {}: {e}", path.display())))
}

/// Memoizing loader for the artifact bundle.
///
/// The first `bundle()` call reads the artifacts from disk; every later call
/// returns a clone of the same `Arc`. The mutex is held across the load so
/// concurrent first access deserializes exactly once.
pub struct ArtifactLoader {
    paths: ArtifactPaths,
    cache: Mutex<Option<Arc<ArtifactBundle>>>,
}

impl ArtifactLoader {
    /// Create a loader for the given artifact locations
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            paths,
            cache: Mutex::new(None),
        }
    }

    /// The artifact locations this loader reads from
    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// Load the bundle, or return the already-loaded instance
    pub fn bundle(&self) -> Result<Arc<ArtifactBundle>> {
        let mut slot = self.cache.lock();
        if let Some(bundle) = slot.as_ref() {
            return Ok(Arc::clone(bundle));
        }

        let bundle = Arc::new(ArtifactBundle::load(&self.paths)?);
        *slot = Some(Arc::clone(&bundle));
        Ok(bundle)
    }
}

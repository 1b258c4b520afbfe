//! Multinomial naive-Bayes model artifact

use crate::model::SentimentModel;
use crate::vectorizer::FeatureVector;
use bhavana_core::{Error, Result};
use serde::Deserialize;

/// Serialized form of the trained model
#[derive(Debug, Deserialize)]
struct MultinomialNbData {
    classes: Vec<i32>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

/// Pre-trained multinomial naive-Bayes model.
///
/// The label is the class maximizing the joint log likelihood
/// `class_log_prior[c] + Σ x_i · feature_log_prob[c][i]`.
pub struct MultinomialNbModel {
    classes: Vec<i32>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl std::fmt::Debug for MultinomialNbModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultinomialNbModel")
            .field("classes", &self.classes)
            .field("n_features", &self.n_features())
            .finish()
    }
}

impl MultinomialNbModel {
    /// Assemble a model from its trained parts
    pub fn from_parts(
        classes: Vec<i32>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if classes.len() < 2 {
            return Err(Error::artifact("naive-bayes model needs at least two classes"));
        }
        if class_log_prior.len() != classes.len() || feature_log_prob.len() != classes.len() {
            return Err(Error::artifact(format!(
                "naive-bayes model with {} classes has {} priors and {} probability rows",
                classes.len(),
                class_log_prior.len(),
                feature_log_prob.len()
            )));
        }
        let dim = feature_log_prob[0].len();
        if feature_log_prob.iter().any(|row| row.len() != dim) {
            return Err(Error::artifact(
                "naive-bayes probability rows have inconsistent dimensions",
            ));
        }

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Deserialize a trained model from its JSON artifact
    pub fn from_json(json: &str) -> Result<Self> {
        let data: MultinomialNbData = serde_json::from_str(json)
            .map_err(|e| Error::artifact(format!("corrupt naive-bayes artifact: {e}")))?;
        Self::from_parts(data.classes, data.class_log_prior, data.feature_log_prob)
    }

    /// Joint log likelihood per class
    pub fn joint_log_likelihood(&self, features: &FeatureVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, row)| prior + features.dot(row))
            .collect()
    }
}

impl SentimentModel for MultinomialNbModel {
    fn predict(&self, features: &FeatureVector) -> Result<i32> {
        if features.dim() != self.n_features() {
            return Err(Error::classifier(format!(
                "feature vector has {} columns, naive-bayes model expects {}",
                features.dim(),
                self.n_features()
            )));
        }

        let jll = self.joint_log_likelihood(features);
        let best = jll
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        Ok(self.classes[best])
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }

    fn classes(&self) -> &[i32] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> MultinomialNbModel {
        // Column 0 is far likelier under class 1, column 1 under class -1.
        MultinomialNbModel::from_parts(
            vec![-1, 1],
            vec![(0.5f64).ln(), (0.5f64).ln()],
            vec![vec![-4.0, -0.5], vec![-0.5, -4.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_argmax_over_joint_log_likelihood() {
        let model = fixture();

        let positive = FeatureVector::new(vec![0], vec![1.0], 2).unwrap();
        assert_eq!(model.predict(&positive).unwrap(), 1);

        let negative = FeatureVector::new(vec![1], vec![1.0], 2).unwrap();
        assert_eq!(model.predict(&negative).unwrap(), -1);
    }

    #[test]
    fn test_zero_vector_falls_to_prior() {
        let model = MultinomialNbModel::from_parts(
            vec![-1, 1],
            vec![(0.7f64).ln(), (0.3f64).ln()],
            vec![vec![-1.0, -1.0], vec![-1.0, -1.0]],
        )
        .unwrap();

        let empty = FeatureVector::zeros(2);
        assert_eq!(model.predict(&empty).unwrap(), -1);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let model = fixture();
        let wrong = FeatureVector::zeros(5);
        assert!(model.predict(&wrong).is_err());
    }

    #[test]
    fn test_from_parts_validation() {
        assert!(MultinomialNbModel::from_parts(vec![1], vec![0.0], vec![vec![0.0]]).is_err());
        assert!(MultinomialNbModel::from_parts(
            vec![-1, 1],
            vec![0.0],
            vec![vec![0.0], vec![0.0]]
        )
        .is_err());
        assert!(MultinomialNbModel::from_parts(
            vec![-1, 1],
            vec![0.0, 0.0],
            vec![vec![0.0, 0.0], vec![0.0]]
        )
        .is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "classes": [-1, 1],
            "class_log_prior": [-0.7, -0.7],
            "feature_log_prob": [[-1.0, -2.0], [-2.0, -1.0]]
        }"#;
        let model = MultinomialNbModel::from_json(json).unwrap();
        assert_eq!(model.classes(), &[-1, 1]);
        assert_eq!(model.n_features(), 2);
    }
}

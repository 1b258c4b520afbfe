//! Linear support-vector model artifact

use crate::model::SentimentModel;
use crate::vectorizer::FeatureVector;
use bhavana_core::{Error, Result};
use serde::Deserialize;

/// Serialized form of the trained model
#[derive(Debug, Deserialize)]
struct LinearSvmData {
    classes: Vec<i32>,
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

/// Pre-trained linear SVM.
///
/// A binary model carries a single weight row and uses the sign of the
/// decision value; a model with more classes carries one row per class and
/// takes the argmax (one-vs-rest).
pub struct LinearSvmModel {
    classes: Vec<i32>,
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl std::fmt::Debug for LinearSvmModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearSvmModel")
            .field("classes", &self.classes)
            .field("n_features", &self.n_features())
            .finish()
    }
}

impl LinearSvmModel {
    /// Assemble a model from its trained parts
    pub fn from_parts(
        classes: Vec<i32>,
        weights: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) -> Result<Self> {
        if classes.len() < 2 {
            return Err(Error::artifact("svm model needs at least two classes"));
        }
        let expected_rows = if classes.len() == 2 { 1 } else { classes.len() };
        if weights.len() != expected_rows || intercepts.len() != expected_rows {
            return Err(Error::artifact(format!(
                "svm model with {} classes expects {expected_rows} weight row(s), \
                 found {} rows and {} intercepts",
                classes.len(),
                weights.len(),
                intercepts.len()
            )));
        }
        let dim = weights[0].len();
        if weights.iter().any(|row| row.len() != dim) {
            return Err(Error::artifact("svm weight rows have inconsistent dimensions"));
        }

        Ok(Self {
            classes,
            weights,
            intercepts,
        })
    }

    /// Deserialize a trained model from its JSON artifact
    pub fn from_json(json: &str) -> Result<Self> {
        let data: LinearSvmData = serde_json::from_str(json)
            .map_err(|e| Error::artifact(format!("corrupt svm artifact: {e}")))?;
        Self::from_parts(data.classes, data.weights, data.intercepts)
    }

    /// Raw decision value per weight row
    pub fn decision_values(&self, features: &FeatureVector) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| features.dot(row) + intercept)
            .collect()
    }
}

impl SentimentModel for LinearSvmModel {
    fn predict(&self, features: &FeatureVector) -> Result<i32> {
        if features.dim() != self.n_features() {
            return Err(Error::classifier(format!(
                "feature vector has {} columns, svm model expects {}",
                features.dim(),
                self.n_features()
            )));
        }

        let decisions = self.decision_values(features);
        let label = if self.classes.len() == 2 {
            if decisions[0] > 0.0 {
                self.classes[1]
            } else {
                self.classes[0]
            }
        } else {
            let best = decisions
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(idx, _)| idx)
                .unwrap_or(0);
            self.classes[best]
        };

        Ok(label)
    }

    fn name(&self) -> &str {
        "svm"
    }

    fn classes(&self) -> &[i32] {
        &self.classes
    }

    fn n_features(&self) -> usize {
        self.weights[0].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_fixture() -> LinearSvmModel {
        // Column 0 pushes positive, column 1 pushes negative.
        LinearSvmModel::from_parts(vec![-1, 1], vec![vec![1.0, -1.0, 0.0]], vec![-0.1]).unwrap()
    }

    #[test]
    fn test_binary_sign_rule() {
        let model = binary_fixture();

        let positive = FeatureVector::new(vec![0], vec![1.0], 3).unwrap();
        assert_eq!(model.predict(&positive).unwrap(), 1);

        let negative = FeatureVector::new(vec![1], vec![1.0], 3).unwrap();
        assert_eq!(model.predict(&negative).unwrap(), -1);
    }

    #[test]
    fn test_zero_vector_falls_to_intercept_side() {
        let model = binary_fixture();
        let empty = FeatureVector::zeros(3);

        // Decision value is the intercept alone (-0.1), so the first class wins.
        assert_eq!(model.predict(&empty).unwrap(), -1);
    }

    #[test]
    fn test_multiclass_argmax() {
        let model = LinearSvmModel::from_parts(
            vec![-1, 0, 1],
            vec![
                vec![1.0, 0.0],
                vec![0.0, 0.0],
                vec![0.0, 1.0],
            ],
            vec![0.0, 0.1, 0.0],
        )
        .unwrap();

        let x = FeatureVector::new(vec![1], vec![2.0], 2).unwrap();
        assert_eq!(model.predict(&x).unwrap(), 1);

        let tie_breaker = FeatureVector::zeros(2);
        assert_eq!(model.predict(&tie_breaker).unwrap(), 0);
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let model = binary_fixture();
        let wrong = FeatureVector::zeros(7);
        assert!(model.predict(&wrong).is_err());
    }

    #[test]
    fn test_from_parts_validation() {
        assert!(LinearSvmModel::from_parts(vec![1], vec![vec![1.0]], vec![0.0]).is_err());
        assert!(LinearSvmModel::from_parts(
            vec![-1, 1],
            vec![vec![1.0], vec![2.0]],
            vec![0.0, 0.0]
        )
        .is_err());
        assert!(LinearSvmModel::from_parts(
            vec![-1, 0, 1],
            vec![vec![1.0], vec![2.0, 3.0], vec![4.0]],
            vec![0.0, 0.0, 0.0]
        )
        .is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "classes": [-1, 1],
            "weights": [[0.5, -0.5]],
            "intercepts": [0.0]
        }"#;
        let model = LinearSvmModel::from_json(json).unwrap();
        assert_eq!(model.classes(), &[-1, 1]);
        assert_eq!(model.n_features(), 2);
    }
}

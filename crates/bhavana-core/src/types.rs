//! Core types for the sentiment prediction cycle

use serde::{Deserialize, Serialize};

/// Which of the two pre-trained models handles a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelChoice {
    /// Linear support-vector model
    Svm,
    /// Multinomial naive-Bayes model
    NaiveBayes,
}

impl ModelChoice {
    /// Stable identifier used in the API and config files
    pub fn id(&self) -> &'static str {
        match self {
            Self::Svm => "svm",
            Self::NaiveBayes => "naive_bayes",
        }
    }

    /// Human-facing label shown in the model selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Svm => "SVM",
            Self::NaiveBayes => "Naive Bayes",
        }
    }

    /// Both selectable models, in selector order
    pub fn all() -> [ModelChoice; 2] {
        [Self::Svm, Self::NaiveBayes]
    }
}

impl std::str::FromStr for ModelChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svm" => Ok(Self::Svm),
            "naive_bayes" | "naive-bayes" => Ok(Self::NaiveBayes),
            other => Err(format!(
                "unknown model '{other}' (expected 'svm' or 'naive-bayes')"
            )),
        }
    }
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display category for a predicted label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Unknown,
}

impl Sentiment {
    /// Map a raw classifier label to its display category.
    ///
    /// Total over all integers: -1 and 0 are negative, 1 is positive, and
    /// anything a future artifact might emit falls through to `Unknown`.
    pub fn from_label(label: i32) -> Self {
        match label {
            -1 | 0 => Self::Negative,
            1 => Self::Positive,
            _ => Self::Unknown,
        }
    }

    /// Fixed display string for this category
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Unknown => "Unknown Sentiment",
        }
    }
}

/// Presented form of a raw classifier label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentDisplay {
    /// Fixed display string
    pub text: &'static str,

    /// Display category (drives styling in the UI)
    pub class: Sentiment,
}

/// Map a raw classifier label to its display text and category
pub fn present_label(label: i32) -> SentimentDisplay {
    let class = Sentiment::from_label(label);
    SentimentDisplay {
        text: class.display_text(),
        class,
    }
}

/// A single user interaction: raw text plus a model choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Raw input text, expected to be Nepali
    pub text: String,

    /// Which model handles this request
    pub model: ModelChoice,
}

/// Result of one prediction cycle
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Raw label emitted by the classifier
    pub label: i32,

    /// Fixed display string for the label
    pub display_text: &'static str,

    /// Display category for the label
    #[serde(rename = "display_class")]
    pub sentiment: Sentiment,

    /// Model that produced the label
    pub model: ModelChoice,

    /// Latency in microseconds
    pub latency_us: u64,
}

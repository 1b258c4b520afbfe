//! Response types and fixed page content

use bhavana_core::ModelChoice;
use serde::Serialize;

/// Example sentence the text input is pre-populated with
pub const DEFAULT_EXAMPLE_TEXT: &str = "यो फिल्म धेरै लामो र अल्छी लाग्दो छ";

/// Sentence counts of the corpus the artifacts were trained on
pub const DATASET_POSITIVE_SENTENCES: u32 = 15_880;
pub const DATASET_NEGATIVE_SENTENCES: u32 = 14_408;

/// One entry in the model selector
#[derive(Debug, Clone, Serialize)]
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Training corpus summary shown on the page
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub positive_sentences: u32,
    pub negative_sentences: u32,
}

/// Everything the page needs to render the form
#[derive(Debug, Clone, Serialize)]
pub struct ModelsInfo {
    pub models: Vec<ModelOption>,
    pub default_text: &'static str,
    pub dataset: DatasetInfo,
}

impl ModelsInfo {
    /// The two fixed selector options plus page content
    pub fn current() -> Self {
        Self {
            models: ModelChoice::all()
                .into_iter()
                .map(|choice| ModelOption {
                    id: choice.id(),
                    label: choice.label(),
                })
                .collect(),
            default_text: DEFAULT_EXAMPLE_TEXT,
            dataset: DatasetInfo {
                positive_sentences: DATASET_POSITIVE_SENTENCES,
                negative_sentences: DATASET_NEGATIVE_SENTENCES,
            },
        }
    }
}

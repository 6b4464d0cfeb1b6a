use crate::error::AppError;
use serde::Deserialize;

/// One detected subject in a classification response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionItem {
    #[serde(rename = "class")]
    pub predicted_class: String,
    /// Percentages, already scaled to 0..=100 by the service.
    pub class_probability: Vec<f64>,
    /// Per-item label ordering, overriding the cached label set.
    #[serde(rename = "class_labels", default)]
    pub item_labels: Option<Vec<String>>,
}

pub trait ClassificationClient {
    fn classify(&self, encoded_image: &str) -> Result<Vec<PredictionItem>, AppError>;
}

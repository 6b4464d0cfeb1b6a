use crate::error::AppError;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// Defaults shown before the registry has answered.
    Placeholder,
    Registry,
    /// Defaults adopted after the registry failed.
    Fallback,
}

/// Ordered, unique class names. Written once when the registry resolves,
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    labels: Vec<String>,
    source: LabelSource,
}

impl LabelSet {
    pub fn placeholder(defaults: &[String]) -> Self {
        Self {
            labels: defaults.to_vec(),
            source: LabelSource::Placeholder,
        }
    }

    pub fn fallback(defaults: &[String]) -> Self {
        Self {
            labels: defaults.to_vec(),
            source: LabelSource::Fallback,
        }
    }

    pub fn from_registry(labels: Vec<String>) -> Result<Self, AppError> {
        if labels.is_empty() {
            return Err(AppError::Payload("label registry returned no labels".to_string()));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = labels.iter().find(|label| !seen.insert(label.as_str())) {
            return Err(AppError::Payload(format!(
                "label registry returned duplicate label {:?}",
                duplicate
            )));
        }

        Ok(Self {
            labels,
            source: LabelSource::Registry,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn source(&self) -> LabelSource {
        self.source
    }

    pub fn is_resolved(&self) -> bool {
        self.source != LabelSource::Placeholder
    }
}

use crate::error::AppError;

pub trait LabelRegistry {
    /// Ordered class names, index-aligned with the classifier's output.
    fn fetch_labels(&self) -> Result<Vec<String>, AppError>;
}

use crate::error::AppError;
use crate::label_registry::interface::LabelRegistry;

pub struct LabelRegistryFake {
    response: Result<Vec<String>, AppError>,
}

impl LabelRegistryFake {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            response: Ok(labels),
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl LabelRegistry for LabelRegistryFake {
    fn fetch_labels(&self) -> Result<Vec<String>, AppError> {
        self.response.clone()
    }
}

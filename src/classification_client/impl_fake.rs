use crate::classification_client::interface::{ClassificationClient, PredictionItem};
use crate::error::AppError;
use crate::file_intake::encoding::decode_data_url;
use rand::distr::{Distribution, Uniform};

pub enum FakeResponse {
    /// Random distribution over these labels, highest one predicted.
    Random(Vec<String>),
    Fixed(Result<Vec<PredictionItem>, AppError>),
}

pub struct ClassificationClientFake {
    response: FakeResponse,
}

impl ClassificationClientFake {
    pub fn new(response: FakeResponse) -> Self {
        Self { response }
    }
}

impl ClassificationClient for ClassificationClientFake {
    fn classify(&self, encoded_image: &str) -> Result<Vec<PredictionItem>, AppError> {
        decode_data_url(encoded_image).map_err(|e| AppError::Payload(e.detail()))?;

        match &self.response {
            FakeResponse::Fixed(response) => response.clone(),
            FakeResponse::Random(labels) => {
                let mut rng = rand::rng();
                let weight_dist =
                    Uniform::new(0.0, 1.0).map_err(|e| AppError::Payload(e.to_string()))?;

                let weights: Vec<f64> = labels.iter().map(|_| weight_dist.sample(&mut rng)).collect();
                let total: f64 = weights.iter().sum::<f64>().max(f64::EPSILON);
                let class_probability: Vec<f64> = weights
                    .iter()
                    .map(|w| (w / total * 10000.0).round() / 100.0)
                    .collect();

                let best = class_probability
                    .iter()
                    .enumerate()
                    .max_by(|a, b| a.1.total_cmp(b.1))
                    .map(|(index, _)| index)
                    .unwrap_or(0);

                Ok(vec![PredictionItem {
                    predicted_class: labels.get(best).cloned().unwrap_or_default(),
                    class_probability,
                    item_labels: Some(labels.clone()),
                }])
            }
        }
    }
}

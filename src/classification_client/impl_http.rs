use crate::classification_client::interface::{ClassificationClient, PredictionItem};
use crate::error::AppError;
use crate::library::logger::interface::Logger;
use reqwest::blocking::multipart::Form;
use serde::Deserialize;
use std::sync::Arc;

pub const IMAGE_FIELD: &str = "image_data";

pub struct ClassificationClientHttp {
    url: String,
    client: reqwest::blocking::Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassificationClientHttp {
    pub fn new(url: String, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            url,
            // Blocking clients default to a 30s deadline; classification is unbounded.
            client: reqwest::blocking::Client::builder()
                .timeout(None)
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
            logger: logger.with_namespace("classification_client"),
        }
    }
}

impl ClassificationClient for ClassificationClientHttp {
    fn classify(&self, encoded_image: &str) -> Result<Vec<PredictionItem>, AppError> {
        let _ = self.logger.info(&format!(
            "POST {} ({} bytes encoded)",
            self.url,
            encoded_image.len()
        ));

        let form = Form::new().text(IMAGE_FIELD, encoded_image.to_string());
        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Request {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| AppError::Network(format!("failed to read response body: {}", e)))?;

        let predictions = parse_outcome(&body)?;
        let _ = self
            .logger
            .info(&format!("received {} predictions", predictions.len()));
        Ok(predictions)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Message(String),
    Predictions(Vec<PredictionItem>),
}

/// Interprets a successful response body.
pub fn parse_outcome(body: &str) -> Result<Vec<PredictionItem>, AppError> {
    let response: ClassifyResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Payload(format!("unexpected classification response: {}", e)))?;

    match response {
        ClassifyResponse::Message(text) => Err(AppError::ServerMessage(text)),
        ClassifyResponse::Predictions(items) if items.is_empty() => {
            Err(AppError::Payload("empty prediction list".to_string()))
        }
        ClassifyResponse::Predictions(items) => Ok(items),
    }
}

use crate::error::AppError;
use crate::label_registry::interface::LabelRegistry;
use crate::library::logger::interface::Logger;
use reqwest::StatusCode;
use std::sync::Arc;

pub struct LabelRegistryHttp {
    url: String,
    client: reqwest::blocking::Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl LabelRegistryHttp {
    pub fn new(url: String, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            url,
            client: reqwest::blocking::Client::new(),
            logger: logger.with_namespace("label_registry"),
        }
    }
}

impl LabelRegistry for LabelRegistryHttp {
    fn fetch_labels(&self) -> Result<Vec<String>, AppError> {
        let _ = self.logger.info(&format!("GET {}", self.url));

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AppError::Network(format!("failed to read label response: {}", e)))?;

        let labels = parse_labels(status, &body)?;
        let _ = self
            .logger
            .info(&format!("received {} labels", labels.len()));
        Ok(labels)
    }
}

pub fn parse_labels(status: StatusCode, body: &str) -> Result<Vec<String>, AppError> {
    if !status.is_success() {
        return Err(AppError::Request {
            status: status.as_u16(),
        });
    }

    serde_json::from_str::<Vec<String>>(body)
        .map_err(|e| AppError::Payload(format!("label response is not a list of strings: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use chrono::Offset;

    #[test]
    fn test_parse_label_list() {
        let labels = parse_labels(StatusCode::OK, r#"["roger_federer","serena_williams"]"#).unwrap();
        assert_eq!(labels, vec!["roger_federer", "serena_williams"]);
    }

    #[test]
    fn test_parse_rejects_non_list() {
        assert!(matches!(
            parse_labels(StatusCode::OK, r#"{"labels":[]}"#),
            Err(AppError::Payload(_))
        ));
        assert!(matches!(
            parse_labels(StatusCode::OK, r#"[1, 2]"#),
            Err(AppError::Payload(_))
        ));
    }

    #[test]
    fn test_parse_reports_failure_status() {
        assert_eq!(
            parse_labels(StatusCode::INTERNAL_SERVER_ERROR, "[]"),
            Err(AppError::Request { status: 500 })
        );
    }

    #[test]
    fn test_unreachable_registry_is_network_error() {
        let logger = Arc::new(LoggerConsole::new(chrono::Utc.fix()));
        let registry = LabelRegistryHttp::new("http://127.0.0.1:1/class_labels".to_string(), logger);
        assert!(matches!(registry.fetch_labels(), Err(AppError::Network(_))));
    }
}

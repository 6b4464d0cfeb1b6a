use crate::classification_client::interface::ClassificationClient;
use crate::classifier_app::core::{Effect, Event};
use crate::file_intake::interface::{FileReader, ImageSubmission};
use crate::label_registry::interface::LabelRegistry;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    label_registry: Arc<dyn LabelRegistry + Send + Sync>,
    file_reader: Arc<dyn FileReader + Send + Sync>,
    classification_client: Arc<dyn ClassificationClient + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        label_registry: Arc<dyn LabelRegistry + Send + Sync>,
        file_reader: Arc<dyn FileReader + Send + Sync>,
        classification_client: Arc<dyn ClassificationClient + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            label_registry,
            file_reader,
            classification_client,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        let event = match effect {
            Effect::FetchLabels => {
                let labels = self.label_registry.fetch_labels();
                if let Err(e) = &labels {
                    let _ = self
                        .logger
                        .warn(&format!("label fetch failed: {}", e.detail()));
                }
                Event::LabelsFetchDone(labels)
            }
            Effect::ReadFile { ticket, file } => {
                let result = self
                    .file_reader
                    .read(&file)
                    .map(|bytes| ImageSubmission::new(&file, bytes));
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .error(&format!("reading {} failed: {}", file.name, e.detail()));
                }
                Event::FileReadDone { ticket, result }
            }
            Effect::Classify {
                ticket,
                encoded_image,
            } => {
                let result = self.classification_client.classify(&encoded_image);
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .error(&format!("classification failed: {}", e.detail()));
                }
                Event::ClassifyDone { ticket, result }
            }
        };

        if event_sender.send(event).is_err() {
            let _ = self.logger.warn("classifier loop stopped, dropping result");
        }
    }
}

use crate::classifier_app::core::Model;
use crate::label_registry::label_set::LabelSource;
use crate::library::logger::interface::Logger;
use crate::render_projector::project_roster;
use crate::view::interface::View;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    view: Arc<Mutex<dyn View + Send + Sync>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Render {
    pub fn new(
        view: Arc<Mutex<dyn View + Send + Sync>>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            view,
            logger: logger.with_namespace("render"),
        }
    }

    /// Full repaint from the model. Cards are always cleared before the
    /// current results are painted.
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut view = self
            .view
            .lock()
            .map_err(|e| format!("view lock poisoned: {}", e))?;

        view.set_status(&model.status.text, model.status.severity)?;

        if model.labels.source() == LabelSource::Fallback {
            let _ = self.logger.warn("showing default label roster");
        }
        view.show_roster(&project_roster(model.labels.labels()))?;

        view.show_submission(model.intake.submission().map(|s| s.as_ref()))?;
        view.set_classify_enabled(model.intake.can_classify())?;

        view.clear_results()?;
        if let Some(results) = &model.results {
            view.paint_results(results)?;
        }

        Ok(())
    }
}

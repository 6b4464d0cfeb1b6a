use crate::file_intake::interface::ImageSubmission;
use crate::render_projector::{RenderCard, RenderModel};
use crate::view::interface::{Severity, View};
use std::error::Error;

#[derive(Debug, Default)]
pub struct ViewFake {
    pub status: String,
    pub severity: Severity,
    pub roster: Vec<String>,
    pub roster_history: Vec<Vec<String>>,
    pub submission: Option<String>,
    pub classify_enabled: bool,
    pub cards: Vec<RenderCard>,
    pub clears: usize,
}

impl ViewFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for ViewFake {
    fn set_status(
        &mut self,
        text: &str,
        severity: Severity,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.status = text.to_string();
        self.severity = severity;
        Ok(())
    }

    fn show_roster(&mut self, names: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.roster_history.last().map(|last| last.as_slice()) != Some(names) {
            self.roster_history.push(names.to_vec());
        }
        self.roster = names.to_vec();
        Ok(())
    }

    fn show_submission(
        &mut self,
        submission: Option<&ImageSubmission>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.submission = submission.map(|s| s.file_name.clone());
        Ok(())
    }

    fn set_classify_enabled(&mut self, enabled: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.classify_enabled = enabled;
        Ok(())
    }

    fn clear_results(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.cards.clear();
        self.clears += 1;
        Ok(())
    }

    fn paint_results(&mut self, model: &RenderModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        if !self.cards.is_empty() {
            return Err("results painted without clearing previous cards".into());
        }
        self.cards = model.cards.clone();
        Ok(())
    }
}

use crate::file_intake::interface::ImageSubmission;
use crate::render_projector::RenderModel;
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Neutral,
    Ok,
    Error,
}

/// Paints whatever the classifier core hands it. Holds no pipeline state of
/// its own.
pub trait View: Send + Sync {
    fn set_status(&mut self, text: &str, severity: Severity)
        -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Pretty names of every class the service knows about.
    fn show_roster(&mut self, names: &[String]) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show_submission(
        &mut self,
        submission: Option<&ImageSubmission>,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn set_classify_enabled(&mut self, enabled: bool) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Removes previously painted cards. Always called before `paint_results`.
    fn clear_results(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn paint_results(&mut self, model: &RenderModel) -> Result<(), Box<dyn Error + Send + Sync>>;
}

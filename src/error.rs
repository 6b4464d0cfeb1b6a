use thiserror::Error;

/// Every failure the pipeline can surface to the user. Each variant renders
/// as the status line shown in the window.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Please drop an image file.")]
    Validation { media_type: String },

    #[error("Could not read the file.")]
    Read(String),

    #[error("Network error while classifying.")]
    Network(String),

    #[error("Request failed ({status}).")]
    Request { status: u16 },

    #[error("No prediction returned.")]
    Payload(String),

    #[error("{0}")]
    ServerMessage(String),
}

impl AppError {
    /// Underlying cause, for the log. The display string is kept user-facing.
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { media_type } => format!("rejected media type {:?}", media_type),
            AppError::Read(reason) | AppError::Network(reason) | AppError::Payload(reason) => {
                reason.clone()
            }
            AppError::Request { status } => format!("status {}", status),
            AppError::ServerMessage(text) => text.clone(),
        }
    }
}

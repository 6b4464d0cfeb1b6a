use crate::error::AppError;
use crate::file_intake::encoding::{declared_media_type, encode_data_url, is_image_media_type};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    Path(PathBuf),
    /// Payload already in memory, e.g. handed over by a drop event.
    Bytes(Arc<[u8]>),
}

/// A file the user dropped or picked, before it has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub source: FileSource,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self {
            media_type: declared_media_type(&name),
            name,
            source: FileSource::Path(path),
        }
    }

    pub fn from_bytes(name: &str, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.to_string(),
            media_type: declared_media_type(name),
            source: FileSource::Bytes(bytes),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if is_image_media_type(&self.media_type) {
            Ok(())
        } else {
            Err(AppError::Validation {
                media_type: self.media_type.clone(),
            })
        }
    }
}

/// The one image currently held for classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSubmission {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
    /// `data:` URL sent in the `image_data` form field.
    pub encoded: String,
}

impl ImageSubmission {
    pub fn new(file: &SelectedFile, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file.name.clone(),
            media_type: file.media_type.clone(),
            encoded: encode_data_url(&file.media_type, &bytes),
            bytes,
        }
    }
}

pub trait FileReader {
    fn read(&self, file: &SelectedFile) -> Result<Vec<u8>, AppError>;
}

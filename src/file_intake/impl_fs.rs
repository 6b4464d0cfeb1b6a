use crate::error::AppError;
use crate::file_intake::interface::{FileReader, FileSource, SelectedFile};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct FileReaderFs {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FileReaderFs {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_reader"),
        }
    }
}

impl FileReader for FileReaderFs {
    fn read(&self, file: &SelectedFile) -> Result<Vec<u8>, AppError> {
        let bytes = match &file.source {
            FileSource::Bytes(bytes) => bytes.to_vec(),
            FileSource::Path(path) => std::fs::read(path)
                .map_err(|e| AppError::Read(format!("{}: {}", path.display(), e)))?,
        };

        if bytes.is_empty() {
            return Err(AppError::Read(format!("{} is empty", file.name)));
        }

        let _ = self
            .logger
            .info(&format!("read {} ({} bytes)", file.name, bytes.len()));
        Ok(bytes)
    }
}

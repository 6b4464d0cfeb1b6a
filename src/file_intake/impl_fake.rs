use crate::error::AppError;
use crate::file_intake::interface::{FileReader, FileSource, SelectedFile};

/// Serves in-memory payloads and fails for anything on disk.
pub struct FileReaderFake {}

impl FileReaderFake {
    pub fn new() -> Self {
        Self {}
    }
}

impl FileReader for FileReaderFake {
    fn read(&self, file: &SelectedFile) -> Result<Vec<u8>, AppError> {
        match &file.source {
            FileSource::Bytes(bytes) => Ok(bytes.to_vec()),
            FileSource::Path(path) => Err(AppError::Read(format!(
                "fake reader cannot open {}",
                path.display()
            ))),
        }
    }
}

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read a schema document from disk as UTF-8 text.
pub(crate) fn read_schema_file(file_path: &Path) -> Result<String, ReadContentError> {
    let io_error = |err: std::io::Error| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        kind: err.kind(),
        message: err.to_string(),
    };

    if !std::fs::metadata(file_path).map_err(io_error)?.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(io_error)?;
    String::from_utf8(bytes).map_err(|err| ReadContentError::InvalidUtf8 {
        file_path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ReadContentError {
    #[error("Schema file {file_path:?} is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    InvalidUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("Failed to read schema file {file_path:?}: {message}")]
    Io {
        file_path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("Schema path {0:?} is not a file")]
    NotAFile(PathBuf),
}

//! Error types for the editor

use sitecraft_document::DocumentError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid project id: {0:?}")]
    InvalidProjectId(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not encode project {project}: {source}")]
    Encode {
        project: String,
        #[source]
        source: DocumentError,
    },

    #[error("Project {project} is not valid JSON: {source}")]
    Corrupt {
        project: String,
        #[source]
        source: DocumentError,
    },
}

impl StorageError {
    #[cfg(feature = "fs")]
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable code for surfacing the error in a UI
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidProjectId(_) => "invalid_project_id",
            Self::NotFound(_) => "project_not_found",
            Self::Io { .. } => "storage_io",
            Self::Encode { .. } => "encode_failed",
            Self::Corrupt { .. } => "corrupt_project",
        }
    }
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl EditorError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Document(err) => err.code(),
            Self::Storage(err) => err.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecraft_schema::BlockId;

    #[test]
    fn test_codes_pass_through() {
        let err = EditorError::from(DocumentError::BlockNotFound(BlockId::from("x")));
        assert_eq!(err.code(), "block_not_found");

        let err = EditorError::from(StorageError::NotFound("site".to_string()));
        assert_eq!(err.code(), "project_not_found");
        assert_eq!(err.to_string(), "Storage error: Project not found: site");
    }
}

//! # Project Storage
//!
//! Persistence adapter for document payloads. One project holds one page;
//! the store only sees the JSON payload, never the edit session.
//!
//! - [`FileStore`]: `<root>/<project>.json`, written atomically through a
//!   temp file in the same directory
//! - [`MemoryStore`]: in-process map, for tests and the wasm host

use crate::errors::StorageError;
use sitecraft_document::Document;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

#[cfg(feature = "fs")]
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
#[cfg(feature = "fs")]
use tempfile::NamedTempFile;
#[cfg(feature = "fs")]
use tracing::{debug, info};

const MAX_PROJECT_ID_LEN: usize = 64;

/// Where documents are loaded from and saved to
pub trait ProjectStore {
    fn load(&self, project_id: &str) -> Result<Document, StorageError>;

    fn save(&self, project_id: &str, document: &Document) -> Result<(), StorageError>;

    fn exists(&self, project_id: &str) -> Result<bool, StorageError>;

    /// Stored project ids, sorted
    fn list(&self) -> Result<Vec<String>, StorageError>;
}

/// Project ids become file names, so only `[A-Za-z0-9_-]` is allowed
pub fn validate_project_id(project_id: &str) -> Result<(), StorageError> {
    let valid = !project_id.is_empty()
        && project_id.len() <= MAX_PROJECT_ID_LEN
        && project_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidProjectId(project_id.to_string()))
    }
}

fn encode(project_id: &str, document: &Document) -> Result<String, StorageError> {
    document
        .to_json_pretty()
        .map_err(|source| StorageError::Encode {
            project: project_id.to_string(),
            source,
        })
}

fn decode(project_id: &str, source: &str) -> Result<Document, StorageError> {
    Document::from_json(source).map_err(|source| StorageError::Corrupt {
        project: project_id.to_string(),
        source,
    })
}

/// Directory of `<project>.json` payloads
#[cfg(feature = "fs")]
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

#[cfg(feature = "fs")]
impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Payload path for a project
    pub fn path_for(&self, project_id: &str) -> Result<PathBuf, StorageError> {
        validate_project_id(project_id)?;
        Ok(self.root.join(format!("{}.json", project_id)))
    }
}

#[cfg(feature = "fs")]
impl ProjectStore for FileStore {
    fn load(&self, project_id: &str) -> Result<Document, StorageError> {
        let path = self.path_for(project_id)?;
        let source = fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(project_id.to_string()),
            _ => StorageError::io(&path, err),
        })?;

        let document = decode(project_id, &source)?;
        debug!(project = project_id, blocks = document.len(), "Loaded project");
        Ok(document)
    }

    fn save(&self, project_id: &str, document: &Document) -> Result<(), StorageError> {
        let path = self.path_for(project_id)?;
        let payload = encode(project_id, document)?;

        fs::create_dir_all(&self.root).map_err(|err| StorageError::io(&self.root, err))?;

        // Same directory as the target so the final rename stays on one filesystem
        let mut file =
            NamedTempFile::new_in(&self.root).map_err(|err| StorageError::io(&self.root, err))?;
        let temp_path = file.path().to_path_buf();
        file.write_all(payload.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|err| StorageError::io(&temp_path, err))?;
        file.persist(&path)
            .map_err(|err| StorageError::io(&path, err.error))?;

        info!(project = project_id, path = %path.display(), blocks = document.len(), "Saved project");
        Ok(())
    }

    fn exists(&self, project_id: &str) -> Result<bool, StorageError> {
        Ok(self.path_for(project_id)?.is_file())
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::io(&self.root, err)),
        };

        let mut projects = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| StorageError::io(&self.root, err))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if validate_project_id(stem).is_ok() {
                    projects.push(stem.to_string());
                }
            }
        }
        projects.sort();
        Ok(projects)
    }
}

/// In-process store keeping serialized payloads
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw payload as saved
    pub fn payload(&self, project_id: &str) -> Option<String> {
        self.projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(project_id)
            .cloned()
    }

    /// Store a raw payload, bypassing encoding
    pub fn insert_payload(&self, project_id: impl Into<String>, payload: impl Into<String>) {
        self.projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(project_id.into(), payload.into());
    }
}

impl ProjectStore for MemoryStore {
    fn load(&self, project_id: &str) -> Result<Document, StorageError> {
        validate_project_id(project_id)?;
        let source = self
            .payload(project_id)
            .ok_or_else(|| StorageError::NotFound(project_id.to_string()))?;
        decode(project_id, &source)
    }

    fn save(&self, project_id: &str, document: &Document) -> Result<(), StorageError> {
        validate_project_id(project_id)?;
        let payload = encode(project_id, document)?;
        self.insert_payload(project_id, payload);
        Ok(())
    }

    fn exists(&self, project_id: &str) -> Result<bool, StorageError> {
        validate_project_id(project_id)?;
        Ok(self.payload(project_id).is_some())
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .projects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect())
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::store::document::TrackerDocument;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where the tracker document lives between runs.
pub trait TrackerStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<TrackerDocument>, StoreError>;

    /// Replace the stored document with `doc`.
    fn save(&self, doc: &TrackerDocument) -> Result<(), StoreError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

impl<T: TrackerStore + ?Sized> TrackerStore for Arc<T> {
    fn load(&self) -> Result<Option<TrackerDocument>, StoreError> {
        (**self).load()
    }

    fn save(&self, doc: &TrackerDocument) -> Result<(), StoreError> {
        (**self).save(doc)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Pretty-printed JSON file, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TrackerStore for JsonFileStore {
    fn load(&self) -> Result<Option<TrackerDocument>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let f = fs::File::open(&self.path)?;
        let doc: TrackerDocument = serde_json::from_reader(std::io::BufReader::new(f))?;
        Ok(Some(doc))
    }

    fn save(&self, doc: &TrackerDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target, then rename over it.
        let temp = self.temp_path();
        let f = fs::File::create(&temp)?;
        serde_json::to_writer_pretty(&f, doc)?;
        f.sync_all()?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the document in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: Mutex<Option<TrackerDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document, as if it had been loaded from disk.
    pub fn with_document(doc: TrackerDocument) -> Self {
        Self {
            doc: Mutex::new(Some(doc)),
        }
    }

    /// The last saved document, if any.
    pub fn snapshot(&self) -> Option<TrackerDocument> {
        self.doc.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl TrackerStore for MemoryStore {
    fn load(&self) -> Result<Option<TrackerDocument>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, doc: &TrackerDocument) -> Result<(), StoreError> {
        *self.doc.lock().unwrap_or_else(|e| e.into_inner()) = Some(doc.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

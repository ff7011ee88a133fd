//! JSON document record store.
//!
//! Each collection lives in one whole-document JSON file inside a data
//! directory. Loads read and decode the full document; saves re-encode the
//! full collection and atomically replace the file. File access goes through
//! a `cap-std` directory handle, so adapters cannot escape the data directory.

mod accounts;
mod atomic_io;
mod comments;

use std::io;
use std::path::Path;
use std::sync::Arc;

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::ports::RecordStoreError;

pub use accounts::JsonAccountRepository;
pub use comments::JsonCommentRepository;

/// One JSON document inside a data directory.
#[derive(Debug)]
pub struct JsonDocument {
    dir: Dir,
    file_name: Utf8PathBuf,
    display_path: String,
}

impl JsonDocument {
    /// Open `file_name` inside `data_dir`, creating the directory if needed.
    ///
    /// The document itself is not touched until it is first read or written.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(data_dir: &Path, file_name: &str) -> Result<Self, RecordStoreError> {
        let display_path = data_dir.join(file_name).display().to_string();
        Dir::create_ambient_dir_all(data_dir, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(data_dir, ambient_authority()))
            .map(|dir| Self {
                dir,
                file_name: Utf8PathBuf::from(file_name),
                display_path: display_path.clone(),
            })
            .map_err(|err| RecordStoreError::io(display_path, err.to_string()))
    }

    /// Path used in logs and error messages.
    #[must_use]
    pub fn display_path(&self) -> &str {
        self.display_path.as_str()
    }

    /// Decode the document, or `None` when the file does not exist yet.
    pub(crate) fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, RecordStoreError> {
        let contents = match self.dir.read_to_string(self.file_name.as_std_path()) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RecordStoreError::io(&*self.display_path, err.to_string())),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|err| RecordStoreError::decode(&*self.display_path, err.to_string()))
    }

    /// Encode `value` as indented JSON and create the document unless it
    /// already exists. Returns `false` when another writer got there first.
    pub(crate) fn create<T: Serialize + ?Sized>(&self, value: &T) -> Result<bool, RecordStoreError> {
        let contents = encode(value)?;
        let created =
            atomic_io::create_atomic(&self.dir, &self.file_name, &self.display_path, &contents)?;
        if created {
            debug!(path = %self.display_path, bytes = contents.len(), "document created");
        }
        Ok(created)
    }

    /// Encode `value` as indented JSON and atomically replace the document.
    pub(crate) fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), RecordStoreError> {
        let contents = encode(value)?;
        atomic_io::write_atomic(&self.dir, &self.file_name, &self.display_path, &contents)?;
        debug!(path = %self.display_path, bytes = contents.len(), "document written");
        Ok(())
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, RecordStoreError> {
    serde_json::to_string_pretty(value).map_err(|err| RecordStoreError::encode(err.to_string()))
}

/// Run blocking document I/O off the async executor.
async fn blocking<T, F>(document: &Arc<JsonDocument>, op: F) -> Result<T, RecordStoreError>
where
    T: Send + 'static,
    F: FnOnce(&JsonDocument) -> Result<T, RecordStoreError> + Send + 'static,
{
    let document = Arc::clone(document);
    let display_path = document.display_path.clone();
    tokio::task::spawn_blocking(move || op(&document))
        .await
        .map_err(|err| RecordStoreError::io(display_path, format!("store task failed: {err}")))?
}

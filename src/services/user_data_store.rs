// Tabbrowser User Data Store
// Persists bookmarks, history and saved passwords as one JSON file.
// The whole record is rewritten after every bookmark or history change.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::types::errors::StoreError;
use crate::types::user_data::UserData;

/// Trait defining the user data store interface.
pub trait UserDataStoreTrait {
    fn load(&mut self) -> Result<&UserData, StoreError>;
    fn save(&self) -> Result<(), StoreError>;
    fn data(&self) -> &UserData;
    fn add_bookmark(&mut self, url: &str) -> Result<bool, StoreError>;
    fn record_visit(&mut self, url: &str) -> Result<(), StoreError>;
    fn get_path(&self) -> &Path;
    fn backup_path(&self) -> PathBuf;
}

/// JSON-file backed store holding the in-memory copy of [`UserData`].
pub struct UserDataStore {
    path: PathBuf,
    data: UserData,
    /// Set when the file exists but could not be read or moved aside.
    /// Saving then would destroy whatever it still holds.
    saves_blocked: bool,
}

impl UserDataStore {
    /// Creates a store for `path` with empty data. Call `load` to read the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: UserData::default(),
            saves_blocked: false,
        }
    }

    /// Moves an unparseable file to [`UserDataStoreTrait::backup_path`] so the
    /// next save starts a fresh file without losing the old one.
    fn set_aside(&mut self, parse_error: serde_json::Error) -> StoreError {
        let backup = self.backup_path();
        match fs::rename(&self.path, &backup) {
            Ok(()) => {
                warn!(backup = %backup.display(), "moved unreadable user data aside");
                StoreError::SerializationError(format!(
                    "Failed to parse {}: {}. The file was moved to {}",
                    self.path.display(),
                    parse_error,
                    backup.display()
                ))
            }
            Err(e) => {
                self.saves_blocked = true;
                StoreError::SerializationError(format!(
                    "Failed to parse {}: {}. It could not be moved aside ({}) and will not be overwritten",
                    self.path.display(),
                    parse_error,
                    e
                ))
            }
        }
    }
}

impl UserDataStoreTrait for UserDataStore {
    /// Reads the data file.
    ///
    /// A missing file yields empty data. A malformed file is renamed to the
    /// backup path and a serialization error is returned; the in-memory data
    /// stays empty. Any other read failure blocks saving for this session.
    fn load(&mut self) -> Result<&UserData, StoreError> {
        self.data = UserData::default();
        self.saves_blocked = false;

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no user data file, starting empty");
                return Ok(&self.data);
            }
            Err(e) => {
                self.saves_blocked = true;
                return Err(StoreError::IoError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        self.data = match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => return Err(self.set_aside(e)),
        };
        debug!(
            bookmarks = self.data.bookmarks.len(),
            history = self.data.history.len(),
            "loaded user data"
        );
        Ok(&self.data)
    }

    /// Overwrites the data file with the full in-memory record.
    fn save(&self) -> Result<(), StoreError> {
        if self.saves_blocked {
            return Err(StoreError::IoError(format!(
                "Not saving over unreadable {}",
                self.path.display()
            )));
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::IoError(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let json = serde_json::to_string(&self.data)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| {
            StoreError::IoError(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn data(&self) -> &UserData {
        &self.data
    }

    /// Appends `url` unless it is already bookmarked. Returns whether it was added.
    fn add_bookmark(&mut self, url: &str) -> Result<bool, StoreError> {
        if self.data.bookmarks.iter().any(|b| b == url) {
            return Ok(false);
        }
        self.data.bookmarks.push(url.to_string());
        self.save()?;
        Ok(true)
    }

    fn record_visit(&mut self, url: &str) -> Result<(), StoreError> {
        self.data.history.push(url.to_string());
        self.save()
    }

    fn get_path(&self) -> &Path {
        &self.path
    }

    /// `<data file>.bak`, next to the data file.
    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }
}

//! Download Manager for Tabbrowser.
//!
//! The engine performs the transfer; this keeps the in-memory list of accepted
//! downloads shown by the downloads dialog. Downloads are auto-accepted into
//! the downloads directory under the name the engine suggested. Same-named
//! downloads overwrite each other.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::download::{DownloadItem, DownloadStatus};
use crate::types::errors::DownloadError;

const FALLBACK_FILENAME: &str = "download";

/// Picks the file name for a download: the engine's suggestion, else the last
/// URL path segment, else a fixed fallback.
pub fn suggested_filename(url: &str, suggested: Option<&Path>) -> String {
    if let Some(name) = suggested
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
    {
        return name.to_string();
    }

    let path = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = path.split_once("://").map(|(_, rest)| rest).unwrap_or(path);
    match after_scheme.split_once('/') {
        Some((_, rest)) => rest
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_FILENAME)
            .to_string(),
        None => FALLBACK_FILENAME.to_string(),
    }
}

/// Destination path for an accepted download.
pub fn destination_for(downloads_dir: &Path, filename: &str) -> PathBuf {
    downloads_dir.join(filename)
}

/// Trait defining download management operations.
pub trait DownloadManagerTrait {
    fn register(&mut self, url: &str, filepath: &str) -> String;
    fn complete(&mut self, url: &str, filepath: Option<&str>, success: bool) -> Result<String, DownloadError>;
    fn list_downloads(&self) -> &[DownloadItem];
    fn get_downloads_dir(&self) -> &Path;
}

/// In-memory download list, oldest first.
pub struct DownloadManager {
    downloads_dir: PathBuf,
    downloads: Vec<DownloadItem>,
}

impl DownloadManager {
    pub fn new(downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            downloads_dir: downloads_dir.into(),
            downloads: Vec::new(),
        }
    }

    fn now_ts() -> i64 {
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs() as i64
    }
}

impl DownloadManagerTrait for DownloadManager {
    /// Records an accepted download. Returns its id.
    fn register(&mut self, url: &str, filepath: &str) -> String {
        let id = Uuid::new_v4().to_string();
        let filename = Path::new(filepath)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(filepath)
            .to_string();

        self.downloads.push(DownloadItem {
            id: id.clone(),
            url: url.to_string(),
            filename,
            filepath: filepath.to_string(),
            status: DownloadStatus::InProgress,
            progress: 0,
            started_at: Self::now_ts(),
            completed_at: None,
        });
        id
    }

    /// Finishes the most recent in-progress download of `url`.
    ///
    /// The engine may report the final path; when it does, it replaces the
    /// recorded one.
    fn complete(&mut self, url: &str, filepath: Option<&str>, success: bool) -> Result<String, DownloadError> {
        let item = self
            .downloads
            .iter_mut()
            .rev()
            .find(|d| d.url == url && d.status == DownloadStatus::InProgress)
            .ok_or_else(|| DownloadError::NotFound(url.to_string()))?;

        if let Some(path) = filepath {
            item.filepath = path.to_string();
        }
        if success {
            item.status = DownloadStatus::Completed;
            item.progress = 100;
        } else {
            item.status = DownloadStatus::Failed;
        }
        item.completed_at = Some(Self::now_ts());
        Ok(item.id.clone())
    }

    fn list_downloads(&self) -> &[DownloadItem] {
        &self.downloads
    }

    fn get_downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }
}

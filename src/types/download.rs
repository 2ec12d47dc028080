use serde::{Deserialize, Serialize};

/// Status of an accepted download.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DownloadStatus {
    InProgress,
    Completed,
    Failed,
}

/// A download accepted from one of the tabs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadItem {
    pub id: String,
    pub url: String,
    pub filename: String,
    pub filepath: String,
    pub status: DownloadStatus,
    /// Progress percentage, 0..=100.
    pub progress: u8,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}

// Tabbrowser platform paths
// Resolves the well-known user folders the browser writes into.
//
// `dirs` handles the per-OS lookup (XDG user dirs on Linux, Known Folders on
// Windows, the standard macOS locations). When a folder is unknown we fall
// back to the home directory, then to the current directory.

use std::path::{Path, PathBuf};

/// File name of the persisted bookmarks/history/passwords record.
pub const USER_DATA_FILE_NAME: &str = "user_data.json";

fn home_or_cwd() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the user's documents directory.
pub fn documents_dir() -> PathBuf {
    dirs::document_dir().unwrap_or_else(home_or_cwd)
}

/// Returns the user's downloads directory.
pub fn downloads_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(home_or_cwd)
}

/// Locations the browser reads from and writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct AppPaths {
    pub user_data_file: PathBuf,
    pub downloads_dir: PathBuf,
}

impl AppPaths {
    /// Paths under the platform's documents and downloads folders.
    pub fn platform_default() -> Self {
        Self {
            user_data_file: documents_dir().join(USER_DATA_FILE_NAME),
            downloads_dir: downloads_dir(),
        }
    }

    /// Both the data file and downloads rooted in `dir`. Used by tests and the demo.
    pub fn rooted_at(dir: &Path) -> Self {
        Self {
            user_data_file: dir.join(USER_DATA_FILE_NAME),
            downloads_dir: dir.join("downloads"),
        }
    }
}

// Tabbrowser state managers
// Managers handle in-memory stateful collections: tabs and downloads.

pub mod download_manager;
pub mod tab_manager;

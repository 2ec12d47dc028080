use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::{Tab, DEFAULT_TAB_LABEL};

/// Maximum number of title characters shown in the tab strip.
pub const TAB_LABEL_MAX_CHARS: usize = 15;

/// Builds the tab strip label for a page title.
///
/// Titles longer than [`TAB_LABEL_MAX_CHARS`] characters are cut and get a
/// trailing `...`; shorter titles are shown as-is.
pub fn label_for_title(title: &str) -> String {
    let mut chars = title.chars();
    let head: String = chars.by_ref().take(TAB_LABEL_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn add_tab(&mut self, url: &str, label: Option<&str>, ad_filter: bool) -> usize;
    fn close_tab(&mut self, index: usize) -> Result<bool, TabError>;
    fn switch_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn current_tab(&self) -> Option<&Tab>;
    fn get_tab(&self, index: usize) -> Option<&Tab>;
    fn find_by_id(&self, tab_id: &str) -> Option<&Tab>;
    fn index_of(&self, tab_id: &str) -> Option<usize>;
    fn get_all_tabs(&self) -> &[Tab];
    fn tab_count(&self) -> usize;
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn update_page_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
    fn set_tab_label(&mut self, tab_id: &str, label: &str) -> Result<(), TabError>;
}

/// In-memory, ordered tab list with one active tab.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_mut(&mut self, tab_id: &str) -> Result<&mut Tab, TabError> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Appends a tab and makes it active. Returns its index.
    fn add_tab(&mut self, url: &str, label: Option<&str>, ad_filter: bool) -> usize {
        let id = Uuid::new_v4().to_string();
        self.tabs.push(Tab {
            id: id.clone(),
            url: url.to_string(),
            label: label.unwrap_or(DEFAULT_TAB_LABEL).to_string(),
            page_title: String::new(),
            ad_filter,
            created_at: Self::now(),
        });
        self.active_tab_id = Some(id);
        self.tabs.len() - 1
    }

    /// Closes the tab at `index`.
    ///
    /// Returns `Ok(false)` without doing anything when it is the only tab.
    /// If the active tab is closed, the tab that slides into its position
    /// becomes active, or the new last tab when it was rightmost.
    fn close_tab(&mut self, index: usize) -> Result<bool, TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        if self.tabs.len() == 1 {
            return Ok(false);
        }

        let removed = self.tabs.remove(index);
        if self.active_tab_id.as_deref() == Some(removed.id.as_str()) {
            let next = index.min(self.tabs.len() - 1);
            self.active_tab_id = Some(self.tabs[next].id.clone());
        }
        Ok(true)
    }

    fn switch_tab(&mut self, index: usize) -> Result<(), TabError> {
        let tab = self.tabs.get(index).ok_or(TabError::InvalidIndex(index))?;
        self.active_tab_id = Some(tab.id.clone());
        Ok(())
    }

    fn current_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn get_tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    fn find_by_id(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn index_of(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Records the tab's new URL. A different URL drops the previous page's
    /// title so it is never applied to the new page.
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        let tab = self.find_mut(tab_id)?;
        if tab.url != url {
            tab.url = url.to_string();
            tab.page_title.clear();
        }
        Ok(())
    }

    fn update_page_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        self.find_mut(tab_id)?.page_title = title.to_string();
        Ok(())
    }

    fn set_tab_label(&mut self, tab_id: &str, label: &str) -> Result<(), TabError> {
        self.find_mut(tab_id)?.label = label.to_string();
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contents of `user_data.json`.
///
/// Absent keys load as empty collections. `passwords` is carried through
/// load/save untouched whatever its values look like; nothing in the browser
/// reads or writes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserData {
    #[serde(default)]
    pub bookmarks: Vec<String>,
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(default)]
    pub passwords: Map<String, Value>,
}

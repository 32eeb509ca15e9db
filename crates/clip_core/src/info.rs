//! Clip metadata record.

use serde::{Deserialize, Serialize};

/// Metadata record persisted next to a clip as an info task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipInfo {
    pub clip_id: String,
    pub title: String,
    pub link: String,
    pub format: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub main_filename: String,
    /// RFC 3339 creation time.
    pub created_at: String,
}

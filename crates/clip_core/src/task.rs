//! Task model handed to the executor: kind, filename and inline or remote content.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::ResourceCategory;

/// Role of a task in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaskKind {
    #[serde(rename = "mainFileTask")]
    MainDocument,
    #[serde(rename = "frameFileTask")]
    Frame,
    #[serde(rename = "styleFileTask")]
    Stylesheet,
    #[serde(rename = "titleFileTask")]
    Title,
    #[serde(rename = "infoFileTask")]
    Info,
    #[serde(rename = "imageFileTask")]
    Image,
    #[serde(rename = "audioFileTask")]
    Audio,
    #[serde(rename = "videoFileTask")]
    Video,
    #[serde(rename = "textTrackFileTask")]
    TextTrack,
    #[serde(rename = "fontFileTask")]
    Font,
    #[serde(rename = "miscFileTask")]
    Misc,
}

/// Kinds whose content is already in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    MainDocument,
    Frame,
    Stylesheet,
    Title,
    Info,
}

/// Kinds whose content has to be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteKind {
    Image,
    Audio,
    Video,
    TextTrack,
    Font,
    Misc,
}

impl From<InlineKind> for TaskKind {
    fn from(kind: InlineKind) -> Self {
        match kind {
            InlineKind::MainDocument => TaskKind::MainDocument,
            InlineKind::Frame => TaskKind::Frame,
            InlineKind::Stylesheet => TaskKind::Stylesheet,
            InlineKind::Title => TaskKind::Title,
            InlineKind::Info => TaskKind::Info,
        }
    }
}

impl From<RemoteKind> for TaskKind {
    fn from(kind: RemoteKind) -> Self {
        match kind {
            RemoteKind::Image => TaskKind::Image,
            RemoteKind::Audio => TaskKind::Audio,
            RemoteKind::Video => TaskKind::Video,
            RemoteKind::TextTrack => TaskKind::TextTrack,
            RemoteKind::Font => TaskKind::Font,
            RemoteKind::Misc => TaskKind::Misc,
        }
    }
}

impl From<ResourceCategory> for RemoteKind {
    fn from(category: ResourceCategory) -> Self {
        match category {
            ResourceCategory::Image => RemoteKind::Image,
            ResourceCategory::Audio => RemoteKind::Audio,
            ResourceCategory::Video => RemoteKind::Video,
            ResourceCategory::Misc => RemoteKind::Misc,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskKind::MainDocument => "main",
            TaskKind::Frame => "frame",
            TaskKind::Stylesheet => "stylesheet",
            TaskKind::Title => "title",
            TaskKind::Info => "info",
            TaskKind::Image => "image",
            TaskKind::Audio => "audio",
            TaskKind::Video => "video",
            TaskKind::TextTrack => "text track",
            TaskKind::Font => "font",
            TaskKind::Misc => "misc",
        };
        f.write_str(name)
    }
}

/// Payload of a task: literal text, or a fetch descriptor for the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TaskContent {
    #[serde(rename = "text")]
    Inline {
        #[serde(rename = "mimeType")]
        mime_type: String,
        text: String,
    },
    #[serde(rename = "url")]
    Remote {
        url: String,
        headers: BTreeMap<String, String>,
        #[serde(rename = "timeout")]
        timeout_secs: u32,
        #[serde(rename = "tries")]
        max_attempts: u32,
    },
}

/// One unit of archive content. Built only through [`crate::TaskFactory`];
/// the kind always agrees with the content mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    #[serde(rename = "taskType")]
    kind: TaskKind,
    #[serde(flatten)]
    content: TaskContent,
    filename: String,
    #[serde(rename = "clipId")]
    clip_id: String,
    #[serde(rename = "createdMs")]
    created_at_ms: u64,
}

impl Task {
    pub(crate) fn inline(
        kind: InlineKind,
        filename: String,
        mime_type: String,
        text: String,
        clip_id: String,
        created_at_ms: u64,
    ) -> Self {
        Self {
            kind: kind.into(),
            content: TaskContent::Inline { mime_type, text },
            filename,
            clip_id,
            created_at_ms,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn remote(
        kind: RemoteKind,
        filename: String,
        url: String,
        headers: BTreeMap<String, String>,
        timeout_secs: u32,
        max_attempts: u32,
        clip_id: String,
        created_at_ms: u64,
    ) -> Self {
        Self {
            kind: kind.into(),
            content: TaskContent::Remote {
                url,
                headers,
                timeout_secs,
                max_attempts,
            },
            filename,
            clip_id,
            created_at_ms,
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn content(&self) -> &TaskContent {
        &self.content
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn clip_id(&self) -> &str {
        &self.clip_id
    }

    pub fn created_at_ms(&self) -> u64 {
        self.created_at_ms
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.content, TaskContent::Inline { .. })
    }

    pub fn is_remote(&self) -> bool {
        !self.is_inline()
    }

    /// Source URL of a remote task.
    pub fn url(&self) -> Option<&str> {
        match &self.content {
            TaskContent::Remote { url, .. } => Some(url),
            TaskContent::Inline { .. } => None,
        }
    }

    /// Executor JSON shape of this task.
    pub fn to_json(&self) -> serde_json::Value {
        // Only string keys and plain values; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

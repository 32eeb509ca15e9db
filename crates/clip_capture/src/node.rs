//! Embed node access for the capture policy.

use std::collections::BTreeMap;

/// Read-only view of an embed node. Attribute lookup may need to wait on the
/// document host, hence async.
#[async_trait::async_trait]
pub trait EmbedNode: Send + Sync {
    async fn attr(&self, name: &str) -> Option<String>;
}

/// Node captured ahead of time, with its attributes held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnapshotNode {
    pub name: String,
    pub attrs: BTreeMap<String, String>,
}

impl SnapshotNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

#[async_trait::async_trait]
impl EmbedNode for SnapshotNode {
    async fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }
}

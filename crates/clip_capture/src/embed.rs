//! Per-node embed capture policy.

use std::sync::Arc;

use clip_core::{asset_filename, classify, RequestParams, Task, TaskFactory};
use clip_logging::clip_debug;
use url::Url;

use crate::{
    CaptureConfig, EmbedCaptureMode, EmbedNode, FilterMatcher, SessionRequestParams,
    SignatureFilter, IMAGES_FILTER,
};

/// Result of capturing one embed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedOutcome {
    /// Archive the resource; the node's `src` should be rewritten to `src`.
    Keep { task: Task, src: String },
    /// The node must not keep its resource reference in the archive.
    Remove,
}

impl EmbedOutcome {
    pub fn task(&self) -> Option<&Task> {
        match self {
            EmbedOutcome::Keep { task, .. } => Some(task),
            EmbedOutcome::Remove => None,
        }
    }

    pub fn is_remove(&self) -> bool {
        matches!(self, EmbedOutcome::Remove)
    }
}

/// Everything one capture needs to turn embed nodes into tasks.
pub struct CaptureSession {
    clip_id: String,
    base_url: Option<Url>,
    config: CaptureConfig,
    factory: TaskFactory,
    request_params: Arc<dyn RequestParams>,
    matcher: Arc<dyn FilterMatcher>,
}

impl CaptureSession {
    /// Session with the system clock, [`SessionRequestParams`] and [`SignatureFilter`].
    /// `page_url` is the document's base URL; relative `src` values resolve against it.
    pub fn new(clip_id: impl Into<String>, page_url: &str, config: CaptureConfig) -> Self {
        let request_params = Arc::new(SessionRequestParams::new(&config, page_url));
        Self {
            clip_id: clip_id.into(),
            base_url: Url::parse(page_url).ok(),
            config,
            factory: TaskFactory::default(),
            request_params,
            matcher: Arc::new(SignatureFilter),
        }
    }

    pub fn with_factory(mut self, factory: TaskFactory) -> Self {
        self.factory = factory;
        self
    }

    pub fn with_request_params(mut self, request_params: Arc<dyn RequestParams>) -> Self {
        self.request_params = request_params;
        self
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn FilterMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn clip_id(&self) -> &str {
        &self.clip_id
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn factory(&self) -> &TaskFactory {
        &self.factory
    }

    /// Decide what happens to an embed node under the configured mode.
    pub async fn capture_embed(&self, node: &dyn EmbedNode) -> EmbedOutcome {
        match self.config.embed_capture_mode {
            EmbedCaptureMode::SaveImage => self.capture_filtered(node, IMAGES_FILTER).await,
            EmbedCaptureMode::Remove => {
                clip_debug!("embed capture mode is remove, dropping node");
                EmbedOutcome::Remove
            }
            EmbedCaptureMode::SaveAll => self.capture_save_all(node).await,
            EmbedCaptureMode::Filter => {
                self.capture_filtered(node, &self.config.embed_filter).await
            }
        }
    }

    async fn capture_filtered(&self, node: &dyn EmbedNode, filter: &str) -> EmbedOutcome {
        let src = node.attr("src").await;
        let type_attr = node.attr("type").await;
        if self
            .matcher
            .is_match(filter, src.as_deref(), type_attr.as_deref())
        {
            self.keep(src, type_attr)
        } else {
            clip_debug!("embed {:?} does not match filter {:?}, removing", src, filter);
            EmbedOutcome::Remove
        }
    }

    async fn capture_save_all(&self, node: &dyn EmbedNode) -> EmbedOutcome {
        let src = node.attr("src").await;
        let type_attr = node.attr("type").await;
        self.keep(src, type_attr)
    }

    // A missing or blank src still yields a task; the URL stays empty and the
    // filename extension comes from the type attribute or the default.
    fn keep(&self, src: Option<String>, type_attr: Option<String>) -> EmbedOutcome {
        let src = src.as_deref().map(str::trim).unwrap_or_default();
        let type_attr = type_attr.as_deref().map(str::trim).filter(|t| !t.is_empty());
        let url = if src.is_empty() {
            clip_debug!("embed has no src, keeping with an empty url");
            String::new()
        } else {
            self.resolve_url(src)
        };
        let category = classify(Some(&url), type_attr);
        let filename = asset_filename(&self.config.asset_folder, &url, type_attr);
        let task = self.factory.resource(
            category,
            filename.clone(),
            &url,
            &self.clip_id,
            self.request_params.as_ref(),
        );
        EmbedOutcome::Keep {
            task,
            src: filename,
        }
    }

    fn resolve_url(&self, src: &str) -> String {
        match &self.base_url {
            Some(base) => base
                .join(src)
                .map(String::from)
                .unwrap_or_else(|_| src.to_string()),
            None => Url::parse(src)
                .map(String::from)
                .unwrap_or_else(|_| src.to_string()),
        }
    }
}

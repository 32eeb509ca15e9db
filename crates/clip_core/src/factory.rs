//! Task construction with clip id, creation time and request settings filled in.

use std::collections::BTreeMap;
use std::sync::Arc;

use clip_logging::clip_trace;

use crate::{
    classify, Clock, ClipInfo, InlineKind, RemoteKind, ResourceCategory, SystemClock, Task,
};

/// Per-session request settings handed to the fetch executor with every remote task.
pub trait RequestParams: Send + Sync {
    /// Headers to send when fetching `url` (Referer, User-Agent and so on).
    fn headers(&self, url: &str) -> BTreeMap<String, String>;
    /// Per-attempt timeout in seconds.
    fn timeout_secs(&self) -> u32;
    /// Total fetch attempts, including the first.
    fn max_attempts(&self) -> u32;
}

/// Same headers for every URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRequestParams {
    pub headers: BTreeMap<String, String>,
    pub timeout_secs: u32,
    pub max_attempts: u32,
}

impl Default for StaticRequestParams {
    fn default() -> Self {
        Self {
            headers: BTreeMap::new(),
            timeout_secs: 40,
            max_attempts: 3,
        }
    }
}

impl RequestParams for StaticRequestParams {
    fn headers(&self, _url: &str) -> BTreeMap<String, String> {
        self.headers.clone()
    }

    fn timeout_secs(&self) -> u32 {
        self.timeout_secs
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

/// Builds tasks stamped from an injected clock.
#[derive(Clone)]
pub struct TaskFactory {
    clock: Arc<dyn Clock>,
}

impl Default for TaskFactory {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }
}

impl TaskFactory {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn inline(
        &self,
        kind: InlineKind,
        filename: impl Into<String>,
        text: impl Into<String>,
        mime_type: impl Into<String>,
        clip_id: impl Into<String>,
    ) -> Task {
        let task = Task::inline(
            kind,
            filename.into(),
            mime_type.into(),
            text.into(),
            clip_id.into(),
            self.clock.now_ms(),
        );
        clip_trace!("created {} task {}", task.kind(), task.filename());
        task
    }

    /// Remote task whose headers, timeout and attempt budget come from `params`.
    /// Timeout and attempts are kept at one or more.
    pub fn remote(
        &self,
        kind: RemoteKind,
        filename: impl Into<String>,
        url: impl Into<String>,
        clip_id: impl Into<String>,
        params: &dyn RequestParams,
    ) -> Task {
        let url = url.into();
        let headers = params.headers(&url);
        let task = Task::remote(
            kind,
            filename.into(),
            url,
            headers,
            params.timeout_secs().max(1),
            params.max_attempts().max(1),
            clip_id.into(),
            self.clock.now_ms(),
        );
        clip_trace!("created {} task {}", task.kind(), task.filename());
        task
    }

    pub fn main_html(
        &self,
        filename: impl Into<String>,
        html: impl Into<String>,
        clip_id: &str,
    ) -> Task {
        self.inline(InlineKind::MainDocument, filename, html, "text/html", clip_id)
    }

    pub fn main_markdown(
        &self,
        filename: impl Into<String>,
        markdown: impl Into<String>,
        clip_id: &str,
    ) -> Task {
        self.inline(InlineKind::MainDocument, filename, markdown, "text/markdown", clip_id)
    }

    pub fn frame(
        &self,
        filename: impl Into<String>,
        html: impl Into<String>,
        clip_id: &str,
    ) -> Task {
        self.inline(InlineKind::Frame, filename, html, "text/html", clip_id)
    }

    pub fn stylesheet(
        &self,
        filename: impl Into<String>,
        css: impl Into<String>,
        clip_id: &str,
    ) -> Task {
        self.inline(InlineKind::Stylesheet, filename, css, "text/css", clip_id)
    }

    /// Placeholder file whose name carries the clip title.
    pub fn title(&self, filename: impl Into<String>, clip_id: &str) -> Task {
        self.inline(InlineKind::Title, filename, "-", "text/plain", clip_id)
    }

    /// JSON metadata record; the clip id is taken from the record.
    pub fn info(&self, filename: impl Into<String>, info: &ClipInfo) -> Task {
        let text = serde_json::to_string(info).unwrap_or_else(|_| String::from("{}"));
        self.inline(
            InlineKind::Info,
            filename,
            text,
            "application/json",
            info.clip_id.as_str(),
        )
    }

    pub fn image(
        &self,
        filename: impl Into<String>,
        url: &str,
        clip_id: &str,
        params: &dyn RequestParams,
    ) -> Task {
        self.remote(RemoteKind::Image, filename, url, clip_id, params)
    }

    pub fn audio(
        &self,
        filename: impl Into<String>,
        url: &str,
        clip_id: &str,
        params: &dyn RequestParams,
    ) -> Task {
        self.remote(RemoteKind::Audio, filename, url, clip_id, params)
    }

    pub fn video(
        &self,
        filename: impl Into<String>,
        url: &str,
        clip_id: &str,
        params: &dyn RequestParams,
    ) -> Task {
        self.remote(RemoteKind::Video, filename, url, clip_id, params)
    }

    pub fn text_track(
        &self,
        filename: impl Into<String>,
        url: &str,
        clip_id: &str,
        params: &dyn RequestParams,
    ) -> Task {
        self.remote(RemoteKind::TextTrack, filename, url, clip_id, params)
    }

    pub fn font(
        &self,
        filename: impl Into<String>,
        url: &str,
        clip_id: &str,
        params: &dyn RequestParams,
    ) -> Task {
        self.remote(RemoteKind::Font, filename, url, clip_id, params)
    }

    pub fn misc(
        &self,
        filename: impl Into<String>,
        url: &str,
        clip_id: &str,
        params: &dyn RequestParams,
    ) -> Task {
        self.remote(RemoteKind::Misc, filename, url, clip_id, params)
    }

    /// Remote task whose kind follows `category`.
    pub fn resource(
        &self,
        category: ResourceCategory,
        filename: impl Into<String>,
        url: &str,
        clip_id: &str,
        params: &dyn RequestParams,
    ) -> Task {
        self.remote(category.into(), filename, url, clip_id, params)
    }

    /// Remote task classified from `url` and an optional declared MIME type.
    pub fn classified(
        &self,
        filename: impl Into<String>,
        url: &str,
        mime_type: Option<&str>,
        clip_id: &str,
        params: &dyn RequestParams,
    ) -> Task {
        self.resource(classify(Some(url), mime_type), filename, url, clip_id, params)
    }
}

//! Per-session request headers, timeout and retry budget.

use std::collections::BTreeMap;

use clip_core::RequestParams;
use url::Url;

use crate::{CaptureConfig, ReferrerPolicy};

/// Request settings for one capture session: Referer per the configured
/// policy, optional User-Agent, and the configured timeout and attempt budget.
#[derive(Debug, Clone)]
pub struct SessionRequestParams {
    page_url: Option<Url>,
    referrer_policy: ReferrerPolicy,
    user_agent: Option<String>,
    timeout_secs: u32,
    max_attempts: u32,
}

impl SessionRequestParams {
    /// An unparseable `page_url` yields params that never send a Referer.
    pub fn new(config: &CaptureConfig, page_url: &str) -> Self {
        let page_url = Url::parse(page_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"));
        Self {
            page_url,
            referrer_policy: config.referrer_policy,
            user_agent: config.user_agent.clone(),
            timeout_secs: config.request_timeout_secs,
            max_attempts: config.request_max_attempts,
        }
    }

    fn referer(&self, target: &str) -> Option<String> {
        let page = self.page_url.as_ref()?;
        let target = Url::parse(target).ok()?;
        let origin = page.origin();
        let origin_only = origin
            .is_tuple()
            .then(|| format!("{}/", origin.ascii_serialization()));
        match self.referrer_policy {
            ReferrerPolicy::NoReferrer => None,
            ReferrerPolicy::Origin => origin_only,
            ReferrerPolicy::UnsafeUrl => Some(stripped_url(page)),
            ReferrerPolicy::StrictOriginWhenCrossOrigin => {
                if page.scheme() == "https" && target.scheme() != "https" {
                    None
                } else if target.origin() == origin {
                    Some(stripped_url(page))
                } else {
                    origin_only
                }
            }
        }
    }
}

fn stripped_url(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.to_string()
}

impl RequestParams for SessionRequestParams {
    fn headers(&self, url: &str) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        if let Some(referer) = self.referer(url) {
            headers.insert("Referer".to_string(), referer);
        }
        if let Some(user_agent) = &self.user_agent {
            headers.insert("User-Agent".to_string(), user_agent.clone());
        }
        headers
    }

    fn timeout_secs(&self) -> u32 {
        self.timeout_secs
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

//! Keep/drop decision for embed resources against a filter expression.

use clip_core::{classify, extension_to_mime_type, url_extension, ResourceCategory};
use clip_logging::clip_debug;
use regex::Regex;

/// Matches any resource recognised as an image.
pub const IMAGES_FILTER: &str = "<images>";
/// Matches any resource recognised as audio.
pub const AUDIOS_FILTER: &str = "<audios>";
/// Matches any resource recognised as video.
pub const VIDEOS_FILTER: &str = "<videos>";

/// Decides whether a resource satisfies a filter expression.
/// `true` keeps the resource, `false` drops it.
pub trait FilterMatcher: Send + Sync {
    fn is_match(&self, filter: &str, src: Option<&str>, type_attr: Option<&str>) -> bool;
}

/// Signature-based matcher.
///
/// The expression is a list separated by commas or newlines. Each item is
/// `<images>`/`<audios>`/`<videos>`, a MIME pattern (`image/png`, `video/*`),
/// a `/regex/` tested against the URL, or a bare extension (`svg`, `.swf`).
/// Spaces inside an item are kept, so a regex may contain them.
/// The resource matches if any item does.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureFilter;

impl FilterMatcher for SignatureFilter {
    fn is_match(&self, filter: &str, src: Option<&str>, type_attr: Option<&str>) -> bool {
        let src = src.map(str::trim).filter(|s| !s.is_empty());
        let type_attr = type_attr.map(str::trim).filter(|s| !s.is_empty());
        filter
            .split([',', '\n'])
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .any(|item| item_matches(item, src, type_attr))
    }
}

fn item_matches(item: &str, src: Option<&str>, type_attr: Option<&str>) -> bool {
    match item {
        IMAGES_FILTER => in_category(ResourceCategory::Image, src, type_attr),
        AUDIOS_FILTER => in_category(ResourceCategory::Audio, src, type_attr),
        VIDEOS_FILTER => in_category(ResourceCategory::Video, src, type_attr),
        _ if item.len() > 2 && item.starts_with('/') && item.ends_with('/') => {
            regex_matches(&item[1..item.len() - 1], src)
        }
        _ if item.contains('/') => mime_pattern_matches(item, src, type_attr),
        _ if item.starts_with('<') => {
            clip_debug!("unknown filter alias {}", item);
            false
        }
        _ => extension_matches(item, src),
    }
}

// Either signal is enough; the declared type does not veto the URL here.
fn in_category(category: ResourceCategory, src: Option<&str>, type_attr: Option<&str>) -> bool {
    classify(None, type_attr) == category || classify(src, None) == category
}

fn regex_matches(pattern: &str, src: Option<&str>) -> bool {
    let Some(src) = src else {
        return false;
    };
    match Regex::new(pattern) {
        Ok(re) => re.is_match(src),
        Err(err) => {
            clip_debug!("invalid filter regex {:?}: {}", pattern, err);
            false
        }
    }
}

fn mime_pattern_matches(pattern: &str, src: Option<&str>, type_attr: Option<&str>) -> bool {
    let from_url = src
        .and_then(url_extension)
        .and_then(|ext| extension_to_mime_type(&ext));
    [type_attr, from_url]
        .into_iter()
        .flatten()
        .any(|mime| mime_matches(pattern, mime))
}

fn mime_matches(pattern: &str, mime: &str) -> bool {
    let mime = mime.split(';').next().unwrap_or(mime).trim();
    match pattern.strip_suffix("/*") {
        Some(primary) => mime
            .split_once('/')
            .is_some_and(|(p, _)| p.eq_ignore_ascii_case(primary)),
        None => mime.eq_ignore_ascii_case(pattern),
    }
}

fn extension_matches(item: &str, src: Option<&str>) -> bool {
    let wanted = item.trim_start_matches('*').trim_start_matches('.');
    src.and_then(url_extension)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
}

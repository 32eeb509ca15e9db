//! Resource classification by declared MIME type and URL extension.

use url::Url;

/// Coarse resource class used to pick the kind of a remote task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    Image,
    Audio,
    Video,
    Misc,
}

/// Extension to MIME table. When several extensions share a MIME type the
/// first one listed is the canonical extension for that type.
const EXTENSION_MIME_TYPES: &[(&str, &str)] = &[
    // images
    ("png", "image/png"),
    ("apng", "image/apng"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpe", "image/jpeg"),
    ("jfif", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("svg", "image/svg+xml"),
    ("bmp", "image/bmp"),
    ("ico", "image/x-icon"),
    ("cur", "image/x-icon"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    // audio
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("oga", "audio/ogg"),
    ("ogg", "audio/ogg"),
    ("opus", "audio/opus"),
    ("m4a", "audio/mp4"),
    ("aac", "audio/aac"),
    ("flac", "audio/flac"),
    ("weba", "audio/webm"),
    ("mid", "audio/midi"),
    ("midi", "audio/midi"),
    // video
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("webm", "video/webm"),
    ("ogv", "video/ogg"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("mkv", "video/x-matroska"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("3gp", "video/3gpp"),
    ("flv", "video/x-flv"),
    // fonts
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("eot", "application/vnd.ms-fontobject"),
    // text and documents
    ("html", "text/html"),
    ("htm", "text/html"),
    ("xhtml", "application/xhtml+xml"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("json", "application/json"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("xml", "application/xml"),
    ("vtt", "text/vtt"),
    ("srt", "application/x-subrip"),
    ("pdf", "application/pdf"),
    ("swf", "application/x-shockwave-flash"),
    ("zip", "application/zip"),
];

/// Classify a resource. The declared MIME type wins over the URL extension;
/// anything undecidable is `Misc`.
pub fn classify(url: Option<&str>, mime_type: Option<&str>) -> ResourceCategory {
    mime_type
        .and_then(category_of_mime_type)
        .or_else(|| {
            url.and_then(url_extension)
                .and_then(|ext| extension_to_mime_type(&ext))
                .and_then(category_of_mime_type)
        })
        .unwrap_or(ResourceCategory::Misc)
}

/// File extension for a resource, preferring the URL over the MIME type.
/// Returns `None` when neither is conclusive; callers pick their own default.
pub fn resolve_file_extension(url: Option<&str>, mime_type: Option<&str>) -> Option<String> {
    url.and_then(url_extension).or_else(|| {
        mime_type
            .and_then(mime_type_to_extension)
            .map(str::to_string)
    })
}

/// Lowercased extension (without the dot) of the last path segment of `url`.
///
/// Relative references are accepted; query and fragment are ignored.
pub fn url_extension(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) if parsed.cannot_be_a_base() => return None,
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            url[..end].to_string()
        }
    };
    let last_segment = path.rsplit(['/', '\\']).next()?;
    let dot_index = last_segment.rfind('.')?;
    let ext = &last_segment[dot_index + 1..];
    if ext.is_empty() || ext.len() > 10 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Canonical MIME type for an extension (with or without a leading dot).
pub fn extension_to_mime_type(ext: &str) -> Option<&'static str> {
    let ext = ext.trim_start_matches('.');
    EXTENSION_MIME_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
}

/// Canonical extension for a MIME type. Parameters such as `; charset=` are ignored.
pub fn mime_type_to_extension(mime_type: &str) -> Option<&'static str> {
    let essence = mime_essence(mime_type);
    EXTENSION_MIME_TYPES
        .iter()
        .find(|(_, mime)| mime.eq_ignore_ascii_case(essence))
        .map(|(ext, _)| *ext)
}

pub(crate) fn mime_essence(mime_type: &str) -> &str {
    mime_type.split(';').next().unwrap_or(mime_type).trim()
}

fn category_of_mime_type(mime_type: &str) -> Option<ResourceCategory> {
    let essence = mime_essence(mime_type).to_ascii_lowercase();
    let (primary, _) = essence.split_once('/')?;
    match primary {
        "image" => Some(ResourceCategory::Image),
        "audio" => Some(ResourceCategory::Audio),
        "video" => Some(ResourceCategory::Video),
        _ => None,
    }
}

use clip_core::{
    classify, extension_to_mime_type, mime_type_to_extension, resolve_file_extension,
    ResourceCategory,
};

#[test]
fn classify_uses_mime_prefix() {
    assert_eq!(classify(None, Some("image/svg+xml")), ResourceCategory::Image);
    assert_eq!(classify(None, Some("audio/ogg")), ResourceCategory::Audio);
    assert_eq!(classify(None, Some("video/mp4; codecs=avc1")), ResourceCategory::Video);
    assert_eq!(classify(None, Some("application/pdf")), ResourceCategory::Misc);
}

#[test]
fn classify_falls_back_to_url_extension() {
    assert_eq!(
        classify(Some("https://cdn.example/a/b/photo.JPG?w=200"), None),
        ResourceCategory::Image
    );
    assert_eq!(
        classify(Some("https://cdn.example/track.mp3"), Some("application/octet-stream")),
        ResourceCategory::Audio
    );
    assert_eq!(classify(Some("movie.webm"), None), ResourceCategory::Video);
}

#[test]
fn declared_mime_wins_over_url_extension() {
    assert_eq!(
        classify(Some("https://cdn.example/clip.mp4"), Some("image/gif")),
        ResourceCategory::Image
    );
    assert_eq!(
        classify(Some("https://cdn.example/pic.png"), Some("audio/mpeg")),
        ResourceCategory::Audio
    );
}

#[test]
fn classify_is_total() {
    let urls = [
        None,
        Some(""),
        Some("::not a url::"),
        Some("https://a.example/"),
        Some("https://a.example/file.unknownext"),
        Some("data:image/png;base64,AAAA"),
        Some("file.swf"),
    ];
    let mimes = [None, Some(""), Some("image"), Some("nonsense"), Some("font/woff2")];
    for url in urls {
        for mime in mimes {
            assert_eq!(classify(url, mime), ResourceCategory::Misc, "{url:?} {mime:?}");
        }
    }
}

#[test]
fn file_extension_prefers_url() {
    assert_eq!(
        resolve_file_extension(Some("https://a.example/x.gif"), Some("image/png")).as_deref(),
        Some("gif")
    );
    assert_eq!(
        resolve_file_extension(Some("https://a.example/x"), Some("image/png")).as_deref(),
        Some("png")
    );
    assert_eq!(resolve_file_extension(Some("https://a.example/x"), None), None);
    assert_eq!(resolve_file_extension(None, Some("application/unknown")), None);
}

#[test]
fn tables_round_trip_canonical_entries() {
    assert_eq!(extension_to_mime_type("woff2"), Some("font/woff2"));
    assert_eq!(mime_type_to_extension("video/mp4"), Some("mp4"));
    assert_eq!(mime_type_to_extension("text/html; charset=utf-8"), Some("html"));
    assert_eq!(extension_to_mime_type("nope"), None);
}

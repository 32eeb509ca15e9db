use clip_capture::{FilterMatcher, SignatureFilter, AUDIOS_FILTER, IMAGES_FILTER, VIDEOS_FILTER};

fn matches(filter: &str, src: Option<&str>, type_attr: Option<&str>) -> bool {
    SignatureFilter.is_match(filter, src, type_attr)
}

#[test]
fn images_alias_matches_url_or_type() {
    assert!(matches(IMAGES_FILTER, Some("https://a.example/x.PNG"), None));
    assert!(matches(IMAGES_FILTER, Some("https://a.example/render"), Some("image/webp")));
    assert!(matches(IMAGES_FILTER, Some("https://a.example/x.jpg"), Some("text/plain")));
    assert!(!matches(IMAGES_FILTER, Some("https://a.example/x.swf"), None));
    assert!(!matches(IMAGES_FILTER, None, None));
}

#[test]
fn audio_and_video_aliases() {
    assert!(matches(AUDIOS_FILTER, Some("song.mp3"), None));
    assert!(matches(VIDEOS_FILTER, None, Some("video/mp4")));
    assert!(!matches(VIDEOS_FILTER, Some("song.mp3"), None));
}

#[test]
fn lists_match_any_item() {
    let filter = "<videos>,\n svg, image/gif";
    assert!(matches(filter, Some("a.svg"), None));
    assert!(matches(filter, Some("a"), Some("image/gif")));
    assert!(matches(filter, Some("a.mov"), None));
    assert!(!matches(filter, Some("a.png"), Some("image/png")));
}

#[test]
fn regex_items_keep_inner_spaces() {
    let filter = "/cover art\\.(png|jpe?g)$/, swf";
    assert!(matches(filter, Some("https://a.example/cover art.png"), None));
    assert!(matches(filter, Some("https://a.example/movie.swf"), None));
    assert!(!matches(filter, Some("https://a.example/art.png"), None));
    assert!(!matches(filter, Some("https://a.example/cover"), None));
}

#[test]
fn mime_wildcard_against_url_derived_type() {
    assert!(matches("audio/*", Some("https://a.example/a.flac"), None));
    assert!(matches("audio/*", Some("https://a.example/a.flac"), Some("video/ogg")));
    assert!(!matches("audio/*", Some("https://a.example/a.ogv"), Some("video/ogg")));
}

#[test]
fn empty_and_unknown_items_match_nothing() {
    assert!(!matches("", Some("a.png"), Some("image/png")));
    assert!(!matches(" , \n", Some("a.png"), None));
    assert!(!matches("<fonts>", Some("a.woff"), None));
    assert!(!matches("/[unclosed/", Some("a.png"), None));
}

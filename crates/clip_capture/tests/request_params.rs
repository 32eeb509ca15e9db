use clip_capture::{CaptureConfig, ReferrerPolicy, SessionRequestParams};
use clip_core::RequestParams;

fn params(policy: ReferrerPolicy, page: &str) -> SessionRequestParams {
    let config = CaptureConfig {
        referrer_policy: policy,
        ..CaptureConfig::default()
    };
    SessionRequestParams::new(&config, page)
}

fn referer(params: &SessionRequestParams, url: &str) -> Option<String> {
    params.headers(url).get("Referer").cloned()
}

const PAGE: &str = "https://user:pw@news.example/world/story.html?id=1#comments";

#[test]
fn strict_origin_when_cross_origin() {
    let p = params(ReferrerPolicy::StrictOriginWhenCrossOrigin, PAGE);
    assert_eq!(
        referer(&p, "https://news.example/img/a.png").as_deref(),
        Some("https://news.example/world/story.html?id=1")
    );
    assert_eq!(
        referer(&p, "https://cdn.example/a.png").as_deref(),
        Some("https://news.example/")
    );
    assert_eq!(referer(&p, "http://news.example/a.png"), None);
}

#[test]
fn other_policies() {
    let p = params(ReferrerPolicy::NoReferrer, PAGE);
    assert_eq!(referer(&p, "https://news.example/a.png"), None);

    let p = params(ReferrerPolicy::Origin, PAGE);
    assert_eq!(
        referer(&p, "https://news.example/a.png").as_deref(),
        Some("https://news.example/")
    );

    let p = params(ReferrerPolicy::UnsafeUrl, PAGE);
    assert_eq!(
        referer(&p, "http://other.example/a.png").as_deref(),
        Some("https://news.example/world/story.html?id=1")
    );
}

#[test]
fn unparseable_urls_degrade_to_no_referer() {
    let p = params(ReferrerPolicy::UnsafeUrl, "not a page");
    assert_eq!(referer(&p, "https://a.example/x.png"), None);

    let p = params(ReferrerPolicy::UnsafeUrl, PAGE);
    assert_eq!(referer(&p, "relative/x.png"), None);
    assert!(p.headers("relative/x.png").is_empty());
}

#[test]
fn budget_comes_from_config() {
    let config = CaptureConfig {
        request_timeout_secs: 9,
        request_max_attempts: 2,
        user_agent: Some("ua".to_string()),
        ..CaptureConfig::default()
    };
    let p = SessionRequestParams::new(&config, PAGE);
    assert_eq!(p.timeout_secs(), 9);
    assert_eq!(p.max_attempts(), 2);
    assert_eq!(p.headers("x").get("User-Agent").map(String::as_str), Some("ua"));
}

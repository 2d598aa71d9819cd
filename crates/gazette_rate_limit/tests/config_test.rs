use gazette_rate_limit::{GazetteConfig, LimitConfig};
use std::io::Write;

#[test]
fn bundled_defaults_load() {
    let config = GazetteConfig::load().unwrap();

    assert_eq!(config.limits.text, LimitConfig::new(8, 60));
    assert_eq!(config.limits.image, LimitConfig::new(3, 60));
    assert_eq!(config.models.title, "gemini-1.5-flash");
    assert_eq!(config.models.body, "gemini-1.5-pro");
    assert_eq!(config.publishing.posts_dir, "_posts");
    assert_eq!(config.publishing.branch, "main");
}

#[test]
fn bundled_defaults_match_default_impl() {
    let loaded = GazetteConfig::load().unwrap();
    let built = GazetteConfig::default();

    assert_eq!(loaded.limits, built.limits);
    assert_eq!(loaded.endpoints, built.endpoints);
    assert_eq!(loaded.publishing, built.publishing);
}

#[test]
fn file_overrides_only_what_it_sets() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[limits.text]\ncalls = 2\nwindow_secs = 10\n\n[publishing]\nbranch = \"gh-pages\""
    )
    .unwrap();

    let config = GazetteConfig::from_file(file.path()).unwrap();

    assert_eq!(config.limits.text, LimitConfig::new(2, 10));
    assert_eq!(config.limits.image, LimitConfig::new(3, 60));
    assert_eq!(config.publishing.branch, "gh-pages");
    assert_eq!(config.publishing.posts_dir, "_posts");
}

#[test]
fn missing_file_is_an_error() {
    let result = GazetteConfig::from_file("/definitely/not/here/gazette.toml");
    assert!(result.is_err());
}

#[test]
fn window_converts_to_duration() {
    assert_eq!(LimitConfig::new(8, 60).window().as_secs(), 60);
}

//! URL validator truth table

use snaplink::utils::{is_plausible_url, truncate_url};

#[test]
fn test_accepts_http_and_https_urls() {
    for url in [
        "http://example.com",
        "https://example.com",
        "https://example.com/path?query=1#frag",
        "http://localhost:8080",
        "https://sub.domain.example.co.uk/a/b/c",
    ] {
        assert!(is_plausible_url(url), "should accept {:?}", url);
    }
}

#[test]
fn test_accepts_bare_domains_via_https_prefixing() {
    for url in ["example.com", "rust-lang.org", "docs.rs/snaplink"] {
        assert!(is_plausible_url(url), "should accept {:?}", url);
    }
}

#[test]
fn test_accepts_domain_pattern_fallback() {
    // At least one dot and an alphabetic TLD of length >= 2
    assert!(is_plausible_url("example.com/path"));
    assert!(is_plausible_url("a.bc"));
}

#[test]
fn test_rejects_empty_and_whitespace() {
    assert!(!is_plausible_url(""));
    assert!(!is_plausible_url("   "));
    assert!(!is_plausible_url("\t\n"));
}

#[test]
fn test_rejects_obvious_garbage() {
    assert!(!is_plausible_url("not a url at all"));
    assert!(!is_plausible_url("http://exa mple.com"));
}

#[test]
fn test_trims_surrounding_whitespace() {
    assert!(is_plausible_url("  example.com  "));
}

#[test]
fn test_truncate_preserves_short_values() {
    assert_eq!(truncate_url("http://x/abc", 35), "http://x/abc");
}

#[test]
fn test_truncate_appends_ellipsis() {
    let long = "https://example.com/".repeat(5);
    let shown = truncate_url(&long, 35);
    assert!(shown.ends_with("..."));
    assert!(shown.chars().count() < long.chars().count());
}

use droidhound::matcher::PatternSet;
use droidhound::types::{Category, Finding};

fn scan(content: &[u8]) -> Vec<Finding> {
    PatternSet::new().unwrap().scan(content)
}

fn values(findings: &[Finding], category: Category) -> Vec<&str> {
    findings
        .iter()
        .filter(|f| f.category == category)
        .map(|f| f.value.as_str())
        .collect()
}

// --- secret rule ---

#[test]
fn test_secret_double_quoted_value() {
    let findings = scan(b"API_KEY=\"abcd1234\"");
    assert_eq!(values(&findings, Category::Secret), vec!["API_KEY: abcd1234"]);
    assert!(values(&findings, Category::Endpoint).is_empty());
}

#[test]
fn test_secret_colon_separator() {
    let findings = scan(b"token: hunter2");
    assert_eq!(values(&findings, Category::Secret), vec!["token: hunter2"]);
}

#[test]
fn test_secret_label_matched_case_insensitively() {
    let findings = scan(b"SeCrEt = x1");
    assert_eq!(values(&findings, Category::Secret), vec!["SeCrEt: x1"]);
}

#[test]
fn test_secret_label_casing_preserved_as_distinct_values() {
    let upper = scan(b"TOKEN=abc");
    let lower = scan(b"token=abc");
    assert_eq!(values(&upper, Category::Secret), vec!["TOKEN: abc"]);
    assert_eq!(values(&lower, Category::Secret), vec!["token: abc"]);
    assert_ne!(upper[0].value, lower[0].value);
}

#[test]
fn test_secret_value_stops_at_whitespace() {
    let findings = scan(b"secret = hello world");
    assert_eq!(values(&findings, Category::Secret), vec!["secret: hello"]);
}

#[test]
fn test_secret_single_quote_kept_in_value() {
    // The value class excludes only whitespace and double quotes, so a closing
    // single quote rides along with the value.
    let findings = scan(b"token='abc'");
    assert_eq!(values(&findings, Category::Secret), vec!["token: abc'"]);
}

#[test]
fn test_secret_label_matches_inside_longer_word() {
    // No word boundary on the label: `client_secret` matches via its
    // `secret` suffix.
    let findings = scan(b"client_secret=x9");
    assert_eq!(values(&findings, Category::Secret), vec!["secret: x9"]);
}

#[test]
fn test_secret_multiple_non_overlapping_matches() {
    let findings = scan(b"api_key=a token=b");
    assert_eq!(
        values(&findings, Category::Secret),
        vec!["api_key: a", "token: b"]
    );
}

// --- endpoint rule ---

#[test]
fn test_endpoint_http_and_https() {
    let findings = scan(b"see http://a.example/one and https://b.example/two");
    assert_eq!(
        values(&findings, Category::Endpoint),
        vec!["http://a.example/one", "https://b.example/two"]
    );
}

#[test]
fn test_endpoint_stops_at_double_quote() {
    let findings = scan(b"{\"url\":\"https://api.example.com/v1\"}");
    assert_eq!(
        values(&findings, Category::Endpoint),
        vec!["https://api.example.com/v1"]
    );
}

#[test]
fn test_endpoint_duplicates_emitted_per_match() {
    // The matcher reports every match; deduplication belongs to the sink.
    let findings = scan(b"https://x.example/a https://x.example/a");
    assert_eq!(
        values(&findings, Category::Endpoint),
        vec!["https://x.example/a", "https://x.example/a"]
    );
}

// --- robustness and determinism ---

#[test]
fn test_scan_is_deterministic() {
    let content = b"API_KEY=\"k1\" visit https://example.com/x token: t2";
    let patterns = PatternSet::new().unwrap();
    let first = patterns.scan(content);
    let second = patterns.scan(content);
    assert_eq!(first, second);
}

#[test]
fn test_arbitrary_bytes_do_not_panic() {
    let findings = scan(&[0x00, 0xff, 0xfe, 0x01, b' ', 0x80]);
    assert!(findings.is_empty());
}

#[test]
fn test_secret_survives_surrounding_invalid_utf8() {
    let mut content = Vec::from(&b"\xff\xfe API_KEY=deadbeef \xff"[..]);
    content.extend_from_slice(b" trailing");
    let findings = scan(&content);
    assert_eq!(
        values(&findings, Category::Secret),
        vec!["API_KEY: deadbeef"]
    );
}

#[test]
fn test_plain_text_yields_no_findings() {
    let findings = scan(b"nothing interesting in this file at all");
    assert!(findings.is_empty());
}

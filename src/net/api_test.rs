use super::*;

// =============================================================
// FetchError messages
// =============================================================

#[test]
fn status_error_embeds_code() {
    let err = FetchError::Status(404);
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[test]
fn network_error_keeps_description() {
    let err = FetchError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn errors_are_comparable() {
    assert_eq!(FetchError::Status(500), FetchError::Status(500));
    assert_ne!(FetchError::Status(500), FetchError::Status(502));
}

// =============================================================
// URL construction
// =============================================================

#[test]
fn codespace_origin_uses_forwarded_port() {
    assert_eq!(
        codespace_origin("my-space"),
        "https://my-space-8000.app.github.dev"
    );
}

#[test]
fn api_url_preserves_path() {
    assert!(api_url("/api/users/").ends_with("/api/users/"));
}

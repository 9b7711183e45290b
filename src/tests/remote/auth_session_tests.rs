use super::*;

#[test]
fn credential_token_is_base64_of_user_colon_password() {
    let c = BasicCredential::new("mr.smith", "secret");
    assert_eq!(c.token(), "bXIuc21pdGg6c2VjcmV0");
    assert_eq!(c.header_value(), "Basic bXIuc21pdGg6c2VjcmV0");
    assert_eq!(c.username(), "mr.smith");
}

#[test]
fn credential_debug_hides_the_token() {
    let c = BasicCredential::new("mr.smith", "secret");
    let dbg = format!("{:?}", c);
    assert!(dbg.contains("mr.smith"));
    assert!(!dbg.contains(c.token()));
}

#[test]
fn success_and_unknown_activity_count_as_login() {
    assert!(probe_accepts(reqwest::StatusCode::OK, None));
    assert!(probe_accepts(
        reqwest::StatusCode::NOT_FOUND,
        Some("Activity not found")
    ));
    assert!(!probe_accepts(
        reqwest::StatusCode::UNAUTHORIZED,
        Some("Invalid credentials")
    ));
    assert!(!probe_accepts(reqwest::StatusCode::FORBIDDEN, None));
    assert!(!probe_accepts(reqwest::StatusCode::INTERNAL_SERVER_ERROR, None));
}

#[test]
fn stray_not_found_is_not_a_login() {
    assert!(!probe_accepts(reqwest::StatusCode::NOT_FOUND, None));
    assert!(!probe_accepts(reqwest::StatusCode::NOT_FOUND, Some("Not Found")));
    assert!(!probe_accepts(
        reqwest::StatusCode::NOT_FOUND,
        Some("activity not found")
    ));
}

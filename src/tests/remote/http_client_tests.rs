use super::*;

fn client(base: &str) -> ActivityClient {
    ActivityClient::new(&ClientConfig::with_base_url(base)).unwrap()
}

#[test]
fn endpoint_percent_encodes_path_and_query() {
    let c = client("http://127.0.0.1:8000");
    let url = c
        .endpoint(&["activities", "Chess Club", "signup"], Some("a+b@x.edu"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8000/activities/Chess%20Club/signup?email=a%2Bb%40x.edu"
    );
}

#[test]
fn endpoint_escapes_slashes_inside_a_name() {
    let c = client("http://127.0.0.1:8000");
    let url = c.endpoint(&["activities", "Arts/Crafts", "unregister"], None).unwrap();
    assert_eq!(url.path(), "/activities/Arts%2FCrafts/unregister");
}

#[test]
fn endpoint_keeps_a_base_path_prefix() {
    let c = client("http://school.example/api/");
    let url = c.endpoint(&["activities"], None).unwrap();
    assert_eq!(url.as_str(), "http://school.example/api/activities");
}

#[test]
fn non_base_url_is_rejected() {
    let err = ActivityClient::new(&ClientConfig::with_base_url("mailto:x@y.edu")).unwrap_err();
    assert!(matches!(err, ClientError::Url { .. }));
}

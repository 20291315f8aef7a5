use super::*;
use crate::util::token_store::MemoryTokenStore;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:5000/api", "/notes"), "http://localhost:5000/api/notes");
    assert_eq!(endpoint("http://localhost:5000/api/", "/auth/login"), "http://localhost:5000/api/auth/login");
}

#[test]
fn note_resource_formats_expected_path() {
    assert_eq!(note_resource("abc123"), "/notes/abc123");
}

#[test]
fn note_resource_encodes_reserved_characters() {
    assert_eq!(note_resource("a/b?c#d"), "/notes/a%2Fb%3Fc%23d");
    assert_eq!(note_resource("x y+z"), "/notes/x%20y%2Bz");
    assert_eq!(note_resource("65f1-a_b.c"), "/notes/65f1-a_b.c");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header(Some("tok")), Some("Bearer tok".to_owned()));
    assert_eq!(bearer_header(Some("")), None);
    assert_eq!(bearer_header(None), None);
}

#[test]
fn http_api_attaches_current_store_token() {
    let store = MemoryTokenStore::new();
    let api = HttpApi::new("http://api.test", &store);
    assert_eq!(api.authorization(), None);
    store.set("abc");
    assert_eq!(api.authorization(), Some("Bearer abc".to_owned()));
    store.clear();
    assert_eq!(api.authorization(), None);
}

#[test]
fn http_api_builds_urls_from_base() {
    let store = MemoryTokenStore::new();
    let api = HttpApi::new("http://api.test/", &store);
    assert_eq!(api.base_url(), "http://api.test/");
    assert_eq!(api.url(&note_resource("7")), "http://api.test/notes/7");
}

#[test]
fn client_errors_map_to_invalid_credentials() {
    assert_eq!(AuthError::from(ApiError::Status(400)), AuthError::InvalidCredentials);
    assert_eq!(AuthError::from(ApiError::Status(401)), AuthError::InvalidCredentials);
    assert_eq!(AuthError::from(ApiError::Status(409)), AuthError::InvalidCredentials);
}

#[test]
fn server_and_transport_errors_map_to_network() {
    assert!(matches!(AuthError::from(ApiError::Status(500)), AuthError::Network(_)));
    assert!(matches!(AuthError::from(ApiError::Network("offline".to_owned())), AuthError::Network(_)));
    assert!(matches!(AuthError::from(ApiError::Decode("eof".to_owned())), AuthError::Network(_)));
}

#[test]
fn auth_error_user_messages_are_generic() {
    assert_eq!(AuthError::InvalidCredentials.user_message(), "Invalid credentials");
    assert_eq!(AuthError::Network("x".to_owned()).user_message(), "Unable to reach the server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpApi::new("http://api.test", MemoryTokenStore::new());
    let creds = Credentials { username: "a".to_owned(), password: "b".to_owned() };
    futures::executor::block_on(async {
        assert_eq!(api.list_notes().await, Err(ApiError::Unavailable));
        assert_eq!(api.delete_note("1").await, Err(ApiError::Unavailable));
        assert!(matches!(api.login(&creds).await, Err(AuthError::Network(_))));
    });
}

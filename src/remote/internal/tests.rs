use super::*;

fn store(base_url: &str) -> Result<HttpRemoteNoteStore, RemoteError> {
    HttpRemoteNoteStore::new(
        &ClientConfig {
            api_base_url: base_url.into(),
            ..ClientConfig::default()
        }
    )
}

#[test]
fn urls_with_and_without_trailing_slash() {
    for base in ["http://localhost:8000", "http://localhost:8000/"] {
        let store = store(base).expect("store creation failed");
        assert_eq!(
            store.notes_url(&[]).expect("bad url").as_str(),
            "http://localhost:8000/api/notes",
        );
        assert_eq!(
            store.notes_url(&["n1"]).expect("bad url").as_str(),
            "http://localhost:8000/api/notes/n1",
        );
    }
}

#[test]
fn urls_keep_base_path_prefix() {
    let store = store("https://example.com/notes-app/").expect("store creation failed");
    assert_eq!(
        store.notes_url(&[SEARCH_SEGMENT]).expect("bad url").as_str(),
        "https://example.com/notes-app/api/notes/search",
    );
}

#[test]
fn ids_are_a_single_encoded_segment() {
    let store = store("http://localhost:8000/").expect("store creation failed");
    assert_eq!(
        store.notes_url(&["a/b c"]).expect("bad url").as_str(),
        "http://localhost:8000/api/notes/a%2Fb%20c",
    );
}

#[test]
fn invalid_base_urls() {
    for base in ["", "not a url", "mailto:someone@example.com"] {
        let result = store(base);
        assert!(
            matches!(result, Err(RemoteError::InvalidBaseUrl(_))),
            "{base} was accepted",
        );
    }
}

#[test]
fn only_not_found_is_reachable() {
    assert!(!RemoteError::NotFound.is_unreachable());
    assert!(RemoteError::Status(StatusCode::SERVICE_UNAVAILABLE).is_unreachable());
    assert!(RemoteError::InvalidBaseUrl(String::new()).is_unreachable());
}

use std::path::Path;
use assert_fs::TempDir;
use notepad::cache::{FileLocalCache, LocalCache};
use notepad::config::client_config::ClientConfig;
use notepad::remote::{HttpRemoteNoteStore, RemoteError, RemoteNoteStore};
use notepad::service::{DeleteOutcome, DocumentService};
use test_utils::data::{draft, stored};
use test_utils::{free_local_port, setup_server_config, TestServer};

type Service = DocumentService<HttpRemoteNoteStore, FileLocalCache>;

fn client_config(base_url: String) -> ClientConfig {
    ClientConfig {
        api_base_url: base_url,
        request_timeout_ms: Some(5000),
        ..ClientConfig::default()
    }
}

async fn make_service(base_url: String, cache_dir: &Path) -> Service {
    let remote = HttpRemoteNoteStore::new(&client_config(base_url))
        .expect("remote creation failed");
    let cache = FileLocalCache::new(cache_dir)
        .await
        .expect("cache creation failed");
    DocumentService::new(remote, cache)
}

#[tokio::test(flavor = "multi_thread")]
async fn online_round_trip() {
    let root = setup_server_config();
    let server = TestServer::launch(root.path()).await;
    let cache_dir = TempDir::new().unwrap();
    let service = make_service(server.base_url(), cache_dir.path()).await;

    let saved = service
        .save_note(draft("Groceries", "milk, eggs", &["home", "food"]))
        .await
        .unwrap();
    assert!(!saved.id.is_empty());
    assert!(saved.created_at <= saved.last_modified);

    let fetched = service.get_note(&saved.id).await.unwrap().unwrap();
    assert_eq!(fetched, saved);

    let listed = service.list_notes().await.unwrap();
    assert_eq!(listed, vec![saved.clone()]);
    assert_eq!(service.search_notes("FOOD").await.unwrap(), vec![saved.clone()]);
    assert!(service.search_notes("work").await.unwrap().is_empty());
    assert_eq!(service.search_notes("").await.unwrap(), listed);

    let mut edited = saved.clone();
    edited.content = "milk, eggs, bread".into();
    let updated = service.save_note(edited).await.unwrap();
    assert_eq!(updated.created_at, saved.created_at);
    assert_eq!(
        service.get_note(&saved.id).await.unwrap().unwrap().content,
        "milk, eggs, bread",
    );

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn falls_back_to_the_cache_when_the_server_is_gone() {
    let root = setup_server_config();
    let server = TestServer::launch(root.path()).await;
    let cache_dir = TempDir::new().unwrap();
    let service = make_service(server.base_url(), cache_dir.path()).await;

    let kept = service.save_note(draft("kept", "", &["work"])).await.unwrap();
    let doomed = service.save_note(draft("doomed", "", &[])).await.unwrap();
    let online = service.list_notes().await.unwrap();
    assert_eq!(online.len(), 2);

    server.stop().await;

    assert_eq!(service.list_notes().await.unwrap(), online);
    assert_eq!(service.get_note(&kept.id).await.unwrap(), Some(kept.clone()));
    assert_eq!(service.search_notes("WORK").await.unwrap(), vec![kept.clone()]);

    let offline = service.save_note(draft("offline", "", &[])).await.unwrap();
    assert!(!offline.id.is_empty());
    assert_eq!(service.get_note(&offline.id).await.unwrap(), Some(offline));

    assert_eq!(service.delete_note(&doomed.id).await.unwrap(), DeleteOutcome::Deleted);
    assert_eq!(service.delete_note(&doomed.id).await.unwrap(), DeleteOutcome::Absent);
    assert_eq!(service.list_notes().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn note_made_offline_stays_local_when_edited_online() {
    let root = setup_server_config();
    let port = free_local_port();
    let cache_dir = TempDir::new().unwrap();
    let server = TestServer::launch_at(root.path(), port).await;
    let service = make_service(server.base_url(), cache_dir.path()).await;
    server.stop().await;

    let offline = service.save_note(draft("draft", "v1", &[])).await.unwrap();

    let server = TestServer::launch_at(root.path(), port).await;
    let remote = HttpRemoteNoteStore::new(&client_config(server.base_url())).unwrap();
    assert!(matches!(remote.get_note(&offline.id).await, Err(RemoteError::NotFound)));

    let mut edited = offline.clone();
    edited.content = "v2".into();
    let saved = service.save_note(edited).await.unwrap();
    assert_eq!(saved.id, offline.id);

    assert!(matches!(remote.get_note(&offline.id).await, Err(RemoteError::NotFound)));
    let local = service.get_note(&offline.id).await.unwrap().unwrap();
    assert_eq!(local.content, "v2");
    assert!(local.created_at <= local.last_modified);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_is_idempotent_online() {
    let root = setup_server_config();
    let server = TestServer::launch(root.path()).await;
    let cache_dir = TempDir::new().unwrap();
    let service = make_service(server.base_url(), cache_dir.path()).await;

    let note = service.save_note(draft("t", "", &[])).await.unwrap();
    service.save_note(draft("other", "", &[])).await.unwrap();

    assert_eq!(service.delete_note(&note.id).await.unwrap(), DeleteOutcome::Deleted);
    let count = service.list_notes().await.unwrap().len();
    assert_eq!(service.delete_note(&note.id).await.unwrap(), DeleteOutcome::Absent);
    assert_eq!(service.list_notes().await.unwrap().len(), count);
    assert_eq!(count, 1);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn http_store_maps_missing_notes() {
    let root = setup_server_config();
    let server = TestServer::launch(root.path()).await;
    let remote = HttpRemoteNoteStore::new(&client_config(server.base_url())).unwrap();

    assert!(matches!(remote.get_note("missing").await, Err(RemoteError::NotFound)));
    assert!(matches!(remote.delete_note("missing").await, Err(RemoteError::NotFound)));
    assert!(matches!(
        remote.update_note(&stored("missing", "t", &[])).await,
        Err(RemoteError::NotFound),
    ));

    let created = remote.save_note(&draft("new", "", &[])).await.unwrap();
    assert!(!created.id.is_empty());
    let updated = remote.save_note(&created).await.unwrap();
    assert_eq!(updated, created);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server() {
    let base_url = format!("http://127.0.0.1:{}/", free_local_port());
    let remote = HttpRemoteNoteStore::new(&client_config(base_url.clone())).unwrap();
    let err = remote.list_notes().await.expect_err("should fail");
    assert!(matches!(err, RemoteError::Transport(_)), "wrong error type: {err:#?}");
    assert!(err.is_unreachable());

    let cache_dir = TempDir::new().unwrap();
    let service = make_service(base_url, cache_dir.path()).await;
    assert!(service.list_notes().await.unwrap().is_empty());

    let cache = FileLocalCache::new(cache_dir.path()).await.unwrap();
    let saved = service.save_note(draft("local", "", &[])).await.unwrap();
    assert_eq!(cache.read_all().await.unwrap(), vec![saved]);
}

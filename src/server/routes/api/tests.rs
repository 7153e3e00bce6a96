use assert_fs::TempDir;
use rocket::local::asynchronous::Client;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use crate::config::app_config::AppConfig;
use crate::storage::FileNoteRepository;
use super::*;

async fn make_client() -> (Client, TempDir) {
    let dir = TempDir::new().expect("tmp dir creation failed");
    let config = AppConfig {
        data_directory: dir.path().to_owned(),
        ..AppConfig::default()
    };
    let repository: Box<dyn NoteRepository> = Box::new(
        FileNoteRepository::new(&config)
            .await
            .expect("repository creation failed")
    );
    let rocket = rocket::build()
        .manage(repository)
        .install_notepad_api();
    let client = Client::tracked(rocket).await.expect("invalid rocket");
    (client, dir)
}

fn sample(id: &str, title: &str, tags: &[&str]) -> Note {
    Note {
        id: id.into(),
        title: title.into(),
        content: "body".into(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        created_at: datetime!(2024-02-01 8:00 UTC),
        last_modified: datetime!(2024-02-01 8:00 UTC),
    }
}

async fn create(client: &Client, note: &Note) -> Note {
    let response = client.post("/api/notes").json(note).dispatch().await;
    assert_eq!(response.status(), Status::Created);
    response.into_json().await.expect("no note in the response")
}

#[rocket::async_test]
async fn version() {
    let (client, _dir) = make_client().await;
    let response = client.get("/api/version").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.as_deref(), Some(API_VERSION));
}

#[rocket::async_test]
async fn create_assigns_id_and_timestamps() {
    let (client, _dir) = make_client().await;
    let before = OffsetDateTime::now_utc();
    let created = create(&client, &sample("", "", &["a", "b", "a"])).await;

    assert!(!created.id.is_empty());
    assert_eq!(created.title, crate::DEFAULT_NOTE_TITLE);
    assert_eq!(created.tags, vec!["a", "b"]);
    assert_eq!(created.created_at, datetime!(2024-02-01 8:00 UTC));
    assert!(created.last_modified >= before);

    let response = client.get(format!("/api/notes/{}", created.id)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_json::<Note>().await, Some(created));
}

#[rocket::async_test]
async fn create_keeps_client_id_and_clamps_future_creation() {
    let (client, _dir) = make_client().await;
    let mut note = sample("client-chosen", "t", &[]);
    note.created_at = OffsetDateTime::now_utc() + Duration::days(1);
    let created = create(&client, &note).await;
    assert_eq!(created.id, "client-chosen");
    assert!(created.created_at <= created.last_modified);
    assert!(created.created_at <= OffsetDateTime::now_utc());
}

#[rocket::async_test]
async fn create_with_unusable_id() {
    let (client, _dir) = make_client().await;
    let response = client
        .post("/api/notes")
        .json(&sample("../../etc", "t", &[]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn search_is_not_a_usable_id() {
    let (client, _dir) = make_client().await;
    let response = client
        .post("/api/notes")
        .json(&sample("search", "t", &[]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let notes: Vec<Note> = client.get("/api/notes/search")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("search must answer with a list");
    assert!(notes.is_empty());
}

#[rocket::async_test]
async fn get_missing_note() {
    let (client, _dir) = make_client().await;
    let response = client.get("/api/notes/nothing-here").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn update_preserves_creation_time() {
    let (client, _dir) = make_client().await;
    let created = create(&client, &sample("n1", "old", &[])).await;

    let mut edited = created.clone();
    edited.title = "new".into();
    edited.created_at = datetime!(2020-01-01 0:00 UTC);
    let response = client
        .put("/api/notes/n1")
        .json(&edited)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NoContent);

    let stored: Note = client.get("/api/notes/n1")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("no note in the response");
    assert_eq!(stored.title, "new");
    assert_eq!(stored.created_at, created.created_at);
    assert!(stored.last_modified >= created.last_modified);
}

#[rocket::async_test]
async fn update_missing_note() {
    let (client, _dir) = make_client().await;
    let response = client
        .put("/api/notes/n1")
        .json(&sample("n1", "t", &[]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn update_with_mismatched_id() {
    let (client, _dir) = make_client().await;
    create(&client, &sample("n1", "t", &[])).await;
    let response = client
        .put("/api/notes/n1")
        .json(&sample("n2", "t", &[]))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn delete_then_delete_again() {
    let (client, _dir) = make_client().await;
    create(&client, &sample("n1", "t", &[])).await;
    let response = client.delete("/api/notes/n1").dispatch().await;
    assert_eq!(response.status(), Status::NoContent);
    let response = client.delete("/api/notes/n1").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let response = client.get("/api/notes/n1").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn list_and_search() {
    let (client, _dir) = make_client().await;
    let work = create(&client, &sample("w", "one", &["work"])).await;
    let home_work = create(&client, &sample("hw", "two", &["Home", "Work"])).await;
    create(&client, &sample("o", "three", &["misc"])).await;

    let all: Vec<Note> = client.get("/api/notes")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("no notes in the response");
    assert_eq!(all.len(), 3);

    let mut found: Vec<Note> = client.get("/api/notes/search?term=WORK")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("no notes in the response");
    found.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(found, vec![home_work, work]);

    for uri in ["/api/notes/search", "/api/notes/search?term=", "/api/notes/search?term=%20"] {
        let found: Vec<Note> = client.get(uri)
            .dispatch()
            .await
            .into_json()
            .await
            .expect("no notes in the response");
        assert_eq!(found.len(), 3, "{uri}");
    }
}

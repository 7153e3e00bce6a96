mod errors;
#[cfg(test)] mod tests;

use log::{debug, info};
use rocket::http::Status;
use rocket::response::content::RawText;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, Build, Rocket, State};
use time::OffsetDateTime;

use crate::data::Note;
use crate::rng::make_note_id;
use crate::storage::NoteRepository;
use crate::util::StrExt;
use errors::ApiError;

type Repository = State<Box<dyn NoteRepository>>;

const API_PREFIX: &str = "/api";
const API_VERSION: &str = "1";

#[get("/version")]
fn version() -> RawText<&'static str> {
    RawText(API_VERSION)
}

#[get("/notes")]
async fn list_notes(repository: &Repository) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(repository.list_all().await?))
}

#[get("/notes/search?<term>", rank = 1)]
async fn search_notes(
    repository: &Repository,
    term: Option<String>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let term = term.unwrap_or_default();
    debug!("searching for \"{term}\"");
    if term.is_blank() {
        return Ok(Json(repository.list_all().await?));
    }
    Ok(Json(repository.search(&term).await?))
}

#[get("/notes/<id>", rank = 2)]
async fn get_note(repository: &Repository, id: &str) -> Result<Json<Note>, ApiError> {
    Ok(Json(repository.get_by_id(id).await?))
}

/// Keeps an id chosen by the client, generates one otherwise.
#[post("/notes", data = "<note>")]
async fn create_note(
    repository: &Repository,
    note: Json<Note>,
) -> Result<(Status, Json<Note>), ApiError> {
    let now = OffsetDateTime::now_utc();
    let mut note = note.into_inner();
    if note.is_new() {
        note.id = make_note_id(&mut rand::rng());
    }
    note.created_at = note.created_at.min(now);
    note.last_modified = now;
    note.normalize_title();
    let created = repository.upsert(&note).await?;
    info!("created note {}", created.id);
    Ok((Status::Created, Json(created)))
}

#[put("/notes/<id>", data = "<note>")]
async fn update_note(
    repository: &Repository,
    id: &str,
    note: Json<Note>,
) -> Result<Status, ApiError> {
    let mut note = note.into_inner();
    if note.is_new() {
        note.id = id.to_owned();
    } else if note.id != id {
        return Err(ApiError::IdMismatch);
    }
    let existing = repository.get_by_id(id).await?;
    note.created_at = existing.created_at;
    note.touch(OffsetDateTime::now_utc());
    note.normalize_title();
    repository.upsert(&note).await?;
    info!("updated note {id}");
    Ok(Status::NoContent)
}

#[delete("/notes/<id>")]
async fn delete_note(repository: &Repository, id: &str) -> Result<Status, ApiError> {
    repository.delete(id).await?;
    info!("deleted note {id}");
    Ok(Status::NoContent)
}

pub trait ApiRocketBuildExt {
    fn install_notepad_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_notepad_api(self) -> Self {
        self
            .mount(
                API_PREFIX,
                routes![
                    version,
                    list_notes,
                    search_notes,
                    get_note,
                    create_note,
                    update_note,
                    delete_note,
                ]
            )
    }
}

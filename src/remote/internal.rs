use std::time::Duration;
use async_trait::async_trait;
use log::{debug, trace};
use reqwest::{Client, Response, StatusCode, Url};

use crate::config::client_config::ClientConfig;
use crate::data::Note;
use crate::remote::{RemoteError, RemoteNoteStore};

#[cfg(test)] mod tests;

const API_PATH: [&str; 2] = ["api", "notes"];
const SEARCH_SEGMENT: &str = "search";

/// [RemoteNoteStore] speaking JSON to the notes api over http.
pub struct HttpRemoteNoteStore {
    client: Client,
    base_url: Url,
}

impl HttpRemoteNoteStore {
    pub fn new(config: &ClientConfig) -> Result<HttpRemoteNoteStore, RemoteError> {
        let base_url = Url::parse(&config.api_base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| RemoteError::InvalidBaseUrl(config.api_base_url.clone()))?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout));
        }
        debug!("using notes api at {base_url}");
        Ok(
            HttpRemoteNoteStore {
                client: builder.build()?,
                base_url,
            }
        )
    }

    fn notes_url(&self, extra_segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(API_PATH)
            .extend(extra_segments);
        Ok(url)
    }
}

fn check_status(response: Response) -> Result<Response, RemoteError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(RemoteError::NotFound),
        status if !status.is_success() => Err(RemoteError::Status(status)),
        status => {
            trace!("notes api answered {status}");
            Ok(response)
        },
    }
}

#[async_trait]
impl RemoteNoteStore for HttpRemoteNoteStore {
    async fn list_notes(&self) -> Result<Vec<Note>, RemoteError> {
        let url = self.notes_url(&[])?;
        debug!("GET {url}");
        let response = check_status(self.client.get(url).send().await?)?;
        Ok(response.json().await?)
    }

    async fn get_note(&self, id: &str) -> Result<Note, RemoteError> {
        let url = self.notes_url(&[id])?;
        debug!("GET {url}");
        let response = check_status(self.client.get(url).send().await?)?;
        Ok(response.json().await?)
    }

    async fn search_notes(&self, term: &str) -> Result<Vec<Note>, RemoteError> {
        let url = self.notes_url(&[SEARCH_SEGMENT])?;
        debug!("GET {url} searching for \"{term}\"");
        let response = check_status(
            self.client
                .get(url)
                .query(&[("term", term)])
                .send()
                .await?
        )?;
        Ok(response.json().await?)
    }

    async fn create_note(&self, note: &Note) -> Result<Note, RemoteError> {
        let url = self.notes_url(&[])?;
        debug!("POST {url}");
        let response = check_status(
            self.client.post(url).json(note).send().await?
        )?;
        Ok(response.json().await?)
    }

    async fn update_note(&self, note: &Note) -> Result<Note, RemoteError> {
        let url = self.notes_url(&[&note.id])?;
        debug!("PUT {url}");
        let response = check_status(
            self.client.put(url).json(note).send().await?
        )?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(note.clone());
        }
        Ok(response.json().await?)
    }

    async fn delete_note(&self, id: &str) -> Result<(), RemoteError> {
        let url = self.notes_url(&[id])?;
        debug!("DELETE {url}");
        check_status(self.client.delete(url).send().await?)?;
        Ok(())
    }
}

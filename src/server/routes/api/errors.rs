use log::error;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::{response, Request};
use thiserror::Error;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("note id in the body does not match the path")]
    IdMismatch,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Storage(StorageError::NoteNotFound) => Status::NotFound,
            ApiError::Storage(StorageError::InvalidId(_)) => Status::BadRequest,
            ApiError::Storage(StorageError::TooBig) => Status::PayloadTooLarge,
            ApiError::Storage(_) => Status::InternalServerError,
            ApiError::IdMismatch => Status::BadRequest,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("request failed: {self}");
        }
        Err(status)
    }
}

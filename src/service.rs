mod errors;
mod internal;
mod observers;

pub use errors::*;
pub use internal::{DocumentService, DocumentServiceImpl};
pub use observers::SubscriptionId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    /// Neither store had the note. Not an error, deleting is idempotent.
    Absent,
}

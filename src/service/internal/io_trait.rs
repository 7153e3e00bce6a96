use time::OffsetDateTime;
use crate::rng::make_note_id;

pub(super) trait DocumentServiceIo: Send + Sync {
    fn now(&self) -> OffsetDateTime;

    fn generate_id(&self) -> String;
}

pub struct ProductionDocumentServiceIo;

impl DocumentServiceIo for ProductionDocumentServiceIo {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn generate_id(&self) -> String {
        make_note_id(&mut rand::rng())
    }
}

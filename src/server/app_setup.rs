use async_trait::async_trait;
use log::{error, info};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Build, Rocket};

use crate::config::app_config::AppConfig;
use crate::server::routes::ApiRocketBuildExt;
use crate::storage::{FileNoteRepository, NoteRepository};

pub struct AppSetupFairing;

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        Info {
            name: "app setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let config: AppConfig = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| {
                for e in e {
                    error!("{e}");
                }
                info!("finishing due to a config parse error");
            }
        );

        let repository: Box<dyn NoteRepository> = Box::new(
            ok_or_bail!(
                rocket,
                FileNoteRepository::new(&config).await,
                |e| error!(
                    "note repository initialization at {} failed: {e}",
                    config.data_directory.display(),
                )
            )
        );
        info!(
            "serving notes from {}",
            FileNoteRepository::get_notes_dir(&config).display(),
        );

        Ok(
            rocket
                .manage(repository)
                .manage(config)
                .install_notepad_api()
        )
    }
}

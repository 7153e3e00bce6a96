mod app_setup;
mod routes;

use figment::Figment;
use rocket::{Build, Rocket};

pub use app_setup::AppSetupFairing;
pub use routes::ApiRocketBuildExt;

/// The notes api on top of the configuration in `figment`. The repository
/// is opened on ignite, so a bad data directory fails the launch.
pub fn build_rocket(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment).attach(AppSetupFairing)
}

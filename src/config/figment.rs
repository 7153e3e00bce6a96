use std::path::Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use crate::bin_constants::{APP_CONFIG_ENV_PREFIX, CLIENT_CONFIG_ENV_PREFIX};
use crate::config::app_config::AppConfig;
use crate::config::client_config::ClientConfig;

pub trait FigmentExt {
    fn setup_app_config(
        self,
        config_file: impl AsRef<Path>,
    ) -> Figment;

    fn setup_client_config(
        self,
        config_file: impl AsRef<Path>,
    ) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(self, config_file: impl AsRef<Path>) -> Figment {
        self.merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file_exact(config_file))
            .merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).global())
    }

    // the client config file is optional, defaults and env are enough
    fn setup_client_config(self, config_file: impl AsRef<Path>) -> Figment {
        self.merge(Serialized::defaults(ClientConfig::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(CLIENT_CONFIG_ENV_PREFIX))
    }
}

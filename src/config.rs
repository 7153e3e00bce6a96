pub mod app_config;
pub mod client_config;
pub mod figment;

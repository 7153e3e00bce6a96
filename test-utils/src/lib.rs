mod mock;
mod ports;
mod server;
pub mod data;

pub use mock::{setup_server_config, SERVER_CONFIG_FILE};
pub use ports::free_local_port;
pub use server::TestServer;

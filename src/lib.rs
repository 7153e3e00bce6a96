pub mod config;
pub mod data;
pub mod util;
mod lib_constants;
pub mod bin_constants;
pub mod rng;
pub mod logging;
pub mod storage;
pub mod cache;
pub mod remote;
pub mod service;
pub mod server;

pub use lib_constants::{CACHE_NOTES_KEY, DEFAULT_NOTE_TITLE};

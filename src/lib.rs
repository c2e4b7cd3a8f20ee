pub mod activity;
pub mod bot;
pub mod config;
pub mod connector;
pub mod error;
pub mod relay;
pub mod server;

pub use error::{Error, RelayError, Result};

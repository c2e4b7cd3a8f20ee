mod client;
mod handler;
pub mod typing;
mod types;

pub use client::*;
pub use handler::*;
pub use types::*;

mod client;
mod directory;
mod overtime;
pub mod types;

pub use client::ApiClient;
pub use types::*;

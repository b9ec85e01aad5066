pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod render;
pub mod types;

pub use client::TaskApiClient;
pub use config::ClientConfig;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

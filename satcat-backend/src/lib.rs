pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod module;
pub mod service;

pub use error::{DecodeError, FetchError, NetworkError, ValidationError};

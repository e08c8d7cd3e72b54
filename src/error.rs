//! Application-level errors.
//!
//! The renderer itself never fails; these cover configuration, the window
//! system and screenshot output.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// SDL reports its failures as plain strings.
    #[error("window system: {0}")]
    Window(String),
    #[error("failed to write screenshot: {0}")]
    Screenshot(#[from] image::ImageError),
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Window(message)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("{} not found", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Artifact error: {message}")]
    Artifact { message: String },

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Verification failed: payload does not match input ({expected} bytes in, {actual} bytes decoded)")]
    Verification { expected: usize, actual: usize },
}

impl EmbedError {
    pub fn input_not_found<P: Into<PathBuf>>(path: P) -> Self { Self::InputNotFound { path: path.into() } }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn io<S: Into<String>>(msg: S) -> Self { Self::Io { message: msg.into() } }
    pub fn artifact<S: Into<String>>(msg: S) -> Self { Self::Artifact { message: msg.into() } }
}

pub type Result<T> = std::result::Result<T, EmbedError>;

impl From<std::io::Error> for EmbedError {
    fn from(err: std::io::Error) -> Self { Self::io(err.to_string()) }
}

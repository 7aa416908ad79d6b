//! SoundEmbed - Audio Asset Embedding Library
//!
//! Turns a binary audio file into a JavaScript source file holding the asset
//! as a base64 string constant.

pub mod artifact;
pub mod config;
pub mod converter;
pub mod encoding;
pub mod error;

pub use artifact::Artifact;
pub use config::{Config, Args};
pub use converter::{Converter, ConversionReport};
pub use error::{EmbedError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize `env_logger`; `RUST_LOG` takes precedence over `verbose`
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()
        .ok();
}

pub fn get_library_info() -> LibraryInfo {
    LibraryInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl std::fmt::Display for LibraryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}

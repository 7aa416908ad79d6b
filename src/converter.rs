//! Asset to script conversion
//!
//! Reads the whole asset, encodes it and writes a single `const` declaration.
//! The missing-input check runs before anything touches the output path.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use crate::artifact::Artifact;
use crate::config::Config;
use crate::error::{EmbedError, Result};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub verified: bool,
}

impl ConversionReport {
    pub fn output_megabytes(&self) -> f64 {
        self.output_bytes as f64 / BYTES_PER_MB
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully created {} ({:.2} MB)",
            self.output_path.display(),
            self.output_megabytes()
        )
    }
}

pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn convert(&self) -> Result<ConversionReport> {
        let input_path = &self.config.input_path;
        let output_path = &self.config.output_path;

        if !input_path.exists() {
            return Err(EmbedError::input_not_found(input_path));
        }

        let bytes = fs::read(input_path)?;
        log::debug!("Read {} bytes from {}", bytes.len(), input_path.display());

        let artifact = Artifact::from_bytes(self.config.identifier(), &bytes)?;
        let content = artifact.render();
        log::debug!("Encoded payload: {} chars", artifact.payload().len());

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, &content)?;

        let verified = if self.config.verify() {
            verify_artifact(output_path, &bytes)?;
            log::debug!("Verified {}", output_path.display());
            true
        } else {
            false
        };

        let report = ConversionReport {
            input_path: input_path.clone(),
            output_path: output_path.clone(),
            input_bytes: bytes.len(),
            output_bytes: content.len(),
            verified,
        };

        log::info!(
            "Converted {} ({} bytes) into {} ({} bytes)",
            report.input_path.display(),
            report.input_bytes,
            report.output_path.display(),
            report.output_bytes
        );

        Ok(report)
    }
}

/// Read a written artifact back and check it decodes to `expected`
pub fn verify_artifact(path: &Path, expected: &[u8]) -> Result<()> {
    let text = fs::read_to_string(path)?;
    let decoded = Artifact::parse(&text)?.decode()?;
    if decoded != expected {
        return Err(EmbedError::Verification {
            expected: expected.len(),
            actual: decoded.len(),
        });
    }
    Ok(())
}

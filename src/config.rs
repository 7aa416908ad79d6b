//! Configuration management for asset conversion

use crate::artifact::{self, DEFAULT_IDENTIFIER};
use crate::error::{EmbedError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "audio/light-rain-109591.mp3";
pub const DEFAULT_OUTPUT_PATH: &str = "rain_sound.js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub artifact: ArtifactConfig,
    pub processing: ProcessingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub verify: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            artifact: ArtifactConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            identifier: DEFAULT_IDENTIFIER.to_string(),
        }
    }
}

impl Config {
    /// Get constant identifier (convenience method)
    pub fn identifier(&self) -> &str {
        &self.artifact.identifier
    }

    /// Get verify mode (convenience method)
    pub fn verify(&self) -> bool {
        self.processing.verify
    }

    /// Get verbose mode (convenience method)
    pub fn verbose(&self) -> bool {
        self.processing.verbose
    }
}

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "soundembed", about = "Embed an audio asset as a base64 JavaScript constant", version, author)]
pub struct Args {
    #[arg(short = 'i', long = "input", help = "Input audio file path [default: audio/light-rain-109591.mp3]")]
    pub input: Option<PathBuf>,

    #[arg(short = 'o', long = "output", help = "Output script file path [default: rain_sound.js]")]
    pub output: Option<PathBuf>,

    #[arg(short = 'n', long = "name", help = "Name of the generated constant [default: RAIN_SOUND_BASE64]")]
    pub name: Option<String>,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(long = "verify", help = "Decode the written file and compare it with the input")]
    pub verify: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(long = "save-config", value_name = "PATH", help = "Write the resolved config to PATH and exit")]
    pub save_config: Option<PathBuf>,
}

impl Config {
    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Only explicitly given flags override the file
        if let Some(input) = args.input {
            config.input_path = input;
        }
        if let Some(output) = args.output {
            config.output_path = output;
        }
        if let Some(name) = args.name {
            config.artifact.identifier = name;
        }
        config.processing.verify |= args.verify;
        config.processing.verbose |= args.verbose;

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EmbedError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| EmbedError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Validate configuration parameter validity
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(EmbedError::config("Input path cannot be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(EmbedError::config("Output path cannot be empty"));
        }
        if normalize_path(&self.input_path) == normalize_path(&self.output_path) {
            return Err(EmbedError::config("Output path must differ from input path"));
        }

        if !artifact::is_valid_identifier(self.identifier()) {
            return Err(EmbedError::config(format!(
                "Invalid constant name: {:?}", self.identifier()
            )));
        }

        Ok(())
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EmbedError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| EmbedError::config(format!("Failed to write config file: {}", e)))
    }

    /// Create default config file
    pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}

/// Absolute, lexically cleaned form of `path` (`.` dropped, `..` applied)
fn normalize_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("audio/light-rain-109591.mp3"));
        assert_eq!(config.output_path, PathBuf::from("rain_sound.js"));
        assert_eq!(config.identifier(), "RAIN_SOUND_BASE64");
        assert!(!config.verify());
        assert!(!config.verbose());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        assert!(config.validate().is_ok());

        config.artifact.identifier = "not valid".to_string();
        assert!(config.validate().is_err());
        config.artifact.identifier = "SOUND".to_string();

        config.output_path = config.input_path.clone();
        assert!(config.validate().is_err());
        config.output_path = PathBuf::from("out.js");

        config.input_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_same_file_spelled_differently() {
        let mut config = Config::default();
        config.input_path = PathBuf::from("a.mp3");

        config.output_path = PathBuf::from("./a.mp3");
        assert!(config.validate().is_err());

        config.output_path = PathBuf::from("sounds/../a.mp3");
        assert!(config.validate().is_err());

        config.output_path = std::env::current_dir().unwrap().join("a.mp3");
        assert!(config.validate().is_err());

        config.output_path = PathBuf::from("./a.js");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.artifact.identifier = "THUNDER".to_string();
        config.processing.verify = true;

        assert!(config.save_to_file(&config_path).is_ok());
        assert!(config_path.exists());

        let loaded_config = Config::from_file(&config_path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_create_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("default.toml");

        Config::create_default_config(&config_path).unwrap();
        assert_eq!(Config::from_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        std::fs::write(&config_path, "[artifact]\nidentifier = \"WAVES\"\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.identifier(), "WAVES");
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        std::fs::write(&config_path, "input_path = [").unwrap();

        assert!(matches!(Config::from_file(&config_path), Err(EmbedError::Config { .. })));
        assert!(Config::from_file(temp_dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_args_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "input_path = \"sounds/wind.ogg\"\noutput_path = \"wind.js\"\n\n[artifact]\nidentifier = \"WIND\"\n",
        )
        .unwrap();

        let args = Args {
            output: Some(PathBuf::from("gen/wind_sound.js")),
            config_file: Some(config_path),
            verify: true,
            ..Default::default()
        };

        let config = Config::from_args_and_config(args).unwrap();
        assert_eq!(config.input_path, PathBuf::from("sounds/wind.ogg"));
        assert_eq!(config.output_path, PathBuf::from("gen/wind_sound.js"));
        assert_eq!(config.identifier(), "WIND");
        assert!(config.verify());
    }

    #[test]
    fn test_args_without_flags_match_defaults() {
        let config = Config::from_args_and_config(Args::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_args_reject_bad_name() {
        let args = Args {
            name: Some("class".to_string()),
            ..Default::default()
        };
        assert!(Config::from_args_and_config(args).is_err());
    }

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["soundembed", "-i", "a.mp3", "-o", "a.js", "-n", "A", "--verify"]);
        assert_eq!(args.input, Some(PathBuf::from("a.mp3")));
        assert_eq!(args.output, Some(PathBuf::from("a.js")));
        assert_eq!(args.name.as_deref(), Some("A"));
        assert!(args.verify);
        assert!(!args.verbose);
    }
}

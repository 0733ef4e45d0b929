//! Configuration system

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Configuration trait
///
/// Implemented by serde-derived settings structs so they can be read from and
/// written to `.toml` or `.ron` files.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Check the loaded values for consistency
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Parse configuration text in the format implied by `path`'s extension
    fn from_str_for_path(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = match extension(path) {
            Some("toml") => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
            Some("ron") => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_str_for_path(&contents, path)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from `path` when given, defaults otherwise
    fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value failed validation
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Name of the offending setting
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    struct Sample {
        width: u32,
        name: String,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { width: 800, name: "sample".to_string() }
        }
    }

    impl Config for Sample {
        fn validate(&self) -> Result<(), ConfigError> {
            if self.width == 0 {
                return Err(ConfigError::Invalid { field: "width", reason: "must be positive".to_string() });
            }
            Ok(())
        }
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let parsed = Sample::from_str_for_path("width = 640", Path::new("game.toml")).unwrap();
        assert_eq!(parsed, Sample { width: 640, name: "sample".to_string() });
    }

    #[test]
    fn test_ron_parse() {
        let parsed = Sample::from_str_for_path("(width: 320, name: \"tiny\")", Path::new("game.ron")).unwrap();
        assert_eq!(parsed.width, 320);
        assert_eq!(parsed.name, "tiny");
    }

    #[test]
    fn test_validation_runs_on_load() {
        let result = Sample::from_str_for_path("width = 0", Path::new("game.toml"));
        assert!(matches!(result, Err(ConfigError::Invalid { field: "width", .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = Sample::from_str_for_path("{}", Path::new("game.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("arcade_engine_config_{}.ron", std::process::id()));
        let original = Sample { width: 1024, name: "saved".to_string() };
        original.save_to_file(&path).unwrap();

        let loaded = Sample::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Sample::load_from_file("definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

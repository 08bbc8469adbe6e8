use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// e.g. "0.0.0.0:9200"
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:9200".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Randomly sampled records added on top of the five curated seeds.
    pub generated_records: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            generated_records: 100,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StubsearchConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

impl StubsearchConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.into(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.into(),
            source,
        })
    }

    /// Load the file when it exists, otherwise fall back to defaults so
    /// the mock can run with zero setup.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path, "no config file found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_match_the_reference_service() {
        let cfg = StubsearchConfig::default();

        assert_eq!(cfg.server.listen, "0.0.0.0:9200");
        assert_eq!(cfg.data.generated_records, 100);
    }

    #[test]
    fn partial_config_file_keeps_defaults_for_the_rest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
listen = "127.0.0.1:9201"
"#
        )
        .unwrap();

        let cfg = StubsearchConfig::from_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(cfg.server.listen, "127.0.0.1:9201");
        assert_eq!(cfg.data.generated_records, 100);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = StubsearchConfig::load_or_default("/nonexistent/stubsearch.toml").unwrap();

        assert_eq!(cfg.data.generated_records, 100);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[server\nlisten = ").unwrap();

        let err = StubsearchConfig::from_file(file.path().to_str().unwrap());
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }
}

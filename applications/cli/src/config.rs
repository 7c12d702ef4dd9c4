/// Reel configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "reel.toml";

/// Environment variable prefix (`REEL_CATALOG__PATH`, `REEL_LOG__FILTER`, ...)
pub const ENV_PREFIX: &str = "REEL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub log: LogSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Catalog file; the bundled catalog is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Seed for random play; entropy-seeded when unset
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable messages
    #[default]
    Text,

    /// One JSON object per command
    Json,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl ReelConfig {
    /// Load configuration from file and environment
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path.display().to_string()));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with REEL_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?.try_deserialize::<ReelConfig>()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn default_log_filter() -> String {
    "reel=warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = ReelConfig::default();
        assert!(config.catalog.path.is_none());
        assert!(config.session.random_seed.is_none());
        assert_eq!(config.log.filter, "reel=warn");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[catalog]\n\
             path = \"/srv/videos.txt\"\n\
             \n\
             [session]\n\
             random_seed = 9\n\
             \n\
             [output]\n\
             format = \"json\"\n"
        )
        .unwrap();

        let config = ReelConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/videos.txt")));
        assert_eq!(config.session.random_seed, Some(9));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.log.filter, "reel=warn");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReelConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound(_)));
    }

    #[test]
    fn toml_round_trip() {
        let mut config = ReelConfig::default();
        config.session.random_seed = Some(3);

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("random_seed = 3"));
        assert!(rendered.contains("filter = \"reel=warn\""));
    }
}

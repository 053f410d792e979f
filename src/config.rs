use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::plot::{CsvSink, JsonSink, NullSink, PlotError, PlotSink};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where plot data goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkFormat {
    Json,
    Csv,
    None,
}

impl Default for SinkFormat {
    fn default() -> Self {
        SinkFormat::Json
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    /// Overrides the per-operation artifact name.
    pub output_stem: Option<String>,
    pub format: SinkFormat,
    /// In a reordered comparison, take the sort order from the first file.
    pub sort_first: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            output_stem: None,
            format: SinkFormat::default(),
            sort_first: true,
        }
    }
}

impl Config {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Config loaded from {:?}", path);
        Ok(config)
    }

    /// Build the configured sink, creating the output directory if needed.
    pub fn make_sink(&self) -> Result<Box<dyn PlotSink>, PlotError> {
        let sink: Box<dyn PlotSink> = match self.format {
            SinkFormat::Json => Box::new(JsonSink::create(&self.output_dir, self.output_stem.clone())?),
            SinkFormat::Csv => Box::new(CsvSink::create(&self.output_dir, self.output_stem.clone())?),
            SinkFormat::None => Box::new(NullSink),
        };
        Ok(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, r#"{ "format": "csv", "sort_first": false }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.format, SinkFormat::Csv);
        assert!(!config.sort_first);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.output_stem, None);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, "{ format: }").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn none_format_needs_no_directory() {
        let config = Config {
            output_dir: PathBuf::from("/nonexistent/should/not/be/created"),
            format: SinkFormat::None,
            ..Config::default()
        };
        assert!(config.make_sink().is_ok());
        assert!(!config.output_dir.exists());
    }
}

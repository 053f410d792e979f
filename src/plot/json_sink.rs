use std::path::PathBuf;

use crate::plot::{artifact_path, prepare_dir, Figure, PlotError, PlotSink};

/// Writes each figure as a pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonSink {
    dir: PathBuf,
    stem: Option<String>,
}

impl JsonSink {
    pub fn create(dir: impl Into<PathBuf>, stem: Option<String>) -> Result<Self, PlotError> {
        let dir = dir.into();
        prepare_dir(&dir)?;
        Ok(Self { dir, stem })
    }
}

impl PlotSink for JsonSink {
    fn emit(&mut self, figure: &Figure) -> Result<Vec<PathBuf>, PlotError> {
        let path = artifact_path(&self.dir, self.stem.as_deref(), figure, "json");
        let json = serde_json::to_string_pretty(figure)?;
        std::fs::write(&path, json)?;
        tracing::info!("Plot data saved to {:?}", path);
        Ok(vec![path])
    }
}

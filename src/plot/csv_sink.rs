use std::path::PathBuf;

use crate::plot::{artifact_path, prepare_dir, Figure, PlotError, PlotSink};

/// Writes each figure as a CSV table: a `bin` column followed by one column per
/// histogram, padded with empty cells to the longest histogram.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
    stem: Option<String>,
}

impl CsvSink {
    pub fn create(dir: impl Into<PathBuf>, stem: Option<String>) -> Result<Self, PlotError> {
        let dir = dir.into();
        prepare_dir(&dir)?;
        Ok(Self { dir, stem })
    }
}

impl PlotSink for CsvSink {
    fn emit(&mut self, figure: &Figure) -> Result<Vec<PathBuf>, PlotError> {
        let path = artifact_path(&self.dir, self.stem.as_deref(), figure, "csv");
        let mut writer = csv::Writer::from_path(&path)?;

        let mut header = vec!["bin".to_string()];
        header.extend(figure.histograms.iter().map(|h| h.label.clone()));
        writer.write_record(&header)?;

        for i in 0..figure.max_bins() {
            let mut row = vec![i.to_string()];
            for h in &figure.histograms {
                row.push(h.bins.get(i).map(|v| v.to_string()).unwrap_or_default());
            }
            writer.write_record(&row)?;
        }
        writer.flush()?;

        tracing::info!("Exported CSV to {:?}", path);
        Ok(vec![path])
    }
}

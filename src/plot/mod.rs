//! Plotting sink boundary.
//!
//! The comparison pipeline hands finished [`Figure`]s to a [`PlotSink`]. Drawing
//! is left to whatever consumes the sink's output; the sinks here persist plot
//! data or keep it in memory.

pub mod csv_sink;
pub mod figure;
pub mod json_sink;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use csv_sink::CsvSink;
pub use figure::{Figure, Histogram, LineStyle, Orientation};
pub use json_sink::JsonSink;

/// Errors that can occur while handing a figure to a sink
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to initialize output directory {}: {source}", path.display())]
    Init {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write plot data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize plot data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV plot data: {0}")]
    Csv(#[from] csv::Error),
}

/// Consumer of finished figures.
pub trait PlotSink {
    /// Accept a figure, returning the paths of any artifacts written.
    fn emit(&mut self, figure: &Figure) -> Result<Vec<PathBuf>, PlotError>;
}

impl<S: PlotSink + ?Sized> PlotSink for Box<S> {
    fn emit(&mut self, figure: &Figure) -> Result<Vec<PathBuf>, PlotError> {
        (**self).emit(figure)
    }
}

/// Keeps every figure in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub figures: Vec<Figure>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl PlotSink for RecordingSink {
    fn emit(&mut self, figure: &Figure) -> Result<Vec<PathBuf>, PlotError> {
        self.figures.push(figure.clone());
        Ok(Vec::new())
    }
}

/// Discards figures.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PlotSink for NullSink {
    fn emit(&mut self, figure: &Figure) -> Result<Vec<PathBuf>, PlotError> {
        tracing::debug!("Discarding figure {:?}", figure.stem);
        Ok(Vec::new())
    }
}

/// Create `dir` if needed so later writes only fail on the file itself.
pub(crate) fn prepare_dir(dir: &Path) -> Result<(), PlotError> {
    std::fs::create_dir_all(dir).map_err(|source| PlotError::Init {
        path: dir.to_path_buf(),
        source,
    })
}

/// Resolve the artifact path for a figure, honoring a stem override.
pub(crate) fn artifact_path(
    dir: &Path,
    stem_override: Option<&str>,
    figure: &Figure,
    extension: &str,
) -> PathBuf {
    let stem = stem_override.unwrap_or(&figure.stem);
    dir.join(format!("{stem}.{extension}"))
}

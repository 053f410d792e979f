//! The two top-level comparisons between a pair of input files.
//!
//! [`compare`] sorts one file and reorders the other by the same permutation.
//! [`display_comparison`] reports which file sits closer to zero and forwards
//! both files unchanged.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::loader;
use crate::plot::figure::{Figure, Histogram, Orientation, BLUE, RED};
use crate::plot::{PlotError, PlotSink};
use crate::processing::ranking::{self, RankError};
use crate::processing::statistics::{self, StatSummary, StatsError};
use crate::report::{Closer, Reporter};
use crate::state::series::Series;

pub const COMPARE_STEM: &str = "comparison_histograms";
pub const DISPLAY_STEM: &str = "histograms";

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("No values available from file: {label}")]
    EmptyInput { label: String },

    #[error(
        "Files must have equal number of values: {left_label} has {left}, {right_label} has {right}"
    )]
    LengthMismatch {
        left_label: String,
        left: usize,
        right_label: String,
        right: usize,
    },

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Outcome of a sort-and-reorder comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub orientation: Orientation,
    /// Summaries of the first and second input, in argument order.
    pub summaries: [StatSummary; 2],
    /// Original indices of the sorted series, in ascending value order.
    pub permutation: Vec<usize>,
    pub sorted: Series,
    pub reordered: Series,
    pub artifacts: Vec<PathBuf>,
}

/// MAD and RMS of one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Spread {
    pub label: String,
    pub len: usize,
    pub mad: f64,
    pub rms: f64,
}

impl Spread {
    fn of(series: &Series) -> Self {
        Self {
            label: series.label.clone(),
            len: series.len(),
            mad: statistics::mean_absolute(series.values()),
            rms: statistics::root_mean_square(series.values()),
        }
    }
}

/// Outcome of a closeness-to-zero comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayResult {
    pub first: Spread,
    pub second: Spread,
    pub mad_closer: Closer,
    pub rms_closer: Closer,
    pub artifacts: Vec<PathBuf>,
}

impl DisplayResult {
    pub fn mad_winner(&self) -> &str {
        self.mad_closer.pick(&self.first.label, &self.second.label)
    }

    pub fn rms_winner(&self) -> &str {
        self.rms_closer.pick(&self.first.label, &self.second.label)
    }
}

/// Sort one series and reorder the other by the same permutation.
///
/// Both series must be non-empty and of equal length.
pub fn compare_series(
    first: &Series,
    second: &Series,
    orientation: Orientation,
) -> Result<ComparisonResult, CompareError> {
    if first.len() != second.len() {
        return Err(CompareError::LengthMismatch {
            left_label: first.label.clone(),
            left: first.len(),
            right_label: second.label.clone(),
            right: second.len(),
        });
    }
    require_values(first)?;

    let summaries = [
        StatSummary::summarize(first.values())?,
        StatSummary::summarize(second.values())?,
    ];

    let (sort_series, other) = if orientation.sorts_first() {
        (first, second)
    } else {
        (second, first)
    };

    let permutation = ranking::rank(sort_series.values());
    let reordered = ranking::apply(other.values(), &permutation)?;

    Ok(ComparisonResult {
        orientation,
        summaries,
        permutation: permutation.indices(),
        sorted: Series::new(sort_series.label.clone(), permutation.sorted_values()),
        reordered: Series::new(other.label.clone(), reordered),
        artifacts: Vec::new(),
    })
}

/// Measure how close each series sits to zero.
pub fn display_series(first: &Series, second: &Series) -> Result<DisplayResult, CompareError> {
    require_values(first)?;
    require_values(second)?;

    let first = Spread::of(first);
    let second = Spread::of(second);
    Ok(DisplayResult {
        mad_closer: Closer::judge(first.mad, second.mad),
        rms_closer: Closer::judge(first.rms, second.rms),
        first,
        second,
        artifacts: Vec::new(),
    })
}

/// Load two files, report their extremes, sort one and reorder the other, and
/// hand both to `sink`.
///
/// Failures are logged here before being returned.
pub fn compare<W: Write, S: PlotSink + ?Sized>(
    path_a: &Path,
    path_b: &Path,
    sort_first: bool,
    sink: &mut S,
    reporter: &mut Reporter<W>,
) -> Result<ComparisonResult, CompareError> {
    run_compare(path_a, path_b, sort_first, sink, reporter).inspect_err(|e| tracing::error!("{e}"))
}

/// Load two files, report which one is closer to zero by MAD and by RMS, and
/// hand both unmodified series to `sink`.
///
/// Failures are logged here before being returned.
pub fn display_comparison<W: Write, S: PlotSink + ?Sized>(
    path_a: &Path,
    path_b: &Path,
    sink: &mut S,
    reporter: &mut Reporter<W>,
) -> Result<DisplayResult, CompareError> {
    run_display(path_a, path_b, sink, reporter).inspect_err(|e| tracing::error!("{e}"))
}

fn run_compare<W: Write, S: PlotSink + ?Sized>(
    path_a: &Path,
    path_b: &Path,
    sort_first: bool,
    sink: &mut S,
    reporter: &mut Reporter<W>,
) -> Result<ComparisonResult, CompareError> {
    let first = loader::load(path_a);
    let second = loader::load(path_b);

    let mut result = compare_series(&first, &second, Orientation::from_sort_first(sort_first))?;
    tracing::info!(
        "Sorted {} values from {}, reordered {}",
        result.sorted.len(),
        result.sorted.label,
        result.reordered.label
    );

    reporter.min_max(&first.label, &result.summaries[0])?;
    reporter.min_max(&second.label, &result.summaries[1])?;

    result.artifacts = sink.emit(&comparison_figure(&result))?;
    reporter.saved(&result.artifacts)?;
    Ok(result)
}

fn run_display<W: Write, S: PlotSink + ?Sized>(
    path_a: &Path,
    path_b: &Path,
    sink: &mut S,
    reporter: &mut Reporter<W>,
) -> Result<DisplayResult, CompareError> {
    let first = loader::load(path_a);
    let second = loader::load(path_b);

    let mut result = display_series(&first, &second)?;

    reporter.spread(&result.first.label, result.first.mad, result.first.rms)?;
    reporter.spread(&result.second.label, result.second.mad, result.second.rms)?;
    reporter.verdict("MAD", result.mad_winner())?;
    reporter.verdict("RMS", result.rms_winner())?;

    result.artifacts = sink.emit(&display_figure(&first, &second))?;
    reporter.saved(&result.artifacts)?;
    Ok(result)
}

/// Sorted series in blue, reordered series in red.
pub fn comparison_figure(result: &ComparisonResult) -> Figure {
    Figure::new(COMPARE_STEM, "File Comparison")
        .with_orientation(result.orientation)
        .push(Histogram::new(
            "histSorted",
            format!("Sorted Values ({})", result.sorted.label),
            result.sorted.label.clone(),
            result.sorted.values().to_vec(),
            BLUE,
        ))
        .push(Histogram::new(
            "histReordered",
            format!("Reordered Values ({})", result.reordered.label),
            result.reordered.label.clone(),
            result.reordered.values().to_vec(),
            RED,
        ))
}

/// Raw series, both padded with zero bins to the longer length.
pub fn display_figure(first: &Series, second: &Series) -> Figure {
    let bins = first.len().max(second.len());
    Figure::new(DISPLAY_STEM, "Histograms")
        .with_axes("Line Number", "Value")
        .push(
            Histogram::new(
                "hist1",
                "Values from Before",
                first.label.clone(),
                first.values().to_vec(),
                RED,
            )
            .padded_to(bins),
        )
        .push(
            Histogram::new(
                "hist2",
                "Values from After",
                second.label.clone(),
                second.values().to_vec(),
                BLUE,
            )
            .padded_to(bins)
            .dashed(),
        )
}

fn require_values(series: &Series) -> Result<(), CompareError> {
    if series.is_empty() {
        return Err(CompareError::EmptyInput {
            label: series.label.clone(),
        });
    }
    Ok(())
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot summarize an empty series")]
    EmptyInput,
}

/// Summary statistics for a series.
///
/// `mad` is the mean of absolute values, (1/n)·Σ|v|, not the deviation from the
/// mean. Comparisons between files rely on that exact definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSummary {
    pub min_value: f64,
    pub min_index: usize,
    pub max_value: f64,
    pub max_index: usize,
    pub mad: f64,
    pub rms: f64,
}

impl StatSummary {
    /// Compute the summary in one pass. Extremes resolve ties to the lowest index.
    pub fn summarize(values: &[f64]) -> Result<Self, StatsError> {
        let (&first, rest) = values.split_first().ok_or(StatsError::EmptyInput)?;

        let mut summary = StatSummary {
            min_value: first,
            min_index: 0,
            max_value: first,
            max_index: 0,
            mad: 0.0,
            rms: 0.0,
        };

        for (i, &v) in rest.iter().enumerate() {
            if v < summary.min_value {
                summary.min_value = v;
                summary.min_index = i + 1;
            }
            if v > summary.max_value {
                summary.max_value = v;
                summary.max_index = i + 1;
            }
        }

        summary.mad = mean_absolute(values);
        summary.rms = root_mean_square(values);
        Ok(summary)
    }
}

/// (1/n)·Σ|v|. NaN for an empty slice.
pub fn mean_absolute(values: &[f64]) -> f64 {
    values.iter().map(|v| v.abs()).sum::<f64>() / values.len() as f64
}

/// sqrt((1/n)·Σv²). NaN for an empty slice.
pub fn root_mean_square(values: &[f64]) -> f64 {
    (values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64).sqrt()
}

use serde::{Deserialize, Serialize};

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::Solid
    }
}

/// Which input supplied the sort order in a reordered comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    SortFirst,
    SortSecond,
}

impl Orientation {
    pub fn from_sort_first(sort_first: bool) -> Self {
        if sort_first {
            Orientation::SortFirst
        } else {
            Orientation::SortSecond
        }
    }

    pub fn sorts_first(&self) -> bool {
        matches!(self, Orientation::SortFirst)
    }
}

/// One histogram: bin `i` holds the value at position `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub name: String,
    pub title: String,
    /// Source label shown in the legend.
    pub label: String,
    pub bins: Vec<f64>,
    pub color: [u8; 4],
    #[serde(default)]
    pub line_style: LineStyle,
}

impl Histogram {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        label: impl Into<String>,
        bins: Vec<f64>,
        color: [u8; 4],
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            label: label.into(),
            bins,
            color,
            line_style: LineStyle::default(),
        }
    }

    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    /// Extend with empty (zero) bins up to `len`.
    pub fn padded_to(mut self, len: usize) -> Self {
        if self.bins.len() < len {
            self.bins.resize(len, 0.0);
        }
        self
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }
}

/// Everything a sink needs to draw or persist one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Default artifact file stem; sinks may override it.
    pub stem: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    pub histograms: Vec<Histogram>,
}

impl Figure {
    pub fn new(stem: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            title: title.into(),
            x_label: None,
            y_label: None,
            orientation: None,
            histograms: Vec::new(),
        }
    }

    pub fn with_axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn push(mut self, histogram: Histogram) -> Self {
        self.histograms.push(histogram);
        self
    }

    /// Length of the longest histogram.
    pub fn max_bins(&self) -> usize {
        self.histograms.iter().map(Histogram::bin_count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_fills_with_zero() {
        let h = Histogram::new("h", "t", "a.txt", vec![1.0, 2.0], RED).padded_to(4);
        assert_eq!(h.bins, vec![1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn padding_never_truncates() {
        let h = Histogram::new("h", "t", "a.txt", vec![1.0, 2.0, 3.0], RED).padded_to(2);
        assert_eq!(h.bin_count(), 3);
    }

    #[test]
    fn figure_reports_longest_histogram() {
        let fig = Figure::new("out", "T")
            .push(Histogram::new("a", "A", "a", vec![1.0], RED))
            .push(Histogram::new("b", "B", "b", vec![1.0, 2.0, 3.0], BLUE).dashed());
        assert_eq!(fig.max_bins(), 3);
        assert_eq!(fig.histograms[1].line_style, LineStyle::Dashed);
    }

    #[test]
    fn orientation_maps_from_flag() {
        assert!(Orientation::from_sort_first(true).sorts_first());
        assert_eq!(Orientation::from_sort_first(false), Orientation::SortSecond);
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("series lengths differ: {left} values vs {right} values")]
    LengthMismatch { left: usize, right: usize },
}

/// A value paired with its zero-based position in the source series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedValue {
    pub value: f64,
    pub original_index: usize,
}

/// Ascending sort order of a series, kept alongside the sorted values.
#[derive(Debug, Clone, PartialEq)]
pub struct Permutation {
    entries: Vec<IndexedValue>,
}

impl Permutation {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Original indices in sorted order.
    pub fn indices(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.original_index).collect()
    }

    /// The source series' values in ascending order.
    pub fn sorted_values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }
}

/// Build the permutation that sorts `values` ascending.
///
/// The sort is stable: equal values keep their encounter order.
pub fn rank(values: &[f64]) -> Permutation {
    let mut entries: Vec<IndexedValue> = values
        .iter()
        .enumerate()
        .map(|(original_index, &value)| IndexedValue { value, original_index })
        .collect();
    entries.sort_by(|a, b| a.value.total_cmp(&b.value));
    Permutation { entries }
}

/// Reorder `other` so position `i` holds `other[permutation[i]]`.
pub fn apply(other: &[f64], permutation: &Permutation) -> Result<Vec<f64>, RankError> {
    if other.len() != permutation.len() {
        return Err(RankError::LengthMismatch {
            left: permutation.len(),
            right: other.len(),
        });
    }
    Ok(permutation
        .entries
        .iter()
        .map(|e| other[e.original_index])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_ascending() {
        let p = rank(&[3.0, 1.0, 2.0]);
        assert_eq!(p.indices(), vec![1, 2, 0]);
        assert_eq!(p.sorted_values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn apply_follows_sort_order_of_other_series() {
        let p = rank(&[3.0, 1.0, 2.0]);
        assert_eq!(apply(&[30.0, 10.0, 20.0], &p).unwrap(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let p = rank(&[2.0, 1.0, 2.0, 1.0]);
        assert_eq!(p.indices(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn negative_zero_sorts_before_positive_zero() {
        let p = rank(&[0.0, -0.0]);
        assert_eq!(p.indices(), vec![1, 0]);
    }

    #[test]
    fn apply_rejects_length_mismatch() {
        let p = rank(&[1.0, 2.0]);
        assert_eq!(
            apply(&[1.0, 2.0, 3.0], &p),
            Err(RankError::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn empty_series_ranks_to_empty_permutation() {
        let p = rank(&[]);
        assert!(p.is_empty());
        assert_eq!(apply(&[], &p).unwrap(), Vec::<f64>::new());
    }
}

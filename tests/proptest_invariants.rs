use oxidecompare::data::loader::parse_values;
use oxidecompare::processing::ranking::{apply, rank, RankError};
use oxidecompare::processing::statistics::StatSummary;
use proptest::prelude::*;

fn finite_values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rank_is_sorting_bijection(values in finite_values(64)) {
        let p = rank(&values);
        let indices = p.indices();

        let mut seen = indices.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..values.len()).collect::<Vec<_>>());

        for w in indices.windows(2) {
            prop_assert!(values[w[0]] <= values[w[1]]);
        }
    }

    #[test]
    fn rank_is_stable_on_ties(values in prop::collection::vec(0u8..4, 0..64)) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let indices = rank(&values).indices();
        for w in indices.windows(2) {
            if values[w[0]] == values[w[1]] {
                prop_assert!(w[0] < w[1]);
            }
        }
    }

    #[test]
    fn apply_preserves_length_or_rejects(
        sort in finite_values(32),
        other in finite_values(32),
    ) {
        let p = rank(&sort);
        match apply(&other, &p) {
            Ok(reordered) => {
                prop_assert_eq!(sort.len(), other.len());
                prop_assert_eq!(reordered.len(), other.len());
            }
            Err(RankError::LengthMismatch { left, right }) => {
                prop_assert_ne!(sort.len(), other.len());
                prop_assert_eq!((left, right), (sort.len(), other.len()));
            }
        }
    }

    #[test]
    fn applying_own_rank_sorts(values in finite_values(64)) {
        let p = rank(&values);
        prop_assert_eq!(apply(&values, &p).unwrap(), p.sorted_values());
    }

    #[test]
    fn summary_bounds_hold(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64)) {
        let s = StatSummary::summarize(&values).unwrap();

        prop_assert_eq!(values[s.min_index], s.min_value);
        prop_assert_eq!(values[s.max_index], s.max_value);
        prop_assert!(values[..s.min_index].iter().all(|&v| v > s.min_value));
        prop_assert!(values[..s.max_index].iter().all(|&v| v < s.max_value));
        prop_assert!(values.iter().all(|&v| s.min_value <= v && v <= s.max_value));

        // Mean absolute value never exceeds RMS.
        prop_assert!(s.mad >= 0.0);
        prop_assert!(s.mad <= s.rms * (1.0 + 1e-12) + 1e-12);
    }

    #[test]
    fn parsing_printed_values_round_trips(values in finite_values(32)) {
        let text = values.iter().map(f64::to_string).collect::<Vec<_>>().join("\n");
        prop_assert_eq!(parse_values(&text), values);
    }
}

// File: crates/nanochart-core/tests/properties.rs
// Purpose: Property checks for tick sequences, projection and label reduction.

use nanochart_core::types::map_labels;
use nanochart_core::{
    calculate_range_projection, extend_range, reduce_collection, resolve, values_for_range, Range, Series,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ticks_span_range_exactly(min in -1.0e6f64..1.0e6, span in 1.0f64..1.0e6) {
        let range = Range::new(min, min + span);
        let ticks = values_for_range(range);
        prop_assert!(ticks.len() >= 2);
        prop_assert_eq!(ticks[0], range.min);
        prop_assert_eq!(*ticks.last().unwrap(), range.max);
    }

    #[test]
    fn sub_unit_ticks_are_endpoints(min in -1.0e6f64..1.0e6, span in 0.0f64..0.999) {
        let range = Range::new(min, min + span);
        prop_assert_eq!(values_for_range(range), vec![range.min, range.max]);
    }

    #[test]
    fn extension_contains_data(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
        let data = Range::new(a.min(b), a.max(b));
        let ext = extend_range(data);
        prop_assert!(ext.min <= data.min);
        prop_assert!(ext.max >= data.max);
    }

    #[test]
    fn projection_endpoints_exact(
        base_min in -1.0e4f64..1.0e4, base_span in 0.001f64..1.0e4,
        target_min in -1.0e4f64..1.0e4, target_span in 0.0f64..1.0e4,
    ) {
        let base = Range::new(base_min, base_min + base_span);
        let target = Range::new(target_min, target_min + target_span);
        prop_assert_eq!(calculate_range_projection(base, target, base.min).unwrap(), target.min);
        prop_assert_eq!(calculate_range_projection(base, target, base.max).unwrap(), target.max);
    }

    #[test]
    fn projection_round_trips(
        base_min in -1.0e3f64..1.0e3, base_span in 1.0f64..1.0e3,
        target_min in -1.0e3f64..1.0e3, target_span in 1.0f64..1.0e3,
        t in 0.01f64..0.99,
    ) {
        let a = Range::new(base_min, base_min + base_span);
        let b = Range::new(target_min, target_min + target_span);
        let value = a.min + a.span() * t;
        let there = calculate_range_projection(a, b, value).unwrap();
        let there = there.clamp(b.min, b.max);
        let back = calculate_range_projection(b, a, there).unwrap();
        prop_assert!((back - value).abs() <= 1e-6 * a.span().max(1.0));
    }

    #[test]
    fn projection_rejects_values_outside(base_min in -1.0e3f64..1.0e3, span in 0.0f64..1.0e3, over in 0.001f64..100.0) {
        let base = Range::new(base_min, base_min + span);
        let target = Range::new(0.0, 100.0);
        prop_assert!(calculate_range_projection(base, target, base.max + over).is_err());
        prop_assert!(calculate_range_projection(base, target, base.min - over).is_err());
    }

    #[test]
    fn reduction_strictly_shrinks_and_keeps_indexes(n in 2usize..500) {
        let mut current = map_labels(0..n);
        while current.len() > 1 {
            let before = current.len();
            current = reduce_collection(current);
            prop_assert!(current.len() < before);
            prop_assert_eq!(current.len(), (before + 1) / 2);
            prop_assert!(current.iter().all(|c| c.label == c.index));
        }
        prop_assert_eq!(current.len(), 1);
        prop_assert_eq!(current[0].index, 0);
    }

    #[test]
    fn resolved_ranges_cover_every_sample(samples in proptest::collection::vec(-1.0e6f64..1.0e6, 1..40)) {
        let n = samples.len();
        let shifted: Vec<f64> = samples.iter().rev().copied().collect();
        let series = vec![Series::new("a", samples.clone()), Series::new("b", shifted)];
        let ranges = resolve(&series, n).unwrap();
        prop_assert_eq!(ranges.x_values, Range::new(0.0, n as f64 - 1.0));
        for v in samples {
            prop_assert!(ranges.y_values.contains(v));
        }
    }
}

//! Property-based tests for neo-seeker using proptest.

use std::cell::Cell;
use std::sync::Arc;

use chrono::NaiveDate;
use neo_seeker::{
    create_filters, limit, Approach, CloseApproach, Criteria, FilterSet, NearEarthObject,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn day(offset: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(offset as u64)
}

// Strategy to generate approaches
fn approach_strategy() -> impl Strategy<Value = CloseApproach> {
    (
        0u32..60,
        0u32..24,
        0.0f64..2.0,
        0.0f64..40.0,
        prop::option::of(0.0f64..5.0),
        any::<bool>(),
    )
        .prop_map(|(offset, hour, distance, velocity, diameter, hazardous)| {
            let mut neo = NearEarthObject::new("prop").with_hazardous(hazardous);
            neo.diameter = diameter;
            let time = day(offset).and_hms_opt(hour, 0, 0).unwrap();
            CloseApproach::new(Arc::new(neo), time, distance, velocity)
        })
}

fn select_all<'a>(filters: &FilterSet, items: &'a [CloseApproach]) -> Vec<&'a CloseApproach> {
    filters
        .select(items)
        .collect::<neo_seeker::Result<Vec<_>>>()
        .unwrap()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Min bounds keep exactly the approaches at or above the bound.
    #[test]
    fn min_bounds_are_ge(
        items in prop::collection::vec(approach_strategy(), 0..50),
        bound in 0.0f64..2.0,
    ) {
        let filters = create_filters(&Criteria::new().with_distance_min(bound));
        let results = select_all(&filters, &items);
        let expected = items.iter().filter(|a| a.distance >= bound).count();
        prop_assert_eq!(results.len(), expected);
    }

    /// Max bounds keep exactly the approaches at or below the bound.
    #[test]
    fn max_bounds_are_le(
        items in prop::collection::vec(approach_strategy(), 0..50),
        bound in 0.0f64..40.0,
    ) {
        let filters = create_filters(&Criteria::new().with_velocity_max(bound));
        for approach in &items {
            prop_assert_eq!(filters.matches(approach).unwrap(), approach.velocity <= bound);
        }
    }

    /// Diameter bounds never keep bodies of unknown size.
    #[test]
    fn diameter_bounds_skip_unknown(
        items in prop::collection::vec(approach_strategy(), 0..50),
        min in 0.0f64..5.0,
    ) {
        let filters = create_filters(&Criteria::new().with_diameter_min(min));
        for approach in select_all(&filters, &items) {
            let diameter = approach.neo.diameter;
            prop_assert!(diameter.is_some());
            prop_assert!(diameter.unwrap() >= min);
        }
    }

    /// A date range keeps approaches whose calendar date lies inside it.
    #[test]
    fn date_range_is_inclusive(
        items in prop::collection::vec(approach_strategy(), 0..50),
        start in 0u32..60,
        len in 0u32..30,
    ) {
        let (start, end) = (day(start), day(start + len));
        let filters = create_filters(&Criteria::new().with_start_date(start).with_end_date(end));
        for approach in &items {
            let date = approach.time().date();
            prop_assert_eq!(filters.matches(approach).unwrap(), start <= date && date <= end);
        }
    }

    /// Combined criteria are a conjunction of the individual ones.
    #[test]
    fn criteria_combine_with_and(
        items in prop::collection::vec(approach_strategy(), 0..50),
        min in 0.0f64..2.0,
        max in 0.0f64..2.0,
        hazardous in any::<bool>(),
    ) {
        let both = create_filters(
            &Criteria::new().with_distance_min(min).with_distance_max(max).with_hazardous(hazardous),
        );
        let lower = create_filters(&Criteria::new().with_distance_min(min));
        let upper = create_filters(&Criteria::new().with_distance_max(max));
        let hazard = create_filters(&Criteria::new().with_hazardous(hazardous));

        for approach in &items {
            let expected = lower.matches(approach).unwrap()
                && upper.matches(approach).unwrap()
                && hazard.matches(approach).unwrap();
            prop_assert_eq!(both.matches(approach).unwrap(), expected);
        }
    }

    /// Empty criteria select everything, in order.
    #[test]
    fn empty_criteria_select_all(
        items in prop::collection::vec(approach_strategy(), 0..50),
    ) {
        let filters = create_filters(&Criteria::new());
        let results = select_all(&filters, &items);
        prop_assert_eq!(results.len(), items.len());
        for (a, b) in results.iter().zip(items.iter()) {
            prop_assert!(std::ptr::eq(*a, b));
        }
    }

    /// Selection never grows the collection and preserves input order.
    #[test]
    fn select_preserves_order(
        items in prop::collection::vec(approach_strategy(), 0..50),
        max in 0.0f64..2.0,
    ) {
        let filters = create_filters(&Criteria::new().with_distance_max(max));
        let results = select_all(&filters, &items);
        prop_assert!(results.len() <= items.len());

        let positions: Vec<usize> = results
            .iter()
            .map(|r| items.iter().position(|x| std::ptr::eq(x, *r)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// limit yields a prefix of length min(n, len), or everything for None/0.
    #[test]
    fn limit_yields_prefix(
        items in prop::collection::vec(any::<i64>(), 0..100),
        n in prop::option::of(0usize..120),
    ) {
        let limited: Vec<i64> = limit(items.iter().copied(), n).collect();
        let expected = match n {
            None | Some(0) => items.len(),
            Some(n) => n.min(items.len()),
        };
        prop_assert_eq!(limited.len(), expected);
        prop_assert_eq!(&limited[..], &items[..expected]);
    }

    /// limit never pulls more than n items from its source.
    #[test]
    fn limit_pulls_at_most_n(
        len in 0usize..100,
        n in 1usize..50,
    ) {
        let pulled = Cell::new(0usize);
        let source = (0..len).inspect(|_| pulled.set(pulled.get() + 1));
        let count = limit(source, Some(n)).count();
        prop_assert_eq!(count, n.min(len));
        prop_assert_eq!(pulled.get(), n.min(len));
    }
}

use devgalaxy::consts::{ORBIT_RADIUS, VERTICAL_JITTER};
use devgalaxy::galaxy::{aggregate, seeded_rng, GalaxyLayoutEngine};
use devgalaxy::profile::{ProfileRecord, TechStack};
use proptest::prelude::*;
use std::collections::BTreeSet;

// --- STRATEGIES ---

fn arb_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-z]{1,6}", 0..4)
}

prop_compose! {
    fn arb_record()(
        id in "[a-z0-9]{1,8}",
        name in "[A-Za-z ]{0,12}",
        languages in arb_set(),
        frameworks in arb_set(),
        tools in arb_set(),
        databases in arb_set(),
        color in proptest::option::of("#[0-9a-f]{6}"),
        size in proptest::option::of(any::<f64>()),
        ring_count in proptest::option::of(0u32..8),
        like_count in proptest::option::of(any::<u64>()),
        view_count in proptest::option::of(any::<u64>()),
    ) -> ProfileRecord {
        ProfileRecord {
            id,
            name,
            stack: TechStack { languages, frameworks, tools, databases },
            color,
            size,
            ring_count,
            like_count,
            view_count,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_count_law(
        records in proptest::collection::vec(arb_record(), 0..25),
        max in 0usize..15,
        seed in any::<u64>()
    ) {
        let planets = GalaxyLayoutEngine::default().layout(&records, max, &mut seeded_rng(Some(seed)));
        prop_assert_eq!(aggregate(&planets).planet_count, records.len().min(max));
    }

    #[test]
    fn test_planets_sit_on_the_orbit(
        records in proptest::collection::vec(arb_record(), 0..12),
        seed in any::<u64>()
    ) {
        let planets = GalaxyLayoutEngine::default().layout(&records, 10, &mut seeded_rng(Some(seed)));
        for (p, r) in planets.iter().zip(&records) {
            prop_assert_eq!(&p.id, &r.id);
            let radius = p.position.x.hypot(p.position.z);
            prop_assert!((radius - ORBIT_RADIUS).abs() < 1e-9);
            prop_assert!(p.position.y.abs() <= VERTICAL_JITTER);
            prop_assert!(p.size.is_finite() && p.size > 0.0);
            prop_assert!(!p.color.is_empty());
        }
    }

    #[test]
    fn test_total_ignores_tools_and_databases(
        records in proptest::collection::vec(arb_record(), 0..12)
    ) {
        let planets = GalaxyLayoutEngine::default().layout(&records, 10, &mut seeded_rng(Some(0)));
        let expected: usize = records
            .iter()
            .take(10)
            .map(|r| r.stack.languages.len() + r.stack.frameworks.len())
            .sum();
        prop_assert_eq!(aggregate(&planets).tech_stack_total, expected);
    }
}

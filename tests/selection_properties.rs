use proptest::prelude::*;

use courseplan::advisory::analyze_distribution;
use courseplan::algorithm::select_courses;
use courseplan::models::{Course, Day, Mode};

fn arb_course() -> impl Strategy<Value = Course> {
    (
        0u32..8,
        prop_oneof![Just(Mode::InCampus), Just(Mode::Online)],
        prop::sample::select(Day::ALL.to_vec()),
        1u32..=12,
        prop_oneof![Just("AM"), Just("PM")],
        prop::sample::select(vec!["Technical", "Practical", "Theoretical"]),
    )
        .prop_map(|(credits, mode, day, hour, marker, category)| {
            Course::new("Course", credits, mode, "Someone", day, format!("{}{}", hour, marker), category).unwrap()
        })
}

proptest! {
    #[test]
    fn occurs_same_time_is_symmetric(a in arb_course(), b in arb_course()) {
        prop_assert_eq!(a.occurs_same_time(&b), b.occurs_same_time(&a));
    }

    #[test]
    fn selection_respects_all_constraints(candidates in prop::collection::vec(arb_course(), 0..25), max in 0u32..20) {
        let selected = select_courses(&candidates, max);

        let total: u32 = selected.iter().map(|c| c.credits()).sum();
        prop_assert!(total <= max);
        prop_assert!(selected.iter().filter(|c| c.is_online()).count() <= 1);
        for (i, a) in selected.iter().enumerate() {
            for b in &selected[i + 1..] {
                prop_assert!(!a.occurs_same_time(b));
            }
        }
    }

    #[test]
    fn selection_preserves_input_order(candidates in prop::collection::vec(arb_course(), 0..25)) {
        let selected = select_courses(&candidates, 15);
        let mut pos = 0;
        for c in &selected {
            let found = candidates[pos..].iter().position(|x| x == c);
            prop_assert!(found.is_some());
            pos += found.unwrap_or(0) + 1;
        }
    }

    #[test]
    fn advice_is_never_empty(candidates in prop::collection::vec(arb_course(), 0..10)) {
        prop_assert!(!analyze_distribution(&candidates).is_empty());
    }
}

#[test]
fn empty_candidates_select_nothing() {
    for max in [0, 1, 10, 100] {
        assert!(select_courses(&[], max).is_empty());
    }
}

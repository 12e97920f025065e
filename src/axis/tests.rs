use super::*;
use crate::error::FourierError;
use crate::model::{Domain, NumericRange};

fn maxes(maxes: &[f64]) -> Vec<AxisDescription> {
    maxes
        .iter()
        .map(|&max| AxisDescription::new(max, max / 4.0, max / 4.0, max / 2.0))
        .collect()
}

fn reference_ladder() -> AxisLadder {
    AxisLadder::new(maxes(&[2.0, 1.5, 1.0, 0.75, 0.5, 0.25]), &[])
}

#[test]
fn test_picks_narrowest_level_that_fits() {
    let ladder = reference_ladder();
    let level = ladder.level_for_range(&NumericRange::symmetric(1.2));
    assert_eq!(level, 1);
    assert_eq!(ladder.get(level).max, 1.5);
}

#[test]
fn test_exact_fit_uses_that_level() {
    let ladder = reference_ladder();
    assert_eq!(ladder.level_for_range(&NumericRange::symmetric(1.0)), 2);
    assert_eq!(ladder.level_for_range(&NumericRange::symmetric(0.25)), 5);
    assert_eq!(ladder.level_for_range(&NumericRange::symmetric(0.0)), 5);
}

#[test]
fn test_overflow_clamps_to_widest() {
    let ladder = reference_ladder();
    assert_eq!(ladder.level_for_range(&NumericRange::symmetric(16.5)), 0);
}

#[test]
fn test_level_for_range_is_monotonic() {
    let ladder = reference_ladder();
    let mut previous_max = 0.0;
    for i in 0..=300 {
        let target = i as f64 * 0.01;
        let level = ladder.level_for_range(&NumericRange::symmetric(target));
        let max = ladder.get(level).max;
        assert!(
            max >= previous_max,
            "target {} chose max {} after max {}",
            target,
            max,
            previous_max
        );
        previous_max = max;
    }
}

#[test]
#[should_panic]
fn test_asymmetric_target_panics() {
    reference_ladder().level_for_range(&NumericRange::new(-1.0, 1.2));
}

#[test]
fn test_rejects_empty_ladder() {
    assert!(matches!(
        AxisLadder::try_new(vec![], &[]),
        Err(FourierError::EmptyLadder)
    ));
}

#[test]
fn test_rejects_unsorted_ladder() {
    let result = AxisLadder::try_new(maxes(&[2.0, 1.0, 1.5]), &[]);
    match result {
        Err(FourierError::UnsortedLadder { index, .. }) => assert_eq!(index, 2),
        other => panic!("expected UnsortedLadder, got {:?}", other),
    }
    // Duplicate levels are not strictly descending either.
    assert!(AxisLadder::try_new(maxes(&[1.0, 1.0]), &[]).is_err());
}

#[test]
#[should_panic]
fn test_new_panics_on_ascending_ladder() {
    AxisLadder::new(maxes(&[0.5, 1.0]), &[]);
}

#[test]
fn test_rejects_non_positive_spacing() {
    let descriptions = vec![AxisDescription::new(1.0, 0.0, 0.25, 0.5)];
    assert!(matches!(
        AxisLadder::try_new(descriptions, &[]),
        Err(FourierError::InvalidDescription { index: 0, .. })
    ));
}

#[test]
fn test_ladder_rules() {
    let narrow = maxes(&[1.0, 0.5, 0.125]);
    assert!(AxisLadder::try_new(narrow.clone(), &[]).is_ok());
    assert!(matches!(
        AxisLadder::try_new(narrow.clone(), &[LadderRule::NarrowestAtLeast(0.25)]),
        Err(FourierError::LadderRule(_))
    ));
    assert!(AxisLadder::try_new(narrow.clone(), &[LadderRule::WidestAtMost(0.9)]).is_err());

    fn at_most_two_levels(descriptions: &[AxisDescription]) -> Result<(), String> {
        if descriptions.len() <= 2 {
            Ok(())
        } else {
            Err(format!("{} levels", descriptions.len()))
        }
    }
    assert!(AxisLadder::try_new(narrow, &[LadderRule::Custom(at_most_two_levels)]).is_err());
}

#[test]
fn test_zoom_in_and_out_clamp() {
    let ladder = reference_ladder();
    assert_eq!(ladder.zoom_in(0), 1);
    assert_eq!(ladder.zoom_in(5), 5);
    assert_eq!(ladder.zoom_out(5), 4);
    assert_eq!(ladder.zoom_out(0), 0);
    assert!(!ladder.can_zoom_out(0));
    assert!(!ladder.can_zoom_in(5));
    assert!(ladder.can_zoom_in(4));
}

#[test]
#[should_panic(expected = "zoom level 6 out of range")]
fn test_zoom_in_past_the_ladder_panics() {
    reference_ladder().zoom_in(6);
}

#[test]
#[should_panic(expected = "zoom level 9 out of range")]
fn test_zoom_out_past_the_ladder_panics() {
    reference_ladder().zoom_out(9);
}

#[test]
fn test_x_range_scales_by_domain() {
    let description = AxisDescription::new(0.5, 0.125, 0.125, 0.25);
    let period = 1000.0 / 440.0;

    let space = x_range_for_domain(&description, Domain::Space, 2.0, period);
    assert_eq!(space, NumericRange::new(-1.0, 1.0));

    let both = x_range_for_domain(&description, Domain::SpaceAndTime, 2.0, period);
    assert_eq!(both, space);

    let time = x_range_for_domain(&description, Domain::Time, 2.0, period);
    assert!((time.max - period / 2.0).abs() < 1e-12);
    assert!(time.is_symmetric());
}

#[test]
fn test_from_json() {
    let json = r#"[
        {"max": 2.0, "gridLineSpacing": 0.5, "tickMarkSpacing": 0.5, "tickLabelSpacing": 1.0},
        {"max": 1.0, "gridLineSpacing": 0.25, "tickMarkSpacing": 0.25, "tickLabelSpacing": 0.5}
    ]"#;
    let ladder = AxisLadder::from_json(json, &[]).unwrap();
    assert_eq!(ladder.len(), 2);
    assert_eq!(ladder.get(1).tick_label_spacing, 0.5);

    assert!(matches!(
        AxisLadder::from_json("[{\"max\": 1.0}]", &[]),
        Err(FourierError::ConfigFormat(_))
    ));
}

#[test]
fn test_built_in_ladders_are_valid() {
    assert_eq!(X_AXIS_LADDER.get(X_AXIS_DEFAULT_LEVEL).max, 1.0);
    assert_eq!(X_AXIS_LADDER.get(X_AXIS_LADDER.narrowest_level()).max, 0.25);
    assert_eq!(SUM_Y_AXIS_LADDER.get(SUM_Y_AXIS_DEFAULT_LEVEL).max, 2.0);
    assert_eq!(SUM_Y_AXIS_DEFAULT_LEVEL, SUM_Y_AXIS_LADDER.narrowest_level());
}

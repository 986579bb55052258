#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use hamcut::math::{Point2, Vector2};
use hamcut::{BalanceCheck, Color, Cut, HamSandwichCut, PointSet};

const ON_LINE: f64 = 1e-7;

fn cut_for(red: &[(f64, f64)], blue: &[(f64, f64)]) -> (HamSandwichCut, Cut) {
    let op = HamSandwichCut::new(
        PointSet::from_coords(Color::Red, red).unwrap(),
        PointSet::from_coords(Color::Blue, blue).unwrap(),
    );
    let cut = op.execute().unwrap();
    (op, cut)
}

const SCENARIO_A_RED: [(f64, f64); 3] = [(-1.0, 0.0), (1.0, 2.0), (3.0, -1.0)];
const SCENARIO_A_BLUE: [(f64, f64); 3] = [(-2.0, 3.0), (0.0, -2.0), (2.0, 1.0)];

#[test]
fn scenario_a_three_and_three() {
    let (op, cut) = cut_for(&SCENARIO_A_RED, &SCENARIO_A_BLUE);
    let report = BalanceCheck::new(cut, ON_LINE).execute(op.red(), op.blue());
    assert!(report.is_bisecting(), "{cut:?} -> {report:?}");
    for counts in [report.red, report.blue] {
        assert!(counts.positive <= 1 && counts.negative <= 1, "{counts:?}");
        assert!(counts.on >= 1, "{counts:?}");
    }
}

#[test]
fn scenario_b_nested_squares() {
    let red = [(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (2.0, 2.0)];
    let blue = [(-5.0, -5.0), (5.0, -5.0), (-5.0, 5.0), (5.0, 5.0)];
    let (op, cut) = cut_for(&red, &blue);
    let report = BalanceCheck::new(cut, ON_LINE).execute(op.red(), op.blue());
    assert!(report.is_bisecting(), "{cut:?} -> {report:?}");
    assert!(report.red.positive <= 2 && report.red.negative <= 2);
    assert!(report.blue.positive <= 2 && report.blue.negative <= 2);
}

#[test]
fn single_point_each_passes_through_both() {
    let red = Point2::new(-2.0, 1.0);
    let blue = Point2::new(4.0, -0.5);
    let (_, cut) = cut_for(&[(red.x, red.y)], &[(blue.x, blue.y)]);
    assert!(cut.contains(&red, 1e-9), "{cut:?}");
    assert!(cut.contains(&blue, 1e-9), "{cut:?}");
}

#[test]
fn vertical_only_cut_is_detected() {
    let red = [(-1.0, 0.0), (0.0, 0.0), (1.0, 0.0)];
    let blue = [(-1.0, 3.0), (0.0, 3.0), (1.0, 3.0)];
    let (_, cut) = cut_for(&red, &blue);
    let Cut::Vertical { x } = cut else {
        panic!("expected a vertical cut, got {cut:?}");
    };
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
}

#[test]
fn scaling_and_translation_commute_with_the_cut() {
    let scale = 2.0;
    let t = Vector2::new(3.0, -1.0);
    let map = |pts: &[(f64, f64)]| -> Vec<(f64, f64)> {
        pts.iter()
            .map(|&(x, y)| (scale * x + t.x, scale * y + t.y))
            .collect()
    };

    let (_, cut) = cut_for(&SCENARIO_A_RED, &SCENARIO_A_BLUE);
    let (_, image) = cut_for(&map(&SCENARIO_A_RED), &map(&SCENARIO_A_BLUE));
    let expected = cut.mapped(scale, &t);

    match (image, expected) {
        (
            Cut::NonVertical { slope, intercept },
            Cut::NonVertical {
                slope: es,
                intercept: ei,
            },
        ) => {
            assert_abs_diff_eq!(slope, es, epsilon = 1e-6);
            assert_abs_diff_eq!(intercept, ei, epsilon = 1e-6);
        }
        (Cut::Vertical { x }, Cut::Vertical { x: ex }) => {
            assert_abs_diff_eq!(x, ex, epsilon = 1e-6);
        }
        other => panic!("cut kinds differ: {other:?}"),
    }
}

#[test]
fn repeated_runs_are_identical() {
    let (_, first) = cut_for(&SCENARIO_A_RED, &SCENARIO_A_BLUE);
    let (_, second) = cut_for(&SCENARIO_A_RED, &SCENARIO_A_BLUE);
    assert_eq!(first, second);
}

#[test]
fn unequal_set_sizes() {
    let red = [(0.0, 0.0), (1.0, 5.0), (2.0, 1.0), (3.0, 4.0), (4.0, 2.0), (5.0, 3.5), (6.0, -1.0)];
    let blue = [(-3.0, 2.0), (7.0, 0.5)];
    let (op, cut) = cut_for(&red, &blue);
    let report = BalanceCheck::new(cut, ON_LINE).execute(op.red(), op.blue());
    assert!(report.is_bisecting(), "{cut:?} -> {report:?}");
}

#[test]
fn shared_points_with_nearly_collinear_extras() {
    // P and Q belong to both sets; each set adds one point just below the
    // line through them, on opposite sides along x.
    for i in 0..199 {
        let s = -1.0 + f64::from(i) * 0.01;
        let red = [(0.0, 0.0), (1.0, s), (2.0, 2.0 * s - 1e-6)];
        let blue = [(0.0, 0.0), (1.0, s), (-1.0, -s - 1e-6)];
        let (op, cut) = cut_for(&red, &blue);
        let report = BalanceCheck::new(cut, 1e-9).execute(op.red(), op.blue());
        assert!(report.is_bisecting(), "s={s}: {cut:?} -> {report:?}");
    }

    let s = 0.22427;
    let (op, cut) = cut_for(
        &[(0.0, 0.0), (1.0, s), (2.0, 2.0 * s - 1e-6)],
        &[(0.0, 0.0), (1.0, s), (-1.0, -s - 1e-6)],
    );
    let report = BalanceCheck::new(cut, 1e-9).execute(op.red(), op.blue());
    assert!(report.is_bisecting(), "{cut:?} -> {report:?}");
}

#[test]
fn duplicate_points_and_median_ties() {
    let red = [(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (2.0, 0.0)];
    let blue = [(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (3.0, 1.0)];
    let (op, cut) = cut_for(&red, &blue);
    let report = BalanceCheck::new(cut, ON_LINE).execute(op.red(), op.blue());
    assert!(report.is_bisecting(), "{cut:?} -> {report:?}");
}

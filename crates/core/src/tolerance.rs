//! Tolerance band evaluation.

/// Whether `current` lies within `tolerance` degrees of `target`.
///
/// The band is inclusive: a reading exactly `tolerance` away is in
/// tolerance. A missing input (any non-finite value) yields `false`.
pub fn in_tolerance(current: f64, target: f64, tolerance: f64) -> bool {
    if !(current.is_finite() && target.is_finite() && tolerance.is_finite()) {
        return false;
    }
    (current - target).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_target_is_in_tolerance() {
        assert!(in_tolerance(65.0, 65.0, 2.0));
        assert!(in_tolerance(65.0, 65.0, 0.0));
    }

    #[test]
    fn boundary_is_inclusive_on_both_sides() {
        assert!(in_tolerance(67.0, 65.0, 2.0));
        assert!(in_tolerance(63.0, 65.0, 2.0));
    }

    #[test]
    fn beyond_band_is_out_of_tolerance() {
        assert!(!in_tolerance(68.0, 65.0, 2.0));
        assert!(!in_tolerance(62.9, 65.0, 2.0));
    }

    #[test]
    fn zero_tolerance_requires_exact_match() {
        assert!(!in_tolerance(19.01, 19.0, 0.0));
    }

    #[test]
    fn missing_inputs_are_not_in_tolerance() {
        assert!(!in_tolerance(f64::NAN, 65.0, 2.0));
        assert!(!in_tolerance(65.0, f64::NAN, 2.0));
        assert!(!in_tolerance(65.0, 65.0, f64::NAN));
        assert!(!in_tolerance(65.0, 65.0, f64::INFINITY));
    }

    #[test]
    fn matches_absolute_difference_over_a_grid() {
        let values = [-10.0, 0.0, 15.5, 19.0, 22.25, 65.0, 100.0, 120.0];
        let tolerances = [0.0, 0.5, 1.0, 2.0, 10.0, 50.0];
        for &current in &values {
            for &target in &values {
                for &tolerance in &tolerances {
                    assert_eq!(
                        in_tolerance(current, target, tolerance),
                        (current - target).abs() <= tolerance,
                        "current={current} target={target} tolerance={tolerance}"
                    );
                }
            }
        }
    }
}

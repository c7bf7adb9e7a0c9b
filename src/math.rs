//! Range mapping and clamping helpers.
//!
//! Plain floating-point arithmetic: degenerate inputs are not trapped and
//! NaN or infinities propagate to the caller.

/// Re-maps `value` from the range `[in_start, in_stop]` onto
/// `[out_start, out_stop]`.
///
/// Values outside the input range extrapolate linearly. When
/// `in_start == in_stop` the division yields ±infinity or NaN.
///
/// # Examples
///
/// ```
/// use sketchpress::map;
///
/// assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert_eq!(map(0.25, 0.0, 1.0, 100.0, 0.0), 75.0);
/// ```
pub fn map(value: f64, in_start: f64, in_stop: f64, out_start: f64, out_stop: f64) -> f64 {
    out_start + (out_stop - out_start) * ((value - in_start) / (in_stop - in_start))
}

/// Clamps `value` to `[min, max]`.
///
/// The upper bound is checked before the lower one, so for an inverted
/// range (`min > max`) anything above `max` becomes `max` and everything
/// else at or below `max` becomes `min`.
///
/// # Examples
///
/// ```
/// use sketchpress::constrain;
///
/// assert_eq!(constrain(15.0, 0.0, 10.0), 10.0);
/// assert_eq!(constrain(5.0, 10.0, 0.0), 0.0);
/// ```
pub fn constrain(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_endpoints_and_midpoint() {
        assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map(0.0, 0.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(map(10.0, 0.0, 10.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_map_extrapolates() {
        assert_eq!(map(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
        assert_eq!(map(-10.0, 0.0, 10.0, 0.0, 100.0), -100.0);
    }

    #[test]
    fn test_map_inverted_output() {
        assert_eq!(map(2.0, 0.0, 10.0, 100.0, 0.0), 80.0);
    }

    #[test]
    fn test_map_empty_input_range() {
        assert!(map(5.0, 3.0, 3.0, 0.0, 1.0).is_infinite());
        assert!(map(3.0, 3.0, 3.0, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(15.0, 0.0, 10.0), 10.0);
        assert_eq!(constrain(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(constrain(5.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn test_constrain_inverted_range() {
        assert_eq!(constrain(5.0, 10.0, 0.0), 0.0);
        assert_eq!(constrain(-5.0, 10.0, 0.0), 10.0);
        assert_eq!(constrain(0.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_constrain_nan_passes_through() {
        assert!(constrain(f64::NAN, 0.0, 1.0).is_nan());
    }
}

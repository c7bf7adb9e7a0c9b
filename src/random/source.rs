//! UniformSource trait for uniform deviate generators.
//!
//! Defines the interface consumed by [`Gaussian`](crate::random::gaussian::Gaussian)
//! and by the range helpers. Implementations must return values in the
//! half-open interval `[0, 1)`.

/// Trait for generators of uniformly distributed doubles in `[0, 1)`.
pub trait UniformSource {
    /// Returns the next uniform double in range [0, 1).
    fn next_double(&mut self) -> f64;

    /// Returns a uniform double in range [0, max).
    ///
    /// A negative `max` yields values in `(max, 0]`; NaN propagates.
    fn next_max(&mut self, max: f64) -> f64 {
        self.next_double() * max
    }

    /// Returns a uniform double in range [min, max).
    ///
    /// Computed as `min + (max - min) * next_double()`. Bounds are not
    /// validated: `min > max` simply mirrors the interval.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        self.next_double() * (max - min) + min
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed list of values.
    struct Fixed {
        values: Vec<f64>,
        pos: usize,
    }

    impl UniformSource for Fixed {
        fn next_double(&mut self) -> f64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn test_next_max_scales() {
        let mut src = Fixed {
            values: vec![0.5],
            pos: 0,
        };
        assert_eq!(src.next_max(10.0), 5.0);
        assert_eq!(src.next_max(-4.0), -2.0);
    }

    #[test]
    fn test_next_range_scales_and_offsets() {
        let mut src = Fixed {
            values: vec![0.0, 0.25],
            pos: 0,
        };
        assert_eq!(src.next_range(5.0, 10.0), 5.0);
        assert_eq!(src.next_range(5.0, 10.0), 6.25);
    }

    #[test]
    fn test_next_range_nan_propagates() {
        let mut src = Fixed {
            values: vec![0.5],
            pos: 0,
        };
        assert!(src.next_range(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_mut_reference_forwards() {
        let mut src = Fixed {
            values: vec![0.75],
            pos: 0,
        };
        fn draw<S: UniformSource>(mut source: S) -> f64 {
            source.next_double()
        }
        assert_eq!(draw(&mut src), 0.75);
        assert_eq!(src.pos, 1);
    }
}

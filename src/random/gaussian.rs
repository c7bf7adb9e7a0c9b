//! Gaussian deviates via the Marsaglia polar method.
//!
//! Wraps any [`UniformSource`] and turns pairs of uniform draws into pairs
//! of independent standard-normal samples without trigonometric calls.
//! One sample of each pair is returned immediately, the other is cached for
//! the following call.

use super::marsaglia::Marsaglia;
use super::source::UniformSource;

/// Standard-normal generator layered on a uniform source.
///
/// # Initialization
///
/// [`with_seed`](Gaussian::with_seed) gives a reproducible stream backed by
/// a seeded [`Marsaglia`]; [`new`](Gaussian::new) uses a time-seeded one.
/// [`from_source`](Gaussian::from_source) accepts any uniform source.
#[derive(Debug, Clone)]
pub struct Gaussian<S: UniformSource = Marsaglia> {
    source: S,
    have_next: bool,
    next_gaussian: f64,
}

impl Gaussian<Marsaglia> {
    /// Creates a Gaussian generator over a time-seeded [`Marsaglia`].
    pub fn new() -> Self {
        Self::from_source(Marsaglia::new())
    }

    /// Creates a Gaussian generator over a seeded [`Marsaglia`].
    ///
    /// # Parameters
    /// - `seed`: The `z` seed passed to [`Marsaglia::with_seed`].
    pub fn with_seed(seed: u32) -> Self {
        Self::from_source(Marsaglia::with_seed(seed))
    }
}

impl Default for Gaussian<Marsaglia> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSource> Gaussian<S> {
    /// Creates a Gaussian generator drawing from `source`.
    pub fn from_source(source: S) -> Self {
        Gaussian {
            source,
            have_next: false,
            next_gaussian: 0.0,
        }
    }

    /// Returns the next uniform double in range [0, 1) from the source.
    ///
    /// Does not touch the cached Gaussian sample.
    pub fn next_double(&mut self) -> f64 {
        self.source.next_double()
    }

    /// Generates the next standard-normal sample (mean 0, variance 1).
    ///
    /// 1. If a sample is cached, returns it and clears the cache.
    /// 2. Otherwise draws `v1`, `v2` uniformly from (-1, 1) until
    ///    `s = v1² + v2²` lies strictly inside (0, 1).
    /// 3. Scales both by `sqrt(-2 ln(s) / s)`, caches the `v2` sample and
    ///    returns the `v1` sample.
    pub fn next_gaussian(&mut self) -> f64 {
        if self.have_next {
            self.have_next = false;
            return self.next_gaussian;
        }

        let (v1, v2, s) = loop {
            let v1 = 2.0 * self.source.next_double() - 1.0;
            let v2 = 2.0 * self.source.next_double() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                break (v1, v2, s);
            }
        };

        let multiplier = (-2.0 * s.ln() / s).sqrt();
        self.next_gaussian = v2 * multiplier;
        self.have_next = true;
        v1 * multiplier
    }

    /// Returns a reference to the underlying uniform source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator, returning the underlying uniform source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: UniformSource> UniformSource for Gaussian<S> {
    fn next_double(&mut self) -> f64 {
        self.source.next_double()
    }
}

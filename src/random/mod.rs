//! Random number generation subsystem for sketchpress.
//!
//! Provides a host-independent, seedable multiply-with-carry generator,
//! Gaussian sampling on top of any uniform source, and the process-wide
//! generator behind the crate-level `random*` helpers.

pub mod gaussian;
pub mod global;
pub mod marsaglia;
pub mod source;

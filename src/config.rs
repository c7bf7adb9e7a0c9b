//! Defaults for a sketch's drawing context.
//!
//! A `SketchConfig` is usually built with `Default`, but scripts that want
//! different house defaults (millimetres, hairline strokes, a fixed random
//! seed) can keep them in a small TOML file:
//!
//! ```toml
//! units = "mm"
//! stroke_weight = 0.25
//! fill = "Paper"
//! seed = 42
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::color::{Swatch, BLACK_SWATCH};
use crate::error::SketchError;
use crate::units::Unit;

/// Context defaults applied when a sketch starts or switches document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    /// Ruler units applied to every document the sketch adopts.
    pub units: Unit,
    /// Stroke weight of new shapes in points.
    pub stroke_weight: f64,
    /// Stroke tint in percent.
    pub stroke_tint: f64,
    /// Fill tint in percent.
    pub fill_tint: f64,
    /// Fill swatch applied to new shapes and restored on document switch.
    pub fill: Swatch,
    /// Stroke swatch applied to new shapes and restored on document switch.
    pub stroke: Swatch,
    /// Seed for the shared generator; time-seeded when absent.
    pub seed: Option<u32>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        SketchConfig {
            units: Unit::Pt,
            stroke_weight: 1.0,
            stroke_tint: 100.0,
            fill_tint: 100.0,
            fill: Swatch::new(BLACK_SWATCH),
            stroke: Swatch::new(BLACK_SWATCH),
            seed: None,
        }
    }
}

impl SketchConfig {
    /// Parses a configuration from TOML text. Missing keys keep their
    /// defaults.
    ///
    /// # Errors
    /// Returns [`SketchError::Config`] for malformed TOML, unknown keys or
    /// unsupported units.
    pub fn from_toml_str(text: &str) -> Result<Self, SketchError> {
        toml::from_str(text).map_err(|e| SketchError::Config(e.message().to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    /// Returns [`SketchError::Config`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SketchError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SketchError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }
}

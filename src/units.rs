//! Measurement units and conversions between them.
//!
//! Points are the pivot unit: every conversion goes through points.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::error;

use crate::error::SketchError;

/// Points per centimetre.
const POINTS_PER_CM: f64 = 72.0 / 2.54;

/// Points per millimetre.
const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Measurement unit for horizontal and vertical rulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// PostScript points (1/72 inch).
    #[default]
    Pt,
    /// Pixels. The host treats one pixel as one point.
    Px,
    /// Centimetres.
    Cm,
    /// Millimetres.
    Mm,
}

impl Unit {
    /// Every supported unit.
    pub const ALL: [Unit; 4] = [Unit::Pt, Unit::Px, Unit::Cm, Unit::Mm];

    /// Returns the short textual name (`"pt"`, `"px"`, `"cm"`, `"mm"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Pt => "pt",
            Unit::Px => "px",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
        }
    }

    /// Number of points in one of this unit.
    pub fn points_per_unit(self) -> f64 {
        match self {
            Unit::Pt | Unit::Px => 1.0,
            Unit::Cm => POINTS_PER_CM,
            Unit::Mm => POINTS_PER_MM,
        }
    }

    /// Converts `value` in this unit to points.
    pub fn to_points(self, value: f64) -> f64 {
        value * self.points_per_unit()
    }

    /// Converts `points` to this unit.
    pub fn points_to_unit(self, points: f64) -> f64 {
        points / self.points_per_unit()
    }

    /// Converts `value` from this unit to `target`.
    pub fn convert(self, value: f64, target: Unit) -> f64 {
        if self.points_per_unit() == target.points_per_unit() {
            return value;
        }
        target.points_to_unit(self.to_points(value))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| {
                error!(unit = s, "not supported unit");
                SketchError::UnsupportedUnit(s.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_units() {
        assert_eq!("pt".parse::<Unit>(), Ok(Unit::Pt));
        assert_eq!("px".parse::<Unit>(), Ok(Unit::Px));
        assert_eq!("cm".parse::<Unit>(), Ok(Unit::Cm));
        assert_eq!("mm".parse::<Unit>(), Ok(Unit::Mm));
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert_eq!(
            "in".parse::<Unit>(),
            Err(SketchError::UnsupportedUnit("in".to_string()))
        );
        assert!("PT".parse::<Unit>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for unit in Unit::ALL {
            assert_eq!(unit.to_string().parse::<Unit>(), Ok(unit));
        }
    }

    #[test]
    fn test_to_points() {
        assert_eq!(Unit::Pt.to_points(12.0), 12.0);
        assert_eq!(Unit::Px.to_points(12.0), 12.0);
        assert!((Unit::Cm.to_points(2.54) - 72.0).abs() < 1e-9);
        assert!((Unit::Mm.to_points(25.4) - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_a4_width() {
        let width_pt = Unit::Mm.convert(210.0, Unit::Pt);
        assert!((width_pt - 595.2755905511812).abs() < 1e-9);
        let back = Unit::Pt.convert(width_pt, Unit::Mm);
        assert!((back - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_cm_to_mm() {
        assert!((Unit::Cm.convert(1.5, Unit::Mm) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_same_scale_is_identity() {
        assert_eq!(Unit::Pt.convert(0.1, Unit::Px), 0.1);
        assert_eq!(Unit::Mm.convert(0.1, Unit::Mm), 0.1);
    }
}

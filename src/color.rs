//! Color requests, process colors and swatch references.
//!
//! A [`ColorSpec`] describes what a script asked for (a named swatch, a
//! grey level, an RGB or CMYK value). Non-name requests become a
//! [`Color`] that the host adds to the document, and drawing state refers
//! to the result through a [`Swatch`].

use std::fmt;

use serde::Deserialize;

/// Name of the swatch that paints nothing.
pub const NONE_SWATCH: &str = "None";

/// Name of the default process black swatch.
pub const BLACK_SWATCH: &str = "Black";

/// Reference to a named swatch in a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Swatch(String);

impl Swatch {
    /// Creates a reference to the swatch called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Swatch(name.into())
    }

    /// The empty paint.
    pub fn none() -> Self {
        Swatch::new(NONE_SWATCH)
    }

    /// Process black.
    pub fn black() -> Self {
        Swatch::new(BLACK_SWATCH)
    }

    /// Returns the swatch name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty paint.
    pub fn is_none(&self) -> bool {
        self.0 == NONE_SWATCH
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Swatch {
    fn from(name: &str) -> Self {
        Swatch::new(name)
    }
}

impl From<String> for Swatch {
    fn from(name: String) -> Self {
        Swatch(name)
    }
}

/// Process color components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// Red, green, blue in 0..=255.
    Rgb { r: f64, g: f64, b: f64 },
    /// Cyan, magenta, yellow, black in percent.
    Cmyk { c: f64, m: f64, y: f64, k: f64 },
}

impl ColorValue {
    /// Component list in host order.
    pub fn components(&self) -> Vec<f64> {
        match *self {
            ColorValue::Rgb { r, g, b } => vec![r, g, b],
            ColorValue::Cmyk { c, m, y, k } => vec![c, m, y, k],
        }
    }

    /// Name the host shows for an unnamed color with these components.
    pub fn default_name(&self) -> String {
        let n = unsigned_zero;
        match *self {
            ColorValue::Rgb { r, g, b } => format!("R={} G={} B={}", n(r), n(g), n(b)),
            ColorValue::Cmyk { c, m, y, k } => {
                format!("C={} M={} Y={} K={}", n(c), n(m), n(y), n(k))
            }
        }
    }
}

/// Maps `-0.0` to `0.0` so names never read `-0`.
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// A named process color ready to be added to a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    /// Swatch name the color is stored under.
    pub name: String,
    /// Components in the color's own space.
    pub value: ColorValue,
}

impl Color {
    /// Creates a color, deriving the name from the components if `name` is
    /// `None`.
    pub fn new(value: ColorValue, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| value.default_name());
        Color { name, value }
    }
}

/// A script-level color request.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// Existing swatch looked up by name.
    Named(String),
    /// Grey as CMYK black percentage.
    Grey { k: f64, name: Option<String> },
    /// RGB process color.
    Rgb {
        r: f64,
        g: f64,
        b: f64,
        name: Option<String>,
    },
    /// CMYK process color.
    Cmyk {
        c: f64,
        m: f64,
        y: f64,
        k: f64,
        name: Option<String>,
    },
}

impl ColorSpec {
    /// Request for an existing swatch.
    pub fn named(name: impl Into<String>) -> Self {
        ColorSpec::Named(name.into())
    }

    /// Grey level `k` (CMYK black percentage).
    pub fn grey(k: f64) -> Self {
        ColorSpec::Grey { k, name: None }
    }

    /// RGB color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        ColorSpec::Rgb { r, g, b, name: None }
    }

    /// CMYK color.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        ColorSpec::Cmyk {
            c,
            m,
            y,
            k,
            name: None,
        }
    }

    /// Sets the swatch name of a new color. No effect on [`ColorSpec::Named`].
    pub fn with_name(self, new_name: impl Into<String>) -> Self {
        let new_name = Some(new_name.into());
        match self {
            ColorSpec::Named(n) => ColorSpec::Named(n),
            ColorSpec::Grey { k, .. } => ColorSpec::Grey { k, name: new_name },
            ColorSpec::Rgb { r, g, b, .. } => ColorSpec::Rgb {
                r,
                g,
                b,
                name: new_name,
            },
            ColorSpec::Cmyk { c, m, y, k, .. } => ColorSpec::Cmyk {
                c,
                m,
                y,
                k,
                name: new_name,
            },
        }
    }

    /// Splits the request into a swatch lookup or a new process color.
    pub fn resolve(self) -> ColorSource {
        match self {
            ColorSpec::Named(name) => ColorSource::Existing(name),
            ColorSpec::Grey { k, name } => ColorSource::Process(Color::new(
                ColorValue::Cmyk {
                    c: 0.0,
                    m: 0.0,
                    y: 0.0,
                    k,
                },
                name,
            )),
            ColorSpec::Rgb { r, g, b, name } => {
                ColorSource::Process(Color::new(ColorValue::Rgb { r, g, b }, name))
            }
            ColorSpec::Cmyk { c, m, y, k, name } => {
                ColorSource::Process(Color::new(ColorValue::Cmyk { c, m, y, k }, name))
            }
        }
    }

    /// Builds the process color this request creates, or `None` for a
    /// lookup by name.
    pub fn to_color(&self) -> Option<Color> {
        match self.clone().resolve() {
            ColorSource::Process(color) => Some(color),
            ColorSource::Existing(_) => None,
        }
    }
}

/// Outcome of resolving a [`ColorSpec`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Look up the swatch with this name.
    Existing(String),
    /// Add this color to the document.
    Process(Color),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_default_name() {
        let color = ColorSpec::grey(40.0).to_color().unwrap();
        assert_eq!(color.name, "C=0 M=0 Y=0 K=40");
        assert_eq!(color.value.components(), vec![0.0, 0.0, 0.0, 40.0]);
    }

    #[test]
    fn test_rgb_default_name() {
        let color = ColorSpec::rgb(255.0, 0.0, 127.5).to_color().unwrap();
        assert_eq!(color.name, "R=255 G=0 B=127.5");
    }

    #[test]
    fn test_cmyk_default_name() {
        let color = ColorSpec::cmyk(100.0, 0.0, 50.0, 10.0).to_color().unwrap();
        assert_eq!(color.name, "C=100 M=0 Y=50 K=10");
    }

    #[test]
    fn test_default_name_drops_negative_zero() {
        let rgb = ColorSpec::rgb(-0.0, 10.0, -0.0).to_color().unwrap();
        assert_eq!(rgb.name, "R=0 G=10 B=0");
        let cmyk = ColorSpec::cmyk(0.0, -0.0, 20.0, -0.0).to_color().unwrap();
        assert_eq!(cmyk.name, "C=0 M=0 Y=20 K=0");
        let grey = ColorSpec::grey(-0.0).to_color().unwrap();
        assert_eq!(grey.name, "C=0 M=0 Y=0 K=0");
    }

    #[test]
    fn test_with_name_overrides_default() {
        let color = ColorSpec::rgb(1.0, 2.0, 3.0)
            .with_name("Sky")
            .to_color()
            .unwrap();
        assert_eq!(color.name, "Sky");
        assert_eq!(color.value, ColorValue::Rgb { r: 1.0, g: 2.0, b: 3.0 });
    }

    #[test]
    fn test_named_builds_no_color() {
        assert_eq!(ColorSpec::named("Paper").to_color(), None);
        assert_eq!(
            ColorSpec::named("Paper").with_name("Other"),
            ColorSpec::named("Paper")
        );
    }

    #[test]
    fn test_resolve_named() {
        assert_eq!(
            ColorSpec::named("Paper").resolve(),
            ColorSource::Existing("Paper".to_string())
        );
    }

    #[test]
    fn test_swatch_helpers() {
        assert!(Swatch::none().is_none());
        assert!(!Swatch::black().is_none());
        assert_eq!(Swatch::from("Paper").name(), "Paper");
        assert_eq!(Swatch::black().to_string(), "Black");
    }
}

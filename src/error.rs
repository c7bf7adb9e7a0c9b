//! Error types for the sketchpress library.

use std::fmt;

/// Errors produced by the sketchpress library.
///
/// The numeric core (random generators, `map`, `constrain`, unit
/// conversions) never fails; these errors come from the document-facing
/// half of the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// Measurement unit name is not one of `pt`, `px`, `cm` or `mm`.
    UnsupportedUnit(String),
    /// No page exists at the requested index in the current document.
    PageNotFound(usize),
    /// No paragraph exists at the requested index of the text frame.
    ParagraphNotFound(usize),
    /// No swatch with the requested name exists in the current document.
    ColorNotFound(String),
    /// Document handle is not known to the host.
    UnknownDocument,
    /// Page handle is not known to the host.
    UnknownPage,
    /// Layer handle is not known to the host.
    UnknownLayer,
    /// Page item handle is not known to the host.
    UnknownItem,
    /// Operation targeted a document that has already been closed.
    DocumentClosed,
    /// Configuration could not be read or parsed.
    Config(String),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::UnsupportedUnit(name) => {
                write!(f, "Not supported unit: {}", name)
            }
            SketchError::PageNotFound(index) => {
                write!(f, "Page {} does not exist", index)
            }
            SketchError::ParagraphNotFound(index) => {
                write!(f, "Paragraph {} does not exist", index)
            }
            SketchError::ColorNotFound(name) => {
                write!(f, "Color doesn't exist: {}", name)
            }
            SketchError::UnknownDocument => write!(f, "Document is not known to the host"),
            SketchError::UnknownPage => write!(f, "Page is not known to the host"),
            SketchError::UnknownLayer => write!(f, "Layer is not known to the host"),
            SketchError::UnknownItem => write!(f, "Page item is not known to the host"),
            SketchError::DocumentClosed => write!(f, "Document has been closed"),
            SketchError::Config(reason) => {
                write!(f, "Invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for SketchError {}

//! Host trait for the desktop publishing document model.
//!
//! The drawing layer never touches documents, pages or shapes directly.
//! Everything it needs goes through [`Host`], so the same sketch code can
//! drive a scripting bridge to a real application or the in-process
//! [`MemoryHost`](crate::memory::MemoryHost).

use std::fmt;

use crate::color::{Color, Swatch};
use crate::error::SketchError;
use crate::units::Unit;

/// Handle to a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u32);

/// Handle to a page in a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

/// Handle to a layer in a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u32);

/// Handle to a page item (shape or text frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// Geometric bounds in host order: top, left, bottom, right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Y of the first corner.
    pub top: f64,
    /// X of the first corner.
    pub left: f64,
    /// Y of the second corner.
    pub bottom: f64,
    /// X of the second corner.
    pub right: f64,
}

impl Bounds {
    /// Bounds of the box at (`x`, `y`) with size `w` x `h`.
    pub fn from_rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Bounds {
            top: y,
            left: x,
            bottom: y + h,
            right: x + w,
        }
    }

    /// Bounds spanning two points, kept in the given order.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Bounds {
            top: y1,
            left: x1,
            bottom: y2,
            right: x2,
        }
    }

    /// Host array form `[y1, x1, y2, x2]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.top, self.left, self.bottom, self.right]
    }

    /// Horizontal extent, negative when `right` lies left of `left`.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent, negative when `bottom` lies above `top`.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Applies `f` to every coordinate.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Bounds {
            top: f(self.top),
            left: f(self.left),
            bottom: f(self.bottom),
            right: f(self.right),
        }
    }
}

/// Kind of shape a drawing call creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Rectangle from `rect`.
    Rectangle,
    /// Ellipse from `ellipse`.
    Oval,
    /// Straight path from `line`.
    GraphicLine,
}

/// Paint state copied onto every new shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    /// Fill swatch.
    pub fill: Swatch,
    /// Fill tint in percent.
    pub fill_tint: f64,
    /// Stroke swatch.
    pub stroke: Swatch,
    /// Stroke tint in percent.
    pub stroke_tint: f64,
    /// Stroke weight in points.
    pub stroke_weight: f64,
}

/// A paragraph of a text frame, by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Paragraph {
    /// Text frame holding the paragraph.
    pub frame: ItemId,
    /// Zero-based position within the frame.
    pub index: usize,
}

/// Where a text property operation applies.
///
/// Containers reach every text frame inside them, and a frame reaches each
/// of its paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    /// Every text frame in a document.
    Document(DocumentId),
    /// Every text frame on a page.
    Page(PageId),
    /// Every text frame in a layer.
    Layer(LayerId),
    /// A page item; shapes hold no text and contribute nothing.
    Item(ItemId),
    /// A single paragraph.
    Paragraph(Paragraph),
}

impl From<DocumentId> for TextTarget {
    fn from(doc: DocumentId) -> Self {
        TextTarget::Document(doc)
    }
}

impl From<PageId> for TextTarget {
    fn from(page: PageId) -> Self {
        TextTarget::Page(page)
    }
}

impl From<LayerId> for TextTarget {
    fn from(layer: LayerId) -> Self {
        TextTarget::Layer(layer)
    }
}

impl From<ItemId> for TextTarget {
    fn from(item: ItemId) -> Self {
        TextTarget::Item(item)
    }
}

impl From<Paragraph> for TextTarget {
    fn from(paragraph: Paragraph) -> Self {
        TextTarget::Paragraph(paragraph)
    }
}

/// Value of a text property such as `pointSize` or `appliedFont`.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Numeric property such as a point size.
    Number(f64),
    /// Textual property such as a font name.
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<&str> for PropertyValue {
    fn from(t: &str) -> Self {
        PropertyValue::Text(t.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(t: String) -> Self {
        PropertyValue::Text(t)
    }
}

/// What to do with unsaved changes when closing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveOptions {
    /// Ask the user, as the host does by default.
    #[default]
    Ask,
    /// Save before closing.
    Yes,
    /// Discard changes.
    No,
}

/// Operations the drawing layer needs from a document model.
///
/// Coordinates passed in and returned are in the document's current
/// measurement units.
pub trait Host {
    /// Returns the document the application considers active, if any.
    fn active_document(&self) -> Option<DocumentId>;

    /// Creates a new document and makes it active.
    fn add_document(&mut self) -> Result<DocumentId, SketchError>;

    /// Closes `doc`.
    fn close_document(&mut self, doc: DocumentId, save: SaveOptions) -> Result<(), SketchError>;

    /// Measures ruler coordinates from each page's origin instead of the
    /// spread's.
    fn use_page_origin(&mut self, doc: DocumentId) -> Result<(), SketchError>;

    /// Sets horizontal and vertical ruler units of `doc`.
    fn set_units(&mut self, doc: DocumentId, unit: Unit) -> Result<(), SketchError>;

    /// Returns the page shown in the active window of `doc`.
    fn active_page(&self, doc: DocumentId) -> Result<PageId, SketchError>;

    /// Returns the page at `index`, or `None` if there is none.
    fn page(&self, doc: DocumentId, index: usize) -> Result<Option<PageId>, SketchError>;

    /// Returns the bounds of `page` in its document's units.
    fn page_bounds(&self, page: PageId) -> Result<Bounds, SketchError>;

    /// Returns the active layer of `doc`.
    fn active_layer(&self, doc: DocumentId) -> Result<LayerId, SketchError>;

    /// Returns the layer called `name`, if any.
    fn find_layer(&self, doc: DocumentId, name: &str) -> Result<Option<LayerId>, SketchError>;

    /// Adds a layer called `name`.
    fn add_layer(&mut self, doc: DocumentId, name: &str) -> Result<LayerId, SketchError>;

    /// Returns `true` if `doc` has a swatch called `name`.
    fn has_swatch(&self, doc: DocumentId, name: &str) -> Result<bool, SketchError>;

    /// Adds a process color to `doc` and returns its swatch.
    fn add_color(&mut self, doc: DocumentId, color: &Color) -> Result<Swatch, SketchError>;

    /// Adds a shape on `page` in `layer`.
    fn add_shape(
        &mut self,
        page: PageId,
        layer: LayerId,
        kind: ShapeKind,
        style: &ShapeStyle,
        bounds: Bounds,
    ) -> Result<ItemId, SketchError>;

    /// Mirrors `item` around its centre.
    fn flip(&mut self, item: ItemId, horizontal: bool, vertical: bool) -> Result<(), SketchError>;

    /// Adds a text frame holding `contents` on `page` in `layer`.
    fn add_text_frame(
        &mut self,
        page: PageId,
        layer: LayerId,
        contents: &str,
        bounds: Bounds,
    ) -> Result<ItemId, SketchError>;

    /// Returns every page item in `doc` whose label equals `label`.
    fn find_by_label(&self, doc: DocumentId, label: &str) -> Result<Vec<ItemId>, SketchError>;

    /// Returns the paragraphs reached by `target`, frames in creation
    /// order and paragraphs in text order.
    fn paragraphs(&self, target: TextTarget) -> Result<Vec<Paragraph>, SketchError>;

    /// Returns the value of `name` on `paragraph`, or `None` if unset.
    fn text_property(
        &self,
        paragraph: Paragraph,
        name: &str,
    ) -> Result<Option<PropertyValue>, SketchError>;

    /// Sets `name` to `value` on `paragraph`.
    fn set_text_property(
        &mut self,
        paragraph: Paragraph,
        name: &str,
        value: &PropertyValue,
    ) -> Result<(), SketchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_rect() {
        let b = Bounds::from_rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.to_array(), [20.0, 10.0, 60.0, 40.0]);
        assert_eq!(b.width(), 30.0);
        assert_eq!(b.height(), 40.0);
    }

    #[test]
    fn test_bounds_from_points_keeps_order() {
        let b = Bounds::from_points(50.0, 60.0, 10.0, 20.0);
        assert_eq!(b.to_array(), [60.0, 50.0, 20.0, 10.0]);
        assert_eq!(b.width(), -40.0);
    }

    #[test]
    fn test_bounds_map() {
        let b = Bounds::from_rect(1.0, 2.0, 3.0, 4.0).map(|v| v * 2.0);
        assert_eq!(b.to_array(), [4.0, 2.0, 12.0, 8.0]);
    }

    #[test]
    fn test_text_target_conversions() {
        assert_eq!(TextTarget::from(DocumentId(1)), TextTarget::Document(DocumentId(1)));
        assert_eq!(TextTarget::from(ItemId(4)), TextTarget::Item(ItemId(4)));
        let p = Paragraph {
            frame: ItemId(2),
            index: 1,
        };
        assert_eq!(TextTarget::from(p), TextTarget::Paragraph(p));
    }

    #[test]
    fn test_property_value_display() {
        assert_eq!(PropertyValue::from(12.0).to_string(), "12");
        assert_eq!(PropertyValue::from(10.5).to_string(), "10.5");
        assert_eq!(PropertyValue::from("Helvetica").to_string(), "Helvetica");
    }
}

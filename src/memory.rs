//! In-process document model implementing [`Host`].
//!
//! `MemoryHost` keeps documents, pages, layers, swatches and page items in
//! plain vectors indexed by their handles. Page geometry is stored in
//! points and reported in each document's current units, matching how a
//! real host answers when its rulers change. Items keep the coordinates
//! they were created with together with the unit in force at that time.

use std::collections::BTreeMap;

use tracing::debug;

use crate::color::{Color, Swatch, BLACK_SWATCH, NONE_SWATCH};
use crate::error::SketchError;
use crate::host::{
    Bounds, DocumentId, Host, ItemId, LayerId, PageId, Paragraph, PropertyValue, SaveOptions,
    ShapeKind, ShapeStyle, TextTarget,
};
use crate::units::Unit;

/// US Letter width in points.
const DEFAULT_PAGE_WIDTH: f64 = 612.0;

/// US Letter height in points.
const DEFAULT_PAGE_HEIGHT: f64 = 792.0;

/// Name given to the first layer of every new document.
const DEFAULT_LAYER: &str = "Layer 1";

/// Swatches present in every new document.
const DEFAULT_SWATCHES: [&str; 4] = [NONE_SWATCH, "Registration", "Paper", BLACK_SWATCH];

/// Point size of every new paragraph.
const DEFAULT_POINT_SIZE: f64 = 12.0;

/// Font of every new paragraph.
const DEFAULT_FONT: &str = "Minion Pro";

/// Text properties of one paragraph, by property name.
pub type TextProperties = BTreeMap<String, PropertyValue>;

fn default_text_properties() -> TextProperties {
    let mut props = TextProperties::new();
    props.insert("pointSize".to_string(), PropertyValue::Number(DEFAULT_POINT_SIZE));
    props.insert("appliedFont".to_string(), PropertyValue::from(DEFAULT_FONT));
    props
}

/// What a page item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Shape drawn with the current paint.
    Shape(ShapeKind),
    /// Frame of text.
    TextFrame,
}

/// A recorded page item.
#[derive(Debug, Clone, PartialEq)]
pub struct PageItem {
    /// Handle of this item.
    pub id: ItemId,
    /// Owning document.
    pub document: DocumentId,
    /// Page the item sits on.
    pub page: PageId,
    /// Layer the item sits in.
    pub layer: LayerId,
    /// Shape or text frame.
    pub kind: ItemKind,
    /// Geometric bounds as passed by the caller.
    pub bounds: Bounds,
    /// Document units when the item was created.
    pub units: Unit,
    /// Paint state; `None` for text frames.
    pub style: Option<ShapeStyle>,
    /// Text contents; `None` for shapes.
    pub contents: Option<String>,
    /// One property map per line of `contents`; empty for shapes.
    pub paragraphs: Vec<TextProperties>,
    /// Script label; empty until set.
    pub label: String,
    /// Mirrored around the vertical axis.
    pub flipped_horizontal: bool,
    /// Mirrored around the horizontal axis.
    pub flipped_vertical: bool,
}

impl PageItem {
    /// Bounds converted to points.
    pub fn bounds_in_points(&self) -> Bounds {
        let unit = self.units;
        self.bounds.map(|v| unit.to_points(v))
    }
}

#[derive(Debug, Clone)]
struct MemoryDocument {
    units: Unit,
    page_origin: bool,
    pages: Vec<PageId>,
    active_page: usize,
    layers: Vec<LayerId>,
    active_layer: usize,
    swatches: Vec<String>,
    colors: Vec<Color>,
    closed: bool,
    saved: bool,
}

#[derive(Debug, Clone)]
struct PageRecord {
    document: DocumentId,
    bounds_pt: Bounds,
}

#[derive(Debug, Clone)]
struct LayerRecord {
    document: DocumentId,
    name: String,
}

/// In-memory [`Host`] for tests, benchmarks and headless runs.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    documents: Vec<MemoryDocument>,
    pages: Vec<PageRecord>,
    layers: Vec<LayerRecord>,
    items: Vec<PageItem>,
    active: Option<DocumentId>,
    page_width: f64,
    page_height: f64,
    pages_per_document: usize,
}

impl MemoryHost {
    /// Creates an empty host whose new documents have one Letter page.
    pub fn new() -> Self {
        MemoryHost {
            documents: Vec::new(),
            pages: Vec::new(),
            layers: Vec::new(),
            items: Vec::new(),
            active: None,
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            pages_per_document: 1,
        }
    }

    /// Sets the page size, in points, of documents created afterwards.
    pub fn with_page_size(mut self, width_pt: f64, height_pt: f64) -> Self {
        self.page_width = width_pt;
        self.page_height = height_pt;
        self
    }

    /// Sets how many pages documents created afterwards start with.
    pub fn with_pages(mut self, pages: usize) -> Self {
        self.pages_per_document = pages.max(1);
        self
    }

    /// Number of documents ever created, including closed ones.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if `doc` has been closed.
    pub fn is_closed(&self, doc: DocumentId) -> bool {
        self.documents
            .get(doc.0 as usize)
            .is_some_and(|d| d.closed)
    }

    /// Returns `true` if `doc` was saved when it was closed.
    pub fn was_saved(&self, doc: DocumentId) -> bool {
        self.documents.get(doc.0 as usize).is_some_and(|d| d.saved)
    }

    /// Current ruler units of `doc`.
    pub fn units(&self, doc: DocumentId) -> Result<Unit, SketchError> {
        Ok(self.document(doc)?.units)
    }

    /// Returns `true` if rulers of `doc` measure from the page origin.
    pub fn uses_page_origin(&self, doc: DocumentId) -> Result<bool, SketchError> {
        Ok(self.document(doc)?.page_origin)
    }

    /// Colors added to `doc`, in creation order.
    pub fn colors(&self, doc: DocumentId) -> Result<&[Color], SketchError> {
        Ok(&self.document(doc)?.colors)
    }

    /// Swatch names of `doc`, defaults first.
    pub fn swatches(&self, doc: DocumentId) -> Result<&[String], SketchError> {
        Ok(&self.document(doc)?.swatches)
    }

    /// Name of `layer`.
    pub fn layer_name(&self, layer: LayerId) -> Result<&str, SketchError> {
        self.layers
            .get(layer.0 as usize)
            .map(|l| l.name.as_str())
            .ok_or(SketchError::UnknownLayer)
    }

    /// Layers of `doc` in creation order.
    pub fn layers(&self, doc: DocumentId) -> Result<&[LayerId], SketchError> {
        Ok(&self.document(doc)?.layers)
    }

    /// Pages of `doc` in order.
    pub fn pages(&self, doc: DocumentId) -> Result<&[PageId], SketchError> {
        Ok(&self.document(doc)?.pages)
    }

    /// Appends a page to `doc`.
    pub fn add_page(&mut self, doc: DocumentId) -> Result<PageId, SketchError> {
        self.document(doc)?;
        let page = self.push_page(doc);
        self.document_mut(doc)?.pages.push(page);
        Ok(page)
    }

    /// Shows the page at `index` in the active window.
    pub fn set_active_page(&mut self, doc: DocumentId, index: usize) -> Result<(), SketchError> {
        let document = self.document_mut(doc)?;
        if index >= document.pages.len() {
            return Err(SketchError::PageNotFound(index));
        }
        document.active_page = index;
        Ok(())
    }

    /// Makes `doc` the active document.
    pub fn activate(&mut self, doc: DocumentId) -> Result<(), SketchError> {
        self.document(doc)?;
        self.active = Some(doc);
        Ok(())
    }

    /// Looks up a recorded item.
    pub fn item(&self, item: ItemId) -> Option<&PageItem> {
        self.items.get(item.0 as usize)
    }

    /// Items of `doc` in creation order.
    pub fn items(&self, doc: DocumentId) -> impl Iterator<Item = &PageItem> {
        self.items.iter().filter(move |i| i.document == doc)
    }

    /// Sets the script label of `item`.
    pub fn set_label(&mut self, item: ItemId, label: &str) -> Result<(), SketchError> {
        let record = self
            .items
            .get_mut(item.0 as usize)
            .ok_or(SketchError::UnknownItem)?;
        record.label = label.to_string();
        Ok(())
    }

    fn document(&self, doc: DocumentId) -> Result<&MemoryDocument, SketchError> {
        let document = self
            .documents
            .get(doc.0 as usize)
            .ok_or(SketchError::UnknownDocument)?;
        if document.closed {
            return Err(SketchError::DocumentClosed);
        }
        Ok(document)
    }

    fn document_mut(&mut self, doc: DocumentId) -> Result<&mut MemoryDocument, SketchError> {
        let document = self
            .documents
            .get_mut(doc.0 as usize)
            .ok_or(SketchError::UnknownDocument)?;
        if document.closed {
            return Err(SketchError::DocumentClosed);
        }
        Ok(document)
    }

    fn push_page(&mut self, doc: DocumentId) -> PageId {
        let id = PageId(self.pages.len() as u32);
        self.pages.push(PageRecord {
            document: doc,
            bounds_pt: Bounds::from_rect(0.0, 0.0, self.page_width, self.page_height),
        });
        id
    }

    fn push_layer(&mut self, doc: DocumentId, name: &str) -> LayerId {
        let id = LayerId(self.layers.len() as u32);
        self.layers.push(LayerRecord {
            document: doc,
            name: name.to_string(),
        });
        id
    }

    /// Looks up `item`, requiring its document to be open.
    fn open_item(&self, item: ItemId) -> Result<&PageItem, SketchError> {
        let record = self
            .items
            .get(item.0 as usize)
            .ok_or(SketchError::UnknownItem)?;
        self.document(record.document)?;
        Ok(record)
    }

    fn paragraph_properties(&self, paragraph: Paragraph) -> Result<&TextProperties, SketchError> {
        self.open_item(paragraph.frame)?
            .paragraphs
            .get(paragraph.index)
            .ok_or(SketchError::ParagraphNotFound(paragraph.index))
    }

    /// Resolves the open document owning `page`.
    fn page_document(&self, page: PageId) -> Result<(DocumentId, &MemoryDocument), SketchError> {
        let record = self
            .pages
            .get(page.0 as usize)
            .ok_or(SketchError::UnknownPage)?;
        Ok((record.document, self.document(record.document)?))
    }

    fn check_layer(&self, doc: DocumentId, layer: LayerId) -> Result<(), SketchError> {
        match self.layers.get(layer.0 as usize) {
            Some(record) if record.document == doc => Ok(()),
            _ => Err(SketchError::UnknownLayer),
        }
    }

    fn push_item(&mut self, mut item: PageItem) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        item.id = id;
        self.items.push(item);
        id
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MemoryHost {
    fn active_document(&self) -> Option<DocumentId> {
        self.active
    }

    fn add_document(&mut self) -> Result<DocumentId, SketchError> {
        let doc = DocumentId(self.documents.len() as u32);
        let pages = (0..self.pages_per_document)
            .map(|_| self.push_page(doc))
            .collect();
        let layer = self.push_layer(doc, DEFAULT_LAYER);
        self.documents.push(MemoryDocument {
            units: Unit::Pt,
            page_origin: false,
            pages,
            active_page: 0,
            layers: vec![layer],
            active_layer: 0,
            swatches: DEFAULT_SWATCHES.iter().map(|s| s.to_string()).collect(),
            colors: Vec::new(),
            closed: false,
            saved: false,
        });
        self.active = Some(doc);
        debug!(document = doc.0, "document added");
        Ok(doc)
    }

    fn close_document(&mut self, doc: DocumentId, save: SaveOptions) -> Result<(), SketchError> {
        let document = self.document_mut(doc)?;
        document.closed = true;
        document.saved = save == SaveOptions::Yes;
        if self.active == Some(doc) {
            self.active = self
                .documents
                .iter()
                .rposition(|d| !d.closed)
                .map(|i| DocumentId(i as u32));
        }
        debug!(document = doc.0, ?save, "document closed");
        Ok(())
    }

    fn use_page_origin(&mut self, doc: DocumentId) -> Result<(), SketchError> {
        self.document_mut(doc)?.page_origin = true;
        Ok(())
    }

    fn set_units(&mut self, doc: DocumentId, unit: Unit) -> Result<(), SketchError> {
        self.document_mut(doc)?.units = unit;
        Ok(())
    }

    fn active_page(&self, doc: DocumentId) -> Result<PageId, SketchError> {
        let document = self.document(doc)?;
        Ok(document.pages[document.active_page])
    }

    fn page(&self, doc: DocumentId, index: usize) -> Result<Option<PageId>, SketchError> {
        Ok(self.document(doc)?.pages.get(index).copied())
    }

    fn page_bounds(&self, page: PageId) -> Result<Bounds, SketchError> {
        let (_, document) = self.page_document(page)?;
        let unit = document.units;
        let bounds_pt = self.pages[page.0 as usize].bounds_pt;
        Ok(bounds_pt.map(|v| unit.points_to_unit(v)))
    }

    fn active_layer(&self, doc: DocumentId) -> Result<LayerId, SketchError> {
        let document = self.document(doc)?;
        Ok(document.layers[document.active_layer])
    }

    fn find_layer(&self, doc: DocumentId, name: &str) -> Result<Option<LayerId>, SketchError> {
        let document = self.document(doc)?;
        Ok(document
            .layers
            .iter()
            .copied()
            .find(|l| self.layers[l.0 as usize].name == name))
    }

    fn add_layer(&mut self, doc: DocumentId, name: &str) -> Result<LayerId, SketchError> {
        self.document(doc)?;
        let layer = self.push_layer(doc, name);
        self.document_mut(doc)?.layers.push(layer);
        debug!(document = doc.0, layer = name, "layer added");
        Ok(layer)
    }

    fn has_swatch(&self, doc: DocumentId, name: &str) -> Result<bool, SketchError> {
        Ok(self.document(doc)?.swatches.iter().any(|s| s == name))
    }

    /// Adds `color` under its name. A swatch of the same name is reused
    /// and keeps its original components.
    fn add_color(&mut self, doc: DocumentId, color: &Color) -> Result<Swatch, SketchError> {
        let document = self.document_mut(doc)?;
        if !document.swatches.iter().any(|s| *s == color.name) {
            document.swatches.push(color.name.clone());
            document.colors.push(color.clone());
        }
        Ok(Swatch::new(color.name.clone()))
    }

    fn add_shape(
        &mut self,
        page: PageId,
        layer: LayerId,
        kind: ShapeKind,
        style: &ShapeStyle,
        bounds: Bounds,
    ) -> Result<ItemId, SketchError> {
        let (doc, document) = self.page_document(page)?;
        let units = document.units;
        self.check_layer(doc, layer)?;
        Ok(self.push_item(PageItem {
            id: ItemId(0),
            document: doc,
            page,
            layer,
            kind: ItemKind::Shape(kind),
            bounds,
            units,
            style: Some(style.clone()),
            contents: None,
            paragraphs: Vec::new(),
            label: String::new(),
            flipped_horizontal: false,
            flipped_vertical: false,
        }))
    }

    fn flip(&mut self, item: ItemId, horizontal: bool, vertical: bool) -> Result<(), SketchError> {
        let record = self
            .items
            .get_mut(item.0 as usize)
            .ok_or(SketchError::UnknownItem)?;
        record.flipped_horizontal ^= horizontal;
        record.flipped_vertical ^= vertical;
        Ok(())
    }

    fn add_text_frame(
        &mut self,
        page: PageId,
        layer: LayerId,
        contents: &str,
        bounds: Bounds,
    ) -> Result<ItemId, SketchError> {
        let (doc, document) = self.page_document(page)?;
        let units = document.units;
        self.check_layer(doc, layer)?;
        Ok(self.push_item(PageItem {
            id: ItemId(0),
            document: doc,
            page,
            layer,
            kind: ItemKind::TextFrame,
            bounds,
            units,
            style: None,
            contents: Some(contents.to_string()),
            paragraphs: contents.lines().map(|_| default_text_properties()).collect(),
            label: String::new(),
            flipped_horizontal: false,
            flipped_vertical: false,
        }))
    }

    fn find_by_label(&self, doc: DocumentId, label: &str) -> Result<Vec<ItemId>, SketchError> {
        self.document(doc)?;
        Ok(self
            .items(doc)
            .filter(|i| i.label == label)
            .map(|i| i.id)
            .collect())
    }

    fn paragraphs(&self, target: TextTarget) -> Result<Vec<Paragraph>, SketchError> {
        let frames: Vec<&PageItem> = match target {
            TextTarget::Document(doc) => {
                self.document(doc)?;
                self.items(doc).collect()
            }
            TextTarget::Page(page) => {
                self.page_document(page)?;
                self.items.iter().filter(|i| i.page == page).collect()
            }
            TextTarget::Layer(layer) => {
                let record = self
                    .layers
                    .get(layer.0 as usize)
                    .ok_or(SketchError::UnknownLayer)?;
                self.document(record.document)?;
                self.items.iter().filter(|i| i.layer == layer).collect()
            }
            TextTarget::Item(item) => vec![self.open_item(item)?],
            TextTarget::Paragraph(paragraph) => {
                self.paragraph_properties(paragraph)?;
                return Ok(vec![paragraph]);
            }
        };
        Ok(frames
            .into_iter()
            .flat_map(|frame| {
                (0..frame.paragraphs.len()).map(move |index| Paragraph {
                    frame: frame.id,
                    index,
                })
            })
            .collect())
    }

    fn text_property(
        &self,
        paragraph: Paragraph,
        name: &str,
    ) -> Result<Option<PropertyValue>, SketchError> {
        Ok(self.paragraph_properties(paragraph)?.get(name).cloned())
    }

    fn set_text_property(
        &mut self,
        paragraph: Paragraph,
        name: &str,
        value: &PropertyValue,
    ) -> Result<(), SketchError> {
        self.open_item(paragraph.frame)?;
        let props = self
            .items
            .get_mut(paragraph.frame.0 as usize)
            .and_then(|i| i.paragraphs.get_mut(paragraph.index))
            .ok_or(SketchError::ParagraphNotFound(paragraph.index))?;
        props.insert(name.to_string(), value.clone());
        debug!(
            item = paragraph.frame.0,
            paragraph = paragraph.index,
            property = name,
            %value,
            "text property set"
        );
        Ok(())
    }
}

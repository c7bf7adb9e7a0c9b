//! Current-context drawing façade.
//!
//! [`Sketch`] remembers the document, page, layer, units and paint state a
//! script is working with, so drawing calls only carry geometry. Missing
//! context is resolved lazily through the [`Host`]: the first call that
//! needs a document adopts the host's active one or creates a new one.

use tracing::{debug, error, warn};

use crate::color::{ColorSource, ColorSpec, Swatch};
use crate::config::SketchConfig;
use crate::error::SketchError;
use crate::host::{
    Bounds, DocumentId, Host, ItemId, LayerId, PageId, Paragraph, PropertyValue, SaveOptions,
    ShapeKind, ShapeStyle, TextTarget,
};
use crate::random::global::random_seed;
use crate::units::Unit;

/// Stateful Processing-style drawing API over a [`Host`].
///
/// # Examples
///
/// ```
/// use sketchpress::{ColorSpec, MemoryHost, Sketch};
///
/// let mut sketch = Sketch::new(MemoryHost::new());
/// sketch.fill_color(ColorSpec::rgb(255.0, 0.0, 0.0)).unwrap();
/// let item = sketch.rect(10.0, 20.0, 100.0, 50.0).unwrap();
///
/// let record = sketch.host().item(item).unwrap();
/// assert_eq!(record.bounds.to_array(), [20.0, 10.0, 70.0, 110.0]);
/// ```
#[derive(Debug)]
pub struct Sketch<H: Host> {
    host: H,
    config: SketchConfig,
    doc: Option<DocumentId>,
    page: Option<PageId>,
    layer: Option<LayerId>,
    units: Unit,
    fill: Swatch,
    stroke: Swatch,
    fill_tint: f64,
    stroke_tint: f64,
    stroke_weight: f64,
    width: Option<f64>,
    height: Option<f64>,
}

impl<H: Host> Sketch<H> {
    /// Creates a sketch with default context settings.
    pub fn new(host: H) -> Self {
        Self::with_config(host, SketchConfig::default())
    }

    /// Creates a sketch using `config` for its context defaults.
    ///
    /// A configured seed reseeds the shared generator immediately.
    pub fn with_config(host: H, config: SketchConfig) -> Self {
        if let Some(seed) = config.seed {
            random_seed(seed);
        }
        Sketch {
            host,
            units: config.units,
            fill: config.fill.clone(),
            stroke: config.stroke.clone(),
            fill_tint: config.fill_tint,
            stroke_tint: config.stroke_tint,
            stroke_weight: config.stroke_weight,
            config,
            doc: None,
            page: None,
            layer: None,
            width: None,
            height: None,
        }
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably, e.g. to label items or add pages.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the sketch, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns the context defaults this sketch was built with.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    // ── Environment ─────────────────────────────────────────────────────

    /// Returns the current document, adopting the host's active document
    /// or creating a new one on first use.
    pub fn doc(&mut self) -> Result<DocumentId, SketchError> {
        if let Some(doc) = self.doc {
            return Ok(doc);
        }
        let doc = match self.host.active_document() {
            Some(doc) => doc,
            None => self.host.add_document()?,
        };
        self.adopt(doc, false)?;
        Ok(doc)
    }

    /// Makes `doc` the current document.
    ///
    /// Resets page, layer and fill/stroke swatches to the configured
    /// defaults, switches rulers to page origin, applies the configured
    /// units and refreshes the page size.
    ///
    /// # Errors
    /// Returns the host's error for an unknown or closed document; the
    /// current context is left unchanged.
    pub fn set_doc(&mut self, doc: DocumentId) -> Result<(), SketchError> {
        self.adopt(doc, true)
    }

    /// Closes the current document, if there is one.
    pub fn close(&mut self, save: SaveOptions) -> Result<(), SketchError> {
        match self.doc {
            Some(doc) => {
                self.host.close_document(doc, save)?;
                self.reset_doc();
                self.reset_paint();
            }
            None => warn!("close called without a current document"),
        }
        Ok(())
    }

    /// Returns the current page, defaulting to the active page of the
    /// current document.
    pub fn page(&mut self) -> Result<PageId, SketchError> {
        if let Some(page) = self.page {
            return Ok(page);
        }
        let doc = self.doc()?;
        let page = self.host.active_page(doc)?;
        self.page = Some(page);
        Ok(page)
    }

    /// Makes the page at `index` of the current document current.
    ///
    /// # Errors
    /// Returns [`SketchError::PageNotFound`] if the document has no such
    /// page; the current page is left unchanged.
    pub fn set_page(&mut self, index: usize) -> Result<PageId, SketchError> {
        let doc = self.doc()?;
        let page = self.host.page(doc, index)?.ok_or_else(|| {
            error!(page = index, "page does not exist");
            SketchError::PageNotFound(index)
        })?;
        self.set_page_id(page)?;
        Ok(page)
    }

    /// Makes `page` current.
    ///
    /// # Errors
    /// Returns the host's error for an unknown page or a page of a closed
    /// document; the current page is left unchanged.
    pub fn set_page_id(&mut self, page: PageId) -> Result<(), SketchError> {
        self.doc()?;
        let bounds = self.host.page_bounds(page)?;
        self.page = Some(page);
        self.set_page_size(bounds);
        debug!(page = page.0, "current page set");
        Ok(())
    }

    /// Returns the current layer, defaulting to the document's active
    /// layer.
    pub fn layer(&mut self) -> Result<LayerId, SketchError> {
        if let Some(layer) = self.layer {
            return Ok(layer);
        }
        let doc = self.doc()?;
        let layer = self.host.active_layer(doc)?;
        self.layer = Some(layer);
        Ok(layer)
    }

    /// Makes the layer called `name` current, creating it if needed.
    pub fn set_layer(&mut self, name: &str) -> Result<LayerId, SketchError> {
        let doc = self.doc()?;
        let layer = match self.host.find_layer(doc, name)? {
            Some(layer) => layer,
            None => self.host.add_layer(doc, name)?,
        };
        self.layer = Some(layer);
        debug!(layer = name, "current layer set");
        Ok(layer)
    }

    /// Makes `layer` current.
    pub fn set_layer_id(&mut self, layer: LayerId) {
        self.layer = Some(layer);
    }

    /// Returns the current measurement units.
    pub fn units(&self) -> Unit {
        self.units
    }

    /// Sets the ruler units of the current document.
    pub fn set_units(&mut self, unit: Unit) -> Result<(), SketchError> {
        let doc = self.doc()?;
        self.host.set_units(doc, unit)?;
        self.units = unit;
        debug!(units = %unit, "measurement units set");
        self.update_page_size()
    }

    /// Sets the ruler units by name (`"pt"`, `"px"`, `"cm"` or `"mm"`).
    ///
    /// # Errors
    /// Returns [`SketchError::UnsupportedUnit`] for any other name.
    pub fn set_units_str(&mut self, name: &str) -> Result<(), SketchError> {
        self.set_units(name.parse()?)
    }

    /// Width of the current page in current units.
    pub fn width(&mut self) -> Result<f64, SketchError> {
        self.page_size().map(|(w, _)| w)
    }

    /// Height of the current page in current units.
    pub fn height(&mut self) -> Result<f64, SketchError> {
        self.page_size().map(|(_, h)| h)
    }

    // ── Shape ───────────────────────────────────────────────────────────

    /// Draws an ellipse inside the box at (`x`, `y`) of size `w` x `h`.
    pub fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<ItemId, SketchError> {
        self.add_shape(ShapeKind::Oval, Bounds::from_rect(x, y, w, h))
    }

    /// Draws a rectangle at (`x`, `y`) of size `w` x `h`.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<ItemId, SketchError> {
        self.add_shape(ShapeKind::Rectangle, Bounds::from_rect(x, y, w, h))
    }

    /// Draws a line from (`x1`, `y1`) to (`x2`, `y2`).
    ///
    /// The host stores a line as a box, so lines running leftwards or
    /// upwards are mirrored afterwards to restore their direction.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<ItemId, SketchError> {
        let item = self.add_shape(
            ShapeKind::GraphicLine,
            Bounds::from_points(x1, y1, x2, y2),
        )?;
        let horizontal = x2 < x1;
        let vertical = y2 < y1;
        if horizontal || vertical {
            self.host.flip(item, horizontal, vertical)?;
        }
        Ok(item)
    }

    // ── Color ───────────────────────────────────────────────────────────

    /// Fills subsequent shapes with `swatch`.
    pub fn fill(&mut self, swatch: impl Into<Swatch>) {
        self.fill = swatch.into();
    }

    /// Resolves `spec` with [`color`](Self::color) and fills with it.
    pub fn fill_color(&mut self, spec: ColorSpec) -> Result<Swatch, SketchError> {
        let swatch = self.color(spec)?;
        self.fill = swatch.clone();
        Ok(swatch)
    }

    /// Disables fill for subsequent shapes.
    pub fn no_fill(&mut self) {
        self.fill = Swatch::none();
    }

    /// Strokes subsequent shapes with `swatch`.
    pub fn stroke(&mut self, swatch: impl Into<Swatch>) {
        self.stroke = swatch.into();
    }

    /// Resolves `spec` with [`color`](Self::color) and strokes with it.
    pub fn stroke_color(&mut self, spec: ColorSpec) -> Result<Swatch, SketchError> {
        let swatch = self.color(spec)?;
        self.stroke = swatch.clone();
        Ok(swatch)
    }

    /// Disables stroke for subsequent shapes.
    pub fn no_stroke(&mut self) {
        self.stroke = Swatch::none();
    }

    /// Sets the stroke weight of subsequent shapes in points.
    pub fn stroke_weight(&mut self, weight: f64) {
        self.stroke_weight = weight;
    }

    /// Sets the fill tint in percent.
    pub fn fill_tint(&mut self, tint: f64) {
        self.fill_tint = tint;
    }

    /// Sets the stroke tint in percent.
    pub fn stroke_tint(&mut self, tint: f64) {
        self.stroke_tint = tint;
    }

    /// Resolves a color request against the current document.
    ///
    /// Named requests look up an existing swatch; every other request adds
    /// a process color to the document.
    ///
    /// # Errors
    /// Returns [`SketchError::ColorNotFound`] for an unknown swatch name.
    pub fn color(&mut self, spec: ColorSpec) -> Result<Swatch, SketchError> {
        let doc = self.doc()?;
        match spec.resolve() {
            ColorSource::Process(color) => self.host.add_color(doc, &color),
            ColorSource::Existing(name) => {
                if self.host.has_swatch(doc, &name)? {
                    Ok(Swatch::new(name))
                } else {
                    warn!(color = %name, "color doesn't exist");
                    Err(SketchError::ColorNotFound(name))
                }
            }
        }
    }

    /// Current paint state as applied to new shapes.
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.fill.clone(),
            fill_tint: self.fill_tint,
            stroke: self.stroke.clone(),
            stroke_tint: self.stroke_tint,
            stroke_weight: self.stroke_weight,
        }
    }

    // ── Typography ──────────────────────────────────────────────────────

    /// Creates a text frame holding `txt` in the box at (`x`, `y`) of size
    /// `w` x `h`. Paint state is not applied to text.
    pub fn text(
        &mut self,
        txt: &str,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<ItemId, SketchError> {
        let page = self.page()?;
        let layer = self.layer()?;
        self.host
            .add_text_frame(page, layer, txt, Bounds::from_rect(x, y, w, h))
    }

    /// Reads `property` from every paragraph reached by `target`.
    ///
    /// Documents, pages and layers reach the paragraphs of every text frame
    /// they contain; a text frame reaches its own paragraphs. Unset
    /// properties read as `None`.
    pub fn typo(
        &self,
        target: impl Into<TextTarget>,
        property: &str,
    ) -> Result<Vec<Option<PropertyValue>>, SketchError> {
        self.host
            .paragraphs(target.into())?
            .into_iter()
            .map(|paragraph| self.host.text_property(paragraph, property))
            .collect()
    }

    /// Sets `property` to `value` on every paragraph reached by `target`
    /// and returns those paragraphs.
    pub fn set_typo(
        &mut self,
        target: impl Into<TextTarget>,
        property: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<Vec<Paragraph>, SketchError> {
        let value = value.into();
        self.set_typo_all(target, &[(property, value)])
    }

    /// Applies every `(property, value)` pair to each paragraph reached by
    /// `target` and returns those paragraphs.
    pub fn set_typo_all(
        &mut self,
        target: impl Into<TextTarget>,
        properties: &[(&str, PropertyValue)],
    ) -> Result<Vec<Paragraph>, SketchError> {
        let paragraphs = self.host.paragraphs(target.into())?;
        for &paragraph in &paragraphs {
            for (name, value) in properties {
                self.host.set_text_property(paragraph, name, value)?;
            }
        }
        Ok(paragraphs)
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Returns every item in the current document labelled `label`.
    pub fn find_by_label(&mut self, label: &str) -> Result<Vec<ItemId>, SketchError> {
        let doc = self.doc()?;
        self.host.find_by_label(doc, label)
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn add_shape(&mut self, kind: ShapeKind, bounds: Bounds) -> Result<ItemId, SketchError> {
        let page = self.page()?;
        let layer = self.layer()?;
        let style = self.style();
        self.host.add_shape(page, layer, kind, &style, bounds)
    }

    /// Prepares `doc` on the host, then makes it current. Nothing in the
    /// context changes unless every host call succeeds.
    fn adopt(&mut self, doc: DocumentId, reset_paint: bool) -> Result<(), SketchError> {
        let units = self.config.units;
        self.host.use_page_origin(doc)?;
        self.host.set_units(doc, units)?;
        let page = self.host.active_page(doc)?;
        let bounds = self.host.page_bounds(page)?;

        self.reset_doc();
        if reset_paint {
            self.reset_paint();
        }
        self.doc = Some(doc);
        self.page = Some(page);
        self.units = units;
        self.set_page_size(bounds);
        debug!(document = doc.0, units = %units, "current document set");
        Ok(())
    }

    fn reset_doc(&mut self) {
        self.doc = None;
        self.page = None;
        self.layer = None;
        self.width = None;
        self.height = None;
    }

    fn reset_paint(&mut self) {
        self.fill = self.config.fill.clone();
        self.stroke = self.config.stroke.clone();
    }

    fn update_page_size(&mut self) -> Result<(), SketchError> {
        let page = self.page()?;
        let bounds = self.host.page_bounds(page)?;
        self.set_page_size(bounds);
        Ok(())
    }

    fn set_page_size(&mut self, bounds: Bounds) {
        self.width = Some(bounds.width());
        self.height = Some(bounds.height());
    }

    fn page_size(&mut self) -> Result<(f64, f64), SketchError> {
        if let (Some(w), Some(h)) = (self.width, self.height) {
            return Ok((w, h));
        }
        self.update_page_size()?;
        Ok((self.width.unwrap_or(0.0), self.height.unwrap_or(0.0)))
    }
}

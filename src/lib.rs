//! sketchpress: Processing-style drawing and randomness for page layout.
//!
//! Scripts call `rect`, `ellipse`, `line`, `text`, `fill`, `random` and
//! friends without naming the document, page or layer they draw into.
//! A [`Sketch`] tracks that current context and translates each call into
//! operations on a [`Host`], the document model of a desktop publishing
//! application (or the in-process [`MemoryHost`]).
//!
//! The numeric core does not depend on any host: a seedable
//! multiply-with-carry generator, Gaussian sampling by the polar method,
//! and the `map` / `constrain` helpers.
//!
//! # Architecture
//!
//! ```text
//! random::{Marsaglia, Gaussian}   (host-independent numeric core)
//!        │  shared process-wide generator: random / random_range / random_seed
//!        ▼
//! Sketch<H: Host>                 (current document/page/layer/units/paint)
//!        │  Host trait
//!        ▼
//! MemoryHost | scripting bridge   (document model, owned by the host)
//! ```
//!
//! # Examples
//!
//! Reproducible randomness:
//!
//! ```
//! use sketchpress::random::gaussian::Gaussian;
//! use sketchpress::random::marsaglia::Marsaglia;
//!
//! let mut a = Marsaglia::with_seed(42);
//! let mut b = Marsaglia::with_seed(42);
//! assert_eq!(a.next_double(), b.next_double());
//!
//! let mut normal = Gaussian::with_seed(7);
//! let sample = normal.next_gaussian();
//! assert!(sample.is_finite());
//! ```
//!
//! Drawing into the current page:
//!
//! ```
//! use sketchpress::{map, random_range, random_seed, MemoryHost, Sketch, Unit};
//!
//! let mut sketch = Sketch::new(MemoryHost::new());
//! sketch.set_units(Unit::Mm).unwrap();
//! random_seed(1);
//!
//! for i in 0..10 {
//!     let x = map(i as f64, 0.0, 9.0, 10.0, 150.0);
//!     let d = random_range(2.0, 8.0);
//!     sketch.ellipse(x, 20.0, d, d).unwrap();
//! }
//! let doc = sketch.doc().unwrap();
//! assert_eq!(sketch.host().items(doc).count(), 10);
//! ```

#![deny(clippy::all)]

pub mod color;
pub mod config;
pub mod error;
pub mod host;
pub mod math;
pub mod memory;
pub mod random;
pub mod sketch;
pub mod units;

pub use color::{Color, ColorSpec, Swatch};
pub use config::SketchConfig;
pub use error::SketchError;
pub use host::{
    Bounds, DocumentId, Host, ItemId, LayerId, PageId, Paragraph, PropertyValue, SaveOptions,
    ShapeKind, TextTarget,
};
pub use math::{constrain, map};
pub use memory::MemoryHost;
pub use random::global::{random, random_max, random_range, random_seed};
pub use sketch::Sketch;
pub use units::Unit;

//! # Fude
//!
//! Text-run batching and right-to-left reordering for canvas-based rich text.
//!
//! ## Overview
//!
//! Row composition hands `fude` one positioned glyph element at a time, in
//! logical order. The [`TextParticle`] merges neighbouring elements that share
//! kind, style and color into [`TextRun`]s, reattaches trailing punctuation
//! when the document is right-to-left, reorders runs for visual display and
//! finally paints them through a [`Canvas`]. Decoration painters read the
//! same run geometry afterwards.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fude::{BitmapCanvas, DrawOptions, Element, FontBook, TextParticle};
//! use fude::geometry::Quad;
//!
//! // 1. Load fonts
//! let fonts = FontBook::new();
//! fonts.load_system_fonts();
//!
//! // 2. Measure and record a line
//! let mut particle = TextParticle::new(DrawOptions::rtl());
//! let mut x = 0.0;
//! for value in ["م", "ر", "ح", "ب", "ا"] {
//!     let mut element = Element::text(value, "16px sans-serif", 0.0, 20.0);
//!     element.metrics.width = particle.measure_text(&fonts, "16px sans-serif", &element).width;
//!     let width = element.advance();
//!     particle.record(&element, x, 16.0, Quad::from_origin_size(x, 0.0, width, 20.0));
//!     x += width;
//! }
//!
//! // 3. Paint
//! let mut canvas = BitmapCanvas::new(&fonts, 200, 32);
//! particle.complete(&mut canvas);
//! ```
//!
//! ## Features
//!
//! *   **Minimal runs**: one draw call per stretch of uniformly styled text.
//! *   **RTL support**: a local reordering heuristic with visual coordinates for decorations.
//! *   **Measurement cache**: per `(font, value)` memoization of font metrics.
//! *   **Font Management**: system fonts and custom font files through `fontdb` and `fontdue`.

pub mod canvas;
pub mod classify;
pub mod decoration;
pub mod element;
pub mod font_book;
pub mod geometry;
pub mod options;
pub mod particle;
pub mod text;

// common re-exports
pub use canvas::{BitmapCanvas, Canvas, Stroke};
pub use element::{Element, ElementKind, ElementMetrics};
pub use font_book::FontBook;
pub use options::{Direction, DrawOptions};
pub use particle::{TextParticle, TextRun};
pub use text::{MeasureCache, TextMeasurer, TextMetrics};

// re-export dependencies
pub use fontdb;
pub use fontdue;
pub use parking_lot;

//! Logo composition and PNG export.
//!
//! A [`Canvas`] holds shapes in paint order plus one label. It serializes to
//! SVG, which [`render_png`] rasterizes with resvg and encodes as PNG.
//!
//! ```no_run
//! use pitchkit::logo::{RasterOptions, laliax_logo, save_png};
//!
//! save_png(&laliax_logo(), "logo.png", &RasterOptions::default())?;
//! # Ok::<(), pitchkit::Error>(())
//! ```

pub mod canvas;
pub mod display;
pub mod raster;
pub mod scene;
pub mod shape;
pub mod svg;

pub use canvas::{Canvas, Figure, LABEL_FONT_FAMILIES};
pub use display::show;
pub use raster::{Crop, RasterOptions, encode_png, render_png, render_rgba, save_png};
pub use scene::{LOGO_OUTPUT_PATH, laliax_logo};
pub use shape::{
    Color, FontWeight, Label, LineSegment, LineStyle, Point, Rectangle, Shape, ShapeKind,
    Triangle,
};

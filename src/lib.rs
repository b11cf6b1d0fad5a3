//! pitchkit - generators for two fixed artifacts
//!
//! - [`logo`]: composes a small vector logo (triangles, a rectangle, a dashed
//!   line and a text label) and rasterizes it to a 300 DPI PNG.
//! - [`deck`]: builds a seven-slide PresentationML pitch deck and writes it as
//!   a `.pptx` package.
//!
//! The two pipelines share only the [`common`] module (error type, XML
//! escaping and unit conversions). Each has its own binary: `logo` and `deck`.
//!
//! # Example - Writing the logo
//!
//! ```no_run
//! use pitchkit::logo::{LOGO_OUTPUT_PATH, RasterOptions, laliax_logo, save_png};
//!
//! save_png(&laliax_logo(), LOGO_OUTPUT_PATH, &RasterOptions::default())?;
//! # Ok::<(), pitchkit::Error>(())
//! ```
//!
//! # Example - Building a deck
//!
//! ```no_run
//! use pitchkit::deck::DeckBuilder;
//!
//! let mut deck = DeckBuilder::new();
//! deck.title_slide("Hello", "A subtitle")?
//!     .add_slide("Agenda", "- First\n- Second")?;
//! deck.save("hello.pptx")?;
//! # Ok::<(), pitchkit::Error>(())
//! ```

pub mod common;
pub mod deck;
pub mod logo;

pub use common::{Error, Result};

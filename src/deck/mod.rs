//! PresentationML deck builder.
//!
//! A [`Presentation`] owns the seven layouts of the default 4:3 template and
//! the slides created from them. Saving assembles an OPC package (see
//! [`opc`]) with deterministic part order and relationship ids.
//!
//! ```no_run
//! use pitchkit::deck::{DECK_OUTPUT_PATH, humaniot_pitch};
//!
//! humaniot_pitch()?.save(DECK_OUTPUT_PATH)?;
//! # Ok::<(), pitchkit::Error>(())
//! ```

pub mod builder;
pub mod layout;
pub mod master;
pub mod opc;
pub mod pitch;
pub mod presentation;
pub mod properties;
pub mod shape;
pub mod slide;
pub mod template;
pub mod text;

pub use builder::DeckBuilder;
pub use layout::{CONTENT_LAYOUT, SlideLayout, TITLE_LAYOUT, default_layouts};
pub use pitch::{DECK_OUTPUT_PATH, humaniot_pitch};
pub use presentation::Presentation;
pub use properties::{AppProperties, CoreProperties, SaveOptions};
pub use shape::{PlaceholderSize, PlaceholderSpec, PlaceholderType};
pub use slide::{Placeholder, Slide};
pub use text::{Paragraph, TextFrame};

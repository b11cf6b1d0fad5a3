//! XML helpers shared by the SVG and PresentationML writers.

mod escape;

pub use escape::{escape_run_text, escape_xml, is_xml_char};

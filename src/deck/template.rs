//! Fixed package parts of a new presentation.
//!
//! These parts never depend on the deck content and are embedded verbatim.

/// Office theme referenced by the slide master.
pub fn default_theme_xml() -> &'static str {
    include_str!("resources/theme1.xml")
}

/// Presentation properties (`ppt/presProps.xml`).
pub fn default_pres_props_xml() -> &'static str {
    include_str!("resources/presProps.xml")
}

/// View properties (`ppt/viewProps.xml`).
pub fn default_view_props_xml() -> &'static str {
    include_str!("resources/viewProps.xml")
}

/// Table style list (`ppt/tableStyles.xml`).
pub fn default_table_styles_xml() -> &'static str {
    include_str!("resources/tableStyles.xml")
}

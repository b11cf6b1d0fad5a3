/// Placeholder shapes shared by the master, the layouts and the slides.
use std::fmt::Write as FmtWrite;

use crate::common::error::Result;

/// Placeholder role, written as the `type` attribute of `<p:ph>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderType {
    Title,
    /// Centered title of a title slide
    CenterTitle,
    Subtitle,
    Body,
    /// Generic content; the schema default, so it carries no `type` attribute
    Object,
    Date,
    Footer,
    SlideNumber,
}

impl PlaceholderType {
    /// Value of the `type` attribute, `None` for the schema default.
    pub fn xml_type(&self) -> Option<&'static str> {
        match self {
            Self::Title => Some("title"),
            Self::CenterTitle => Some("ctrTitle"),
            Self::Subtitle => Some("subTitle"),
            Self::Body => Some("body"),
            Self::Object => None,
            Self::Date => Some("dt"),
            Self::Footer => Some("ftr"),
            Self::SlideNumber => Some("sldNum"),
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, Self::Title | Self::CenterTitle)
    }

    /// Date, footer and slide number placeholders are not copied onto new slides.
    pub fn is_footer_kind(&self) -> bool {
        matches!(self, Self::Date | Self::Footer | Self::SlideNumber)
    }

    /// Base of the shape name, numbered per slide ("Title 1", "Content Placeholder 2").
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Title | Self::CenterTitle => "Title",
            Self::Subtitle => "Subtitle",
            Self::Body => "Text Placeholder",
            Self::Object => "Content Placeholder",
            Self::Date => "Date Placeholder",
            Self::Footer => "Footer Placeholder",
            Self::SlideNumber => "Slide Number Placeholder",
        }
    }
}

/// Relative size hint, the `sz` attribute of `<p:ph>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderSize {
    Half,
    Quarter,
}

impl PlaceholderSize {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Half => "half",
            Self::Quarter => "quarter",
        }
    }
}

/// Position and extent in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Geometry {
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }
}

/// Placeholder as declared by a master or layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub idx: u32,
    pub ph_type: PlaceholderType,
    pub size: Option<PlaceholderSize>,
    /// Explicit geometry; `None` inherits from the master
    pub geometry: Option<Geometry>,
}

impl PlaceholderSpec {
    pub const fn new(idx: u32, ph_type: PlaceholderType) -> Self {
        Self {
            idx,
            ph_type,
            size: None,
            geometry: None,
        }
    }

    pub const fn with_size(mut self, size: PlaceholderSize) -> Self {
        self.size = Some(size);
        self
    }

    pub const fn at(mut self, x: i64, y: i64, cx: i64, cy: i64) -> Self {
        self.geometry = Some(Geometry::new(x, y, cx, cy));
        self
    }
}

/// Opening of `<p:spTree>` with the mandatory group properties.
pub(crate) fn write_sp_tree_start(xml: &mut String) {
    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");
}

/// `<p:nvSpPr>` and `<p:spPr>` of a placeholder shape.
///
/// The caller writes the `<p:txBody>` and closes the `<p:sp>`.
pub(crate) fn write_placeholder_head(
    xml: &mut String,
    shape_id: u32,
    name: &str,
    spec: &PlaceholderSpec,
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, shape_id, name)?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);

    xml.push_str("<p:nvPr><p:ph");
    if let Some(ph_type) = spec.ph_type.xml_type() {
        write!(xml, r#" type="{}""#, ph_type)?;
    }
    if let Some(size) = spec.size {
        write!(xml, r#" sz="{}""#, size.as_str())?;
    }
    if spec.idx != 0 {
        write!(xml, r#" idx="{}""#, spec.idx)?;
    }
    xml.push_str("/></p:nvPr>");
    xml.push_str("</p:nvSpPr>");

    match spec.geometry {
        Some(g) => write!(
            xml,
            r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm></p:spPr>"#,
            g.x, g.y, g.cx, g.cy
        )?,
        None => xml.push_str("<p:spPr/>"),
    }
    Ok(())
}

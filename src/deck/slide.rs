//! Slides and the placeholders they inherit from their layout.

use std::fmt::Write as FmtWrite;

use super::layout::SlideLayout;
use super::opc::constants::namespace;
use super::shape::{PlaceholderSpec, PlaceholderType, write_placeholder_head, write_sp_tree_start};
use super::text::TextFrame;
use crate::common::error::{Error, Result};

/// A placeholder shape on a slide.
///
/// Geometry is never written for slide placeholders; position and size are
/// inherited from the layout placeholder with the same idx.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    shape_id: u32,
    name: String,
    spec: PlaceholderSpec,
    text: Option<TextFrame>,
}

impl Placeholder {
    fn from_spec(shape_id: u32, spec: &PlaceholderSpec) -> Self {
        Self {
            shape_id,
            name: format!("{} {}", spec.ph_type.base_name(), shape_id - 1),
            spec: PlaceholderSpec {
                geometry: None,
                ..*spec
            },
            text: None,
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn idx(&self) -> u32 {
        self.spec.idx
    }

    pub fn ph_type(&self) -> PlaceholderType {
        self.spec.ph_type
    }

    /// Replace the placeholder text.
    ///
    /// `\n` separates paragraphs and `\v` breaks a line inside a paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.text = Some(TextFrame::from_text(text));
    }

    /// Text assigned to the placeholder, if any.
    pub fn text(&self) -> Option<&TextFrame> {
        self.text.as_ref()
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        write_placeholder_head(xml, self.shape_id, &self.name, &self.spec)?;
        match &self.text {
            Some(frame) => frame.write_xml(xml)?,
            None => TextFrame::from_text("").write_xml(xml)?,
        }
        xml.push_str("</p:sp>");
        Ok(())
    }
}

/// One slide of a presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    slide_id: u32,
    /// 1-based position in the deck
    number: usize,
    layout_index: usize,
    placeholders: Vec<Placeholder>,
}

impl Slide {
    /// Create a slide carrying a copy of each non-footer placeholder of `layout`.
    pub fn from_layout(
        slide_id: u32,
        number: usize,
        layout_index: usize,
        layout: &SlideLayout,
    ) -> Self {
        // id 1 is the shape tree itself
        let placeholders = layout
            .slide_placeholders()
            .enumerate()
            .map(|(i, spec)| Placeholder::from_spec(i as u32 + 2, spec))
            .collect();
        Self {
            slide_id,
            number,
            layout_index,
            placeholders,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Index of the layout this slide was created from.
    pub fn layout_index(&self) -> usize {
        self.layout_index
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// The title placeholder (idx 0).
    pub fn title(&self) -> Result<&Placeholder> {
        self.placeholders
            .iter()
            .find(|ph| ph.ph_type().is_title())
            .ok_or(Error::PlaceholderNotFound {
                slide: self.number,
                idx: 0,
            })
    }

    pub fn title_mut(&mut self) -> Result<&mut Placeholder> {
        let slide = self.number;
        self.placeholders
            .iter_mut()
            .find(|ph| ph.ph_type().is_title())
            .ok_or(Error::PlaceholderNotFound { slide, idx: 0 })
    }

    /// Placeholder by its idx.
    pub fn placeholder(&self, idx: u32) -> Result<&Placeholder> {
        self.placeholders
            .iter()
            .find(|ph| ph.idx() == idx)
            .ok_or(Error::PlaceholderNotFound {
                slide: self.number,
                idx,
            })
    }

    pub fn placeholder_mut(&mut self, idx: u32) -> Result<&mut Placeholder> {
        let slide = self.number;
        self.placeholders
            .iter_mut()
            .find(|ph| ph.idx() == idx)
            .ok_or(Error::PlaceholderNotFound { slide, idx })
    }

    /// Serialize `slideN.xml`.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;
        xml.push_str("<p:cSld>");
        write_sp_tree_start(&mut xml);
        for placeholder in &self.placeholders {
            placeholder.write_xml(&mut xml)?;
        }
        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::layout::{CONTENT_LAYOUT, TITLE_LAYOUT, default_layouts};

    fn content_slide() -> Slide {
        let layouts = default_layouts();
        Slide::from_layout(257, 2, CONTENT_LAYOUT, &layouts[CONTENT_LAYOUT])
    }

    #[test]
    fn test_placeholders_copied_from_layout() {
        let slide = content_slide();
        let names = slide
            .placeholders()
            .iter()
            .map(|ph| (ph.shape_id(), ph.name().to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                (2, "Title 1".to_string()),
                (3, "Content Placeholder 2".to_string())
            ]
        );
    }

    #[test]
    fn test_title_slide_placeholders() {
        let layouts = default_layouts();
        let slide = Slide::from_layout(256, 1, TITLE_LAYOUT, &layouts[TITLE_LAYOUT]);
        assert_eq!(slide.title().unwrap().ph_type(), PlaceholderType::CenterTitle);
        assert_eq!(slide.placeholder(1).unwrap().ph_type(), PlaceholderType::Subtitle);
    }

    #[test]
    fn test_missing_placeholder() {
        let mut slide = content_slide();
        let err = slide.placeholder_mut(2).unwrap_err();
        assert!(matches!(err, Error::PlaceholderNotFound { slide: 2, idx: 2 }));

        let layouts = default_layouts();
        let mut blank = Slide::from_layout(258, 3, 6, &layouts[6]);
        assert!(matches!(
            blank.title_mut(),
            Err(Error::PlaceholderNotFound { slide: 3, idx: 0 })
        ));
    }

    #[test]
    fn test_slide_xml() {
        let mut slide = content_slide();
        slide.title_mut().unwrap().set_text("The Problem");
        slide.placeholder_mut(1).unwrap().set_text("- one\n- two");
        let xml = slide.to_xml().unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Title 1"/>"#));
        assert!(xml.contains("<a:t>The Problem</a:t>"));
        assert!(xml.contains("<a:t>- two</a:t>"));
        // geometry comes from the layout
        assert!(!xml.contains("<a:xfrm><a:off x=\"457200\""));
        assert_eq!(xml.matches("<p:spPr/>").count(), 2);
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_untouched_placeholder_has_empty_paragraph() {
        let xml = content_slide().to_xml().unwrap();
        assert_eq!(xml.matches("<a:p/>").count(), 2);
    }
}

//! Slide layouts of the default 4:3 template.
//!
//! Layout indices follow the usual default template order, so index 0 is
//! "Title Slide" and index 1 is "Title and Content".

use std::fmt::Write as FmtWrite;

use super::opc::constants::namespace;
use super::shape::{
    PlaceholderSize, PlaceholderSpec, PlaceholderType, write_placeholder_head, write_sp_tree_start,
};
use crate::common::error::Result;
use crate::common::xml::escape_xml;

/// Index of the title-slide layout.
pub const TITLE_LAYOUT: usize = 0;
/// Index of the title-and-content layout.
pub const CONTENT_LAYOUT: usize = 1;

/// Fixed field id shared by every slide-number placeholder.
pub(crate) const SLIDE_NUMBER_FIELD_ID: &str = "{B6F15528-21DE-4FAA-801E-634DDDAF4B2B}";

/// A template a slide is created from.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideLayout {
    name: &'static str,
    /// `type` attribute of `<p:sldLayout>`
    kind: &'static str,
    placeholders: Vec<PlaceholderSpec>,
}

impl SlideLayout {
    fn new(name: &'static str, kind: &'static str, placeholders: Vec<PlaceholderSpec>) -> Self {
        let mut placeholders = placeholders;
        placeholders.extend(footer_placeholders());
        Self {
            name,
            kind,
            placeholders,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Every placeholder, footers included.
    pub fn placeholders(&self) -> &[PlaceholderSpec] {
        &self.placeholders
    }

    /// Placeholders that are copied onto a slide created from this layout.
    pub fn slide_placeholders(&self) -> impl Iterator<Item = &PlaceholderSpec> {
        self.placeholders
            .iter()
            .filter(|spec| !spec.ph_type.is_footer_kind())
    }

    /// Serialize the `slideLayoutN.xml` part.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="{}" preserve="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN,
            self.kind
        )?;
        write!(xml, r#"<p:cSld name="{}">"#, escape_xml(self.name))?;
        write_sp_tree_start(&mut xml);

        for (i, spec) in self.placeholders.iter().enumerate() {
            let shape_id = i as u32 + 2;
            let name = format!("{} {}", spec.ph_type.base_name(), shape_id - 1);
            write_placeholder_head(&mut xml, shape_id, &name, spec)?;
            write_prompt_body(&mut xml, spec.ph_type)?;
            xml.push_str("</p:sp>");
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sldLayout>");
        Ok(xml)
    }
}

/// The seven layouts of the default template, in index order.
pub fn default_layouts() -> Vec<SlideLayout> {
    use PlaceholderSize::{Half, Quarter};
    use PlaceholderType::*;

    vec![
        SlideLayout::new(
            "Title Slide",
            "title",
            vec![
                PlaceholderSpec::new(0, CenterTitle).at(685800, 2130425, 7772400, 1470025),
                PlaceholderSpec::new(1, Subtitle).at(1371600, 3886200, 6400800, 1752600),
            ],
        ),
        SlideLayout::new(
            "Title and Content",
            "obj",
            vec![PlaceholderSpec::new(0, Title), PlaceholderSpec::new(1, Object)],
        ),
        SlideLayout::new(
            "Section Header",
            "secHead",
            vec![
                PlaceholderSpec::new(0, Title).at(722313, 4406900, 7772400, 1362075),
                PlaceholderSpec::new(1, Body).at(722313, 2906713, 7772400, 1500187),
            ],
        ),
        SlideLayout::new(
            "Two Content",
            "twoObj",
            vec![
                PlaceholderSpec::new(0, Title),
                PlaceholderSpec::new(1, Object)
                    .with_size(Half)
                    .at(457200, 1600200, 4038600, 4525963),
                PlaceholderSpec::new(2, Object)
                    .with_size(Half)
                    .at(4648200, 1600200, 4038600, 4525963),
            ],
        ),
        SlideLayout::new(
            "Comparison",
            "twoTxTwoObj",
            vec![
                PlaceholderSpec::new(0, Title).at(457200, 274638, 8229600, 1143000),
                PlaceholderSpec::new(1, Body).at(457200, 1535113, 4040188, 639762),
                PlaceholderSpec::new(2, Object)
                    .with_size(Half)
                    .at(457200, 2174875, 4040188, 3951288),
                PlaceholderSpec::new(3, Body)
                    .with_size(Quarter)
                    .at(4645025, 1535113, 4041775, 639762),
                PlaceholderSpec::new(4, Object)
                    .with_size(Quarter)
                    .at(4645025, 2174875, 4041775, 3951288),
            ],
        ),
        SlideLayout::new("Title Only", "titleOnly", vec![PlaceholderSpec::new(0, Title)]),
        SlideLayout::new("Blank", "blank", Vec::new()),
    ]
}

/// Date, footer and slide number, inheriting their geometry from the master.
fn footer_placeholders() -> [PlaceholderSpec; 3] {
    [
        PlaceholderSpec::new(10, PlaceholderType::Date).with_size(PlaceholderSize::Half),
        PlaceholderSpec::new(11, PlaceholderType::Footer).with_size(PlaceholderSize::Quarter),
        PlaceholderSpec::new(12, PlaceholderType::SlideNumber).with_size(PlaceholderSize::Quarter),
    ]
}

const BODY_PROMPT: [&str; 5] = [
    "Click to edit Master text styles",
    "Second level",
    "Third level",
    "Fourth level",
    "Fifth level",
];

/// `<p:txBody>` with the prompt text shown in an empty placeholder.
pub(crate) fn write_prompt_body(xml: &mut String, ph_type: PlaceholderType) -> Result<()> {
    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
    match ph_type {
        PlaceholderType::Title | PlaceholderType::CenterTitle => {
            write_prompt_paragraph(xml, 0, "Click to edit Master title style")?
        },
        PlaceholderType::Subtitle => {
            write_prompt_paragraph(xml, 0, "Click to edit Master subtitle style")?
        },
        PlaceholderType::Body | PlaceholderType::Object => {
            for (level, prompt) in BODY_PROMPT.iter().enumerate() {
                write_prompt_paragraph(xml, level, prompt)?;
            }
        },
        PlaceholderType::Date | PlaceholderType::Footer => {
            xml.push_str(r#"<a:p><a:endParaRPr lang="en-US"/></a:p>"#)
        },
        PlaceholderType::SlideNumber => write!(
            xml,
            r#"<a:p><a:fld id="{}" type="slidenum"><a:rPr lang="en-US"/><a:t>‹#›</a:t></a:fld><a:endParaRPr lang="en-US"/></a:p>"#,
            SLIDE_NUMBER_FIELD_ID
        )?,
    }
    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_prompt_paragraph(xml: &mut String, level: usize, text: &str) -> Result<()> {
    xml.push_str("<a:p>");
    if level > 0 {
        write!(xml, r#"<a:pPr lvl="{}"/>"#, level)?;
    }
    write!(
        xml,
        r#"<a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r>"#,
        escape_xml(text)
    )?;
    xml.push_str("</a:p>");
    Ok(())
}

//! Placeholder text: paragraphs, line breaks and their DrawingML form.
//!
//! Text assigned to a placeholder is split on `\n` into paragraphs and each
//! paragraph on vertical tab (`\v`) into lines joined by `<a:br/>`. Nothing
//! else is interpreted, so markup-like sequences such as `**bold**` are kept
//! as literal characters.

use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::xml::escape_run_text;

/// Paragraph separator.
pub const PARAGRAPH_SEPARATOR: char = '\n';
/// Line break inside a paragraph.
pub const LINE_BREAK: char = '\x0b';

const RUN_PROPERTIES: &str = r#"<a:rPr lang="en-US" dirty="0"/>"#;

/// One paragraph: lines separated by soft breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<String>,
}

impl Paragraph {
    fn parse(text: &str) -> Self {
        Self {
            lines: text.split(LINE_BREAK).map(str::to_string).collect(),
        }
    }

    /// Lines of the paragraph; never empty.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True for a paragraph without any characters.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    /// Paragraph text with breaks written back as vertical tabs.
    pub fn text(&self) -> String {
        self.lines.join(&LINE_BREAK.to_string())
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        if self.is_empty() && self.lines.len() == 1 {
            xml.push_str("<a:p/>");
            return Ok(());
        }

        xml.push_str("<a:p>");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                write!(xml, "<a:br>{}</a:br>", RUN_PROPERTIES)?;
            }
            if !line.is_empty() {
                write!(
                    xml,
                    "<a:r>{}<a:t>{}</a:t></a:r>",
                    RUN_PROPERTIES,
                    escape_run_text(line)
                )?;
            }
        }
        xml.push_str("</a:p>");
        Ok(())
    }
}

/// The text of a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Split `text` into paragraphs. Always yields at least one paragraph.
    pub fn from_text(text: &str) -> Self {
        Self {
            paragraphs: text.split(PARAGRAPH_SEPARATOR).map(Paragraph::parse).collect(),
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// The text this frame was built from.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write `<p:txBody>`.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body_xml(text: &str) -> String {
        let mut xml = String::new();
        TextFrame::from_text(text).write_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_paragraph_split() {
        let frame = TextFrame::from_text("a\nb\n\nc");
        let texts = frame
            .paragraphs()
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>();
        assert_eq!(texts, ["a", "b", "", "c"]);
        assert!(frame.paragraphs()[2].is_empty());
    }

    #[test]
    fn test_empty_text_is_one_empty_paragraph() {
        let frame = TextFrame::from_text("");
        assert_eq!(frame.paragraphs().len(), 1);
        assert_eq!(body_xml(""), "<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>");
    }

    #[test]
    fn test_vertical_tab_is_line_break() {
        let xml = body_xml("one\x0btwo");
        assert_eq!(
            xml.matches("<a:p>").count(),
            1,
            "a vertical tab must not start a new paragraph"
        );
        assert!(xml.contains(r#"<a:br><a:rPr lang="en-US" dirty="0"/></a:br>"#));
    }

    #[test]
    fn test_markup_is_literal() {
        let xml = body_xml("**Ethiopia:**");
        assert!(xml.contains("<a:t>**Ethiopia:**</a:t>"));
        assert!(!xml.contains(r#"b="1""#));
    }

    #[test]
    fn test_run_text_is_escaped() {
        let xml = body_xml("R&D <team>");
        assert!(xml.contains("<a:t>R&amp;D &lt;team&gt;</a:t>"));
    }

    proptest! {
        #[test]
        fn prop_text_round_trips(s in any::<String>()) {
            let frame = TextFrame::from_text(&s);
            prop_assert_eq!(frame.text(), s.clone());
            prop_assert_eq!(frame.paragraphs().len(), s.matches('\n').count() + 1);
        }
    }
}

//! Document properties of a presentation package.
//!
//! Core properties live in `docProps/core.xml`, extended (application)
//! properties in `docProps/app.xml`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::common::xml::escape_xml;

/// Document core properties (metadata).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreProperties {
    /// Document title
    pub title: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Revision number
    pub revision: Option<u32>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl CoreProperties {
    /// Create a new empty properties set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set who last modified the document.
    pub fn last_modified_by(mut self, name: &str) -> Self {
        self.last_modified_by = Some(name.to_string());
        self
    }

    /// Set the revision number.
    pub fn revision(mut self, revision: u32) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Set both the creation and modification dates.
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let text_elements = [
            ("dc:title", &self.title),
            ("cp:lastModifiedBy", &self.last_modified_by),
        ];
        for (tag, value) in text_elements {
            if let Some(value) = value {
                xml.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(value)));
            }
        }

        if let Some(revision) = self.revision {
            xml.push_str(&format!("<cp:revision>{revision}</cp:revision>"));
        }

        // W3CDTF, always in UTC
        if let Some(ref created) = self.created {
            xml.push_str(&format!(
                r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
                created.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        if let Some(ref modified) = self.modified {
            xml.push_str(&format!(
                r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
                modified.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Extended properties written to `docProps/app.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppProperties {
    pub application: String,
    pub presentation_format: String,
    pub slides: usize,
}

impl AppProperties {
    pub fn new(slides: usize) -> Self {
        Self {
            application: env!("CARGO_PKG_NAME").to_string(),
            presentation_format: "On-screen Show (4:3)".to_string(),
            slides,
        }
    }

    pub fn to_xml(&self) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                "\n",
                r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
                "<TotalTime>0</TotalTime>",
                "<Application>{}</Application>",
                "<PresentationFormat>{}</PresentationFormat>",
                "<Slides>{}</Slides>",
                "<Notes>0</Notes>",
                "<HiddenSlides>0</HiddenSlides>",
                "</Properties>"
            ),
            escape_xml(&self.application),
            escape_xml(&self.presentation_format),
            self.slides
        )
    }
}

/// Options for serializing a presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Written as both the created and modified date when set.
    ///
    /// Leaving it unset keeps the package byte-identical across runs.
    pub timestamp: Option<DateTime<Utc>>,
}

impl SaveOptions {
    /// Options that stamp the package with the current time.
    pub fn stamped_now() -> Self {
        Self {
            timestamp: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_core_properties_builder() {
        let props = CoreProperties::new()
            .title("Humaniot Robotic Coder")
            .last_modified_by("pitchkit")
            .revision(1);

        assert_eq!(props.title.as_deref(), Some("Humaniot Robotic Coder"));
        assert_eq!(props.revision, Some(1));
        assert!(props.created.is_none());
    }

    #[test]
    fn test_xml_generation() {
        let xml = CoreProperties::new()
            .title("Deck")
            .last_modified_by("pitchkit")
            .revision(1)
            .to_xml();
        assert!(xml.contains("<dc:title>Deck</dc:title>"));
        assert!(xml.contains("<cp:lastModifiedBy>pitchkit</cp:lastModifiedBy>"));
        assert!(xml.contains("<cp:revision>1</cp:revision>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_timestamps() {
        let at = Utc.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap();
        let xml = CoreProperties::new().stamped(at).to_xml();
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2025-08-01T09:30:00Z</dcterms:created>"#
        ));
        assert!(xml.contains("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">2025-08-01T09:30:00Z"));
    }

    #[test]
    fn test_xml_escaping() {
        let xml = CoreProperties::new().title("R&D <deck>").to_xml();
        assert!(xml.contains("<dc:title>R&amp;D &lt;deck&gt;</dc:title>"));
    }

    #[test]
    fn test_app_properties() {
        let xml = AppProperties::new(7).to_xml();
        assert!(xml.contains("<Slides>7</Slides>"));
        assert!(xml.contains("<Application>pitchkit</Application>"));
    }
}

//! The in-memory presentation and its serialization to a `.pptx` package.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use log::{debug, info};

use super::layout::{SlideLayout, default_layouts};
use super::master::{SLIDE_MASTER_ID, slide_master_xml};
use super::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use super::opc::{OpcPackage, PackURI, PackageWriter, Part};
use super::properties::{AppProperties, CoreProperties, SaveOptions};
use super::slide::Slide;
use super::template;
use crate::common::error::{Error, Result};
use crate::common::unit::inch_to_emu;

/// Slide size of the 4:3 template, in inches.
pub const SLIDE_WIDTH_IN: f64 = 10.0;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

const FIRST_SLIDE_ID: u32 = 256;

const PRESENTATION_PART: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_PART: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME_PART: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS_PART: &str = "/ppt/presProps.xml";
const VIEW_PROPS_PART: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_PART: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_PART: &str = "/docProps/core.xml";
const APP_PROPS_PART: &str = "/docProps/app.xml";

/// A presentation built from the default 4:3 template.
#[derive(Debug, Clone)]
pub struct Presentation {
    layouts: Vec<SlideLayout>,
    slides: Vec<Slide>,
    slide_width: i64,
    slide_height: i64,
    properties: CoreProperties,
}

impl Presentation {
    /// Create an empty presentation owning the default layouts.
    pub fn new() -> Self {
        Self {
            layouts: default_layouts(),
            slides: Vec::new(),
            slide_width: inch_to_emu(SLIDE_WIDTH_IN),
            slide_height: inch_to_emu(SLIDE_HEIGHT_IN),
            properties: CoreProperties::new(),
        }
    }

    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    /// Layout by index in the template's catalogue.
    pub fn layout(&self, index: usize) -> Result<&SlideLayout> {
        self.layouts.get(index).ok_or(Error::LayoutNotFound(index))
    }

    /// Append a new slide built from the layout at `layout_index`.
    pub fn add_slide(&mut self, layout_index: usize) -> Result<&mut Slide> {
        let layout = self.layout(layout_index)?;
        let number = self.slides.len() + 1;
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        let slide = Slide::from_layout(slide_id, number, layout_index, layout);
        debug!(
            "added slide {} from layout '{}'",
            number,
            layout.name()
        );

        self.slides.push(slide);
        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide width and height in EMUs.
    pub fn slide_size(&self) -> (i64, i64) {
        (self.slide_width, self.slide_height)
    }

    pub fn properties(&self) -> &CoreProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut CoreProperties {
        &mut self.properties
    }

    /// Generate presentation.xml with the relationship ids of the master and slides.
    fn presentation_xml(&self, master_r_id: &str, slide_r_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_r_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, r_id) in self.slides.iter().zip(slide_r_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), r_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");
        Ok(xml)
    }

    /// Assemble the complete OPC package.
    ///
    /// Parts and relationship ids are allocated in a fixed order, so equal
    /// presentations always yield equal packages.
    pub fn to_package(&self, options: &SaveOptions) -> Result<OpcPackage> {
        let pres_uri = PackURI::new(PRESENTATION_PART)?;
        let master_uri = PackURI::new(SLIDE_MASTER_PART)?;
        let theme_uri = PackURI::new(THEME_PART)?;
        let pres_props_uri = PackURI::new(PRES_PROPS_PART)?;
        let view_props_uri = PackURI::new(VIEW_PROPS_PART)?;
        let table_styles_uri = PackURI::new(TABLE_STYLES_PART)?;
        let core_uri = PackURI::new(CORE_PROPS_PART)?;
        let app_uri = PackURI::new(APP_PROPS_PART)?;

        let layout_uris = (1..=self.layouts.len())
            .map(|n| PackURI::new(format!("/ppt/slideLayouts/slideLayout{n}.xml")))
            .collect::<Result<Vec<_>>>()?;
        let slide_uris = (1..=self.slides.len())
            .map(|n| PackURI::new(format!("/ppt/slides/slide{n}.xml")))
            .collect::<Result<Vec<_>>>()?;

        let mut package = OpcPackage::new();
        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        // presentation.xml
        let mut pres_part = Part::new(pres_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_r_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
        let slide_r_ids = slide_uris
            .iter()
            .map(|uri| pres_part.relate_to(uri, rt::SLIDE))
            .collect::<Vec<_>>();
        pres_part.set_blob(self.presentation_xml(&master_r_id, &slide_r_ids)?);
        package.add_part(pres_part)?;

        // slide master
        let mut master_part = Part::new(master_uri.clone(), ct::PML_SLIDE_MASTER, Vec::new());
        let layout_r_ids = layout_uris
            .iter()
            .map(|uri| master_part.relate_to(uri, rt::SLIDE_LAYOUT))
            .collect::<Vec<_>>();
        master_part.relate_to(&theme_uri, rt::THEME);
        master_part.set_blob(slide_master_xml(&layout_r_ids)?);
        package.add_part(master_part)?;

        for (layout, uri) in self.layouts.iter().zip(&layout_uris) {
            let mut part = Part::new(uri.clone(), ct::PML_SLIDE_LAYOUT, layout.to_xml()?);
            part.relate_to(&master_uri, rt::SLIDE_MASTER);
            package.add_part(part)?;
        }

        for (slide, uri) in self.slides.iter().zip(&slide_uris) {
            let layout_uri = layout_uris
                .get(slide.layout_index())
                .ok_or(Error::LayoutNotFound(slide.layout_index()))?;
            let mut part = Part::new(uri.clone(), ct::PML_SLIDE, slide.to_xml()?);
            part.relate_to(layout_uri, rt::SLIDE_LAYOUT);
            debug!("serialized slide {} as {}", slide.number(), uri);
            package.add_part(part)?;
        }

        package.add_part(Part::new(theme_uri, ct::OFC_THEME, template::default_theme_xml()))?;
        package.add_part(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml(),
        ))?;
        package.add_part(Part::new(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml(),
        ))?;
        package.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml(),
        ))?;

        let core = match options.timestamp {
            Some(at) => self.properties.clone().stamped(at),
            None => self.properties.clone(),
        };
        package.add_part(Part::new(core_uri, ct::OPC_CORE_PROPERTIES, core.to_xml()))?;
        package.add_part(Part::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            AppProperties::new(self.slides.len()).to_xml(),
        ))?;

        Ok(package)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self, options: &SaveOptions) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(&self.to_package(options)?)
    }

    /// Write the presentation to `path` in a single write.
    pub fn save<P: AsRef<Path>>(&self, path: P, options: &SaveOptions) -> Result<()> {
        let path = path.as_ref();
        info!(
            "saving presentation with {} slides to {}",
            self.slides.len(),
            path.display()
        );
        PackageWriter::write(path, &self.to_package(options)?)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::layout::{CONTENT_LAYOUT, TITLE_LAYOUT};
    use chrono::TimeZone;

    fn two_slide_deck() -> Presentation {
        let mut pres = Presentation::new();
        let slide = pres.add_slide(TITLE_LAYOUT).unwrap();
        slide.title_mut().unwrap().set_text("Title");
        let slide = pres.add_slide(CONTENT_LAYOUT).unwrap();
        slide.title_mut().unwrap().set_text("Body");
        pres
    }

    fn part_text(pkg: &OpcPackage, name: &str) -> String {
        let uri = PackURI::new(name).unwrap();
        String::from_utf8(pkg.get_part(&uri).unwrap().blob().to_vec()).unwrap()
    }

    #[test]
    fn test_layout_lookup() {
        let pres = Presentation::new();
        assert_eq!(pres.layouts().len(), 7);
        assert_eq!(pres.layout(1).unwrap().name(), "Title and Content");
        assert!(matches!(pres.layout(7), Err(Error::LayoutNotFound(7))));
    }

    #[test]
    fn test_slide_size_is_four_by_three() {
        assert_eq!(Presentation::new().slide_size(), (9_144_000, 6_858_000));
    }

    #[test]
    fn test_add_slide_with_missing_layout() {
        let mut pres = Presentation::new();
        assert!(matches!(pres.add_slide(42), Err(Error::LayoutNotFound(42))));
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_slide_ids_and_numbers() {
        let pres = two_slide_deck();
        let ids = pres
            .slides()
            .iter()
            .map(|s| (s.slide_id(), s.number()))
            .collect::<Vec<_>>();
        assert_eq!(ids, [(256, 1), (257, 2)]);
    }

    #[test]
    fn test_presentation_relationships() {
        let pkg = two_slide_deck().to_package(&SaveOptions::default()).unwrap();
        let pres_part = pkg
            .get_part(&PackURI::new(PRESENTATION_PART).unwrap())
            .unwrap();
        let rels = pres_part.rels();
        assert_eq!(rels.get("rId1").unwrap().target_ref(), "slideMasters/slideMaster1.xml");
        assert_eq!(rels.get("rId4").unwrap().target_ref(), "theme/theme1.xml");
        assert_eq!(rels.get("rId6").unwrap().target_ref(), "slides/slide1.xml");
        assert_eq!(rels.get("rId7").unwrap().target_ref(), "slides/slide2.xml");

        let xml = part_text(&pkg, PRESENTATION_PART);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId7"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000" type="screen4x3"/>"#));
    }

    #[test]
    fn test_slides_point_at_their_layouts() {
        let pkg = two_slide_deck().to_package(&SaveOptions::default()).unwrap();
        let target = |name: &str| {
            let part = pkg.get_part(&PackURI::new(name).unwrap()).unwrap();
            part.rels().get("rId1").unwrap().target_ref().to_string()
        };
        assert_eq!(target("/ppt/slides/slide1.xml"), "../slideLayouts/slideLayout1.xml");
        assert_eq!(target("/ppt/slides/slide2.xml"), "../slideLayouts/slideLayout2.xml");
        assert_eq!(
            target("/ppt/slideLayouts/slideLayout7.xml"),
            "../slideMasters/slideMaster1.xml"
        );
    }

    #[test]
    fn test_part_count() {
        let pkg = two_slide_deck().to_package(&SaveOptions::default()).unwrap();
        // presentation, master, 7 layouts, 2 slides, theme, 3 props parts, core, app
        assert_eq!(pkg.part_count(), 17);
        assert_eq!(pkg.rels().len(), 3);
    }

    #[test]
    fn test_timestamp_only_when_requested() {
        let pres = two_slide_deck();
        let pkg = pres.to_package(&SaveOptions::default()).unwrap();
        assert!(!part_text(&pkg, CORE_PROPS_PART).contains("dcterms:created"));

        let at = chrono::Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
        let pkg = pres
            .to_package(&SaveOptions {
                timestamp: Some(at),
            })
            .unwrap();
        assert!(part_text(&pkg, CORE_PROPS_PART).contains("2025-08-01T00:00:00Z"));
    }

    #[test]
    fn test_to_bytes_is_deterministic() {
        let pres = two_slide_deck();
        let a = pres.to_bytes(&SaveOptions::default()).unwrap();
        let b = pres.to_bytes(&SaveOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}

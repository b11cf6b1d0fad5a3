//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] into a ZIP archive: `[Content_Types].xml`
//! first, then the package relationships, then every part followed by its own
//! relationships.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};

use super::constants::{content_type as ct, namespace};
use super::package::OpcPackage;
use super::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use super::phys_pkg::PhysPkgWriter;
use super::rel::Relationships;
use crate::common::error::{Error, Result};
use crate::common::xml::escape_xml;

/// Package writer that serializes an OPC package to a ZIP file.
///
/// # Example
///
/// ```no_run
/// use pitchkit::deck::opc::{OpcPackage, PackageWriter};
///
/// let pkg = OpcPackage::new();
/// // ... add parts to package ...
/// PackageWriter::write("output.pptx", &pkg)?;
/// # Ok::<(), pitchkit::Error>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file in a single write.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let path = path.as_ref();
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, &bytes)?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    ///
    /// Fails with [`Error::DanglingRelationship`] if any relationship targets
    /// a part that is not in the package.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        Self::check_relationships(package)?;

        let mut phys_writer = PhysPkgWriter::new();

        let cti = ContentTypesItem::from_package(package);
        phys_writer.write(&PackURI::new(CONTENT_TYPES_URI)?, cti.to_xml().as_bytes())?;

        let pkg_rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        phys_writer.write(&pkg_rels_uri, package.rels().to_xml().as_bytes())?;

        for part in package.iter_parts() {
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        debug!("package: {} parts serialized", package.part_count());
        phys_writer.finish()
    }

    fn check_relationships(package: &OpcPackage) -> Result<()> {
        let check = |source: &str, rels: &Relationships| -> Result<()> {
            for rel in rels.iter() {
                let target = rel.target_partname()?;
                if !package.contains_part(&target) {
                    return Err(Error::DanglingRelationship {
                        source_part: source.to_string(),
                        r_id: rel.r_id().to_string(),
                        target: target.to_string(),
                    });
                }
            }
            Ok(())
        };

        check(PACKAGE_URI, package.rels())?;
        for part in package.iter_parts() {
            check(part.partname().as_str(), part.rels())?;
        }
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping. Both maps
/// are ordered, so the XML does not depend on insertion order.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Build ContentTypesItem from an OPC package.
    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Uses the extension default when it already maps to `content_type`,
    /// otherwise an override for the specific partname.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        if self.defaults.get(partname.ext()).map(String::as_str) == Some(content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES));

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::opc::part::Part;
    use crate::deck::opc::constants::relationship_type as rt;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(
            &PackURI::new("/ppt/presentation.xml").unwrap(),
            ct::PML_PRESENTATION_MAIN,
        );
        cti.add_content_type(&PackURI::new("/ppt/custom.xml").unwrap(), ct::XML);

        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/presentation.xml""#));
        assert!(!xml.contains(r#"PartName="/ppt/custom.xml""#));
    }

    #[test]
    fn test_dangling_relationship_rejected() {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.relate_to(&pres, rt::OFFICE_DOCUMENT);

        assert!(matches!(
            PackageWriter::to_bytes(&pkg),
            Err(Error::DanglingRelationship { .. })
        ));

        pkg.add_part(Part::new(pres, ct::PML_PRESENTATION_MAIN, "<p:presentation/>"))
            .unwrap();
        assert!(PackageWriter::to_bytes(&pkg).is_ok());
    }
}

/// In-memory OPC package: package-level relationships plus an ordered set of parts.
use super::packuri::{PACKAGE_URI, PackURI};
use super::part::Part;
use super::rel::Relationships;
use crate::common::error::{Error, Result};

/// An OPC package ready to be serialized.
///
/// Parts keep the order in which they were added, which is also the order in
/// which they are written to the archive.
#[derive(Debug, Clone)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part. Partnames must be unique within the package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.contains_part(part.partname()) {
            return Err(Error::InvalidPartName(format!(
                "duplicate part {}",
                part.partname()
            )));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Get a part by partname.
    pub fn get_part(&self, partname: &PackURI) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname() == partname)
    }

    /// Iterate over parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.get_part(partname).is_some()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to a part, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref).r_id().to_string()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

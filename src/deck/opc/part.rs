/// Parts of an OPC package.
///
/// A part is the unit of content in a package: a partname, a content type,
/// the serialized bytes, and the relationships from this part to others.
use super::packuri::PackURI;
use super::rel::Relationships;

/// A serialized package part.
#[derive(Debug, Clone)]
pub struct Part {
    /// The partname (URI) of this part
    partname: PackURI,

    /// The content type of this part
    content_type: String,

    /// The binary content of this part
    blob: Vec<u8>,

    /// Relationships from this part to other parts
    rels: Relationships,
}

impl Part {
    /// Create a new part with no relationships.
    pub fn new(partname: PackURI, content_type: &str, blob: impl Into<Vec<u8>>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.to_string(),
            blob: blob.into(),
            rels,
        }
    }

    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the content, e.g. once relationship ids referenced by it are known.
    pub fn set_blob(&mut self, blob: impl Into<Vec<u8>>) {
        self.blob = blob.into();
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part, returning its rId.
    ///
    /// `target` is the absolute partname; the stored reference is made
    /// relative to this part's directory.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref).r_id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relate_to_is_relative() {
        let mut slide = Part::new(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            "application/xml",
            "<p:sld/>",
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        let r_id = slide.relate_to(&layout, "layout");
        assert_eq!(r_id, "rId1");

        let rel = slide.rels().get("rId1").unwrap();
        assert_eq!(rel.target_ref(), "../slideLayouts/slideLayout1.xml");
        assert_eq!(rel.target_partname().unwrap(), layout);

        // same target, same rId
        assert_eq!(slide.relate_to(&layout, "layout"), "rId1");
    }
}

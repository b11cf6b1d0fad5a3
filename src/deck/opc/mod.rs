//! Open Packaging Conventions (OPC) writer.
//!
//! Just enough of OPC to emit a presentation package: part names, parts,
//! relationships, content types and the ZIP container.

pub mod constants;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};

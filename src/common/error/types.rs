//! Error type shared by the logo and deck pipelines.
use thiserror::Error;

/// Main error type for pitchkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The generated SVG could not be turned into a render tree
    #[error("SVG error: {0}")]
    Svg(String),

    /// Pixmap allocation or image encoding failed
    #[error("Raster error: {0}")]
    Raster(String),

    /// No installed font satisfies the label's family and weight
    #[error("No font found for family '{family}' with weight {weight}")]
    FontNotFound { family: String, weight: u16 },

    /// Shape coordinates or sizes that cannot be drawn
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// A package part name that is not an absolute URI, or one used twice
    #[error("Invalid part name: {0}")]
    InvalidPartName(String),

    /// A relationship points at a part missing from the package
    #[error("Relationship {r_id} from {source_part} targets missing part {target}")]
    DanglingRelationship {
        source_part: String,
        r_id: String,
        target: String,
    },

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// The presentation has no slide layout at this index
    #[error("Slide layout not found at index {0}")]
    LayoutNotFound(usize),

    /// The slide's layout did not supply a placeholder with this idx
    #[error("Placeholder idx {idx} not found on slide {slide}")]
    PlaceholderNotFound { slide: usize, idx: u32 },

    /// The title slide was requested after content slides were added
    #[error("Title slide must be the first slide of the deck")]
    TitleSlideNotFirst,
}

/// Result type for pitchkit operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Builder that appends slides to a presentation in a fixed shape.

use std::path::Path;

use super::layout::{CONTENT_LAYOUT, TITLE_LAYOUT};
use super::presentation::Presentation;
use super::properties::{CoreProperties, SaveOptions};
use crate::common::error::{Error, Result};

/// Placeholder idx receiving the subtitle or slide body.
const BODY_IDX: u32 = 1;

/// Builds a deck of one title slide followed by title-and-body slides.
///
/// # Example
///
/// ```no_run
/// use pitchkit::deck::DeckBuilder;
///
/// let mut deck = DeckBuilder::new();
/// deck.title_slide("Quarterly Review", "Q3 2025")?
///     .add_slide("Agenda", "- Numbers\n- Plans")?;
/// deck.save("review.pptx")?;
/// # Ok::<(), pitchkit::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    presentation: Presentation,
    options: SaveOptions,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an empty presentation carrying `properties`.
    pub fn with_properties(properties: CoreProperties) -> Self {
        let mut builder = Self::new();
        *builder.presentation.properties_mut() = properties;
        builder
    }

    /// Options used by [`DeckBuilder::save`].
    pub fn with_save_options(mut self, options: SaveOptions) -> Self {
        self.options = options;
        self
    }

    /// Add the title slide. It must be the first slide of the deck.
    pub fn title_slide(&mut self, title: &str, subtitle: &str) -> Result<&mut Self> {
        if self.presentation.slide_count() > 0 {
            return Err(Error::TitleSlideNotFirst);
        }
        let slide = self.presentation.add_slide(TITLE_LAYOUT)?;
        slide.title_mut()?.set_text(title);
        slide.placeholder_mut(BODY_IDX)?.set_text(subtitle);
        Ok(self)
    }

    /// Add a title-and-content slide.
    pub fn add_slide(&mut self, title: &str, body: &str) -> Result<&mut Self> {
        let slide = self.presentation.add_slide(CONTENT_LAYOUT)?;
        slide.title_mut()?.set_text(title);
        slide.placeholder_mut(BODY_IDX)?.set_text(body);
        Ok(self)
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn slide_count(&self) -> usize {
        self.presentation.slide_count()
    }

    /// Consume the builder and return the presentation.
    pub fn finish(self) -> Presentation {
        self.presentation
    }

    /// Consume the builder and write the deck to `path`.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        self.presentation.save(path, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_then_content() {
        let mut deck = DeckBuilder::new();
        deck.title_slide("Deck", "Sub").unwrap();
        deck.add_slide("One", "- a\n- b").unwrap();

        let pres = deck.finish();
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slides()[0].layout_index(), TITLE_LAYOUT);
        assert_eq!(pres.slides()[1].layout_index(), CONTENT_LAYOUT);

        let body = pres.slides()[1].placeholder(BODY_IDX).unwrap();
        assert_eq!(body.text().unwrap().paragraphs().len(), 2);
    }

    #[test]
    fn test_title_slide_must_come_first() {
        let mut deck = DeckBuilder::new();
        deck.add_slide("One", "body").unwrap();
        assert!(matches!(
            deck.title_slide("Deck", "Sub"),
            Err(Error::TitleSlideNotFirst)
        ));
        assert_eq!(deck.slide_count(), 1);
    }

    #[test]
    fn test_chaining() {
        let mut deck = DeckBuilder::new();
        deck.title_slide("Deck", "Sub")
            .unwrap()
            .add_slide("A", "a")
            .unwrap()
            .add_slide("B", "b")
            .unwrap();
        assert_eq!(deck.slide_count(), 3);
    }

    #[test]
    fn test_properties_are_kept() {
        let deck = DeckBuilder::with_properties(CoreProperties::new().title("Deck"));
        assert_eq!(deck.presentation().properties().title.as_deref(), Some("Deck"));
    }
}

//! The Humaniot Robotic Coder pitch deck.
//!
//! Slide text is literal: `**Ethiopia:**` and friends are written as typed.

use super::builder::DeckBuilder;
use super::properties::CoreProperties;
use crate::common::error::Result;

/// Default output file of the deck binary.
pub const DECK_OUTPUT_PATH: &str = "Humaniot_Robotic_Coder_AI_Competition_Updated_Pitch1.pptx";

pub const DECK_TITLE: &str = "Humaniot Robotic Coder";

pub const DECK_SUBTITLE: &str = concat!(
    "An Autonomous System for Full-Cycle Software Development and Deployment\n",
    "National AI Innovation Challenge\n",
    "August 2025"
);

/// Content slides in deck order, as (title, body).
pub const CONTENT_SLIDES: [(&str, &str); 6] = [
    (
        "The Problem",
        concat!(
            "- Software development is time-consuming, requiring coordination across developers, testers, and DevOps teams.\n",
            "- In emerging markets, businesses face limited access to skilled developers and infrastructure.\n",
            "- Manual coding and deployment introduce errors, delays, and scalability challenges.\n",
            "- Security and quality control are inconsistent, especially in freelance-driven work.\n",
            "- Robotics and automation remain underutilized in software engineering."
        ),
    ),
    (
        "The AI Solution – Humaniot Robotic Coder",
        concat!(
            "- Uses NLP to interpret human instructions.\n",
            "- Autonomously generates web, desktop, and mobile apps.\n",
            "- Deploys to cloud, servers, or app stores without manual input.\n",
            "- Robotic interface interacts with tools and environments.\n",
            "- Continuously tests, monitors, and updates deployed applications."
        ),
    ),
    (
        "Market Potential",
        concat!(
            "**Ethiopia:**\n- Growing tech sector with strong demand for software.\n- AI strategy and innovation support by government.\n\n",
            "**Africa:**\n- $5B+ software market; AI to contribute $1.2T to GDP by 2030.\n\n",
            "**Global:**\n- Global software market expected to reach $1T by 2030.\n- DevOps tools: $20B+ market by 2027."
        ),
    ),
    (
        "Team Composition",
        concat!(
            "- Lead AI Engineer – Expert in NLP and AI planning.\n",
            "- Software Architect – Full-stack development and system design.\n",
            "- Robotics Specialist – Physical and virtual interface automation.\n",
            "- DevOps Engineer – Cloud deployment and infrastructure.\n",
            "- Business Lead – Strategy, partnerships, and outreach."
        ),
    ),
    (
        "Alignment with AI Startup Center",
        concat!(
            "- Aligned with Ethiopia’s national AI strategy.\n",
            "- Supports AI Startup Center’s mission of innovation and job creation.\n",
            "- Ready for incubation, mentorship, and pilot programs.\n",
            "- Scalable across sectors like education, health, and fintech."
        ),
    ),
    (
        "Conclusion",
        concat!(
            "Humaniot Robotic Coder solves inefficiencies in software development:\n",
            "- Eliminates delays and improves quality through autonomous AI.\n",
            "- Delivers secure, scalable solutions without human bottlenecks.\n",
            "- It’s more than a tool — it’s the future of intelligent software delivery."
        ),
    ),
];

/// Document properties of the pitch deck.
pub fn pitch_properties() -> CoreProperties {
    CoreProperties::new()
        .title(DECK_TITLE)
        .last_modified_by(env!("CARGO_PKG_NAME"))
        .revision(1)
}

/// Build the seven-slide pitch deck: the title slide, then each content slide.
pub fn humaniot_pitch() -> Result<DeckBuilder> {
    let mut deck = DeckBuilder::with_properties(pitch_properties());
    deck.title_slide(DECK_TITLE, DECK_SUBTITLE)?;
    for (title, body) in CONTENT_SLIDES {
        deck.add_slide(title, body)?;
    }
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::layout::{CONTENT_LAYOUT, TITLE_LAYOUT};

    fn body_of(deck: &DeckBuilder, slide: usize) -> String {
        deck.presentation().slides()[slide]
            .placeholder(1)
            .unwrap()
            .text()
            .unwrap()
            .text()
    }

    #[test]
    fn test_seven_slides() {
        let deck = humaniot_pitch().unwrap();
        assert_eq!(deck.slide_count(), 7);

        let layouts = deck
            .presentation()
            .slides()
            .iter()
            .map(|s| s.layout_index())
            .collect::<Vec<_>>();
        assert_eq!(layouts[0], TITLE_LAYOUT);
        assert!(layouts[1..].iter().all(|&l| l == CONTENT_LAYOUT));
    }

    #[test]
    fn test_title_slide() {
        let deck = humaniot_pitch().unwrap();
        let slide = &deck.presentation().slides()[0];
        assert_eq!(
            slide.title().unwrap().text().unwrap().text(),
            "Humaniot Robotic Coder"
        );
        let subtitle = body_of(&deck, 0);
        assert_eq!(subtitle.lines().count(), 3);
        assert!(subtitle.starts_with(
            "An Autonomous System for Full-Cycle Software Development and Deployment"
        ));
        assert!(subtitle.ends_with("August 2025"));
    }

    #[test]
    fn test_problem_slide_has_five_bullets() {
        let deck = humaniot_pitch().unwrap();
        let body = body_of(&deck, 1);
        assert_eq!(body.lines().count(), 5);
        assert!(body.lines().all(|l| l.starts_with("- ")));
    }

    #[test]
    fn test_market_slide_keeps_markers_and_blank_lines() {
        let deck = humaniot_pitch().unwrap();
        let frame = deck.presentation().slides()[3]
            .placeholder(1)
            .unwrap()
            .text()
            .unwrap()
            .clone();
        let paragraphs = frame.paragraphs();
        assert_eq!(paragraphs[0].text(), "**Ethiopia:**");
        assert_eq!(paragraphs.iter().filter(|p| p.is_empty()).count(), 2);
        assert_eq!(paragraphs.len(), 10);
    }

    #[test]
    fn test_titles_in_order() {
        let deck = humaniot_pitch().unwrap();
        let titles = deck
            .presentation()
            .slides()
            .iter()
            .map(|s| s.title().unwrap().text().unwrap().text())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            [
                "Humaniot Robotic Coder",
                "The Problem",
                "The AI Solution – Humaniot Robotic Coder",
                "Market Potential",
                "Team Composition",
                "Alignment with AI Startup Center",
                "Conclusion"
            ]
        );
    }

    #[test]
    fn test_properties() {
        let deck = humaniot_pitch().unwrap();
        let props = deck.presentation().properties();
        assert_eq!(props.title.as_deref(), Some("Humaniot Robotic Coder"));
        assert_eq!(props.last_modified_by.as_deref(), Some("pitchkit"));
        assert_eq!(props.revision, Some(1));
    }
}

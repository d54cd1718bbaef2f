use folio_protocol::{Motion, Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::NAME;
use crate::views::{FONT_BODY, FONT_CAPTION, FONT_HEADING, FONT_TITLE, SectionOutput};

const PADDING: f64 = 80.0;
const COLUMN_GAP: f64 = 64.0;
const PORTRAIT_ASPECT: f64 = 1.25; // 4:5
pub const SECTION_HEIGHT: f64 = 760.0;

const HEADLINE: &str = "Pushing the boundaries of Agentic AI.";
const PARAGRAPHS: &[&str] = &[
    "I'm a Machine Learning Scientist II at Expedia Group, working on improving travel with AI.",
    "My passion is in relentless building things; transforming state-of-the-art research into scalable, real-world impact. I am also a huge fan of the gym and a part time adrenaline junkie.",
];

/// Two-column about section: portrait card with caption overlay on the
/// left, headline and paragraphs on the right.
pub fn render(width: f64) -> SectionOutput {
    let column = (width - 2.0 * PADDING - COLUMN_GAP) / 2.0;
    let portrait_h = (column * PORTRAIT_ASPECT).min(SECTION_HEIGHT - 160.0);
    let top = (SECTION_HEIGHT - portrait_h) / 2.0;

    let mut commands = Vec::with_capacity(16);
    commands.push(RenderCommand::BeginGroup {
        id: "about".into(),
        label: Some("About".into()),
    });
    commands.push(RenderCommand::BeginMotion {
        motion: Motion::rise(60.0, 1.0),
    });

    // Portrait card.
    let portrait = Rect::new(PADDING, top, column, portrait_h);
    commands.push(RenderCommand::DrawRect {
        rect: portrait,
        color: ThemeToken::CardBackground,
        border_color: Some(ThemeToken::CardBorder),
        label: None,
        node_id: None,
    });
    // Caption strip pinned to the card's lower edge.
    let caption = Rect::new(
        portrait.x + 24.0,
        portrait.bottom() - 96.0,
        portrait.w - 48.0,
        72.0,
    );
    commands.push(RenderCommand::DrawRect {
        rect: caption,
        color: ThemeToken::Surface,
        border_color: Some(ThemeToken::CardBorder),
        label: None,
        node_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(caption.x + 20.0, caption.y + 26.0),
        text: NAME.into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_BODY,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(caption.x + 20.0, caption.y + 50.0),
        text: "MACHINE LEARNING SCIENTIST".into(),
        color: ThemeToken::Accent,
        font_size: FONT_CAPTION,
        align: TextAlign::Left,
    });

    // Text column.
    let text_x = PADDING + column + COLUMN_GAP;
    commands.push(RenderCommand::DrawText {
        position: Point::new(text_x, top + 60.0),
        text: HEADLINE.into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_HEADING,
        align: TextAlign::Left,
    });
    let mut y = top + 150.0;
    for paragraph in PARAGRAPHS {
        commands.push(RenderCommand::DrawText {
            position: Point::new(text_x, y),
            text: (*paragraph).into(),
            color: ThemeToken::TextSecondary,
            font_size: FONT_TITLE - 8.0,
            align: TextAlign::Left,
        });
        y += 90.0;
    }

    commands.push(RenderCommand::EndMotion);
    commands.push(RenderCommand::EndGroup);
    SectionOutput {
        commands,
        height: SECTION_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_enter_motion_wraps_everything() {
        let out = render(1280.0);
        let begins = out
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::BeginMotion { .. }))
            .count();
        let ends = out
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::EndMotion))
            .count();
        assert_eq!(begins, 1);
        assert_eq!(ends, 1);
    }

    #[test]
    fn both_paragraphs_are_present() {
        let out = render(1280.0);
        let texts = out
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawText { .. }))
            .count();
        // name, role caption, headline, two paragraphs
        assert_eq!(texts, 5);
    }
}

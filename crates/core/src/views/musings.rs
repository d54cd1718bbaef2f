use folio_protocol::{Easing, Motion, Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::model::MusingEntry;
use crate::views::{
    FONT_BODY, FONT_CAPTION, FONT_HEADING, FONT_TINY, FONT_TITLE, IdSpace, SectionOutput,
};

const HEADER_HEIGHT: f64 = 200.0;
const PADDING: f64 = 80.0;
const COLUMNS: usize = 3;
const CARD_HEIGHT: f64 = 280.0;
const CARD_GAP: f64 = 24.0;
/// Per-card enter delay, matching the page's cascade.
const CARD_STAGGER: f64 = 0.08;

pub const OVERLAY_WIDTH: f64 = 720.0;
const OVERLAY_HEADER_HEIGHT: f64 = 230.0;

/// Section height for `count` cards, for page layout.
pub fn section_height(count: usize) -> f64 {
    let rows = count.div_ceil(COLUMNS);
    HEADER_HEIGHT + rows as f64 * (CARD_HEIGHT + CARD_GAP) + 80.0
}

/// Musing card grid. Cards carry hit ids; opening the overlay is the
/// renderer's job.
pub fn render(width: f64, entries: &[MusingEntry]) -> SectionOutput {
    let height = section_height(entries.len());
    let column = (width - 2.0 * PADDING - (COLUMNS as f64 - 1.0) * CARD_GAP) / COLUMNS as f64;

    let mut commands = Vec::with_capacity(entries.len() * 10 + 8);
    commands.push(RenderCommand::BeginGroup {
        id: "musings".into(),
        label: Some("The Musings".into()),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(PADDING, 70.0),
        text: "The Musings.".into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_HEADING,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(PADDING, 130.0),
        text: "Thoughts, experiments, and reflections - mostly on AI and building things or anything that interests me.".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_TITLE - 8.0,
        align: TextAlign::Left,
    });

    for (index, entry) in entries.iter().enumerate() {
        let col = index % COLUMNS;
        let row = index / COLUMNS;
        let card = Rect::new(
            PADDING + col as f64 * (column + CARD_GAP),
            HEADER_HEIGHT + row as f64 * (CARD_HEIGHT + CARD_GAP),
            column,
            CARD_HEIGHT,
        );
        push_card(&mut commands, entry, index, card);
    }

    commands.push(RenderCommand::EndGroup);
    SectionOutput { commands, height }
}

fn push_card(commands: &mut Vec<RenderCommand>, entry: &MusingEntry, index: usize, card: Rect) {
    commands.push(RenderCommand::BeginMotion {
        motion: Motion::rise(24.0, 0.5).with_delay(index as f64 * CARD_STAGGER),
    });

    commands.push(RenderCommand::DrawRect {
        rect: card,
        color: ThemeToken::CardBackground,
        border_color: Some(ThemeToken::CardBorder),
        label: Some(entry.slug.as_str().into()),
        node_id: Some(IdSpace::MusingCard.id(index)),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(card.x + 24.0, card.y + 32.0),
        text: entry.display_date().to_ascii_uppercase().into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_CAPTION,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(card.x + card.w - 24.0, card.y + 32.0),
        text: "READ →".into(),
        color: ThemeToken::TextFaint,
        font_size: FONT_CAPTION,
        align: TextAlign::Right,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(card.x + 24.0, card.y + 80.0),
        text: entry.title.as_str().into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_TITLE - 4.0,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(card.x + 24.0, card.y + 130.0),
        text: entry.description.as_str().into(),
        color: ThemeToken::TextSecondary,
        font_size: FONT_BODY,
        align: TextAlign::Left,
    });

    let mut x = card.x + 24.0;
    for tag in &entry.tags {
        let w = tag.len() as f64 * 6.0 + 24.0;
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x, card.bottom() - 52.0, w, 24.0),
            color: ThemeToken::TagBackground,
            border_color: Some(ThemeToken::TagBorder),
            label: None,
            node_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + 12.0, card.bottom() - 40.0),
            text: tag.to_ascii_uppercase().into(),
            color: ThemeToken::TagText,
            font_size: FONT_TINY,
            align: TextAlign::Left,
        });
        x += w + 8.0;
    }

    commands.push(RenderCommand::EndMotion);
}

/// The overlay article panel for a selected musing.
pub fn panel_rect(viewport: &Viewport) -> Rect {
    let w = OVERLAY_WIDTH.min(viewport.width - 64.0);
    Rect::new(
        (viewport.width - w) / 2.0,
        48.0,
        w,
        viewport.height - 96.0,
    )
}

/// Where the markdown body goes inside the overlay panel; the renderer
/// lays the rich text out itself (text shaping lives renderer-side).
pub fn body_rect(viewport: &Viewport) -> Rect {
    let panel = panel_rect(viewport);
    Rect::new(
        panel.x + 32.0,
        panel.y + OVERLAY_HEADER_HEIGHT,
        panel.w - 64.0,
        panel.h - OVERLAY_HEADER_HEIGHT - 32.0,
    )
}

/// Overlay chrome: backdrop, panel, back affordance, date, title, tags,
/// separator. Fades and springs up over the page.
pub fn render_overlay(viewport: &Viewport, entry: &MusingEntry) -> Vec<RenderCommand> {
    let panel = panel_rect(viewport);
    let mut commands = Vec::with_capacity(entry.tags.len() * 2 + 12);

    commands.push(RenderCommand::BeginGroup {
        id: "musing-overlay".into(),
        label: Some(entry.title.as_str().into()),
    });

    commands.push(RenderCommand::BeginMotion {
        motion: Motion::fade(0.25),
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, viewport.width, viewport.height),
        color: ThemeToken::Background,
        border_color: None,
        label: None,
        node_id: None,
    });
    commands.push(RenderCommand::EndMotion);

    commands.push(RenderCommand::BeginMotion {
        motion: Motion::rise(40.0, 0.35).with_easing(Easing::ExpoOut),
    });
    commands.push(RenderCommand::DrawRect {
        rect: panel,
        color: ThemeToken::Surface,
        border_color: Some(ThemeToken::CardBorder),
        label: None,
        node_id: None,
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(panel.x + 32.0, panel.y + 44.0),
        text: "← Back".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_BODY,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(panel.x + 32.0, panel.y + 88.0),
        text: entry.display_date().to_ascii_uppercase().into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_CAPTION,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(panel.x + 32.0, panel.y + 130.0),
        text: entry.title.as_str().into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_TITLE + 6.0,
        align: TextAlign::Left,
    });

    let mut x = panel.x + 32.0;
    for tag in &entry.tags {
        let w = tag.len() as f64 * 6.0 + 24.0;
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x, panel.y + 160.0, w, 24.0),
            color: ThemeToken::AccentSoft,
            border_color: Some(ThemeToken::Accent),
            label: None,
            node_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + 12.0, panel.y + 172.0),
            text: tag.to_ascii_uppercase().into(),
            color: ThemeToken::Accent,
            font_size: FONT_TINY,
            align: TextAlign::Left,
        });
        x += w + 8.0;
    }

    commands.push(RenderCommand::DrawLine {
        from: Point::new(panel.x + 32.0, panel.y + 206.0),
        to: Point::new(panel.x + panel.w - 32.0, panel.y + 206.0),
        color: ThemeToken::Border,
        width: 1.0,
    });

    commands.push(RenderCommand::EndMotion);
    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::musings;

    #[test]
    fn cards_cascade_by_index() {
        let entries = musings::all().unwrap();
        let out = render(1280.0, &entries);
        let delays: Vec<f64> = out
            .commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::BeginMotion { motion } => Some(motion.delay),
                _ => None,
            })
            .collect();
        assert_eq!(delays.len(), entries.len());
        for (i, delay) in delays.iter().enumerate() {
            assert!((delay - i as f64 * CARD_STAGGER).abs() < 1e-9);
        }
    }

    #[test]
    fn every_card_is_hit_testable() {
        let entries = musings::all().unwrap();
        let out = render(1280.0, &entries);
        for i in 0..entries.len() {
            let id = IdSpace::MusingCard.id(i);
            assert!(out.commands.iter().any(|c| matches!(
                c,
                RenderCommand::DrawRect { node_id: Some(n), .. } if *n == id
            )));
        }
    }

    #[test]
    fn overlay_body_sits_inside_the_panel() {
        let viewport = Viewport::sized(1280.0, 800.0);
        let panel = panel_rect(&viewport);
        let body = body_rect(&viewport);
        assert!(body.x >= panel.x);
        assert!(body.bottom() <= panel.bottom());
        assert_eq!(panel.w, OVERLAY_WIDTH);
    }

    #[test]
    fn overlay_shows_title_and_tags() {
        let entries = musings::all().unwrap();
        let viewport = Viewport::sized(1280.0, 800.0);
        let commands = render_overlay(&viewport, &entries[0]);
        assert!(commands.iter().any(|c| matches!(
            c,
            RenderCommand::DrawText { text, .. } if text.as_str() == entries[0].title
        )));
        let tag_pills = commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawRect {
                        color: ThemeToken::AccentSoft,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(tag_pills, entries[0].tags.len());
    }
}

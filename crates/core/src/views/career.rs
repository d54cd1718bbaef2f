use folio_protocol::{Motion, Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::experiences::{self, Experience};
use crate::views::{FONT_BODY, FONT_CAPTION, FONT_HEADING, FONT_TITLE, SectionOutput};

const HEADER_HEIGHT: f64 = 200.0;
/// Vertical distance between consecutive timeline entries.
pub const ITEM_STRIDE: f64 = 360.0;
pub const ITEM_HEIGHT: f64 = 280.0;
const DOT_RADIUS: f64 = 28.0;
const TAIL: f64 = 120.0;

/// Region ids for the timeline tracker, in timeline (sorted) order.
pub fn region_ids() -> Vec<String> {
    experiences::sorted()
        .iter()
        .enumerate()
        .map(|(i, e)| format!("exp-{i}-{}", e.company.to_ascii_lowercase().replace(' ', "-")))
        .collect()
}

/// Local bounding box of entry `index`, for the tracker ruler.
pub fn item_rect(width: f64, index: usize) -> Rect {
    Rect::new(
        0.0,
        HEADER_HEIGHT + index as f64 * ITEM_STRIDE,
        width,
        ITEM_HEIGHT,
    )
}

pub fn section_height() -> f64 {
    HEADER_HEIGHT + experiences::sorted().len() as f64 * ITEM_STRIDE + TAIL
}

/// Career timeline: centered axis, year dots, alternating content sides.
/// `active_index` comes from the section's windowed tracker.
pub fn render(width: f64, active_index: Option<usize>) -> SectionOutput {
    let entries = experiences::sorted();
    let axis_x = width / 2.0;
    let mut commands = Vec::with_capacity(entries.len() * 10 + 8);

    commands.push(RenderCommand::BeginGroup {
        id: "experience".into(),
        label: Some("Career & Experience".into()),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(axis_x, 90.0),
        text: "Career & Experience".into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_HEADING,
        align: TextAlign::Center,
    });

    // Vertical axis spanning every entry.
    commands.push(RenderCommand::DrawLine {
        from: Point::new(axis_x, HEADER_HEIGHT),
        to: Point::new(axis_x, section_height() - TAIL),
        color: ThemeToken::TimelineAxis,
        width: 1.0,
    });

    for (index, exp) in entries.iter().enumerate() {
        let is_active = active_index == Some(index);
        let item = item_rect(width, index);
        let dot_y = item.y + ITEM_HEIGHT / 2.0;

        commands.push(RenderCommand::BeginMotion {
            motion: Motion::rise(50.0, 1.0),
        });

        if is_active {
            // Soft glow behind the active dot.
            commands.push(RenderCommand::DrawCircle {
                center: Point::new(axis_x, dot_y),
                radius: DOT_RADIUS * 3.0,
                color: ThemeToken::AccentGlow,
                tint: None,
                border_color: None,
                label: None,
                node_id: None,
            });
        }
        commands.push(RenderCommand::DrawCircle {
            center: Point::new(axis_x, dot_y),
            radius: DOT_RADIUS,
            color: ThemeToken::Background,
            tint: None,
            border_color: Some(if is_active {
                ThemeToken::TimelineDotActive
            } else {
                ThemeToken::TimelineDot
            }),
            label: None,
            node_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(axis_x, dot_y),
            text: experiences::display_year(exp.year).into(),
            color: if is_active {
                ThemeToken::Accent
            } else {
                ThemeToken::TextFaint
            },
            font_size: FONT_CAPTION,
            align: TextAlign::Center,
        });

        // Only the active entry shows its content, alternating sides.
        if is_active {
            let left_side = index % 2 == 0;
            push_entry_content(&mut commands, exp, axis_x, dot_y, width, left_side);
        }

        commands.push(RenderCommand::EndMotion);
    }

    commands.push(RenderCommand::EndGroup);
    SectionOutput {
        commands,
        height: section_height(),
    }
}

fn push_entry_content(
    commands: &mut Vec<RenderCommand>,
    exp: &Experience,
    axis_x: f64,
    dot_y: f64,
    width: f64,
    left_side: bool,
) {
    let column = (width / 2.0 - 140.0).max(220.0);
    let (x, align) = if left_side {
        (axis_x - 110.0, TextAlign::Right)
    } else {
        (axis_x + 110.0, TextAlign::Left)
    };

    // Slide in from the axis side, mirroring the reveal direction.
    let slide = if left_side { 40.0 } else { -40.0 };
    commands.push(RenderCommand::BeginMotion {
        motion: Motion {
            from: Point::new(slide, 20.0),
            fade_from: 0.0,
            delay: 0.0,
            duration: 1.2,
            easing: folio_protocol::Easing::ExpoOut,
        },
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(x, dot_y - 90.0),
        text: exp.category.to_ascii_uppercase().into(),
        color: ThemeToken::TagText,
        font_size: FONT_CAPTION,
        align,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(x, dot_y - 50.0),
        text: exp.title.into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_TITLE,
        align,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(x, dot_y - 16.0),
        text: exp.company.into(),
        color: ThemeToken::Accent,
        font_size: FONT_BODY + 2.0,
        align,
    });

    let card_x = if left_side { x - column } else { x };
    let card = Rect::new(card_x, dot_y + 8.0, column, 96.0);
    commands.push(RenderCommand::DrawRect {
        rect: card,
        color: ThemeToken::CardBackground,
        border_color: Some(ThemeToken::CardBorder),
        label: None,
        node_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(card.x + 20.0, card.center().y),
        text: exp.description.into(),
        color: ThemeToken::TextSecondary,
        font_size: FONT_BODY,
        align: TextAlign::Left,
    });

    commands.push(RenderCommand::EndMotion);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_ids_are_unique_and_ordered() {
        let ids = region_ids();
        assert_eq!(ids.len(), experiences::sorted().len());
        for (i, id) in ids.iter().enumerate() {
            assert!(id.starts_with(&format!("exp-{i}-")));
            assert!(!ids[..i].contains(id));
        }
    }

    #[test]
    fn item_rects_follow_the_stride() {
        let a = item_rect(1280.0, 0);
        let b = item_rect(1280.0, 1);
        assert_eq!(b.y - a.y, ITEM_STRIDE);
        assert_eq!(a.h, ITEM_HEIGHT);
    }

    #[test]
    fn only_active_entry_reveals_content() {
        let idle = render(1280.0, None);
        let active = render(1280.0, Some(0));
        let count_texts = |out: &SectionOutput| {
            out.commands
                .iter()
                .filter(|c| matches!(c, RenderCommand::DrawText { .. }))
                .count()
        };
        // Active render adds category/title/company/description texts.
        assert_eq!(count_texts(&active), count_texts(&idle) + 4);
    }

    #[test]
    fn active_dot_uses_accent_border() {
        let out = render(1280.0, Some(1));
        assert!(out.commands.iter().any(|c| matches!(
            c,
            RenderCommand::DrawCircle {
                border_color: Some(ThemeToken::TimelineDotActive),
                ..
            }
        )));
    }
}

use folio_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::hobbies::{HOBBIES, Hobby, HobbyDetail};
use crate::model::RegionBounds;
use crate::views::{FONT_BODY, FONT_CAPTION, FONT_HEADING, FONT_TITLE, IdSpace, SectionOutput};

const HEADER_HEIGHT: f64 = 200.0;
pub const CARD_WIDTH: f64 = 500.0;
pub const CARD_HEIGHT: f64 = 560.0;
pub const CARD_GAP: f64 = 32.0;
const PADDING: f64 = 80.0;
pub const SECTION_HEIGHT: f64 = HEADER_HEIGHT + CARD_HEIGHT + 120.0;

/// Region ids for the carousel tracker, in card order.
pub fn region_ids() -> Vec<String> {
    HOBBIES.iter().map(|h| format!("hobby-{}", h.id)).collect()
}

/// Total scrollable width of the carousel.
pub fn carousel_content_width() -> f64 {
    PADDING * 2.0 + HOBBIES.len() as f64 * (CARD_WIDTH + CARD_GAP) - CARD_GAP
}

/// The carousel strip in section-local coordinates; renderers use this
/// to route wheel and key input into the container's scroll context.
pub fn strip_rect(width: f64) -> Rect {
    Rect::new(0.0, HEADER_HEIGHT, width, CARD_HEIGHT)
}

/// Card edges relative to the carousel viewport's leading edge. The
/// horizontal axis maps onto the tracker's top/bottom convention.
pub fn card_bounds(index: usize, scroll_x: f64) -> RegionBounds {
    let lead = PADDING + index as f64 * (CARD_WIDTH + CARD_GAP) - scroll_x;
    RegionBounds::new(lead, lead + CARD_WIDTH)
}

/// Horizontal hobby carousel. `scroll_x` is the carousel offset,
/// `active_card` the card the container tracker reports centered,
/// `active_day` the selected fitness day tab.
pub fn render(width: f64, scroll_x: f64, active_card: Option<usize>, active_day: usize) -> SectionOutput {
    let mut commands = Vec::with_capacity(HOBBIES.len() * 24 + 16);

    commands.push(RenderCommand::BeginGroup {
        id: "hobbies".into(),
        label: Some("Beyond the Code".into()),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(PADDING, 70.0),
        text: "Beyond the Code.".into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_HEADING,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(PADDING, 130.0),
        text: "When I'm not training models, I'm usually engaged in these pursuits.".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_TITLE - 8.0,
        align: TextAlign::Left,
    });

    let strip = strip_rect(width);
    commands.push(RenderCommand::SetClip { rect: strip });
    commands.push(RenderCommand::PushTransform {
        translate: Point::new(-scroll_x, HEADER_HEIGHT),
        scale: Point::new(1.0, 1.0),
    });
    for (index, hobby) in HOBBIES.iter().enumerate() {
        let x = PADDING + index as f64 * (CARD_WIDTH + CARD_GAP);
        push_card(&mut commands, hobby, x, active_card == Some(index), active_day);
    }
    commands.push(RenderCommand::PopTransform);
    commands.push(RenderCommand::ClearClip);

    // Scroll progress indicator under the strip.
    let track_y = HEADER_HEIGHT + CARD_HEIGHT + 40.0;
    let track = Rect::new(PADDING, track_y, width - 2.0 * PADDING - 180.0, 2.0);
    commands.push(RenderCommand::DrawRect {
        rect: track,
        color: ThemeToken::ProgressTrack,
        border_color: None,
        label: None,
        node_id: None,
    });
    let max_scroll = (carousel_content_width() - width).max(1.0);
    let progress = (scroll_x / max_scroll).clamp(0.0, 1.0);
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(track.x, track.y, track.w * progress, 2.0),
        color: ThemeToken::ProgressFill,
        border_color: None,
        label: None,
        node_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(width - PADDING, track_y + 1.0),
        text: "SWIPE TO EXPLORE".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_CAPTION,
        align: TextAlign::Right,
    });

    commands.push(RenderCommand::EndGroup);
    SectionOutput {
        commands,
        height: SECTION_HEIGHT,
    }
}

fn push_card(
    commands: &mut Vec<RenderCommand>,
    hobby: &Hobby,
    x: f64,
    is_centered: bool,
    active_day: usize,
) {
    let card = Rect::new(x, 0.0, CARD_WIDTH, CARD_HEIGHT);
    commands.push(RenderCommand::DrawRect {
        rect: card,
        color: ThemeToken::CardBackground,
        border_color: Some(if is_centered {
            ThemeToken::CardBorderActive
        } else {
            ThemeToken::CardBorder
        }),
        label: None,
        node_id: None,
    });

    // Icon block in the hobby's own color.
    commands.push(RenderCommand::DrawCircle {
        center: Point::new(x + 64.0, 64.0),
        radius: 32.0,
        color: ThemeToken::Surface,
        tint: Some(hobby.color),
        border_color: None,
        label: Some(hobby.id.into()),
        node_id: None,
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(x + 40.0, 150.0),
        text: hobby.title.into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_TITLE,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(x + 40.0, 200.0),
        text: hobby.description.into(),
        color: ThemeToken::TextSecondary,
        font_size: FONT_BODY,
        align: TextAlign::Left,
    });

    match hobby.detail {
        HobbyDetail::Chess { links } => {
            let mut px = x + 40.0;
            for (name, href) in links {
                let w = name.len() as f64 * 8.0 + 48.0;
                commands.push(RenderCommand::DrawRect {
                    rect: Rect::new(px, 420.0, w, 44.0),
                    color: ThemeToken::TagBackground,
                    border_color: Some(ThemeToken::TagBorder),
                    label: Some((*href).into()),
                    node_id: None,
                });
                commands.push(RenderCommand::DrawText {
                    position: Point::new(px + 24.0, 442.0),
                    text: (*name).into(),
                    color: ThemeToken::TextSecondary,
                    font_size: FONT_CAPTION,
                    align: TextAlign::Left,
                });
                px += w + 16.0;
            }
        }
        HobbyDetail::Building { projects } => {
            for (i, project) in projects.iter().enumerate() {
                let row = Rect::new(x + 40.0, 380.0 + i as f64 * 64.0, CARD_WIDTH - 80.0, 52.0);
                commands.push(RenderCommand::DrawRect {
                    rect: row,
                    color: ThemeToken::TagBackground,
                    border_color: Some(ThemeToken::TagBorder),
                    label: None,
                    node_id: None,
                });
                commands.push(RenderCommand::DrawCircle {
                    center: Point::new(row.x + 20.0, row.center().y),
                    radius: 3.0,
                    color: ThemeToken::Accent,
                    tint: Some(hobby.color),
                    border_color: None,
                    label: None,
                    node_id: None,
                });
                commands.push(RenderCommand::DrawText {
                    position: Point::new(row.x + 36.0, row.center().y),
                    text: (*project).into(),
                    color: ThemeToken::TextSecondary,
                    font_size: FONT_BODY,
                    align: TextAlign::Left,
                });
            }
        }
        HobbyDetail::Reading { current, last_read } => {
            let finished = Rect::new(x + 40.0, 340.0, CARD_WIDTH - 80.0, 80.0);
            commands.push(RenderCommand::DrawRect {
                rect: finished,
                color: ThemeToken::TagBackground,
                border_color: Some(ThemeToken::TagBorder),
                label: None,
                node_id: None,
            });
            commands.push(RenderCommand::DrawText {
                position: Point::new(finished.x + 20.0, finished.y + 26.0),
                text: "RECENTLY FINISHED".into(),
                color: ThemeToken::TextMuted,
                font_size: FONT_CAPTION,
                align: TextAlign::Left,
            });
            commands.push(RenderCommand::DrawText {
                position: Point::new(finished.x + 20.0, finished.y + 56.0),
                text: last_read.into(),
                color: ThemeToken::TextPrimary,
                font_size: FONT_BODY + 2.0,
                align: TextAlign::Left,
            });

            let reading = Rect::new(x + 40.0, 436.0, CARD_WIDTH - 80.0, 80.0);
            commands.push(RenderCommand::DrawRect {
                rect: reading,
                color: ThemeToken::AccentSoft,
                border_color: Some(ThemeToken::Accent),
                label: None,
                node_id: None,
            });
            commands.push(RenderCommand::DrawText {
                position: Point::new(reading.x + 20.0, reading.y + 26.0),
                text: "CURRENTLY READING".into(),
                color: ThemeToken::Accent,
                font_size: FONT_CAPTION,
                align: TextAlign::Left,
            });
            commands.push(RenderCommand::DrawText {
                position: Point::new(reading.x + 20.0, reading.y + 56.0),
                text: current.into(),
                color: ThemeToken::TextPrimary,
                font_size: FONT_BODY + 2.0,
                align: TextAlign::Left,
            });
        }
        HobbyDetail::Fitness { routine } => {
            // Day tabs.
            let tab_w = (CARD_WIDTH - 80.0 - (routine.len() as f64 - 1.0) * 8.0)
                / routine.len() as f64;
            for (i, day) in routine.iter().enumerate() {
                let tab = Rect::new(x + 40.0 + i as f64 * (tab_w + 8.0), 300.0, tab_w, 48.0);
                let selected = i == active_day;
                commands.push(RenderCommand::DrawRect {
                    rect: tab,
                    color: if selected {
                        ThemeToken::AccentSoft
                    } else {
                        ThemeToken::TagBackground
                    },
                    border_color: Some(if selected {
                        ThemeToken::Accent
                    } else {
                        ThemeToken::TagBorder
                    }),
                    label: None,
                    node_id: Some(IdSpace::HobbyDayTab.id(i)),
                });
                commands.push(RenderCommand::DrawText {
                    position: Point::new(tab.center().x, tab.center().y),
                    text: day.day.into(),
                    color: if selected {
                        ThemeToken::Accent
                    } else {
                        ThemeToken::TextFaint
                    },
                    font_size: FONT_CAPTION,
                    align: TextAlign::Center,
                });
                if selected {
                    commands.push(RenderCommand::DrawLine {
                        from: Point::new(tab.x, tab.bottom()),
                        to: Point::new(tab.x + tab.w, tab.bottom()),
                        color: ThemeToken::Accent,
                        width: 2.0,
                    });
                }
            }

            // Routine panel for the selected day.
            if let Some(day) = routine.get(active_day) {
                let panel = Rect::new(x + 40.0, 364.0, CARD_WIDTH - 80.0, 160.0);
                commands.push(RenderCommand::DrawRect {
                    rect: panel,
                    color: ThemeToken::TagBackground,
                    border_color: Some(ThemeToken::TagBorder),
                    label: None,
                    node_id: None,
                });
                commands.push(RenderCommand::DrawText {
                    position: Point::new(panel.x + 20.0, panel.y + 24.0),
                    text: format!("{} FOCUS", day.kind.to_ascii_uppercase()).into(),
                    color: ThemeToken::Accent,
                    font_size: FONT_CAPTION,
                    align: TextAlign::Left,
                });
                commands.push(RenderCommand::DrawText {
                    position: Point::new(panel.x + 20.0, panel.y + 48.0),
                    text: day.focus.into(),
                    color: ThemeToken::TextPrimary,
                    font_size: FONT_BODY + 2.0,
                    align: TextAlign::Left,
                });
                for (i, exercise) in day.exercises.iter().enumerate() {
                    commands.push(RenderCommand::DrawText {
                        position: Point::new(panel.x + 32.0, panel.y + 76.0 + i as f64 * 17.0),
                        text: (*exercise).into(),
                        color: ThemeToken::TextSecondary,
                        font_size: FONT_CAPTION,
                        align: TextAlign::Left,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_bounds_map_horizontal_to_tracker_axis() {
        let first = card_bounds(0, 0.0);
        assert_eq!(first.top, PADDING);
        assert_eq!(first.bottom, PADDING + CARD_WIDTH);
        let scrolled = card_bounds(1, 300.0);
        assert_eq!(scrolled.top, PADDING + CARD_WIDTH + CARD_GAP - 300.0);
    }

    #[test]
    fn day_tabs_are_hit_testable() {
        let out = render(1280.0, 0.0, None, 0);
        let tabs = out
            .commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawRect { node_id: Some(id), .. }
                        if IdSpace::decode(*id).is_some_and(|(s, _)| s == IdSpace::HobbyDayTab)
                )
            })
            .count();
        assert_eq!(tabs, 5);
    }

    #[test]
    fn selected_day_swaps_routine_panel() {
        let monday = render(1280.0, 0.0, None, 0);
        let friday = render(1280.0, 0.0, None, 4);
        let text_of = |out: &SectionOutput, needle: &str| {
            out.commands.iter().any(|c| {
                matches!(
                    c,
                    RenderCommand::DrawText { text, .. } if text.as_str() == needle
                )
            })
        };
        assert!(text_of(&monday, "Bench Press"));
        assert!(!text_of(&monday, "Deadlifts"));
        assert!(text_of(&friday, "Deadlifts"));
    }

    #[test]
    fn progress_fill_tracks_scroll() {
        let max_scroll = carousel_content_width() - 1280.0;
        let out = render(1280.0, max_scroll, None, 0);
        let full_width = out.commands.iter().find_map(|c| match c {
            RenderCommand::DrawRect {
                rect,
                color: ThemeToken::ProgressFill,
                ..
            } => Some(rect.w),
            _ => None,
        });
        let track_width = 1280.0 - 2.0 * PADDING - 180.0;
        assert_eq!(full_width, Some(track_width));
    }
}

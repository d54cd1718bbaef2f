use folio_protocol::{Motion, Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::projects::{PROJECTS, Project};
use crate::model::RegionBounds;
use crate::views::{FONT_BODY, FONT_CAPTION, FONT_HEADING, FONT_TITLE, IdSpace, SectionOutput};

const HEADER_HEIGHT: f64 = 180.0;
const PADDING: f64 = 80.0;
const COLUMN_GAP: f64 = 96.0;
/// Visible height of the scrollable project list.
pub const LIST_HEIGHT: f64 = 600.0;
/// Dead space above the first and below the last list row, so edge rows
/// can reach the activation window.
pub const LIST_SPACER: f64 = 100.0;
pub const ROW_HEIGHT: f64 = 150.0;
pub const SECTION_HEIGHT: f64 = HEADER_HEIGHT + LIST_HEIGHT + 120.0;

/// Region ids for the project-list tracker, in list order.
pub fn region_ids() -> Vec<String> {
    PROJECTS.iter().map(|p| format!("project-{}", p.id)).collect()
}

/// Total scrollable content height of the list.
pub fn list_content_height() -> f64 {
    LIST_SPACER * 2.0 + PROJECTS.len() as f64 * ROW_HEIGHT
}

/// The list container in section-local coordinates; renderers use this
/// to route wheel input into the container's scroll context.
pub fn list_rect(width: f64) -> Rect {
    let column = (width - 2.0 * PADDING - COLUMN_GAP) / 2.0;
    Rect::new(PADDING, HEADER_HEIGHT, column, LIST_HEIGHT)
}

/// Row bounds relative to the list container's viewport, for the
/// container tracker's ruler.
pub fn row_bounds(index: usize, list_scroll: f64) -> RegionBounds {
    let top = LIST_SPACER + index as f64 * ROW_HEIGHT - list_scroll;
    RegionBounds::new(top, top + ROW_HEIGHT)
}

/// Split view: scrollable numbered project list on the left, preview
/// card for the active project on the right. `active_index` is fed by
/// the container tracker (scroll) and by row hover.
pub fn render(width: f64, active_index: usize, list_scroll: f64) -> SectionOutput {
    let column = (width - 2.0 * PADDING - COLUMN_GAP) / 2.0;
    let mut commands = Vec::with_capacity(PROJECTS.len() * 8 + 24);

    commands.push(RenderCommand::BeginGroup {
        id: "work".into(),
        label: Some("My Work".into()),
    });

    commands.push(RenderCommand::BeginMotion {
        motion: Motion::rise(30.0, 0.6),
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(PADDING, 70.0),
        text: "My Work.".into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_HEADING,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(PADDING, 130.0),
        text: "Selected projects showcasing my expertise".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_TITLE - 8.0,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::EndMotion);

    // Left: the list container, clipped to its viewport.
    let list = list_rect(width);
    commands.push(RenderCommand::DrawRect {
        rect: list,
        color: ThemeToken::Surface,
        border_color: Some(ThemeToken::CardBorder),
        label: None,
        node_id: None,
    });
    commands.push(RenderCommand::SetClip { rect: list });
    commands.push(RenderCommand::PushTransform {
        translate: Point::new(list.x, list.y - list_scroll),
        scale: Point::new(1.0, 1.0),
    });
    for (index, project) in PROJECTS.iter().enumerate() {
        push_list_row(
            &mut commands,
            project,
            index,
            column,
            index == active_index,
        );
    }
    commands.push(RenderCommand::PopTransform);
    commands.push(RenderCommand::ClearClip);

    // Right: preview card for the active project.
    if let Some(project) = PROJECTS.get(active_index) {
        let preview = Rect::new(
            PADDING + column + COLUMN_GAP,
            HEADER_HEIGHT,
            column,
            LIST_HEIGHT - 100.0,
        );
        push_preview(&mut commands, project, preview);
    }

    commands.push(RenderCommand::EndGroup);
    SectionOutput {
        commands,
        height: SECTION_HEIGHT,
    }
}

fn push_list_row(
    commands: &mut Vec<RenderCommand>,
    project: &Project,
    index: usize,
    width: f64,
    is_active: bool,
) {
    let y = LIST_SPACER + index as f64 * ROW_HEIGHT;

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, y, width, ROW_HEIGHT),
        color: ThemeToken::Surface,
        border_color: None,
        label: None,
        node_id: Some(IdSpace::ProjectRow.id(index)),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(24.0, y + 34.0),
        text: format!("_{:02}.", index + 1).into(),
        color: if is_active {
            ThemeToken::Accent
        } else {
            ThemeToken::TextFaint
        },
        font_size: FONT_CAPTION,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(70.0, y + 36.0),
        text: project.title.into(),
        color: if is_active {
            ThemeToken::Accent
        } else {
            ThemeToken::TextFaint
        },
        font_size: FONT_TITLE,
        align: TextAlign::Left,
    });

    // Tech names with dot separators.
    let mut x = 70.0;
    for (i, tech) in project.tech_stack.iter().enumerate() {
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, y + 70.0),
            text: (*tech).into(),
            color: if is_active {
                ThemeToken::TextSecondary
            } else {
                ThemeToken::TextFaint
            },
            font_size: FONT_BODY,
            align: TextAlign::Left,
        });
        x += tech.len() as f64 * 7.0 + 10.0;
        if i + 1 < project.tech_stack.len() {
            commands.push(RenderCommand::DrawCircle {
                center: Point::new(x, y + 66.0),
                radius: 2.0,
                color: ThemeToken::TextFaint,
                tint: None,
                border_color: None,
                label: None,
                node_id: None,
            });
            x += 12.0;
        }
    }

    if is_active {
        commands.push(RenderCommand::DrawLine {
            from: Point::new(70.0, y + 92.0),
            to: Point::new(width - 40.0, y + 92.0),
            color: ThemeToken::Accent,
            width: 2.0,
        });
    }
}

fn push_preview(commands: &mut Vec<RenderCommand>, project: &Project, rect: Rect) {
    // Preview swaps with a short rise whenever the active project changes;
    // the renderer restarts the motion clock on content change.
    commands.push(RenderCommand::BeginMotion {
        motion: Motion::rise(20.0, 0.4),
    });

    commands.push(RenderCommand::DrawRect {
        rect,
        color: ThemeToken::CardBackground,
        border_color: Some(ThemeToken::CardBorderActive),
        label: None,
        node_id: None,
    });

    // Banner area with the category badge.
    let banner = Rect::new(rect.x, rect.y, rect.w, 180.0);
    commands.push(RenderCommand::DrawRect {
        rect: banner,
        color: ThemeToken::AccentSoft,
        border_color: None,
        label: None,
        node_id: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(banner.x + 24.0, banner.y + 24.0, 150.0, 28.0),
        color: ThemeToken::TagBackground,
        border_color: Some(ThemeToken::TagBorder),
        label: None,
        node_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(banner.x + 36.0, banner.y + 38.0),
        text: project.category.into(),
        color: ThemeToken::Accent,
        font_size: FONT_CAPTION,
        align: TextAlign::Left,
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(rect.x + 24.0, banner.bottom() + 40.0),
        text: project.description.into(),
        color: ThemeToken::TextSecondary,
        font_size: FONT_BODY,
        align: TextAlign::Left,
    });

    // Tech chips.
    let mut x = rect.x + 24.0;
    let chip_y = banner.bottom() + 90.0;
    for tech in project.tech_stack {
        let w = tech.len() as f64 * 7.0 + 24.0;
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x, chip_y, w, 26.0),
            color: ThemeToken::TagBackground,
            border_color: None,
            label: None,
            node_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + 12.0, chip_y + 13.0),
            text: (*tech).into(),
            color: ThemeToken::TagText,
            font_size: FONT_CAPTION,
            align: TextAlign::Left,
        });
        x += w + 8.0;
    }

    if let Some(link) = project.link {
        let button = Rect::new(rect.x + 24.0, rect.bottom() - 70.0, rect.w - 48.0, 44.0);
        commands.push(RenderCommand::DrawRect {
            rect: button,
            color: ThemeToken::AccentSoft,
            border_color: Some(ThemeToken::Accent),
            label: Some(link.into()),
            node_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(button.center().x, button.center().y),
            text: "View Project →".into(),
            color: ThemeToken::TextPrimary,
            font_size: FONT_BODY,
            align: TextAlign::Center,
        });
    }

    commands.push(RenderCommand::EndMotion);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_bounds_track_scroll() {
        let at_rest = row_bounds(0, 0.0);
        assert_eq!(at_rest.top, LIST_SPACER);
        let scrolled = row_bounds(0, 150.0);
        assert_eq!(scrolled.top, LIST_SPACER - 150.0);
        assert_eq!(scrolled.bottom - scrolled.top, ROW_HEIGHT);
    }

    #[test]
    fn active_row_gets_the_underline() {
        let out = render(1440.0, 2, 0.0);
        let underlines = out
            .commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawLine {
                        color: ThemeToken::Accent,
                        width,
                        ..
                    } if *width == 2.0
                )
            })
            .count();
        assert_eq!(underlines, 1);
    }

    #[test]
    fn preview_shows_link_button_only_when_linked() {
        let linked = render(1440.0, 0, 0.0); // project 1 has a link
        assert!(has_text(&linked, "View Project →"));
        let unlinked = render(1440.0, 1, 0.0); // project 2 has none
        assert!(!has_text(&unlinked, "View Project →"));
    }

    #[test]
    fn list_rows_are_clipped_to_the_container() {
        let out = render(1440.0, 0, 0.0);
        let clip_sets = out
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::SetClip { .. }))
            .count();
        let clip_clears = out
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::ClearClip))
            .count();
        assert_eq!(clip_sets, 1);
        assert_eq!(clip_clears, 1);
    }

    fn has_text(out: &SectionOutput, needle: &str) -> bool {
        out.commands.iter().any(|c| {
            matches!(
                c,
                RenderCommand::DrawText { text, .. } if text.as_str() == needle
            )
        })
    }
}

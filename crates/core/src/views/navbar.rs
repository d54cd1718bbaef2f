use folio_protocol::{Motion, Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::{NAV_LINKS, RESUME_HREF};
use crate::views::{FONT_BODY, FONT_EMPHASIS, IdSpace};

pub const PILL_HEIGHT: f64 = 52.0;
const PILL_TOP: f64 = 24.0;
const LINK_GAP: f64 = 40.0;
const LINK_CHAR_WIDTH: f64 = 7.0;
const PADDING_X: f64 = 48.0;
/// Page scroll offset past which the pill picks up its solid backdrop.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Floating navigation pill. Drawn in viewport coordinates (it does not
/// scroll with the page); `active` is the anchor of the section the
/// document tracker currently reports.
pub fn render(viewport_width: f64, scroll_y: f64, active: Option<&str>) -> Vec<RenderCommand> {
    let scrolled = scroll_y > SCROLLED_THRESHOLD;

    let links_width: f64 = NAV_LINKS
        .iter()
        .map(|l| l.name.len() as f64 * LINK_CHAR_WIDTH + LINK_GAP)
        .sum();
    // Brand mark + links + resume link.
    let pill_width = PADDING_X * 2.0 + 40.0 + links_width + 60.0;
    let pill = Rect::new(
        (viewport_width - pill_width) / 2.0,
        PILL_TOP,
        pill_width,
        PILL_HEIGHT,
    );

    let mut commands = Vec::with_capacity(NAV_LINKS.len() * 2 + 8);
    commands.push(RenderCommand::BeginGroup {
        id: "navbar".into(),
        label: Some("Navigation".into()),
    });
    // The whole bar drops in from above the viewport on first paint.
    commands.push(RenderCommand::BeginMotion {
        motion: Motion {
            from: Point::new(0.0, -(PILL_TOP + PILL_HEIGHT)),
            fade_from: 1.0,
            delay: 0.0,
            duration: 0.6,
            easing: folio_protocol::Easing::PowerOut(3),
        },
    });

    commands.push(RenderCommand::DrawRect {
        rect: pill,
        color: if scrolled {
            ThemeToken::NavBackgroundScrolled
        } else {
            ThemeToken::NavBackground
        },
        border_color: scrolled.then_some(ThemeToken::Border),
        label: None,
        node_id: None,
    });

    let center_y = pill.y + PILL_HEIGHT / 2.0;
    let mut x = pill.x + PADDING_X;

    // Brand mark.
    commands.push(RenderCommand::DrawText {
        position: Point::new(x, center_y),
        text: "AS.".into(),
        color: ThemeToken::Accent,
        font_size: FONT_EMPHASIS,
        align: TextAlign::Left,
    });
    x += 40.0 + LINK_GAP / 2.0;

    for (i, link) in NAV_LINKS.iter().enumerate() {
        let is_active = active == Some(link.section.anchor());
        let width = link.name.len() as f64 * LINK_CHAR_WIDTH;

        // Invisible hit rect so clicks map back to the section.
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x - 6.0, pill.y, width + 12.0, PILL_HEIGHT),
            color: ThemeToken::NavBackground,
            border_color: None,
            label: Some(link.section.anchor().into()),
            node_id: Some(IdSpace::NavLink.id(i)),
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, center_y),
            text: link.name.into(),
            color: if is_active {
                ThemeToken::NavTextActive
            } else {
                ThemeToken::NavText
            },
            font_size: FONT_BODY,
            align: TextAlign::Left,
        });
        if is_active {
            commands.push(RenderCommand::DrawLine {
                from: Point::new(x, center_y + 12.0),
                to: Point::new(x + width, center_y + 12.0),
                color: ThemeToken::NavUnderline,
                width: 2.0,
            });
        }
        x += width + LINK_GAP;
    }

    commands.push(RenderCommand::DrawText {
        position: Point::new(x, center_y),
        text: "Resume".into(),
        color: ThemeToken::Accent,
        font_size: FONT_BODY,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(x - 6.0, pill.y, 60.0, PILL_HEIGHT),
        color: ThemeToken::NavBackground,
        border_color: None,
        label: Some(RESUME_HREF.into()),
        node_id: Some(IdSpace::NavLink.id(NAV_LINKS.len())),
    });

    commands.push(RenderCommand::EndMotion);
    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn underlines(commands: &[RenderCommand]) -> usize {
        commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawLine {
                        color: ThemeToken::NavUnderline,
                        ..
                    }
                )
            })
            .count()
    }

    #[test]
    fn active_link_gets_exactly_one_underline() {
        let cmds = render(1280.0, 400.0, Some("work"));
        assert_eq!(underlines(&cmds), 1);
        let none = render(1280.0, 400.0, None);
        assert_eq!(underlines(&none), 0);
    }

    #[test]
    fn scroll_state_switches_backdrop() {
        let at_top = render(1280.0, 0.0, None);
        assert!(at_top.iter().any(|c| matches!(
            c,
            RenderCommand::DrawRect {
                color: ThemeToken::NavBackground,
                ..
            }
        )));
        let scrolled = render(1280.0, 300.0, None);
        assert!(scrolled.iter().any(|c| matches!(
            c,
            RenderCommand::DrawRect {
                color: ThemeToken::NavBackgroundScrolled,
                ..
            }
        )));
    }

    #[test]
    fn every_link_is_hit_testable() {
        let cmds = render(1280.0, 0.0, None);
        for i in 0..NAV_LINKS.len() {
            let id = IdSpace::NavLink.id(i);
            assert!(
                cmds.iter().any(|c| matches!(
                    c,
                    RenderCommand::DrawRect {
                        node_id: Some(n),
                        ..
                    } if *n == id
                )),
                "nav link {i} missing hit id"
            );
        }
    }
}

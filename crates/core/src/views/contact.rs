use folio_protocol::{Motion, Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::contact::{CONNECTIONS, CONTACT_NODES};
use crate::views::{FONT_BODY, FONT_CAPTION, FONT_HEADING, FONT_TINY, FONT_TITLE, IdSpace, SectionOutput};

pub const SECTION_HEIGHT: f64 = 860.0;
const DIAGRAM_CENTER_Y: f64 = 560.0;
const NODE_RADIUS: f64 = 24.0;
const RESUME_RADIUS: f64 = 28.0;
/// First connection line starts fading in at this delay; each following
/// line adds [`LINE_STAGGER`].
const LINE_DELAY: f64 = 0.4;
const LINE_STAGGER: f64 = 0.2;

/// Contact diagram: heading, diamond of link nodes joined by staggered
/// lines, pulsing center. `hovered` is a node index, `pulse_phase` the
/// caller's animation phase in `[0, 1)`.
pub fn render(width: f64, hovered: Option<usize>, pulse_phase: f64) -> SectionOutput {
    let cx = width / 2.0;
    let mut commands = Vec::with_capacity(CONTACT_NODES.len() * 6 + CONNECTIONS.len() + 16);

    commands.push(RenderCommand::BeginGroup {
        id: "contact".into(),
        label: Some("Get In Touch".into()),
    });

    commands.push(RenderCommand::BeginMotion {
        motion: Motion::rise(30.0, 0.8),
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(cx, 120.0),
        text: "Get In Touch.".into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_HEADING,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(cx, 200.0),
        text: "I'm always open to discussing new opportunities, interesting projects, or just having a chat about ML and AI.".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_TITLE - 8.0,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::EndMotion);

    let node_center =
        |i: usize| Point::new(cx + CONTACT_NODES[i].dx, DIAGRAM_CENTER_Y + CONTACT_NODES[i].dy);

    // Connection lines, fading in one after another.
    for (i, &(a, b)) in CONNECTIONS.iter().enumerate() {
        commands.push(RenderCommand::BeginMotion {
            motion: Motion::fade(1.0).with_delay(LINE_DELAY + i as f64 * LINE_STAGGER),
        });
        commands.push(RenderCommand::DrawLine {
            from: node_center(a),
            to: node_center(b),
            color: ThemeToken::DiagramLine,
            width: 1.5,
        });
        commands.push(RenderCommand::EndMotion);
    }

    // Center pulse: radius swells and fades with the phase.
    let pulse = pulse_phase.clamp(0.0, 1.0);
    commands.push(RenderCommand::DrawCircle {
        center: Point::new(cx, DIAGRAM_CENTER_Y),
        radius: 3.0 + 6.0 * pulse,
        color: ThemeToken::DiagramPulse,
        tint: None,
        border_color: None,
        label: None,
        node_id: None,
    });

    for (i, node) in CONTACT_NODES.iter().enumerate() {
        let center = node_center(i);
        let is_hovered = hovered == Some(i);
        let is_resume = node.id == "resume";
        let radius = if is_resume { RESUME_RADIUS } else { NODE_RADIUS };

        commands.push(RenderCommand::BeginMotion {
            motion: Motion::fade(0.5).with_delay(0.3),
        });

        if is_hovered {
            commands.push(RenderCommand::DrawCircle {
                center,
                radius: radius * 1.8,
                color: ThemeToken::AccentGlow,
                tint: None,
                border_color: None,
                label: None,
                node_id: None,
            });
        }
        commands.push(RenderCommand::DrawCircle {
            center,
            radius: if is_hovered { radius * 1.15 } else { radius },
            color: ThemeToken::Surface,
            tint: is_hovered.then_some(node.color),
            border_color: Some(if is_hovered {
                ThemeToken::Accent
            } else {
                ThemeToken::Border
            }),
            label: Some(node.href.into()),
            node_id: Some(IdSpace::ContactNode.id(i)),
        });

        if is_resume && !is_hovered {
            commands.push(RenderCommand::DrawText {
                position: Point::new(center.x, center.y + radius + 16.0),
                text: "RESUME".into(),
                color: ThemeToken::TextMuted,
                font_size: FONT_TINY,
                align: TextAlign::Center,
            });
        }

        if is_hovered {
            // Tooltip above the node; below for the top (resume) node.
            let dy = if node.dy < 0.0 {
                radius + 34.0
            } else {
                -(radius + 26.0)
            };
            let tooltip = Rect::new(center.x - 48.0, center.y + dy - 12.0, 96.0, 24.0);
            commands.push(RenderCommand::DrawRect {
                rect: tooltip,
                color: ThemeToken::TooltipBackground,
                border_color: Some(ThemeToken::Border),
                label: None,
                node_id: None,
            });
            commands.push(RenderCommand::DrawText {
                position: Point::new(center.x, tooltip.center().y),
                text: node.label.into(),
                color: ThemeToken::TooltipText,
                font_size: FONT_CAPTION,
                align: TextAlign::Center,
            });
            commands.push(RenderCommand::DrawText {
                position: Point::new(center.x, DIAGRAM_CENTER_Y + 200.0),
                text: node.value.into(),
                color: ThemeToken::TextSecondary,
                font_size: FONT_BODY,
                align: TextAlign::Center,
            });
        }

        commands.push(RenderCommand::EndMotion);
    }

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
    fn lines_stagger_in_connection_order() {
        let out = render(1280.0, None, 0.0);
        let delays: Vec<f64> = out
            .commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::BeginMotion { motion }
                    if motion.from == Point::ZERO && motion.duration == 1.0 =>
                {
                    Some(motion.delay)
                }
                _ => None,
            })
            .collect();
        assert_eq!(delays.len(), CONNECTIONS.len());
        for pair in delays.windows(2) {
            assert!((pair[1] - pair[0] - LINE_STAGGER).abs() < 1e-9);
        }
    }

    #[test]
    fn hover_reveals_tooltip_and_value() {
        let idle = render(1280.0, None, 0.0);
        let hovered = render(1280.0, Some(1), 0.0);
        let texts = |out: &SectionOutput| {
            out.commands
                .iter()
                .filter(|c| matches!(c, RenderCommand::DrawText { .. }))
                .count()
        };
        // Tooltip label + value line appear on hover.
        assert_eq!(texts(&hovered), texts(&idle) + 2);
        assert!(hovered.commands.iter().any(|c| matches!(
            c,
            RenderCommand::DrawText { text, .. }
                if text.as_str() == "aryansarswat2000@gmail.com"
        )));
    }

    #[test]
    fn pulse_follows_phase() {
        let small = render(1280.0, None, 0.0);
        let large = render(1280.0, None, 1.0);
        let pulse_radius = |out: &SectionOutput| {
            out.commands.iter().find_map(|c| match c {
                RenderCommand::DrawCircle {
                    radius,
                    color: ThemeToken::DiagramPulse,
                    ..
                } => Some(*radius),
                _ => None,
            })
        };
        assert_eq!(pulse_radius(&small), Some(3.0));
        assert_eq!(pulse_radius(&large), Some(9.0));
    }

    #[test]
    fn all_nodes_are_hit_testable() {
        let out = render(1280.0, None, 0.0);
        let nodes = out
            .commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawCircle { node_id: Some(id), .. }
                        if IdSpace::decode(*id).is_some_and(|(s, _)| s == IdSpace::ContactNode)
                )
            })
            .count();
        assert_eq!(nodes, CONTACT_NODES.len());
    }
}

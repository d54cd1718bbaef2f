//! SVG renderer: converts `RenderCommand` lists into standalone SVG
//! strings, for static export and the wasm bridge.

use folio_protocol::{Color, RenderCommand, TextAlign, ThemeToken};

/// Render a command list as an SVG document string.
///
/// `width` and `height` define the viewBox; `dark` selects the palette.
/// Motions are rendered at their settled state; clips are ignored (the
/// export is a full-page snapshot).
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        resolve_color(ThemeToken::Background, dark),
    ));

    let mut open_transforms: usize = 0;

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect, color, label, ..
            } => {
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="4">"#,
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h,
                    resolve_color(*color, dark),
                ));
                if let Some(label) = label {
                    svg.push_str(&format!("<title>{}</title>", escape_xml(label)));
                }
                svg.push_str("</rect>");
            }
            RenderCommand::DrawCircle {
                center,
                radius,
                color,
                tint,
                label,
                ..
            } => {
                let fill = tint.map_or_else(|| resolve_color(*color, dark).to_string(), hex_of);
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{fill}">"#,
                    center.x, center.y,
                ));
                if let Some(label) = label {
                    svg.push_str(&format!("<title>{}</title>", escape_xml(label)));
                }
                svg.push_str("</circle>");
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{line_width}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    resolve_color(*color, dark),
                ));
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    resolve_color(*color, dark),
                    escape_xml(text),
                ));
            }
            RenderCommand::PushTransform { translate, scale } => {
                svg.push_str(&format!(
                    r#"<g transform="translate({} {}) scale({} {})">"#,
                    translate.x, translate.y, scale.x, scale.y,
                ));
                open_transforms += 1;
            }
            RenderCommand::PopTransform => {
                if open_transforms > 0 {
                    svg.push_str("</g>");
                    open_transforms -= 1;
                }
            }
            // Clips, motions and groups have no static-SVG effect.
            _ => {}
        }
    }

    for _ in 0..open_transforms {
        svg.push_str("</g>");
    }
    svg.push_str("</svg>");
    svg
}

fn hex_of(color: Color) -> String {
    let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", ch(color.r), ch(color.g), ch(color.b))
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    use ThemeToken::*;
    if dark {
        match token {
            Background | NavBackground => "#0b0b12",
            Surface | NavBackgroundScrolled | TooltipBackground => "#15151f",
            Border | CardBorder | TagBorder => "#2a2a3a",
            TextPrimary | NavTextActive | TooltipText => "#f2f2f8",
            TextSecondary => "#b6b6c6",
            TextMuted | NavText | TagText => "#8a8a9c",
            TextFaint | TimelineDot => "#4a4a5e",
            Accent | NavUnderline | TimelineDotActive | ProgressFill => "#a855f7",
            AccentSoft | AccentGlow | TagBackground => "#2b1b44",
            Highlight => "#6366f1",
            CardBackground => "#171720",
            CardBorderActive => "#7a3fc0",
            TimelineAxis | GlobeWireframe | DiagramLine | ProgressTrack => "#32324a",
            GlobeMarker | GlobeMarkerLabel => "#d6d6e6",
            GlobeMarkerBack => "#3c3c50",
            DiagramPulse => "#c084fc",
        }
    } else {
        match token {
            Background | NavBackground => "#fafafc",
            Surface | NavBackgroundScrolled | TooltipBackground => "#f0f0f5",
            Border | CardBorder | TagBorder => "#d8d8e2",
            TextPrimary | NavTextActive | TooltipText => "#16161e",
            TextSecondary => "#45455a",
            TextMuted | NavText | TagText => "#6d6d80",
            TextFaint | TimelineDot => "#b4b4c4",
            Accent | NavUnderline | TimelineDotActive | ProgressFill => "#7c3aed",
            AccentSoft | AccentGlow | TagBackground => "#ece2fb",
            Highlight => "#4f46e5",
            CardBackground => "#ffffff",
            CardBorderActive => "#a78bda",
            TimelineAxis | GlobeWireframe | DiagramLine | ProgressTrack => "#d0d0de",
            GlobeMarker | GlobeMarkerLabel => "#3a3a4e",
            GlobeMarkerBack => "#c6c6d4",
            DiagramPulse => "#8b5cf6",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::{Point, Rect};

    #[test]
    fn basic_svg_output() {
        let commands = vec![
            RenderCommand::DrawRect {
                rect: Rect::new(10.0, 20.0, 200.0, 40.0),
                color: ThemeToken::CardBackground,
                border_color: None,
                label: Some("project-1".into()),
                node_id: Some(1),
            },
            RenderCommand::DrawText {
                position: Point::new(20.0, 40.0),
                text: "My Work.".into(),
                color: ThemeToken::TextPrimary,
                font_size: 48.0,
                align: TextAlign::Left,
            },
        ];
        let svg = render_svg(&commands, 1280.0, 720.0, true);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("My Work."));
        assert!(svg.contains("project-1"));
    }

    #[test]
    fn escapes_xml_entities() {
        let commands = vec![RenderCommand::DrawText {
            position: Point::new(0.0, 0.0),
            text: "Career & Experience".into(),
            color: ThemeToken::TextPrimary,
            font_size: 48.0,
            align: TextAlign::Center,
        }];
        let svg = render_svg(&commands, 400.0, 100.0, false);
        assert!(svg.contains("Career &amp; Experience"));
    }

    #[test]
    fn transforms_become_groups() {
        let commands = vec![
            RenderCommand::PushTransform {
                translate: Point::new(80.0, 180.0),
                scale: Point::new(1.0, 1.0),
            },
            RenderCommand::DrawLine {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 0.0),
                color: ThemeToken::Border,
                width: 1.0,
            },
            RenderCommand::PopTransform,
        ];
        let svg = render_svg(&commands, 200.0, 200.0, true);
        assert!(svg.contains(r#"<g transform="translate(80 180) scale(1 1)">"#));
        assert_eq!(svg.matches("</g>").count(), 1);
    }

    #[test]
    fn tint_overrides_theme_token() {
        let commands = vec![RenderCommand::DrawCircle {
            center: Point::new(50.0, 50.0),
            radius: 16.0,
            color: ThemeToken::GlobeMarker,
            tint: Some(Color::from_rgb8(0xee, 0x4c, 0x2c)),
            border_color: None,
            label: None,
            node_id: None,
        }];
        let svg = render_svg(&commands, 100.0, 100.0, true);
        assert!(svg.contains("#ee4c2c"));
    }

    #[test]
    fn unbalanced_transforms_are_closed() {
        let commands = vec![RenderCommand::PushTransform {
            translate: Point::new(1.0, 2.0),
            scale: Point::new(1.0, 1.0),
        }];
        let svg = render_svg(&commands, 100.0, 100.0, true);
        assert!(svg.ends_with("</g></svg>"));
    }
}

use folio_protocol::{Point, RenderCommand, TextAlign, ThemeToken};

use crate::content::tech_stack::{TECH_STACK, TechCategory};
use crate::views::{FONT_BODY, FONT_CAPTION, FONT_HEADING, FONT_TITLE, IdSpace, SectionOutput};

const HEADER_HEIGHT: f64 = 220.0;
const GLOBE_HEIGHT: f64 = 700.0;
pub const SECTION_HEIGHT: f64 = HEADER_HEIGHT + GLOBE_HEIGHT + 60.0;

/// World-space sphere radius; projection maps it to pixels.
const SPHERE_RADIUS: f64 = 12.0;
const CAMERA_DISTANCE: f64 = 35.0;
/// Markers keep clear of the poles by this phi margin (radians).
const POLE_MARGIN: f64 = 0.3;

const MARKER_RADIUS: f64 = 16.0;
const WIREFRAME_SEGMENTS: usize = 32;
const LATITUDE_RINGS: usize = 5;
const MERIDIANS: usize = 6;

/// Golden-ratio conjugate; spreads marker longitudes without clustering.
const GOLDEN: f64 = 0.618_033_988_749_895;

/// Each category owns a longitude quadrant of the sphere, so related
/// tech clusters together as the globe spins.
fn category_quadrant(category: TechCategory) -> (f64, f64) {
    use std::f64::consts::PI;
    match category {
        TechCategory::Language => (0.0, PI / 2.0),
        TechCategory::Ml => (PI / 2.0, PI),
        TechCategory::Web => (PI, 3.0 * PI / 2.0),
        TechCategory::Tools => (3.0 * PI / 2.0, 2.0 * PI),
    }
}

/// Deterministic position of a tech marker on the unit sphere scaled by
/// `SPHERE_RADIUS`, before rotation.
///
/// Within its category quadrant each marker takes an equal-area latitude
/// slot and a golden-ratio longitude, which keeps neighbors separated
/// without the rejection sampling a random layout would need.
pub fn marker_position(index: usize) -> (f64, f64, f64) {
    use std::f64::consts::PI;
    let item = &TECH_STACK[index];
    let (theta_min, theta_max) = category_quadrant(item.category);

    let peers: Vec<usize> = (0..TECH_STACK.len())
        .filter(|&i| TECH_STACK[i].category == item.category)
        .collect();
    let slot = peers.iter().position(|&i| i == index).unwrap_or(0);
    let count = peers.len().max(1);

    let phi_min = POLE_MARGIN;
    let phi_max = PI - POLE_MARGIN;
    // Equal-area latitude: uniform in cos(phi) across the band.
    let t = (slot as f64 + 0.5) / count as f64;
    let cos_phi = phi_min.cos() + t * (phi_max.cos() - phi_min.cos());
    let phi = cos_phi.clamp(-1.0, 1.0).acos();
    let theta = theta_min + ((slot as f64 * GOLDEN) % 1.0) * (theta_max - theta_min);

    (
        SPHERE_RADIUS * phi.sin() * theta.cos(),
        SPHERE_RADIUS * phi.cos(),
        SPHERE_RADIUS * phi.sin() * theta.sin(),
    )
}

/// Rotate around the vertical axis and project to screen space.
/// Returns screen point and rotated depth (positive = toward camera).
fn project(pos: (f64, f64, f64), yaw: f64, center: Point, focal: f64) -> (Point, f64) {
    let (x, y, z) = pos;
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let xr = x * cos_yaw + z * sin_yaw;
    let zr = -x * sin_yaw + z * cos_yaw;
    let scale = focal / (CAMERA_DISTANCE - zr);
    (
        Point::new(center.x + xr * scale, center.y - y * scale),
        zr,
    )
}

/// Rotating wireframe globe with hit-testable tech markers.
///
/// `yaw` is supplied by the caller (auto-rotation plus drag offset);
/// the view never owns a clock. `hovered` is the marker index under the
/// pointer, if any.
pub fn render(width: f64, yaw: f64, hovered: Option<usize>) -> SectionOutput {
    use std::f64::consts::PI;

    let center = Point::new(width / 2.0, HEADER_HEIGHT + GLOBE_HEIGHT / 2.0);
    let focal = GLOBE_HEIGHT * 1.2;
    let mut commands = Vec::with_capacity(
        LATITUDE_RINGS * WIREFRAME_SEGMENTS + MERIDIANS * WIREFRAME_SEGMENTS + TECH_STACK.len() * 2 + 12,
    );

    commands.push(RenderCommand::BeginGroup {
        id: "skills".into(),
        label: Some("The Technical Toolkit".into()),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(width / 2.0, 80.0),
        text: "The Technical Toolkit.".into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_HEADING,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(width / 2.0, 150.0),
        text: "A curated selection of technologies and frameworks I use to bring complex AI systems to life.".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_TITLE - 8.0,
        align: TextAlign::Center,
    });

    // Wireframe: latitude rings...
    for ring in 1..=LATITUDE_RINGS {
        let phi = PI * ring as f64 / (LATITUDE_RINGS + 1) as f64;
        push_polyline(
            &mut commands,
            (0..=WIREFRAME_SEGMENTS).map(|s| {
                let theta = 2.0 * PI * s as f64 / WIREFRAME_SEGMENTS as f64;
                (
                    SPHERE_RADIUS * phi.sin() * theta.cos(),
                    SPHERE_RADIUS * phi.cos(),
                    SPHERE_RADIUS * phi.sin() * theta.sin(),
                )
            }),
            yaw,
            center,
            focal,
        );
    }
    // ...and meridians.
    for m in 0..MERIDIANS {
        let theta = PI * m as f64 / MERIDIANS as f64;
        push_polyline(
            &mut commands,
            (0..=WIREFRAME_SEGMENTS).map(|s| {
                let phi = 2.0 * PI * s as f64 / WIREFRAME_SEGMENTS as f64;
                (
                    SPHERE_RADIUS * phi.sin() * theta.cos(),
                    SPHERE_RADIUS * phi.cos(),
                    SPHERE_RADIUS * phi.sin() * theta.sin(),
                )
            }),
            yaw,
            center,
            focal,
        );
    }

    // Markers, painter-ordered back to front.
    let mut projected: Vec<(usize, Point, f64)> = (0..TECH_STACK.len())
        .map(|i| {
            let (p, depth) = project(marker_position(i), yaw, center, focal);
            (i, p, depth)
        })
        .collect();
    projected.sort_by(|a, b| a.2.total_cmp(&b.2));

    for (index, point, depth) in projected {
        let item = &TECH_STACK[index];
        let in_front = depth >= 0.0;
        let is_hovered = hovered == Some(index);

        if is_hovered {
            commands.push(RenderCommand::DrawCircle {
                center: point,
                radius: MARKER_RADIUS * 2.0,
                color: ThemeToken::AccentGlow,
                tint: None,
                border_color: None,
                label: None,
                node_id: None,
            });
        }
        commands.push(RenderCommand::DrawCircle {
            center: point,
            radius: if is_hovered {
                MARKER_RADIUS * 1.4
            } else {
                MARKER_RADIUS
            },
            color: if in_front {
                ThemeToken::GlobeMarker
            } else {
                ThemeToken::GlobeMarkerBack
            },
            tint: (is_hovered || in_front).then_some(item.color),
            border_color: None,
            label: Some(item.name.into()),
            node_id: Some(IdSpace::GlobeMarker.id(index)),
        });
        if is_hovered {
            commands.push(RenderCommand::DrawText {
                position: Point::new(point.x, point.y + MARKER_RADIUS * 2.2 + 10.0),
                text: item.name.into(),
                color: ThemeToken::GlobeMarkerLabel,
                font_size: FONT_BODY,
                align: TextAlign::Center,
            });
        }
    }

    commands.push(RenderCommand::DrawText {
        position: Point::new(width / 2.0, SECTION_HEIGHT - 30.0),
        text: "Drag to rotate • Hover icons for details".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_CAPTION,
        align: TextAlign::Center,
    });

    commands.push(RenderCommand::EndGroup);
    SectionOutput {
        commands,
        height: SECTION_HEIGHT,
    }
}

fn push_polyline(
    commands: &mut Vec<RenderCommand>,
    points: impl Iterator<Item = (f64, f64, f64)>,
    yaw: f64,
    center: Point,
    focal: f64,
) {
    let mut prev: Option<Point> = None;
    for pos in points {
        let (point, _) = project(pos, yaw, center, focal);
        if let Some(from) = prev {
            commands.push(RenderCommand::DrawLine {
                from,
                to: point,
                color: ThemeToken::GlobeWireframe,
                width: 0.5,
            });
        }
        prev = Some(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_sit_on_the_sphere() {
        for i in 0..TECH_STACK.len() {
            let (x, y, z) = marker_position(i);
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - SPHERE_RADIUS).abs() < 1e-9, "marker {i} off-sphere");
        }
    }

    #[test]
    fn placement_is_deterministic() {
        assert_eq!(marker_position(5), marker_position(5));
    }

    #[test]
    fn markers_stay_in_their_quadrant() {
        for (i, item) in TECH_STACK.iter().enumerate() {
            let (x, y, z) = marker_position(i);
            let theta = z.atan2(x).rem_euclid(2.0 * std::f64::consts::PI);
            let (lo, hi) = category_quadrant(item.category);
            assert!(
                theta >= lo - 1e-9 && theta <= hi + 1e-9,
                "{} at theta {theta} outside [{lo}, {hi}]",
                item.name
            );
            // Pole margin keeps |y| under the band edge.
            assert!(y.abs() < SPHERE_RADIUS * POLE_MARGIN.cos() + 1e-9);
        }
    }

    #[test]
    fn every_marker_is_hit_testable() {
        let out = render(1280.0, 0.3, None);
        let marker_circles = out
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawCircle { node_id: Some(_), .. }))
            .count();
        assert_eq!(marker_circles, TECH_STACK.len());
    }

    #[test]
    fn hover_adds_label_and_glow() {
        let idle = render(1280.0, 0.0, None);
        let hovered = render(1280.0, 0.0, Some(3));
        assert_eq!(
            circle_count(&hovered),
            circle_count(&idle) + 1,
            "hover should add a glow circle"
        );
        assert!(hovered.commands.iter().any(|c| matches!(
            c,
            RenderCommand::DrawText { text, .. } if text.as_str() == TECH_STACK[3].name
        )));
    }

    fn circle_count(out: &SectionOutput) -> usize {
        out.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawCircle { .. }))
            .count()
    }
}

use std::collections::HashMap;

use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};
use folio_protocol::{Motion, RenderCommand, TextAlign, ThemeToken};

use crate::theme::{self, ThemeMode};

/// Transform state for PushTransform/PopTransform.
#[derive(Debug, Clone, Copy)]
struct Transform {
    tx: f64,
    ty: f64,
    sx: f64,
    sy: f64,
}

impl Transform {
    fn identity() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
        }
    }

    fn apply_x(&self, x: f64) -> f32 {
        (x * self.sx + self.tx) as f32
    }

    fn apply_y(&self, y: f64) -> f32 {
        (y * self.sy + self.ty) as f32
    }

    fn scale_w(&self, w: f64) -> f32 {
        (w * self.sx) as f32
    }

    fn scale_h(&self, h: f64) -> f32 {
        (h * self.sy) as f32
    }
}

/// Settled state of the motion stack at one command: the remaining
/// entry offset and the combined alpha.
#[derive(Debug, Clone, Copy)]
struct MotionState {
    dx: f64,
    dy: f64,
    alpha: f32,
}

impl MotionState {
    fn rest() -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            alpha: 1.0,
        }
    }

    fn with(self, motion: &Motion, elapsed: f64) -> Self {
        let p = motion.progress(elapsed);
        let alpha = motion.fade_from + (1.0 - motion.fade_from) * p;
        Self {
            dx: self.dx + motion.from.x * (1.0 - p),
            dy: self.dy + motion.from.y * (1.0 - p),
            alpha: self.alpha * alpha as f32,
        }
    }
}

/// Per-group animation clocks: group id → the `now` at which the group
/// first became visible. Owned by the app; motions inside a group
/// measure elapsed time against this start.
pub type MotionClocks = HashMap<String, f64>;

/// A hit-testable region produced by a command carrying a `node_id`.
pub struct HitRegion {
    pub rect: Rect,
    pub node_id: u64,
}

/// Result of rendering a command list.
pub struct RenderResult {
    pub hit_regions: Vec<HitRegion>,
    /// True while any motion is still mid-flight (the app keeps
    /// repainting until the stream settles).
    pub animating: bool,
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the drawing area (page
/// streams pass `(0, -scroll_y)`). `clocks` holds group start times;
/// a group with no clock renders its motions at progress zero.
pub fn render_commands(
    painter: &mut egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
    clocks: &MotionClocks,
    now: f64,
) -> RenderResult {
    let mut transform_stack: Vec<Transform> = vec![Transform::identity()];
    let mut clip_stack: Vec<Rect> = Vec::new();
    let mut motion_stack: Vec<MotionState> = Vec::new();
    let mut group_stack: Vec<String> = Vec::new();
    let mut hit_regions: Vec<HitRegion> = Vec::new();
    let mut animating = false;

    for cmd in commands {
        let tf = transform_stack
            .last()
            .copied()
            .unwrap_or(Transform::identity());
        let motion = motion_stack.last().copied().unwrap_or(MotionState::rest());
        let color_of = |token: ThemeToken| {
            let base = theme::resolve(token, mode);
            if motion.alpha >= 1.0 {
                base
            } else {
                base.gamma_multiply(motion.alpha)
            }
        };

        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                node_id,
                ..
            } => {
                let x = tf.apply_x(rect.x + motion.dx) + offset.x;
                let y = tf.apply_y(rect.y + motion.dy) + offset.y;
                let w = tf.scale_w(rect.w);
                let h = tf.scale_h(rect.h);
                if w < 0.5 || h < 0.5 {
                    continue;
                }

                let egui_rect = Rect::from_min_size(Pos2::new(x, y), egui::vec2(w, h));
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }
                if let Some(id) = node_id {
                    // Clipped-away parts of a region must not catch the
                    // pointer (rows scrolled out of a list container).
                    hit_regions.push(HitRegion {
                        rect: egui_rect.intersect(painter.clip_rect()),
                        node_id: *id,
                    });
                }

                painter.rect_filled(egui_rect, CornerRadius::same(4), color_of(*color));
                if let Some(bc) = border_color {
                    painter.rect_stroke(
                        egui_rect,
                        CornerRadius::same(4),
                        Stroke::new(1.0, color_of(*bc)),
                        StrokeKind::Outside,
                    );
                }
            }

            RenderCommand::DrawCircle {
                center,
                radius,
                color,
                tint,
                border_color,
                node_id,
                ..
            } => {
                let c = Pos2::new(
                    tf.apply_x(center.x + motion.dx) + offset.x,
                    tf.apply_y(center.y + motion.dy) + offset.y,
                );
                let r = tf.scale_w(*radius);
                if r < 0.5 {
                    continue;
                }

                if let Some(id) = node_id {
                    let bounds = Rect::from_center_size(c, egui::vec2(r * 2.0, r * 2.0));
                    if painter.clip_rect().intersects(bounds) {
                        hit_regions.push(HitRegion {
                            rect: bounds.intersect(painter.clip_rect()),
                            node_id: *id,
                        });
                    }
                }

                let fill = match tint {
                    Some(t) => egui::Color32::from_rgba_unmultiplied(
                        (t.r * 255.0) as u8,
                        (t.g * 255.0) as u8,
                        (t.b * 255.0) as u8,
                        (t.a * 255.0) as u8,
                    )
                    .gamma_multiply(motion.alpha),
                    None => color_of(*color),
                };
                painter.circle_filled(c, r, fill);
                if let Some(bc) = border_color {
                    painter.circle_stroke(c, r, Stroke::new(1.0, color_of(*bc)));
                }
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let pos = Pos2::new(
                    tf.apply_x(position.x + motion.dx) + offset.x,
                    tf.apply_y(position.y + motion.dy) + offset.y,
                );
                let size = *font_size as f32;
                if size < 1.0 {
                    continue;
                }
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_CENTER,
                    TextAlign::Center => Align2::CENTER_CENTER,
                    TextAlign::Right => Align2::RIGHT_CENTER,
                };
                painter.text(
                    pos,
                    anchor,
                    text.as_ref(),
                    FontId::proportional(size),
                    color_of(*color),
                );
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                let p1 = Pos2::new(
                    tf.apply_x(from.x + motion.dx) + offset.x,
                    tf.apply_y(from.y + motion.dy) + offset.y,
                );
                let p2 = Pos2::new(
                    tf.apply_x(to.x + motion.dx) + offset.x,
                    tf.apply_y(to.y + motion.dy) + offset.y,
                );
                painter.line_segment([p1, p2], Stroke::new(*width as f32, color_of(*color)));
            }

            RenderCommand::SetClip { rect } => {
                let x = tf.apply_x(rect.x) + offset.x;
                let y = tf.apply_y(rect.y) + offset.y;
                let clip_rect = Rect::from_min_size(
                    Pos2::new(x, y),
                    egui::vec2(tf.scale_w(rect.w), tf.scale_h(rect.h)),
                );
                clip_stack.push(painter.clip_rect());
                painter.set_clip_rect(painter.clip_rect().intersect(clip_rect));
            }

            RenderCommand::ClearClip => {
                if let Some(prev) = clip_stack.pop() {
                    painter.set_clip_rect(prev);
                }
            }

            RenderCommand::PushTransform { translate, scale } => {
                let parent = tf;
                transform_stack.push(Transform {
                    tx: parent.tx + translate.x * parent.sx,
                    ty: parent.ty + translate.y * parent.sy,
                    sx: parent.sx * scale.x,
                    sy: parent.sy * scale.y,
                });
            }

            RenderCommand::PopTransform => {
                if transform_stack.len() > 1 {
                    transform_stack.pop();
                }
            }

            RenderCommand::BeginMotion { motion: m } => {
                let elapsed = group_stack
                    .last()
                    .and_then(|g| clocks.get(g))
                    .map_or(0.0, |start| now - start);
                if !m.finished(elapsed) {
                    animating = true;
                }
                let parent = motion_stack.last().copied().unwrap_or(MotionState::rest());
                motion_stack.push(parent.with(m, elapsed));
            }

            RenderCommand::EndMotion => {
                motion_stack.pop();
            }

            RenderCommand::BeginGroup { id, .. } => {
                group_stack.push(id.to_string());
            }

            RenderCommand::EndGroup => {
                group_stack.pop();
            }
        }
    }

    RenderResult {
        hit_regions,
        animating,
    }
}

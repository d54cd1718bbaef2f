use serde::{Deserialize, Serialize};

use crate::motion::Motion;
use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Color, Point, Rect};

/// A single, stateless render instruction.
///
/// View transforms emit a `Vec<RenderCommand>` per section. Renderers
/// consume the list sequentially — each command carries all the data it
/// needs, so the same stream drives the egui app, the terminal renderer
/// and the SVG exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Filled rectangle, optionally with a border, a text label and a
    /// logical node identifier for hit-testing.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        label: Option<SharedStr>,
        node_id: Option<u64>,
    },

    /// Text at a position.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Filled circle — diagram nodes, timeline dots, globe markers.
    /// `tint` is a content-supplied brand color that overrides the theme
    /// token when present (tech and contact colors are data, not theme).
    DrawCircle {
        center: Point,
        radius: f64,
        color: ThemeToken,
        tint: Option<Color>,
        border_color: Option<ThemeToken>,
        label: Option<SharedStr>,
        node_id: Option<u64>,
    },

    /// Restrict subsequent drawing to a rectangular region.
    SetClip { rect: Rect },

    /// Remove the active clip region.
    ClearClip,

    /// Push an affine transform (applied to all subsequent commands until
    /// the matching `PopTransform`).
    PushTransform { translate: Point, scale: Point },

    /// Pop the most recent transform.
    PopTransform,

    /// Begin an animated group. The renderer applies the motion's eased
    /// offset and alpha to every command until the matching `EndMotion`.
    BeginMotion { motion: Motion },

    /// End the current animated group.
    EndMotion,

    /// Begin a logical group (a section, a card). Renderers may use this
    /// for batching, layer separation, or accessibility.
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Easing;

    #[test]
    fn command_stream_round_trips_as_json() {
        let commands = vec![
            RenderCommand::BeginMotion {
                motion: Motion::rise(24.0, 0.5).with_easing(Easing::ExpoOut),
            },
            RenderCommand::DrawCircle {
                center: Point::new(180.0, 60.0),
                radius: 20.0,
                color: ThemeToken::Accent,
                tint: Some(Color::rgba(0.92, 0.26, 0.21, 1.0)),
                border_color: Some(ThemeToken::Border),
                label: Some("Email".into()),
                node_id: Some(2),
            },
            RenderCommand::EndMotion,
        ];
        let json = serde_json::to_string(&commands).unwrap_or_default();
        let back: Vec<RenderCommand> = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(back.len(), 3);
        match &back[1] {
            RenderCommand::DrawCircle { label, node_id, .. } => {
                assert_eq!(label.as_ref().map(SharedStr::as_str), Some("Email"));
                assert_eq!(*node_id, Some(2));
            }
            other => panic!("expected DrawCircle, got {other:?}"),
        }
    }
}

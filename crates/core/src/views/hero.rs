use folio_protocol::{Easing, Motion, Point, RenderCommand, TextAlign, ThemeToken};

use crate::content::{NAME, TAGLINE};
use crate::views::{FONT_CAPTION, FONT_DISPLAY, FONT_EMPHASIS, SectionOutput};

// Enter timeline transcribed from the page: the name rises first, the
// tagline overlaps it by half a beat, the scroll cue fades in last.
const NAME_MOTION: Motion = Motion {
    from: Point { x: 0.0, y: 50.0 },
    fade_from: 0.0,
    delay: 0.0,
    duration: 1.0,
    easing: Easing::PowerOut(3),
};
const TAGLINE_MOTION: Motion = Motion {
    from: Point { x: 0.0, y: 30.0 },
    fade_from: 0.0,
    delay: 0.5,
    duration: 0.8,
    easing: Easing::PowerOut(3),
};
const CUE_MOTION: Motion = Motion {
    from: Point { x: 0.0, y: 0.0 },
    fade_from: 0.0,
    delay: 1.0,
    duration: 0.6,
    easing: Easing::PowerOut(3),
};

/// Full-viewport hero: name, tagline, scroll cue.
pub fn render(width: f64, height: f64) -> SectionOutput {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let mut commands = Vec::with_capacity(12);

    commands.push(RenderCommand::BeginGroup {
        id: "hero".into(),
        label: Some(NAME.into()),
    });

    commands.push(RenderCommand::BeginMotion {
        motion: NAME_MOTION,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(cx, cy - 60.0),
        text: NAME.into(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_DISPLAY,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::EndMotion);

    commands.push(RenderCommand::BeginMotion {
        motion: TAGLINE_MOTION,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(cx, cy + 60.0),
        text: TAGLINE.into(),
        color: ThemeToken::Accent,
        font_size: FONT_EMPHASIS,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::EndMotion);

    commands.push(RenderCommand::BeginMotion { motion: CUE_MOTION });
    commands.push(RenderCommand::DrawText {
        position: Point::new(cx, height - 80.0),
        text: "SCROLL TO EXPLORE".into(),
        color: ThemeToken::TextMuted,
        font_size: FONT_CAPTION,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::DrawLine {
        from: Point::new(cx, height - 64.0),
        to: Point::new(cx, height - 16.0),
        color: ThemeToken::Accent,
        width: 1.0,
    });
    commands.push(RenderCommand::EndMotion);

    commands.push(RenderCommand::EndGroup);
    SectionOutput {
        commands,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_the_viewport() {
        let out = render(1280.0, 720.0);
        assert_eq!(out.height, 720.0);
    }

    #[test]
    fn motions_are_staggered_in_order() {
        let out = render(1280.0, 720.0);
        let delays: Vec<f64> = out
            .commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::BeginMotion { motion } => Some(motion.delay),
                _ => None,
            })
            .collect();
        assert_eq!(delays, vec![0.0, 0.5, 1.0]);
    }
}

use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,
    TextFaint,

    Accent,
    AccentSoft,
    AccentGlow,
    Highlight,

    NavBackground,
    NavBackgroundScrolled,
    NavText,
    NavTextActive,
    NavUnderline,

    CardBackground,
    CardBorder,
    CardBorderActive,

    TimelineAxis,
    TimelineDot,
    TimelineDotActive,

    TagBackground,
    TagBorder,
    TagText,

    GlobeWireframe,
    GlobeMarker,
    GlobeMarkerBack,
    GlobeMarkerLabel,

    DiagramLine,
    DiagramPulse,
    TooltipBackground,
    TooltipText,

    ProgressTrack,
    ProgressFill,
}

use folio_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x0b, 0x0b, 0x12),
        Surface => ResolvedColor::rgb(0x15, 0x15, 0x1f),
        Border => ResolvedColor::rgb(0x2a, 0x2a, 0x3a),

        TextPrimary => ResolvedColor::rgb(0xf2, 0xf2, 0xf8),
        TextSecondary => ResolvedColor::rgb(0xb6, 0xb6, 0xc6),
        TextMuted => ResolvedColor::rgb(0x8a, 0x8a, 0x9c),
        TextFaint => ResolvedColor::rgb(0x4a, 0x4a, 0x5e),

        Accent => ResolvedColor::rgb(0xa8, 0x55, 0xf7),
        AccentSoft => ResolvedColor::rgba(0xa8, 0x55, 0xf7, 36),
        AccentGlow => ResolvedColor::rgba(0xa8, 0x55, 0xf7, 24),
        Highlight => ResolvedColor::rgb(0x63, 0x66, 0xf1),

        NavBackground => ResolvedColor::rgba(0x0b, 0x0b, 0x12, 0),
        NavBackgroundScrolled => ResolvedColor::rgba(0x15, 0x15, 0x1f, 200),
        NavText => ResolvedColor::rgb(0x8a, 0x8a, 0x9c),
        NavTextActive => ResolvedColor::rgb(0xf2, 0xf2, 0xf8),
        NavUnderline => ResolvedColor::rgb(0xa8, 0x55, 0xf7),

        CardBackground => ResolvedColor::rgb(0x17, 0x17, 0x20),
        CardBorder => ResolvedColor::rgba(0xff, 0xff, 0xff, 14),
        CardBorderActive => ResolvedColor::rgba(0xa8, 0x55, 0xf7, 90),

        TimelineAxis => ResolvedColor::rgba(0xa8, 0x55, 0xf7, 50),
        TimelineDot => ResolvedColor::rgba(0xff, 0xff, 0xff, 26),
        TimelineDotActive => ResolvedColor::rgb(0xa8, 0x55, 0xf7),

        TagBackground => ResolvedColor::rgba(0xff, 0xff, 0xff, 13),
        TagBorder => ResolvedColor::rgba(0xff, 0xff, 0xff, 13),
        TagText => ResolvedColor::rgb(0x8a, 0x8a, 0x9c),

        GlobeWireframe => ResolvedColor::rgba(0x64, 0x74, 0x8b, 120),
        GlobeMarker => ResolvedColor::rgba(0xff, 0xff, 0xff, 200),
        GlobeMarkerBack => ResolvedColor::rgba(0xff, 0xff, 0xff, 60),
        GlobeMarkerLabel => ResolvedColor::rgb(0xd6, 0xd6, 0xe6),

        DiagramLine => ResolvedColor::rgba(0xa8, 0x55, 0xf7, 110),
        DiagramPulse => ResolvedColor::rgb(0xc0, 0x84, 0xfc),
        TooltipBackground => ResolvedColor::rgba(0x15, 0x15, 0x1f, 230),
        TooltipText => ResolvedColor::rgb(0xf2, 0xf2, 0xf8),

        ProgressTrack => ResolvedColor::rgba(0xff, 0xff, 0xff, 26),
        ProgressFill => ResolvedColor::rgb(0xa8, 0x55, 0xf7),
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(250, 250, 252),
        Surface => ResolvedColor::rgb(240, 240, 245),
        Border => ResolvedColor::rgb(216, 216, 226),

        TextPrimary => ResolvedColor::rgb(22, 22, 30),
        TextSecondary => ResolvedColor::rgb(69, 69, 90),
        TextMuted => ResolvedColor::rgb(109, 109, 128),
        TextFaint => ResolvedColor::rgb(180, 180, 196),

        Accent => ResolvedColor::rgb(124, 58, 237),
        AccentSoft => ResolvedColor::rgba(124, 58, 237, 28),
        AccentGlow => ResolvedColor::rgba(124, 58, 237, 20),
        Highlight => ResolvedColor::rgb(79, 70, 229),

        NavBackground => ResolvedColor::rgba(250, 250, 252, 0),
        NavBackgroundScrolled => ResolvedColor::rgba(255, 255, 255, 220),
        NavText => ResolvedColor::rgb(109, 109, 128),
        NavTextActive => ResolvedColor::rgb(22, 22, 30),
        NavUnderline => ResolvedColor::rgb(124, 58, 237),

        CardBackground => ResolvedColor::rgb(255, 255, 255),
        CardBorder => ResolvedColor::rgb(224, 224, 234),
        CardBorderActive => ResolvedColor::rgba(124, 58, 237, 110),

        TimelineAxis => ResolvedColor::rgba(124, 58, 237, 60),
        TimelineDot => ResolvedColor::rgb(200, 200, 212),
        TimelineDotActive => ResolvedColor::rgb(124, 58, 237),

        TagBackground => ResolvedColor::rgba(0, 0, 0, 10),
        TagBorder => ResolvedColor::rgba(0, 0, 0, 14),
        TagText => ResolvedColor::rgb(109, 109, 128),

        GlobeWireframe => ResolvedColor::rgba(100, 116, 139, 100),
        GlobeMarker => ResolvedColor::rgba(40, 40, 60, 210),
        GlobeMarkerBack => ResolvedColor::rgba(40, 40, 60, 60),
        GlobeMarkerLabel => ResolvedColor::rgb(58, 58, 78),

        DiagramLine => ResolvedColor::rgba(124, 58, 237, 120),
        DiagramPulse => ResolvedColor::rgb(139, 92, 246),
        TooltipBackground => ResolvedColor::rgba(255, 255, 255, 240),
        TooltipText => ResolvedColor::rgb(22, 22, 30),

        ProgressTrack => ResolvedColor::rgba(0, 0, 0, 20),
        ProgressFill => ResolvedColor::rgb(124, 58, 237),
    }
}

/// Dark visuals for the few stock egui widgets around the canvas.
pub fn folio_dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x0b, 0x0b, 0x12);
    v.window_fill = egui::Color32::from_rgb(0x15, 0x15, 0x1f);
    v.extreme_bg_color = egui::Color32::from_rgb(0x0b, 0x0b, 0x12);
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x1c, 0x1c, 0x28);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x26, 0x26, 0x36);
    v.widgets.active.bg_fill = egui::Color32::from_rgb(0xa8, 0x55, 0xf7);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0xa8, 0x55, 0xf7, 60);
    v.hyperlink_color = egui::Color32::from_rgb(0xa8, 0x55, 0xf7);
    v
}

pub fn folio_light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(250, 250, 252);
    v.window_fill = egui::Color32::WHITE;
    v.widgets.active.bg_fill = egui::Color32::from_rgb(124, 58, 237);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(124, 58, 237, 50);
    v.hyperlink_color = egui::Color32::from_rgb(124, 58, 237);
    v
}

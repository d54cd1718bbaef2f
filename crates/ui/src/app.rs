use eframe::egui;
use folio_core::content;
use folio_core::model::SectionId;
use folio_core::page::{Interaction, Page};
use folio_core::views::{self, IdSpace};
use folio_protocol::{Rect as ProtoRect, ThemeToken, Viewport};

use crate::markdown;
use crate::renderer::{self, MotionClocks};
use crate::theme::{self, ThemeMode};

/// Radians per second of globe auto-rotation.
const GLOBE_SPIN: f64 = 0.15;
/// Contact pulse period in seconds.
const PULSE_PERIOD: f64 = 2.0;
/// Carousel step for arrow keys and buttons, matching the page's 500px.
const CAROUSEL_STEP: f64 = 500.0;
/// Fraction of the remaining distance covered per frame during smooth
/// scrolling.
const SCROLL_EASE: f64 = 0.18;

/// Main application state.
pub struct FolioApp {
    page: Option<Page>,
    error: Option<String>,
    theme_mode: ThemeMode,

    scroll_y: f64,
    scroll_target: Option<f64>,
    work_scroll: f64,
    hobby_scroll: f64,
    active_day: usize,
    open_musing: Option<usize>,
    hovered_node: Option<u64>,
    hovered_project: Option<usize>,
    globe_drag: f64,

    /// Per-group motion start times, keyed by group id.
    clocks: MotionClocks,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(theme::folio_dark_visuals());

        let bootstrap = Viewport::sized(1280.0, 800.0);
        let (page, error) = match Page::new(&bootstrap) {
            Ok(page) => (Some(page), None),
            Err(e) => (None, Some(format!("Failed to load content: {e}"))),
        };

        Self {
            page,
            error,
            theme_mode: ThemeMode::Dark,
            scroll_y: 0.0,
            scroll_target: None,
            work_scroll: 0.0,
            hobby_scroll: 0.0,
            active_day: 0,
            open_musing: None,
            hovered_node: None,
            hovered_project: None,
            globe_drag: 0.0,
            clocks: MotionClocks::new(),
        }
    }

    fn handle_click(&mut self, node_id: u64, layout: &folio_core::page::PageLayout, ctx: &egui::Context) {
        match IdSpace::decode(node_id) {
            Some((IdSpace::NavLink, index)) => {
                if let Some(link) = content::NAV_LINKS.get(index) {
                    self.scroll_target = Some(layout.scroll_target(link.section));
                } else {
                    // Index past the nav list is the resume link.
                    ctx.open_url(egui::OpenUrl::new_tab(content::RESUME_HREF));
                }
            }
            Some((IdSpace::MusingCard, index)) => {
                self.open_musing = Some(index);
                self.clocks.remove("musing-overlay");
            }
            Some((IdSpace::HobbyDayTab, index)) => {
                self.active_day = index;
            }
            Some((IdSpace::ContactNode, index)) => {
                if let Some(node) = content::contact::CONTACT_NODES.get(index) {
                    ctx.open_url(egui::OpenUrl::new_tab(node.href));
                }
            }
            _ => {}
        }
    }

    /// Screen-space rect of a section-local rect.
    fn to_screen(
        local: ProtoRect,
        section_y: f64,
        scroll_y: f64,
        origin: egui::Pos2,
    ) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                origin.x + local.x as f32,
                origin.y + (section_y + local.y - scroll_y) as f32,
            ),
            egui::vec2(local.w as f32, local.h as f32),
        )
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_rect_before_wrap();
                let origin = available.left_top();

                let Some(page) = self.page.as_mut() else {
                    ui.centered_and_justified(|ui| {
                        let msg = self
                            .error
                            .as_deref()
                            .unwrap_or("Content failed to load");
                        ui.colored_label(egui::Color32::RED, msg);
                    });
                    return;
                };

                let viewport = Viewport {
                    x: 0.0,
                    y: self.scroll_y,
                    width: f64::from(available.width()),
                    height: f64::from(available.height()),
                    dpr: f64::from(ctx.pixels_per_point()),
                };
                page.resize(&viewport);
                let layout = page.layout(&viewport);
                let max_scroll = (layout.total_height - viewport.height).max(0.0);

                // Smooth scroll toward a nav target.
                if let Some(target) = self.scroll_target {
                    let delta = target - self.scroll_y;
                    if delta.abs() < 1.0 {
                        self.scroll_y = target;
                        self.scroll_target = None;
                    } else {
                        self.scroll_y += delta * SCROLL_EASE;
                    }
                }

                // Route wheel input: nested containers first, page otherwise.
                let pointer = ui.input(|i| i.pointer.hover_pos());
                let wheel = ui.input(|i| i.smooth_scroll_delta);
                if wheel.y.abs() > 0.1 || wheel.x.abs() > 0.1 {
                    let work_y = layout.scroll_target(SectionId::Work);
                    let hobby_y = layout.scroll_target(SectionId::Hobbies);
                    let work_rect = Self::to_screen(
                        views::work::list_rect(viewport.width),
                        work_y,
                        self.scroll_y,
                        origin,
                    );
                    let hobby_rect = Self::to_screen(
                        views::hobbies::strip_rect(viewport.width),
                        hobby_y,
                        self.scroll_y,
                        origin,
                    );
                    let over_work = pointer.is_some_and(|p| work_rect.contains(p));
                    let over_hobby = pointer.is_some_and(|p| hobby_rect.contains(p));

                    if over_work && self.open_musing.is_none() {
                        let max = views::work::list_content_height() - views::work::LIST_HEIGHT;
                        self.work_scroll =
                            (self.work_scroll - f64::from(wheel.y)).clamp(0.0, max.max(0.0));
                    } else if over_hobby && self.open_musing.is_none() {
                        let max = views::hobbies::carousel_content_width() - viewport.width;
                        let delta = f64::from(wheel.x) + f64::from(wheel.y);
                        self.hobby_scroll =
                            (self.hobby_scroll - delta).clamp(0.0, max.max(0.0));
                    } else if self.open_musing.is_none() {
                        self.scroll_y =
                            (self.scroll_y - f64::from(wheel.y)).clamp(0.0, max_scroll);
                        self.scroll_target = None;
                    }
                }

                // Keyboard: Escape closes the overlay, arrows drive the
                // carousel when it is on screen.
                ui.input(|i| {
                    if i.key_pressed(egui::Key::Escape) {
                        self.open_musing = None;
                    }
                    if self.open_musing.is_none() {
                        let hobby_y =
                            layout.scroll_target(SectionId::Hobbies);
                        let on_screen = hobby_y - self.scroll_y < viewport.height
                            && hobby_y + views::hobbies::SECTION_HEIGHT > self.scroll_y;
                        if on_screen {
                            let max =
                                views::hobbies::carousel_content_width() - viewport.width;
                            if i.key_pressed(egui::Key::ArrowLeft) {
                                self.hobby_scroll =
                                    (self.hobby_scroll - CAROUSEL_STEP).clamp(0.0, max.max(0.0));
                            }
                            if i.key_pressed(egui::Key::ArrowRight) {
                                self.hobby_scroll =
                                    (self.hobby_scroll + CAROUSEL_STEP).clamp(0.0, max.max(0.0));
                            }
                        }
                    }
                });

                // Globe drag adds to the auto-rotation yaw.
                let skills_y = layout.scroll_target(SectionId::Skills);
                let skills_on_screen = skills_y - self.scroll_y < viewport.height
                    && skills_y + views::tech_globe::SECTION_HEIGHT > self.scroll_y;
                if skills_on_screen && self.open_musing.is_none() {
                    let dragging = ui.input(|i| i.pointer.primary_down());
                    if dragging {
                        let delta = ui.input(|i| i.pointer.delta());
                        self.globe_drag += f64::from(delta.x) * 0.005;
                    }
                }

                // Feed every tracker; change listeners run synchronously here.
                page.on_scroll(self.scroll_y, &viewport);
                page.on_work_scroll(self.work_scroll);
                page.on_hobby_scroll(self.hobby_scroll);

                // Start motion clocks for sections entering the viewport.
                self.clocks.entry("navbar".to_string()).or_insert(now);
                for slot in &layout.slots {
                    let visible = slot.y - self.scroll_y < viewport.height
                        && slot.y + slot.height > self.scroll_y;
                    if visible {
                        self.clocks
                            .entry(slot.id.anchor().to_string())
                            .or_insert(now);
                    }
                }
                if self.open_musing.is_some() {
                    self.clocks.entry("musing-overlay".to_string()).or_insert(now);
                } else {
                    self.clocks.remove("musing-overlay");
                }

                let interaction = Interaction {
                    hovered_node: self.hovered_node,
                    hovered_project: self.hovered_project,
                    work_scroll: self.work_scroll,
                    hobby_scroll: self.hobby_scroll,
                    active_day: self.active_day,
                    globe_yaw: now * GLOBE_SPIN + self.globe_drag,
                    pulse_phase: (now % PULSE_PERIOD) / PULSE_PERIOD,
                    open_musing: self.open_musing,
                };
                let rendered = page.render(&viewport, self.scroll_y, &interaction);

                let mut painter = ui.painter_at(available);
                painter.rect_filled(
                    available,
                    egui::CornerRadius::ZERO,
                    theme::resolve(ThemeToken::Background, self.theme_mode),
                );

                let page_result = renderer::render_commands(
                    &mut painter,
                    &rendered.page,
                    egui::pos2(origin.x, origin.y - self.scroll_y as f32),
                    self.theme_mode,
                    &self.clocks,
                    now,
                );
                let overlay_result = renderer::render_commands(
                    &mut painter,
                    &rendered.overlay,
                    origin,
                    self.theme_mode,
                    &self.clocks,
                    now,
                );

                // Hover resolution: overlay wins, then the topmost page hit.
                self.hovered_node = pointer.and_then(|p| {
                    overlay_result
                        .hit_regions
                        .iter()
                        .rev()
                        .chain(page_result.hit_regions.iter().rev())
                        .find(|hit| hit.rect.contains(p))
                        .map(|hit| hit.node_id)
                });
                self.hovered_project = self.hovered_node.and_then(|id| {
                    match IdSpace::decode(id) {
                        Some((IdSpace::ProjectRow, index)) => Some(index),
                        _ => None,
                    }
                });
                if self.hovered_node.is_some() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }

                // Clicks.
                let clicked = ui.input(|i| i.pointer.primary_clicked());
                if clicked {
                    if let Some(node) = self.hovered_node {
                        self.handle_click(node, &layout, ctx);
                    } else if self.open_musing.is_some() {
                        // Click on the backdrop closes the overlay.
                        let panel = views::musings::panel_rect(&viewport);
                        let panel_rect = egui::Rect::from_min_size(
                            egui::pos2(origin.x + panel.x as f32, origin.y + panel.y as f32),
                            egui::vec2(panel.w as f32, panel.h as f32),
                        );
                        if pointer.is_some_and(|p| !panel_rect.contains(p)) {
                            self.open_musing = None;
                        }
                    }
                }

                // Musing body: markdown laid out by egui inside the panel.
                if let Some(entry) = self
                    .open_musing
                    .and_then(|i| self.page.as_ref().and_then(|p| p.musings().get(i)))
                {
                    let body = views::musings::body_rect(&viewport);
                    let body_rect = egui::Rect::from_min_size(
                        egui::pos2(origin.x + body.x as f32, origin.y + body.y as f32),
                        egui::vec2(body.w as f32, body.h as f32),
                    );
                    let mode = self.theme_mode;
                    let text = entry.body.clone();
                    egui::Area::new(egui::Id::new("musing-body"))
                        .fixed_pos(body_rect.min)
                        .show(ctx, |ui| {
                            ui.set_max_width(body_rect.width());
                            egui::ScrollArea::vertical()
                                .max_height(body_rect.height())
                                .show(ui, |ui| {
                                    markdown::show(ui, &text, mode);
                                });
                        });
                }

                // Theme toggle pinned to the corner.
                let toggle = egui::Area::new(egui::Id::new("theme-toggle"))
                    .fixed_pos(egui::pos2(available.right() - 56.0, available.top() + 28.0));
                toggle.show(ctx, |ui| {
                    let label = match self.theme_mode {
                        ThemeMode::Dark => "☀",
                        ThemeMode::Light => "🌙",
                    };
                    if ui.button(label).clicked() {
                        self.theme_mode = match self.theme_mode {
                            ThemeMode::Dark => {
                                ctx.set_visuals(theme::folio_light_visuals());
                                ThemeMode::Light
                            }
                            ThemeMode::Light => {
                                ctx.set_visuals(theme::folio_dark_visuals());
                                ThemeMode::Dark
                            }
                        };
                    }
                });

                // The globe spins and the contact pulse breathes, so the
                // page repaints continuously regardless of settled motions.
                if page_result.animating || overlay_result.animating {
                    ctx.request_repaint();
                } else {
                    ctx.request_repaint_after(std::time::Duration::from_millis(16));
                }
            });
    }
}

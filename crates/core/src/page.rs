//! Page assembly: section layout, tracker wiring, and whole-page
//! rendering shared by every renderer (egui, terminal, wasm, SVG).

use folio_protocol::{Point, RenderCommand, Viewport};

use crate::model::musing::MusingError;
use crate::model::{MusingEntry, Region, RegionBounds, SectionId};
use crate::tracker::SectionTracker;
use crate::views::{self, IdSpace, SectionOutput};
use crate::{content, views::navbar};

/// One section's slot in the page flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSlot {
    pub id: SectionId,
    pub y: f64,
    pub height: f64,
}

/// Resolved vertical layout of the whole page for a given viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub slots: Vec<SectionSlot>,
    pub total_height: f64,
}

impl PageLayout {
    pub fn slot(&self, id: SectionId) -> Option<&SectionSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Scroll offset that brings `id` to the top of the viewport.
    pub fn scroll_target(&self, id: SectionId) -> f64 {
        self.slot(id).map_or(0.0, |s| s.y)
    }
}

/// Per-frame interaction state owned by the renderer: pointer hover,
/// container scroll offsets, clocks. The page turns this plus its
/// trackers into one command stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    pub hovered_node: Option<u64>,
    /// Project row under the pointer; overrides the list tracker.
    pub hovered_project: Option<usize>,
    pub work_scroll: f64,
    pub hobby_scroll: f64,
    pub active_day: usize,
    pub globe_yaw: f64,
    /// Contact pulse phase in `[0, 1)`.
    pub pulse_phase: f64,
    /// Open musing overlay, as an index into the sorted entries.
    pub open_musing: Option<usize>,
}

/// Output of a page render: the scrollable stream, the fixed overlay
/// stream (navbar, musing overlay), and the layout used.
pub struct PageRender {
    pub page: Vec<RenderCommand>,
    pub overlay: Vec<RenderCommand>,
    pub layout: PageLayout,
}

/// The composed portfolio page: static content plus one tracker per
/// scroll context (document nav, career timeline, project list, hobby
/// carousel).
pub struct Page {
    musings: Vec<MusingEntry>,
    nav: SectionTracker,
    career: SectionTracker,
    work_list: SectionTracker,
    hobby_carousel: SectionTracker,
}

impl Page {
    /// Build the page and register every region set. `viewport` is the
    /// initial window size; call [`Page::resize`] when it changes.
    pub fn new(viewport: &Viewport) -> Result<Self, MusingError> {
        let musings = content::musings::all()?;

        let mut nav = SectionTracker::document();
        nav.register(SectionId::ALL.into_iter().map(|s| Region::new(s.anchor())));

        let mut career = SectionTracker::document_windowed(viewport.height);
        career.register(views::career::region_ids().into_iter().map(Region::new));

        let mut work_list = SectionTracker::container(views::work::LIST_HEIGHT);
        work_list.register(views::work::region_ids().into_iter().map(Region::new));

        let mut hobby_carousel = SectionTracker::container(viewport.width);
        hobby_carousel.register(views::hobbies::region_ids().into_iter().map(Region::new));

        Ok(Self {
            musings,
            nav,
            career,
            work_list,
            hobby_carousel,
        })
    }

    pub fn musings(&self) -> &[MusingEntry] {
        &self.musings
    }

    /// Section layout for the given viewport.
    pub fn layout(&self, viewport: &Viewport) -> PageLayout {
        let heights = [
            (SectionId::Hero, viewport.height),
            (SectionId::About, views::about::SECTION_HEIGHT),
            (SectionId::Experience, views::career::section_height()),
            (SectionId::Work, views::work::SECTION_HEIGHT),
            (SectionId::Skills, views::tech_globe::SECTION_HEIGHT),
            (SectionId::Hobbies, views::hobbies::SECTION_HEIGHT),
            (
                SectionId::Musings,
                views::musings::section_height(self.musings.len()),
            ),
            (SectionId::Contact, views::contact::SECTION_HEIGHT),
        ];
        let mut slots = Vec::with_capacity(heights.len());
        let mut y = 0.0;
        for (id, height) in heights {
            slots.push(SectionSlot { id, y, height });
            y += height;
        }
        PageLayout {
            slots,
            total_height: y,
        }
    }

    /// Propagate a viewport change to every extent-dependent tracker.
    pub fn resize(&mut self, viewport: &Viewport) {
        self.career.resize(viewport.height);
        self.hobby_carousel.resize(viewport.width);
    }

    /// Feed the document scroll position to the nav and career trackers.
    /// Runs synchronously; listeners registered on the trackers fire
    /// inside this call.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport: &Viewport) {
        let layout = self.layout(viewport);

        let slots = layout.slots.clone();
        self.nav.evaluate(&move |id: &str| {
            let slot = slots.iter().find(|s| s.id.anchor() == id)?;
            Some(RegionBounds::new(
                slot.y - scroll_y,
                slot.y + slot.height - scroll_y,
            ))
        });

        let career_y = layout.scroll_target(SectionId::Experience);
        let width = viewport.width;
        let ids = views::career::region_ids();
        self.career.evaluate(&move |id: &str| {
            let index = ids.iter().position(|r| r == id)?;
            let rect = views::career::item_rect(width, index);
            let top = career_y + rect.y - scroll_y;
            Some(RegionBounds::new(top, top + rect.h))
        });
    }

    /// Feed the project list's container scroll offset to its tracker.
    pub fn on_work_scroll(&mut self, list_scroll: f64) {
        let ids = views::work::region_ids();
        self.work_list.evaluate(&move |id: &str| {
            let index = ids.iter().position(|r| r == id)?;
            Some(views::work::row_bounds(index, list_scroll))
        });
    }

    /// Feed the hobby carousel's horizontal offset to its tracker.
    pub fn on_hobby_scroll(&mut self, scroll_x: f64) {
        let ids = views::hobbies::region_ids();
        self.hobby_carousel.evaluate(&move |id: &str| {
            let index = ids.iter().position(|r| r == id)?;
            Some(views::hobbies::card_bounds(index, scroll_x))
        });
    }

    pub fn active_section(&self) -> Option<&str> {
        self.nav.active()
    }

    pub fn active_experience(&self) -> Option<usize> {
        self.career.active_index()
    }

    /// Active project row: pointer hover wins over the scroll tracker.
    pub fn active_project(&self, interaction: &Interaction) -> usize {
        interaction
            .hovered_project
            .or_else(|| self.work_list.active_index())
            .unwrap_or(0)
    }

    pub fn active_hobby(&self) -> Option<usize> {
        self.hobby_carousel.active_index()
    }

    /// Mutable tracker access for subscribing change listeners.
    pub fn nav_tracker_mut(&mut self) -> &mut SectionTracker {
        &mut self.nav
    }

    /// Render the whole page plus its fixed overlays.
    pub fn render(&self, viewport: &Viewport, scroll_y: f64, ix: &Interaction) -> PageRender {
        let layout = self.layout(viewport);
        let width = viewport.width;
        let hovered_marker = ix.hovered_node.and_then(|id| match IdSpace::decode(id) {
            Some((IdSpace::GlobeMarker, index)) => Some(index),
            _ => None,
        });
        let hovered_contact = ix.hovered_node.and_then(|id| match IdSpace::decode(id) {
            Some((IdSpace::ContactNode, index)) => Some(index),
            _ => None,
        });

        let mut page = Vec::with_capacity(2048);
        for slot in &layout.slots {
            let output: SectionOutput = match slot.id {
                SectionId::Hero => views::hero::render(width, viewport.height),
                SectionId::About => views::about::render(width),
                SectionId::Experience => {
                    views::career::render(width, self.active_experience())
                }
                SectionId::Work => {
                    views::work::render(width, self.active_project(ix), ix.work_scroll)
                }
                SectionId::Skills => views::tech_globe::render(width, ix.globe_yaw, hovered_marker),
                SectionId::Hobbies => views::hobbies::render(
                    width,
                    ix.hobby_scroll,
                    self.active_hobby(),
                    ix.active_day,
                ),
                SectionId::Musings => views::musings::render(width, &self.musings),
                SectionId::Contact => views::contact::render(width, hovered_contact, ix.pulse_phase),
            };
            page.push(RenderCommand::PushTransform {
                translate: Point::new(0.0, slot.y),
                scale: Point::new(1.0, 1.0),
            });
            page.extend(output.commands);
            page.push(RenderCommand::PopTransform);
        }

        let mut overlay = navbar::render(width, scroll_y, self.active_section());
        if let Some(entry) = ix.open_musing.and_then(|i| self.musings.get(i)) {
            overlay.extend(views::musings::render_overlay(viewport, entry));
        }

        PageRender {
            page,
            overlay,
            layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::sized(1280.0, 800.0)
    }

    #[test]
    fn layout_stacks_sections_contiguously() {
        let page = Page::new(&viewport()).unwrap();
        let layout = page.layout(&viewport());
        assert_eq!(layout.slots.len(), SectionId::ALL.len());
        let mut expected_y = 0.0;
        for slot in &layout.slots {
            assert_eq!(slot.y, expected_y);
            expected_y += slot.height;
        }
        assert_eq!(layout.total_height, expected_y);
    }

    #[test]
    fn scroll_drives_nav_active_section() {
        let mut page = Page::new(&viewport()).unwrap();
        page.on_scroll(0.0, &viewport());
        assert_eq!(page.active_section(), Some("hero"));

        let about_y = page.layout(&viewport()).scroll_target(SectionId::About);
        page.on_scroll(about_y, &viewport());
        assert_eq!(page.active_section(), Some("about"));
    }

    #[test]
    fn render_emits_one_transform_pair_per_section() {
        let page = Page::new(&viewport()).unwrap();
        let out = page.render(&viewport(), 0.0, &Interaction::default());
        let pushes = out
            .page
            .iter()
            .filter(|c| matches!(c, RenderCommand::PushTransform { .. }))
            .count();
        let pops = out
            .page
            .iter()
            .filter(|c| matches!(c, RenderCommand::PopTransform))
            .count();
        // Sections plus the work list's and hobby strip's inner scrolls.
        assert_eq!(pushes, pops);
        assert!(pushes >= SectionId::ALL.len());
    }

    #[test]
    fn overlay_holds_navbar_and_optional_musing() {
        let page = Page::new(&viewport()).unwrap();
        let closed = page.render(&viewport(), 0.0, &Interaction::default());
        let open = page.render(
            &viewport(),
            0.0,
            &Interaction {
                open_musing: Some(0),
                ..Interaction::default()
            },
        );
        assert!(open.overlay.len() > closed.overlay.len());
    }
}

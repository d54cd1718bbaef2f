//! View transforms: pure functions from content + layout + interaction
//! state to render command lists. No animation runs here — enter effects
//! are attached as declarative [`folio_protocol::Motion`] groups and
//! evaluated by whichever renderer consumes the stream.

pub mod about;
pub mod career;
pub mod contact;
pub mod hero;
pub mod hobbies;
pub mod musings;
pub mod navbar;
pub mod tech_globe;
pub mod work;

use folio_protocol::RenderCommand;

// ── Typography scale (logical pixels) ──────────────────────────────────

pub const FONT_DISPLAY: f64 = 72.0;
pub const FONT_HEADING: f64 = 48.0;
pub const FONT_TITLE: f64 = 26.0;
pub const FONT_EMPHASIS: f64 = 18.0;
pub const FONT_BODY: f64 = 14.0;
pub const FONT_CAPTION: f64 = 11.0;
pub const FONT_TINY: f64 = 9.0;

/// A rendered section: its command list plus the vertical space it
/// occupies in the page flow.
#[derive(Debug, Clone)]
pub struct SectionOutput {
    pub commands: Vec<RenderCommand>,
    pub height: f64,
}

/// Hit-test identifier spaces. Every interactive element gets a
/// `node_id` of `space | index`, so renderers can route clicks and
/// hovers back to the right view without string lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSpace {
    NavLink,
    ProjectRow,
    GlobeMarker,
    HobbyDayTab,
    MusingCard,
    ContactNode,
}

impl IdSpace {
    const fn base(self) -> u64 {
        match self {
            IdSpace::NavLink => 0x1000,
            IdSpace::ProjectRow => 0x2000,
            IdSpace::GlobeMarker => 0x3000,
            IdSpace::HobbyDayTab => 0x4000,
            IdSpace::MusingCard => 0x5000,
            IdSpace::ContactNode => 0x6000,
        }
    }

    pub fn id(self, index: usize) -> u64 {
        self.base() + index as u64
    }

    /// Reverse an id back into its space and index.
    pub fn decode(id: u64) -> Option<(IdSpace, usize)> {
        const SPACES: [IdSpace; 6] = [
            IdSpace::NavLink,
            IdSpace::ProjectRow,
            IdSpace::GlobeMarker,
            IdSpace::HobbyDayTab,
            IdSpace::MusingCard,
            IdSpace::ContactNode,
        ];
        SPACES
            .into_iter()
            .rev()
            .find(|s| id >= s.base())
            .map(|s| (s, (id - s.base()) as usize))
    }
}

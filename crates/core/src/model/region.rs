use folio_protocol::SharedStr;
use serde::{Deserialize, Serialize};

/// A named, boundable area of content tracked for "is it in view".
///
/// Regions are registered once per tracker; their ordering index is their
/// position in the registration list and their identity never changes for
/// the life of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: SharedStr,
}

impl Region {
    pub fn new(id: impl Into<SharedStr>) -> Self {
        Self { id: id.into() }
    }
}

/// Measured edge positions of a region, relative to the top (or, for
/// horizontal containers, the leading edge) of its scroll context's
/// viewport. Negative values mean the edge has scrolled past.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl RegionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// The scrollable surface a tracker is bound to.
///
/// Each tracker instance is bound to exactly one scroll context for its
/// lifetime. Containers carry their visible extent so fractional
/// thresholds can be resolved; the extent may change on resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrollContext {
    /// The whole page scrolls.
    Document,
    /// A nested scrollable element with the given visible extent
    /// (height for vertical containers, width for horizontal ones).
    Container { extent: f64 },
}

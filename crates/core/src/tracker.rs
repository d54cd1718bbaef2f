//! Scroll-synchronized active-section tracking.
//!
//! One tracker instance per scroll context: the navbar tracks the page's
//! top-level sections, the career timeline its entries, the project list
//! and the hobbies carousel the items inside their own scrollable
//! containers. The tracker only computes active-state; styling and
//! animation of the active region live in the view transforms.

use folio_protocol::SharedStr;

use crate::model::{Region, RegionBounds, ScrollContext};

/// Reference line offset from the viewport top for whole-document tracking.
pub const DOCUMENT_REFERENCE_OFFSET: f64 = 100.0;
/// A region enters when its top crosses this fraction of the extent...
pub const WINDOW_ENTER_FRACTION: f64 = 0.6;
/// ...and leaves once its bottom crosses this fraction on the way out.
pub const WINDOW_EXIT_FRACTION: f64 = 0.4;

/// How a measured region qualifies as a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationPolicy {
    /// Candidate iff `top <= offset <= bottom`.
    ReferenceLine { offset: f64 },
    /// Candidate iff `top <= enter_fraction * extent` and
    /// `bottom >= exit_fraction * extent`. The two distinct thresholds
    /// give activation hysteresis: an edge sitting exactly on one line
    /// cannot toggle the region in and out on consecutive passes.
    Window {
        enter_fraction: f64,
        exit_fraction: f64,
    },
}

/// Supplies region geometry at evaluation time.
///
/// Injected by the caller so the tracker never reaches into ambient
/// page state; a closure over a layout table is enough for tests.
/// Returning `None` means the region cannot be measured yet (not
/// mounted, zero-sized) — it is skipped without error.
pub trait RegionRuler {
    fn measure(&self, id: &str) -> Option<RegionBounds>;
}

impl<F> RegionRuler for F
where
    F: Fn(&str) -> Option<RegionBounds>,
{
    fn measure(&self, id: &str) -> Option<RegionBounds> {
        self(id)
    }
}

// Send so a tracker (and the page holding it) can sit behind a Mutex in
// hosts that keep one global instance; evaluation itself never leaves
// the calling thread.
type ChangeListener = Box<dyn FnMut(&SharedStr) + Send>;

/// Tracks which of an ordered set of regions is "in focus" for one
/// scroll context, and notifies subscribers when that changes.
pub struct SectionTracker {
    context: ScrollContext,
    policy: ActivationPolicy,
    regions: Vec<Region>,
    active: Option<SharedStr>,
    listeners: Vec<ChangeListener>,
}

impl SectionTracker {
    /// Whole-document tracker with the fixed reference line.
    pub fn document() -> Self {
        Self::new(
            ScrollContext::Document,
            ActivationPolicy::ReferenceLine {
                offset: DOCUMENT_REFERENCE_OFFSET,
            },
        )
    }

    /// Whole-document tracker with the dual-threshold window, as used by
    /// the career timeline (thresholds are fractions of the viewport).
    pub fn document_windowed(viewport_extent: f64) -> Self {
        Self::new(
            ScrollContext::Container {
                extent: viewport_extent,
            },
            ActivationPolicy::Window {
                enter_fraction: WINDOW_ENTER_FRACTION,
                exit_fraction: WINDOW_EXIT_FRACTION,
            },
        )
    }

    /// Nested-container tracker with the dual-threshold window.
    pub fn container(extent: f64) -> Self {
        Self::new(
            ScrollContext::Container { extent },
            ActivationPolicy::Window {
                enter_fraction: WINDOW_ENTER_FRACTION,
                exit_fraction: WINDOW_EXIT_FRACTION,
            },
        )
    }

    pub fn new(context: ScrollContext, policy: ActivationPolicy) -> Self {
        Self {
            context,
            policy,
            regions: Vec::new(),
            active: None,
            listeners: Vec::new(),
        }
    }

    /// Establish the tracked set. Call once per tracker, before the first
    /// `evaluate`.
    ///
    /// Duplicate identifiers are a caller error; the last registration
    /// wins so behavior stays deterministic. Debug builds assert, release
    /// builds log and drop the earlier entry.
    pub fn register(&mut self, regions: impl IntoIterator<Item = Region>) {
        for region in regions {
            if let Some(pos) = self.regions.iter().position(|r| r.id == region.id) {
                debug_assert!(false, "duplicate region id: {}", region.id);
                log::warn!(
                    "duplicate region id {:?} registered; keeping the later one",
                    region.id.as_str()
                );
                self.regions.remove(pos);
            }
            self.regions.push(region);
        }
    }

    /// Subscribe to active-region changes. Callbacks run synchronously
    /// inside `evaluate`, on the thread that called it, and only when the
    /// active region actually changed — keep them short.
    pub fn on_change(&mut self, listener: impl FnMut(&SharedStr) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Update the container extent after a resize. No-op for document
    /// reference-line trackers.
    pub fn resize(&mut self, extent: f64) {
        if let ScrollContext::Container { extent: e } = &mut self.context {
            *e = extent;
        }
    }

    /// One synchronous pass over the registered regions.
    ///
    /// Measures every region through `ruler`, selects the first candidate
    /// in registration order, and retains the previous active region when
    /// nothing qualifies (sticky — prevents a flicker to "none" in the
    /// gaps between regions).
    pub fn evaluate(&mut self, ruler: &impl RegionRuler) {
        let mut winner: Option<SharedStr> = None;
        for region in &self.regions {
            let Some(bounds) = ruler.measure(&region.id) else {
                continue;
            };
            if self.is_candidate(bounds) {
                winner = Some(region.id.clone());
                break;
            }
        }

        let Some(next) = winner else {
            return;
        };
        if self.active.as_ref() == Some(&next) {
            return;
        }
        self.active = Some(next.clone());
        for listener in &mut self.listeners {
            listener(&next);
        }
    }

    /// The currently active region id, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Registration index of the active region, for views that key off
    /// position rather than id.
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.regions.iter().position(|r| &r.id == active)
    }

    pub fn context(&self) -> ScrollContext {
        self.context
    }

    fn is_candidate(&self, bounds: RegionBounds) -> bool {
        match self.policy {
            ActivationPolicy::ReferenceLine { offset } => {
                bounds.top <= offset && bounds.bottom >= offset
            }
            ActivationPolicy::Window {
                enter_fraction,
                exit_fraction,
            } => {
                let extent = match self.context {
                    ScrollContext::Container { extent } => extent,
                    // A windowed policy over the raw document has no
                    // extent to scale; treat fractions as absolute.
                    ScrollContext::Document => 1.0,
                };
                bounds.top <= enter_fraction * extent && bounds.bottom >= exit_fraction * extent
            }
        }
    }
}

impl std::fmt::Debug for SectionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionTracker")
            .field("context", &self.context)
            .field("policy", &self.policy)
            .field("regions", &self.regions.len())
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;

    fn regions(ids: &[&str]) -> Vec<Region> {
        ids.iter().map(|id| Region::new(*id)).collect()
    }

    fn ruler(table: HashMap<&'static str, RegionBounds>) -> impl RegionRuler {
        move |id: &str| table.get(id).copied()
    }

    #[test]
    fn single_containing_region_wins() {
        let mut tracker = SectionTracker::document();
        tracker.register(regions(&["about", "experience", "work"]));
        tracker.evaluate(&ruler(HashMap::from([
            ("about", RegionBounds::new(-900.0, -100.0)),
            ("experience", RegionBounds::new(-100.0, 700.0)),
            ("work", RegionBounds::new(700.0, 1500.0)),
        ])));
        assert_eq!(tracker.active(), Some("experience"));
    }

    #[test]
    fn first_registered_wins_among_overlapping_candidates() {
        // Two sections straddling the reference line: scan order decides.
        let mut tracker = SectionTracker::document();
        tracker.register(regions(&["about", "experience"]));
        tracker.evaluate(&ruler(HashMap::from([
            ("about", RegionBounds::new(0.0, 400.0)),
            ("experience", RegionBounds::new(50.0, 900.0)),
        ])));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn no_candidate_retains_previous() {
        let mut tracker = SectionTracker::document();
        tracker.register(regions(&["about", "work"]));
        tracker.evaluate(&ruler(HashMap::from([(
            "about",
            RegionBounds::new(50.0, 600.0),
        )])));
        assert_eq!(tracker.active(), Some("about"));

        // Scrolled into a gap between sections: nothing contains the line.
        tracker.evaluate(&ruler(HashMap::from([
            ("about", RegionBounds::new(-700.0, -200.0)),
            ("work", RegionBounds::new(300.0, 1100.0)),
        ])));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn no_candidate_on_first_call_stays_none() {
        let mut tracker = SectionTracker::document();
        tracker.register(regions(&["about"]));
        tracker.evaluate(&ruler(HashMap::from([(
            "about",
            RegionBounds::new(500.0, 900.0),
        )])));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn unmeasurable_region_is_skipped_silently() {
        let mut tracker = SectionTracker::document();
        tracker.register(regions(&["ghost", "about"]));
        // "ghost" has no geometry yet; the next region still activates.
        tracker.evaluate(&ruler(HashMap::from([(
            "about",
            RegionBounds::new(0.0, 500.0),
        )])));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn change_listener_fires_only_on_transitions() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::default();
        let sink = Arc::clone(&seen);

        let mut tracker = SectionTracker::document();
        tracker.register(regions(&["about", "work"]));
        tracker.on_change(move |id| {
            if let Ok(mut log) = sink.lock() {
                log.push(id.to_string());
            }
        });

        let about_active = ruler(HashMap::from([
            ("about", RegionBounds::new(0.0, 500.0)),
            ("work", RegionBounds::new(500.0, 1200.0)),
        ]));
        tracker.evaluate(&about_active);
        tracker.evaluate(&about_active);
        tracker.evaluate(&ruler(HashMap::from([
            ("about", RegionBounds::new(-500.0, 0.0)),
            ("work", RegionBounds::new(0.0, 700.0)),
        ])));

        let log = seen.lock().unwrap_or_else(|e| e.into_inner());
        assert_eq!(*log, vec!["about".to_string(), "work".to_string()]);
    }

    #[test]
    fn window_policy_uses_both_thresholds() {
        // 600-tall container: enter line at 360, exit line at 240.
        let mut tracker = SectionTracker::container(600.0);
        tracker.register(regions(&["p1", "p2"]));

        // Item top below the enter line: not yet a candidate.
        tracker.evaluate(&ruler(HashMap::from([
            ("p1", RegionBounds::new(400.0, 650.0)),
            ("p2", RegionBounds::new(650.0, 900.0)),
        ])));
        assert_eq!(tracker.active(), None);

        // Top crosses 360: p1 activates.
        tracker.evaluate(&ruler(HashMap::from([
            ("p1", RegionBounds::new(300.0, 550.0)),
            ("p2", RegionBounds::new(550.0, 800.0)),
        ])));
        assert_eq!(tracker.active(), Some("p1"));
    }

    #[test]
    fn hysteresis_holds_until_exit_threshold() {
        let mut tracker = SectionTracker::container(600.0);
        tracker.register(regions(&["p1", "p2"]));

        // Activate p1 via the entry threshold.
        tracker.evaluate(&ruler(HashMap::from([
            ("p1", RegionBounds::new(350.0, 600.0)),
            ("p2", RegionBounds::new(600.0, 850.0)),
        ])));
        assert_eq!(tracker.active(), Some("p1"));

        // Scroll back: p1's top drops past the entry line again, but its
        // bottom is still above the exit line and nothing else
        // qualifies, so it stays active.
        tracker.evaluate(&ruler(HashMap::from([
            ("p1", RegionBounds::new(380.0, 630.0)),
            ("p2", RegionBounds::new(630.0, 880.0)),
        ])));
        assert_eq!(tracker.active(), Some("p1"));

        // Scroll forward until p1's bottom passes the exit line while
        // p2's top passes the entry line: the hand-off happens.
        tracker.evaluate(&ruler(HashMap::from([
            ("p1", RegionBounds::new(-30.0, 220.0)),
            ("p2", RegionBounds::new(220.0, 470.0)),
        ])));
        assert_eq!(tracker.active(), Some("p2"));
    }

    #[test]
    fn resize_moves_the_thresholds() {
        let mut tracker = SectionTracker::container(600.0);
        tracker.register(regions(&["p1"]));
        let bounds = ruler(HashMap::from([("p1", RegionBounds::new(400.0, 700.0))]));
        tracker.evaluate(&bounds);
        assert_eq!(tracker.active(), None);

        // Taller container: the enter line moves down past the item top.
        tracker.resize(800.0);
        tracker.evaluate(&bounds);
        assert_eq!(tracker.active(), Some("p1"));
    }

    #[test]
    fn last_registered_wins_on_duplicate_id() {
        let mut tracker = SectionTracker::document();
        // Duplicate registration asserts in debug builds; this test
        // documents the release-mode policy.
        if cfg!(debug_assertions) {
            return;
        }
        tracker.register(regions(&["about", "work", "about"]));
        // The surviving "about" sits at the end of the scan order, so
        // "work" is reached first when both qualify.
        tracker.evaluate(&ruler(HashMap::from([
            ("about", RegionBounds::new(0.0, 800.0)),
            ("work", RegionBounds::new(50.0, 900.0)),
        ])));
        assert_eq!(tracker.active(), Some("work"));
    }

    #[test]
    fn active_index_follows_registration_order() {
        let mut tracker = SectionTracker::document();
        tracker.register(regions(&["a", "b", "c"]));
        tracker.evaluate(&ruler(HashMap::from([
            ("a", RegionBounds::new(-500.0, -200.0)),
            ("b", RegionBounds::new(-200.0, 90.0)),
            ("c", RegionBounds::new(90.0, 600.0)),
        ])));
        assert_eq!(tracker.active(), Some("c"));
        assert_eq!(tracker.active_index(), Some(2));
    }
}

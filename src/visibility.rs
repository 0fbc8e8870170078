//! Viewport intersection tracking
//!
//! A single-threaded stand-in for the browser's IntersectionObserver:
//!
//! - `IntersectionObserver::observe` registers a callback for a region and
//!   returns an [`Observation`]. Dropping the observation unregisters it.
//! - The host calls `report` once per layout frame with the viewport and the
//!   rects of the regions it laid out, in layout order.
//! - A registration is notified on its first report and afterwards only when
//!   `ratio >= threshold` flips.
//!
//! Callbacks run after the registry borrow is released, so a callback may
//! observe, drop observations, or read other trackers. A registration that is
//! torn down while a frame is being dispatched is not called again, even if
//! it already had a pending notification in that frame.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use folio_types::SectionId;

use crate::error::{FolioError, Result};
use crate::geometry::{intersection_ratio, Rect};

// =============================================================================
// THRESHOLD
// =============================================================================

/// Fraction of a region's area that must be inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    pub fn new(value: f32) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FolioError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// A zero threshold still requires some overlap
    pub fn is_met(self, ratio: f32) -> bool {
        if self.0 == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.0
        }
    }
}

// =============================================================================
// REGION ID
// =============================================================================

/// Name of an observed region
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionId(Cow<'static, str>);

impl RegionId {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The section this region stands for, if it is one
    pub fn section(&self) -> Option<SectionId> {
        SectionId::from_anchor(&self.0)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for RegionId {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for RegionId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<SectionId> for RegionId {
    fn from(section: SectionId) -> Self {
        Self(Cow::Borrowed(section.anchor()))
    }
}

impl From<&RegionId> for RegionId {
    fn from(region: &RegionId) -> Self {
        region.clone()
    }
}

// =============================================================================
// OBSERVER
// =============================================================================

/// What a callback receives when a region crosses its threshold
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub region: RegionId,
    pub ratio: f32,
    pub is_intersecting: bool,
}

type Callback = Rc<RefCell<dyn FnMut(&IntersectionEntry)>>;

struct Registration {
    key: u64,
    region: RegionId,
    threshold: Threshold,
    /// Last notified state, `None` until the first report
    last: Option<bool>,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_key: u64,
    registrations: Vec<Registration>,
}

impl Registry {
    fn contains(&self, key: u64) -> bool {
        self.registrations.iter().any(|r| r.key == key)
    }

    /// Roll back a state change whose notification could not be delivered
    fn restore(&mut self, key: u64, undelivered: bool, previous: Option<bool>) {
        if let Some(registration) = self
            .registrations
            .iter_mut()
            .find(|r| r.key == key && r.last == Some(undelivered))
        {
            registration.last = previous;
        }
    }

    fn remove(&mut self, key: u64) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.key != key);
        self.registrations.len() != before
    }
}

/// Shared handle to the intersection registry of one page
#[derive(Clone, Default)]
pub struct IntersectionObserver {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for IntersectionObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntersectionObserver")
            .field("observations", &self.observation_count())
            .finish()
    }
}

impl IntersectionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `region`. The callback fires on the next report that
    /// includes the region, then on every threshold crossing.
    pub fn observe<F>(
        &self,
        region: impl Into<RegionId>,
        threshold: Threshold,
        callback: F,
    ) -> Observation
    where
        F: FnMut(&IntersectionEntry) + 'static,
    {
        let region = region.into();
        let mut registry = self.registry.borrow_mut();
        let key = registry.next_key;
        registry.next_key += 1;
        registry.registrations.push(Registration {
            key,
            region: region.clone(),
            threshold,
            last: None,
            callback: Rc::new(RefCell::new(callback)),
        });
        tracing::debug!(region = %region, threshold = threshold.value(), "observe");

        Observation {
            registry: Rc::downgrade(&self.registry),
            key,
            region,
        }
    }

    /// Report one layout frame. Regions are processed in iteration order, so
    /// when several regions cross in the same frame the last one notifies
    /// last.
    pub fn report<R, I>(&self, viewport: Rect, regions: I)
    where
        R: Into<RegionId>,
        I: IntoIterator<Item = (R, Rect)>,
    {
        let mut pending: Vec<(u64, Option<bool>, Callback, IntersectionEntry)> = Vec::new();
        {
            let mut registry = self.registry.borrow_mut();
            for (region, rect) in regions {
                let region = region.into();
                let ratio = intersection_ratio(&rect, &viewport);
                for registration in registry
                    .registrations
                    .iter_mut()
                    .filter(|r| r.region == region)
                {
                    let is_intersecting = registration.threshold.is_met(ratio);
                    if registration.last == Some(is_intersecting) {
                        continue;
                    }
                    let previous = registration.last.replace(is_intersecting);
                    pending.push((
                        registration.key,
                        previous,
                        registration.callback.clone(),
                        IntersectionEntry {
                            region: region.clone(),
                            ratio,
                            is_intersecting,
                        },
                    ));
                }
            }
        }

        for (key, previous, callback, entry) in pending {
            if !self.registry.borrow().contains(key) {
                continue;
            }
            let delivered = match callback.try_borrow_mut() {
                Ok(mut callback) => {
                    (*callback)(&entry);
                    true
                }
                Err(_) => false,
            };
            // The callback is still running further up the stack; leave the
            // state undelivered so the next report notifies it
            if !delivered {
                tracing::warn!(region = %entry.region, "re-entrant report skipped");
                self.registry
                    .borrow_mut()
                    .restore(key, entry.is_intersecting, previous);
            }
        }
    }

    /// Stop every observation at once. Outstanding `Observation` handles
    /// become inert.
    pub fn disconnect(&self) {
        let mut registry = self.registry.borrow_mut();
        tracing::debug!(count = registry.registrations.len(), "disconnect all");
        registry.registrations.clear();
    }

    pub fn observation_count(&self) -> usize {
        self.registry.borrow().registrations.len()
    }

    pub fn is_observing(&self, region: &RegionId) -> bool {
        self.registry
            .borrow()
            .registrations
            .iter()
            .any(|r| &r.region == region)
    }
}

/// Disposer for one observation; dropping it ends the observation
#[must_use = "dropping an Observation stops observing immediately"]
pub struct Observation {
    registry: Weak<RefCell<Registry>>,
    key: u64,
    region: RegionId,
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation")
            .field("region", &self.region)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Observation {
    pub fn region(&self) -> &RegionId {
        &self.region
    }

    /// False once dropped from the registry (e.g. after `disconnect`)
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.borrow().contains(self.key))
            .unwrap_or(false)
    }

    /// Explicit teardown, same as dropping
    pub fn disconnect(self) {}
}

impl Drop for Observation {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let busy = registry.try_borrow_mut();
        match busy {
            Ok(mut registry) => {
                if registry.remove(self.key) {
                    tracing::debug!(region = %self.region, "unobserve");
                }
            }
            Err(_) => {
                tracing::error!(region = %self.region, "registry busy during unobserve");
            }
        };
    }
}

// =============================================================================
// VISIBILITY TRACKER
// =============================================================================

/// Live "is this region in view" flag for one region
///
/// Observation starts at construction and ends when the tracker is dropped.
#[derive(Debug)]
pub struct VisibilityTracker {
    visible: Rc<Cell<bool>>,
    reveals: Rc<Cell<u32>>,
    observation: Observation,
}

impl VisibilityTracker {
    pub fn new(
        observer: &IntersectionObserver,
        region: impl Into<RegionId>,
        threshold: Threshold,
    ) -> Self {
        let visible = Rc::new(Cell::new(false));
        let reveals = Rc::new(Cell::new(0));

        let observation = {
            let visible = visible.clone();
            let reveals = reveals.clone();
            observer.observe(region, threshold, move |entry| {
                if entry.is_intersecting && !visible.get() {
                    reveals.set(reveals.get() + 1);
                }
                visible.set(entry.is_intersecting);
            })
        };

        Self {
            visible,
            reveals,
            observation,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// How many times the region has entered the viewport
    pub fn reveal_count(&self) -> u32 {
        self.reveals.get()
    }

    pub fn region(&self) -> &RegionId {
        self.observation.region()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_origin_size(0.0, 0.0, 1000.0, 800.0)
    }

    /// 400px tall region whose top sits at `top` in viewport coordinates
    fn region_at(top: f32) -> Rect {
        Rect::from_origin_size(0.0, top, 1000.0, 400.0)
    }

    fn threshold() -> Threshold {
        Threshold::new(0.3).unwrap()
    }

    #[test]
    fn test_threshold_range() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert!(matches!(
            Threshold::new(-0.1),
            Err(FolioError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_zero_threshold_needs_overlap() {
        let t = Threshold::new(0.0).unwrap();
        assert!(!t.is_met(0.0));
        assert!(t.is_met(0.01));
    }

    #[test]
    fn test_first_report_notifies_initial_state() {
        let observer = IntersectionObserver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _obs = {
            let seen = seen.clone();
            observer.observe("photo", threshold(), move |e| {
                seen.borrow_mut().push(e.is_intersecting)
            })
        };

        observer.report(viewport(), [("photo", region_at(2000.0))]);
        observer.report(viewport(), [("photo", region_at(1900.0))]);

        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn test_notifies_once_per_crossing() {
        let observer = IntersectionObserver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _obs = {
            let seen = seen.clone();
            observer.observe("photo", threshold(), move |e| {
                seen.borrow_mut().push(e.is_intersecting)
            })
        };

        // 400px region: 30% = 120px visible, i.e. top <= 680
        for top in [900.0, 700.0, 680.0, 600.0, 300.0, 681.0, 750.0, 500.0] {
            observer.report(viewport(), [("photo", region_at(top))]);
        }

        assert_eq!(*seen.borrow(), vec![false, true, false, true]);
    }

    #[test]
    fn test_unreported_region_keeps_state() {
        let observer = IntersectionObserver::new();
        let tracker = VisibilityTracker::new(&observer, "photo", threshold());

        observer.report(viewport(), [("photo", region_at(100.0))]);
        observer.report(viewport(), std::iter::empty::<(RegionId, Rect)>());

        assert!(tracker.is_visible());
    }

    #[test]
    fn test_tracker_never_in_view_stays_hidden() {
        let observer = IntersectionObserver::new();
        let tracker = VisibilityTracker::new(&observer, "photo", threshold());

        for top in [5000.0, 4000.0, 3000.0, 900.0, 801.0] {
            observer.report(viewport(), [("photo", region_at(top))]);
            assert!(!tracker.is_visible());
        }
        assert_eq!(tracker.reveal_count(), 0);
    }

    #[test]
    fn test_tracker_counts_reveals() {
        let observer = IntersectionObserver::new();
        let tracker = VisibilityTracker::new(&observer, "photo", threshold());

        for top in [900.0, 200.0, 100.0, 900.0, 200.0] {
            observer.report(viewport(), [("photo", region_at(top))]);
        }

        assert!(tracker.is_visible());
        assert_eq!(tracker.reveal_count(), 2);
    }

    #[test]
    fn test_drop_stops_callbacks() {
        let observer = IntersectionObserver::new();
        let calls = Rc::new(Cell::new(0));
        let obs = {
            let calls = calls.clone();
            observer.observe("photo", threshold(), move |_| calls.set(calls.get() + 1))
        };

        observer.report(viewport(), [("photo", region_at(100.0))]);
        drop(obs);
        observer.report(viewport(), [("photo", region_at(2000.0))]);

        assert_eq!(calls.get(), 1);
        assert_eq!(observer.observation_count(), 0);
    }

    #[test]
    fn test_teardown_during_dispatch_suppresses_pending_callback() {
        let observer = IntersectionObserver::new();
        let victim_calls = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<Observation>>> = Rc::new(RefCell::new(None));

        let _killer = {
            let victim = victim.clone();
            observer.observe("a", threshold(), move |_| {
                victim.borrow_mut().take();
            })
        };
        *victim.borrow_mut() = Some({
            let calls = victim_calls.clone();
            observer.observe("b", threshold(), move |_| calls.set(calls.get() + 1))
        });

        observer.report(viewport(), [("a", region_at(0.0)), ("b", region_at(0.0))]);

        assert_eq!(victim_calls.get(), 0);
        assert_eq!(observer.observation_count(), 1);
    }

    #[test]
    fn test_callback_may_observe_new_region() {
        let observer = IntersectionObserver::new();
        let spawned: Rc<RefCell<Vec<Observation>>> = Rc::new(RefCell::new(Vec::new()));

        let _root = {
            let observer = observer.clone();
            let spawned = spawned.clone();
            observer.clone().observe("a", threshold(), move |_| {
                spawned
                    .borrow_mut()
                    .push(observer.observe("late", threshold(), |_| {}));
            })
        };

        observer.report(viewport(), [("a", region_at(0.0))]);
        assert!(observer.is_observing(&RegionId::from("late")));
    }

    #[test]
    fn test_nested_report_from_callback_is_redelivered() {
        let observer = IntersectionObserver::new();
        let visible = Rc::new(Cell::new(false));

        // On its first reveal the callback re-reports the region off-screen
        // while it is itself still running
        let _obs = {
            let inner = observer.clone();
            let visible = visible.clone();
            let fired = Cell::new(false);
            observer.observe("photo", threshold(), move |e| {
                visible.set(e.is_intersecting);
                if e.is_intersecting && !fired.replace(true) {
                    inner.report(viewport(), [("photo", region_at(2000.0))]);
                }
            })
        };

        observer.report(viewport(), [("photo", region_at(0.0))]);
        assert!(visible.get());

        observer.report(viewport(), [("photo", region_at(2000.0))]);
        assert!(!visible.get());
    }

    #[test]
    fn test_disconnect_makes_handles_inert() {
        let observer = IntersectionObserver::new();
        let obs = observer.observe("a", threshold(), |_| {});
        assert!(obs.is_active());

        observer.disconnect();
        assert!(!obs.is_active());
        drop(obs);
        assert_eq!(observer.observation_count(), 0);
    }

    #[test]
    fn test_observation_outliving_observer_is_harmless() {
        let observer = IntersectionObserver::new();
        let obs = observer.observe("a", threshold(), |_| {});
        drop(observer);
        assert!(!obs.is_active());
        obs.disconnect();
    }

    #[test]
    fn test_independent_trackers_same_region() {
        let observer = IntersectionObserver::new();
        let loose = VisibilityTracker::new(&observer, "about", Threshold::new(0.1).unwrap());
        let strict = VisibilityTracker::new(&observer, "about", Threshold::new(0.9).unwrap());

        // 50% visible
        observer.report(viewport(), [("about", region_at(600.0))]);

        assert!(loose.is_visible());
        assert!(!strict.is_visible());
    }

    #[test]
    fn test_region_id_from_section() {
        let region = RegionId::from(SectionId::Projects);
        assert_eq!(region.as_str(), "projects");
        assert_eq!(region.section(), Some(SectionId::Projects));
        assert_eq!(RegionId::from("photo").section(), None);
    }
}

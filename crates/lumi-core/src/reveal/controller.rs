//! Region registry and reveal state machine

use std::collections::HashMap;

use tracing::debug;

use super::{compute_progress, Region, RevealState};

/// Callback invoked whenever a region's [`RevealState`] changes.
pub type Listener = Box<dyn FnMut(&RevealState)>;

/// Subscription handle returned by [`ScrollRevealController::register`].
///
/// Handles stay valid until unregistered; a handle for a removed region
/// silently ignores further events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHandle(u64);

struct Entry {
    region: Region,
    state: RevealState,
    listener: Listener,
    /// False for regions that failed observation setup and were revealed
    /// immediately; their state never changes again.
    observed: bool,
}

/// Owns every registered region and its reveal state for the lifetime of
/// one app. Single-threaded: the host event loop serializes all calls.
#[derive(Default)]
pub struct ScrollRevealController {
    entries: HashMap<u64, Entry>,
    next_id: u64,
}

impl ScrollRevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins observing `region`, notifying `listener` on every state
    /// change. Registration never fails: a bounds provider that errors or
    /// reports degenerate geometry gets revealed on the spot instead of
    /// observed.
    pub fn register(
        &mut self,
        region: Region,
        listener: impl FnMut(&RevealState) + 'static,
    ) -> RegionHandle {
        let id = self.next_id;
        self.next_id += 1;

        let mut state = RevealState::hidden(region.id.clone());
        let mut listener: Listener = Box::new(listener);

        let observed = match (region.bounds)() {
            Ok(rect) if !rect.is_degenerate() => true,
            Ok(rect) => {
                debug!(region = %region.id, height = rect.height, "degenerate bounds, revealing immediately");
                false
            }
            Err(err) => {
                debug!(region = %region.id, %err, "bounds unavailable, revealing immediately");
                false
            }
        };
        if !observed {
            state.visible = true;
            state.progress = 1.0;
            listener(&state);
        }

        self.entries.insert(
            id,
            Entry {
                region,
                state,
                listener,
                observed,
            },
        );
        RegionHandle(id)
    }

    /// Stops observing and drops the listener. Idempotent.
    pub fn unregister(&mut self, handle: RegionHandle) {
        self.entries.remove(&handle.0);
    }

    pub fn state(&self, handle: RegionHandle) -> Option<&RevealState> {
        self.entries.get(&handle.0).map(|entry| &entry.state)
    }

    /// Feeds an intersection ratio for one region. Latches `visible` the
    /// first time the ratio reaches the region's threshold; later calls
    /// (and calls for unregistered handles) are no-ops.
    pub fn on_intersection(&mut self, handle: RegionHandle, ratio: f64) {
        let Some(entry) = self.entries.get_mut(&handle.0) else {
            return;
        };
        if !entry.observed || entry.state.visible {
            return;
        }
        if ratio >= entry.region.threshold {
            entry.state.visible = true;
            (entry.listener)(&entry.state);
        }
    }

    /// Recomputes `progress` for every parallax region from its bounds
    /// provider. Non-parallax regions keep their last progress; listeners
    /// only fire when the value actually moved.
    pub fn on_scroll(&mut self, viewport_height: f64) {
        for entry in self.entries.values_mut() {
            if !entry.observed || !entry.region.parallax {
                continue;
            }
            let rect = match (entry.region.bounds)() {
                Ok(rect) => rect,
                Err(err) => {
                    debug!(region = %entry.region.id, %err, "bounds lost mid-scroll");
                    continue;
                }
            };
            let progress = compute_progress(rect.top, viewport_height);
            if (progress - entry.state.progress).abs() > f64::EPSILON {
                entry.state.progress = progress;
                (entry.listener)(&entry.state);
            }
        }
    }

    /// Fail-open entry for hosts whose intersection primitive is missing
    /// or broken: reveals the region permanently, as if it had latched.
    pub fn mark_visible(&mut self, handle: RegionHandle) {
        let Some(entry) = self.entries.get_mut(&handle.0) else {
            return;
        };
        if entry.state.visible {
            return;
        }
        entry.state.visible = true;
        entry.state.progress = 1.0;
        entry.observed = false;
        (entry.listener)(&entry.state);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Rect;
    use crate::{CoreError, CoreResult};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<RevealState>>>, impl FnMut(&RevealState)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |state: &RevealState| {
            sink.borrow_mut().push(state.clone())
        })
    }

    fn on_screen(id: &str) -> Region {
        Region::fixed(id, Rect::new(400.0, 600.0))
    }

    #[test]
    fn test_latch_fires_once_at_threshold() {
        let mut controller = ScrollRevealController::new();
        let (seen, listener) = recorder();
        let handle = controller.register(on_screen("hero").with_threshold(0.25), listener);

        controller.on_intersection(handle, 0.1);
        assert!(!controller.state(handle).unwrap().visible);

        controller.on_intersection(handle, 0.25);
        assert!(controller.state(handle).unwrap().visible);

        controller.on_intersection(handle, 0.9);
        controller.on_intersection(handle, 0.0);
        assert!(controller.state(handle).unwrap().visible);
        assert_eq!(seen.borrow().len(), 1, "latch must notify exactly once");
    }

    #[test]
    fn test_visible_never_reverts() {
        let mut controller = ScrollRevealController::new();
        let (_, listener) = recorder();
        let handle = controller.register(on_screen("hero").with_threshold(0.2), listener);

        controller.on_intersection(handle, 0.5);
        for ratio in [0.0, 0.01, 0.19] {
            controller.on_intersection(handle, ratio);
            assert!(controller.state(handle).unwrap().visible);
        }
    }

    #[test]
    fn test_zero_threshold_latches_on_any_ratio() {
        let mut controller = ScrollRevealController::new();
        let (_, listener) = recorder();
        let handle = controller.register(on_screen("badge").with_threshold(0.0), listener);

        controller.on_intersection(handle, 0.0);
        assert!(controller.state(handle).unwrap().visible);
    }

    #[test]
    fn test_unregister_silences_events() {
        let mut controller = ScrollRevealController::new();
        let (seen, listener) = recorder();
        let handle = controller.register(on_screen("cards").with_parallax(), listener);

        controller.unregister(handle);
        controller.unregister(handle);
        controller.on_intersection(handle, 1.0);
        controller.on_scroll(1000.0);

        assert!(controller.state(handle).is_none());
        assert!(seen.borrow().is_empty());
        assert!(controller.is_empty());
    }

    #[test]
    fn test_reregister_starts_fresh_latch() {
        let mut controller = ScrollRevealController::new();
        let (_, listener) = recorder();
        let first = controller.register(on_screen("pricing"), listener);
        controller.on_intersection(first, 1.0);
        assert!(controller.state(first).unwrap().visible);
        controller.unregister(first);

        let (_, listener) = recorder();
        let second = controller.register(on_screen("pricing"), listener);
        assert_ne!(first, second);
        assert!(!controller.state(second).unwrap().visible);
    }

    #[test]
    fn test_degenerate_bounds_fail_open() {
        let mut controller = ScrollRevealController::new();
        let (seen, listener) = recorder();
        let handle = controller.register(Region::fixed("empty", Rect::new(0.0, 0.0)), listener);

        let state = controller.state(handle).unwrap();
        assert!(state.visible);
        assert_eq!(state.progress, 1.0);
        assert_eq!(seen.borrow().len(), 1);

        // fail-open regions stay inert afterwards
        controller.on_intersection(handle, 1.0);
        controller.on_scroll(1000.0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_failing_provider_fails_open() {
        let mut controller = ScrollRevealController::new();
        let (_, listener) = recorder();
        let bounds = Box::new(|| -> CoreResult<Rect> {
            Err(CoreError::Bounds("node detached".into()))
        });
        let handle = controller.register(Region::new("ghost", bounds), listener);
        assert!(controller.state(handle).unwrap().visible);
    }

    #[test]
    fn test_scroll_updates_parallax_regions_only() {
        let mut controller = ScrollRevealController::new();
        let (moving_seen, listener) = recorder();
        let moving = controller.register(
            Region::fixed("features", Rect::new(800.0, 600.0)).with_parallax(),
            listener,
        );
        let (static_seen, listener) = recorder();
        let fixed = controller.register(Region::fixed("hero", Rect::new(800.0, 600.0)), listener);

        controller.on_scroll(1000.0);
        assert_eq!(controller.state(moving).unwrap().progress, 0.2);
        assert_eq!(controller.state(fixed).unwrap().progress, 0.0);
        assert_eq!(moving_seen.borrow().len(), 1);
        assert!(static_seen.borrow().is_empty());

        // same geometry again: no notification
        controller.on_scroll(1000.0);
        assert_eq!(moving_seen.borrow().len(), 1);
    }

    #[test]
    fn test_scroll_progress_tracks_moving_bounds() {
        let mut controller = ScrollRevealController::new();
        let top = Rc::new(RefCell::new(1000.0_f64));
        let shared = Rc::clone(&top);
        let bounds = Box::new(move || -> CoreResult<Rect> {
            Ok(Rect::new(*shared.borrow(), 500.0))
        });
        let (_, listener) = recorder();
        let handle = controller.register(Region::new("story", bounds).with_parallax(), listener);

        for (scrolled_to, expected) in [(1000.0, 0.0), (500.0, 0.5), (0.0, 1.0), (-300.0, 1.0)] {
            *top.borrow_mut() = scrolled_to;
            controller.on_scroll(1000.0);
            assert_eq!(controller.state(handle).unwrap().progress, expected);
        }
    }

    #[test]
    fn test_mark_visible_notifies_once() {
        let mut controller = ScrollRevealController::new();
        let (seen, listener) = recorder();
        let handle = controller.register(on_screen("contact"), listener);

        controller.mark_visible(handle);
        controller.mark_visible(handle);
        let state = controller.state(handle).unwrap();
        assert!(state.visible);
        assert_eq!(state.progress, 1.0);
        assert_eq!(seen.borrow().len(), 1);
    }
}

//! Scroll-triggered reveal engine
//!
//! Tracks registered page regions and decides, per region, whether it has
//! entered the viewport (a one-shot reveal latch) and how far it has
//! scrolled into view (a continuous progress ratio used for parallax
//! interpolation). The controller is host-agnostic: the UI crates feed it
//! intersection ratios and scroll ticks, and read back [`RevealState`].

mod controller;

pub use controller::{RegionHandle, ScrollRevealController};

use serde::Serialize;

use crate::CoreResult;

/// Intersection ratio a region must reach before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Viewport-relative geometry of a region, as reported by its bounds
/// provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Distance from the viewport top to the region top, in pixels.
    /// Negative once the region has scrolled past.
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Geometry the controller refuses to observe: unlaid-out or detached
    /// nodes report zero (or nonsensical) heights.
    pub fn is_degenerate(&self) -> bool {
        !self.top.is_finite() || !self.height.is_finite() || self.height <= 0.0
    }
}

/// Supplies a region's current geometry on demand. Providers that cannot
/// measure (detached node, no layout yet) return an error; the controller
/// treats that as fail-open.
pub type BoundsProvider = Box<dyn Fn() -> CoreResult<Rect>>;

/// A UI area tracked for scroll-triggered reveal. Built once when the
/// section mounts and handed to [`ScrollRevealController::register`].
pub struct Region {
    /// Diagnostic label; handles, not ids, identify registrations.
    pub id: String,
    /// Intersection ratio in `[0, 1]` at which the reveal latch fires.
    pub threshold: f64,
    /// Whether scroll ticks should keep updating `progress`.
    pub parallax: bool,
    pub bounds: BoundsProvider,
}

impl Region {
    pub fn new(id: impl Into<String>, bounds: BoundsProvider) -> Self {
        Self {
            id: id.into(),
            threshold: DEFAULT_THRESHOLD,
            parallax: false,
            bounds,
        }
    }

    /// Region pinned to fixed geometry. Mostly useful for tests and demos.
    pub fn fixed(id: impl Into<String>, rect: Rect) -> Self {
        Self::new(id, Box::new(move || Ok(rect)))
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_parallax(mut self) -> Self {
        self.parallax = true;
        self
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("id", &self.id)
            .field("threshold", &self.threshold)
            .field("parallax", &self.parallax)
            .finish_non_exhaustive()
    }
}

/// Per-region output of the controller. Read-only to consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealState {
    pub region_id: String,
    /// One-shot latch: once true it never reverts for this registration.
    pub visible: bool,
    /// How far the region has scrolled into view, in `[0, 1]`.
    pub progress: f64,
}

impl RevealState {
    pub fn hidden(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            visible: false,
            progress: 0.0,
        }
    }

    /// Fully shown, as if the region had completed its reveal. Used for
    /// fail-open paths and server-side rendering.
    pub fn revealed(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            visible: true,
            progress: 1.0,
        }
    }
}

/// How far a region has scrolled into the viewport, clamped to `[0, 1]`.
///
/// `0.0` while the region top is still below the fold, `1.0` once the top
/// reaches the viewport top. This is the sole numeric algorithm in the
/// engine; everything visual interpolates from it.
pub fn compute_progress(rect_top: f64, viewport_height: f64) -> f64 {
    if !rect_top.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / viewport_height).clamp(0.0, 1.0)
}

/// Remaining translate-Y in pixels for a parallax section: slides from
/// 50px below its resting place to 0 as progress reaches 1.
pub fn parallax_offset(progress: f64) -> f64 {
    (1.0 - progress.clamp(0.0, 1.0)) * 50.0
}

/// Opacity ramp for a parallax section; floored so sections never vanish
/// entirely while on screen.
pub fn parallax_opacity(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0).max(0.3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reference_points() {
        assert_eq!(compute_progress(800.0, 1000.0), 0.2);
        assert_eq!(compute_progress(0.0, 1000.0), 1.0);
        assert_eq!(compute_progress(1200.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(compute_progress(-5000.0, 1000.0), 1.0);
        assert_eq!(compute_progress(f64::INFINITY, 1000.0), 0.0);
        assert_eq!(compute_progress(100.0, 0.0), 0.0);
        assert_eq!(compute_progress(100.0, -1.0), 0.0);
    }

    #[test]
    fn test_progress_monotonic_as_region_rises() {
        let mut last = 0.0;
        let mut top = 1400.0;
        while top >= -200.0 {
            let progress = compute_progress(top, 900.0);
            assert!(progress >= last, "progress regressed at top={top}");
            last = progress;
            top -= 25.0;
        }
    }

    #[test]
    fn test_parallax_interpolation() {
        assert_eq!(parallax_offset(0.0), 50.0);
        assert_eq!(parallax_offset(1.0), 0.0);
        assert_eq!(parallax_offset(2.0), 0.0);
        assert_eq!(parallax_opacity(0.0), 0.3);
        assert_eq!(parallax_opacity(0.1), 0.3);
        assert_eq!(parallax_opacity(0.8), 0.8);
    }

    #[test]
    fn test_degenerate_rects() {
        assert!(Rect::new(10.0, 0.0).is_degenerate());
        assert!(Rect::new(10.0, -4.0).is_degenerate());
        assert!(Rect::new(f64::NAN, 100.0).is_degenerate());
        assert!(!Rect::new(-40.0, 100.0).is_degenerate());
    }

    #[test]
    fn test_region_builder_clamps_threshold() {
        let region = Region::fixed("hero", Rect::new(0.0, 500.0)).with_threshold(1.7);
        assert_eq!(region.threshold, 1.0);
        let region = Region::fixed("hero", Rect::new(0.0, 500.0)).with_threshold(-0.2);
        assert_eq!(region.threshold, 0.0);
    }
}

//! Scroll state for the page document.
//!
//! A page lays out as a single column of rows (the "document"); the viewport
//! shows a window of it. Scrolling is either immediate (wheel, keys) or an
//! eased glide toward an anchor target. Visibility of a document region is
//! reported as a fraction of its rows inside the viewport, which drives the
//! reveal-on-scroll and arm-on-visible behaviors.

use std::time::{Duration, Instant};

/// How long an anchor glide takes from start to rest.
pub const SCROLL_EASE: Duration = Duration::from_millis(400);

/// Fraction of a region's rows that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Rows shaved off the viewport bottom when judging reveal visibility, so
/// elements reveal slightly after entering rather than at the very edge.
pub const REVEAL_BOTTOM_MARGIN: u16 = 2;

/// A vertical span of the document, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: u16,
    pub height: u16,
}

impl Region {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Fraction of `region` inside the viewport `[scroll, scroll + view_height)`,
/// with `bottom_margin` rows excluded from the viewport bottom edge.
///
/// Returns a value in `0.0..=1.0`. Zero-height regions are never visible.
pub fn visible_fraction(region: Region, scroll: f32, view_height: u16, bottom_margin: u16) -> f32 {
    if region.height == 0 || view_height == 0 {
        return 0.0;
    }
    let view_top = scroll;
    let view_bottom = scroll + f32::from(view_height.saturating_sub(bottom_margin));
    let top = f32::from(region.top);
    let bottom = f32::from(region.bottom());
    let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
    (overlap / f32::from(region.height)).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// An in-flight glide from one scroll offset to another.
#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Glide {
    fn at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    fn done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Scroll offset over a document, clamped to the scrollable range.
#[derive(Debug)]
pub struct Viewport {
    scroll: f32,
    view_height: u16,
    doc_height: u16,
    glide: Option<Glide>,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            scroll: 0.0,
            view_height: 0,
            doc_height: 0,
            glide: None,
        }
    }

    /// Record the current document and viewport heights, clamping the offset
    /// if the document shrank (accordion collapse, resize).
    pub fn set_extent(&mut self, doc_height: u16, view_height: u16) {
        self.doc_height = doc_height;
        self.view_height = view_height;
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
    }

    pub fn max_scroll(&self) -> f32 {
        f32::from(self.doc_height.saturating_sub(self.view_height))
    }

    /// Current offset as a whole row for rendering.
    pub fn scroll_row(&self) -> u16 {
        self.scroll.round().clamp(0.0, f32::from(u16::MAX)) as u16
    }

    pub fn offset(&self) -> f32 {
        self.scroll
    }

    pub fn view_height(&self) -> u16 {
        self.view_height
    }

    /// Immediate scroll by a signed number of rows. Cancels any glide.
    pub fn scroll_by(&mut self, delta: f32) {
        self.glide = None;
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll());
    }

    pub fn jump_top(&mut self) {
        self.glide = None;
        self.scroll = 0.0;
    }

    pub fn jump_bottom(&mut self) {
        self.glide = None;
        self.scroll = self.max_scroll();
    }

    /// Begin an eased glide that puts `target_top` at the top of the viewport
    /// (or as close as the scrollable range allows).
    pub fn glide_to(&mut self, target_top: u16, now: Instant) {
        let to = f32::from(target_top).clamp(0.0, self.max_scroll());
        self.glide = Some(Glide {
            from: self.scroll,
            to,
            started: now,
            duration: SCROLL_EASE,
        });
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Advance any in-flight glide to `now`.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(glide) = self.glide {
            self.scroll = glide.at(now).clamp(0.0, self.max_scroll());
            if glide.done(now) {
                self.glide = None;
            }
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot visibility trigger: fires the first time the observed fraction
/// reaches the threshold and never again.
#[derive(Debug, Clone, Copy)]
pub struct FractionGate {
    threshold: f32,
    fired: bool,
}

impl FractionGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Returns `true` exactly once, on the first observation at or above the
    /// threshold.
    pub fn observe(&mut self, fraction: f32) -> bool {
        if self.fired || fraction < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fraction_stays_in_unit_range(
            top in 0u16..500,
            height in 0u16..200,
            scroll in 0.0f32..500.0,
            view in 0u16..200,
            margin in 0u16..10,
        ) {
            let f = visible_fraction(Region::new(top, height), scroll, view, margin);
            prop_assert!((0.0..=1.0).contains(&f), "fraction out of range: {f}");
        }

        #[test]
        fn widening_the_margin_never_increases_visibility(
            top in 0u16..500,
            height in 1u16..200,
            scroll in 0.0f32..500.0,
            view in 1u16..200,
            margin in 0u16..20,
        ) {
            let region = Region::new(top, height);
            let tighter = visible_fraction(region, scroll, view, margin);
            let looser = visible_fraction(region, scroll, view, margin + 1);
            prop_assert!(looser <= tighter + 1e-6);
        }

        #[test]
        fn scrolling_never_leaves_the_document_range(
            doc in 0u16..2000,
            view in 0u16..200,
            deltas in proptest::collection::vec(-50.0f32..50.0, 0..20),
        ) {
            let mut vp = Viewport::new();
            vp.set_extent(doc, view);
            for d in deltas {
                vp.scroll_by(d);
                prop_assert!(vp.offset() >= 0.0);
                prop_assert!(vp.offset() <= vp.max_scroll());
            }
        }
    }
}

//! Scroll progress through one page section.
//!
//! The tracker is fed the section's viewport-relative bounding rectangle and
//! the viewport height. It reports how far the viewport has travelled through
//! the section: 0 before the section's top edge enters the viewport, 1 once its
//! bottom edge has left through the top.

use super::constants::NAV_SCROLLED_THRESHOLD_PX;

/// Viewport-relative vertical extent of a section, as read from
/// `getBoundingClientRect()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub bottom: f32,
}

impl SectionRect {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Normalized progress through a section, always within [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    /// Clamp `value` into [0, 1]. NaN maps to 0.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Compute how far the viewport has advanced through `rect`.
pub fn section_progress(rect: SectionRect, viewport_height: f32) -> ScrollProgress {
    if rect.top > viewport_height {
        return ScrollProgress::START;
    }
    if rect.bottom < 0.0 {
        return ScrollProgress::END;
    }
    let height = rect.height();
    if height <= 0.0 {
        return ScrollProgress::START;
    }
    let visible = rect.bottom.min(viewport_height) - rect.top.max(0.0);
    ScrollProgress::new(1.0 - visible / height)
}

/// Whether the page is scrolled far enough for the compact nav bar.
#[inline]
pub fn nav_is_scrolled(scroll_y: f32) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

/// Latest progress for one named section.
///
/// `sample` replaces the stored value; `None` (section not mounted) keeps the
/// previous one.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    section_id: &'static str,
    progress: ScrollProgress,
}

impl ScrollTracker {
    pub fn new(section_id: &'static str) -> Self {
        Self {
            section_id,
            progress: ScrollProgress::START,
        }
    }

    #[inline]
    pub fn section_id(&self) -> &'static str {
        self.section_id
    }

    #[inline]
    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    pub fn sample(&mut self, rect: Option<SectionRect>, viewport_height: f32) -> ScrollProgress {
        if let Some(rect) = rect {
            self.progress = section_progress(rect, viewport_height);
        }
        self.progress
    }
}

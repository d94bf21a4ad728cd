//! Scroll viewport for a scrollable grid.
//!
//! Holds the scroll position of a measured grid. The offset is always kept
//! within `0..=max_offset`, where `max_offset` is how far the content
//! overhangs the viewport.

use cranpose_grid_layout::{Point, Rect, Size};

/// Smallest thumb the scroll indicator shrinks to.
const MIN_INDICATOR_LENGTH: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollViewport {
    viewport: Size,
    content: Size,
    offset: f32,
    show_indicators: bool,
}

impl ScrollViewport {
    pub fn new(viewport: Size, content: Size, show_indicators: bool) -> Self {
        Self {
            viewport,
            content,
            offset: 0.0,
            show_indicators,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content(&self) -> Size {
        self.content
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn shows_indicators(&self) -> bool {
        self.show_indicators
    }

    /// Maximum scroll value (content height - viewport height).
    pub fn max_offset(&self) -> f32 {
        (self.content.height - self.viewport.height).max(0.0)
    }

    pub fn can_scroll(&self) -> bool {
        self.max_offset() > 0.0
    }

    /// Scrolls by `delta` pixels and returns the part of it that was consumed.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let previous = self.offset;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
        self.offset - previous
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// Scrolls the least amount needed to bring `rect` fully into view.
    pub fn scroll_into_view(&mut self, rect: Rect) {
        if rect.y < self.offset {
            self.scroll_to(rect.y);
        } else if rect.bottom() > self.offset + self.viewport.height {
            self.scroll_to(rect.bottom() - self.viewport.height);
        }
    }

    /// The part of the content currently on screen, in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(0.0, self.offset), self.viewport)
    }

    pub fn is_visible(&self, rect: &Rect) -> bool {
        self.visible_rect().intersects(rect)
    }

    /// Thumb of the vertical indicator in viewport coordinates, along the
    /// trailing edge. `None` when indicators are hidden or nothing overflows.
    pub fn indicator_rect(&self, thickness: f32) -> Option<Rect> {
        if !self.show_indicators || !self.can_scroll() || self.viewport.height <= 0.0 {
            return None;
        }
        let track = self.viewport.height;
        let length = (track * track / self.content.height)
            .max(MIN_INDICATOR_LENGTH)
            .min(track);
        let progress = self.offset / self.max_offset();
        let y = (track - length) * progress;
        Some(Rect::new(
            self.viewport.width - thickness,
            y,
            thickness,
            length,
        ))
    }
}

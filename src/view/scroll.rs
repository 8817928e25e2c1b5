//! Scroll ranges and viewport position.
//!
//! [`ScrollRangeCalculator`] derives the scrollbar ranges from file length,
//! window size and cell metrics. [`ViewportController`] owns the current
//! scroll position and keeps it inside those ranges.

use crate::app::{Invalidate, ScrollAxis, ScrollUnit, ViewMode, WindowGeometry};
use crate::config::{HorizontalExtent, Metrics, ViewerConfig, GROUP_SIZE};
use crate::view::line::line_width;

// =============================================================================
// Ranges
// =============================================================================

/// Scrollbar range for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRange {
    pub min: usize,
    pub max: usize,
    /// Units covered by one page.
    pub page: usize,
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: 0,
            page: 1,
        }
    }
}

impl ScrollRange {
    /// Clamp `position` into `[min, max]`.
    pub fn clamp(&self, position: usize) -> usize {
        position.clamp(self.min, self.max.max(self.min))
    }
}

/// Ranges for both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrollRanges {
    pub vertical: ScrollRange,
    pub horizontal: ScrollRange,
}

impl ScrollRanges {
    pub fn axis(&self, axis: ScrollAxis) -> ScrollRange {
        match axis {
            ScrollAxis::Vertical => self.vertical,
            ScrollAxis::Horizontal => self.horizontal,
        }
    }
}

/// Pure derivation of [`ScrollRanges`].
#[derive(Clone, Copy, Debug)]
pub struct ScrollRangeCalculator {
    metrics: Metrics,
    vertical_inset_px: u32,
    horizontal_extent: HorizontalExtent,
}

impl ScrollRangeCalculator {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            metrics: config.metrics,
            vertical_inset_px: config.vertical_inset_px,
            horizontal_extent: config.horizontal_extent,
        }
    }

    /// Ranges for a file of `length` bytes shown in `mode` inside `geometry`.
    pub fn compute(&self, length: usize, mode: ViewMode, geometry: WindowGeometry) -> ScrollRanges {
        let usable_height = geometry.height_px.saturating_sub(self.vertical_inset_px);
        let vertical = ScrollRange {
            min: 0,
            max: length / GROUP_SIZE,
            page: ((usable_height / self.metrics.line_height_px) as usize).max(1),
        };

        let horizontal_max = match self.horizontal_extent {
            HorizontalExtent::Fixed(bound) => bound,
            HorizontalExtent::WidestLine if length == 0 => 0,
            HorizontalExtent::WidestLine => line_width(mode, length.min(GROUP_SIZE)),
        };
        let horizontal = ScrollRange {
            min: 0,
            max: horizontal_max,
            page: (geometry.width_px / self.metrics.char_width_px) as usize,
        };

        ScrollRanges {
            vertical,
            horizontal,
        }
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// Current scroll position and cell metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    /// Index of the first visible line.
    pub scroll_line: usize,
    /// Number of columns scrolled to the right.
    pub scroll_column: usize,
    pub line_height_px: u32,
    pub char_width_px: u32,
}

impl ViewportState {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            scroll_line: 0,
            scroll_column: 0,
            line_height_px: metrics.line_height_px,
            char_width_px: metrics.char_width_px,
        }
    }
}

/// Scroll state machine over [`ViewportState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportController {
    state: ViewportState,
    ranges: ScrollRanges,
}

impl ViewportController {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            state: ViewportState::new(metrics),
            ranges: ScrollRanges::default(),
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn ranges(&self) -> &ScrollRanges {
        &self.ranges
    }

    /// Current position on `axis`.
    pub fn position(&self, axis: ScrollAxis) -> usize {
        match axis {
            ScrollAxis::Vertical => self.state.scroll_line,
            ScrollAxis::Horizontal => self.state.scroll_column,
        }
    }

    fn position_mut(&mut self, axis: ScrollAxis) -> &mut usize {
        match axis {
            ScrollAxis::Vertical => &mut self.state.scroll_line,
            ScrollAxis::Horizontal => &mut self.state.scroll_column,
        }
    }

    /// Apply a scroll request, clamping the result into the axis range.
    pub fn scroll(&mut self, axis: ScrollAxis, unit: ScrollUnit) -> Invalidate {
        let range = self.ranges.axis(axis);
        let old = self.position(axis);
        let target = match unit {
            ScrollUnit::LineUp => old.saturating_sub(1),
            ScrollUnit::LineDown => old.saturating_add(1),
            ScrollUnit::PageUp => old.saturating_sub(range.page),
            ScrollUnit::PageDown => old.saturating_add(range.page),
            ScrollUnit::Home => range.min,
            ScrollUnit::End => range.max,
            ScrollUnit::Absolute(position) => position,
        };
        let new = range.clamp(target);
        if new == old {
            return Invalidate::None;
        }

        *self.position_mut(axis) = new;
        tracing::debug!(?axis, ?unit, old, new, "Scrolled");
        Invalidate::Full
    }

    /// Install ranges for a new window size. Positions beyond the new
    /// maximum are pulled back; others stay put.
    pub fn resize(&mut self, ranges: ScrollRanges) -> Invalidate {
        self.ranges = ranges;
        self.state.scroll_line = ranges.vertical.clamp(self.state.scroll_line);
        self.state.scroll_column = ranges.horizontal.clamp(self.state.scroll_column);
        Invalidate::Full
    }

    /// Install ranges for a freshly loaded file and return to the origin.
    pub fn reset(&mut self, ranges: ScrollRanges) -> Invalidate {
        self.ranges = ranges;
        self.state.scroll_line = 0;
        self.state.scroll_column = 0;
        Invalidate::Full
    }
}

//! Viewport rendering.
//!
//! [`Renderer`] walks the lines visible from the current scroll position and
//! yields one [`DrawText`] per line. It carries no state between paints: a
//! new renderer is built for every paint request.

use std::iter::FusedIterator;

use crate::app::{DrawText, ViewMode, WindowGeometry};
use crate::config::{ViewerConfig, GROUP_SIZE};
use crate::view::line::format_line;
use crate::view::scroll::ViewportState;

/// Lazy sequence of draw instructions for one paint.
#[derive(Clone, Debug)]
pub struct Renderer<'a> {
    data: &'a [u8],
    mode: ViewMode,
    /// Byte offset of the next line.
    offset: usize,
    x: i32,
    /// Top of the next line.
    y: i64,
    line_height: i64,
    bottom: i64,
}

impl<'a> Renderer<'a> {
    pub fn new(
        data: &'a [u8],
        viewport: &ViewportState,
        mode: ViewMode,
        geometry: WindowGeometry,
        config: &ViewerConfig,
    ) -> Self {
        let scroll_px = viewport.scroll_column as i64 * i64::from(viewport.char_width_px);
        let x = i64::from(config.left_margin_px) - scroll_px;

        Self {
            data,
            mode,
            offset: viewport.scroll_line.saturating_mul(GROUP_SIZE),
            x: saturate_i32(x),
            y: i64::from(config.top_margin_px),
            line_height: i64::from(viewport.line_height_px.max(1)),
            bottom: i64::from(geometry.height_px),
        }
    }
}

impl Iterator for Renderer<'_> {
    type Item = DrawText;

    fn next(&mut self) -> Option<DrawText> {
        if self.offset >= self.data.len() || self.y >= self.bottom {
            return None;
        }

        let text = format_line(self.data, self.offset, self.mode);
        let item = DrawText {
            x: self.x,
            y: saturate_i32(self.y),
            text,
        };

        self.offset = self.offset.saturating_add(GROUP_SIZE);
        self.y += self.line_height;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.offset >= self.data.len() || self.y >= self.bottom {
            return (0, Some(0));
        }
        let by_bytes = (self.data.len() - self.offset).div_ceil(GROUP_SIZE);
        let by_height = ((self.bottom - self.y) as u64).div_ceil(self.line_height as u64);
        let upper = by_bytes.min(usize::try_from(by_height).unwrap_or(usize::MAX));
        (upper, Some(upper))
    }
}

impl FusedIterator for Renderer<'_> {}

fn saturate_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

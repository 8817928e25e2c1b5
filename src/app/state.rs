//! Viewer state aggregate and event dispatch.

use std::path::Path;

use super::types::{
    Invalidate, ScrollAxis, ScrollUnit, TextSink, ViewMode, ViewerEvent, WindowGeometry,
};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::source::{ByteSource, FileReader, FsReader};
use crate::util::format_bytes;
use crate::view::{line_count, Renderer, ScrollRangeCalculator, ScrollRanges, ViewportController};

// =============================================================================
// ViewerState
// =============================================================================

/// Everything a paint depends on, owned in one place.
///
/// The loaded bytes, view mode and scroll position only change together
/// through [`ViewerState::dispatch`], so a paint always sees a consistent
/// generation of all three.
pub struct ViewerState {
    config: ViewerConfig,
    calculator: ScrollRangeCalculator,
    reader: Box<dyn FileReader>,
    /// Currently loaded file, if any.
    source: Option<ByteSource>,
    mode: ViewMode,
    viewport: ViewportController,
    geometry: WindowGeometry,
}

impl ViewerState {
    /// Create a viewer that reads files from disk.
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_reader(config, Box::new(FsReader))
    }

    /// Create a viewer that reads files through `reader`.
    pub fn with_reader(config: ViewerConfig, reader: Box<dyn FileReader>) -> Self {
        let calculator = ScrollRangeCalculator::new(&config);
        let geometry = config.initial_geometry;
        let mut viewport = ViewportController::new(config.metrics);
        viewport.reset(calculator.compute(0, ViewMode::default(), geometry));

        Self {
            config,
            calculator,
            reader,
            source: None,
            mode: ViewMode::default(),
            viewport,
            geometry,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&ByteSource> {
        self.source.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn ranges(&self) -> &ScrollRanges {
        self.viewport.ranges()
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    fn file_len(&self) -> usize {
        self.source.as_ref().map_or(0, ByteSource::len)
    }

    /// Route one event to the component that owns it.
    ///
    /// Paint output goes to `sink`; other events ignore it.
    pub fn dispatch(
        &mut self,
        event: ViewerEvent,
        sink: &mut dyn TextSink,
    ) -> Result<Invalidate> {
        match event {
            ViewerEvent::Load { path, mode } => self.load(&path, mode),
            ViewerEvent::Scroll { axis, unit } => Ok(self.scroll(axis, unit)),
            ViewerEvent::Resize { geometry } => Ok(self.resize(geometry)),
            ViewerEvent::Paint => {
                self.paint(sink);
                Ok(Invalidate::None)
            }
        }
    }

    /// Read `path` and show it in `mode`.
    ///
    /// On failure nothing changes: the previous file, mode and scroll
    /// position stay as they were.
    pub fn load(&mut self, path: &Path, mode: ViewMode) -> Result<Invalidate> {
        let source = match ByteSource::load(self.reader.as_ref(), path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("{e}");
                return Err(e);
            }
        };

        tracing::info!(
            "Loaded file: {} ({}, {} lines, {} view)",
            path.display(),
            format_bytes(source.len() as u64),
            line_count(source.len()),
            mode.name()
        );
        Ok(self.replace_source(source, mode))
    }

    /// Show in-memory content in `mode`, as if it had been loaded.
    pub fn replace_source(&mut self, source: ByteSource, mode: ViewMode) -> Invalidate {
        let ranges = self.calculator.compute(source.len(), mode, self.geometry);
        self.source = Some(source);
        self.mode = mode;
        self.viewport.reset(ranges)
    }

    pub fn scroll(&mut self, axis: ScrollAxis, unit: ScrollUnit) -> Invalidate {
        self.viewport.scroll(axis, unit)
    }

    pub fn resize(&mut self, geometry: WindowGeometry) -> Invalidate {
        if geometry == self.geometry {
            return Invalidate::None;
        }

        tracing::debug!(
            width = geometry.width_px,
            height = geometry.height_px,
            "Window resized"
        );
        self.geometry = geometry;
        let ranges = self.calculator.compute(self.file_len(), self.mode, geometry);
        self.viewport.resize(ranges)
    }

    /// Lines visible for the current state.
    pub fn render(&self) -> Renderer<'_> {
        let data = self.source.as_ref().map_or(&[][..], ByteSource::bytes);
        Renderer::new(
            data,
            self.viewport.state(),
            self.mode,
            self.geometry,
            &self.config,
        )
    }

    /// Draw the visible lines into `sink`, returning how many were drawn.
    pub fn paint(&self, sink: &mut dyn TextSink) -> usize {
        let mut drawn = 0;
        for line in self.render() {
            sink.draw_text(line.x, line.y, &line.text);
            drawn += 1;
        }
        tracing::trace!(drawn, "Painted viewport");
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DrawText;
    use crate::error::ViewerError;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Serves files from memory; unknown paths fail like a missing file.
    struct MemReader(HashMap<PathBuf, Vec<u8>>);

    impl FileReader for MemReader {
        fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        }
    }

    fn viewer(files: &[(&str, Vec<u8>)]) -> ViewerState {
        let files = files
            .iter()
            .map(|(name, bytes)| (PathBuf::from(name), bytes.clone()))
            .collect();
        ViewerState::with_reader(ViewerConfig::default(), Box::new(MemReader(files)))
    }

    fn load(viewer: &mut ViewerState, name: &str, mode: ViewMode) -> Result<Invalidate> {
        let event = ViewerEvent::Load {
            path: PathBuf::from(name),
            mode,
        };
        viewer.dispatch(event, &mut Vec::<DrawText>::new())
    }

    fn scroll(viewer: &mut ViewerState, axis: ScrollAxis, unit: ScrollUnit) {
        viewer
            .dispatch(ViewerEvent::Scroll { axis, unit }, &mut Vec::<DrawText>::new())
            .unwrap();
    }

    fn paint(viewer: &mut ViewerState) -> Vec<DrawText> {
        let mut out: Vec<DrawText> = Vec::new();
        viewer.dispatch(ViewerEvent::Paint, &mut out).unwrap();
        out
    }

    #[test]
    fn test_paint_without_file() {
        let mut viewer = viewer(&[]);
        assert!(paint(&mut viewer).is_empty());
        assert!(viewer.source().is_none());
    }

    #[test]
    fn test_load_and_paint() {
        let mut viewer = viewer(&[("a.bin", (0x41..=0x54).collect())]);
        let invalidate = load(&mut viewer, "a.bin", ViewMode::Hex).unwrap();
        assert!(invalidate.needs_redraw());

        let lines = paint(&mut viewer);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "00000010: 51 52 53 54  QRST");
        assert_eq!(viewer.ranges().vertical.max, 1);
    }

    #[test]
    fn test_load_resets_scroll() {
        let mut viewer = viewer(&[("big", vec![0; 16 * 200]), ("small", vec![1; 40])]);
        load(&mut viewer, "big", ViewMode::Hex).unwrap();
        scroll(&mut viewer, ScrollAxis::Vertical, ScrollUnit::Absolute(150));
        scroll(&mut viewer, ScrollAxis::Horizontal, ScrollUnit::Absolute(30));
        assert_eq!(viewer.viewport().state().scroll_line, 150);
        assert_eq!(viewer.viewport().state().scroll_column, 30);

        load(&mut viewer, "small", ViewMode::Binary).unwrap();
        assert_eq!(viewer.viewport().state().scroll_line, 0);
        assert_eq!(viewer.viewport().state().scroll_column, 0);
        assert_eq!(viewer.mode(), ViewMode::Binary);

        // Reloading the same file resets as well.
        scroll(&mut viewer, ScrollAxis::Vertical, ScrollUnit::End);
        load(&mut viewer, "small", ViewMode::Binary).unwrap();
        assert_eq!(viewer.viewport().state().scroll_line, 0);
    }

    #[test]
    fn test_load_failure_changes_nothing() {
        let mut viewer = viewer(&[("good", vec![7; 16 * 100])]);
        load(&mut viewer, "good", ViewMode::Ascii).unwrap();
        scroll(&mut viewer, ScrollAxis::Vertical, ScrollUnit::Absolute(42));
        scroll(&mut viewer, ScrollAxis::Horizontal, ScrollUnit::LineDown);

        let source_before = viewer.source().cloned();
        let viewport_before = *viewer.viewport();
        let mode_before = viewer.mode();

        let err = load(&mut viewer, "missing", ViewMode::Hex).unwrap_err();
        assert!(matches!(err, ViewerError::LoadFailure { .. }));

        assert_eq!(viewer.source().cloned(), source_before);
        assert_eq!(*viewer.viewport(), viewport_before);
        assert_eq!(viewer.mode(), mode_before);
    }

    #[test]
    fn test_load_failure_without_previous_file() {
        let mut viewer = viewer(&[]);
        assert!(load(&mut viewer, "missing", ViewMode::Binary).is_err());
        assert!(viewer.source().is_none());
        assert_eq!(viewer.mode(), ViewMode::Hex);
    }

    #[test]
    fn test_empty_file_paints_nothing() {
        let mut viewer = viewer(&[("empty", Vec::new())]);
        load(&mut viewer, "empty", ViewMode::Hex).unwrap();
        assert!(paint(&mut viewer).is_empty());
        assert_eq!(viewer.ranges().vertical.max, 0);
    }

    #[test]
    fn test_resize_updates_page_and_clamps() {
        let mut viewer = viewer(&[("f", vec![0; 16 * 100])]);
        load(&mut viewer, "f", ViewMode::Hex).unwrap();
        scroll(&mut viewer, ScrollAxis::Vertical, ScrollUnit::Absolute(60));

        let geometry = WindowGeometry::new(400, 180);
        let invalidate = viewer
            .dispatch(ViewerEvent::Resize { geometry }, &mut Vec::<DrawText>::new())
            .unwrap();
        assert!(invalidate.needs_redraw());
        assert_eq!(viewer.ranges().vertical.page, 10);
        assert_eq!(viewer.ranges().horizontal.page, 50);
        assert_eq!(viewer.viewport().state().scroll_line, 60);

        // Same size again is a no-op.
        assert_eq!(viewer.resize(geometry), Invalidate::None);

        // Lines at y = 10, 26, ... 154 fit in a 180 px window.
        let lines = paint(&mut viewer);
        assert_eq!(lines.len(), 11);
        assert!(lines[0].text.starts_with("000003C0: "));
    }

    #[test]
    fn test_scroll_moves_painted_lines() {
        let mut viewer = viewer(&[("f", vec![0; 16 * 100])]);
        load(&mut viewer, "f", ViewMode::Ascii).unwrap();
        scroll(&mut viewer, ScrollAxis::Vertical, ScrollUnit::PageDown);
        scroll(&mut viewer, ScrollAxis::Horizontal, ScrollUnit::LineDown);

        let page = viewer.ranges().vertical.page;
        let lines = paint(&mut viewer);
        assert_eq!(lines[0].text, format!("{:08X}: {}", page * 16, ".".repeat(16)));
        assert_eq!(lines[0].x, 2);
    }

    #[test]
    fn test_scroll_without_change_needs_no_redraw() {
        let mut viewer = viewer(&[("f", vec![0; 64])]);
        load(&mut viewer, "f", ViewMode::Hex).unwrap();
        assert_eq!(
            viewer.scroll(ScrollAxis::Vertical, ScrollUnit::LineUp),
            Invalidate::None
        );
    }
}

//! hexlens - desktop file viewer.
//!
//! Window glue around the viewer core: menu, file dialog, view-mode prompt,
//! drag-and-drop, scrollbars and text painting. Everything stateful lives in
//! [`ViewerState`]; this file only turns egui input into [`ViewerEvent`]s and
//! paints what the renderer produces.

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eframe::egui::{self, FontId, Pos2, Rect, RichText, Sense, Vec2};
use tracing_subscriber::EnvFilter;

use hexlens::app::{
    Invalidate, ScrollAxis, ScrollUnit, TextSink, ViewMode, ViewerEvent, ViewerState,
    WindowGeometry,
};
use hexlens::config::{HorizontalExtent, Metrics, ViewerConfig};
use hexlens::util::color::{
    thumb_color, ALERT_RED, DATA_WHITE, DIM_CYAN, INTERFACE_GRAY, MUTED_TEXT, PANEL_DARK,
    TACTICAL_CYAN, VOID_BLACK,
};
use hexlens::util::file_summary;
use hexlens::view::ScrollRange;

/// Thickness of the scrollbars in points.
const SCROLLBAR_SIZE: f32 = 12.0;

/// Shortest scrollbar thumb in points.
const MIN_THUMB: f32 = 16.0;

// =============================================================================
// Command Line
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "hexlens", version, about = "View any file as hex, binary or ASCII")]
struct Cli {
    /// File to open on startup.
    file: Option<PathBuf>,

    /// View mode for the file given on the command line.
    #[arg(long, value_enum, default_value_t = CliMode::Hex)]
    mode: CliMode,

    /// Size the horizontal scroll range to the widest line instead of 100 columns.
    #[arg(long)]
    fit_width: bool,

    /// Line height in pixels.
    #[arg(long, default_value_t = 16)]
    line_height: u32,

    /// Character width in pixels.
    #[arg(long, default_value_t = 8)]
    char_width: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliMode {
    Hex,
    Binary,
    Ascii,
}

impl From<CliMode> for ViewMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Hex => Self::Hex,
            CliMode::Binary => Self::Binary,
            CliMode::Ascii => Self::Ascii,
        }
    }
}

impl Cli {
    fn config(&self) -> ViewerConfig {
        ViewerConfig {
            metrics: Metrics::new(self.line_height, self.char_width),
            horizontal_extent: if self.fit_width {
                HorizontalExtent::WidestLine
            } else {
                HorizontalExtent::default()
            },
            ..ViewerConfig::default()
        }
    }
}

// =============================================================================
// Painting
// =============================================================================

/// Draws viewer text with an egui painter, relative to the text area origin.
struct PainterSink {
    painter: egui::Painter,
    origin: Pos2,
    font: FontId,
}

impl TextSink for PainterSink {
    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.painter.text(
            self.origin + Vec2::new(x as f32, y as f32),
            egui::Align2::LEFT_TOP,
            text,
            self.font.clone(),
            DATA_WHITE,
        );
    }
}

// =============================================================================
// Application
// =============================================================================

struct HexLensApp {
    viewer: ViewerState,
    /// File from the command line, loaded on the first frame.
    initial_file: Option<(PathBuf, ViewMode)>,
    /// Selected or dropped file waiting for a view mode.
    pending_path: Option<PathBuf>,
    /// Error shown in a notification window.
    notification: Option<String>,
    /// Whether a file is being dragged over the window.
    is_drop_target: bool,
    /// Unconsumed wheel movement in points.
    wheel_accum: Vec2,
    /// Monospace size whose glyph width matches the configured char width.
    font_size: Option<f32>,
}

impl HexLensApp {
    fn new(config: ViewerConfig, initial_file: Option<(PathBuf, ViewMode)>) -> Self {
        Self {
            viewer: ViewerState::new(config),
            initial_file,
            pending_path: None,
            notification: None,
            is_drop_target: false,
            wheel_accum: Vec2::ZERO,
            font_size: None,
        }
    }

    /// Dispatch `event`, turning load failures into a notification.
    fn apply(&mut self, ctx: &egui::Context, event: ViewerEvent, sink: &mut dyn TextSink) {
        match self.viewer.dispatch(event, sink) {
            Ok(Invalidate::Full) => ctx.request_repaint(),
            Ok(Invalidate::None) => {}
            Err(e) => self.notification = Some(e.to_string()),
        }
    }

    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new().set_title("Open File").pick_file() {
            self.pending_path = Some(path);
        }
    }

    fn font(&mut self, ctx: &egui::Context) -> FontId {
        let size = *self.font_size.get_or_insert_with(|| {
            const PROBE: f32 = 16.0;
            let probe_width = ctx.fonts(|f| f.glyph_width(&FontId::monospace(PROBE), '0'));
            let char_width = self.viewer.config().metrics.char_width_px as f32;
            if probe_width > 0.0 {
                PROBE * char_width / probe_width
            } else {
                PROBE
            }
        });
        FontId::monospace(size)
    }

    /// Scroll events from the mouse wheel and keyboard.
    fn collect_input(&mut self, ctx: &egui::Context, hovered: bool) -> Vec<ViewerEvent> {
        let metrics = self.viewer.config().metrics;
        let mut events = Vec::new();
        let mut push = |axis, unit| events.push(ViewerEvent::Scroll { axis, unit });

        if hovered {
            self.wheel_accum += ctx.input(|i| i.raw_scroll_delta);
        } else {
            self.wheel_accum = Vec2::ZERO;
        }

        let line_px = metrics.line_height_px as f32;
        while self.wheel_accum.y >= line_px {
            self.wheel_accum.y -= line_px;
            push(ScrollAxis::Vertical, ScrollUnit::LineUp);
        }
        while self.wheel_accum.y <= -line_px {
            self.wheel_accum.y += line_px;
            push(ScrollAxis::Vertical, ScrollUnit::LineDown);
        }

        let char_px = metrics.char_width_px as f32;
        while self.wheel_accum.x >= char_px {
            self.wheel_accum.x -= char_px;
            push(ScrollAxis::Horizontal, ScrollUnit::LineUp);
        }
        while self.wheel_accum.x <= -char_px {
            self.wheel_accum.x += char_px;
            push(ScrollAxis::Horizontal, ScrollUnit::LineDown);
        }

        let keys = [
            (egui::Key::ArrowUp, ScrollAxis::Vertical, ScrollUnit::LineUp),
            (egui::Key::ArrowDown, ScrollAxis::Vertical, ScrollUnit::LineDown),
            (egui::Key::PageUp, ScrollAxis::Vertical, ScrollUnit::PageUp),
            (egui::Key::PageDown, ScrollAxis::Vertical, ScrollUnit::PageDown),
            (egui::Key::Home, ScrollAxis::Vertical, ScrollUnit::Home),
            (egui::Key::End, ScrollAxis::Vertical, ScrollUnit::End),
            (egui::Key::ArrowLeft, ScrollAxis::Horizontal, ScrollUnit::LineUp),
            (egui::Key::ArrowRight, ScrollAxis::Horizontal, ScrollUnit::LineDown),
        ];
        ctx.input(|i| {
            for (key, axis, unit) in keys {
                if i.key_pressed(key) {
                    push(axis, unit);
                }
            }
        });

        events
    }
}

impl eframe::App for HexLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load initial file from command-line argument (first frame only)
        if let Some((path, mode)) = self.initial_file.take() {
            tracing::info!("Loading file from command line: {}", path.display());
            self.apply(ctx, ViewerEvent::Load { path, mode }, &mut NoSink);
        }

        // Handle file drops
        let dropped_file = ctx.input(|i| {
            self.is_drop_target = !i.raw.hovered_files.is_empty();
            i.raw.dropped_files.first().and_then(|f| f.path.clone())
        });
        if let Some(path) = dropped_file {
            self.pending_path = Some(path);
        }

        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::O)) {
            self.open_file_dialog();
        }

        self.draw_menu_bar(ctx);
        self.draw_status_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(VOID_BLACK))
            .show(ctx, |ui| self.draw_viewer(ui));

        self.draw_mode_prompt(ctx);
        self.draw_notification(ctx);
    }
}

impl HexLensApp {
    fn draw_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu")
            .frame(egui::Frame::none().fill(PANEL_DARK).inner_margin(4.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let open = ui.add(
                        egui::Button::new(RichText::new("OPEN FILE").size(11.0).color(DATA_WHITE))
                            .fill(INTERFACE_GRAY)
                            .rounding(0.0)
                            .min_size(egui::vec2(0.0, 22.0)),
                    );
                    if open.clicked() {
                        self.open_file_dialog();
                    }

                    if let Some(source) = self.viewer.source() {
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new(format!("[ {} ]", source.title()))
                                .monospace()
                                .strong()
                                .color(TACTICAL_CYAN),
                        );
                        ui.label(
                            RichText::new(format!("MODE: {}", self.viewer.mode().name()))
                                .monospace()
                                .color(MUTED_TEXT),
                        );
                    }
                });
            });
    }

    fn draw_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .frame(egui::Frame::none().fill(PANEL_DARK).inner_margin(4.0))
            .show(ctx, |ui| {
                let text = match self.viewer.source() {
                    Some(source) => {
                        let state = self.viewer.viewport().state();
                        let ranges = self.viewer.ranges();
                        format!(
                            "{} // LINE {}/{} // COL {}/{}",
                            file_summary(source.len()),
                            state.scroll_line,
                            ranges.vertical.max,
                            state.scroll_column,
                            ranges.horizontal.max
                        )
                    }
                    None => "STATUS: [STANDBY]".to_string(),
                };
                ui.label(RichText::new(text).monospace().size(10.0).color(MUTED_TEXT));
            });
    }

    /// Text area plus scrollbars.
    fn draw_viewer(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_rect_before_wrap();
        let text_rect = Rect::from_min_max(
            available.min,
            Pos2::new(
                (available.max.x - SCROLLBAR_SIZE).max(available.min.x),
                (available.max.y - SCROLLBAR_SIZE).max(available.min.y),
            ),
        );
        let vbar = Rect::from_min_max(
            Pos2::new(text_rect.max.x, available.min.y),
            Pos2::new(available.max.x, text_rect.max.y),
        );
        let hbar = Rect::from_min_max(
            Pos2::new(available.min.x, text_rect.max.y),
            Pos2::new(text_rect.max.x, available.max.y),
        );

        let response = ui.allocate_rect(text_rect, Sense::click());
        let ctx = ui.ctx().clone();
        let mut events = Vec::new();

        let geometry = WindowGeometry::new(
            text_rect.width().max(0.0) as u32,
            text_rect.height().max(0.0) as u32,
        );
        if geometry != self.viewer.geometry() {
            events.push(ViewerEvent::Resize { geometry });
        }

        let has_file = self.viewer.source().is_some();
        if has_file {
            events.extend(self.collect_input(&ctx, response.hovered()));

            let ranges = *self.viewer.ranges();
            let viewport = self.viewer.viewport();
            let bars = [
                (vbar, ScrollAxis::Vertical, ranges.vertical),
                (hbar, ScrollAxis::Horizontal, ranges.horizontal),
            ];
            let positions = bars.map(|(_, axis, _)| viewport.position(axis));
            for ((rect, axis, range), position) in bars.into_iter().zip(positions) {
                if let Some(unit) = scrollbar(ui, rect, axis, range, position) {
                    events.push(ViewerEvent::Scroll { axis, unit });
                }
            }
        }

        let mut sink = PainterSink {
            painter: ui.painter_at(text_rect),
            origin: text_rect.min,
            font: self.font(&ctx),
        };
        for event in events {
            self.apply(&ctx, event, &mut sink);
        }

        if self.is_drop_target {
            draw_drop_indicator(ui, available);
        } else if has_file {
            self.apply(&ctx, ViewerEvent::Paint, &mut sink);
        } else {
            draw_empty_state(ui, available);
        }
    }

    /// Ask which view mode to open the pending file in.
    fn draw_mode_prompt(&mut self, ctx: &egui::Context) {
        let Some(path) = self.pending_path.clone() else {
            return;
        };

        let mut open = true;
        let mut choice = None;
        egui::Window::new("File View Mode")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(RichText::new(path.display().to_string()).monospace().color(MUTED_TEXT));
                ui.add_space(6.0);
                ui.label("Choose file view:");
                ui.horizontal(|ui| {
                    for &mode in ViewMode::all() {
                        if ui.button(mode.name()).clicked() {
                            choice = Some(mode);
                        }
                    }
                });
            });

        // Dismissing the prompt falls back to ASCII.
        if !open && choice.is_none() {
            choice = Some(ViewMode::Ascii);
        }

        if let Some(mode) = choice {
            self.pending_path = None;
            self.apply(ctx, ViewerEvent::Load { path, mode }, &mut NoSink);
        }
    }

    fn draw_notification(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notification.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(ALERT_RED));
                ui.add_space(6.0);
                dismissed = ui.button("OK").clicked();
            });
        if dismissed {
            self.notification = None;
        }
    }
}

/// Sink for events that never paint.
struct NoSink;

impl TextSink for NoSink {
    fn draw_text(&mut self, _x: i32, _y: i32, _text: &str) {}
}

// =============================================================================
// Scrollbars
// =============================================================================

/// Draw a scrollbar for `range` and report the scroll it requests.
///
/// Dragging the thumb positions absolutely; clicking the track pages.
fn scrollbar(
    ui: &mut egui::Ui,
    rect: Rect,
    axis: ScrollAxis,
    range: ScrollRange,
    position: usize,
) -> Option<ScrollUnit> {
    let id = ui.id().with(("scrollbar", axis == ScrollAxis::Vertical));
    let response = ui.interact(rect, id, Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, INTERFACE_GRAY.gamma_multiply(0.5));

    let along = |p: Pos2| match axis {
        ScrollAxis::Vertical => p.y - rect.min.y,
        ScrollAxis::Horizontal => p.x - rect.min.x,
    };
    let track = match axis {
        ScrollAxis::Vertical => rect.height(),
        ScrollAxis::Horizontal => rect.width(),
    };

    let span = range.max.saturating_sub(range.min);
    let total = (span + range.page.max(1)) as f32;
    let thumb_len = (track * range.page.max(1) as f32 / total).clamp(MIN_THUMB.min(track), track);
    let free = (track - thumb_len).max(0.0);
    let thumb_start = if span == 0 {
        0.0
    } else {
        free * (position.saturating_sub(range.min)) as f32 / span as f32
    };

    let thumb = match axis {
        ScrollAxis::Vertical => Rect::from_min_size(
            Pos2::new(rect.min.x + 2.0, rect.min.y + thumb_start),
            Vec2::new(rect.width() - 4.0, thumb_len),
        ),
        ScrollAxis::Horizontal => Rect::from_min_size(
            Pos2::new(rect.min.x + thumb_start, rect.min.y + 2.0),
            Vec2::new(thumb_len, rect.height() - 4.0),
        ),
    };
    painter.rect_filled(
        thumb,
        0.0,
        thumb_color(response.hovered(), response.dragged()),
    );

    let pointer = response.interact_pointer_pos()?;
    if response.dragged() && free > 0.0 {
        let frac = ((along(pointer) - thumb_len / 2.0) / free).clamp(0.0, 1.0);
        let target = range.min + (frac * span as f32).round() as usize;
        return (target != position).then_some(ScrollUnit::Absolute(target));
    }
    if response.clicked() {
        let at = along(pointer);
        if at < thumb_start {
            return Some(ScrollUnit::PageUp);
        }
        if at > thumb_start + thumb_len {
            return Some(ScrollUnit::PageDown);
        }
    }
    None
}

// =============================================================================
// Placeholders
// =============================================================================

fn draw_empty_state(ui: &mut egui::Ui, rect: Rect) {
    let center = rect.center();
    ui.painter().text(
        center - Vec2::new(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        "[ NO FILE LOADED ]",
        FontId::monospace(14.0),
        MUTED_TEXT,
    );
    ui.painter().text(
        center + Vec2::new(0.0, 12.0),
        egui::Align2::CENTER_CENTER,
        "DROP A FILE OR PRESS OPEN FILE",
        FontId::monospace(12.0),
        DIM_CYAN,
    );
}

fn draw_drop_indicator(ui: &mut egui::Ui, rect: Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, VOID_BLACK.gamma_multiply(0.85));
    ui.painter().rect_stroke(
        rect.shrink(8.0),
        0.0,
        egui::Stroke::new(2.0, TACTICAL_CYAN),
    );
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "RELEASE TO OPEN",
        FontId::monospace(14.0),
        TACTICAL_CYAN,
    );
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let initial_file = cli.file.clone().map(|path| (path, ViewMode::from(cli.mode)));

    let size = config.initial_geometry;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hex Viewer")
            .with_inner_size([size.width_px as f32, size.height_px as f32])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "hexlens",
        options,
        Box::new(move |_cc| Ok(Box::new(HexLensApp::new(config, initial_file)))),
    )
}

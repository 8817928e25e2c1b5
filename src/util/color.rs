//! Interface palette.
//!
//! File content is drawn in a single color; these are for the window chrome.

use eframe::egui::Color32;

/// Text area background.
pub const VOID_BLACK: Color32 = Color32::from_rgb(8, 10, 12);
/// Menu bar and status line background.
pub const PANEL_DARK: Color32 = Color32::from_rgb(18, 21, 25);
/// Scrollbar tracks and button fills.
pub const INTERFACE_GRAY: Color32 = Color32::from_rgb(42, 47, 54);
/// File content text.
pub const DATA_WHITE: Color32 = Color32::from_rgb(214, 220, 226);
/// Secondary labels.
pub const MUTED_TEXT: Color32 = Color32::from_rgb(120, 128, 138);
/// Scrollbar thumbs and active elements.
pub const TACTICAL_CYAN: Color32 = Color32::from_rgb(0, 200, 220);
/// Hover and drop-target accents.
pub const DIM_CYAN: Color32 = Color32::from_rgb(0, 110, 125);
/// Error notifications.
pub const ALERT_RED: Color32 = Color32::from_rgb(235, 70, 70);

/// Thumb color for a scrollbar in the given interaction state.
pub fn thumb_color(hovered: bool, dragging: bool) -> Color32 {
    if dragging {
        TACTICAL_CYAN
    } else if hovered {
        TACTICAL_CYAN.gamma_multiply(0.8)
    } else {
        DIM_CYAN
    }
}

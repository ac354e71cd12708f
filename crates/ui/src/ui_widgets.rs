//! Reusable themed widget helpers for the roulette UI.
//!
//! These wrap common egui patterns (headings, captions, progress bars) with
//! palette-driven styling from [`crate::theme`], so panels don't repeat
//! color and spacing constants by hand.

use bevy_egui::egui;

use crate::theme::{self, Palette};

// =============================================================================
// Headings and captions
// =============================================================================

/// Render a section heading with consistent font size and color.
pub fn themed_heading(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(palette.heading)
            .strong(),
    );
}

/// Render a muted caption / small text line.
pub fn caption(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_SMALL)
            .color(palette.text_muted),
    );
}

// =============================================================================
// Progress Bar
// =============================================================================

/// A themed progress bar with an optional custom fill color.
///
/// `fraction` should be in the range `0.0..=1.0`. If `color` is `None`,
/// the accent color is used.
pub fn progress_bar(
    ui: &mut egui::Ui,
    palette: &Palette,
    fraction: f32,
    color: Option<egui::Color32>,
) -> egui::Response {
    ui.add(
        egui::ProgressBar::new(fraction.clamp(0.0, 1.0))
            .fill(bar_fill(palette, color))
            .desired_width(ui.available_width().min(320.0)),
    )
}

/// Bar fill: the explicit override when given, otherwise the palette accent.
fn bar_fill(palette: &Palette, color: Option<egui::Color32>) -> egui::Color32 {
    color.unwrap_or(palette.accent)
}

// =============================================================================
// Section helpers
// =============================================================================

/// Add a separator with consistent spacing above and below.
pub fn section_separator(ui: &mut egui::Ui) {
    ui.add_space(theme::ITEM_SPACING);
    ui.separator();
    ui.add_space(theme::ITEM_SPACING);
}

//! Two-variant visual theme applied through egui style surgery.
//!
//! The whole front end draws from one [`Palette`] picked by the
//! [`ThemeVariant`] in the [`UiTheme`] resource, so swapping the look is a
//! resource write rather than a rummage through every panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

// -----------------------------------------------------------------------------
// Type scale and spacing
// -----------------------------------------------------------------------------

/// The big station name line.
pub const FONT_DISPLAY: f32 = 34.0;
pub const FONT_HEADING: f32 = 22.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_SMALL: f32 = 12.0;
pub const WIDGET_CORNER_RADIUS: u8 = 6;
pub const ITEM_SPACING: f32 = 8.0;

// -----------------------------------------------------------------------------
// Variants and palettes
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    /// Dark, cool blues. The default.
    #[default]
    Tech,
    /// Light, warm paper tones.
    Paper,
}

impl ThemeVariant {
    /// Parse the value of `STATION_ROULETTE_THEME`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tech" => Some(Self::Tech),
            "paper" => Some(Self::Paper),
            _ => None,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Tech => Palette {
                bg_panel: egui::Color32::from_rgb(35, 37, 48),
                bg_dark: egui::Color32::from_rgb(30, 32, 40),
                bg_faint: egui::Color32::from_rgb(40, 42, 52),
                inactive: egui::Color32::from_rgb(50, 55, 65),
                hover: egui::Color32::from_rgb(70, 80, 100),
                accent: egui::Color32::from_rgb(100, 160, 220),
                success: egui::Color32::from_rgb(60, 200, 80),
                text: egui::Color32::from_rgb(214, 218, 224),
                text_muted: egui::Color32::from_rgb(140, 148, 160),
                heading: egui::Color32::from_rgb(180, 200, 240),
            },
            Self::Paper => Palette {
                bg_panel: egui::Color32::from_rgb(247, 243, 234),
                bg_dark: egui::Color32::from_rgb(238, 232, 220),
                bg_faint: egui::Color32::from_rgb(242, 237, 227),
                inactive: egui::Color32::from_rgb(228, 220, 206),
                hover: egui::Color32::from_rgb(214, 203, 184),
                accent: egui::Color32::from_rgb(186, 98, 56),
                success: egui::Color32::from_rgb(46, 143, 78),
                text: egui::Color32::from_rgb(64, 56, 46),
                text_muted: egui::Color32::from_rgb(146, 136, 120),
                heading: egui::Color32::from_rgb(92, 64, 40),
            },
        }
    }
}

/// Every color the panels are allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_panel: egui::Color32,
    pub bg_dark: egui::Color32,
    pub bg_faint: egui::Color32,
    pub inactive: egui::Color32,
    pub hover: egui::Color32,
    pub accent: egui::Color32,
    pub success: egui::Color32,
    pub text: egui::Color32,
    pub text_muted: egui::Color32,
    pub heading: egui::Color32,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiTheme {
    pub variant: ThemeVariant,
}

// -----------------------------------------------------------------------------
// Style application
// -----------------------------------------------------------------------------

/// Rebuild the egui style from the active palette. Runs whenever [`UiTheme`]
/// changes, including the frame it is first inserted.
pub fn apply_theme(theme: Res<UiTheme>, mut contexts: EguiContexts) {
    let palette = theme.variant.palette();
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    style.visuals = match theme.variant {
        ThemeVariant::Tech => egui::Visuals::dark(),
        ThemeVariant::Paper => egui::Visuals::light(),
    };

    style.visuals.widgets.noninteractive.bg_fill = palette.bg_panel;
    style.visuals.widgets.inactive.bg_fill = palette.inactive;
    style.visuals.widgets.hovered.bg_fill = palette.hover;
    style.visuals.widgets.active.bg_fill = palette.accent;
    style.visuals.widgets.inactive.weak_bg_fill = palette.inactive;
    style.visuals.widgets.hovered.weak_bg_fill = palette.hover;
    style.visuals.widgets.active.weak_bg_fill = palette.accent;

    style.visuals.widgets.noninteractive.fg_stroke.color = palette.text;
    style.visuals.widgets.inactive.fg_stroke.color = palette.text;
    style.visuals.widgets.hovered.fg_stroke.color = palette.text;
    style.visuals.widgets.active.fg_stroke.color = palette.text;

    style.visuals.window_fill = palette.bg_panel;
    style.visuals.panel_fill = palette.bg_panel;
    style.visuals.extreme_bg_color = palette.bg_dark;
    style.visuals.faint_bg_color = palette.bg_faint;
    style.visuals.hyperlink_color = palette.accent;

    style.visuals.selection.bg_fill = palette.accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, palette.accent);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(ITEM_SPACING, ITEM_SPACING);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_parse() {
        assert_eq!(ThemeVariant::from_name("tech"), Some(ThemeVariant::Tech));
        assert_eq!(ThemeVariant::from_name("Paper"), Some(ThemeVariant::Paper));
        assert_eq!(ThemeVariant::from_name(" PAPER "), Some(ThemeVariant::Paper));
        assert_eq!(ThemeVariant::from_name("neon"), None);
        assert_eq!(ThemeVariant::from_name(""), None);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for variant in [ThemeVariant::Tech, ThemeVariant::Paper] {
            let p = variant.palette();
            assert_ne!(p.accent, p.success);
            assert_ne!(p.text, p.text_muted);
            assert_ne!(p.bg_panel, p.bg_dark);
            assert_ne!(p.inactive, p.hover);
        }
    }

    #[test]
    fn test_variants_do_not_share_a_palette() {
        assert_ne!(
            ThemeVariant::Tech.palette(),
            ThemeVariant::Paper.palette()
        );
    }
}

//! Visual styling for the Triband editor.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};
use triband_core::{KnobColors, Palette, Rgba};

/// Convert a float color to egui's 8-bit color, saturating each channel.
///
/// This is the only place brightened colors get clamped.
pub fn to_color32(color: Rgba) -> Color32 {
    let c = color.saturate();
    let byte = |v: f32| (v * 255.0 + 0.5) as u8;
    Color32::from_rgba_unmultiplied(byte(c.r), byte(c.g), byte(c.b), byte(c.a))
}

/// Knob fills for each interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnobFill {
    /// Resting fill.
    pub idle: Color32,
    /// Fill under the pointer.
    pub hovered: Color32,
    /// Fill while pressed or dragged.
    pub active: Color32,
}

impl KnobFill {
    /// Fills from palette shades; the resting fill is the hovered shade, dimmed.
    pub fn from_colors(colors: KnobColors) -> Self {
        let hovered = to_color32(colors.hovered);
        Self {
            idle: hovered.gamma_multiply(0.8),
            hovered,
            active: to_color32(colors.active),
        }
    }
}

/// Theme colors for the editor window.
pub struct Theme {
    /// Window body background.
    pub background: Color32,
    /// Title bar background.
    pub title_bg: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
    /// Knob tick and track color.
    pub knob_track: Color32,
    /// Knob pointer color.
    pub knob_pointer: Color32,
}

impl Theme {
    /// Theme for a palette.
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            background: to_color32(palette.window_bg),
            title_bg: to_color32(palette.title_bg),
            text_primary: Color32::from_rgb(230, 230, 235),
            text_secondary: Color32::from_rgb(170, 170, 180),
            knob_track: Color32::from_rgb(90, 90, 100),
            knob_pointer: Color32::from_rgb(240, 240, 245),
        }
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.bg_fill = self.background;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);

        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(0.0, 4.0);
        style.spacing.window_margin = egui::Margin::same(8);

        ctx.set_style(style);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

//! Band colors for the knob surface.
//!
//! Each band has a hue and saturation; a knob draws with a brighter
//! `hovered` shade and a slightly darker `active` (pressed) shade. With gain
//! feedback enabled the shades also follow the band's gain, and the
//! mid-frequency knob slides between the low, mid and high hues as the
//! frequency sweeps.

use crate::color::{Rgba, color_bright, color_mid};
use crate::params::{EqParam, ParameterState};

/// Knob shades for one interaction state pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobColors {
    /// Fill while the knob is pressed or dragged.
    pub active: Rgba,
    /// Fill while the pointer hovers the knob.
    pub hovered: Rgba,
}

impl KnobColors {
    fn map(self, f: impl Fn(Rgba) -> Rgba) -> Self {
        Self {
            active: f(self.active),
            hovered: f(self.hovered),
        }
    }
}

/// Hue, saturation and the two HSV values used for one band's knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandShade {
    /// Hue in `[0, 1]`.
    pub hue: f32,
    /// Saturation in `[0, 1]`.
    pub saturation: f32,
    /// HSV value of the pressed shade.
    pub active_value: f32,
    /// HSV value of the hovered shade.
    pub hovered_value: f32,
}

impl BandShade {
    /// Build a shade; `hue_deg_100` is the hue in hundreds of degrees (e.g. `2.04` = 204°).
    pub fn new(hue_deg_100: f32, saturation: f32, active_value: f32, hovered_value: f32) -> Self {
        Self {
            hue: hue_deg_100 / 3.6,
            saturation,
            active_value,
            hovered_value,
        }
    }

    /// Resolve both shades to RGBA.
    pub fn colors(&self) -> KnobColors {
        self.colors_at(self.active_value, self.hovered_value)
    }

    /// This band's hue and saturation at another pair of HSV values.
    pub fn colors_at(&self, active_value: f32, hovered_value: f32) -> KnobColors {
        KnobColors {
            active: Rgba::from_hsv(self.hue, self.saturation, active_value),
            hovered: Rgba::from_hsv(self.hue, self.saturation, hovered_value),
        }
    }
}

/// Complete color scheme of the editor window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// High shelf knob.
    pub high: BandShade,
    /// Mid gain knob.
    pub mid: BandShade,
    /// Mid frequency knob (shares the mid hue, darker).
    pub mid_freq: BandShade,
    /// Low shelf knob.
    pub low: BandShade,
    /// Focused title bar.
    pub title_bg: Rgba,
    /// Window body.
    pub window_bg: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            high: BandShade::new(2.04, 0.83, 0.64, 0.84),
            mid: BandShade::new(1.6, 0.77, 0.64, 0.74),
            mid_freq: BandShade::new(1.6, 0.77, 0.44, 0.64),
            low: BandShade::new(0.03, 0.76, 0.74, 0.84),
            title_bg: Rgba::from_hsv(3.31 / 3.6, 0.64, 0.40),
            window_bg: Rgba::from_hsv(3.31 / 3.6, 0.64, 0.10),
        }
    }
}

impl Palette {
    /// Fixed knob colors, independent of parameter values.
    pub fn static_colors(&self, param: EqParam) -> KnobColors {
        match param {
            EqParam::HighGain => self.high.colors(),
            EqParam::LowGain => self.low.colors(),
            EqParam::MidGain => self.mid.colors(),
            EqParam::MidFreq => self.mid_freq.colors(),
        }
    }

    /// Knob colors modulated by the current parameter values.
    ///
    /// Gain knobs brighten with their own gain. The mid-frequency knob blends
    /// the low, mid and high hues by frequency (at its own darker values) and
    /// then brightens with the mid gain.
    pub fn feedback_colors(&self, param: EqParam, state: &ParameterState) -> KnobColors {
        match param {
            EqParam::HighGain => self
                .high
                .colors()
                .map(|c| color_bright(c, state.high_gain_db)),
            EqParam::LowGain => self.low.colors().map(|c| color_bright(c, state.low_gain_db)),
            EqParam::MidGain => self.mid.colors().map(|c| color_bright(c, state.mid_gain_db)),
            EqParam::MidFreq => self
                .mid_freq_colors(state.mid_freq_hz)
                .map(|c| color_bright(c, state.mid_gain_db)),
        }
    }

    /// Hue-blended mid-frequency shades before gain brightness.
    pub fn mid_freq_colors(&self, freq_hz: f32) -> KnobColors {
        let (active_v, hovered_v) = (self.mid_freq.active_value, self.mid_freq.hovered_value);
        let low = self.low.colors_at(active_v, hovered_v);
        let mid = self.mid_freq.colors();
        let high = self.high.colors_at(active_v, hovered_v);
        KnobColors {
            active: color_mid(low.active, mid.active, high.active, freq_hz),
            hovered: color_mid(low.hovered, mid.hovered, high.hovered, freq_hz),
        }
    }
}

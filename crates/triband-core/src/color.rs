//! Knob feedback colors.
//!
//! Colors are straight (non-premultiplied) RGBA floats. Brightening may push
//! R, G or B past 1.0; the rendering backend saturates them when it converts
//! to 8-bit, so nothing here clamps.

use crate::params::{MID_FREQ_MAX_HZ, MID_FREQ_MIN_HZ};

/// Gain at or below which a band is drawn as switched off.
pub const ATTENUATED_THRESHOLD_DB: f32 = -15.0;

/// Gray used for a fully attenuated band.
pub const ATTENUATED_GRAY: f32 = 0.3;

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Build a color from its components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from hue, saturation and value, all in `[0, 1]`.
    ///
    /// Hue wraps, so `1.0` and `0.0` are the same red.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        if s == 0.0 {
            return Self::new(v, v, v, 1.0);
        }

        let h = libm::fmodf(h, 1.0) * 6.0;
        let sector = h as i32;
        let f = h - sector as f32;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::new(r, g, b, 1.0)
    }

    /// Componentwise blend; `t = 0` yields `self`, `t = 1` yields `other`, both exactly.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Components saturated to `[0, 1]`.
    pub fn saturate(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }
}

/// Shift a band color's brightness by its gain.
///
/// Above −15 dB every color channel moves by `brightness / 100`, so a +15 dB
/// boost lifts the color by 0.15 and a cut darkens it. At or below −15 dB
/// the band is treated as off and drawn in a neutral gray. Alpha is kept.
///
/// ```rust
/// use triband_core::{Rgba, color_bright};
///
/// let base = Rgba::new(0.2, 0.4, 0.6, 1.0);
/// let lit = color_bright(base, 10.0);
/// assert!((lit.r - 0.3).abs() < 1e-6);
/// assert_eq!(color_bright(base, -15.0), Rgba::new(0.3, 0.3, 0.3, 1.0));
/// ```
pub fn color_bright(base: Rgba, brightness: f32) -> Rgba {
    if brightness > ATTENUATED_THRESHOLD_DB {
        let offset = brightness / 100.0;
        Rgba::new(base.r + offset, base.g + offset, base.b + offset, base.a)
    } else {
        Rgba::new(ATTENUATED_GRAY, ATTENUATED_GRAY, ATTENUATED_GRAY, base.a)
    }
}

/// Position of `freq_hz` along the mid band's log-frequency range, in `[0, 1]`.
pub fn mid_freq_position(freq_hz: f32) -> f32 {
    if freq_hz <= MID_FREQ_MIN_HZ {
        return 0.0;
    }
    if freq_hz >= MID_FREQ_MAX_HZ {
        return 1.0;
    }
    libm::logf(freq_hz / MID_FREQ_MIN_HZ) / libm::logf(MID_FREQ_MAX_HZ / MID_FREQ_MIN_HZ)
}

/// Blend the low, mid and high band colors by the mid band's frequency.
///
/// The lower half of the (log) frequency range fades `low` into `mid`, the
/// upper half fades `mid` into `high`. The lowest frequency returns `low`
/// exactly and the highest returns `high` exactly. Gain brightness is not
/// applied here.
pub fn color_mid(low: Rgba, mid: Rgba, high: Rgba, freq_hz: f32) -> Rgba {
    let t = mid_freq_position(freq_hz);
    if t <= 0.5 {
        low.lerp(mid, t * 2.0)
    } else {
        mid.lerp(high, t * 2.0 - 1.0)
    }
}

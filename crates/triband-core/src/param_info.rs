//! Parameter descriptors for the EQ's host-visible controls.
//!
//! Each control is described by a [`ParamDescriptor`] carrying the metadata a
//! host and a knob need: range, default, drag step, unit, and the
//! normalization curve used to place the value on the knob's sweep.
//!
//! # Example
//!
//! ```rust
//! use triband_core::{ParamDescriptor, ParamId, ParamScale};
//!
//! let freq = ParamDescriptor::freq_hz("Mid Freq", "Freq", 313.3, 5705.6, 1337.0)
//!     .with_id(ParamId(3), "mid_freq");
//! assert_eq!(freq.scale, ParamScale::Logarithmic);
//! assert!((freq.denormalize(freq.normalize(1337.0)) - 1337.0).abs() < 0.01);
//! ```

/// Scaling curve for parameter normalization.
///
/// Determines how a parameter's plain value maps to normalized \[0.0, 1.0\] space.
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Linear mapping (default). Equal resolution across the range.
    #[default]
    Linear,
    /// Logarithmic mapping. More resolution at low values.
    /// Requires `min > 0.0`.
    Logarithmic,
}

/// Stable parameter identifier shared with the host.
///
/// For this plugin the id equals the parameter's host index; it must never
/// change once published, since hosts key automation lanes on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Describes a single parameter's metadata for display and validation.
///
/// # Step Size
///
/// `step` is the value change produced by one logical pixel of vertical
/// drag on the parameter's knob. Log-scaled parameters apply it in
/// normalized space (`step / (max - min)` per pixel), so the knob feels the
/// same speed across its whole sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Mid Freq").
    pub name: &'static str,

    /// Short name, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value restored by a double-click reset.
    pub default: f32,

    /// Drag increment per pixel (see the type-level docs).
    pub step: f32,

    /// Stable numeric ID for host automation.
    pub id: ParamId,

    /// Human-readable stable ID (e.g., `"high_gain"`).
    pub string_id: &'static str,

    /// Normalization curve for mapping between plain and normalized values.
    pub scale: ParamScale,
}

impl ParamDescriptor {
    /// Shelf/band gain parameter in decibels, linear scale.
    pub const fn gain_db(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Decibels,
            min,
            max,
            default,
            step: 0.2,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
        }
    }

    /// Frequency parameter in Hertz, logarithmic scale.
    pub const fn freq_hz(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 50.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Logarithmic,
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// Builder pattern: call after a factory method or struct literal.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// ```rust
    /// use triband_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::gain_db("Gain", "Gain", -15.0, 15.0, 0.0);
    /// assert_eq!(desc.clamp(0.0), 0.0);
    /// assert_eq!(desc.clamp(-100.0), -15.0);
    /// assert_eq!(desc.clamp(100.0), 15.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    ///
    /// Not clamped: values outside `[min, max]` map outside `[0, 1]`.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Converts a normalized value (0.0 to 1.0) to the actual parameter range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels (dB) - shelf and band gains.
    Decibels,

    /// Hertz (Hz) - band center frequency.
    Hertz,
}

impl ParamUnit {
    /// Returns the unit suffix used in knob labels.
    ///
    /// Labels print the suffix flush against the number (`"6.5dB"`).
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => "dB",
            ParamUnit::Hertz => "Hz",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_clamp() {
        let desc = ParamDescriptor::gain_db("Gain", "Gain", -15.0, 15.0, 0.0);
        assert_eq!(desc.clamp(7.5), 7.5);
        assert_eq!(desc.clamp(-16.0), -15.0);
        assert_eq!(desc.clamp(15.1), 15.0);
        assert_eq!(desc.clamp(-15.0), -15.0);
    }

    #[test]
    fn test_normalize_denormalize_linear() {
        let desc = ParamDescriptor::gain_db("Gain", "Gain", -15.0, 15.0, 0.0);

        assert_eq!(desc.normalize(-15.0), 0.0);
        assert_eq!(desc.normalize(0.0), 0.5);
        assert_eq!(desc.normalize(15.0), 1.0);

        assert_eq!(desc.denormalize(0.0), -15.0);
        assert_eq!(desc.denormalize(0.5), 0.0);
        assert_eq!(desc.denormalize(1.0), 15.0);
    }

    #[test]
    fn test_normalize_denormalize_logarithmic() {
        let desc = ParamDescriptor::freq_hz("Freq", "Freq", 313.3, 5705.6, 1337.0);

        assert_eq!(desc.normalize(313.3), 0.0);
        assert_eq!(desc.normalize(5705.6), 1.0);

        // Midpoint in log space is the geometric mean
        let mid = desc.denormalize(0.5);
        let expected_mid = libm::sqrtf(313.3 * 5705.6);
        assert!(
            (mid - expected_mid).abs() < 0.5,
            "log midpoint: expected ~{expected_mid}, got {mid}"
        );

        for &val in &[313.3, 500.0, 1337.0, 4000.0, 5705.6] {
            let rt = desc.denormalize(desc.normalize(val));
            assert!(
                (rt - val).abs() / val < 1e-4,
                "log round-trip failed for {val}: got {rt}"
            );
        }
    }

    #[test]
    fn test_normalize_zero_range() {
        let desc = ParamDescriptor::gain_db("Fixed", "Fixed", 4.0, 4.0, 4.0);
        assert_eq!(desc.normalize(4.0), 0.0);
    }

    #[test]
    fn test_factories() {
        let gain = ParamDescriptor::gain_db("High", "High", -15.0, 15.0, 0.0);
        assert_eq!(gain.unit, ParamUnit::Decibels);
        assert_eq!(gain.scale, ParamScale::Linear);
        assert_eq!(gain.step, 0.2);

        let freq = ParamDescriptor::freq_hz("Mid Freq", "Freq", 313.3, 5705.6, 1337.0);
        assert_eq!(freq.unit, ParamUnit::Hertz);
        assert_eq!(freq.scale, ParamScale::Logarithmic);
        assert_eq!(freq.step, 50.0);
    }

    #[test]
    fn test_builders() {
        let desc = ParamDescriptor::gain_db("Low", "Low", -15.0, 15.0, 0.0)
            .with_id(ParamId(1), "low_gain");
        assert_eq!(desc.id, ParamId(1));
        assert_eq!(desc.string_id, "low_gain");
        assert_eq!(desc.step, 0.2);
        assert_eq!(desc.name, "Low");
    }

    #[test]
    fn test_param_unit_suffix() {
        assert_eq!(ParamUnit::Decibels.suffix(), "dB");
        assert_eq!(ParamUnit::Hertz.suffix(), "Hz");
    }
}

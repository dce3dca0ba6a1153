//! Knob value labels.

use alloc::format;
use alloc::string::String;

use crate::param_info::ParamUnit;
use crate::params::EqParam;

/// Render a parameter value the way its knob shows it.
///
/// Gains print with one decimal, or two while fine adjustment is held.
/// The frequency always prints with one decimal.
///
/// ```rust
/// use triband_core::{EqParam, format_value};
///
/// assert_eq!(format_value(EqParam::HighGain, 6.5, false), "6.5dB");
/// assert_eq!(format_value(EqParam::HighGain, 6.55, true), "6.55dB");
/// assert_eq!(format_value(EqParam::MidFreq, 1337.0, false), "1337.0Hz");
/// ```
pub fn format_value(param: EqParam, value: f32, fine: bool) -> String {
    let unit = param.descriptor().unit;
    match unit {
        ParamUnit::Decibels if fine => format!("{value:.2}{}", unit.suffix()),
        ParamUnit::Decibels | ParamUnit::Hertz => format!("{value:.1}{}", unit.suffix()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_precision_follows_fine_mode() {
        assert_eq!(format_value(EqParam::LowGain, -3.0, false), "-3.0dB");
        assert_eq!(format_value(EqParam::LowGain, -3.0, true), "-3.00dB");
        assert_eq!(format_value(EqParam::MidGain, 14.96, false), "15.0dB");
    }

    #[test]
    fn frequency_ignores_fine_mode() {
        assert_eq!(format_value(EqParam::MidFreq, 313.3, false), "313.3Hz");
        assert_eq!(format_value(EqParam::MidFreq, 313.3, true), "313.3Hz");
    }
}

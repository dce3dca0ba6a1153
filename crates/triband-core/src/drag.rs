//! Drag-to-value mapping for knobs.
//!
//! A knob moves its parameter by `step` per logical pixel of vertical drag,
//! measured in the parameter's normalized space so log-scaled knobs sweep at
//! an even visual speed. Holding the fine-adjust modifier halves the step.

use crate::param_info::ParamDescriptor;

/// Step multiplier while the fine-adjust modifier is held.
pub const FINE_STEP_FACTOR: f32 = 0.5;

/// Effective per-pixel step for the current modifier state.
#[inline]
pub fn drag_step(desc: &ParamDescriptor, fine: bool) -> f32 {
    if fine {
        desc.step * FINE_STEP_FACTOR
    } else {
        desc.step
    }
}

/// New value after dragging `delta_px` pixels upward (negative = downward).
///
/// The result is always inside `[min, max]`, even if `value` was not. A
/// non-finite `value` drags from the parameter's default.
pub fn drag_value(desc: &ParamDescriptor, value: f32, delta_px: f32, fine: bool) -> f32 {
    let range = desc.max - desc.min;
    if range <= 0.0 {
        return desc.min;
    }

    let value = if value.is_finite() { value } else { desc.default };
    let start = desc.normalize(desc.clamp(value));
    let normalized = start + delta_px * drag_step(desc, fine) / range;

    if normalized <= 0.0 {
        desc.min
    } else if normalized >= 1.0 {
        desc.max
    } else {
        desc.clamp(desc.denormalize(normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::EqParam;

    #[test]
    fn gain_moves_by_step_per_pixel() {
        let desc = EqParam::HighGain.descriptor();
        let v = drag_value(desc, 0.0, 10.0, false);
        assert!((v - 2.0).abs() < 1e-4, "got {v}");
        let v = drag_value(desc, 0.0, -10.0, false);
        assert!((v + 2.0).abs() < 1e-4, "got {v}");
    }

    #[test]
    fn fine_mode_halves_step() {
        let desc = EqParam::MidGain.descriptor();
        assert_eq!(drag_step(desc, true), desc.step / 2.0);
        let v = drag_value(desc, 0.0, 10.0, true);
        assert!((v - 1.0).abs() < 1e-4, "got {v}");
    }

    #[test]
    fn clamps_to_range() {
        let desc = EqParam::LowGain.descriptor();
        assert_eq!(drag_value(desc, 14.0, 1000.0, false), 15.0);
        assert_eq!(drag_value(desc, -14.0, -1000.0, false), -15.0);

        let freq = EqParam::MidFreq.descriptor();
        assert_eq!(drag_value(freq, 5000.0, 1000.0, false), 5705.6);
        assert_eq!(drag_value(freq, 400.0, -1000.0, false), 313.3);
    }

    #[test]
    fn out_of_range_start_is_pulled_in() {
        let desc = EqParam::HighGain.descriptor();
        assert_eq!(drag_value(desc, 40.0, 0.0, false), 15.0);
    }

    #[test]
    fn non_finite_start_drags_from_default() {
        let gain = EqParam::HighGain.descriptor();
        let v = drag_value(gain, f32::NAN, 5.0, false);
        assert!((v - 1.0).abs() < 1e-4, "got {v}");
        assert_eq!(drag_value(gain, f32::INFINITY, 0.0, false), 0.0);

        let freq = EqParam::MidFreq.descriptor();
        assert_eq!(drag_value(freq, f32::NEG_INFINITY, 0.0, false), 1337.0);
    }

    #[test]
    fn log_knob_moves_evenly_in_normalized_space() {
        let freq = EqParam::MidFreq.descriptor();
        let up = drag_value(freq, 1337.0, 20.0, false);
        let down = drag_value(freq, 1337.0, -20.0, false);
        assert!(up > 1337.0 && down < 1337.0);
        // Equal pixel distances are equal ratios on a log knob
        let ratio_up = up / 1337.0;
        let ratio_down = 1337.0 / down;
        assert!((ratio_up - ratio_down).abs() < 1e-3);
    }
}

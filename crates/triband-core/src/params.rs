//! The EQ's fixed parameter contract and the editor-side value store.
//!
//! The host-side parameter declaration and this table must agree exactly:
//!
//! | Index | Parameter  | Unit | Range          | Scale | Default |
//! |-------|------------|------|----------------|-------|---------|
//! | 0     | High gain  | dB   | −15 … 15       | lin   | 0       |
//! | 1     | Low gain   | dB   | −15 … 15       | lin   | 0       |
//! | 2     | Mid gain   | dB   | −15 … 15       | lin   | 0       |
//! | 3     | Mid freq   | Hz   | 313.3 … 5705.6 | log   | 1337    |

use crate::param_info::{ParamDescriptor, ParamId};

/// Lower bound shared by all three gain parameters, in dB.
pub const GAIN_MIN_DB: f32 = -15.0;
/// Upper bound shared by all three gain parameters, in dB.
pub const GAIN_MAX_DB: f32 = 15.0;
/// Lowest mid-band center frequency, in Hz.
pub const MID_FREQ_MIN_HZ: f32 = 313.3;
/// Highest mid-band center frequency, in Hz.
pub const MID_FREQ_MAX_HZ: f32 = 5705.6;
/// Mid-band center frequency at construction and after a reset, in Hz.
pub const MID_FREQ_DEFAULT_HZ: f32 = 1337.0;

/// Number of host-visible parameters.
pub const PARAM_COUNT: usize = 4;

const HIGH_GAIN: ParamDescriptor =
    ParamDescriptor::gain_db("High", "High", GAIN_MIN_DB, GAIN_MAX_DB, 0.0)
        .with_id(ParamId(0), "high_gain");
const LOW_GAIN: ParamDescriptor =
    ParamDescriptor::gain_db("Low", "Low", GAIN_MIN_DB, GAIN_MAX_DB, 0.0)
        .with_id(ParamId(1), "low_gain");
const MID_GAIN: ParamDescriptor =
    ParamDescriptor::gain_db("Mid", "Mid", GAIN_MIN_DB, GAIN_MAX_DB, 0.0)
        .with_id(ParamId(2), "mid_gain");
const MID_FREQ: ParamDescriptor = ParamDescriptor::freq_hz(
    "Mid Freq",
    "Freq",
    MID_FREQ_MIN_HZ,
    MID_FREQ_MAX_HZ,
    MID_FREQ_DEFAULT_HZ,
)
.with_id(ParamId(3), "mid_freq");

/// One of the plugin's four automatable controls.
///
/// The discriminant is the host parameter index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EqParam {
    /// High shelf gain (index 0).
    HighGain = 0,
    /// Low shelf gain (index 1).
    LowGain = 1,
    /// Mid peak gain (index 2).
    MidGain = 2,
    /// Mid peak center frequency (index 3).
    MidFreq = 3,
}

impl EqParam {
    /// All parameters in host index order.
    pub const ALL: [EqParam; PARAM_COUNT] = [
        EqParam::HighGain,
        EqParam::LowGain,
        EqParam::MidGain,
        EqParam::MidFreq,
    ];

    /// Look up a parameter by host index. `None` for anything outside `0..4`.
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(EqParam::HighGain),
            1 => Some(EqParam::LowGain),
            2 => Some(EqParam::MidGain),
            3 => Some(EqParam::MidFreq),
            _ => None,
        }
    }

    /// Host parameter index.
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Static descriptor for this parameter.
    pub fn descriptor(self) -> &'static ParamDescriptor {
        match self {
            EqParam::HighGain => &HIGH_GAIN,
            EqParam::LowGain => &LOW_GAIN,
            EqParam::MidGain => &MID_GAIN,
            EqParam::MidFreq => &MID_FREQ,
        }
    }
}

/// Current value of every parameter as the editor last saw it.
///
/// Written by host notifications and by local gestures; whichever write
/// happens last wins. Values are stored exactly as received, so a host may
/// transiently push a value outside the declared range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterState {
    /// High shelf gain in dB.
    pub high_gain_db: f32,
    /// Low shelf gain in dB.
    pub low_gain_db: f32,
    /// Mid band gain in dB.
    pub mid_gain_db: f32,
    /// Mid band center frequency in Hz.
    pub mid_freq_hz: f32,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self {
            high_gain_db: HIGH_GAIN.default,
            low_gain_db: LOW_GAIN.default,
            mid_gain_db: MID_GAIN.default,
            mid_freq_hz: MID_FREQ.default,
        }
    }
}

impl ParameterState {
    /// Read a parameter value.
    pub fn get(&self, param: EqParam) -> f32 {
        match param {
            EqParam::HighGain => self.high_gain_db,
            EqParam::LowGain => self.low_gain_db,
            EqParam::MidGain => self.mid_gain_db,
            EqParam::MidFreq => self.mid_freq_hz,
        }
    }

    /// Overwrite a parameter value, unclamped.
    pub fn set(&mut self, param: EqParam, value: f32) {
        match param {
            EqParam::HighGain => self.high_gain_db = value,
            EqParam::LowGain => self.low_gain_db = value,
            EqParam::MidGain => self.mid_gain_db = value,
            EqParam::MidFreq => self.mid_freq_hz = value,
        }
    }

    /// Restore a parameter to its declared default and return that value.
    pub fn reset(&mut self, param: EqParam) -> f32 {
        let default = param.descriptor().default;
        self.set(param, default);
        default
    }
}

/// Static per-knob display data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobSpec {
    /// Parameter the knob is bound to.
    pub param: EqParam,
    /// Text drawn under the knob.
    pub label: &'static str,
    /// Knob diameter in logical pixels.
    pub diameter: f32,
    /// Number of tick marks along the sweep.
    pub ticks: u8,
    /// Horizontal indent from the window's content edge, in logical pixels.
    pub indent: f32,
}

/// Knob layout, top to bottom.
pub const KNOB_LAYOUT: [KnobSpec; PARAM_COUNT] = [
    KnobSpec {
        param: EqParam::HighGain,
        label: "High",
        diameter: 100.0,
        ticks: 7,
        indent: 0.0,
    },
    KnobSpec {
        param: EqParam::MidGain,
        label: "Mid",
        diameter: 100.0,
        ticks: 7,
        indent: 0.0,
    },
    KnobSpec {
        param: EqParam::MidFreq,
        label: "Mid Freq",
        diameter: 70.0,
        ticks: 11,
        indent: 15.0,
    },
    KnobSpec {
        param: EqParam::LowGain,
        label: "Low",
        diameter: 100.0,
        ticks: 7,
        indent: 0.0,
    },
];

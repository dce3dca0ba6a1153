//! Triband Core - parameter contract and knob feedback math for a 3-band EQ
//!
//! This crate holds everything about the EQ's control surface that does not
//! depend on a GUI toolkit: the host parameter table, the editor's value
//! store, drag stepping, label formatting, and the colors knobs use to show
//! gain and frequency at a glance.
//!
//! # Parameters
//!
//! - [`EqParam`] - The four host parameters, indexed `0..4`
//! - [`ParamDescriptor`] - Range, default, drag step, unit and scale of one parameter
//! - [`ParameterState`] - Last known value of every parameter
//! - [`KNOB_LAYOUT`] - Display order and size of the knobs
//!
//! # Knob Feedback
//!
//! - [`color_bright`] - Brighten a band color by its gain, gray when switched off
//! - [`color_mid`] - Blend low/mid/high colors by the mid band frequency
//! - [`Palette`] - The editor's band colors
//! - [`drag_value`] - Map a vertical drag to a new parameter value
//! - [`format_value`] - Knob label text
//!
//! # no_std Support
//!
//! Disable the default `std` feature to use this crate without the standard
//! library; label formatting still needs `alloc`.
//!
//! ```toml
//! [dependencies]
//! triband-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod color;
pub mod drag;
pub mod format;
pub mod info;
pub mod palette;
pub mod param_info;
pub mod params;

pub use color::{Rgba, color_bright, color_mid, mid_freq_position};
pub use drag::{FINE_STEP_FACTOR, drag_step, drag_value};
pub use format::format_value;
pub use info::{PLUGIN_INFO, PluginInfo};
pub use palette::{BandShade, KnobColors, Palette};
pub use param_info::{ParamDescriptor, ParamId, ParamScale, ParamUnit};
pub use params::{
    EqParam, GAIN_MAX_DB, GAIN_MIN_DB, KNOB_LAYOUT, KnobSpec, MID_FREQ_DEFAULT_HZ,
    MID_FREQ_MAX_HZ, MID_FREQ_MIN_HZ, PARAM_COUNT, ParameterState,
};

//! Custom widgets for the Triband editor.

pub mod knob;

pub use knob::Knob;

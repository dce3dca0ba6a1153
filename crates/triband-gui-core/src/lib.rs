//! Shared GUI infrastructure for the Triband EQ editor.
//!
//! This crate holds the egui side of the editor, independent of how it is
//! hosted: a plugin wrapper and the standalone app both drive the same
//! [`EqEditor`] through the [`PluginUi`] trait and receive its edits through
//! a [`HostBridge`].
//!
//! # Modules
//!
//! - [`host_bridge`] - Outbound parameter protocol
//! - [`gesture`] - Per-knob press/drag/double-click/release state machine
//! - [`editor`] - The knob surface controller
//! - [`theme`] - Palette-to-egui styling
//! - [`widgets`] - Stepped-tick rotary knob

pub mod editor;
pub mod gesture;
pub mod host_bridge;
pub mod theme;
pub mod widgets;

pub use editor::{EqEditor, FontSet, PluginUi, RenderContext};
pub use gesture::{GestureState, GestureTracker, KnobInput};
pub use host_bridge::HostBridge;
pub use theme::{KnobFill, Theme, to_color32};

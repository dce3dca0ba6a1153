//! Outbound half of the host parameter protocol.
//!
//! The editor never writes parameters directly. Every change it makes goes
//! through a [`HostBridge`], which forwards it to whatever owns the real
//! parameter store: a plugin host, or the standalone app's in-process host.
//!
//! ```text
//! knob gesture ──► HostBridge::edit_parameter(p, true)
//!                  HostBridge::set_parameter_value(p, v)   (per change)
//!                  HostBridge::edit_parameter(p, false)
//!                          │
//!                        host ──► PluginUi::parameter_changed(p, v)
//! ```
//!
//! The inbound half is [`PluginUi::parameter_changed`](crate::PluginUi::parameter_changed).

use triband_core::EqParam;

/// Receives parameter edits from the editor.
///
/// Called from the UI thread only, once per event, in gesture order.
pub trait HostBridge {
    /// Ask the host to apply a new plain (unnormalized) parameter value.
    fn set_parameter_value(&self, param: EqParam, value: f32);

    /// Open (`true`) or close (`false`) an edit gesture on a parameter.
    ///
    /// Hosts use the bracket to group automation recording and undo.
    fn edit_parameter(&self, param: EqParam, editing: bool);
}

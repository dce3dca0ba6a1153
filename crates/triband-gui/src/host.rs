//! In-process host for running the editor without a plugin runtime.
//!
//! [`StandaloneHost`] plays the part a DAW would: it owns the parameter
//! values, tracks open edit gestures, and reports every accepted value back
//! to the editor through a notification queue drained once per frame.
//!
//! Values are stored as `f32` bit patterns in `AtomicU32`, so any thread may
//! read or write them; only the notification queue takes a lock.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use triband_core::{EqParam, PARAM_COUNT};
use triband_gui_core::HostBridge;

/// Parameter store and gesture log standing in for a plugin host.
pub struct StandaloneHost {
    values: [AtomicU32; PARAM_COUNT],
    editing: [AtomicBool; PARAM_COUNT],
    pending: Mutex<Vec<(u32, f32)>>,
}

impl StandaloneHost {
    /// Every parameter at its declared default, nothing queued.
    pub fn new() -> Self {
        Self {
            values: EqParam::ALL.map(|p| AtomicU32::new(p.descriptor().default.to_bits())),
            editing: std::array::from_fn(|_| AtomicBool::new(false)),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Current value of a parameter.
    pub fn get(&self, param: EqParam) -> f32 {
        f32::from_bits(self.values[param.index() as usize].load(Ordering::Relaxed))
    }

    /// Whether the editor has an open gesture on a parameter.
    pub fn is_editing(&self, param: EqParam) -> bool {
        self.editing[param.index() as usize].load(Ordering::Relaxed)
    }

    /// Change a parameter from the host side (automation, startup values).
    ///
    /// The value is clamped to the parameter's range and queued for the editor.
    pub fn automate(&self, param: EqParam, value: f32) {
        let stored = self.store(param, value);
        tracing::debug!(param = ?param, value = stored, "host automation");
        self.pending.lock().push((param.index(), stored));
    }

    /// Take every queued `(index, value)` notification, oldest first.
    pub fn drain_notifications(&self) -> Vec<(u32, f32)> {
        std::mem::take(&mut *self.pending.lock())
    }

    fn store(&self, param: EqParam, value: f32) -> f32 {
        let clamped = param.descriptor().clamp(value);
        self.values[param.index() as usize].store(clamped.to_bits(), Ordering::Relaxed);
        clamped
    }
}

impl Default for StandaloneHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge for StandaloneHost {
    fn set_parameter_value(&self, param: EqParam, value: f32) {
        let stored = self.store(param, value);
        tracing::trace!(param = ?param, value = stored, "set parameter");
        // Only a clamped value differs from what the editor already shows
        if stored != value {
            self.pending.lock().push((param.index(), stored));
        }
    }

    fn edit_parameter(&self, param: EqParam, editing: bool) {
        let was = self.editing[param.index() as usize].swap(editing, Ordering::Relaxed);
        if was != editing {
            tracing::debug!(param = ?param, editing, "edit gesture");
        }
    }
}

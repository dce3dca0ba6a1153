//! Triband GUI - standalone window for the 3-band EQ editor
//!
//! Runs the same [`EqEditor`](triband_gui_core::EqEditor) a plugin wrapper
//! would, against an in-process [`StandaloneHost`].

pub mod app;
pub mod host;
pub mod settings;

pub use app::TribandApp;
pub use host::StandaloneHost;
pub use settings::{Overrides, resolve_config};

//! Static plugin metadata shared by every wrapper format.

/// Host-facing description of the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    /// Display name.
    pub name: &'static str,
    /// Window title.
    pub title: &'static str,
    /// Vendor name.
    pub vendor: &'static str,
    /// LV2 URI.
    pub uri: &'static str,
    /// CLAP plugin id.
    pub clap_id: &'static str,
    /// Audio input channels.
    pub num_inputs: u32,
    /// Audio output channels.
    pub num_outputs: u32,
    /// Whether the plugin is an instrument.
    pub is_synth: bool,
    /// Whether the plugin ships an editor.
    pub has_ui: bool,
    /// Whether processing is real-time safe.
    pub is_rt_safe: bool,
    /// Whether the plugin exposes programs.
    pub wants_programs: bool,
    /// Whether the plugin persists custom state.
    pub wants_state: bool,
    /// Whether the plugin reads host transport position.
    pub wants_time_pos: bool,
    /// LV2 plugin class.
    pub lv2_category: &'static str,
    /// VST3 subcategory string.
    pub vst3_categories: &'static str,
    /// CLAP feature tags.
    pub clap_features: &'static [&'static str],
    /// Editor width in logical pixels.
    pub ui_width: u32,
    /// Editor height in logical pixels.
    pub ui_height: u32,
}

/// Metadata for the Triband EQ.
pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "Triband EQ",
    title: "TRIBAND",
    vendor: "Sonido",
    uri: "https://sonido.audio/plugins/triband",
    clap_id: "audio.sonido.triband",
    num_inputs: 2,
    num_outputs: 2,
    is_synth: false,
    has_ui: true,
    is_rt_safe: true,
    wants_programs: false,
    wants_state: false,
    wants_time_pos: true,
    lv2_category: "lv2:EQPlugin",
    vst3_categories: "Fx|EQ|Stereo",
    clap_features: &["audio-effect", "equalizer", "stereo"],
    ui_width: 120,
    ui_height: 520,
};

//! The EQ editor: knob surface controller and host-facing UI trait.

use crate::gesture::{GestureTracker, KnobInput};
use crate::host_bridge::HostBridge;
use crate::theme::{KnobFill, Theme};
use crate::widgets::Knob;
use egui::{FontId, Response, RichText};
use triband_config::{EditorConfig, ReleasePolicy, Variant};
use triband_core::{
    EqParam, KNOB_LAYOUT, KnobColors, PLUGIN_INFO, Palette, ParameterState, format_value,
};

/// Fonts used by the editor, owned by the caller and passed in per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSet {
    /// Knob labels, value text and tooltips.
    pub body: FontId,
    /// Window title.
    pub title: FontId,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            body: FontId::monospace(14.0),
            title: FontId::monospace(18.0),
        }
    }
}

/// Everything a render pass needs from its surroundings.
pub struct RenderContext<'a> {
    /// egui context for this frame.
    pub ctx: &'a egui::Context,
    /// Where parameter edits go.
    pub host: &'a dyn HostBridge,
    /// Fonts for this frame.
    pub fonts: &'a FontSet,
}

/// Host-facing editor interface.
pub trait PluginUi {
    /// The host reports a parameter's current value.
    ///
    /// Unknown indices are ignored.
    fn parameter_changed(&mut self, index: u32, value: f32);

    /// Draw one frame and forward any gestures to `rc.host`.
    fn render(&mut self, rc: &RenderContext<'_>);
}

/// Controller behind the four-knob EQ surface.
pub struct EqEditor {
    values: ParameterState,
    gestures: GestureTracker,
    variant: Variant,
    palette: Palette,
    theme: Theme,
    repaint_requested: bool,
}

impl EqEditor {
    /// Editor with default parameter values and the given settings.
    pub fn new(config: &EditorConfig) -> Self {
        let palette = Palette::default();
        Self {
            values: ParameterState::default(),
            gestures: GestureTracker::new(config.release_policy),
            variant: config.variant,
            theme: Theme::from_palette(&palette),
            palette,
            repaint_requested: false,
        }
    }

    /// Last known parameter values.
    pub fn values(&self) -> &ParameterState {
        &self.values
    }

    /// Active variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Release policy in effect.
    pub fn release_policy(&self) -> ReleasePolicy {
        self.gestures.policy()
    }

    /// Window title for the active variant.
    pub fn title(&self) -> String {
        let suffix = match self.variant {
            Variant::ThreeQ => "3Q",
            Variant::Eq => "EQ",
        };
        format!("{} {suffix}", PLUGIN_INFO.title)
    }

    /// Knob shades for a parameter under the active variant.
    pub fn knob_colors(&self, param: EqParam) -> KnobColors {
        match self.variant {
            Variant::ThreeQ => self.palette.feedback_colors(param, &self.values),
            Variant::Eq => self.palette.static_colors(param),
        }
    }

    /// Whether a knob has an open edit gesture.
    pub fn is_editing(&self, param: EqParam) -> bool {
        self.gestures.is_editing(param)
    }

    /// Feed one frame of input for one knob through the gesture tracker.
    ///
    /// Returns `true` if the value changed.
    pub fn handle_knob_input(
        &mut self,
        param: EqParam,
        input: KnobInput,
        host: &dyn HostBridge,
    ) -> bool {
        self.gestures.process(param, input, &mut self.values, host)
    }

    /// Consume a pending repaint request set by [`PluginUi::parameter_changed`].
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }
}

impl PluginUi for EqEditor {
    fn parameter_changed(&mut self, index: u32, value: f32) {
        let Some(param) = EqParam::from_index(index) else {
            tracing::trace!(index, value, "ignoring unknown parameter index");
            return;
        };
        self.values.set(param, value);
        self.repaint_requested = true;
    }

    fn render(&mut self, rc: &RenderContext<'_>) {
        self.theme.apply(rc.ctx);
        let title = self.title();

        egui::TopBottomPanel::top("triband_title")
            .frame(
                egui::Frame::default()
                    .fill(self.theme.title_bg)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(rc.ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).font(rc.fonts.title.clone()));
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(self.theme.background)
                    .inner_margin(egui::Margin::same(10)),
            )
            .show(rc.ctx, |ui| {
                let fine = ui.input(|i| i.modifiers.shift);

                for knob in &KNOB_LAYOUT {
                    let param = knob.param;
                    let value = self.values.get(param);
                    let value_text = format_value(param, value, fine);
                    let fill = KnobFill::from_colors(self.knob_colors(param));
                    let editing = self.gestures.is_editing(param);

                    let response = ui
                        .horizontal(|ui| {
                            ui.add_space(knob.indent);
                            ui.add(
                                Knob::new(
                                    value,
                                    param.descriptor(),
                                    knob.label,
                                    &value_text,
                                    &self.theme,
                                )
                                .diameter(knob.diameter)
                                .ticks(knob.ticks)
                                .fill(fill)
                                .editing(editing)
                                .font(rc.fonts.body.clone()),
                            )
                        })
                        .inner;

                    let input = knob_input(&response, fine);
                    if self.gestures.process(param, input, &mut self.values, rc.host) {
                        rc.ctx.request_repaint();
                    }

                    if !input.pressed {
                        let tooltip = format_value(param, self.values.get(param), fine);
                        response.on_hover_text(RichText::new(tooltip).font(rc.fonts.body.clone()));
                    }
                }
            });
    }
}

/// Gesture snapshot for a knob from its egui response.
fn knob_input(response: &Response, fine: bool) -> KnobInput {
    KnobInput {
        pressed: response.is_pointer_button_down_on(),
        double_clicked: response.double_clicked(),
        drag_delta: -response.drag_delta().y,
        fine,
    }
}

//! Stepped-tick rotary knob.
//!
//! The knob only draws and reports interaction. It never writes the value
//! itself; the editor's gesture tracker reads the returned [`Response`] and
//! decides what to send to the host.
//!
//! - 270° sweep from bottom-left to bottom-right
//! - Evenly spaced tick marks, value arc and pointer
//! - Label above, value text below

use crate::theme::{KnobFill, Theme};
use egui::{Align2, Color32, FontId, Pos2, Response, Sense, Stroke, Ui, Widget, pos2, vec2};
use std::f32::consts::PI;
use triband_core::ParamDescriptor;

const START_ANGLE: f32 = PI * 0.75;
const END_ANGLE: f32 = PI * 2.25;
const LABEL_HEIGHT: f32 = 20.0;
const VALUE_HEIGHT: f32 = 20.0;

/// Rotary knob parameters.
pub struct Knob<'a> {
    value: f32,
    desc: &'a ParamDescriptor,
    label: &'a str,
    value_text: &'a str,
    diameter: f32,
    ticks: u8,
    fill: KnobFill,
    editing: bool,
    font: FontId,
    theme: &'a Theme,
}

impl<'a> Knob<'a> {
    /// Knob showing `value` on `desc`'s range.
    pub fn new(
        value: f32,
        desc: &'a ParamDescriptor,
        label: &'a str,
        value_text: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            value,
            desc,
            label,
            value_text,
            diameter: 60.0,
            ticks: 7,
            fill: KnobFill {
                idle: theme.knob_track,
                hovered: theme.knob_track,
                active: theme.knob_track,
            },
            editing: false,
            font: FontId::proportional(14.0),
            theme,
        }
    }

    /// Set knob diameter in pixels.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Set the number of tick marks.
    pub fn ticks(mut self, ticks: u8) -> Self {
        self.ticks = ticks;
        self
    }

    /// Set the body fills.
    pub fn fill(mut self, fill: KnobFill) -> Self {
        self.fill = fill;
        self
    }

    /// Draw in the pressed state regardless of pointer position.
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// Font for the label and value text.
    pub fn font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }
}

/// Angle of the knob pointer for a normalized position.
pub fn value_angle(normalized: f32) -> f32 {
    START_ANGLE + normalized.clamp(0.0, 1.0) * (END_ANGLE - START_ANGLE)
}

impl Widget for Knob<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = vec2(self.diameter, self.diameter + LABEL_HEIGHT + VALUE_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = pos2(rect.center().x, rect.top() + LABEL_HEIGHT + self.diameter / 2.0);
            let radius = self.diameter / 2.0;

            painter.text(
                pos2(rect.center().x, rect.top()),
                Align2::CENTER_TOP,
                self.label,
                self.font.clone(),
                self.theme.text_primary,
            );

            // Ticks sit on the outer ring
            let steps = self.ticks.max(2);
            for i in 0..steps {
                let t = f32::from(i) / f32::from(steps - 1);
                let angle = value_angle(t);
                let dir = vec2(angle.cos(), angle.sin());
                painter.line_segment(
                    [center + dir * (radius * 0.88), center + dir * (radius - 1.0)],
                    Stroke::new(2.0, self.theme.knob_track),
                );
            }

            let normalized = self.desc.normalize(self.desc.clamp(self.value));
            let angle = value_angle(normalized);

            let body = if self.editing || response.is_pointer_button_down_on() {
                self.fill.active
            } else if response.hovered() {
                self.fill.hovered
            } else {
                self.fill.idle
            };

            draw_arc(
                painter,
                center,
                radius * 0.8,
                START_ANGLE,
                angle,
                body,
                3.0,
            );
            painter.circle_filled(center, radius * 0.7, body);

            let dir = vec2(angle.cos(), angle.sin());
            painter.line_segment(
                [center + dir * (radius * 0.35), center + dir * (radius * 0.65)],
                Stroke::new(3.0, self.theme.knob_pointer),
            );

            painter.text(
                pos2(rect.center().x, center.y + radius + 2.0),
                Align2::CENTER_TOP,
                self.value_text,
                self.font,
                self.theme.text_secondary,
            );
        }

        response
    }
}

/// Draw an arc using line segments.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: Color32,
    stroke_width: f32,
) {
    let sweep = end_angle - start_angle;
    if sweep <= 0.001 {
        return;
    }
    let segments = 32;

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start_angle + t * sweep;
            pos2(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], Stroke::new(stroke_width, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_is_270_degrees() {
        let sweep = value_angle(1.0) - value_angle(0.0);
        assert!((sweep - PI * 1.5).abs() < 1e-6);
    }

    #[test]
    fn angle_clamps_out_of_range() {
        assert_eq!(value_angle(-0.5), value_angle(0.0));
        assert_eq!(value_angle(2.0), value_angle(1.0));
    }
}

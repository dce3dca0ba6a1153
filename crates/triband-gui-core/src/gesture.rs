//! Per-knob gesture state machine.
//!
//! Each knob is either `Idle` or `Editing`. Pressing a knob opens an edit
//! gesture with the host; while the button stays down, drags move the value
//! and a double-click resets it, each change forwarded at once. Releasing the
//! button closes the gesture according to the configured [`ReleasePolicy`].
//!
//! The machine is driven by plain [`KnobInput`] snapshots, one per knob per
//! frame, so it runs the same with or without a GUI toolkit behind it.

use crate::HostBridge;
use triband_config::ReleasePolicy;
use triband_core::{EqParam, PARAM_COUNT, ParameterState, drag_value};

/// Gesture phase of one knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture open.
    #[default]
    Idle,
    /// The pointer is holding the knob; an edit gesture is open.
    Editing,
}

/// What happened to one knob during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnobInput {
    /// Primary button is held down on this knob.
    pub pressed: bool,
    /// A double-click completed on this knob this frame.
    pub double_clicked: bool,
    /// Vertical drag this frame in logical pixels, positive = upward.
    ///
    /// egui holds back motion until the pointer passes its drag threshold,
    /// so the first few pixels of a drag never arrive here.
    pub drag_delta: f32,
    /// Fine-adjust modifier is held.
    pub fine: bool,
}

/// Gesture state for all four knobs.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    states: [GestureState; PARAM_COUNT],
    policy: ReleasePolicy,
}

impl GestureTracker {
    /// All knobs idle.
    pub fn new(policy: ReleasePolicy) -> Self {
        Self {
            states: [GestureState::Idle; PARAM_COUNT],
            policy,
        }
    }

    /// Current phase of a knob.
    pub fn state(&self, param: EqParam) -> GestureState {
        self.states[param.index() as usize]
    }

    /// Whether a knob has an open gesture.
    pub fn is_editing(&self, param: EqParam) -> bool {
        self.state(param) == GestureState::Editing
    }

    /// Release behavior in effect.
    pub fn policy(&self) -> ReleasePolicy {
        self.policy
    }

    /// Advance one knob by one frame of input.
    ///
    /// Returns `true` if the knob's value changed (and was sent to the host).
    pub fn process(
        &mut self,
        param: EqParam,
        input: KnobInput,
        values: &mut ParameterState,
        host: &dyn HostBridge,
    ) -> bool {
        let slot = param.index() as usize;

        if input.pressed && self.states[slot] == GestureState::Idle {
            self.states[slot] = GestureState::Editing;
            tracing::trace!(param = ?param, "gesture begin");
            host.edit_parameter(param, true);
        }

        let mut changed = false;
        if self.states[slot] == GestureState::Editing {
            if input.double_clicked {
                values.reset(param);
                changed = true;
            } else if input.drag_delta != 0.0 {
                let current = values.get(param);
                let next = drag_value(param.descriptor(), current, input.drag_delta, input.fine);
                if next != current {
                    values.set(param, next);
                    changed = true;
                }
            }

            if changed {
                host.set_parameter_value(param, values.get(param));
            }

            if !input.pressed {
                self.states[slot] = GestureState::Idle;
                tracing::trace!(param = ?param, policy = %self.policy, "gesture end");
                self.close(param, host);
            }
        }

        changed
    }

    fn close(&self, released: EqParam, host: &dyn HostBridge) {
        match self.policy {
            ReleasePolicy::AllKnobs => {
                for param in EqParam::ALL {
                    host.edit_parameter(param, false);
                }
            }
            ReleasePolicy::ActiveOnly => host.edit_parameter(released, false),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// One host callback, as recorded by [`RecordingHost`].
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) enum HostEvent {
        Edit(EqParam, bool),
        Set(EqParam, f32),
    }

    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub(crate) events: RefCell<Vec<HostEvent>>,
    }

    impl RecordingHost {
        pub(crate) fn take(&self) -> Vec<HostEvent> {
            self.events.take()
        }
    }

    impl HostBridge for RecordingHost {
        fn set_parameter_value(&self, param: EqParam, value: f32) {
            self.events.borrow_mut().push(HostEvent::Set(param, value));
        }

        fn edit_parameter(&self, param: EqParam, editing: bool) {
            self.events.borrow_mut().push(HostEvent::Edit(param, editing));
        }
    }

    fn press() -> KnobInput {
        KnobInput {
            pressed: true,
            ..KnobInput::default()
        }
    }

    fn drag(delta: f32) -> KnobInput {
        KnobInput {
            pressed: true,
            drag_delta: delta,
            ..KnobInput::default()
        }
    }

    #[test]
    fn idle_frames_emit_nothing() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);
        let mut values = ParameterState::default();

        for _ in 0..3 {
            assert!(!tracker.process(EqParam::HighGain, KnobInput::default(), &mut values, &host));
        }
        assert!(host.take().is_empty());
        assert_eq!(tracker.state(EqParam::HighGain), GestureState::Idle);
    }

    #[test]
    fn full_drag_brackets_with_all_knob_release() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);
        let mut values = ParameterState::default();

        tracker.process(EqParam::MidGain, press(), &mut values, &host);
        assert!(tracker.is_editing(EqParam::MidGain));
        tracker.process(EqParam::MidGain, drag(5.0), &mut values, &host);
        tracker.process(EqParam::MidGain, drag(5.0), &mut values, &host);
        tracker.process(EqParam::MidGain, KnobInput::default(), &mut values, &host);
        assert!(!tracker.is_editing(EqParam::MidGain));

        let events = host.take();
        let begins: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, HostEvent::Edit(_, true)))
            .collect();
        assert_eq!(begins, vec![&HostEvent::Edit(EqParam::MidGain, true)]);

        let sets = events
            .iter()
            .filter(|e| matches!(e, HostEvent::Set(EqParam::MidGain, _)))
            .count();
        assert_eq!(sets, 2);

        let ends: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Edit(p, false) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(ends, EqParam::ALL.to_vec());

        // Begin first, ends last
        assert_eq!(events[0], HostEvent::Edit(EqParam::MidGain, true));
        assert!(
            events[events.len() - 4..]
                .iter()
                .all(|e| matches!(e, HostEvent::Edit(_, false)))
        );
        assert!((values.mid_gain_db - 2.0).abs() < 1e-4);
    }

    #[test]
    fn active_only_release_closes_one_knob() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::ActiveOnly);
        let mut values = ParameterState::default();

        tracker.process(EqParam::LowGain, press(), &mut values, &host);
        tracker.process(EqParam::LowGain, drag(-10.0), &mut values, &host);
        tracker.process(EqParam::LowGain, KnobInput::default(), &mut values, &host);

        let events = host.take();
        assert_eq!(events.first(), Some(&HostEvent::Edit(EqParam::LowGain, true)));
        assert_eq!(events.last(), Some(&HostEvent::Edit(EqParam::LowGain, false)));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, HostEvent::Edit(_, false)))
                .count(),
            1
        );
    }

    #[test]
    fn double_click_resets_gain_to_zero() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);
        let mut values = ParameterState::default();
        values.high_gain_db = 6.5;

        tracker.process(EqParam::HighGain, press(), &mut values, &host);
        let release_with_double_click = KnobInput {
            double_clicked: true,
            ..KnobInput::default()
        };
        assert!(tracker.process(
            EqParam::HighGain,
            release_with_double_click,
            &mut values,
            &host
        ));

        assert_eq!(values.high_gain_db, 0.0);
        let events = host.take();
        assert_eq!(events[0], HostEvent::Edit(EqParam::HighGain, true));
        assert_eq!(events[1], HostEvent::Set(EqParam::HighGain, 0.0));
        assert_eq!(events.len(), 2 + 4);
    }

    #[test]
    fn double_click_resets_frequency_to_default() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::ActiveOnly);
        let mut values = ParameterState::default();
        values.mid_freq_hz = 4200.0;

        tracker.process(EqParam::MidFreq, press(), &mut values, &host);
        tracker.process(
            EqParam::MidFreq,
            KnobInput {
                pressed: true,
                double_clicked: true,
                ..KnobInput::default()
            },
            &mut values,
            &host,
        );

        assert_eq!(values.mid_freq_hz, 1337.0);
        assert!(host.take().contains(&HostEvent::Set(EqParam::MidFreq, 1337.0)));
        assert!(tracker.is_editing(EqParam::MidFreq));
    }

    #[test]
    fn double_click_without_gesture_is_ignored() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);
        let mut values = ParameterState::default();
        values.low_gain_db = 3.0;

        let input = KnobInput {
            double_clicked: true,
            ..KnobInput::default()
        };
        assert!(!tracker.process(EqParam::LowGain, input, &mut values, &host));
        assert_eq!(values.low_gain_db, 3.0);
        assert!(host.take().is_empty());
    }

    #[test]
    fn fine_drag_moves_half_as_far() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);

        let mut coarse = ParameterState::default();
        tracker.process(EqParam::HighGain, drag(10.0), &mut coarse, &host);

        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);
        let mut fine = ParameterState::default();
        let input = KnobInput {
            fine: true,
            ..drag(10.0)
        };
        tracker.process(EqParam::HighGain, input, &mut fine, &host);

        assert!((coarse.high_gain_db - 2.0).abs() < 1e-4);
        assert!((fine.high_gain_db - 1.0).abs() < 1e-4);
    }

    #[test]
    fn drag_at_limit_sends_nothing() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);
        let mut values = ParameterState::default();
        values.high_gain_db = 15.0;

        tracker.process(EqParam::HighGain, press(), &mut values, &host);
        host.take();
        assert!(!tracker.process(EqParam::HighGain, drag(20.0), &mut values, &host));
        assert!(host.take().is_empty());
        assert_eq!(values.high_gain_db, 15.0);
    }

    #[test]
    fn nan_host_value_never_reaches_host() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);
        let mut values = ParameterState::default();
        values.high_gain_db = f32::NAN;

        tracker.process(EqParam::HighGain, drag(5.0), &mut values, &host);

        assert!((values.high_gain_db - 1.0).abs() < 1e-4);
        for event in host.take() {
            if let HostEvent::Set(_, v) = event {
                assert!(v.is_finite(), "sent {v}");
            }
        }
    }

    #[test]
    fn knobs_track_independently() {
        let host = RecordingHost::default();
        let mut tracker = GestureTracker::new(ReleasePolicy::AllKnobs);
        let mut values = ParameterState::default();

        tracker.process(EqParam::HighGain, press(), &mut values, &host);
        tracker.process(EqParam::LowGain, KnobInput::default(), &mut values, &host);
        assert!(tracker.is_editing(EqParam::HighGain));
        assert!(!tracker.is_editing(EqParam::LowGain));
    }
}

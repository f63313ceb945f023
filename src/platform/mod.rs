//! Platform abstraction layer
//!
//! The narrow ports between the simulation and its host:
//! - Input triggers (key, pointer, click) folded into one jump command
//! - Feedback notifications (haptics on hosts that have them)

use crate::sim::{GameEvent, TickInput};

/// Key code that triggers a jump
pub const ACTION_KEY: &str = "Space";

/// A raw input from the host environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Keyboard key, by `KeyboardEvent.code`-style name
    Key(String),
    /// Touch or pen press
    Pointer,
    /// Primary mouse click
    Click,
}

impl Trigger {
    /// Whether this trigger means "jump"
    pub fn is_jump(&self) -> bool {
        match self {
            Trigger::Key(code) => code == ACTION_KEY,
            Trigger::Pointer | Trigger::Click => true,
        }
    }
}

/// Fold a trigger into the pending input (repeats collapse to one jump)
pub fn apply_trigger(input: &mut TickInput, trigger: &Trigger) {
    if trigger.is_jump() {
        input.jump = true;
    }
}

/// Feedback intensity a host can translate into haptics, sound, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticKind {
    Light,
    Medium,
    Success,
    Error,
}

impl HapticKind {
    /// Feedback for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped | GameEvent::Collected { .. } => Some(HapticKind::Light),
            GameEvent::Landed { .. } | GameEvent::Restarted => Some(HapticKind::Medium),
            GameEvent::LevelUp { .. } => Some(HapticKind::Success),
            GameEvent::Collision { .. } => Some(HapticKind::Error),
            GameEvent::RunStarted => None,
        }
    }
}

/// Fire-and-forget sink for game events
pub trait Feedback {
    fn notify(&mut self, event: &GameEvent);
}

/// Discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullFeedback;

impl Feedback for NullFeedback {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Logs each event with its feedback kind
#[derive(Debug, Default)]
pub struct LogFeedback;

impl Feedback for LogFeedback {
    fn notify(&mut self, event: &GameEvent) {
        match HapticKind::for_event(event) {
            Some(kind) => log::debug!("{:?} -> {:?}", event, kind),
            None => log::debug!("{:?}", event),
        }
    }
}

/// Keeps every event it receives
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub events: Vec<GameEvent>,
}

impl RecordingFeedback {
    /// Feedback kinds of the recorded events, in order
    pub fn haptics(&self) -> Vec<HapticKind> {
        self.events.iter().filter_map(HapticKind::for_event).collect()
    }
}

impl Feedback for RecordingFeedback {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}

impl<F: Feedback + ?Sized> Feedback for &mut F {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ObstacleSize;

    #[test]
    fn test_triggers_collapse_to_one_jump() {
        let mut input = TickInput::default();
        apply_trigger(&mut input, &Trigger::Key("KeyA".into()));
        assert!(!input.jump);

        apply_trigger(&mut input, &Trigger::Key(ACTION_KEY.into()));
        apply_trigger(&mut input, &Trigger::Pointer);
        apply_trigger(&mut input, &Trigger::Click);
        assert!(input.jump);
    }

    #[test]
    fn test_haptic_mapping() {
        assert_eq!(
            HapticKind::for_event(&GameEvent::Jumped),
            Some(HapticKind::Light)
        );
        assert_eq!(
            HapticKind::for_event(&GameEvent::Landed {
                kind: ObstacleSize::Small,
                points: 1
            }),
            Some(HapticKind::Medium)
        );
        assert_eq!(
            HapticKind::for_event(&GameEvent::LevelUp { level: 2 }),
            Some(HapticKind::Success)
        );
        assert_eq!(
            HapticKind::for_event(&GameEvent::Collision {
                score: 0,
                new_best: false
            }),
            Some(HapticKind::Error)
        );
        assert_eq!(HapticKind::for_event(&GameEvent::RunStarted), None);
    }

    #[test]
    fn test_recording_feedback() {
        let mut sink = RecordingFeedback::default();
        sink.notify(&GameEvent::RunStarted);
        sink.notify(&GameEvent::Jumped);
        assert_eq!(sink.events.len(), 2);
        assert_eq!(sink.haptics(), vec![HapticKind::Light]);
    }
}

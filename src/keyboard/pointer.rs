use crate::keyboard::{Keyboard, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Position),
    Move(Position),
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoiceCommand {
    Attack(f32),
    Release(Option<f32>),
    ReleaseAll,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveVoice {
    pub frequency: f32,
    pub position: Position,
}

/// Turns the gesture of a single pointer into voice commands.
///
/// At most one voice is active at a time. A new frequency always releases
/// the previous one before it is attacked.
#[derive(Debug, Default)]
pub struct VoiceTracker {
    pressed: bool,
    active: Option<ActiveVoice>,
}

impl VoiceTracker {
    pub fn new() -> VoiceTracker {
        VoiceTracker::default()
    }

    pub fn active(&self) -> Option<ActiveVoice> {
        self.active
    }

    pub fn handle(&mut self, keyboard: &Keyboard, event: PointerEvent) -> Vec<VoiceCommand> {
        match event {
            PointerEvent::Down(position) => {
                self.pressed = true;
                let mut commands = vec![];
                if let Some(active) = self.active.take() {
                    commands.push(VoiceCommand::Release(Some(active.frequency)));
                }
                self.active = keyboard.frequency_at(position).map(|frequency| {
                    commands.push(VoiceCommand::Attack(frequency));
                    ActiveVoice {
                        frequency,
                        position,
                    }
                });
                commands
            }
            PointerEvent::Move(position) => {
                if !self.pressed {
                    return vec![];
                }
                match keyboard.frequency_at(position) {
                    None => {
                        self.active = None;
                        vec![VoiceCommand::ReleaseAll]
                    }
                    Some(frequency) => {
                        let previous = self.active.replace(ActiveVoice {
                            frequency,
                            position,
                        });
                        match previous {
                            Some(previous) if previous.frequency == frequency => vec![],
                            Some(previous) => vec![
                                VoiceCommand::Release(Some(previous.frequency)),
                                VoiceCommand::Attack(frequency),
                            ],
                            None => vec![VoiceCommand::Attack(frequency)],
                        }
                    }
                }
            }
            PointerEvent::Up => {
                self.pressed = false;
                let previous = self.active.take();
                vec![VoiceCommand::Release(
                    previous.map(|previous| previous.frequency),
                )]
            }
        }
    }

    /// Releases the active voice without ending the gesture, e.g. when the
    /// keyboard changes under the pointer.
    pub fn interrupt(&mut self) -> Vec<VoiceCommand> {
        match self.active.take() {
            None => vec![],
            Some(active) => vec![VoiceCommand::Release(Some(active.frequency))],
        }
    }
}

#[cfg(test)]
mod test {
    use super::VoiceCommand::*;
    use super::*;
    use crate::keyboard::pitch::tone_to_frequency;
    use crate::keyboard::test::scale;
    use crate::keyboard::KeyboardConfig;
    use crate::scales::Scale;

    fn keyboard(scale: &Scale) -> Keyboard {
        Keyboard::new(scale, KeyboardConfig::default(), 600.0)
    }

    fn at_key(keyboard: &Keyboard, key: f32, y: f32) -> Position {
        Position {
            x: keyboard.key_width() * key,
            y,
        }
    }

    mod handle {
        use super::*;

        #[test]
        fn attacks_on_pointer_down() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.5, 100.0))),
                vec![Attack(tone_to_frequency(0.0, 12))]
            );
            assert_eq!(
                tracker.active().map(|active| active.frequency),
                Some(tone_to_frequency(0.0, 12))
            );
        }

        #[test]
        fn does_nothing_on_pointer_down_outside_the_keyboard() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.5, 400.0))),
                vec![]
            );
            assert_eq!(tracker.active(), None);
        }

        #[test]
        fn switches_voices_while_dragging() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.5, 100.0)));
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Move(at_key(&keyboard, 1.5, 100.0))),
                vec![
                    Release(Some(tone_to_frequency(0.0, 12))),
                    Attack(tone_to_frequency(1.0, 12)),
                ]
            );
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Up),
                vec![Release(Some(tone_to_frequency(1.0, 12)))]
            );
            assert_eq!(tracker.active(), None);
        }

        #[test]
        fn keeps_the_voice_when_dragging_within_a_key() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.2, 100.0)));
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Move(at_key(&keyboard, 0.8, 150.0))),
                vec![]
            );
            assert_eq!(
                tracker.active().map(|active| active.position),
                Some(at_key(&keyboard, 0.8, 150.0))
            );
        }

        #[test]
        fn releases_everything_when_leaving_the_keyboard() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.5, 100.0)));
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Move(at_key(&keyboard, 0.5, -10.0))),
                vec![ReleaseAll]
            );
            assert_eq!(tracker.active(), None);
        }

        #[test]
        fn attacks_again_when_coming_back_onto_the_keyboard() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.5, 100.0)));
            tracker.handle(&keyboard, PointerEvent::Move(at_key(&keyboard, 0.5, 310.0)));
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Move(at_key(&keyboard, 2.5, 100.0))),
                vec![Attack(tone_to_frequency(2.0, 12))]
            );
        }

        #[test]
        fn ignores_moves_without_a_pressed_pointer() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Move(at_key(&keyboard, 0.5, 100.0))),
                vec![]
            );
            tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.5, 100.0)));
            tracker.handle(&keyboard, PointerEvent::Up);
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Move(at_key(&keyboard, 1.5, 100.0))),
                vec![]
            );
        }

        #[test]
        fn releases_unconditionally_on_pointer_up() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            assert_eq!(tracker.handle(&keyboard, PointerEvent::Up), vec![Release(None)]);
            assert_eq!(tracker.handle(&keyboard, PointerEvent::Up), vec![Release(None)]);
        }

        #[test]
        fn never_keeps_two_voices_for_a_repeated_pointer_down() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.5, 100.0)));
            assert_eq!(
                tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 3.5, 100.0))),
                vec![
                    Release(Some(tone_to_frequency(0.0, 12))),
                    Attack(tone_to_frequency(3.0, 12)),
                ]
            );
        }
    }

    mod interrupt {
        use super::*;

        #[test]
        fn releases_the_active_voice() {
            let scale = scale("12");
            let keyboard = keyboard(&scale);
            let mut tracker = VoiceTracker::new();
            tracker.handle(&keyboard, PointerEvent::Down(at_key(&keyboard, 0.5, 100.0)));
            assert_eq!(
                tracker.interrupt(),
                vec![Release(Some(tone_to_frequency(0.0, 12)))]
            );
            assert_eq!(tracker.interrupt(), vec![]);
        }
    }
}

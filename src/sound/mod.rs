pub mod audio_player;
pub mod synth;

use crate::keyboard::pointer::VoiceCommand;

const TAU: f32 = ::std::f32::consts::PI * 2.0;

pub const POLYPHONY: usize = 10;

/// A tone generator that can start and stop voices by frequency.
///
/// Releasing a frequency that isn't sounding is a no-op.
pub trait Voices {
    fn attack(&mut self, frequency: f32);
    /// `None` releases whatever is sounding.
    fn release(&mut self, frequency: Option<f32>);
    fn release_all(&mut self);
}

impl VoiceCommand {
    pub fn apply(self, voices: &mut dyn Voices) {
        log::debug!("{:?}", self);
        match self {
            VoiceCommand::Attack(frequency) => voices.attack(frequency),
            VoiceCommand::Release(frequency) => voices.release(frequency),
            VoiceCommand::ReleaseAll => voices.release_all(),
        }
    }
}

/// Stands in for the audio output in dev mode.
pub struct LogVoices;

impl Voices for LogVoices {
    fn attack(&mut self, frequency: f32) {
        log::info!("attack: {:.2} Hz", frequency);
    }

    fn release(&mut self, frequency: Option<f32>) {
        match frequency {
            Some(frequency) => log::info!("release: {:.2} Hz", frequency),
            None => log::info!("release"),
        }
    }

    fn release_all(&mut self) {
        log::info!("release all");
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call, shareable so tests can inspect it after handing
    /// a clone to the code under test.
    #[derive(Clone, Default)]
    pub struct RecordingVoices {
        pub calls: Rc<RefCell<Vec<VoiceCommand>>>,
    }

    impl RecordingVoices {
        pub fn take(&self) -> Vec<VoiceCommand> {
            self.calls.borrow_mut().drain(..).collect()
        }
    }

    impl Voices for RecordingVoices {
        fn attack(&mut self, frequency: f32) {
            self.calls.borrow_mut().push(VoiceCommand::Attack(frequency));
        }

        fn release(&mut self, frequency: Option<f32>) {
            self.calls.borrow_mut().push(VoiceCommand::Release(frequency));
        }

        fn release_all(&mut self) {
            self.calls.borrow_mut().push(VoiceCommand::ReleaseAll);
        }
    }

    mod apply {
        use super::*;

        #[test]
        fn forwards_commands_to_the_voices() {
            let mut voices = RecordingVoices::default();
            VoiceCommand::Attack(440.0).apply(&mut voices);
            VoiceCommand::Release(Some(440.0)).apply(&mut voices);
            VoiceCommand::Release(None).apply(&mut voices);
            VoiceCommand::ReleaseAll.apply(&mut voices);
            assert_eq!(
                voices.take(),
                vec![
                    VoiceCommand::Attack(440.0),
                    VoiceCommand::Release(Some(440.0)),
                    VoiceCommand::Release(None),
                    VoiceCommand::ReleaseAll,
                ]
            );
        }
    }
}

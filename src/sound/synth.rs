use crate::sound::{Voices, POLYPHONY, TAU};

pub struct Envelope {
    pub attack: f32,
    pub release: f32,
}

pub const DEFAULT_ENVELOPE: Envelope = Envelope {
    attack: 0.005,
    release: 0.3,
};

/// Polyphonic sine synthesizer.
pub struct Synth {
    amplitude: f32,
    envelope: Envelope,
    voices: Vec<VoiceState>,
    attack_counter: u64,
}

impl Synth {
    pub fn new(volume: f32) -> Synth {
        Synth::with_envelope(volume, DEFAULT_ENVELOPE)
    }

    pub fn with_envelope(volume: f32, envelope: Envelope) -> Synth {
        Synth {
            amplitude: volume / POLYPHONY as f32,
            envelope,
            voices: vec![VoiceState::default(); POLYPHONY],
            attack_counter: 0,
        }
    }

    pub fn generate(&mut self, sample_rate: usize, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = 0.0;
        }
        for voice in self.voices.iter_mut() {
            for sample in buffer.iter_mut() {
                if let VoiceState::Playing {
                    phase,
                    ref envelope_phase,
                    ..
                } = *voice
                {
                    *sample += phase.sin() * self.amplitude * envelope_phase.get_amplitude();
                }
                voice.step(sample_rate, &self.envelope);
            }
        }
    }

    fn free_voice(&self) -> usize {
        let muted = self
            .voices
            .iter()
            .position(|voice| *voice == VoiceState::Muted);
        muted.unwrap_or_else(|| {
            (0..self.voices.len())
                .min_by_key(|i| self.voices[*i].started())
                .unwrap_or(0)
        })
    }
}

impl Voices for Synth {
    fn attack(&mut self, frequency: f32) {
        let index = self.free_voice();
        self.attack_counter += 1;
        self.voices[index] = VoiceState::Playing {
            frequency,
            phase: 0.0,
            envelope_phase: EnvelopePhase::Attacking { amplitude: 0.0 },
            started: self.attack_counter,
        };
    }

    fn release(&mut self, frequency: Option<f32>) {
        for voice in self.voices.iter_mut() {
            let matches = match (frequency, &*voice) {
                (None, _) => true,
                (Some(frequency), VoiceState::Playing { frequency: f, .. }) => *f == frequency,
                (Some(_), VoiceState::Muted) => false,
            };
            if matches {
                voice.release();
            }
        }
    }

    fn release_all(&mut self) {
        self.release(None);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopePhase {
    Attacking { amplitude: f32 },
    Sustaining,
    Releasing { amplitude: f32 },
}

impl EnvelopePhase {
    fn get_amplitude(&self) -> f32 {
        match self {
            EnvelopePhase::Attacking { amplitude } => *amplitude,
            EnvelopePhase::Sustaining => 1.0,
            EnvelopePhase::Releasing { amplitude } => *amplitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VoiceState {
    Playing {
        frequency: f32,
        phase: f32,
        envelope_phase: EnvelopePhase,
        started: u64,
    },
    Muted,
}

impl Default for VoiceState {
    fn default() -> VoiceState {
        VoiceState::Muted
    }
}

impl VoiceState {
    fn started(&self) -> u64 {
        match self {
            VoiceState::Playing { started, .. } => *started,
            VoiceState::Muted => 0,
        }
    }

    fn release(&mut self) {
        match self {
            VoiceState::Playing {
                ref mut envelope_phase,
                ..
            } => {
                *envelope_phase = EnvelopePhase::Releasing {
                    amplitude: envelope_phase.get_amplitude(),
                };
            }
            VoiceState::Muted => {}
        }
    }

    fn crank_phase(&mut self, sample_rate: usize) {
        if let VoiceState::Playing {
            frequency,
            ref mut phase,
            ..
        } = *self
        {
            *phase += frequency * TAU / sample_rate as f32;
            *phase %= TAU;
        }
    }

    fn step_envelope(&mut self, sample_rate: usize, envelope: &Envelope) {
        let mut muted = false;
        if let VoiceState::Playing {
            ref mut envelope_phase,
            ..
        } = self
        {
            match envelope_phase {
                EnvelopePhase::Attacking { ref mut amplitude } => {
                    *amplitude += 1.0 / (sample_rate as f32 * envelope.attack);
                    if *amplitude >= 1.0 {
                        *envelope_phase = EnvelopePhase::Sustaining;
                    }
                }
                EnvelopePhase::Sustaining => {}
                EnvelopePhase::Releasing { ref mut amplitude } => {
                    *amplitude -= 1.0 / (sample_rate as f32 * envelope.release);
                    muted = *amplitude <= 0.0;
                }
            }
        }
        if muted {
            *self = VoiceState::Muted;
        }
    }

    fn step(&mut self, sample_rate: usize, envelope: &Envelope) {
        self.crank_phase(sample_rate);
        self.step_envelope(sample_rate, envelope);
    }
}

use crate::keyboard::pointer::{ActiveVoice, PointerEvent, VoiceCommand, VoiceTracker};
use crate::keyboard::render::DrawTarget;
use crate::keyboard::{Keyboard, KeyboardConfig};
use crate::scales::{Scale, ScaleRegistry};
use crate::sound::Voices;
use crate::ErrorString;

/// Everything that changes while the instrument is running: the selected
/// scale, the viewport and the voice of the pointer.
pub struct Session {
    registry: ScaleRegistry,
    scale_name: String,
    scale: Scale,
    config: KeyboardConfig,
    viewport_width: f32,
    voice_tracker: VoiceTracker,
    voices: Box<dyn Voices>,
}

impl Session {
    pub fn new(
        registry: ScaleRegistry,
        scale_name: &str,
        config: KeyboardConfig,
        viewport_width: f32,
        voices: Box<dyn Voices>,
    ) -> Result<Session, ErrorString> {
        let scale = registry.get(scale_name)?.clone();
        if !(viewport_width > 0.0) {
            return Err(ErrorString(format!(
                "viewport width must be positive, got: {}",
                viewport_width
            )));
        }
        Ok(Session {
            registry,
            scale_name: scale_name.to_string(),
            scale,
            config,
            viewport_width,
            voice_tracker: VoiceTracker::new(),
            voices,
        })
    }

    pub fn keyboard(&self) -> Keyboard {
        Keyboard::new(&self.scale, self.config, self.viewport_width)
    }

    pub fn registry(&self) -> &ScaleRegistry {
        &self.registry
    }

    pub fn scale_name(&self) -> &str {
        &self.scale_name
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    pub fn active_voice(&self) -> Option<ActiveVoice> {
        self.voice_tracker.active()
    }

    pub fn select_scale(&mut self, name: &str) -> Result<(), ErrorString> {
        let scale = self.registry.get(name)?.clone();
        if name != self.scale_name {
            let commands = self.voice_tracker.interrupt();
            self.apply(commands);
            self.scale_name = name.to_string();
            self.scale = scale;
            log::info!("scale: {}", name);
        }
        Ok(())
    }

    pub fn resize(&mut self, viewport_width: f32) {
        if viewport_width > 0.0 && viewport_width != self.viewport_width {
            log::info!("viewport width: {}", viewport_width);
            self.viewport_width = viewport_width;
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let keyboard = Keyboard::new(&self.scale, self.config, self.viewport_width);
        let commands = self.voice_tracker.handle(&keyboard, event);
        self.apply(commands);
    }

    pub fn draw<T: DrawTarget>(&self, target: &mut T) -> Result<(), ErrorString> {
        self.keyboard().draw(target)
    }

    fn apply(&mut self, commands: Vec<VoiceCommand>) {
        for command in commands {
            command.apply(self.voices.as_mut());
        }
    }
}

use crate::sound::synth::Synth;
use crate::sound::Voices;
use crate::{get_binary_name, AddMessage, ErrorString};
use jack::*;
use std::sync::{Arc, Mutex, MutexGuard};

/// Plays the synthesizer through jack, connected to the system outputs.
pub struct AudioPlayer {
    async_client: AsyncClient<XRunLogger, AudioProcessHandler>,
    synth: Arc<Mutex<Synth>>,
}

impl AudioPlayer {
    pub fn new(volume: f32) -> Result<AudioPlayer, ErrorString> {
        let name = get_binary_name()?;
        let (client, _status) = jack::Client::new(&name, jack::ClientOptions::NO_START_SERVER)
            .add_message("can't connect to the jack server")?;
        let ports = Stereo {
            left: client.register_port("left-output", AudioOut::default())?,
            right: client.register_port("right-output", AudioOut::default())?,
        };
        let port_names = Stereo {
            left: ports.left.name()?,
            right: ports.right.name()?,
        };
        let synth = Arc::new(Mutex::new(Synth::new(volume)));
        let process_handler = AudioProcessHandler {
            ports,
            synth: synth.clone(),
        };
        let async_client = client.activate_async(XRunLogger, process_handler)?;
        let audio_player = AudioPlayer {
            async_client,
            synth,
        };
        audio_player.connect_to_system_ports(port_names)?;
        log::info!("jack client {} started", name);
        Ok(audio_player)
    }

    fn connect_to_system_ports(&self, ports: Stereo<String>) -> Result<(), ErrorString> {
        self.connect_to_port(&ports.left, "system:playback_1")?;
        self.connect_to_port(&ports.right, "system:playback_2")?;
        Ok(())
    }

    fn connect_to_port(&self, source_port: &str, destination_port: &str) -> Result<(), ErrorString> {
        self.async_client
            .as_client()
            .connect_ports_by_name(source_port, destination_port)
            .add_message(format!(
                "can't connect {} to {}",
                source_port, destination_port
            ))
    }

    fn lock(&self) -> Option<MutexGuard<Synth>> {
        match self.synth.lock() {
            Ok(synth) => Some(synth),
            Err(e) => {
                log::error!("synth mutex poisoned: {:?}", e);
                None
            }
        }
    }
}

impl Voices for AudioPlayer {
    fn attack(&mut self, frequency: f32) {
        if let Some(mut synth) = self.lock() {
            synth.attack(frequency);
        }
    }

    fn release(&mut self, frequency: Option<f32>) {
        if let Some(mut synth) = self.lock() {
            synth.release(frequency);
        }
    }

    fn release_all(&mut self) {
        if let Some(mut synth) = self.lock() {
            synth.release_all();
        }
    }
}

struct Stereo<Port> {
    left: Port,
    right: Port,
}

pub struct XRunLogger;

impl NotificationHandler for XRunLogger {
    fn xrun(&mut self, _: &Client) -> Control {
        log::warn!("xrun");
        Control::Continue
    }
}

pub struct AudioProcessHandler {
    ports: Stereo<Port<AudioOut>>,
    synth: Arc<Mutex<Synth>>,
}

impl ProcessHandler for AudioProcessHandler {
    fn process(&mut self, client: &Client, scope: &ProcessScope) -> Control {
        let left_buffer: &mut [f32] = self.ports.left.as_mut_slice(scope);
        match self.synth.lock() {
            Ok(mut synth) => {
                synth.generate(client.sample_rate(), left_buffer);
            }
            Err(_) => {
                for sample in left_buffer.iter_mut() {
                    *sample = 0.0;
                }
            }
        }
        self.ports
            .right
            .as_mut_slice(scope)
            .copy_from_slice(left_buffer);
        Control::Continue
    }
}

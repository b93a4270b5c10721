#[macro_use]
extern crate custom_derive;
#[macro_use]
extern crate enum_derive;

mod cli;
mod keyboard;
mod scales;
mod session;
mod sound;
mod ui;

use crate::keyboard::KeyboardConfig;
use crate::scales::ScaleRegistry;
use crate::session::Session;
use crate::sound::audio_player::AudioPlayer;
use crate::sound::{LogVoices, Voices};
use std::fmt::{self, Display};

#[derive(Debug)]
pub struct ErrorString(String);

impl Display for ErrorString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ErrorString {
    fn from(string: String) -> ErrorString {
        ErrorString(string)
    }
}

impl From<&str> for ErrorString {
    fn from(str: &str) -> ErrorString {
        ErrorString(str.to_string())
    }
}

impl From<std::io::Error> for ErrorString {
    fn from(error: std::io::Error) -> ErrorString {
        ErrorString(format!("{}", error))
    }
}

impl From<jack::Error> for ErrorString {
    fn from(error: jack::Error) -> ErrorString {
        ErrorString(format!("jack: {:?}", error))
    }
}

impl From<sdl2::video::WindowBuildError> for ErrorString {
    fn from(error: sdl2::video::WindowBuildError) -> ErrorString {
        ErrorString(format!("sdl2: {}", error))
    }
}

impl From<sdl2::IntegerOrSdlError> for ErrorString {
    fn from(error: sdl2::IntegerOrSdlError) -> ErrorString {
        ErrorString(format!("sdl2: {}", error))
    }
}

pub trait AddMessage<T> {
    fn add_message(self, message: impl Into<String>) -> Result<T, ErrorString>;
}

impl<T, E: Display> AddMessage<T> for Result<T, E> {
    fn add_message(self, message: impl Into<String>) -> Result<T, ErrorString> {
        self.map_err(|error| ErrorString(format!("{} ({})", message.into(), error)))
    }
}

custom_derive! {
    #[derive(Debug, Clone, Copy, PartialEq, IterVariants(HitTestModeVariants))]
    pub enum HitTestMode {
        Banded,
        RawIndex,
    }
}

impl Default for HitTestMode {
    fn default() -> HitTestMode {
        HitTestMode::Banded
    }
}

pub fn get_binary_name() -> Result<String, ErrorString> {
    let executable = std::env::current_exe()?;
    Ok(executable
        .file_name()
        .ok_or("can't determine the binary name")?
        .to_string_lossy()
        .into_owned())
}

fn main() -> Result<(), ErrorString> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let registry = ScaleRegistry::built_in()?;
    let cli_args = cli::parse(&registry)?;
    let config = KeyboardConfig {
        max_key_width: cli_args.max_key_width,
        edge_overscan: cli_args.overscan,
        hit_test_mode: cli_args.hit_test_mode,
        ..KeyboardConfig::default()
    };
    config.validate()?;
    let voices: Box<dyn Voices> = if cli_args.dev_mode {
        log::info!("dev mode: audio output disabled");
        Box::new(LogVoices)
    } else {
        Box::new(AudioPlayer::new(cli_args.volume)?)
    };
    let session = Session::new(registry, &cli_args.scale, config, cli_args.width as f32, voices)?;
    ui::run(session)
}

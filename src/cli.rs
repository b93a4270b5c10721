use crate::scales::{ScaleRegistry, DEFAULT_SCALE};
use crate::{ErrorString, HitTestMode};
use clap::{App, Arg};
use std::ffi::OsString;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub scale: String,
    pub hit_test_mode: HitTestMode,
    pub max_key_width: f32,
    pub overscan: f32,
    pub width: u32,
    pub volume: f32,
    pub dev_mode: bool,
}

pub fn parse(registry: &ScaleRegistry) -> Result<Args, ErrorString> {
    parse_from(registry, std::env::args_os())
}

pub fn parse_from<I, T>(registry: &ScaleRegistry, args: I) -> Result<Args, ErrorString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let scale_help = format!(
        "scale, possible values: {:?}, (default: {})",
        registry.names(),
        DEFAULT_SCALE
    );
    let hit_test_help = format!(
        "hit test mode, possible values: {:?}, (default: {:?})",
        HitTestMode::iter_variants().collect::<Vec<HitTestMode>>(),
        HitTestMode::default()
    );
    let matches = App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .author("Sönke Hahn <soenkehahn@gmail.com>")
        .about("musical keyboard for equal divisions of the octave")
        .arg(
            Arg::with_name("scale")
                .long("scale")
                .value_name("NAME")
                .help(&scale_help)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("hit-test")
                .long("hit-test")
                .value_name("MODE")
                .help(&hit_test_help)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max-key-width")
                .long("max-key-width")
                .value_name("PIXELS")
                .help("Caps the width of a single key (default: 50)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("overscan")
                .long("overscan")
                .value_name("PIXELS")
                .help("Extends the last white key past the right edge (default: 0)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .help("Initial window width (default: 1000)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("volume")
                .long("volume")
                .value_name("VOLUME")
                .help("Sets a custom sound volume (default: 1.0)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("dev-mode")
                .long("dev-mode")
                .help("disables audio output and logs notes instead (default: false)")
                .takes_value(false),
        )
        .get_matches_from(args);
    let scale = matches.value_of("scale").unwrap_or(DEFAULT_SCALE).to_string();
    registry.get(&scale)?;
    Ok(Args {
        scale,
        hit_test_mode: parse_hit_test_mode(matches.value_of("hit-test"))?,
        max_key_width: parse_with_default(matches.value_of("max-key-width"), 50.0)?,
        overscan: parse_with_default(matches.value_of("overscan"), 0.0)?,
        width: parse_with_default(matches.value_of("width"), 1000)?,
        volume: parse_with_default(matches.value_of("volume"), 1.0)?,
        dev_mode: matches.is_present("dev-mode"),
    })
}

fn parse_with_default<N>(input: Option<&str>, default: N) -> Result<N, ErrorString>
where
    N: FromStr,
    <N as FromStr>::Err: Display,
{
    match input {
        None => Ok(default),
        Some(string) => string
            .parse()
            .map_err(|e| ErrorString(format!("{}: {}", string, e))),
    }
}

fn parse_hit_test_mode(input: Option<&str>) -> Result<HitTestMode, ErrorString> {
    match input {
        None => Ok(HitTestMode::default()),
        Some("Banded") => Ok(HitTestMode::Banded),
        Some("RawIndex") => Ok(HitTestMode::RawIndex),
        Some(mode) => Err(ErrorString(format!(
            "unknown hit test mode: {}, possible values: {:?}",
            mode,
            HitTestMode::iter_variants().collect::<Vec<HitTestMode>>()
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ErrorString> {
        let registry = ScaleRegistry::built_in().unwrap();
        parse_from(&registry, std::iter::once("edo-keyboard").chain(args.iter().cloned()))
    }

    #[test]
    fn uses_defaults() {
        assert_eq!(
            parse(&[]).unwrap(),
            Args {
                scale: "12".to_string(),
                hit_test_mode: HitTestMode::Banded,
                max_key_width: 50.0,
                overscan: 0.0,
                width: 1000,
                volume: 1.0,
                dev_mode: false,
            }
        );
    }

    #[test]
    fn allows_to_select_a_scale() {
        assert_eq!(parse(&["--scale", "19"]).unwrap().scale, "19");
    }

    #[test]
    fn rejects_unknown_scales() {
        assert!(parse(&["--scale", "13"]).is_err());
    }

    #[test]
    fn allows_to_select_the_raw_index_mode() {
        assert_eq!(
            parse(&["--hit-test", "RawIndex"]).unwrap().hit_test_mode,
            HitTestMode::RawIndex
        );
    }

    #[test]
    fn rejects_unknown_hit_test_modes() {
        assert!(parse(&["--hit-test", "Fuzzy"]).is_err());
    }

    #[test]
    fn parses_numbers() {
        let args = parse(&[
            "--max-key-width",
            "40",
            "--overscan",
            "5",
            "--width",
            "800",
            "--volume",
            "0.5",
            "--dev-mode",
        ])
        .unwrap();
        assert_eq!(args.max_key_width, 40.0);
        assert_eq!(args.overscan, 5.0);
        assert_eq!(args.width, 800);
        assert_eq!(args.volume, 0.5);
        assert!(args.dev_mode);
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(parse(&["--width", "wide"]).is_err());
    }
}

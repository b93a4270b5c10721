pub mod layout;
pub mod pitch;
pub mod pointer;
pub mod render;

use crate::scales::Scale;
use crate::{ErrorString, HitTestMode};

// rounding noise in width / key_width must not add a sliver key
const KEY_COUNT_TOLERANCE: f32 = 0.001;

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardConfig {
    pub max_key_width: f32,
    pub key_height: f32,
    pub accidental_height: f32,
    /// Added to the right edge of the last natural key.
    pub edge_overscan: f32,
    pub hit_test_mode: HitTestMode,
}

impl Default for KeyboardConfig {
    fn default() -> KeyboardConfig {
        KeyboardConfig {
            max_key_width: 50.0,
            key_height: 300.0,
            accidental_height: 200.0,
            edge_overscan: 0.0,
            hit_test_mode: HitTestMode::default(),
        }
    }
}

impl KeyboardConfig {
    pub fn validate(&self) -> Result<(), ErrorString> {
        if !(self.max_key_width > 0.0) {
            return Err(ErrorString(format!(
                "max key width must be positive, got: {}",
                self.max_key_width
            )));
        }
        if !(self.accidental_height > 0.0 && self.accidental_height <= self.key_height) {
            return Err(ErrorString(format!(
                "accidental height must be in (0, {}], got: {}",
                self.key_height, self.accidental_height
            )));
        }
        if !(self.edge_overscan >= 0.0) {
            return Err(ErrorString(format!(
                "overscan must not be negative, got: {}",
                self.edge_overscan
            )));
        }
        Ok(())
    }
}

/// A keyboard for one scale laid out over a viewport of a given width.
#[derive(Debug, Clone, Copy)]
pub struct Keyboard<'a> {
    scale: &'a Scale,
    config: KeyboardConfig,
    viewport_width: f32,
}

impl<'a> Keyboard<'a> {
    pub fn new(scale: &'a Scale, config: KeyboardConfig, viewport_width: f32) -> Keyboard<'a> {
        Keyboard {
            scale,
            config,
            viewport_width,
        }
    }

    pub fn scale(&self) -> &Scale {
        self.scale
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Capped so that at least one octave plus one key fits into the viewport.
    pub fn key_width(&self) -> f32 {
        let fitting = self.viewport_width / (self.scale.len() + 1) as f32;
        self.config.max_key_width.min(fitting)
    }

    /// Number of key slots, including a partially visible one at the right edge.
    pub fn total_keys(&self) -> usize {
        let quotient = self.viewport_width / self.key_width();
        let nearest = quotient.round();
        let total = if (quotient - nearest).abs() < KEY_COUNT_TOLERANCE {
            nearest
        } else {
            quotient.ceil()
        };
        total.max(0.0) as usize
    }
}

use crate::keyboard::{Keyboard, Position};
use crate::HitTestMode;

const CONCERT_PITCH: f32 = 440.0;

/// Frequency of step `n` of an `steps`-tone equal division, with step 0 on
/// the C below concert A.
pub fn tone_to_frequency(n: f32, steps: usize) -> f32 {
    CONCERT_PITCH * 2.0_f32.powf((3.0 - 12.0) / 12.0 + n / steps as f32)
}

impl<'a> Keyboard<'a> {
    pub fn frequency_at(&self, position: Position) -> Option<f32> {
        self.tone_at(position)
            .map(|tone| tone_to_frequency(tone as f32, self.scale.len()))
    }

    fn tone_at(&self, position: Position) -> Option<i64> {
        let config = &self.config;
        if position.y < 0.0 || position.y >= config.key_height {
            return None;
        }
        match config.hit_test_mode {
            HitTestMode::RawIndex => Some(self.column(position.x)),
            HitTestMode::Banded => {
                if position.y < config.accidental_height {
                    Some(self.column(position.x))
                } else {
                    Some(self.nearest_natural(position.x))
                }
            }
        }
    }

    fn column(&self, x: f32) -> i64 {
        (x / self.key_width()).floor() as i64
    }

    fn nearest_natural(&self, x: f32) -> i64 {
        // centered, so that a click on the middle of a key lands on its index
        let position = x / self.key_width() - 0.5;
        let left = self.scan_left(position.floor() as i64);
        let right = self.scan_right(position.ceil() as i64);
        match (left, right) {
            (Some(left), Some(right)) => {
                if position - left as f32 <= right as f32 - position {
                    left
                } else {
                    right
                }
            }
            (Some(left), None) => left,
            (None, Some(right)) => right,
            (None, None) => 0,
        }
    }

    fn scan_left(&self, from: i64) -> Option<i64> {
        (0..=from).rev().find(|i| self.scale.is_natural(*i as usize))
    }

    fn scan_right(&self, from: i64) -> Option<i64> {
        (from.max(0)..self.total_keys() as i64).find(|i| self.scale.is_natural(*i as usize))
    }
}

use crate::keyboard::Keyboard;
use crate::scales::{ToneType, NATURAL};
use crate::ErrorString;
use palette::{named, FromColor, Hsv, Srgb};
use sdl2::pixels::Color;

pub const BACKGROUND: Color = Color::RGB(0xee, 0xee, 0xee);

pub const STROKE_WEIGHT: u32 = 5;

/// Immediate-mode drawing surface the keyboard paints itself on.
pub trait DrawTarget {
    fn set_background(&mut self, color: Color) -> Result<(), ErrorString>;
    fn set_stroke_weight(&mut self, weight: u32);
    fn set_fill_color(&mut self, color: Color);
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), ErrorString>;
}

pub fn tone_type_color(tone_type: ToneType) -> Color {
    match tone_type {
        NATURAL => convert_color(named::WHITE),
        1 => convert_color(named::BLACK),
        2 => convert_color(named::LIGHTGREEN),
        3 => convert_color(named::BROWN),
        other => {
            let hue_number = (other as u32 * 7) % 12;
            let hsv: Hsv = Hsv::new(hue_number as f32 * 30.0 + 240.0, 1.0, 1.0);
            convert_color(Srgb::<f32>::from_color(hsv).into_format())
        }
    }
}

fn convert_color(color: Srgb<u8>) -> Color {
    Color::RGB(color.red, color.green, color.blue)
}

impl<'a> Keyboard<'a> {
    pub fn draw<T: DrawTarget>(&self, target: &mut T) -> Result<(), ErrorString> {
        let layout = self.layout();
        target.set_background(BACKGROUND)?;
        target.set_stroke_weight(STROKE_WEIGHT);
        target.set_fill_color(tone_type_color(NATURAL));
        for natural in layout.naturals.iter() {
            target.draw_rect(natural.start, 0.0, natural.width(), self.config.key_height)?;
        }
        for accidental in layout.accidentals.iter() {
            target.set_fill_color(tone_type_color(accidental.tone_type));
            target.draw_rect(
                accidental.x,
                0.0,
                accidental.width,
                self.config.accidental_height,
            )?;
        }
        Ok(())
    }
}

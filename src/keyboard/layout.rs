use crate::keyboard::Keyboard;
use crate::scales::ToneType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaturalRegion {
    pub start: f32,
    pub end: f32,
}

impl NaturalRegion {
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    pub fn center(&self) -> f32 {
        0.5 * (self.start + self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccidentalRegion {
    pub x: f32,
    pub width: f32,
    pub tone_type: ToneType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub naturals: Vec<NaturalRegion>,
    pub accidentals: Vec<AccidentalRegion>,
}

impl<'a> Keyboard<'a> {
    pub fn layout(&self) -> Layout {
        Layout {
            naturals: self.natural_regions(),
            accidentals: self.accidental_regions(),
        }
    }

    fn natural_regions(&self) -> Vec<NaturalRegion> {
        let key_width = self.key_width();
        let mut naturals: Vec<NaturalRegion> = (0..self.total_keys())
            .filter(|i| self.scale.is_natural(*i))
            .map(|i| NaturalRegion {
                start: i as f32 * key_width,
                end: (i + 1) as f32 * key_width,
            })
            .collect();
        // close the gaps left by the accidental slots
        for i in 1..naturals.len() {
            let middle = 0.5 * (naturals[i - 1].end + naturals[i].start);
            naturals[i - 1].end = middle;
            naturals[i].start = middle;
        }
        if let Some(last) = naturals.last_mut() {
            last.end = self.viewport_width + self.config.edge_overscan;
        }
        naturals
    }

    fn accidental_regions(&self) -> Vec<AccidentalRegion> {
        let key_width = self.key_width();
        (0..self.total_keys())
            .filter(|i| !self.scale.is_natural(*i))
            .map(|i| AccidentalRegion {
                x: i as f32 * key_width,
                width: key_width,
                tone_type: self.scale.tone_type(i),
            })
            .collect()
    }
}

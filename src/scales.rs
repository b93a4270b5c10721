use crate::ErrorString;

pub type ToneType = u8;

pub const NATURAL: ToneType = 0;

/// One octave of an equal-division tuning, one tone type per step.
///
/// `0` marks a natural (white) key, every other value an accidental
/// category. Construction guarantees at least one natural.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    tone_types: Vec<ToneType>,
}

impl Scale {
    pub fn new(tone_types: Vec<ToneType>) -> Result<Scale, ErrorString> {
        if tone_types.is_empty() {
            return Err(ErrorString::from("scale has no steps"));
        }
        if !tone_types.contains(&NATURAL) {
            return Err(ErrorString(format!(
                "scale has no natural key: {:?}",
                tone_types
            )));
        }
        Ok(Scale { tone_types })
    }

    pub fn len(&self) -> usize {
        self.tone_types.len()
    }

    pub fn tone_type(&self, index: usize) -> ToneType {
        self.tone_types[index % self.tone_types.len()]
    }

    pub fn is_natural(&self, index: usize) -> bool {
        self.tone_type(index) == NATURAL
    }
}

const TWELVE: [ToneType; 12] = [0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0];

const SEVENTEEN: [ToneType; 17] = [0, 1, 2, 0, 1, 2, 0, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0];

const NINETEEN: [ToneType; 19] = [0, 1, 2, 0, 1, 2, 0, 3, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 3];

const TWENTY_FOUR: [ToneType; 24] = [
    0, 2, 1, 3, 0, 2, 1, 3, 0, 2, 0, 2, 1, 3, 0, 2, 1, 3, 0, 2, 1, 3, 0, 2,
];

pub const DEFAULT_SCALE: &str = "12";

#[derive(Debug, Clone)]
pub struct ScaleRegistry {
    scales: Vec<(String, Scale)>,
}

impl ScaleRegistry {
    pub fn empty() -> ScaleRegistry {
        ScaleRegistry { scales: vec![] }
    }

    pub fn built_in() -> Result<ScaleRegistry, ErrorString> {
        let mut registry = ScaleRegistry::empty();
        registry.register("12", Scale::new(TWELVE.to_vec())?)?;
        registry.register("17", Scale::new(SEVENTEEN.to_vec())?)?;
        registry.register("19", Scale::new(NINETEEN.to_vec())?)?;
        registry.register("24", Scale::new(TWENTY_FOUR.to_vec())?)?;
        Ok(registry)
    }

    pub fn register(&mut self, name: &str, scale: Scale) -> Result<(), ErrorString> {
        if self.scales.iter().any(|(existing, _)| existing == name) {
            return Err(ErrorString(format!("scale already registered: {}", name)));
        }
        self.scales.push((name.to_string(), scale));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Scale, ErrorString> {
        self.scales
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, scale)| scale)
            .ok_or_else(|| {
                ErrorString(format!(
                    "unknown scale: {}, possible values: {:?}",
                    name,
                    self.names()
                ))
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.scales.iter().map(|(name, _)| name.as_str()).collect()
    }
}

// MidiInstrument - General MIDI programs offered by the instrument picker
// https://en.wikipedia.org/wiki/General_MIDI#Parameter_interpretations

/// A selectable General MIDI instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MidiInstrument {
    GrandPiano = 1,
    ElectricPiano = 5,
    Celesta = 9,
    Xylophone = 14,
    Harmonica = 23,
    AcousticGuitar = 25,
    ElectricGuitar = 28,
    AcousticBass = 33,
    SlapBass = 37,
    Flute = 74,
}

impl MidiInstrument {
    /// Every instrument in picker order
    pub const ALL: [MidiInstrument; 10] = [
        MidiInstrument::GrandPiano,
        MidiInstrument::ElectricPiano,
        MidiInstrument::Celesta,
        MidiInstrument::Xylophone,
        MidiInstrument::Harmonica,
        MidiInstrument::AcousticGuitar,
        MidiInstrument::ElectricGuitar,
        MidiInstrument::AcousticBass,
        MidiInstrument::SlapBass,
        MidiInstrument::Flute,
    ];

    /// General MIDI program number
    pub fn program(self) -> u8 {
        self as u8
    }

    /// Display title
    pub fn title(self) -> &'static str {
        match self {
            MidiInstrument::GrandPiano => "Grand Piano",
            MidiInstrument::ElectricPiano => "Electric Piano",
            MidiInstrument::Celesta => "Celesta",
            MidiInstrument::Xylophone => "Xylophone",
            MidiInstrument::Harmonica => "Harmonica",
            MidiInstrument::AcousticGuitar => "Acoustic Guitar",
            MidiInstrument::ElectricGuitar => "Electric Guitar",
            MidiInstrument::AcousticBass => "Acoustic Bass",
            MidiInstrument::SlapBass => "Slap Bass",
            MidiInstrument::Flute => "Flute",
        }
    }
}

impl Default for MidiInstrument {
    fn default() -> Self {
        MidiInstrument::GrandPiano
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_numbers() {
        assert_eq!(MidiInstrument::GrandPiano.program(), 1);
        assert_eq!(MidiInstrument::Harmonica.program(), 23);
        assert_eq!(MidiInstrument::Flute.program(), 74);
    }

    #[test]
    fn test_all_is_complete() {
        assert_eq!(MidiInstrument::ALL.len(), 10);
        assert_eq!(MidiInstrument::ALL[0], MidiInstrument::default());
    }
}

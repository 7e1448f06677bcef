// NoteColor - Display color derived from pitch and octave
// Pure function of (key, octave); never serialized, never compared

use crate::model::key::Key;

/// RGB display color for a note on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl NoteColor {
    /// Gray used for rest slots
    pub const REST_GRAY: NoteColor = NoteColor::new(142, 142, 147);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Derive the display color for a pitch
    ///
    /// The palette brightens in bands as the pitch rises across the grid's
    /// two-octave range; pitches outside that range have no assigned color.
    pub fn from_pitch(key: Key, octave: i32) -> Option<NoteColor> {
        if key == Key::Rest {
            return Some(Self::REST_GRAY);
        }

        if matches!(key, Key::C | Key::D | Key::E) && octave == 4 {
            return Some(NoteColor::new(180, 196, 174));
        }

        if matches!(key, Key::F | Key::G | Key::A) && octave == 4 {
            return Some(NoteColor::new(195, 208, 190));
        }

        if (key == Key::B && octave == 4) || (matches!(key, Key::C | Key::D) && octave == 5) {
            return Some(NoteColor::new(203, 214, 198));
        }

        if matches!(key, Key::E | Key::F | Key::G | Key::A) && octave == 5 {
            return Some(NoteColor::new(210, 220, 206));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_is_gray_regardless_of_octave() {
        assert_eq!(NoteColor::from_pitch(Key::Rest, 4), Some(NoteColor::REST_GRAY));
        assert_eq!(NoteColor::from_pitch(Key::Rest, 7), Some(NoteColor::REST_GRAY));
    }

    #[test]
    fn test_bands_brighten_with_pitch() {
        let low = NoteColor::from_pitch(Key::C, 4).unwrap();
        let mid = NoteColor::from_pitch(Key::G, 4).unwrap();
        let high = NoteColor::from_pitch(Key::E, 5).unwrap();

        assert!(low.green < mid.green);
        assert!(mid.green < high.green);
    }

    #[test]
    fn test_band_boundaries() {
        // B4 shares its band with C5 and D5
        let b4 = NoteColor::from_pitch(Key::B, 4);
        assert_eq!(b4, NoteColor::from_pitch(Key::C, 5));
        assert_eq!(b4, NoteColor::from_pitch(Key::D, 5));
    }

    #[test]
    fn test_out_of_range_has_no_color() {
        assert_eq!(NoteColor::from_pitch(Key::B, 5), None);
        assert_eq!(NoteColor::from_pitch(Key::C, 6), None);
        assert_eq!(NoteColor::from_pitch(Key::C, 3), None);
    }
}

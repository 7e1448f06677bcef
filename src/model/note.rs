// Note - A grid cell's pitch value
// Owns transpose arithmetic, pitch distance, and the MIDI/frequency mapping

use crate::model::color::NoteColor;
use crate::model::key::{Key, Transpose};
use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A note on the composer grid
///
/// Value type: key + octave, plus a display color derived from them.
/// Two notes are equal iff key and octave are equal; color carries no
/// independent state and is excluded from equality and serialization.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    pub key: Key,

    /// Octave register, default 4 (the grid's resting floor)
    pub octave: i32,

    /// Display color, recomputed whenever key or octave change
    pub color: Option<NoteColor>,
}

impl Note {
    /// Default octave for new notes
    pub const DEFAULT_OCTAVE: i32 = 4;

    /// Create a note with its color derived from key and octave
    pub fn new(key: Key, octave: i32) -> Self {
        Self {
            key,
            octave,
            color: NoteColor::from_pitch(key, octave),
        }
    }

    /// A rest slot at the default octave
    pub fn rest() -> Self {
        Self::new(Key::Rest, Self::DEFAULT_OCTAVE)
    }

    /// A pitched note at the default octave
    pub fn pitched(key: Key) -> Self {
        Self::new(key, Self::DEFAULT_OCTAVE)
    }

    /// Apply a single transpose step
    ///
    /// Within the octave this steps to the adjacent key; at the register
    /// boundaries the octave rolls over:
    /// - up from `B` always lands on `C` of the next octave;
    /// - down from `Rest` at octave 4 steps the octave down while staying on
    ///   the rest marker, and below octave 4 transposition saturates (the
    ///   grid's floor);
    /// - down from `Rest` above octave 4 lands on `B` of the previous octave.
    ///
    /// Saturation at the boundaries is intentional: drag gestures routinely
    /// overshoot, so out-of-range steps clamp instead of failing.
    pub fn transpose(&mut self, direction: Transpose) {
        let boundary = match direction {
            Transpose::Up => Key::HIGHEST,
            Transpose::Down => Key::LOWEST,
        };

        if self.key == boundary {
            // Octave rollover. The grid rests on octave 4, so the descent
            // below it is shallower than the symmetric B -> C ascent.
            if self.octave == Self::DEFAULT_OCTAVE {
                let (key, octave) = match direction {
                    Transpose::Up => (Key::C, self.octave + 1),
                    Transpose::Down => (Key::LOWEST, self.octave - 1),
                };
                self.set_pitch(key, octave);
            } else if self.octave > Self::DEFAULT_OCTAVE {
                let (key, octave) = match direction {
                    Transpose::Up => (Key::C, self.octave + 1),
                    Transpose::Down => (Key::B, self.octave - 1),
                };
                self.set_pitch(key, octave);
            }

            return;
        }

        let key = match direction {
            Transpose::Up => self.key.next(),
            Transpose::Down => self.key.previous(),
        };
        self.set_pitch(key, self.octave);
    }

    /// Apply `count` single transpose steps; `count == 0` is a no-op
    pub fn transpose_by(&mut self, direction: Transpose, count: u32) {
        for _ in 0..count {
            self.transpose(direction);
        }
    }

    /// Number of single transpose steps from `self` to `other`
    ///
    /// Positive when `other` is higher. Keys are non-uniformly spaced on the
    /// grade axis, so the distance is counted in keys, not grades: within one
    /// octave it counts the keys strictly between the two pitches (inclusive
    /// of the destination), and across octaves it adds 7 steps per octave to
    /// the residual distance of `other` normalized onto this octave. The UI
    /// uses this to turn a pixel offset into a discrete pitch change while
    /// dragging.
    pub fn steps_to(&self, other: &Note) -> i32 {
        if self.octave == other.octave {
            return if self.frequency() > other.frequency() {
                let count = Key::ALL
                    .iter()
                    .filter(|key| **key < self.key && **key >= other.key)
                    .count();
                -(count as i32)
            } else {
                Key::ALL
                    .iter()
                    .filter(|key| **key > self.key && **key <= other.key)
                    .count() as i32
            };
        }

        let octave_steps = 7 * (other.octave - self.octave);
        let on_same_octave = Note::new(other.key, self.octave);

        octave_steps + self.steps_to(&on_same_octave)
    }

    /// Piano key number of this note
    ///
    /// `grade + 3 + (octave - 1) * 12`; the +3 offsets C so that C4 is key 40.
    /// Rests map to 0 and are never sounded.
    pub fn midi_key(&self) -> u8 {
        if self.key == Key::Rest {
            return 0;
        }

        (i32::from(self.key.grade()) + 3 + (self.octave - 1) * 12) as u8
    }

    /// Frequency in Hz using the equal-temperament piano formula
    /// (A4 = 440 Hz at key 49); rests map to 0
    pub fn frequency(&self) -> f32 {
        if self.key == Key::Rest {
            return 0.0;
        }

        2.0_f32.powf((f32::from(self.midi_key()) - 49.0) / 12.0) * 440.0
    }

    fn set_pitch(&mut self, key: Key, octave: i32) {
        self.key = key;
        self.octave = octave;
        self.color = NoteColor::from_pitch(key, octave);
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.octave == other.octave
    }
}

impl Eq for Note {}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key.symbol(), self.octave)
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Color never reaches the wire; it is re-derived on decode
        let mut state = serializer.serialize_struct("Note", 2)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("octave", &self.octave)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            key: Key,
            octave: i32,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(Note::new(wire.key, wire.octave))
    }
}

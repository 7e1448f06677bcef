// Key - Ordered pitch classes of the note grid
// Each key carries an integer grade; the higher the grade, the higher the pitch

use serde_repr::{Deserialize_repr, Serialize_repr};
use std::cmp::Ordering;
use std::fmt;

/// Transpose direction for single-step pitch moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    Up,
    Down,
}

/// A pitch class on the note grid
///
/// Grades follow piano-key spacing (C=1, D=3, ... B=12), so the 7 classes are
/// non-uniformly spaced on the grade axis while still totally ordered.
/// `Rest` is the silence marker and sorts below every real pitch.
///
/// Serialized as its grade integer, which is also the wire format of the
/// export document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Key {
    Rest = -1,
    C = 1,
    D = 3,
    E = 5,
    F = 6,
    G = 8,
    A = 10,
    B = 12,
}

impl Key {
    /// Every key in ascending grade order, `Rest` first
    pub const ALL: [Key; 8] = [
        Key::Rest,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::A,
        Key::B,
    ];

    /// Highest key on the grid
    pub const HIGHEST: Key = Key::B;

    /// Lowest key (the rest/silence marker)
    pub const LOWEST: Key = Key::Rest;

    /// Integer grade of this key
    pub fn grade(self) -> i8 {
        self as i8
    }

    /// Smallest key strictly above this one
    ///
    /// Saturates at `B`; the octave rollover above `B` is handled by
    /// `Note::transpose`, not here.
    pub fn next(self) -> Key {
        for key in Key::ALL {
            if key.grade() > self.grade() {
                return key;
            }
        }
        self
    }

    /// Largest key strictly below this one
    ///
    /// Stepping below `C` lands on `Rest`; saturates at `Rest`.
    pub fn previous(self) -> Key {
        for key in Key::ALL.iter().rev() {
            if key.grade() < self.grade() {
                return *key;
            }
        }
        self
    }

    /// Display symbol for this key
    pub fn symbol(self) -> &'static str {
        match self {
            Key::Rest => "-",
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::A => "A",
            Key::B => "B",
        }
    }

    /// True for every key except the rest marker
    pub fn is_pitch(self) -> bool {
        self != Key::Rest
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.grade().cmp(&other.grade())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ordering() {
        assert!(Key::Rest < Key::C);
        assert!(Key::C < Key::D);
        assert!(Key::D < Key::E);
        assert!(Key::E < Key::F);
        assert!(Key::F < Key::G);
        assert!(Key::G < Key::A);
        assert!(Key::A < Key::B);
    }

    #[test]
    fn test_next_scans_upward() {
        assert_eq!(Key::Rest.next(), Key::C);
        assert_eq!(Key::C.next(), Key::D);
        assert_eq!(Key::E.next(), Key::F);
        assert_eq!(Key::A.next(), Key::B);
    }

    #[test]
    fn test_next_saturates_at_top() {
        assert_eq!(Key::B.next(), Key::B);
    }

    #[test]
    fn test_previous_scans_downward() {
        assert_eq!(Key::B.previous(), Key::A);
        assert_eq!(Key::F.previous(), Key::E);
        assert_eq!(Key::D.previous(), Key::C);
    }

    #[test]
    fn test_previous_below_c_is_rest() {
        assert_eq!(Key::C.previous(), Key::Rest);
        assert_eq!(Key::Rest.previous(), Key::Rest);
    }

    #[test]
    fn test_previous_next_round_trip() {
        // Holds for every key except the boundaries, where steps saturate
        for key in Key::ALL {
            if key != Key::HIGHEST {
                assert_eq!(key.next().previous(), key, "round trip failed for {key}");
            }
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Key::Rest.symbol(), "-");
        assert_eq!(Key::C.symbol(), "C");
        assert_eq!(Key::B.to_string(), "B");
    }

    #[test]
    fn test_serializes_as_grade() {
        assert_eq!(serde_json::to_string(&Key::C).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Key::B).unwrap(), "12");
        assert_eq!(serde_json::to_string(&Key::Rest).unwrap(), "-1");

        let key: Key = serde_json::from_str("8").unwrap();
        assert_eq!(key, Key::G);
        assert!(serde_json::from_str::<Key>("2").is_err());
    }
}

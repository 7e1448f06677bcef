// Template - Built-in songs selectable from the composer menu
// Each template carries a title, a note sequence, and its tempo

use crate::model::key::Key;
use crate::model::note::Note;

/// A built-in song template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Default,
    JingleBell,
    TwinkleStar,
    DoReMi,
}

impl Template {
    /// Every template in menu order
    pub const ALL: [Template; 4] = [
        Template::Default,
        Template::JingleBell,
        Template::TwinkleStar,
        Template::DoReMi,
    ];

    /// Menu title
    pub fn title(self) -> &'static str {
        match self {
            Template::Default => "Default",
            Template::JingleBell => "Jingle Bell",
            Template::TwinkleStar => "Twinkle Twinkle Little Star",
            Template::DoReMi => "do-re-mi",
        }
    }

    /// Tempo this template is meant to be played at
    pub fn bpm(self) -> u32 {
        match self {
            Template::Default => 120,
            Template::JingleBell => 175,
            Template::TwinkleStar => 160,
            Template::DoReMi => 165,
        }
    }

    /// The template's note sequence
    pub fn notes(self) -> Vec<Note> {
        use Key::{A, B, C, D, E, F, G};

        let n = Note::pitched;
        let n5 = |key| Note::new(key, 5);
        let r = Note::rest();

        match self {
            Template::Default => vec![
                n(C),
                n(D),
                n(E),
                n(F),
                n(G),
                n(A),
                n(B),
                n5(C),
                n5(D),
                n5(E),
            ],
            Template::JingleBell => vec![
                n(E), n(E), n(E), r, n(E), n(E), n(E), r,
                n(E), n(G), n(C), n(D), n(E), r, r, r,
                n(F), n(F), n(F), r, n(F), n(E), n(E), r,
                n(E), n(D), n(D), n(E), n(D), r, n(G), r,
                n(E), n(E), n(E), r, n(E), n(E), n(E), r,
                n(E), n(G), n(C), n(D), n(E), r, r, r,
                n(F), n(F), n(F), r, n(F), n(E), n(E), r,
                n(G), n(G), n(E), n(D), n(C), r, r,
            ],
            Template::TwinkleStar => vec![
                n(C), n(C), n(G), n(G), n(A), n(A), n(G), r,
                n(F), n(F), n(E), n(E), n(D), n(D), n(C), r,
                n(G), n(G), n(F), n(F), n(E), n(E), n(D), r,
                n(G), n(G), n(F), n(F), n(E), n(E), n(D), r,
                n(C), n(C), n(G), n(G), n(A), n(A), n(G), r,
                n(F), n(F), n(E), n(E), n(D), n(D), n(C),
            ],
            Template::DoReMi => vec![
                n(C), r, n(D), n(E), r, n(C), n(E), r, n(C), r, n(E), r, r,
                n(D), r, n(E), n(F), n(F), n(E), n(D), n(F), r, r, r,
                n(E), r, n(F), n(G), r, n(E), n(G), r, n(E), n(G), r, r,
                n(F), r, n(G), n(A), n(A), n(G), n(F), n(A), r, r, r,
                n(G), r, n(C), n(D), n(E), n(F), n(G), n(A), r, r, r,
                n(A), r, n(D), n(E), n(F), n(G), n(A), n(B), r, r, r,
                n(B), r, n(E), n(F), n(G), n(A), n(B), n5(C), r, r, r,
                n5(C), n(B), n(A), r, n(F), r, n(B), r, n(G), r, n5(C), r,
                n(C), n(D), n(E), n(F), n(G), n(A), n(B), n5(C), r, r,
                n(G), n5(C),
            ],
        }
    }
}

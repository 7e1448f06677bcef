// MIDI - Playback events, the sequencer, and its collaborators

pub mod clock;
pub mod events;
pub mod instrument;
pub mod note;
pub mod player;
pub mod sequencer;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use events::{note_duration, notes_to_events};
pub use instrument::MidiInstrument;
pub use note::{MidiNote, SILENT_PITCH};
pub use player::TonePlayer;
pub use sequencer::{Sequencer, SequencerState};

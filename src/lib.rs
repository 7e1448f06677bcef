// Tunery - Library exports for the composer core

pub mod export;
pub mod midi;
pub mod model;

// Re-export commonly used types for convenience
pub use export::{ExportError, NoteExport};
pub use midi::{
    Clock, ManualClock, MidiInstrument, MidiNote, MonotonicClock, Sequencer, SequencerState,
    TonePlayer, note_duration, notes_to_events,
};
pub use model::{Key, Note, NoteColor, SHEET_CAPACITY, Template, Transpose, paginate};

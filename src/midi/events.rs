// Event codec - Converts the grid's note sequence into timed playback events

use crate::midi::note::MidiNote;
use crate::model::key::Key;
use crate::model::note::Note;
use std::time::Duration;

/// Velocity used for every pitched event
const PITCHED_VELOCITY: u8 = 120;

/// Gain used for every pitched event
const PITCHED_VOLUME: f32 = 0.8;

/// Map a note sequence 1:1 onto playback events, in order
///
/// Every event carries `per_note` as its slot duration (tempo is a single
/// constant per session). Rests become silent events instead of being
/// dropped, preserving timeline alignment.
pub fn notes_to_events(notes: &[Note], per_note: Duration) -> Vec<MidiNote> {
    notes
        .iter()
        .map(|note| {
            if note.key == Key::Rest {
                MidiNote::silent(per_note)
            } else {
                MidiNote::new(note.midi_key(), PITCHED_VELOCITY, 0, per_note, PITCHED_VOLUME)
            }
        })
        .collect()
}

/// Slot duration for a tempo: one beat, `60s / bpm`
pub fn note_duration(bpm: u32) -> Duration {
    assert!(bpm > 0, "BPM must be > 0");

    Duration::from_secs_f64(60.0 / f64::from(bpm))
}

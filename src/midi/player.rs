// TonePlayer - Contract of the external sound collaborator
// The sequencer only decides what to play and when; the player makes sound

/// External tone-producing collaborator consumed by the sequencer
///
/// The sequencer treats the player as a one-way sink: it writes gain,
/// triggers pitches, and selects instruments, but never reads state back.
pub trait TonePlayer {
    /// Set output gain (0.0-1.0)
    fn set_gain(&mut self, gain: f32);

    /// Sound the given piano key number (0-127)
    fn trigger(&mut self, pitch: u8);

    /// Switch to the given General MIDI program
    fn set_instrument(&mut self, program: u8);
}

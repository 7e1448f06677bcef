// MidiNote - A timed playback event
// Produced by the event codec; immutable once created

use std::time::Duration;

/// Pitch placeholder carried by silent (rest) events
///
/// Rests keep their slot on the timeline as events with a valid pitch but
/// zero velocity and zero volume, so pagination and scheduling never shift.
pub const SILENT_PITCH: u8 = 120;

/// A General MIDI playback event with its slot duration
///
/// The event stores only its own duration; the absolute offset at which it
/// fires is the sequencer's concern (computed as a prefix sum on load).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidiNote {
    /// Piano key number (0-127)
    pub pitch: u8,

    /// MIDI velocity (0-127)
    pub velocity: u8,

    /// MIDI channel
    pub channel: u8,

    /// How long this event's slot lasts
    pub duration: Duration,

    /// Playback gain (0.0-1.0)
    pub volume: f32,
}

impl MidiNote {
    /// Creates a new event
    pub fn new(pitch: u8, velocity: u8, channel: u8, duration: Duration, volume: f32) -> Self {
        assert!(pitch <= 127, "MIDI pitch must be 0-127");
        assert!(velocity <= 127, "MIDI velocity must be 0-127");
        assert!(
            (0.0..=1.0).contains(&volume),
            "Volume must be between 0.0 and 1.0"
        );

        Self {
            pitch,
            velocity,
            channel,
            duration,
            volume,
        }
    }

    /// A silent event occupying one slot of the timeline
    pub fn silent(duration: Duration) -> Self {
        Self::new(SILENT_PITCH, 0, 0, duration, 0.0)
    }

    /// Whether this event produces no sound
    pub fn is_silent(&self) -> bool {
        self.volume == 0.0
    }
}

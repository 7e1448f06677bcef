// Sequencer - Schedules timed events against a clock and drives the player
// Single-threaded and poll-driven; the owner calls poll() from its run loop

use crate::midi::clock::Clock;
use crate::midi::instrument::MidiInstrument;
use crate::midi::note::MidiNote;
use crate::midi::player::TonePlayer;
use log::debug;
use std::collections::VecDeque;
use std::time::Duration;

/// Sequencer lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// No pending events
    Idle,
    /// Events loaded, playback not started
    Scheduled,
    /// Events firing against the clock
    Playing,
}

/// One armed entry of the schedule
///
/// `event == None` marks the synthetic completion entry appended after the
/// last real event; it silences the player and signals the finish callback.
#[derive(Debug, Clone, Copy)]
struct Slot {
    offset: Duration,
    event: Option<MidiNote>,
}

/// Plays a loaded event list through a `TonePlayer`, in time
///
/// Each instance owns its player and clock; there is no shared global
/// sequencer. Offsets are absolute from the start instant (a prefix sum of
/// the preceding slot durations), so firing never drifts: a late poll fires
/// every due event in order and the next events stay anchored to the
/// original timeline.
pub struct Sequencer<P: TonePlayer, C: Clock> {
    player: P,
    clock: C,
    schedule: VecDeque<Slot>,
    state: SequencerState,
    started_at: Duration,
    on_finish: Option<Box<dyn FnMut()>>,
}

impl<P: TonePlayer, C: Clock> Sequencer<P, C> {
    /// Create a sequencer owning its player and clock
    pub fn new(player: P, clock: C) -> Self {
        Self {
            player,
            clock,
            schedule: VecDeque::new(),
            state: SequencerState::Idle,
            started_at: Duration::ZERO,
            on_finish: None,
        }
    }

    /// Register the callback invoked when the last event has fired
    ///
    /// Natural completion only; an explicit `stop()` never invokes it.
    pub fn set_on_finish(&mut self, callback: impl FnMut() + 'static) {
        self.on_finish = Some(Box::new(callback));
    }

    /// Current lifecycle state
    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == SequencerState::Playing
    }

    /// Number of entries still waiting to fire (completion entry included)
    pub fn pending(&self) -> usize {
        self.schedule.len()
    }

    /// Forward an instrument change to the player
    pub fn set_instrument(&mut self, instrument: MidiInstrument) {
        self.player.set_instrument(instrument.program());
    }

    /// Replace the schedule with a new event list
    ///
    /// Cancels anything pending (replacing while playing implicitly stops the
    /// current run), computes each event's absolute offset as the prefix sum
    /// of the preceding durations, and appends the completion entry at the
    /// total duration. Transitions to `Scheduled`.
    pub fn load(&mut self, events: Vec<MidiNote>) {
        self.schedule.clear();

        let mut offset = Duration::ZERO;
        for event in events {
            let duration = event.duration;
            self.schedule.push_back(Slot {
                offset,
                event: Some(event),
            });
            offset += duration;
        }

        self.schedule.push_back(Slot {
            offset,
            event: None,
        });

        self.state = SequencerState::Scheduled;
        debug!(
            "loaded {} events, total {:?}",
            self.schedule.len() - 1,
            offset
        );
    }

    /// Start playback of the loaded schedule
    ///
    /// Anchors every offset to the clock's current time and transitions to
    /// `Playing`; event firing happens in subsequent `poll()` calls. Without
    /// a loaded schedule this is a no-op. An empty load completes on the
    /// first poll: its completion entry sits at offset zero, which is safe
    /// because firing is poll-driven, never re-entrant.
    pub fn play(&mut self) {
        if self.state != SequencerState::Scheduled {
            debug!("play ignored in state {:?}", self.state);
            return;
        }

        self.started_at = self.clock.now();
        self.state = SequencerState::Playing;
        debug!("playback started at {:?}", self.started_at);
    }

    /// Cancel every pending entry and go idle
    ///
    /// Distinct from natural completion: the finish callback does not fire
    /// and the player's gain is left as-is.
    pub fn stop(&mut self) {
        self.schedule.clear();
        self.state = SequencerState::Idle;
        debug!("playback stopped");
    }

    /// Fire every event whose offset has elapsed, in schedule order
    ///
    /// Returns the number of entries fired. The owner calls this from its
    /// run loop; between polls nothing happens, so `load`/`play`/`stop`
    /// can never race with an in-flight fire.
    pub fn poll(&mut self) -> usize {
        if self.state != SequencerState::Playing {
            return 0;
        }

        let elapsed = self.clock.now().saturating_sub(self.started_at);
        let mut fired = 0;

        while let Some(slot) = self.schedule.front().copied() {
            if slot.offset > elapsed {
                break;
            }
            self.schedule.pop_front();
            fired += 1;

            match slot.event {
                Some(event) => {
                    self.player.set_gain(event.volume);
                    self.player.trigger(event.pitch);
                }
                None => {
                    // End of the sequence: silence the player, then signal
                    self.player.set_gain(0.0);
                    self.state = SequencerState::Idle;
                    if let Some(callback) = self.on_finish.as_mut() {
                        callback();
                    }
                    debug!("playback finished");
                }
            }
        }

        fired
    }
}

// Demo player: schedules a built-in template and polls it to completion

use log::info;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use tunery::{
    MidiInstrument, MonotonicClock, Note, SHEET_CAPACITY, Sequencer, Template, TonePlayer,
    note_duration, notes_to_events, paginate,
};

/// How often the run loop polls the sequencer
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Stand-in tone player that logs what a synthesizer would sound
#[derive(Default)]
struct ConsolePlayer {
    gain: f32,
}

impl TonePlayer for ConsolePlayer {
    fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    fn trigger(&mut self, pitch: u8) {
        if self.gain > 0.0 {
            info!("tone: key {pitch} at gain {:.1}", self.gain);
        } else {
            info!("rest");
        }
    }

    fn set_instrument(&mut self, program: u8) {
        info!("instrument changed to program {program}");
    }
}

fn main() {
    env_logger::init();

    let template = Template::TwinkleStar;
    let notes = template.notes();
    let sheets = paginate(&notes, SHEET_CAPACITY, Note::rest());

    println!("=== Tunery ===");
    println!(
        "{}: {} notes on {} sheets at {} BPM\n",
        template.title(),
        notes.len(),
        sheets.len(),
        template.bpm()
    );

    let events = notes_to_events(&notes, note_duration(template.bpm()));

    let mut sequencer = Sequencer::new(ConsolePlayer::default(), MonotonicClock::new());
    sequencer.set_instrument(MidiInstrument::GrandPiano);

    let finished = Rc::new(Cell::new(false));
    let flag = Rc::clone(&finished);
    sequencer.set_on_finish(move || flag.set(true));

    sequencer.load(events);
    sequencer.play();

    while !finished.get() {
        sequencer.poll();
        thread::sleep(POLL_INTERVAL);
    }

    println!("\nDone.");
}

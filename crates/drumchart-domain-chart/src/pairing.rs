use crate::model::TimedNote;
use crate::timeline::{RawEvent, RawEventKind};
use drumchart_ports::types::Pitch;
use std::collections::HashMap;

/// Pairs onsets with releases, newest open onset of a pitch first.
///
/// Notes come out in onset order. An onset that is never released keeps a
/// zero duration; a release with nothing open is dropped.
pub fn pair_events(events: &[RawEvent]) -> Vec<TimedNote> {
    let mut notes: Vec<TimedNote> = Vec::new();
    let mut open: HashMap<Pitch, Vec<usize>> = HashMap::new();

    for event in events {
        match event.kind {
            RawEventKind::Onset => {
                open.entry(event.pitch).or_default().push(notes.len());
                notes.push(TimedNote {
                    pitch: event.pitch,
                    onset_tick: event.tick,
                    duration_ticks: 0,
                });
            }
            RawEventKind::Release => {
                let Some(idx) = open.get_mut(&event.pitch).and_then(|stack| stack.pop()) else {
                    continue;
                };
                let note = &mut notes[idx];
                note.duration_ticks = event.tick - note.onset_tick;
            }
        }
    }

    let unmatched: usize = open.values().map(Vec::len).sum();
    if unmatched > 0 {
        log::debug!("{unmatched} onsets without release kept as zero-length notes");
    }

    notes
}

use crate::lane_map::{LaneId, ROLL_MARKER};
use crate::model::{ChartNoteRecord, MappedNote};
use drumchart_ports::types::{Resolution, Tick};

/// Shortest duration, in quarter notes, that still renders as a sustain.
pub const SWELL_THRESHOLD_QUARTERS: Tick = 1;
/// Roll hit spacing in thousandths of a quarter note.
pub const ROLL_STEP_PER_MILLE: Tick = 166;

/// Spacing of repeated roll hits: ceil(0.166 x ticks per quarter).
pub fn roll_step(resolution: Resolution) -> Tick {
    (ROLL_STEP_PER_MILLE * resolution.ticks_per_quarter() + 999) / 1000
}

pub fn sustain_length(duration_ticks: Tick, resolution: Resolution) -> Tick {
    if duration_ticks < SWELL_THRESHOLD_QUARTERS * resolution.ticks_per_quarter() {
        0
    } else {
        duration_ticks
    }
}

fn push_hit(out: &mut Vec<ChartNoteRecord>, tick: Tick, lane: LaneId, length: Tick) {
    out.push(ChartNoteRecord::note(tick, lane, length));
    if let Some(pad) = lane.companion() {
        out.push(ChartNoteRecord::note(tick, pad, 0));
    }
}

/// Chart records for one note: the hit, its cymbal flag, and a roll for sustains.
pub fn expand_note(note: &MappedNote, resolution: Resolution) -> Vec<ChartNoteRecord> {
    let tick = note.onset_tick;
    let length = sustain_length(note.duration_ticks, resolution);

    let mut out = Vec::new();
    push_hit(&mut out, tick, note.lane, length);
    if length == 0 {
        return out;
    }

    out.push(ChartNoteRecord::sustain(tick, ROLL_MARKER, length));
    let step = roll_step(resolution);
    let end = tick + length;
    let mut at = tick + step;
    while at <= end {
        push_hit(&mut out, at, note.lane, 0);
        at += step;
    }
    out
}

pub fn expand_notes(notes: &[MappedNote], resolution: Resolution) -> Vec<Vec<ChartNoteRecord>> {
    notes
        .iter()
        .map(|note| expand_note(note, resolution))
        .collect()
}

use crate::lane_map::{LaneId, LaneMap};
use crate::model::MappedNote;
use drumchart_ports::types::{Resolution, Tick};
use serde::{Deserialize, Serialize};

/// Half-width of the ride search window around a crash, in quarter notes.
pub const RIDE_WINDOW_QUARTERS: Tick = 2;

/// Rewrites crash lanes that would land on the same lane as a nearby ride.
///
/// Notes are visited in order and rewritten in place, so a flip is visible to
/// the double-cymbal check of every later note.
pub fn improve_mapping(notes: &mut [MappedNote], lane_map: &LaneMap, resolution: Resolution) {
    let window = resolution.ticks_per_quarter() * RIDE_WINDOW_QUARTERS;

    for idx in 0..notes.len() {
        let crash = notes[idx];
        if !lane_map.is_crash(crash.pitch()) || is_double_cymbal(idx, notes) {
            continue;
        }

        let collides = notes.iter().any(|other| {
            lane_map.is_ride(other.pitch())
                && other.onset_tick - window <= crash.onset_tick
                && crash.onset_tick < other.onset_tick + window
                && other.lane == crash.lane
        });
        if collides {
            let lane = crash.lane.flipped();
            log::debug!(
                "tick {}: crash {} moved from {:?} to {:?} next to ride",
                crash.onset_tick,
                crash.pitch(),
                crash.lane,
                lane
            );
            notes[idx].lane = lane;
        }
    }
}

fn is_right_cymbal(lane: LaneId) -> bool {
    matches!(lane, LaneId::CymbalB | LaneId::CymbalC)
}

/// A right-hand cymbal struck on the same tick as another right-hand cymbal.
pub fn is_double_cymbal(idx: usize, notes: &[MappedNote]) -> bool {
    let note = &notes[idx];
    if !is_right_cymbal(note.lane) {
        return false;
    }
    notes.iter().enumerate().any(|(other_idx, other)| {
        other_idx != idx && other.onset_tick == note.onset_tick && is_right_cymbal(other.lane)
    })
}

pub fn apply_cymbal_flip(notes: &mut [MappedNote]) {
    for note in notes {
        note.lane = note.lane.flipped();
    }
}

/// A CymbalB hit and a TomMid hit share a tick and therefore a game lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionWarning {
    pub tick: Tick,
}

#[derive(Default)]
struct TickLanes {
    tick: Option<Tick>,
    cymbal: bool,
    pad: bool,
    reported: bool,
}

/// Reports each tick where CymbalB and its paired pad lane are both struck.
pub fn detect_collisions(notes: &[MappedNote]) -> Vec<CollisionWarning> {
    let (_, warnings) = notes.iter().fold(
        (TickLanes::default(), Vec::new()),
        |(mut state, mut warnings), note| {
            if state.tick != Some(note.onset_tick) {
                state = TickLanes {
                    tick: Some(note.onset_tick),
                    ..TickLanes::default()
                };
            }
            match note.lane {
                LaneId::CymbalB => state.cymbal = true,
                LaneId::TomMid => state.pad = true,
                _ => {}
            }
            if state.cymbal && state.pad && !state.reported {
                state.reported = true;
                log::warn!(
                    "tick {}: blue cymbal/pad overlap, try toggling cymbal flip or adjust the input",
                    note.onset_tick
                );
                warnings.push(CollisionWarning {
                    tick: note.onset_tick,
                });
            }
            (state, warnings)
        },
    );
    warnings
}

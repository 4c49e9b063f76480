use crate::error::ChartError;
use crate::model::{MappedNote, TimedNote};
use drumchart_ports::types::Pitch;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Offset between a cymbal lane's chart value and its paired pad lane.
pub const CYMBAL_FLAG_OFFSET: u8 = 64;
/// Chart marker id used for drum rolls.
pub const ROLL_MARKER: u8 = 65;

const KICK: &[Pitch] = &[36, 35];
const SNARE: &[Pitch] = &[37, 38, 39, 40];
const TOM_HIGH: &[Pitch] = &[48, 50];
const TOM_MID: &[Pitch] = &[47, 45];
const TOM_LOW: &[Pitch] = &[43, 41];
const HI_HAT: &[Pitch] = &[42, 44, 46];
// crash 1, splash, china
const CYMBAL_B: &[Pitch] = &[49, 55, 52];
// ride, ride bell, crash 2
const CYMBAL_C: &[Pitch] = &[51, 53, 59, 57];
const CRASHES: &[Pitch] = &[49, 57];
const RIDES: &[Pitch] = &[51, 53, 59];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneId {
    Kick,
    Snare,
    TomHigh,
    TomMid,
    TomLow,
    /// Hi-hat.
    CymbalA,
    CymbalB,
    CymbalC,
}

impl LaneId {
    pub const ALL: [LaneId; 8] = [
        LaneId::Kick,
        LaneId::Snare,
        LaneId::TomHigh,
        LaneId::TomMid,
        LaneId::TomLow,
        LaneId::CymbalA,
        LaneId::CymbalB,
        LaneId::CymbalC,
    ];

    /// Note number written to the chart.
    pub fn chart_value(self) -> u8 {
        match self {
            LaneId::Kick => 0,
            LaneId::Snare => 1,
            LaneId::TomHigh => 2,
            LaneId::TomMid => 3,
            LaneId::TomLow => 4,
            LaneId::CymbalA => CYMBAL_FLAG_OFFSET + 2,
            LaneId::CymbalB => CYMBAL_FLAG_OFFSET + 3,
            LaneId::CymbalC => CYMBAL_FLAG_OFFSET + 4,
        }
    }

    pub fn from_chart_value(value: u8) -> Option<LaneId> {
        LaneId::ALL
            .iter()
            .copied()
            .find(|lane| lane.chart_value() == value)
    }

    pub fn is_cymbal(self) -> bool {
        matches!(self, LaneId::CymbalA | LaneId::CymbalB | LaneId::CymbalC)
    }

    /// Pad lane sharing the game lane with this cymbal.
    pub fn companion(self) -> Option<LaneId> {
        if !self.is_cymbal() {
            return None;
        }
        LaneId::from_chart_value(self.chart_value() - CYMBAL_FLAG_OFFSET)
    }

    /// Swaps CymbalB and CymbalC, leaves every other lane alone.
    pub fn flipped(self) -> LaneId {
        match self {
            LaneId::CymbalB => LaneId::CymbalC,
            LaneId::CymbalC => LaneId::CymbalB,
            other => other,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LaneMap {
    lookup: HashMap<Pitch, LaneId>,
    crashes: Vec<Pitch>,
    rides: Vec<Pitch>,
}

impl LaneMap {
    pub fn general_midi() -> Self {
        let table: [(LaneId, &[Pitch]); 8] = [
            (LaneId::Kick, KICK),
            (LaneId::Snare, SNARE),
            (LaneId::TomHigh, TOM_HIGH),
            (LaneId::TomMid, TOM_MID),
            (LaneId::TomLow, TOM_LOW),
            (LaneId::CymbalA, HI_HAT),
            (LaneId::CymbalB, CYMBAL_B),
            (LaneId::CymbalC, CYMBAL_C),
        ];

        let mut lookup = HashMap::new();
        for (lane, pitches) in table {
            for &pitch in pitches {
                lookup.insert(pitch, lane);
            }
        }

        Self {
            lookup,
            crashes: CRASHES.to_vec(),
            rides: RIDES.to_vec(),
        }
    }

    pub fn lookup(&self, pitch: Pitch) -> Option<LaneId> {
        self.lookup.get(&pitch).copied()
    }

    pub fn is_crash(&self, pitch: Pitch) -> bool {
        self.crashes.contains(&pitch)
    }

    pub fn is_ride(&self, pitch: Pitch) -> bool {
        self.rides.contains(&pitch)
    }

    pub fn crashes(&self) -> &[Pitch] {
        &self.crashes
    }

    pub fn rides(&self) -> &[Pitch] {
        &self.rides
    }

    /// Lane lookup for a paired note; an unknown pitch aborts the conversion.
    pub fn map_note(&self, note: TimedNote) -> Result<MappedNote, ChartError> {
        let lane = self.lookup(note.pitch).ok_or(ChartError::UnmappedPitch {
            pitch: note.pitch,
            tick: note.onset_tick,
        })?;
        Ok(MappedNote::new(note, lane))
    }

    pub fn map_notes(&self, notes: &[TimedNote]) -> Result<Vec<MappedNote>, ChartError> {
        notes.iter().map(|note| self.map_note(*note)).collect()
    }
}

impl Default for LaneMap {
    fn default() -> Self {
        Self::general_midi()
    }
}

use crate::error::ChartError;
use crate::lane_map::LaneId;
use drumchart_ports::midi::SourceEventKind;
use drumchart_ports::types::{Pitch, Tick};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedNote {
    pub pitch: Pitch,
    pub onset_tick: Tick,
    /// Stays 0 when the onset is never released.
    pub duration_ticks: Tick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedNote {
    pub source: TimedNote,
    pub lane: LaneId,
    pub onset_tick: Tick,
    pub duration_ticks: Tick,
}

impl MappedNote {
    pub fn new(source: TimedNote, lane: LaneId) -> Self {
        Self {
            source,
            lane,
            onset_tick: source.onset_tick,
            duration_ticks: source.duration_ticks,
        }
    }

    pub fn pitch(&self) -> Pitch {
        self.source.pitch
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartRecordKind {
    Note { lane: LaneId },
    Sustain { marker: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartNoteRecord {
    pub tick: Tick,
    pub kind: ChartRecordKind,
    pub length: Tick,
}

impl ChartNoteRecord {
    pub fn note(tick: Tick, lane: LaneId, length: Tick) -> Self {
        Self {
            tick,
            kind: ChartRecordKind::Note { lane },
            length,
        }
    }

    pub fn sustain(tick: Tick, marker: u8, length: Tick) -> Self {
        Self {
            tick,
            kind: ChartRecordKind::Sustain { marker },
            length,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaValue {
    /// BPM x 1000, rounded.
    Tempo { micro_bpm: u64 },
    /// Denominator stored as its base-2 exponent.
    TimeSignature { numerator: u8, denominator_pow: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEvent {
    pub tick: Tick,
    pub value: MetaValue,
}

impl MetaEvent {
    pub fn from_source(tick: Tick, kind: &SourceEventKind) -> Result<Self, ChartError> {
        let malformed = |reason: &str| ChartError::MalformedMetaEvent {
            tick,
            reason: reason.to_string(),
        };

        let value = match *kind {
            SourceEventKind::Tempo { us_per_quarter } => {
                if us_per_quarter == 0 {
                    return Err(malformed("zero tempo"));
                }
                let bpm = 60_000_000.0 / us_per_quarter as f64;
                MetaValue::Tempo {
                    micro_bpm: (bpm * 1000.0).round_ties_even() as u64,
                }
            }
            SourceEventKind::TimeSignature {
                numerator,
                denominator,
            } => {
                if !denominator.is_power_of_two() {
                    return Err(malformed(&format!(
                        "time signature denominator {denominator} is not a power of two"
                    )));
                }
                MetaValue::TimeSignature {
                    numerator,
                    denominator_pow: (denominator as f64).log2().round() as u8,
                }
            }
            other => return Err(malformed(&format!("not a sync event: {other:?}"))),
        };

        Ok(Self { tick, value })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SongValue {
    Numeric(String),
    Text(String),
}

impl SongValue {
    /// Quoted text stays text; a bare number becomes numeric.
    /// Bare words are text too and get quoted on output, e.g. `Player2 = bass`.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return SongValue::Text(raw[1..raw.len() - 1].to_string());
        }
        let numeric_chars = raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'));
        if numeric_chars && raw.parse::<f64>().is_ok() {
            SongValue::Numeric(raw.to_string())
        } else {
            SongValue::Text(raw.to_string())
        }
    }
}

/// Song section entries, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongMetadata {
    entries: Vec<(String, SongValue)>,
}

impl SongMetadata {
    pub const RESOLUTION_KEY: &'static str = "Resolution";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut meta = Self::new();
        for (key, value) in pairs {
            meta.insert(key, SongValue::classify(value.as_ref()));
        }
        meta
    }

    /// Replaces an existing key in place, appends otherwise.
    pub fn insert(&mut self, key: impl Into<String>, value: SongValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<SongValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&SongValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Drops any stored resolution and appends the stream's own.
    pub fn set_resolution(&mut self, ticks_per_quarter: u16) {
        self.remove(Self::RESOLUTION_KEY);
        self.entries.push((
            Self::RESOLUTION_KEY.to_string(),
            SongValue::Numeric(ticks_per_quarter.to_string()),
        ));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SongValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use crate::model::{ChartNoteRecord, ChartRecordKind, MetaEvent, MetaValue, SongMetadata, SongValue};
use serde::{Deserialize, Serialize};

pub const LINE_SEPARATOR: &str = "\n";
/// Only one difficulty is ever written.
pub const DIFFICULTY: &str = "Expert";

/// Finalized chart content; rendering never reorders or validates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub song: SongMetadata,
    pub sync_track: Vec<MetaEvent>,
    pub notes: Vec<Vec<ChartNoteRecord>>,
}

impl ChartDocument {
    pub fn render(&self) -> String {
        [
            song_section(&self.song),
            sync_track_section(&self.sync_track),
            drums_section(&self.notes),
        ]
        .join(LINE_SEPARATOR)
    }
}

fn section(name: &str, lines: Vec<String>) -> String {
    let mut out = Vec::with_capacity(lines.len() + 3);
    out.push(format!("[{name}]"));
    out.push("{".to_string());
    out.extend(lines.into_iter().map(|line| format!("  {line}")));
    out.push("}".to_string());
    out.join(LINE_SEPARATOR)
}

pub fn song_section(meta: &SongMetadata) -> String {
    let lines = meta
        .iter()
        .map(|(key, value)| match value {
            SongValue::Numeric(number) => format!("{key} = {number}"),
            SongValue::Text(text) => format!("{key} = \"{text}\""),
        })
        .collect();
    section("Song", lines)
}

pub fn meta_event_line(event: &MetaEvent) -> String {
    match event.value {
        MetaValue::Tempo { micro_bpm } => format!("{} = B {}", event.tick, micro_bpm),
        MetaValue::TimeSignature {
            numerator,
            denominator_pow,
        } => format!("{} = TS {} {}", event.tick, numerator, denominator_pow),
    }
}

pub fn sync_track_section(events: &[MetaEvent]) -> String {
    section("SyncTrack", events.iter().map(meta_event_line).collect())
}

pub fn note_record_line(record: &ChartNoteRecord) -> String {
    match record.kind {
        ChartRecordKind::Note { lane } => {
            format!("{} = N {} {}", record.tick, lane.chart_value(), record.length)
        }
        ChartRecordKind::Sustain { marker } => {
            format!("{} = S {} {}", record.tick, marker, record.length)
        }
    }
}

pub fn drums_section(groups: &[Vec<ChartNoteRecord>]) -> String {
    let lines = groups.iter().flatten().map(note_record_line).collect();
    section(&format!("{DIFFICULTY}Drums"), lines)
}

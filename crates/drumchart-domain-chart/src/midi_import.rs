use drumchart_ports::midi::{SourceEventKind, SourceStream};
use drumchart_ports::types::Resolution;
use midly::{Fps, MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum MidiImportError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn import_midi_path(path: &Path) -> Result<SourceStream, MidiImportError> {
    let data = std::fs::read(path).map_err(|e| MidiImportError::Io(e.to_string()))?;
    import_midi_bytes(&data)
}

/// Decodes every track into one stream, tracks back to back in file order.
pub fn import_midi_bytes(data: &[u8]) -> Result<SourceStream, MidiImportError> {
    let smf = Smf::parse(data).map_err(|e| MidiImportError::Parse(e.to_string()))?;
    let (ppq, tempo_override) = match smf.header.timing {
        Timing::Metrical(ticks) => (ticks.as_int(), None),
        Timing::Timecode(fps, ticks_per_frame) => {
            let (ppq, us_per_quarter) = timecode_ppq_and_tempo(fps, ticks_per_frame);
            (ppq, Some(us_per_quarter))
        }
    };

    let mut stream = SourceStream::new(Resolution(ppq));
    if let Some(us_per_quarter) = tempo_override {
        stream.push(0, SourceEventKind::Tempo { us_per_quarter });
    }

    for track in &smf.tracks {
        for event in track {
            let delta = event.delta.as_int();
            let kind = match &event.kind {
                TrackEventKind::Midi { message, .. } => match message {
                    MidiMessage::NoteOn { key, vel } if vel.as_int() == 0 => {
                        SourceEventKind::Release {
                            pitch: key.as_int(),
                        }
                    }
                    MidiMessage::NoteOn { key, .. } => SourceEventKind::Onset {
                        pitch: key.as_int(),
                    },
                    MidiMessage::NoteOff { key, .. } => SourceEventKind::Release {
                        pitch: key.as_int(),
                    },
                    _ => SourceEventKind::Ignored,
                },
                TrackEventKind::Meta(MetaMessage::Tempo(us_per_quarter)) => {
                    match tempo_override {
                        Some(_) => SourceEventKind::OtherMeta,
                        None => SourceEventKind::Tempo {
                            us_per_quarter: us_per_quarter.as_int(),
                        },
                    }
                }
                TrackEventKind::Meta(MetaMessage::TimeSignature(numerator, denom_pow, _, _)) => {
                    SourceEventKind::TimeSignature {
                        numerator: *numerator,
                        denominator: 1u32.checked_shl(u32::from(*denom_pow)).unwrap_or(0),
                    }
                }
                TrackEventKind::Meta(_) => SourceEventKind::OtherMeta,
                _ => SourceEventKind::Ignored,
            };
            stream.push(delta, kind);
        }
    }

    log::debug!(
        "decoded {} events from {} tracks at {} ppq",
        stream.events.len(),
        smf.tracks.len(),
        ppq
    );
    Ok(stream)
}

fn timecode_ppq_and_tempo(fps: Fps, ticks_per_frame: u8) -> (u16, u32) {
    let ticks_per_frame = ticks_per_frame.max(1) as u16;
    match fps {
        Fps::Fps24 => (24 * ticks_per_frame, 1_000_000),
        Fps::Fps25 => (25 * ticks_per_frame, 1_000_000),
        Fps::Fps30 => (30 * ticks_per_frame, 1_000_000),
        Fps::Fps29 => (30 * ticks_per_frame, 1_001_000),
    }
}

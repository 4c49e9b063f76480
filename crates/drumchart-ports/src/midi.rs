use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceEventKind {
    Onset {
        pitch: Pitch,
    },
    Release {
        pitch: Pitch,
    },
    /// Raw device units: microseconds per quarter note.
    Tempo {
        us_per_quarter: u32,
    },
    TimeSignature {
        numerator: u8,
        denominator: u32,
    },
    OtherMeta,
    Ignored,
}

impl SourceEventKind {
    /// Meta events that belong on the sync track.
    pub fn is_sync_meta(&self) -> bool {
        matches!(
            self,
            SourceEventKind::Tempo { .. } | SourceEventKind::TimeSignature { .. }
        )
    }
}

/// One decoded event, timed relative to the previous event of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEvent {
    pub delta: u32,
    pub kind: SourceEventKind,
}

impl SourceEvent {
    pub fn new(delta: u32, kind: SourceEventKind) -> Self {
        Self { delta, kind }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStream {
    pub resolution: Resolution,
    pub events: Vec<SourceEvent>,
}

impl SourceStream {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, delta: u32, kind: SourceEventKind) {
        self.events.push(SourceEvent::new(delta, kind));
    }
}

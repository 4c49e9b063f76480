use crate::error::ChartError;
use crate::model::MetaEvent;
use drumchart_ports::midi::{SourceEventKind, SourceStream};
use drumchart_ports::types::{Pitch, Tick};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawEventKind {
    Onset,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub tick: Tick,
    pub kind: RawEventKind,
    pub pitch: Pitch,
}

impl RawEvent {
    pub fn onset(tick: Tick, pitch: Pitch) -> Self {
        Self {
            tick,
            kind: RawEventKind::Onset,
            pitch,
        }
    }

    pub fn release(tick: Tick, pitch: Pitch) -> Self {
        Self {
            tick,
            kind: RawEventKind::Release,
            pitch,
        }
    }
}

/// A meta event routed to the sync track, not yet validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncCandidate {
    pub tick: Tick,
    pub kind: SourceEventKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    pub notes: Vec<RawEvent>,
    pub sync: Vec<SyncCandidate>,
}

impl Timeline {
    pub fn sync_events(&self) -> Result<Vec<MetaEvent>, ChartError> {
        self.sync
            .iter()
            .map(|candidate| MetaEvent::from_source(candidate.tick, &candidate.kind))
            .collect()
    }
}

/// Resolves deltas to absolute ticks and separates note traffic from sync meta.
pub fn split_stream(stream: &SourceStream) -> Timeline {
    let mut timeline = Timeline::default();
    let mut tick: Tick = 0;

    for event in &stream.events {
        tick += event.delta as Tick;
        match event.kind {
            SourceEventKind::Onset { pitch } => timeline.notes.push(RawEvent::onset(tick, pitch)),
            SourceEventKind::Release { pitch } => {
                timeline.notes.push(RawEvent::release(tick, pitch))
            }
            kind if kind.is_sync_meta() => timeline.sync.push(SyncCandidate { tick, kind }),
            _ => {}
        }
    }

    timeline
}

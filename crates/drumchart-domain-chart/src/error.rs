use drumchart_ports::types::{Pitch, Tick};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("unmapped pitch {pitch} at tick {tick}")]
    UnmappedPitch { pitch: Pitch, tick: Tick },
    #[error("malformed meta event at tick {tick}: {reason}")]
    MalformedMetaEvent { tick: Tick, reason: String },
    #[error("invalid resolution: {0} ticks per quarter")]
    InvalidResolution(u16),
}

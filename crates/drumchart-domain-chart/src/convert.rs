use crate::chart_export::ChartDocument;
use crate::error::ChartError;
use crate::expand::expand_notes;
use crate::heuristic::{apply_cymbal_flip, detect_collisions, improve_mapping, CollisionWarning};
use crate::lane_map::LaneMap;
use crate::model::SongMetadata;
use crate::pairing::pair_events;
use crate::timeline::split_stream;
use drumchart_ports::midi::SourceStream;
use drumchart_ports::storage::SettingsDto;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub cymbal_flip: bool,
    pub strict: bool,
}

impl From<&SettingsDto> for ConvertOptions {
    fn from(settings: &SettingsDto) -> Self {
        Self {
            cymbal_flip: settings.cymbal_flip,
            strict: settings.strict,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub document: String,
    pub warnings: Vec<CollisionWarning>,
}

/// Builds the chart content without rendering it.
pub fn build_chart(
    stream: &SourceStream,
    meta: Option<&SongMetadata>,
    options: &ConvertOptions,
) -> Result<(ChartDocument, Vec<CollisionWarning>), ChartError> {
    let resolution = stream.resolution;
    if resolution.0 == 0 {
        return Err(ChartError::InvalidResolution(resolution.0));
    }

    let timeline = split_stream(stream);
    let sync_track = timeline.sync_events()?;
    let timed = pair_events(&timeline.notes);

    let lane_map = LaneMap::general_midi();
    let mut mapped = lane_map.map_notes(&timed)?;
    if !options.strict {
        improve_mapping(&mut mapped, &lane_map, resolution);
    }
    if options.cymbal_flip {
        apply_cymbal_flip(&mut mapped);
    }
    let warnings = detect_collisions(&mapped);
    let notes = expand_notes(&mapped, resolution);

    let mut song = meta.cloned().unwrap_or_default();
    song.set_resolution(resolution.0);

    log::debug!(
        "converted {} notes and {} sync events ({} collision warnings)",
        mapped.len(),
        sync_track.len(),
        warnings.len()
    );

    Ok((
        ChartDocument {
            song,
            sync_track,
            notes,
        },
        warnings,
    ))
}

pub fn convert(
    stream: &SourceStream,
    meta: Option<&SongMetadata>,
    options: &ConvertOptions,
) -> Result<Conversion, ChartError> {
    let (chart, warnings) = build_chart(stream, meta, options)?;
    Ok(Conversion {
        document: chart.render(),
        warnings,
    })
}

use drumchart_domain_chart::{
    apply_cymbal_flip, ChartError, LaneId, LaneMap, MappedNote, TimedNote, CYMBAL_FLAG_OFFSET,
};
use pretty_assertions::assert_eq;

fn timed(pitch: u8, onset_tick: i64) -> TimedNote {
    TimedNote {
        pitch,
        onset_tick,
        duration_ticks: 0,
    }
}

#[test]
fn general_midi_kit_maps_to_lanes() {
    let map = LaneMap::general_midi();
    let expected = [
        (36, LaneId::Kick),
        (35, LaneId::Kick),
        (38, LaneId::Snare),
        (39, LaneId::Snare),
        (48, LaneId::TomHigh),
        (45, LaneId::TomMid),
        (41, LaneId::TomLow),
        (42, LaneId::CymbalA),
        (46, LaneId::CymbalA),
        (49, LaneId::CymbalB),
        (52, LaneId::CymbalB),
        (51, LaneId::CymbalC),
        (57, LaneId::CymbalC),
    ];
    for (pitch, lane) in expected {
        assert_eq!(map.lookup(pitch), Some(lane), "pitch {pitch}");
    }
    assert_eq!(map.lookup(60), None);
}

#[test]
fn crash_and_ride_sets_are_disjoint() {
    let map = LaneMap::general_midi();
    assert_eq!(map.crashes(), &[49, 57]);
    assert_eq!(map.rides(), &[51, 53, 59]);
    assert!(map.crashes().iter().all(|p| !map.is_ride(*p)));
}

#[test]
fn unmapped_pitch_is_an_error() {
    let map = LaneMap::general_midi();
    let err = map
        .map_notes(&[timed(36, 0), timed(60, 480)])
        .expect_err("pitch 60 has no lane");
    assert_eq!(
        err,
        ChartError::UnmappedPitch {
            pitch: 60,
            tick: 480
        }
    );
}

#[test]
fn cymbal_companions_sit_one_offset_below() {
    for lane in [LaneId::CymbalA, LaneId::CymbalB, LaneId::CymbalC] {
        let pad = lane.companion().expect("cymbals have a pad lane");
        assert_eq!(pad.chart_value() + CYMBAL_FLAG_OFFSET, lane.chart_value());
    }
    assert_eq!(LaneId::CymbalB.companion(), Some(LaneId::TomMid));
    assert_eq!(LaneId::CymbalC.companion(), Some(LaneId::TomLow));
    assert_eq!(LaneId::Snare.companion(), None);
}

#[test]
fn cymbal_flip_twice_restores_lanes() {
    let map = LaneMap::general_midi();
    let original: Vec<MappedNote> = map
        .map_notes(&[timed(42, 0), timed(49, 0), timed(51, 10), timed(45, 20)])
        .expect("all mapped");

    let mut notes = original.clone();
    apply_cymbal_flip(&mut notes);
    let lanes: Vec<_> = notes.iter().map(|n| n.lane).collect();
    assert_eq!(
        lanes,
        vec![
            LaneId::CymbalA,
            LaneId::CymbalC,
            LaneId::CymbalB,
            LaneId::TomMid
        ]
    );

    apply_cymbal_flip(&mut notes);
    assert_eq!(notes, original);
}

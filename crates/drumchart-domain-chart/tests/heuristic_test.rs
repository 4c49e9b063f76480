use drumchart_domain_chart::{
    detect_collisions, improve_mapping, is_double_cymbal, CollisionWarning, LaneId, LaneMap,
    MappedNote, TimedNote,
};
use drumchart_ports::types::Resolution;
use pretty_assertions::assert_eq;

const PPQ: Resolution = Resolution(480);

fn mapped(pitch: u8, tick: i64, lane: LaneId) -> MappedNote {
    MappedNote::new(
        TimedNote {
            pitch,
            onset_tick: tick,
            duration_ticks: 0,
        },
        lane,
    )
}

fn mapped_default(map: &LaneMap, pitch: u8, tick: i64) -> MappedNote {
    mapped(pitch, tick, map.lookup(pitch).expect("pitch is mapped"))
}

fn lanes(notes: &[MappedNote]) -> Vec<LaneId> {
    notes.iter().map(|n| n.lane).collect()
}

#[test]
fn crash_near_ride_moves_to_other_cymbal() {
    let map = LaneMap::general_midi();
    let mut notes = vec![
        mapped_default(&map, 51, 0),
        mapped_default(&map, 57, 480),
    ];

    improve_mapping(&mut notes, &map, PPQ);

    assert_eq!(lanes(&notes), vec![LaneId::CymbalC, LaneId::CymbalB]);
}

#[test]
fn crash_on_other_lane_than_ride_is_kept() {
    let map = LaneMap::general_midi();
    let mut notes = vec![
        mapped_default(&map, 51, 0),
        mapped_default(&map, 49, 240),
    ];

    improve_mapping(&mut notes, &map, PPQ);

    assert_eq!(lanes(&notes), vec![LaneId::CymbalC, LaneId::CymbalB]);
}

#[test]
fn window_spans_two_quarters_around_the_crash() {
    let map = LaneMap::general_midi();

    // Ride 959 ticks before the crash: inside.
    let mut notes = vec![mapped_default(&map, 51, 0), mapped_default(&map, 57, 959)];
    improve_mapping(&mut notes, &map, PPQ);
    assert_eq!(notes[1].lane, LaneId::CymbalB);

    // Ride exactly two quarters before the crash: outside.
    let mut notes = vec![mapped_default(&map, 51, 0), mapped_default(&map, 57, 960)];
    improve_mapping(&mut notes, &map, PPQ);
    assert_eq!(notes[1].lane, LaneId::CymbalC);

    // Ride exactly two quarters after the crash: inside.
    let mut notes = vec![mapped_default(&map, 57, 0), mapped_default(&map, 51, 960)];
    improve_mapping(&mut notes, &map, PPQ);
    assert_eq!(notes[0].lane, LaneId::CymbalB);

    // One tick further: outside.
    let mut notes = vec![mapped_default(&map, 57, 0), mapped_default(&map, 51, 961)];
    improve_mapping(&mut notes, &map, PPQ);
    assert_eq!(notes[0].lane, LaneId::CymbalC);
}

#[test]
fn double_crash_next_to_ride_keeps_both_lanes() {
    let map = LaneMap::general_midi();
    let mut notes = vec![
        mapped_default(&map, 51, 0),
        mapped_default(&map, 49, 480),
        mapped_default(&map, 57, 480),
    ];

    assert!(is_double_cymbal(1, &notes));
    assert!(is_double_cymbal(2, &notes));
    improve_mapping(&mut notes, &map, PPQ);

    assert_eq!(
        lanes(&notes),
        vec![LaneId::CymbalC, LaneId::CymbalB, LaneId::CymbalC]
    );
}

#[test]
fn crash_with_ride_on_same_tick_counts_as_double() {
    let map = LaneMap::general_midi();
    let mut notes = vec![mapped_default(&map, 57, 0), mapped_default(&map, 51, 0)];

    improve_mapping(&mut notes, &map, PPQ);

    assert_eq!(lanes(&notes), vec![LaneId::CymbalC, LaneId::CymbalC]);
}

#[test]
fn hi_hat_alongside_crash_is_not_a_double_cymbal() {
    let map = LaneMap::general_midi();
    let notes = vec![
        mapped_default(&map, 57, 480),
        mapped_default(&map, 42, 480),
        mapped_default(&map, 49, 481),
    ];

    assert!(!is_double_cymbal(0, &notes));
    assert!(!is_double_cymbal(1, &notes));
}

#[test]
fn blue_cymbal_and_pad_on_same_tick_warn_once() {
    let notes = vec![
        mapped(49, 0, LaneId::CymbalB),
        mapped(36, 0, LaneId::Kick),
        mapped(45, 0, LaneId::TomMid),
        mapped(47, 0, LaneId::TomMid),
        mapped(49, 240, LaneId::CymbalB),
        mapped(45, 480, LaneId::TomMid),
        mapped(45, 720, LaneId::TomMid),
        mapped(55, 720, LaneId::CymbalB),
    ];

    let warnings = detect_collisions(&notes);

    assert_eq!(
        warnings,
        vec![CollisionWarning { tick: 0 }, CollisionWarning { tick: 720 }]
    );
}

#![cfg(feature = "serde")]

use legacy_pp::{
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes, OsuScoreState},
    Beatmap,
};

use self::common::*;

mod common;

#[test]
fn cached_attributes_survive_json() {
    let map = test_map();
    let diff_attrs = map.difficulty();

    let json = serde_json::to_string(&diff_attrs).unwrap();
    let cached: OsuDifficultyAttributes = serde_json::from_str(&json).unwrap();

    assert!(cached.is_current());
    assert_eq!(cached.n_objects(), diff_attrs.n_objects());

    let perf = cached.performance().misses(2).calculate();
    let expected = diff_attrs.performance().misses(2).calculate();

    assert_almost_eq(perf.pp, expected.pp, 1e-12);

    let json = serde_json::to_string(&perf).unwrap();
    let perf_cached: OsuPerformanceAttributes = serde_json::from_str(&json).unwrap();

    assert_almost_eq(perf_cached.pp, perf.pp, 1e-12);
}

#[test]
fn beatmap_from_json() {
    let map = test_map();

    let json = serde_json::to_string(&map).unwrap();
    let parsed: Beatmap = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.hit_objects.len(), map.hit_objects.len());
    assert_eq!(parsed.difficulty().max_combo, map.difficulty().max_combo);
}

#[test]
fn score_state_fields() {
    let state: OsuScoreState = serde_json::from_str(
        r#"{"max_combo":100,"n300":90,"n100":5,"n50":1,"misses":2}"#,
    )
    .unwrap();

    assert_eq!(state.total_hits(), 98);
}

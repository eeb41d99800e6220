use legacy_pp::{osu::OsuDifficultyAttributes, Beatmap, Difficulty, TooSuspicious};

use self::common::*;

mod common;

fn weighted_sum(mut peaks: Vec<f64>) -> f64 {
    peaks.retain(|&peak| peak > 0.0);
    peaks.sort_unstable_by(|a, b| b.total_cmp(a));

    let mut weight = 1.0;

    peaks.into_iter().fold(0.0, |sum, peak| {
        let sum = sum + peak * weight;
        weight *= 0.9;

        sum
    })
}

#[test]
fn empty_map() {
    let map = Beatmap::default();
    let attrs = Difficulty::new().mods(HD | DT).calculate(&map);

    let expected = OsuDifficultyAttributes {
        mods: HD | DT,
        version: OsuDifficultyAttributes::VERSION,
        ..Default::default()
    };

    assert_eq!(attrs, expected);
    assert!(attrs.is_current());
}

#[test]
fn single_object() {
    let map = Beatmap {
        hit_objects: vec![circle(256.0, 192.0, 1000.0)],
        ..test_map()
    };

    let attrs = Difficulty::new().calculate(&map);

    assert_eq_float(attrs.stars, 0.0);
    assert_eq_float(attrs.aim, 0.0);
    assert_eq!(attrs.n_circles, 1);
    assert_eq!(attrs.max_combo, 1);
    assert_eq_float(attrs.ar, 9.0);
}

#[test]
fn object_counts() {
    let attrs = test_map().difficulty();

    assert_eq!(attrs.n_circles, 152);
    assert_eq!(attrs.n_sliders, 24);
    assert_eq!(attrs.n_spinners, 1);
    assert_eq!(attrs.n_objects(), 177);
    assert_eq!(attrs.max_combo(), 152 + 12 * 3 + 12 * 4 + 1);
}

#[test]
fn ratings_match_strains() {
    let map = test_map();
    let difficulty = Difficulty::new();

    let attrs = difficulty.calculate(&map);
    let strains = difficulty.strains(&map);

    assert!(!strains.is_empty());
    assert_eq!(strains.aim.len(), strains.speed.len());
    assert_eq!(strains.aim.len(), strains.flashlight.len());

    let aim = weighted_sum(strains.aim).sqrt() * 0.0675;
    let speed = weighted_sum(strains.speed).sqrt() * 0.0675;
    let flashlight = strains.flashlight.iter().sum::<f64>().sqrt() * 0.0675;

    assert_almost_eq(attrs.aim, aim, 1e-12);
    assert_almost_eq(attrs.speed, speed, 1e-12);
    assert_almost_eq(attrs.flashlight, flashlight, 1e-12);

    assert!(attrs.stars > 0.0);
    assert!(attrs.stars_with_flashlight >= attrs.stars);
}

#[test]
fn clock_rate_mods() {
    let map = test_map();

    let nomod = Difficulty::new().calculate(&map);
    let dt = Difficulty::new().mods(DT).calculate(&map);
    let ht = Difficulty::new().mods(HT).calculate(&map);
    let custom = Difficulty::new().mods(DT).clock_rate(1.0).calculate(&map);

    assert!(dt.stars > nomod.stars);
    assert!(ht.stars < nomod.stars);
    assert!(dt.ar > nomod.ar);
    assert_almost_eq(custom.stars, nomod.stars, 1e-12);
}

#[test]
fn hardrock_caps_ar() {
    let attrs = Difficulty::new().mods(HR).calculate(&test_map());

    assert_almost_eq(attrs.ar, 10.0, 1e-9);
    assert_eq!(attrs.mods, HR);
}

#[test]
fn relax_and_autopilot() {
    let map = test_map();

    let rx = Difficulty::new().mods(RX).calculate(&map);
    let ap = Difficulty::new().mods(AP).calculate(&map);
    let both = Difficulty::new().mods(RX | AP).calculate(&map);

    assert_eq_float(rx.speed, 0.0);
    assert!(rx.aim > 0.0);
    assert_eq_float(ap.aim, 0.0);
    assert!(ap.speed > 0.0);

    assert_eq_float(both.aim, rx.aim);
    assert_eq_float(both.speed, rx.speed);
}

#[test]
fn touch_device_weakens_aim() {
    let map = test_map();

    let nomod = Difficulty::new().calculate(&map);
    let td = Difficulty::new().mods(TD).calculate(&map);

    assert_almost_eq(td.aim, nomod.aim.powf(0.8), 1e-12);
    assert_eq_float(td.speed, nomod.speed);
}

#[test]
fn passed_objects() {
    let map = test_map();

    let partial = Difficulty::new().passed_objects(50).calculate(&map);

    let truncated = Beatmap {
        hit_objects: map.hit_objects[..50].to_vec(),
        ..map.clone()
    };

    let expected = Difficulty::new().calculate(&truncated);

    assert_eq!(partial, expected);
    assert_eq!(partial.n_objects(), 50);

    let overshoot = Difficulty::new().passed_objects(10_000).calculate(&map);

    assert_eq!(overshoot, map.difficulty());
}

#[test]
fn difficulty_overrides() {
    let map = test_map();

    let attrs = Difficulty::new().ar(7.0, false).od(4.0, false).calculate(&map);

    assert_almost_eq(attrs.ar, 7.0, 1e-9);
    assert_almost_eq(attrs.od, 4.0, 1e-9);

    let attrs = Difficulty::new().mods(HR).ar(7.0, true).calculate(&map);

    assert_almost_eq(attrs.ar, 7.0, 1e-9);
}

#[test]
fn deterministic() {
    let map = test_map();
    let difficulty = Difficulty::new().mods(HD | HR | FL);

    assert_eq!(difficulty.calculate(&map), difficulty.calculate(&map));
}

#[test]
fn checked_calculate() {
    let map = test_map();

    let checked = Difficulty::new().checked_calculate(&map);
    assert_eq!(checked, Ok(map.difficulty()));

    let mut unordered = map;
    unordered.hit_objects.swap(3, 4);

    assert_eq!(
        Difficulty::new().checked_calculate(&unordered),
        Err(TooSuspicious::Unordered)
    );

    let dense = Beatmap {
        hit_objects: (0..200).map(|i| circle(0.0, 0.0, f64::from(i))).collect(),
        ..Beatmap::default()
    };

    assert_eq!(
        Difficulty::new().checked_calculate(&dense),
        Err(TooSuspicious::Density)
    );
}

#[test]
fn thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Beatmap>();
    assert_send_sync::<Difficulty>();
    assert_send_sync::<OsuDifficultyAttributes>();
    assert_send_sync::<legacy_pp::osu::OsuPerformance<'static>>();
}

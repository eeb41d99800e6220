#![allow(unused)]

use legacy_pp::{
    model::hit_object::{HitObject, HitObjectKind, Pos, Slider, Spinner},
    Beatmap,
};

pub use self::mods::*;

/// Bit values for mods
mod mods {
    pub const NM: u32 = 0;
    pub const NF: u32 = 1 << 0;
    pub const EZ: u32 = 1 << 1;
    pub const TD: u32 = 1 << 2;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const RX: u32 = 1 << 7;
    pub const HT: u32 = 1 << 8;
    pub const FL: u32 = 1 << 10;
    pub const SO: u32 = 1 << 12;
    pub const AP: u32 = 1 << 13;
}

pub fn circle(x: f32, y: f32, start_time: f64) -> HitObject {
    HitObject {
        pos: Pos::new(x, y),
        start_time,
        kind: HitObjectKind::Circle,
    }
}

pub fn slider(x: f32, y: f32, start_time: f64, duration: f64, repeats: usize) -> HitObject {
    HitObject {
        pos: Pos::new(x, y),
        start_time,
        kind: HitObjectKind::Slider(Slider {
            lazy_end_pos: Pos::new(x + 120.0, y),
            lazy_travel_dist: 120.0,
            duration,
            repeats,
            n_ticks: 1,
        }),
    }
}

pub fn spinner(start_time: f64, duration: f64) -> HitObject {
    HitObject {
        pos: Pos::new(256.0, 192.0),
        start_time,
        kind: HitObjectKind::Spinner(Spinner { duration }),
    }
}

/// Circles alternating between both sides of the playfield.
pub fn jumps(n: u32, interval: f64) -> Vec<HitObject> {
    (0..n)
        .map(|i| {
            let x = if i % 2 == 0 { 96.0 } else { 416.0 };

            circle(x, 192.0, 1000.0 + f64::from(i) * interval)
        })
        .collect()
}

/// A map with a bit of everything: jumps, a short stream, sliders, and a
/// spinner at the end.
pub fn test_map() -> Beatmap {
    let mut hit_objects = jumps(120, 180.0);
    let mut time = hit_objects.last().map_or(0.0, |h| h.start_time) + 300.0;

    for i in 0..32 {
        hit_objects.push(circle(200.0 + (i % 4) as f32 * 20.0, 150.0, time));
        time += 90.0;
    }

    time += 200.0;

    for i in 0..24 {
        let y = if i % 2 == 0 { 80.0 } else { 300.0 };
        hit_objects.push(slider(100.0, y, time, 240.0, i % 2));
        time += 480.0;
    }

    hit_objects.push(spinner(time + 500.0, 3000.0));

    Beatmap {
        ar: 9.0,
        cs: 4.0,
        hp: 6.0,
        od: 8.5,
        hit_objects,
    }
}

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < f64::EPSILON, "{a} != {b}")
}

#[track_caller]
pub fn assert_almost_eq(a: f64, b: f64, margin: f64) {
    assert!(
        (a - b).abs() <= margin * b.abs().max(1.0),
        "{a} != {b} (margin {margin})"
    )
}

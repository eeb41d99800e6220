use thiserror::Error;

use crate::{
    model::hit_object::{HitObject, HitObjectKind, Pos},
    util::hint::unlikely,
};

use super::Beatmap;

/// Resulting error type of [`Beatmap::check_suspicion`].
///
/// If you feel like a [`Beatmap`] is incorrectly flagged as suspicious or if
/// a map should be flagged but isn't, please open an issue so the heuristic
/// can be improved.
///
/// [`Beatmap::check_suspicion`]: crate::model::beatmap::Beatmap::check_suspicion
/// [`Beatmap`]: crate::model::beatmap::Beatmap
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("the map seems too suspicious for further calculation (reason={self:?})")]
#[non_exhaustive]
pub enum TooSuspicious {
    /// Notes are too dense time-wise.
    Density,
    /// The map seems too long.
    Length,
    /// Too many objects.
    ObjectCount,
    /// General red flag.
    RedFlag,
    /// Too many sliders' positions were suspicious.
    SliderPositions,
    /// Too many sliders had a very high amount of repeats.
    SliderRepeats,
    /// Hit objects are not ordered by their start time.
    Unordered,
}

impl TooSuspicious {
    pub(crate) fn new(map: &Beatmap) -> Option<Self> {
        #[inline]
        fn too_long(hit_objects: &[HitObject]) -> bool {
            const DAY_MS: u32 = 60 * 60 * 24 * 1000;

            match hit_objects {
                [first, .., last] => (last.start_time - first.start_time) > f64::from(DAY_MS),
                _ => false,
            }
        }

        #[inline]
        fn too_dense(i: usize, curr: &HitObject, hit_objects: &[HitObject]) -> bool {
            const THRESHOLD_1S: usize = 100; // 100 notes per 1s = 6000BPM
            const THRESHOLD_10S: usize = 250; // 250 notes per 10s = 1500BPM

            (hit_objects.len() > i + THRESHOLD_1S
                && hit_objects[i + THRESHOLD_1S].start_time - curr.start_time < 1000.0)
                || (hit_objects.len() > i + THRESHOLD_10S
                    && hit_objects[i + THRESHOLD_10S].start_time - curr.start_time < 10_000.0)
        }

        #[inline]
        fn check_pos(pos: Pos) -> bool {
            /// osu!'s max value is `131_072` and the playfield is `512x384`
            const THRESHOLD: f32 = 10_000.0;

            f32::abs(pos.x) > THRESHOLD || f32::abs(pos.y) > THRESHOLD
        }

        #[inline]
        const fn check_repeats(repeats: usize) -> bool {
            /// osu!'s max value is `9000`
            const THRESHOLD: usize = 1000;

            repeats > THRESHOLD
        }

        const OBJECT_THRESHOLD: usize = 500_000;

        let hit_objects = map.hit_objects.as_slice();

        if unlikely(hit_objects.len() > OBJECT_THRESHOLD) {
            return Some(Self::ObjectCount);
        } else if unlikely(too_long(hit_objects)) {
            return Some(Self::Length);
        }

        let mut pos_beyond_threshold = 0;
        let mut repeats_beyond_threshold = 0;

        for (i, h) in hit_objects.iter().enumerate() {
            if unlikely(too_dense(i, h, hit_objects)) {
                return Some(Self::Density);
            }

            if unlikely(i > 0 && hit_objects[i - 1].start_time > h.start_time) {
                return Some(Self::Unordered);
            }

            if let HitObjectKind::Slider(ref slider) = h.kind {
                if unlikely(check_repeats(slider.repeats)) {
                    if unlikely(check_pos(h.pos)) {
                        return Some(Self::RedFlag);
                    }

                    repeats_beyond_threshold += 1;
                } else if unlikely(check_pos(h.pos)) {
                    pos_beyond_threshold += 1;
                }
            }
        }

        if unlikely(pos_beyond_threshold > 256) {
            Some(Self::SliderPositions)
        } else if unlikely(repeats_beyond_threshold > 256) {
            Some(Self::SliderRepeats)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::Slider;

    use super::*;

    fn circle(start_time: f64) -> HitObject {
        HitObject {
            pos: Pos::new(256.0, 192.0),
            start_time,
            kind: HitObjectKind::Circle,
        }
    }

    fn map(hit_objects: Vec<HitObject>) -> Beatmap {
        Beatmap {
            hit_objects,
            ..Default::default()
        }
    }

    #[test]
    fn regular_map_passes() {
        let map = map((0..500).map(|i| circle(f64::from(i) * 200.0)).collect());

        assert_eq!(TooSuspicious::new(&map), None);
        assert!(map.check_suspicion().is_ok());
    }

    #[test]
    fn dense_map() {
        let map = map((0..200).map(|i| circle(f64::from(i))).collect());

        assert_eq!(TooSuspicious::new(&map), Some(TooSuspicious::Density));
    }

    #[test]
    fn long_map() {
        let map = map(vec![circle(0.0), circle(2.0 * 24.0 * 60.0 * 60.0 * 1000.0)]);

        assert_eq!(TooSuspicious::new(&map), Some(TooSuspicious::Length));
    }

    #[test]
    fn unordered_map() {
        let map = map(vec![circle(1000.0), circle(500.0)]);

        assert_eq!(map.check_suspicion(), Err(TooSuspicious::Unordered));
    }

    #[test]
    fn far_away_repeating_slider() {
        let slider = HitObject {
            pos: Pos::new(50_000.0, 0.0),
            start_time: 0.0,
            kind: HitObjectKind::Slider(Slider {
                lazy_end_pos: Pos::new(50_000.0, 0.0),
                lazy_travel_dist: 0.0,
                duration: 100.0,
                repeats: 5000,
                n_ticks: 0,
            }),
        };

        let map = map(vec![slider]);

        assert_eq!(TooSuspicious::new(&map), Some(TooSuspicious::RedFlag));
    }

    #[test]
    fn display() {
        let msg = TooSuspicious::Density.to_string();

        assert_eq!(
            msg,
            "the map seems too suspicious for further calculation (reason=Density)"
        );
    }
}

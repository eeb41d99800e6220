use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    model::hit_object::{HitObject, HitObjectKind},
};

use super::{scaling_factor::ScalingFactor, HD_FADE_OUT_DURATION_MULTIPLIER};

/// A [`HitObject`] put into relation with its predecessors.
///
/// Times are adjusted to the clock rate and distances are normalized to the
/// circle size.
#[derive(Clone, Debug)]
pub struct OsuDifficultyObject<'a> {
    pub idx: usize,
    pub base: &'a HitObject,
    pub start_time: f64,
    pub delta_time: f64,

    pub strain_time: f64,
    pub jump_dist: f64,
    pub travel_dist: f64,
    pub travel_time: f64,
    pub angle: Option<f64>,
}

impl<'a> OsuDifficultyObject<'a> {
    pub const NORMALIZED_RADIUS: i32 = 52;

    pub const MIN_DELTA_TIME: f64 = 50.0;
    const MIN_TRAVEL_TIME: f64 = 25.0;

    pub fn new(
        hit_object: &'a HitObject,
        last_object: &HitObject,
        last_last_object: Option<&HitObject>,
        clock_rate: f64,
        idx: usize,
        scaling_factor: &ScalingFactor,
    ) -> Self {
        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;
        let start_time = hit_object.start_time / clock_rate;

        // * Every strain interval is hard capped at the equivalent of 375 BPM streaming speed as a safety measure
        let strain_time = delta_time.max(Self::MIN_DELTA_TIME);

        let mut this = Self {
            idx,
            base: hit_object,
            start_time,
            delta_time,
            strain_time,
            jump_dist: 0.0,
            travel_dist: 0.0,
            travel_time: 0.0,
            angle: None,
        };

        this.set_distances(last_object, last_last_object, clock_rate, scaling_factor);

        this
    }

    pub fn opacity_at(&self, time: f64, hidden: bool, time_preempt: f64, time_fade_in: f64) -> f64 {
        if time > self.base.start_time {
            // * Consider a hitobject as being invisible when its start time is passed.
            // * In reality the hitobject will be visible beyond its start time up until its hittable window has passed,
            // * but this is an approximation and such a case is unlikely to be hit where this function is used.
            return 0.0;
        }

        let fade_in_start_time = self.base.start_time - time_preempt;
        let fade_in_duration = time_fade_in;

        if hidden {
            // * Taken from OsuModHidden.
            let fade_out_start_time = self.base.start_time - time_preempt + time_fade_in;
            let fade_out_duration = time_preempt * HD_FADE_OUT_DURATION_MULTIPLIER;

            (((time - fade_in_start_time) / fade_in_duration).clamp(0.0, 1.0))
                .min(1.0 - ((time - fade_out_start_time) / fade_out_duration).clamp(0.0, 1.0))
        } else {
            ((time - fade_in_start_time) / fade_in_duration).clamp(0.0, 1.0)
        }
    }

    fn set_distances(
        &mut self,
        last_object: &HitObject,
        last_last_object: Option<&HitObject>,
        clock_rate: f64,
        scaling_factor: &ScalingFactor,
    ) {
        let scaling_factor = scaling_factor.factor;

        if let HitObjectKind::Slider(ref slider) = self.base.kind {
            self.travel_dist = f64::from(slider.lazy_travel_dist * scaling_factor);
            self.travel_time = (slider.duration / clock_rate).max(Self::MIN_TRAVEL_TIME);
        }

        // * Don't need to jump to reach spinners
        if !self.base.is_spinner() {
            let last_cursor_pos = last_object.end_pos();

            self.jump_dist = f64::from(
                (self.base.pos * scaling_factor - last_cursor_pos * scaling_factor).length(),
            );
        }

        if let Some(last_last_object) = last_last_object {
            let v1 = last_last_object.end_pos() - last_object.pos;
            let v2 = self.base.pos - last_object.end_pos();

            let dot = v1.dot(v2);
            let det = v1.x * v2.y - v1.y * v2.x;

            self.angle = Some((f64::from(det).atan2(f64::from(dot))).abs());
        }
    }
}

impl IDifficultyObject for OsuDifficultyObject<'_> {
    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for OsuDifficultyObject<'_> {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

use std::cmp;

use crate::{
    any::difficulty::{object::IDifficultyObject, skills::StrainSkill},
    model::{hit_object::HitObjectKind, mods::ModFlags},
    osu::difficulty::object::OsuDifficultyObject,
};

use super::StrainDecaySkill;

/// Represents the skill required to memorise and hit every object in a map
/// with the Flashlight mod enabled.
#[derive(Clone, Debug)]
pub struct Flashlight {
    has_hidden_mod: bool,
    inner: StrainSkill,
    evaluator: FlashlightEvaluator,
}

impl Flashlight {
    pub const PREEMPT_MIN: f64 = 450.0;

    pub fn new(mods: ModFlags, radius: f64, time_preempt: f64, time_fade_in: f64) -> Self {
        let scaling_factor = f64::from(OsuDifficultyObject::NORMALIZED_RADIUS) / radius;

        Self {
            has_hidden_mod: mods.hidden,
            inner: StrainSkill::default(),
            evaluator: FlashlightEvaluator::new(scaling_factor, time_preempt, time_fade_in),
        }
    }

    pub fn difficulty_to_performance(difficulty: f64) -> f64 {
        25.0 * (difficulty).powf(2.0)
    }
}

impl StrainDecaySkill for Flashlight {
    const SKILL_MULTIPLIER: f64 = 0.05512;
    const STRAIN_DECAY_BASE: f64 = 0.15;

    fn strain_value_of(
        &self,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        self.evaluator
            .evaluate_diff_of(curr, objects, self.has_hidden_mod)
    }

    fn inner(&self) -> &StrainSkill {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut StrainSkill {
        &mut self.inner
    }

    fn get_curr_strain_peaks(self) -> Vec<f64> {
        self.inner.get_curr_strain_peaks()
    }

    // Plain sum instead of a weighted one
    fn difficulty_value(self) -> f64 {
        self.inner.get_curr_strain_peaks().iter().sum()
    }
}

#[derive(Clone, Debug)]
struct FlashlightEvaluator {
    scaling_factor: f64,
    time_preempt: f64,
    time_fade_in: f64,
}

impl FlashlightEvaluator {
    const MAX_OPACITY_BONUS: f64 = 0.4;
    const HIDDEN_BONUS: f64 = 0.2;

    const MIN_VELOCITY: f64 = 0.5;
    const SLIDER_MULTIPLIER: f64 = 1.3;

    const MIN_ANGLE_MULTIPLIER: f64 = 0.2;

    const fn new(scaling_factor: f64, time_preempt: f64, time_fade_in: f64) -> Self {
        Self {
            scaling_factor,
            time_preempt,
            time_fade_in,
        }
    }

    fn evaluate_diff_of(
        &self,
        curr: &OsuDifficultyObject<'_>,
        diff_objects: &[OsuDifficultyObject<'_>],
        hidden: bool,
    ) -> f64 {
        if curr.base.is_spinner() {
            return 0.0;
        }

        let mut small_dist_nerf = 1.0;
        let mut cumulative_strain_time = 0.0;

        let mut result = 0.0;

        let mut last_obj = curr;

        let mut angle_repeat_count = 0.0;

        // * This is iterating backwards in time from the current object.
        for i in 0..cmp::min(curr.idx, 10) {
            let Some(prev_obj) = curr.previous(i, diff_objects) else {
                break;
            };

            let prev_hit_obj = prev_obj.base;

            if !prev_hit_obj.is_spinner() {
                let jump_dist = f64::from((curr.base.pos - prev_hit_obj.end_pos()).length());
                cumulative_strain_time += last_obj.strain_time;

                // * We want to nerf objects that can be easily seen within the Flashlight circle radius.
                if i == 0 {
                    small_dist_nerf = (jump_dist / 75.0).min(1.0);
                }

                // * We also want to nerf stacks so that only the first object of the stack is accounted for.
                let stack_nerf = ((prev_obj.jump_dist / self.scaling_factor) / 25.0).min(1.0);

                // * Bonus based on how visible the object is.
                let opacity_bonus = 1.0
                    + Self::MAX_OPACITY_BONUS
                        * (1.0
                            - curr.opacity_at(
                                prev_hit_obj.start_time,
                                hidden,
                                self.time_preempt,
                                self.time_fade_in,
                            ));

                result += stack_nerf * opacity_bonus * self.scaling_factor * jump_dist
                    / cumulative_strain_time;

                if let Some((prev_angle, curr_angle)) = prev_obj.angle.zip(curr.angle) {
                    // * Objects further back in time should count less for the nerf.
                    if (prev_angle - curr_angle).abs() < 0.02 {
                        angle_repeat_count += (1.0 - 0.1 * i as f64).max(0.0);
                    }
                }
            }

            last_obj = prev_obj;
        }

        result = (small_dist_nerf * result).powf(2.0);

        // * Additional bonus for Hidden due to there being no approach circles.
        if hidden {
            result *= 1.0 + Self::HIDDEN_BONUS;
        }

        // * Nerf patterns with repeated angles.
        result *= Self::MIN_ANGLE_MULTIPLIER
            + (1.0 - Self::MIN_ANGLE_MULTIPLIER) / (angle_repeat_count + 1.0);

        let mut slider_bonus = 0.0;

        if let HitObjectKind::Slider(ref slider) = curr.base.kind {
            // Travel distance is given in osu!pixels already
            let pixel_travel_dist = f64::from(slider.lazy_travel_dist);

            // * Reward sliders based on velocity.
            slider_bonus =
                ((pixel_travel_dist / curr.travel_time - Self::MIN_VELOCITY).max(0.0)).powf(0.5);

            // * Longer sliders require more memorisation.
            slider_bonus *= pixel_travel_dist;

            // * Nerf sliders with repeats, as less memorisation is required.
            if slider.repeats > 0 {
                slider_bonus /= slider.span_count() as f64;
            }
        }

        result += slider_bonus * Self::SLIDER_MULTIPLIER;

        result
    }
}

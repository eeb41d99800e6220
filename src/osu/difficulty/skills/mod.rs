use crate::{
    any::difficulty::skills::StrainSkill,
    model::{beatmap::BeatmapAttributes, mods::ModFlags},
};

use self::{aim::Aim, flashlight::Flashlight, speed::Speed};

use super::{
    object::OsuDifficultyObject, scaling_factor::ScalingFactor, HD_FADE_IN_DURATION_MULTIPLIER,
};

pub mod aim;
pub mod flashlight;
pub mod speed;
pub mod strain;

/// The strain recurrence shared by all osu!standard skills.
///
/// Implementors only provide their constants and the value of a single
/// object; processing and aggregation are the same for everyone.
pub trait StrainDecaySkill: Sized {
    const SKILL_MULTIPLIER: f64;
    const STRAIN_DECAY_BASE: f64;

    /// The unweighted difficulty of `curr` on its own.
    fn strain_value_of(
        &self,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64;

    fn inner(&self) -> &StrainSkill;

    fn inner_mut(&mut self) -> &mut StrainSkill;

    /// Feed the next object into the skill and return the resulting strain.
    fn process(
        &mut self,
        curr: &OsuDifficultyObject<'_>,
        objects: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        self.inner_mut()
            .advance_sections(curr, objects, Self::STRAIN_DECAY_BASE);

        let value = self.strain_value_of(curr, objects) * Self::SKILL_MULTIPLIER;

        self.inner_mut()
            .update_strain(curr.delta_time, Self::STRAIN_DECAY_BASE, value)
    }

    fn curr_strain(&self) -> f64 {
        self.inner().curr_strain
    }

    fn get_curr_strain_peaks(self) -> Vec<f64>;

    fn difficulty_value(self) -> f64;
}

pub struct OsuSkills {
    pub aim: Aim,
    pub speed: Speed,
    pub flashlight: Flashlight,
}

impl OsuSkills {
    pub fn new(
        mods: ModFlags,
        scaling_factor: &ScalingFactor,
        map_attrs: &BeatmapAttributes,
    ) -> Self {
        // Raw milliseconds, same as the objects' start times that
        // flashlight compares against
        let time_preempt = map_attrs.hit_windows.ar * map_attrs.clock_rate;

        // * Preempt time can go below 450ms. Normally, this is achieved via the DT mod
        // * which uniformly speeds up all animations game wide regardless of AR.
        // * This uniform speedup is hard to match 1:1, however we can at least make
        // * AR>10 (via mods) feel good by extending the upper linear function above.
        let time_fade_in = if mods.hidden {
            time_preempt * HD_FADE_IN_DURATION_MULTIPLIER
        } else {
            400.0 * (time_preempt / Flashlight::PREEMPT_MIN).min(1.0)
        };

        Self {
            aim: Aim::new(),
            speed: Speed::new(),
            flashlight: Flashlight::new(mods, scaling_factor.radius, time_preempt, time_fade_in),
        }
    }

    pub fn process(&mut self, curr: &OsuDifficultyObject<'_>, objects: &[OsuDifficultyObject<'_>]) {
        self.aim.process(curr, objects);
        self.speed.process(curr, objects);
        self.flashlight.process(curr, objects);
    }
}

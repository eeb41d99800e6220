use crate::{any::difficulty::skills::StrainSkill, osu::difficulty::object::OsuDifficultyObject};

use super::StrainDecaySkill;

/// Represents the skill required to correctly aim at every object in the map
/// with a uniform circle size and normalized distances.
#[derive(Clone, Debug, Default)]
pub struct Aim {
    inner: StrainSkill,
}

impl Aim {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StrainDecaySkill for Aim {
    const SKILL_MULTIPLIER: f64 = 26.25;
    const STRAIN_DECAY_BASE: f64 = 0.15;

    fn strain_value_of(
        &self,
        curr: &OsuDifficultyObject<'_>,
        _: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        (apply_diminishing_exp(curr.jump_dist) + apply_diminishing_exp(curr.travel_dist))
            / curr.strain_time
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

    fn difficulty_value(self) -> f64 {
        self.inner.difficulty_value(StrainSkill::DECAY_WEIGHT)
    }
}

fn apply_diminishing_exp(val: f64) -> f64 {
    val.powf(0.99)
}

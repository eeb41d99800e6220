use crate::{any::difficulty::skills::StrainSkill, osu::difficulty::object::OsuDifficultyObject};

use super::StrainDecaySkill;

const SINGLE_SPACING_THRESHOLD: f64 = 125.0;
const STREAM_SPACING_THRESHOLD: f64 = 110.0;
const ALMOST_DIAMETER: f64 = 90.0;

/// Represents the skill required to press keys with regards to keeping up
/// with the speed at which objects need to be hit.
#[derive(Clone, Debug, Default)]
pub struct Speed {
    inner: StrainSkill,
}

impl Speed {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StrainDecaySkill for Speed {
    const SKILL_MULTIPLIER: f64 = 1400.0;
    const STRAIN_DECAY_BASE: f64 = 0.3;

    fn strain_value_of(
        &self,
        curr: &OsuDifficultyObject<'_>,
        _: &[OsuDifficultyObject<'_>],
    ) -> f64 {
        speed_value(curr.jump_dist + curr.travel_dist) / curr.strain_time
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

fn speed_value(dist: f64) -> f64 {
    if dist > SINGLE_SPACING_THRESHOLD {
        2.5
    } else if dist > STREAM_SPACING_THRESHOLD {
        1.6 + 0.9 * (dist - STREAM_SPACING_THRESHOLD)
            / (SINGLE_SPACING_THRESHOLD - STREAM_SPACING_THRESHOLD)
    } else if dist > ALMOST_DIAMETER {
        1.2 + 0.4 * (dist - ALMOST_DIAMETER) / (STREAM_SPACING_THRESHOLD - ALMOST_DIAMETER)
    } else if dist > ALMOST_DIAMETER / 2.0 {
        0.95 + 0.25 * (dist - ALMOST_DIAMETER / 2.0) / (ALMOST_DIAMETER / 2.0)
    } else {
        0.95
    }
}

pub use self::{
    attributes::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    difficulty::{
        object::OsuDifficultyObject,
        scaling_factor::ScalingFactor,
        skills::{aim::Aim, flashlight::Flashlight, speed::Speed, StrainDecaySkill},
    },
    performance::{OsuAttributeProvider, OsuPerformance, PERFORMANCE_BASE_MULTIPLIER},
    score_state::OsuScoreState,
    strains::OsuStrains,
};

mod attributes;
pub(crate) mod difficulty;
mod performance;
mod score_state;
mod strains;

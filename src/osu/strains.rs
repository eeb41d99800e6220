use crate::{model::beatmap::Beatmap, Difficulty};

use super::difficulty::{
    skills::{OsuSkills, StrainDecaySkill},
    DifficultyValues,
};

/// The result of calculating the strains on a osu! map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsuStrains {
    /// Strain peaks of the aim skill.
    pub aim: Vec<f64>,
    /// Strain peaks of the speed skill.
    pub speed: Vec<f64>,
    /// Strain peaks of the flashlight skill.
    pub flashlight: Vec<f64>,
}

impl OsuStrains {
    /// Time between two strains in ms.
    pub const SECTION_LEN: f64 = 400.0;

    pub(crate) fn new(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let DifficultyValues {
            skills:
                OsuSkills {
                    aim,
                    speed,
                    flashlight,
                },
            attrs: _,
        } = DifficultyValues::calculate(difficulty, map);

        Self {
            aim: aim.get_curr_strain_peaks(),
            speed: speed.get_curr_strain_peaks(),
            flashlight: flashlight.get_curr_strain_peaks(),
        }
    }

    /// Amount of sections, i.e. the length of each strain list.
    pub fn len(&self) -> usize {
        self.aim.len()
    }

    /// Whether no section has been recorded.
    pub fn is_empty(&self) -> bool {
        self.aim.is_empty()
    }
}

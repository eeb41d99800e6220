use crate::{
    osu::{OsuDifficultyAttributes, OsuPerformance},
    Difficulty,
};

pub use self::{
    attributes::{BeatmapAttributes, BeatmapAttributesBuilder, HitWindows},
    suspicious::TooSuspicious,
};

use super::hit_object::HitObject;

mod attributes;
mod suspicious;

/// All beatmap data that is relevant for difficulty and performance
/// calculation.
///
/// Hit objects must be ordered by their start time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    // Difficulty
    pub ar: f32,
    pub cs: f32,
    pub hp: f32,
    pub od: f32,

    // HitObjects
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified beatmap
    /// attributes.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// Calculate the difficulty attributes of this [`Beatmap`] without mods.
    pub fn difficulty(&self) -> OsuDifficultyAttributes {
        Difficulty::new().calculate(self)
    }

    /// Create a performance calculator for this [`Beatmap`].
    pub fn performance(&self) -> OsuPerformance<'_> {
        OsuPerformance::new(self)
    }

    /// Check whether hit objects appear too suspicious for further
    /// calculation.
    ///
    /// Sometimes a [`Beatmap`] isn't created for gameplay but rather to test
    /// the limits of osu! itself. Difficulty- and/or performance calculation
    /// should likely be avoided on these maps due to potential performance
    /// issues.
    pub fn check_suspicion(&self) -> Result<(), TooSuspicious> {
        match TooSuspicious::new(self) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// The amount of circles, sliders, and spinners.
    pub(crate) fn count_objects(hit_objects: &[HitObject]) -> (u32, u32, u32) {
        hit_objects
            .iter()
            .fold((0, 0, 0), |(circles, sliders, spinners), h| {
                if h.is_circle() {
                    (circles + 1, sliders, spinners)
                } else if h.is_slider() {
                    (circles, sliders + 1, spinners)
                } else {
                    (circles, sliders, spinners + 1)
                }
            })
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            ar: 5.0,
            cs: 5.0,
            hp: 5.0,
            od: 5.0,
            hit_objects: Vec::new(),
        }
    }
}

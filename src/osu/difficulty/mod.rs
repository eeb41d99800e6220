use std::cmp;

use crate::{
    any::difficulty::Difficulty,
    model::{
        beatmap::{Beatmap, BeatmapAttributesBuilder},
        hit_object::HitObject,
        mods::ModFlags,
    },
    osu::performance::PERFORMANCE_BASE_MULTIPLIER,
};

use self::{
    object::OsuDifficultyObject,
    scaling_factor::ScalingFactor,
    skills::{
        flashlight::Flashlight, strain::difficulty_to_performance, OsuSkills, StrainDecaySkill,
    },
};

use super::attributes::OsuDifficultyAttributes;

pub mod object;
pub mod scaling_factor;
pub mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.0675;

const HD_FADE_IN_DURATION_MULTIPLIER: f64 = 0.4;
const HD_FADE_OUT_DURATION_MULTIPLIER: f64 = 0.3;

pub fn difficulty(difficulty: &Difficulty, map: &Beatmap) -> OsuDifficultyAttributes {
    let DifficultyValues {
        skills:
            OsuSkills {
                aim,
                speed,
                flashlight,
            },
        mut attrs,
    } = DifficultyValues::calculate(difficulty, map);

    if attrs.n_objects() < 2 {
        return attrs;
    }

    let aim_difficulty_value = aim.difficulty_value();
    let speed_difficulty_value = speed.difficulty_value();
    let flashlight_difficulty_value = flashlight.difficulty_value();

    DifficultyValues::eval(
        &mut attrs,
        ModFlags::new(difficulty.get_mods()),
        aim_difficulty_value,
        speed_difficulty_value,
        flashlight_difficulty_value,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        stars = attrs.stars,
        aim = attrs.aim,
        speed = attrs.speed,
        flashlight = attrs.flashlight,
        mods = attrs.mods,
        "calculated difficulty"
    );

    attrs
}

pub struct DifficultyValues {
    pub skills: OsuSkills,
    pub attrs: OsuDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let mods = ModFlags::new(difficulty.get_mods());
        let take = difficulty.get_passed_objects();
        let clock_rate = difficulty.get_clock_rate();

        let map_attrs = BeatmapAttributesBuilder::new()
            .map(map)
            .difficulty(difficulty)
            .build();

        let scaling_factor = ScalingFactor::new(map_attrs.cs);
        let mut skills = OsuSkills::new(mods, &scaling_factor, &map_attrs);

        let hit_objects = &map.hit_objects[..cmp::min(take, map.hit_objects.len())];

        if hit_objects.is_empty() {
            let attrs = OsuDifficultyAttributes {
                mods: difficulty.get_mods(),
                version: OsuDifficultyAttributes::VERSION,
                ..Default::default()
            };

            return Self { skills, attrs };
        }

        let (n_circles, n_sliders, n_spinners) = Beatmap::count_objects(hit_objects);

        let attrs = OsuDifficultyAttributes {
            ar: map_attrs.ar,
            od: map_attrs.od,
            hp: map_attrs.hp,
            n_circles,
            n_sliders,
            n_spinners,
            max_combo: hit_objects.iter().map(HitObject::combo).sum(),
            mods: difficulty.get_mods(),
            version: OsuDifficultyAttributes::VERSION,
            ..Default::default()
        };

        let diff_objects =
            Self::create_difficulty_objects(hit_objects, clock_rate, &scaling_factor);

        for curr in diff_objects.iter() {
            skills.process(curr, &diff_objects);
        }

        Self { skills, attrs }
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(
        attrs: &mut OsuDifficultyAttributes,
        mods: ModFlags,
        aim_difficulty_value: f64,
        speed_difficulty_value: f64,
        flashlight_difficulty_value: f64,
    ) {
        let mut aim_rating = aim_difficulty_value.sqrt() * DIFFICULTY_MULTIPLIER;
        let mut speed_rating = speed_difficulty_value.sqrt() * DIFFICULTY_MULTIPLIER;
        let mut flashlight_rating = flashlight_difficulty_value.sqrt() * DIFFICULTY_MULTIPLIER;

        if mods.touch_device {
            aim_rating = aim_rating.powf(0.8);
            flashlight_rating = flashlight_rating.powf(0.8);
        }

        if mods.relax {
            aim_rating *= 0.9;
            speed_rating = 0.0;
            flashlight_rating *= 0.7;
        } else if mods.autopilot {
            speed_rating *= 0.5;
            aim_rating = 0.0;
            flashlight_rating *= 0.4;
        }

        let base_aim_performance = difficulty_to_performance(aim_rating);
        let base_speed_performance = difficulty_to_performance(speed_rating);
        let base_flashlight_performance = Flashlight::difficulty_to_performance(flashlight_rating);

        let base_performance =
            (base_aim_performance.powf(1.1) + base_speed_performance.powf(1.1)).powf(1.0 / 1.1);

        let base_performance_with_flashlight = (base_aim_performance.powf(1.1)
            + base_speed_performance.powf(1.1)
            + base_flashlight_performance.powf(1.1))
        .powf(1.0 / 1.1);

        attrs.aim = aim_rating;
        attrs.speed = speed_rating;
        attrs.flashlight = flashlight_rating;
        attrs.stars = star_rating(base_performance);
        attrs.stars_with_flashlight = star_rating(base_performance_with_flashlight);
    }

    /// One difficulty object per hit object, except for the first one.
    pub fn create_difficulty_objects<'a>(
        hit_objects: &'a [HitObject],
        clock_rate: f64,
        scaling_factor: &ScalingFactor,
    ) -> Vec<OsuDifficultyObject<'a>> {
        let mut hit_objects_iter = hit_objects.iter();

        let Some(mut last) = hit_objects_iter.next() else {
            return Vec::new();
        };

        let mut last_last = None;

        hit_objects_iter
            .enumerate()
            .map(|(idx, h)| {
                let diff_object =
                    OsuDifficultyObject::new(h, last, last_last, clock_rate, idx, scaling_factor);

                last_last = Some(last);
                last = h;

                diff_object
            })
            .collect()
    }
}

fn star_rating(base_performance: f64) -> f64 {
    if base_performance > 0.00001 {
        PERFORMANCE_BASE_MULTIPLIER.cbrt()
            * 0.027
            * ((100_000.0 / 2.0_f64.powf(1.0 / 1.1) * base_performance).cbrt() + 4.0)
    } else {
        0.0
    }
}

use crate::{
    model::beatmap::{Beatmap, TooSuspicious},
    osu::{difficulty, OsuDifficultyAttributes, OsuStrains},
    util::mods::Mods,
};

pub mod object;
pub mod skills;

/// Difficulty calculator on osu!standard maps.
///
/// # Example
///
/// ```
/// use legacy_pp::{Beatmap, Difficulty};
///
/// let map = Beatmap::default();
///
/// let attrs = Difficulty::new()
///     .mods(8 + 1024) // HDFL
///     .ar(9.5, false)
///     .calculate(&map);
///
/// assert_eq!(attrs.stars, 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: u32,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
    ar: Option<ModsDependent>,
    cs: Option<ModsDependent>,
    hp: Option<ModsDependent>,
    od: Option<ModsDependent>,
}

/// A beatmap attribute that may or may not already account for mods.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    pub value: f32,
    pub with_mods: bool,
}

impl ModsDependent {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

impl Difficulty {
    const MIN_CLOCK_RATE: f64 = 0.01;
    const MAX_CLOCK_RATE: f64 = 100.0;

    /// Create a new difficulty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify mods through their bit values.
    ///
    /// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
    pub const fn mods(self, mods: u32) -> Self {
        Self { mods, ..self }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub const fn passed_objects(self, passed_objects: u32) -> Self {
        Self {
            passed_objects: Some(passed_objects),
            ..self
        }
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate.clamp(Self::MIN_CLOCK_RATE, Self::MAX_CLOCK_RATE)),
            ..self
        }
    }

    /// Override a beatmap's set AR.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: Some(ModsDependent {
                value: ar.clamp(-20.0, 20.0),
                with_mods,
            }),
            ..self
        }
    }

    /// Override a beatmap's set CS.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: Some(ModsDependent {
                value: cs.clamp(-20.0, 20.0),
                with_mods,
            }),
            ..self
        }
    }

    /// Override a beatmap's set HP.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn hp(self, hp: f32, with_mods: bool) -> Self {
        Self {
            hp: Some(ModsDependent {
                value: hp.clamp(-20.0, 20.0),
                with_mods,
            }),
            ..self
        }
    }

    /// Override a beatmap's set OD.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn od(self, od: f32, with_mods: bool) -> Self {
        Self {
            od: Some(ModsDependent {
                value: od.clamp(-20.0, 20.0),
                with_mods,
            }),
            ..self
        }
    }

    /// Perform the difficulty calculation.
    pub fn calculate(&self, map: &Beatmap) -> OsuDifficultyAttributes {
        difficulty::difficulty(self, map)
    }

    /// Perform the difficulty calculation but first check if the map is
    /// suspicious.
    ///
    /// See [`Beatmap::check_suspicion`].
    pub fn checked_calculate(
        &self,
        map: &Beatmap,
    ) -> Result<OsuDifficultyAttributes, TooSuspicious> {
        if let Err(err) = map.check_suspicion() {
            #[cfg(feature = "tracing")]
            tracing::warn!(reason = ?err, n_objects = map.hit_objects.len(), "skipping suspicious map");

            return Err(err);
        }

        Ok(self.calculate(map))
    }

    /// Perform the difficulty calculation but instead of evaluating the skill
    /// strains, return them as is.
    ///
    /// Suitable to plot the difficulty of a map over time.
    pub fn strains(&self, map: &Beatmap) -> OsuStrains {
        OsuStrains::new(self, map)
    }

    pub(crate) const fn get_mods(&self) -> u32 {
        self.mods
    }

    pub(crate) fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    pub(crate) fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    pub(crate) const fn get_ar(&self) -> Option<ModsDependent> {
        self.ar
    }

    pub(crate) const fn get_cs(&self) -> Option<ModsDependent> {
        self.cs
    }

    pub(crate) const fn get_hp(&self) -> Option<ModsDependent> {
        self.hp
    }

    pub(crate) const fn get_od(&self) -> Option<ModsDependent> {
        self.od
    }
}

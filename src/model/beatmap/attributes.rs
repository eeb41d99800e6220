use crate::{any::difficulty::ModsDependent, util::mods::Mods, Difficulty};

use super::Beatmap;

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate
    pub hp: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// The hit windows for approach rate and overall difficulty.
    pub hit_windows: HitWindows,
}

/// AR and OD hit windows
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Hit window for approach rate i.e. `TimePreempt` in milliseconds.
    pub ar: f64,
    /// Hit window for overall difficulty i.e. time to hit a 300 ("Great") in milliseconds.
    pub od: f64,
}

/// A builder for [`BeatmapAttributes`] and [`HitWindows`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    ar: ModsDependent,
    od: ModsDependent,
    cs: ModsDependent,
    hp: ModsDependent,
    mods: u32,
    clock_rate: Option<f64>,
}

impl BeatmapAttributesBuilder {
    const PREEMPT_MIN: f64 = 1800.0;
    const PREEMPT_MID: f64 = 1200.0;
    const PREEMPT_MAX: f64 = 450.0;

    const GREAT_MIN: f64 = 80.0;
    const GREAT_MID: f64 = 50.0;
    const GREAT_MAX: f64 = 20.0;

    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// All attributes are set to `5.0`.
    pub const fn new() -> Self {
        Self {
            ar: ModsDependent::new(5.0),
            od: ModsDependent::new(5.0),
            cs: ModsDependent::new(5.0),
            hp: ModsDependent::new(5.0),
            mods: 0,
            clock_rate: None,
        }
    }

    /// Use the given [`Beatmap`]'s attributes.
    pub const fn map(self, map: &Beatmap) -> Self {
        Self {
            ar: ModsDependent::new(map.ar),
            od: ModsDependent::new(map.od),
            cs: ModsDependent::new(map.cs),
            hp: ModsDependent::new(map.hp),
            mods: 0,
            clock_rate: None,
        }
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: ModsDependent {
                value: ar,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the overall difficulty.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn od(self, od: f32, with_mods: bool) -> Self {
        Self {
            od: ModsDependent {
                value: od,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the circle size.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: ModsDependent {
                value: cs,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the drain rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn hp(self, hp: f32, with_mods: bool) -> Self {
        Self {
            hp: ModsDependent {
                value: hp,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the mods.
    pub const fn mods(self, mods: u32) -> Self {
        Self { mods, ..self }
    }

    /// Specify a custom clock rate.
    pub const fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Specify all settings through [`Difficulty`].
    pub fn difficulty(self, difficulty: &Difficulty) -> Self {
        Self {
            ar: difficulty.get_ar().unwrap_or(self.ar),
            od: difficulty.get_od().unwrap_or(self.od),
            cs: difficulty.get_cs().unwrap_or(self.cs),
            hp: difficulty.get_hp().unwrap_or(self.hp),
            mods: difficulty.get_mods(),
            clock_rate: Some(difficulty.get_clock_rate()),
        }
    }

    /// Calculate the AR and OD hit windows.
    pub fn hit_windows(&self) -> HitWindows {
        let mods = self.mods;

        let clock_rate = self.clock_rate.unwrap_or_else(|| mods.clock_rate());
        let ar_clock_rate = if self.ar.with_mods { 1.0 } else { clock_rate };
        let od_clock_rate = if self.od.with_mods { 1.0 } else { clock_rate };

        let mod_mult = |val: f32| {
            if mods.hr() {
                (val * 1.4).min(10.0)
            } else if mods.ez() {
                val * 0.5
            } else {
                val
            }
        };

        let raw_ar = if self.ar.with_mods {
            self.ar.value
        } else {
            mod_mult(self.ar.value)
        };

        let preempt = difficulty_range(
            f64::from(raw_ar),
            Self::PREEMPT_MIN,
            Self::PREEMPT_MID,
            Self::PREEMPT_MAX,
        ) / ar_clock_rate;

        let raw_od = if self.od.with_mods {
            self.od.value
        } else {
            mod_mult(self.od.value)
        };

        let hit_window = difficulty_range(
            f64::from(raw_od),
            Self::GREAT_MIN,
            Self::GREAT_MID,
            Self::GREAT_MAX,
        ) / od_clock_rate;

        HitWindows {
            ar: preempt,
            od: hit_window,
        }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let mods = self.mods;
        let clock_rate = self.clock_rate.unwrap_or_else(|| mods.clock_rate());

        // HP
        let mut hp = self.hp.value;

        if !self.hp.with_mods {
            hp *= mods.od_ar_hp_multiplier() as f32;
        }

        hp = hp.min(10.0);

        // CS
        let mut cs = self.cs.value;

        if !self.cs.with_mods {
            if mods.hr() {
                cs = (cs * 1.3).min(10.0);
            } else if mods.ez() {
                cs *= 0.5;
            }
        }

        let hit_windows = self.hit_windows();
        let HitWindows { ar, od } = hit_windows;

        // AR
        let ar = if ar > Self::PREEMPT_MID {
            (Self::PREEMPT_MIN - ar) / 120.0
        } else {
            (Self::PREEMPT_MID - ar) / 150.0 + 5.0
        };

        // OD
        let od = (Self::GREAT_MIN - od) / 6.0;

        BeatmapAttributes {
            ar,
            od,
            cs: f64::from(cs),
            hp: f64::from(hp),
            clock_rate,
            hit_windows,
        }
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        Self::new().map(map)
    }
}

fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    #[test]
    fn consider_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(8.5, false)
            .mods(64)
            .build();

        let expected = 10.0;

        assert!(attrs.ar.eq(expected), "{} != {expected}", attrs.ar);
    }

    #[test]
    fn skip_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(8.5, true)
            .mods(64)
            .build();

        let expected = 8.5;

        assert!(attrs.ar.eq(expected), "{} != {expected}", attrs.ar);
    }

    #[test]
    fn hardrock_caps_at_ten() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(9.0, false)
            .od(9.0, false)
            .cs(4.0, false)
            .hp(8.0, false)
            .mods(16)
            .build();

        assert!(attrs.ar.almost_eq(10.0, 1e-9), "{}", attrs.ar);
        assert!(attrs.od.almost_eq(10.0, 1e-9), "{}", attrs.od);
        assert!(attrs.cs.almost_eq(5.2, 1e-6), "{}", attrs.cs);
        assert!(attrs.hp.eq(10.0), "{}", attrs.hp);
    }

    #[test]
    fn halftime_lowers_od() {
        let attrs = BeatmapAttributesBuilder::new().od(8.0, false).mods(256).build();

        // 80 - 6 * 8 = 32ms great window, stretched to 42.67ms
        let expected = (80.0 - 32.0 / 0.75) / 6.0;

        assert!(attrs.od.almost_eq(expected, 1e-9), "{} != {expected}", attrs.od);
        assert!(attrs.clock_rate.eq(0.75));
    }

    #[test]
    fn custom_clock_rate_overrides_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(9.0, false)
            .mods(64)
            .clock_rate(1.0)
            .build();

        assert!(attrs.ar.almost_eq(9.0, 1e-9), "{}", attrs.ar);
        assert!(attrs.hit_windows.ar.almost_eq(600.0, 1e-9));
    }
}

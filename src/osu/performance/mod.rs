use std::cmp;

use crate::{
    any::Difficulty,
    model::{beatmap::Beatmap, mods::ModFlags},
    util::map_or_attrs::MapOrAttrs,
};

use super::{
    attributes::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    score_state::OsuScoreState,
};

use self::calculator::OsuPerformanceCalculator;

pub use self::calculator::PERFORMANCE_BASE_MULTIPLIER;

mod calculator;

/// Abstract type to provide flexibility when passing difficulty attributes to
/// a performance calculation.
pub trait OsuAttributeProvider {
    /// Provide the actual difficulty attributes.
    fn attributes(self) -> OsuDifficultyAttributes;
}

impl OsuAttributeProvider for OsuDifficultyAttributes {
    fn attributes(self) -> OsuDifficultyAttributes {
        self
    }
}

impl OsuAttributeProvider for OsuPerformanceAttributes {
    fn attributes(self) -> OsuDifficultyAttributes {
        self.difficulty
    }
}

/// Performance calculator on osu!standard maps.
///
/// # Example
///
/// ```
/// use legacy_pp::{osu::OsuPerformance, Beatmap};
///
/// let map = Beatmap::default();
///
/// let attrs = OsuPerformance::new(&map)
///     .mods(8 + 64) // HDDT
///     .combo(1234)
///     .misses(1)
///     .accuracy(98.5)
///     .calculate();
///
/// assert_eq!(attrs.pp, 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct OsuPerformance<'map> {
    map_or_attrs: MapOrAttrs<'map>,
    mods: Option<u32>,
    acc: Option<f64>,
    combo: Option<u32>,

    n300: Option<u32>,
    n100: Option<u32>,
    n50: Option<u32>,
    misses: Option<u32>,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
}

impl<'map> OsuPerformance<'map> {
    /// Create a new performance calculator for osu!standard maps.
    ///
    /// The argument `map_or_attrs` must be either
    /// - previously calculated attributes ([`OsuDifficultyAttributes`]
    ///   or [`OsuPerformanceAttributes`])
    /// - a [`Beatmap`] by reference
    ///
    /// If a map is given, difficulty attributes will need to be calculated
    /// internally which is a costly operation. Hence, passing attributes
    /// should be prefered.
    pub fn new(map_or_attrs: impl Into<MapOrAttrs<'map>>) -> Self {
        Self {
            map_or_attrs: map_or_attrs.into(),
            mods: None,
            acc: None,
            combo: None,

            n300: None,
            n100: None,
            n50: None,
            misses: None,
            passed_objects: None,
            clock_rate: None,
        }
    }

    /// Provide the result of a previous difficulty or performance calculation.
    /// If you already calculated the attributes for the current map-mod combination,
    /// be sure to put them in here so that they don't have to be recalculated.
    pub fn attributes(mut self, attributes: impl OsuAttributeProvider) -> Self {
        self.map_or_attrs = MapOrAttrs::Attrs(attributes.attributes());

        self
    }

    /// Specify mods through their bit values.
    ///
    /// If unspecified, the mods of the difficulty attributes are used.
    ///
    /// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
    pub const fn mods(mut self, mods: u32) -> Self {
        self.mods = Some(mods);

        self
    }

    /// Specify the max combo of the play.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the amount of 300s of a play.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 100s of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    pub const fn n50(mut self, n50: u32) -> Self {
        self.n50 = Some(n50);

        self
    }

    /// Specify the amount of misses of a play.
    pub const fn misses(mut self, misses: u32) -> Self {
        self.misses = Some(misses);

        self
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    pub const fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = Some(clock_rate);

        self
    }

    /// Provide parameters through an [`OsuScoreState`].
    pub const fn state(mut self, state: OsuScoreState) -> Self {
        let OsuScoreState {
            max_combo,
            n300,
            n100,
            n50,
            misses,
        } = state;

        self.combo = Some(max_combo);
        self.n300 = Some(n300);
        self.n100 = Some(n100);
        self.n50 = Some(n50);
        self.misses = Some(misses);

        self
    }

    /// Specify the accuracy of a play between `0.0` and `100.0`.
    /// This will be used to generate matching hitresults.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc.clamp(0.0, 100.0) / 100.0);

        self
    }

    /// Create the [`OsuScoreState`] that will be used for performance calculation.
    ///
    /// Hitresults that were not specified are generated to match the
    /// accuracy, if given, or to fill up the remaining objects otherwise.
    #[allow(clippy::too_many_lines)]
    pub fn generate_state(&mut self) -> OsuScoreState {
        let attrs = self.attrs_or_calculate();

        let max_combo = attrs.max_combo;
        let n_objects = self
            .passed_objects
            .map_or(attrs.n_objects(), |n| cmp::min(n, attrs.n_objects()));

        let misses = self.misses.map_or(0, |n| cmp::min(n, n_objects));
        let n_remaining = n_objects - misses;

        let mut n300 = self.n300.map_or(0, |n| cmp::min(n, n_remaining));
        let mut n100 = self.n100.map_or(0, |n| cmp::min(n, n_remaining - n300));
        let mut n50 = self.n50.map_or(0, |n| cmp::min(n, n_remaining - n300 - n100));

        if let Some(acc) = self.acc {
            let target_total = acc * 6.0 * f64::from(n_objects);

            match (self.n300, self.n100, self.n50) {
                (Some(_), Some(_), Some(_)) => {
                    n300 += n_objects.saturating_sub(n300 + n100 + n50 + misses);
                }
                (Some(_), Some(_), None) => n50 = n_objects.saturating_sub(n300 + n100 + misses),
                (Some(_), None, Some(_)) => n100 = n_objects.saturating_sub(n300 + n50 + misses),
                (None, Some(_), Some(_)) => n300 = n_objects.saturating_sub(n100 + n50 + misses),
                (Some(_), None, None) => {
                    let mut best_dist = f64::MAX;

                    let n_remaining = n_remaining - n300;

                    let raw_n100 = target_total - f64::from(n_remaining + 6 * n300);
                    let min_n100 = cmp::min(n_remaining, raw_n100.floor() as u32);
                    let max_n100 = cmp::min(n_remaining, raw_n100.ceil() as u32);

                    for new100 in min_n100..=max_n100 {
                        let new50 = n_remaining - new100;
                        let dist = (acc - accuracy(n300, new100, new50, misses)).abs();

                        if dist < best_dist {
                            best_dist = dist;
                            n100 = new100;
                            n50 = new50;
                        }
                    }
                }
                (None, Some(_), None) => {
                    let mut best_dist = f64::MAX;

                    let n_remaining = n_remaining - n100;

                    let raw_n300 = (target_total - f64::from(n_remaining + 2 * n100)) / 5.0;
                    let min_n300 = cmp::min(n_remaining, raw_n300.floor() as u32);
                    let max_n300 = cmp::min(n_remaining, raw_n300.ceil() as u32);

                    for new300 in min_n300..=max_n300 {
                        let new50 = n_remaining - new300;
                        let curr_dist = (acc - accuracy(new300, n100, new50, misses)).abs();

                        if curr_dist < best_dist {
                            best_dist = curr_dist;
                            n300 = new300;
                            n50 = new50;
                        }
                    }
                }
                (None, None, Some(_)) => {
                    let mut best_dist = f64::MAX;

                    let n_remaining = n_remaining - n50;

                    let raw_n300 = (target_total + f64::from(2 * misses + n50)
                        - 2.0 * f64::from(n_objects))
                        / 4.0;

                    let min_n300 = cmp::min(n_remaining, raw_n300.floor() as u32);
                    let max_n300 = cmp::min(n_remaining, raw_n300.ceil() as u32);

                    for new300 in min_n300..=max_n300 {
                        let new100 = n_remaining - new300;
                        let curr_dist = (acc - accuracy(new300, new100, n50, misses)).abs();

                        if curr_dist < best_dist {
                            best_dist = curr_dist;
                            n300 = new300;
                            n100 = new100;
                        }
                    }
                }
                (None, None, None) => {
                    let mut best_dist = f64::MAX;

                    let raw_n300 = (target_total - f64::from(n_remaining)) / 5.0;
                    let min_n300 = cmp::min(n_remaining, raw_n300.floor() as u32);
                    let max_n300 = cmp::min(n_remaining, raw_n300.ceil() as u32);

                    for new300 in min_n300..=max_n300 {
                        let raw_n100 = target_total - f64::from(n_remaining + 5 * new300);
                        let min_n100 = cmp::min(raw_n100.floor() as u32, n_remaining - new300);
                        let max_n100 = cmp::min(raw_n100.ceil() as u32, n_remaining - new300);

                        for new100 in min_n100..=max_n100 {
                            let new50 = n_remaining - new300 - new100;
                            let curr_dist = (acc - accuracy(new300, new100, new50, misses)).abs();

                            if curr_dist < best_dist {
                                best_dist = curr_dist;
                                n300 = new300;
                                n100 = new100;
                                n50 = new50;
                            }
                        }
                    }

                    // Shift n50 to n100 by sacrificing n300
                    let n = cmp::min(n300, n50 / 4);
                    n300 -= n;
                    n100 += 5 * n;
                    n50 -= 4 * n;
                }
            }
        } else {
            let remaining = n_objects.saturating_sub(n300 + n100 + n50 + misses);

            match (self.n300, self.n100, self.n50) {
                (None, ..) => n300 = remaining,
                (_, None, _) => n100 = remaining,
                (.., None) => n50 = remaining,
                _ => n300 += remaining,
            }
        }

        let max_possible_combo = max_combo.saturating_sub(misses);

        let max_combo = self
            .combo
            .map_or(max_possible_combo, |combo| cmp::min(combo, max_possible_combo));

        OsuScoreState {
            max_combo,
            n300,
            n100,
            n50,
            misses,
        }
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(mut self) -> OsuPerformanceAttributes {
        let state = self.generate_state();
        let attrs = self.attrs_or_calculate();
        let mods = self.mods.unwrap_or(attrs.mods);

        let perf_attrs = OsuPerformanceCalculator::new(attrs, ModFlags::new(mods), state).calculate();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            pp = perf_attrs.pp,
            aim = perf_attrs.pp_aim,
            speed = perf_attrs.pp_speed,
            acc = perf_attrs.pp_acc,
            mods,
            "calculated performance"
        );

        perf_attrs
    }

    /// Return the stored attributes or calculate them, store them, and
    /// return them.
    fn attrs_or_calculate(&mut self) -> OsuDifficultyAttributes {
        match self.map_or_attrs {
            MapOrAttrs::Attrs(ref attrs) => attrs.clone(),
            MapOrAttrs::Map(map) => {
                let attrs = self.generate_attributes(map);
                self.map_or_attrs = MapOrAttrs::Attrs(attrs.clone());

                attrs
            }
        }
    }

    fn generate_attributes(&self, map: &Beatmap) -> OsuDifficultyAttributes {
        let mut calculator = Difficulty::new().mods(self.mods.unwrap_or(0));

        if let Some(passed_objects) = self.passed_objects {
            calculator = calculator.passed_objects(passed_objects);
        }

        if let Some(clock_rate) = self.clock_rate {
            calculator = calculator.clock_rate(clock_rate);
        }

        calculator.calculate(map)
    }
}

impl<'map> From<&'map Beatmap> for OsuPerformance<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::new(map)
    }
}

impl From<OsuDifficultyAttributes> for OsuPerformance<'_> {
    fn from(attrs: OsuDifficultyAttributes) -> Self {
        Self::new(attrs)
    }
}

impl From<OsuPerformanceAttributes> for OsuPerformance<'_> {
    fn from(attrs: OsuPerformanceAttributes) -> Self {
        Self::new(attrs.difficulty)
    }
}

fn accuracy(n300: u32, n100: u32, n50: u32, misses: u32) -> f64 {
    if n300 + n100 + n50 + misses == 0 {
        return 0.0;
    }

    let numerator = 6 * n300 + 2 * n100 + n50;
    let denominator = 6 * (n300 + n100 + n50 + misses);

    f64::from(numerator) / f64::from(denominator)
}

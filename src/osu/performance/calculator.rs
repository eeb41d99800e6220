use crate::{
    model::mods::ModFlags,
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes, OsuScoreState},
};

// * This is being adjusted to keep the final pp value scaled around what it used to be when changing things.
pub const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.12;

// Constants that are single-precision in osu!'s implementation. Widening them
// keeps their exact rounding.
const RATING_DIVISOR: f64 = 0.0675_f32 as f64;
const MISS_PENALTY_BASE: f64 = 0.97_f32 as f64;
const COMBO_EXPONENT: f64 = 0.8_f32 as f64;
const HIGH_AR_THRESHOLD: f64 = 10.33_f32 as f64;
const HIGH_AR_BONUS: f64 = 0.45_f32 as f64;
const LOW_AR_BONUS_HIDDEN: f64 = 0.02_f32 as f64;
const LOW_AR_BONUS: f64 = 0.01_f32 as f64;
const HIDDEN_AIM_BONUS: f64 = 1.18_f32 as f64;
const FLASHLIGHT_AIM_BONUS: f64 = 1.45_f32 as f64;
const OD_SCALING_BASE: f64 = 0.98_f32 as f64;
const ACC_MOD_BONUS: f64 = 1.02_f32 as f64;
const NO_FAIL_MULTIPLIER: f64 = 0.90_f32 as f64;
const SPUN_OUT_MULTIPLIER: f64 = 0.95_f32 as f64;

pub(super) struct OsuPerformanceCalculator {
    attrs: OsuDifficultyAttributes,
    mods: ModFlags,
    acc: f64,
    state: OsuScoreState,
}

impl OsuPerformanceCalculator {
    pub fn new(attrs: OsuDifficultyAttributes, mods: ModFlags, state: OsuScoreState) -> Self {
        Self {
            attrs,
            mods,
            acc: state.accuracy(),
            state,
        }
    }

    pub fn calculate(self) -> OsuPerformanceAttributes {
        if self.state.total_hits() == 0 {
            return OsuPerformanceAttributes {
                difficulty: self.attrs,
                ..Default::default()
            };
        }

        let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

        if self.mods.no_fail {
            multiplier *= NO_FAIL_MULTIPLIER;
        }

        if self.mods.spun_out {
            multiplier *= SPUN_OUT_MULTIPLIER;
        }

        let aim_value = self.compute_aim_value();
        let speed_value = self.compute_speed_value();
        let acc_value = self.compute_accuracy_value();

        let pp = (aim_value.powf(1.1) + speed_value.powf(1.1) + acc_value.powf(1.1))
            .powf(1.0 / 1.1)
            * multiplier;

        OsuPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_acc: acc_value,
            pp_aim: aim_value,
            pp_speed: speed_value,
        }
    }

    fn compute_aim_value(&self) -> f64 {
        let mut aim_value = base_value(self.attrs.aim);

        // * Longer maps are worth more
        aim_value *= self.len_bonus();

        // * Penalize misses exponentially. This mainly fixes tag4 maps and the likes until a per-hitobject solution is available
        aim_value *= self.miss_penalty();
        aim_value *= self.combo_scaling_factor();

        let mut ar_factor = 1.0;

        if self.attrs.ar > HIGH_AR_THRESHOLD {
            ar_factor += HIGH_AR_BONUS * (self.attrs.ar - HIGH_AR_THRESHOLD);
        } else if self.attrs.ar < 8.0 {
            // * HD is worth more with lower ar!
            let bonus = if self.mods.hidden {
                LOW_AR_BONUS_HIDDEN
            } else {
                LOW_AR_BONUS
            };

            ar_factor += bonus * (8.0 - self.attrs.ar);
        }

        aim_value *= ar_factor;

        if self.mods.hidden {
            aim_value *= HIDDEN_AIM_BONUS;
        }

        if self.mods.flashlight {
            aim_value *= FLASHLIGHT_AIM_BONUS;
        }

        // * Scale the aim value with accuracy _slightly_
        aim_value *= 0.5 + self.acc / 2.0;
        // * It is important to also consider accuracy difficulty when doing that
        aim_value *= OD_SCALING_BASE + self.attrs.od.powi(2) / 1500.0;

        aim_value
    }

    fn compute_speed_value(&self) -> f64 {
        let mut speed_value = base_value(self.attrs.speed);

        speed_value *= self.len_bonus();
        speed_value *= self.miss_penalty();
        speed_value *= self.combo_scaling_factor();

        speed_value *= 0.5 + self.acc / 2.0;
        speed_value *= OD_SCALING_BASE + self.attrs.od.powi(2) / 2500.0;

        speed_value
    }

    fn compute_accuracy_value(&self) -> f64 {
        if self.mods.relax {
            return 0.0;
        }

        // * This percentage only considers HitCircles of any value - in this part of the calculation we focus on hitting the timing hit window.
        let n_circles = i64::from(self.attrs.n_circles);

        let better_acc_percentage = if n_circles > 0 {
            let total_hits = i64::from(self.state.total_hits());

            let numerator = (i64::from(self.state.n300) - (total_hits - n_circles)) * 6
                + i64::from(self.state.n100) * 2
                + i64::from(self.state.n50);

            // * It is possible to reach a negative accuracy with this formula. Cap it at zero - zero points.
            (numerator as f64 / (n_circles * 6) as f64).max(0.0)
        } else {
            0.0
        };

        // * Lots of arbitrary values from testing.
        // * Considering to use derivation from perfect accuracy in a probabilistic manner - assume normal distribution.
        let mut acc_value =
            1.52163_f64.powf(self.attrs.od) * better_acc_percentage.powi(24) * 2.83;

        // * Bonus for many hitcircles - it's harder to keep good accuracy up for longer.
        acc_value *= f64::min(1.15, (n_circles as f64 / 1000.0).powf(0.3));

        if self.mods.hidden {
            acc_value *= ACC_MOD_BONUS;
        }

        if self.mods.flashlight {
            acc_value *= ACC_MOD_BONUS;
        }

        acc_value
    }

    fn len_bonus(&self) -> f64 {
        let total_hits = self.state.total_hits();
        let ratio = total_hits as f32 / 2000.0;

        let bonus = f64::from(0.95 + 0.4 * ratio.min(1.0));

        if total_hits > 2000 {
            bonus + f64::from(ratio).log10() * 0.5
        } else {
            bonus
        }
    }

    fn miss_penalty(&self) -> f64 {
        MISS_PENALTY_BASE.powf(f64::from(self.state.misses))
    }

    fn combo_scaling_factor(&self) -> f64 {
        if self.attrs.max_combo == 0 {
            1.0
        } else {
            (f64::from(self.state.max_combo).powf(COMBO_EXPONENT)
                / f64::from(self.attrs.max_combo).powf(COMBO_EXPONENT))
            .min(1.0)
        }
    }
}

fn base_value(rating: f64) -> f64 {
    (5.0 * (rating / RATING_DIVISOR).max(1.0) - 4.0).powf(3.0) / 100_000.0
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    fn attrs() -> OsuDifficultyAttributes {
        OsuDifficultyAttributes {
            aim: 2.5,
            speed: 2.2,
            ar: 9.0,
            od: 8.0,
            n_circles: 400,
            n_sliders: 100,
            max_combo: 700,
            ..Default::default()
        }
    }

    fn state(misses: u32, max_combo: u32) -> OsuScoreState {
        OsuScoreState {
            max_combo,
            n300: 480 - misses,
            n100: 15,
            n50: 5,
            misses,
        }
    }

    fn calculate(mods: u32, state: OsuScoreState) -> OsuPerformanceAttributes {
        OsuPerformanceCalculator::new(attrs(), ModFlags::new(mods), state).calculate()
    }

    #[test]
    fn float_constants_keep_their_rounding() {
        assert!(!MISS_PENALTY_BASE.eq(0.97));
        assert!(MISS_PENALTY_BASE.almost_eq(0.97, 1e-7));
        assert!(PERFORMANCE_BASE_MULTIPLIER.eq(1.12));
    }

    #[test]
    fn empty_score_is_worthless() {
        let attrs = calculate(0, OsuScoreState::default());

        assert!(attrs.pp.eq(0.0));
    }

    #[test]
    fn misses_lower_pp() {
        let full = calculate(0, state(0, 700));
        let missed = calculate(0, state(3, 700));

        assert!(missed.pp < full.pp, "{} >= {}", missed.pp, full.pp);

        let expected = full.pp_speed * MISS_PENALTY_BASE.powi(3);
        let speed_ratio = missed.pp_speed / full.pp_speed;

        // fewer 300s also lower accuracy
        assert!(missed.pp_speed < expected);
        assert!(speed_ratio > 0.9, "{speed_ratio}");
    }

    #[test]
    fn combo_scaling_is_capped() {
        let fc = calculate(0, state(0, 700));
        let overcombo = calculate(0, state(0, 10_000));

        assert!(fc.pp.eq(overcombo.pp));

        let broken = calculate(0, state(0, 350));
        assert!(broken.pp < fc.pp);
    }

    #[test]
    fn relax_drops_accuracy() {
        let attrs = calculate(128, state(0, 700));

        assert!(attrs.pp_acc.eq(0.0));
    }

    #[test]
    fn mod_multipliers() {
        let nomod = calculate(0, state(0, 700));
        let nf = calculate(1, state(0, 700));
        let so = calculate(4096, state(0, 700));

        assert!(nf.pp.almost_eq(nomod.pp * NO_FAIL_MULTIPLIER, 1e-12));
        assert!(so.pp.almost_eq(nomod.pp * SPUN_OUT_MULTIPLIER, 1e-12));
    }

    #[test]
    fn hidden_buffs_aim_and_acc() {
        let nomod = calculate(0, state(0, 700));
        let hd = calculate(8, state(0, 700));

        assert!(hd.pp_aim.almost_eq(nomod.pp_aim * HIDDEN_AIM_BONUS, 1e-12));
        assert!(hd.pp_acc.almost_eq(nomod.pp_acc * ACC_MOD_BONUS, 1e-12));
        assert!(hd.pp_speed.eq(nomod.pp_speed));
    }

    #[test]
    fn no_circles_no_accuracy_value() {
        let attrs = OsuDifficultyAttributes {
            n_circles: 0,
            ..attrs()
        };

        let perf = OsuPerformanceCalculator::new(attrs, ModFlags::default(), state(0, 700))
            .calculate();

        assert!(perf.pp_acc.eq(0.0));
        assert!(perf.pp > 0.0);
    }

    #[test]
    fn length_bonus_beyond_2000() {
        let state = OsuScoreState {
            max_combo: 3000,
            n300: 3000,
            n100: 0,
            n50: 0,
            misses: 0,
        };

        let calc = OsuPerformanceCalculator::new(attrs(), ModFlags::default(), state);

        let expected = 1.35 + (1.5_f64).log10() * 0.5;
        assert!(calc.len_bonus().almost_eq(expected, 1e-6), "{}", calc.len_bonus());
    }
}

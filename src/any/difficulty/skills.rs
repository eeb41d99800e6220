use super::object::{HasStartTime, IDifficultyObject};

/// Section bookkeeping shared by all strain skills.
///
/// The strain itself lives in here too; every skill starts at a strain of
/// `1.0` and decays from there.
#[derive(Clone, Debug, PartialEq)]
pub struct StrainSkill {
    pub curr_strain: f64,
    pub curr_section_peak: f64,
    pub curr_section_end: f64,
    pub strain_peaks: Vec<f64>,
}

impl Default for StrainSkill {
    fn default() -> Self {
        Self {
            curr_strain: 1.0,
            curr_section_peak: 0.0,
            curr_section_end: 0.0,
            strain_peaks: Vec::with_capacity(256),
        }
    }
}

impl StrainSkill {
    pub const DECAY_WEIGHT: f64 = 0.9;
    pub const SECTION_LEN: f64 = 400.0;

    pub fn save_curr_peak(&mut self) {
        self.strain_peaks.push(self.curr_section_peak);
    }

    pub fn start_new_section_from(&mut self, initial_strain: f64) {
        // * The maximum strain of the new section is not zero by default
        // * This means we need to capture the strain level at the beginning of the new section, and use that as the initial peak level.
        self.curr_section_peak = initial_strain;
    }

    /// Close all sections that end before `curr` starts and open the ones
    /// in between with the decayed strain.
    pub fn advance_sections<O>(&mut self, curr: &O, objects: &[O], strain_decay_base: f64)
    where
        O: IDifficultyObject + HasStartTime,
    {
        let start_time = curr.start_time();

        if curr.idx() == 0 {
            self.curr_section_end = (start_time / Self::SECTION_LEN).ceil() * Self::SECTION_LEN;
        }

        let prev_start_time = curr
            .previous(0, objects)
            .map_or(start_time, HasStartTime::start_time);

        while start_time > self.curr_section_end {
            self.save_curr_peak();
            let initial_strain = self.curr_strain
                * strain_decay(self.curr_section_end - prev_start_time, strain_decay_base);
            self.start_new_section_from(initial_strain);
            self.curr_section_end += Self::SECTION_LEN;
        }
    }

    /// Apply the decay since the previous object and add the new value.
    pub fn update_strain(&mut self, delta_time: f64, strain_decay_base: f64, value: f64) -> f64 {
        self.curr_strain *= strain_decay(delta_time, strain_decay_base);
        self.curr_strain += value;
        self.curr_section_peak = self.curr_strain.max(self.curr_section_peak);

        self.curr_strain
    }

    /// All saved section peaks plus the peak of the current section.
    pub fn get_curr_strain_peaks(self) -> Vec<f64> {
        let mut strain_peaks = self.strain_peaks;
        strain_peaks.push(self.curr_section_peak);

        strain_peaks
    }

    pub fn difficulty_value(self, decay_weight: f64) -> f64 {
        difficulty_value(self.get_curr_strain_peaks(), decay_weight)
    }
}

pub fn difficulty_value(current_strain_peaks: Vec<f64>, decay_weight: f64) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort (e.g. /b/2351871).
    // * These sections will not contribute to the difficulty.
    let mut peaks = current_strain_peaks;
    peaks.retain(|&peak| peak > 0.0);
    peaks.sort_unstable_by(|a, b| b.total_cmp(a));

    // * Difficulty is the weighted sum of the highest strains from every section.
    // * We're sorting from highest to lowest strain.
    for strain in peaks {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::util::float_ext::FloatExt;

    use super::*;

    struct Obj {
        idx: usize,
        start_time: f64,
    }

    impl IDifficultyObject for Obj {
        fn idx(&self) -> usize {
            self.idx
        }
    }

    impl HasStartTime for Obj {
        fn start_time(&self) -> f64 {
            self.start_time
        }
    }

    #[test]
    fn weighted_sum_skips_zeros() {
        let value = difficulty_value(vec![0.0, 1.0, 0.0, 2.0, 4.0], 0.9);
        let expected = 4.0 + 2.0 * 0.9 + 1.0 * 0.81;

        assert!(value.almost_eq(expected, 1e-12), "{value} != {expected}");
    }

    #[test]
    fn empty_peaks() {
        assert!(difficulty_value(Vec::new(), 0.9).eq(0.0));
    }

    #[test]
    fn decay() {
        assert!(strain_decay(0.0, 0.15).eq(1.0));
        assert!(strain_decay(1000.0, 0.3).almost_eq(0.3, 1e-12));
        assert!(strain_decay(500.0, 0.15) < 1.0);
    }

    #[test]
    fn first_section_end_is_rounded_up() {
        let objects = [Obj {
            idx: 0,
            start_time: 1030.0,
        }];

        let mut skill = StrainSkill::default();
        skill.advance_sections(&objects[0], &objects, 0.15);

        assert!(skill.curr_section_end.eq(1200.0));
        assert!(skill.strain_peaks.is_empty());
    }

    #[test]
    fn gaps_open_decayed_sections() {
        let objects = [
            Obj {
                idx: 0,
                start_time: 100.0,
            },
            Obj {
                idx: 1,
                start_time: 1300.0,
            },
        ];

        let mut skill = StrainSkill::default();

        skill.advance_sections(&objects[0], &objects, 0.15);
        skill.update_strain(100.0, 0.15, 2.0);

        skill.advance_sections(&objects[1], &objects, 0.15);

        // sections ending at 400, 800, and 1200 were closed
        assert_eq!(skill.strain_peaks.len(), 3);
        assert!(skill.curr_section_end.eq(1600.0));

        let expected = skill.curr_strain * strain_decay(1200.0 - 100.0, 0.15);
        assert!(skill.curr_section_peak.almost_eq(expected, 1e-12));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn decay_strictly_shrinks_with_time(
            base in 0.01..0.99,
            short in 0.0..5000.0,
            extra in 1.0..5000.0,
        ) {
            let long = short + extra;

            prop_assert!(strain_decay(long, base) < strain_decay(short, base));

            let mut after_short = StrainSkill::default();
            let mut after_long = StrainSkill::default();

            let short_strain = after_short.update_strain(short, base, 0.0);
            let long_strain = after_long.update_strain(long, base, 0.0);

            prop_assert!(long_strain < short_strain);
            prop_assert!(short_strain <= 1.0);
        }
    }
}

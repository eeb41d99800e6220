use super::object::OsuDifficultyObject;

/// Fields around the scaling of hit objects.
///
/// All objects of a map share the same circle size so the scaling is stored
/// only once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScalingFactor {
    /// `NORMALIZED_RADIUS / Radius` and then adjusted if `Radius < 30`
    pub factor: f32,
    pub radius: f64,
}

impl ScalingFactor {
    pub const OBJECT_RADIUS: f32 = 64.0;

    pub fn new(cs: f64) -> Self {
        let scale = (1.0 - 0.7 * ((cs - 5.0) / 5.0)) as f32 / 2.0;

        let radius = f64::from(Self::OBJECT_RADIUS * scale);
        let factor = OsuDifficultyObject::NORMALIZED_RADIUS as f32 / radius as f32;

        // * high circle size (small CS) bonus
        let factor_with_small_circle_bonus = if radius < 30.0 {
            factor * (1.0 + (30.0 - radius as f32).min(5.0) / 50.0)
        } else {
            factor
        };

        Self {
            factor: factor_with_small_circle_bonus,
            radius,
        }
    }
}

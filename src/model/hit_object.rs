use std::cmp::Ordering;

pub use super::pos::Pos;

/// All hitobject related data required for difficulty and performance
/// calculation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner(_))
    }

    /// The end time of the object.
    pub fn end_time(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::Slider(Slider { duration, .. })
            | HitObjectKind::Spinner(Spinner { duration }) => self.start_time + *duration,
        }
    }

    /// The position at which the cursor rests once the object is done.
    pub(crate) const fn end_pos(&self) -> Pos {
        match &self.kind {
            HitObjectKind::Slider(slider) => slider.lazy_end_pos,
            HitObjectKind::Circle | HitObjectKind::Spinner(_) => self.pos,
        }
    }

    /// The amount of combo this object grants when hit completely.
    pub(crate) const fn combo(&self) -> u32 {
        match &self.kind {
            HitObjectKind::Circle | HitObjectKind::Spinner(_) => 1,
            HitObjectKind::Slider(slider) => slider.combo(),
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
}

/// A slider.
///
/// The path itself is not needed; the loader provides the values of a lazy
/// cursor movement along it, i.e. a cursor that only moves once the follow
/// circle would otherwise leave it behind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// Where the lazy cursor ends up after the slider.
    pub lazy_end_pos: Pos,
    /// Length of the lazy cursor's path in osu!pixels.
    pub lazy_travel_dist: f32,
    /// Time in milliseconds from the head to the tail.
    pub duration: f64,
    /// The amount of repeats.
    pub repeats: usize,
    /// The amount of ticks across all spans.
    pub n_ticks: usize,
}

impl Slider {
    /// The amount of spans of the slider.
    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }

    /// Head, ticks, repeats, and tail.
    const fn combo(&self) -> u32 {
        (2 + self.repeats + self.n_ticks) as u32
    }
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spinner {
    pub duration: f64,
}

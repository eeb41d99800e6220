use crate::{
    model::beatmap::Beatmap,
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes},
};

/// Either a map whose attributes still need to be calculated or the
/// attributes themselves.
#[derive(Clone, Debug, PartialEq)]
pub enum MapOrAttrs<'map> {
    Map(&'map Beatmap),
    Attrs(OsuDifficultyAttributes),
}

impl<'map> From<&'map Beatmap> for MapOrAttrs<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::Map(map)
    }
}

impl From<OsuDifficultyAttributes> for MapOrAttrs<'_> {
    fn from(attrs: OsuDifficultyAttributes) -> Self {
        Self::Attrs(attrs)
    }
}

impl From<OsuPerformanceAttributes> for MapOrAttrs<'_> {
    fn from(attrs: OsuPerformanceAttributes) -> Self {
        Self::Attrs(attrs.difficulty)
    }
}

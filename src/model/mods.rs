use crate::util::mods::Mods;

/// The gamemods that influence difficulty or performance, resolved once from
/// their bit values.
///
/// See [https://github.com/ppy/osu-api/wiki#mods](https://github.com/ppy/osu-api/wiki#mods)
/// for the bit values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ModFlags {
    pub no_fail: bool,
    pub touch_device: bool,
    pub hidden: bool,
    pub flashlight: bool,
    pub spun_out: bool,
    pub relax: bool,
    /// Only set if [`relax`](ModFlags::relax) is not.
    pub autopilot: bool,
}

impl ModFlags {
    /// Resolve the flags of the given mod bits.
    pub fn new(mods: u32) -> Self {
        let relax = mods.rx();

        Self {
            no_fail: mods.nf(),
            touch_device: mods.td(),
            hidden: mods.hd(),
            flashlight: mods.fl(),
            spun_out: mods.so(),
            relax,
            autopilot: mods.ap() && !relax,
        }
    }
}

impl From<u32> for ModFlags {
    fn from(mods: u32) -> Self {
        Self::new(mods)
    }
}

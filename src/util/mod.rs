#[cfg(test)]
pub mod float_ext;
pub mod hint;
pub mod map_or_attrs;
pub mod mods;

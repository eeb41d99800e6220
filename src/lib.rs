//! Library to calculate difficulty and performance attributes for [osu!]standard
//! with the aim/speed/flashlight star rating model.
//!
//! ## Description
//!
//! Raw hit objects are turned into difficulty objects carrying timing and
//! normalized distances. Three skills (aim, speed, flashlight) accumulate an
//! exponentially decaying strain over those objects, the strain peaks are
//! aggregated into ratings, and the ratings are combined into star ratings.
//! Given a play's hit results, the same attributes yield performance points.
//!
//! Loading `.osu` files is not part of this crate; build a [`Beatmap`] from
//! whichever loader you use.
//!
//! ## Usage
//!
//! ```
//! use legacy_pp::{
//!     model::hit_object::{HitObject, HitObjectKind, Pos},
//!     osu::OsuPerformance,
//!     Beatmap, Difficulty,
//! };
//!
//! let map = Beatmap {
//!     ar: 9.0,
//!     cs: 4.0,
//!     hp: 5.0,
//!     od: 8.0,
//!     hit_objects: (0..200)
//!         .map(|i| HitObject {
//!             pos: Pos::new(if i % 2 == 0 { 100.0 } else { 400.0 }, 192.0),
//!             start_time: 1000.0 + f64::from(i) * 150.0,
//!             kind: HitObjectKind::Circle,
//!         })
//!         .collect(),
//! };
//!
//! // Calculate difficulty attributes
//! let diff_attrs = Difficulty::new()
//!     .mods(8 + 16) // HDHR
//!     .calculate(&map);
//!
//! let stars = diff_attrs.stars();
//!
//! // Calculate performance attributes
//! let perf_attrs = OsuPerformance::new(&map)
//!     // To speed up the calculation significantly, we can re-use the previous
//!     // attributes.
//!     // **Note** that this should only be done if the map and mods stay the
//!     // same. Otherwise, the resulting attributes will be incorrect.
//!     .attributes(diff_attrs)
//!     .mods(24) // HDHR, same as before
//!     .combo(150)
//!     .accuracy(99.2)
//!     .misses(2)
//!     .calculate();
//!
//! let pp = perf_attrs.pp();
//!
//! // Again, we re-use the previous attributes for maximum efficiency.
//! let max_pp = perf_attrs.performance()
//!     .mods(24) // Still the same
//!     .calculate()
//!     .pp();
//!
//! println!("Stars: {stars} | PP: {pp}/{max_pp}");
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `serde` | Attribute types implement `Serialize` and `Deserialize` so they can be cached. | [`serde`]
//! | `tracing` | Calculation results and suspicious maps are logged through `tracing`. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    any::Difficulty,
    model::beatmap::{Beatmap, TooSuspicious},
};

/// Types for calculations independent of the skill model.
pub mod any;

/// Types for osu!standard calculations.
pub mod osu;

/// Types used in and around this crate.
pub mod model;

mod util;

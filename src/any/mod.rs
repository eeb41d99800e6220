pub use self::difficulty::Difficulty;

pub mod difficulty;

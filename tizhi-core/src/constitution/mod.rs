pub mod dimension;
pub mod map;
pub mod score;
pub mod tendency;

pub use dimension::Constitution;
pub use map::{DimensionMap, ScoreVector, TendencyMap};
pub use score::Score;
pub use tendency::Tendency;

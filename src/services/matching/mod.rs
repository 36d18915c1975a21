pub mod distance;
pub mod normalize;
pub mod resolver;

pub use resolver::{resolve, MatchResult, Resolver};

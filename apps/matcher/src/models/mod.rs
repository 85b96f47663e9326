pub mod job;
pub mod score;

pub use job::{JobProfile, MatchResult};
pub use score::ScoreResult;

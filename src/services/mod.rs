pub mod analysis;
pub mod report;
pub mod summary;

pub use analysis::{score_game, GameAnalyzer};
pub use summary::{rank_results, summarize, Summary};

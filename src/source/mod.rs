pub mod cached;
pub mod memory;

use anyhow::Result;

use crate::domain::{PlayEvent, PlayerLine, TeamGameStat};

pub use cached::CachedSource;
pub use memory::MemorySource;

/// Access to already-collected game tables.
///
/// The scoring engine never talks to the stats provider itself; whatever
/// fetched or cached the data implements this trait.
pub trait GameDataSource {
    /// Team rows for all recent games (one row per team per game)
    fn team_stats(&self) -> Result<Vec<TeamGameStat>>;

    /// Play-by-play for one game in chronological order, empty when unknown
    fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayEvent>>;

    /// Box-score player lines for one game, empty when unknown
    fn box_score(&self, game_id: &str) -> Result<Vec<PlayerLine>>;
}

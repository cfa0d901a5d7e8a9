pub mod catalog;
pub mod feed;
pub mod preferences;
pub mod ranking;
pub mod scoring;

pub use catalog::Catalog;
pub use feed::{FeedItem, FeedService, FeedView};
pub use preferences::PreferenceService;
pub use ranking::{rank, Ranking, RankingPipeline, RankingStats, SCORE_THRESHOLD};

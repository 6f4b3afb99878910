pub mod postgres;
pub mod sqlite;
pub mod trait_def;

pub use postgres::PostgresStatsStore;
pub use sqlite::SqliteStatsStore;
pub use trait_def::{
    AggregateRow, ContextResolver, ItemType, JournalContext, StatsQuery, StatsSource,
};

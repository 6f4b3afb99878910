use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Usage record kinds that count towards item requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// Submission landing page (abstract) view
    Abstract,
    /// Full-text file (galley) view
    Galley,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Abstract => "abstract",
            ItemType::Galley => "galley",
        }
    }
}

/// Aggregation descriptor consumed by a [`StatsSource`].
///
/// Grouping (by context), ordering (total descending) and tenant scope
/// (unrestricted) are fixed policy of the source, not parameters.
#[derive(Debug, Clone)]
pub struct StatsQuery {
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub item_types: Vec<ItemType>,
    pub limit: i64,
    pub offset: i64,
}

/// One page entry: total item requests for a single context.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AggregateRow {
    pub context_id: i64,
    pub total: i64,
}

/// Descriptive metadata for a publishing context (journal).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JournalContext {
    pub id: i64,
    pub path: String,
    pub name: String,
    pub print_issn: Option<String>,
    pub online_issn: Option<String>,
    pub publisher: Option<String>,
}

#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Return one page of per-context totals, ordered descending by total.
    /// Result length is at most `query.limit`. Ordering is stable for equal
    /// inputs; global consistency across pages taken at different times is
    /// not guaranteed.
    async fn ordered_context_totals(&self, query: &StatsQuery) -> Result<Vec<AggregateRow>>;
}

#[async_trait]
pub trait ContextResolver: Send + Sync {
    /// Resolve a URL path segment to a context id. `None` means the request
    /// is not bound to any known publishing context.
    async fn resolve_path(&self, path: &str) -> Result<Option<i64>>;

    /// Look up context metadata by id. `None` is a valid outcome (the
    /// context was deleted after its stats were recorded) and signals the
    /// caller to skip the row, not an error.
    async fn get(&self, context_id: i64) -> Result<Option<JournalContext>>;
}

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::stats::{
    AggregateRow, ContextResolver, ItemType, JournalContext, StatsQuery, StatsSource,
};

pub struct SqliteStatsStore {
    pool: Arc<SqlitePool>,
}

impl SqliteStatsStore {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS journals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                path TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                print_issn TEXT,
                online_issn TEXT,
                publisher TEXT
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        // Pre-aggregated daily counters per context and item type
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS usage_metrics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                context_id INTEGER NOT NULL,
                item_type TEXT NOT NULL,
                day TEXT NOT NULL,
                metric INTEGER NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_metrics_day ON usage_metrics(day, item_type)",
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_journals_path ON journals(path)")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    pub async fn insert_journal(
        &self,
        path: &str,
        name: &str,
        print_issn: Option<&str>,
        online_issn: Option<&str>,
        publisher: Option<&str>,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO journals (path, name, print_issn, online_issn, publisher)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(path)
        .bind(name)
        .bind(print_issn)
        .bind(online_issn)
        .bind(publisher)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn delete_journal(&self, context_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM journals WHERE id = ?")
            .bind(context_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn record_metric(
        &self,
        context_id: i64,
        item_type: ItemType,
        day: NaiveDate,
        metric: i64,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO usage_metrics (context_id, item_type, day, metric)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(context_id)
        .bind(item_type.as_str())
        .bind(day)
        .bind(metric)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}

#[async_trait]
impl StatsSource for SqliteStatsStore {
    async fn ordered_context_totals(&self, query: &StatsQuery) -> Result<Vec<AggregateRow>> {
        let placeholders = vec!["?"; query.item_types.len()].join(", ");
        let sql = format!(
            r#"
            SELECT context_id, SUM(metric) AS total
            FROM usage_metrics
            WHERE day >= ? AND day <= ? AND item_type IN ({placeholders})
            GROUP BY context_id
            ORDER BY total DESC, context_id ASC
            LIMIT ? OFFSET ?
            "#
        );

        let mut q = sqlx::query_as::<_, AggregateRow>(&sql)
            .bind(query.date_start)
            .bind(query.date_end);
        for item_type in &query.item_types {
            q = q.bind(item_type.as_str());
        }

        let rows = q
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows)
    }
}

#[async_trait]
impl ContextResolver for SqliteStatsStore {
    async fn resolve_path(&self, path: &str) -> Result<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM journals WHERE path = ?")
            .bind(path)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    async fn get(&self, context_id: i64) -> Result<Option<JournalContext>> {
        let journal = sqlx::query_as::<_, JournalContext>(
            r#"
            SELECT id, path, name, print_issn, online_issn, publisher
            FROM journals
            WHERE id = ?
            "#,
        )
        .bind(context_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(journal)
    }
}

//! Embedded SQLite database the session executes against.
crate::reexport!(result);

use crate::*;
use futures::TryStreamExt as _;
use sqlx::{
    AssertSqlSafe, Either, Row as _, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr as _};

/// Handle to an open database. Cloning shares the underlying connection.
///
/// The pool holds exactly one connection that never expires, so an in-memory
/// database lives as long as the handle.
#[derive(Debug, Clone)]
pub struct Engine {
    pool: SqlitePool,
    id: String,
}

impl Engine {
    pub async fn open(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        info!("Opened database {url}");
        Ok(Self::from_pool(pool, database_id(url)))
    }

    pub fn from_pool(pool: SqlitePool, id: impl Into<String>) -> Self {
        Self {
            pool,
            id: id.into(),
        }
    }

    /// Identifier used to recognise sample databases, usually the file name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Introspect tables (and views) with their declared columns, in name order.
    pub async fn schema(&self) -> Result<Schema> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master \
             WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut schema = Schema::new();
        for name in names {
            let pragma = format!("PRAGMA table_info('{}')", name.replace('\'', "''"));
            let rows = sqlx::query(AssertSqlSafe(pragma))
                .fetch_all(&self.pool)
                .await?;
            let columns = rows
                .iter()
                .map(|row| Ok((row.try_get::<String, _>("name")?, row.try_get::<String, _>("type")?)))
                .collect::<Result<Vec<_>>>()?;
            schema.insert_table(Table::new_with_ordered(name, columns));
        }
        debug!("Loaded schema of {} with {} table(s)", self.id, schema.len());
        Ok(schema)
    }

    /// Run one or more `;`-separated statements. Only statements that return
    /// at least one row contribute a result set.
    pub async fn execute(&self, sql: &str) -> Result<Vec<ResultSet>> {
        let mut results = Vec::new();
        let mut current: Option<ResultSet> = None;
        let mut stream = sqlx::raw_sql(AssertSqlSafe(sql.to_owned())).fetch_many(&self.pool);

        while let Some(item) = stream.try_next().await? {
            match item {
                Either::Left(done) => {
                    trace!("Statement finished, {} row(s) affected", done.rows_affected());
                    results.extend(current.take());
                }
                Either::Right(row) => current
                    .get_or_insert_with(|| ResultSet::headed_by(&row))
                    .push(&row)?,
            }
        }
        results.extend(current.take());
        debug!("Executed query returning {} result set(s)", results.len());
        Ok(results)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Last path segment of a database URL, without its query string.
pub fn database_id(url: &str) -> String {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    let path = path.split('?').next().unwrap_or(path);
    match path {
        "" | ":memory:" => "memory".to_string(),
        _ => Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string()),
    }
}

use crate::testing::*;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tempfile::TempDir;
use test_context::AsyncTestContext;
pub use test_context::test_context;

/// A freshly seeded Chinook-shaped database file in its own temporary
/// directory, removed on teardown.
pub struct IsolatedIntegrationTest {
    pub engine: Engine,
    pub pool: SqlitePool,
    pub url: String,
    pub dir: TempDir,
    pub is_teardown: bool,
}

impl IsolatedIntegrationTest {
    fn random_database() -> String {
        use rand::Rng;
        format!(
            "chinook_{}.sqlite",
            rand::rng()
                .sample_iter(&rand::distr::Alphanumeric)
                .take(8)
                .map(char::from)
                .collect::<String>()
                .to_lowercase()
        )
    }
}

impl AsyncTestContext for IsolatedIntegrationTest {
    async fn setup() -> Self {
        crate::testing::common_init();
        let dir = tempfile::tempdir().expect("Failed to create test directory");
        let path = dir.path().join(Self::random_database());
        let url = format!("sqlite://{}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("db init connection failure");
        sqlx::raw_sql(FIXTURE_SQL)
            .execute(&pool)
            .await
            .expect("Failed to seed test database");

        Self {
            engine: Engine::from_pool(pool.clone(), database_id(&url)),
            pool,
            url,
            dir,
            is_teardown: true,
        }
    }

    async fn teardown(self) {
        if !self.is_teardown {
            return;
        }
        self.pool.close().await;
        self.dir.close().expect("Failed to remove test directory");
    }
}

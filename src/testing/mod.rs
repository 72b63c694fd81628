#![cfg(test)]
crate::reexport!(fixture);
crate::reexport!(context);
pub use crate::*;
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod isolated_integration_tests {
    use super::*;

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    async fn can_connect(ctx: &mut IsolatedIntegrationTest) -> Result {
        sqlx::query("SELECT 1;").fetch_one(&ctx.pool).await?;
        Ok(())
    }

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    async fn database_is_recognised_as_chinook(ctx: &mut IsolatedIntegrationTest) {
        assert!(ctx.engine.id().starts_with("chinook_"));
        assert!(ctx.url.ends_with(ctx.engine.id()));
        assert_eq!(Catalog::detect(ctx.engine.id()), Some(Catalog::Chinook));
    }

    #[test_context(IsolatedIntegrationTest)]
    #[rstest]
    #[case(7, "Sultans of Swing")]
    #[case(8, "Waterloo")]
    #[tokio::test]
    async fn can_write(
        ctx: &mut IsolatedIntegrationTest,
        #[case] id: i64,
        #[case] name: &str,
    ) -> Result {
        sqlx::query("INSERT INTO Track (TrackId, Name, Milliseconds) VALUES (?, ?, 0)")
            .bind(id)
            .bind(name)
            .execute(&ctx.pool)
            .await?;

        let actual_name: String = sqlx::query_scalar("SELECT Name FROM Track WHERE TrackId = ?")
            .bind(id)
            .fetch_one(&ctx.pool)
            .await?;

        assert_eq!(name, actual_name);
        Ok(())
    }
}

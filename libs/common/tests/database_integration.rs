//! Integration tests for the database infrastructure
//!
//! These tests verify that the PostgreSQL database is properly configured
//! and accessible from the application. They need a running PostgreSQL
//! instance and a `DATABASE_URL` pointing at it, so they are ignored by
//! default; run them with `cargo test -- --ignored`.

use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use sqlx::Row;

/// Verify that PostgreSQL is accessible and can perform basic operations
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_database_integration() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;

    let result: i32 = row.get("result");
    assert_eq!(result, 1, "PostgreSQL simple query test failed");

    Ok(())
}

/// Verify that migrations apply cleanly and leave the expected tables behind
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_migrations_apply() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    run_migrations(&pool).await?;

    for table in ["users", "posts"] {
        let row = sqlx::query("SELECT to_regclass($1) IS NOT NULL as present")
            .bind(table)
            .fetch_one(&pool)
            .await?;
        let present: bool = row.get("present");
        assert!(present, "expected table {table} to exist after migrations");
    }

    Ok(())
}

//! Integration tests for the infrastructure components
//!
//! These tests verify that the PostgreSQL database and Redis store the
//! forum backend depends on are properly configured and accessible.

use common::{
    cache::{RedisConfig, RedisPool},
    database::{DatabaseConfig, health_check, init_pool},
};
use sqlx::Row;

/// Verifies that both PostgreSQL and Redis are accessible and can perform
/// the operations the session and credential stores rely on.
#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis instances"]
async fn infrastructure_integration() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;
    let result: i32 = row.get("result");
    assert_eq!(result, 1, "PostgreSQL simple query test failed");

    let redis_config = RedisConfig::from_env()?;
    let redis_pool = RedisPool::new(&redis_config).await?;

    assert!(
        redis_pool.health_check().await?,
        "Redis health check failed"
    );

    // A set with TTL, a read-back, and a delete: the exact shapes the
    // session store and reset-token flow use.
    let test_key = "infrastructure_test_key";
    let test_value = "infrastructure_test_value";

    redis_pool.set(test_key, test_value, Some(10)).await?;

    let retrieved_value = redis_pool.get(test_key).await?;
    assert_eq!(retrieved_value, Some(test_value.to_string()));

    redis_pool.delete(test_key).await?;

    let retrieved_value = redis_pool.get(test_key).await?;
    assert_eq!(retrieved_value, None);

    Ok(())
}

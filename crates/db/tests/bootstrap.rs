use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify every table exists and is empty.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    pupil_db::health_check(&pool).await.unwrap();

    let tables = [
        "study_sessions",
        "trial_responses",
        "feedback_responses",
        "sam_responses",
        "tlx_responses",
        "event_logs",
        "eye_tracking_data",
        "trials",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

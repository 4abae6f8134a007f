use sqlx::PgPool;

/// Records `content_id` as completed for `user_id`. A repeated submission
/// overwrites score, attempts and completion time of the existing row.
pub async fn record_completion(
    db: &PgPool,
    user_id: i32,
    content_id: i32,
    score: Option<f64>,
    attempts: i32,
) -> sqlx::Result<i32> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO userprogress (user_id, content_id, is_completed, score, attempts)
        VALUES ($1, $2, TRUE, $3, $4)
        ON CONFLICT (user_id, content_id) DO UPDATE
        SET score = EXCLUDED.score,
            attempts = EXCLUDED.attempts,
            completed_at = NOW(),
            is_completed = TRUE
        RETURNING progress_id
        "#,
    )
    .bind(user_id)
    .bind(content_id)
    .bind(score)
    .bind(attempts)
    .fetch_one(db)
    .await
}

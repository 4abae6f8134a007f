use sqlx::PgPool;

use crate::{enrollments::repo_types::EnrolledCourse, users::repo_types::PublicUser};

/// Inserts the enrollment unless the pair already exists. `None` means the
/// user was already enrolled.
pub async fn enroll(db: &PgPool, user_id: i32, course_id: i32) -> sqlx::Result<Option<i32>> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO enrollments (user_id, course_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, course_id) DO NOTHING
        RETURNING enrollment_id
        "#,
    )
    .bind(user_id)
    .bind(course_id)
    .fetch_optional(db)
    .await
}

pub async fn courses_for_user(db: &PgPool, user_id: i32) -> sqlx::Result<Vec<EnrolledCourse>> {
    sqlx::query_as::<_, EnrolledCourse>(
        r#"
        SELECT c.course_id, c.title, c.course_summary
        FROM enrollments e
        JOIN courses c ON e.course_id = c.course_id
        WHERE e.user_id = $1
        ORDER BY e.enrollment_id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn users_for_course(db: &PgPool, course_id: i32) -> sqlx::Result<Vec<PublicUser>> {
    sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT u.user_id, u.name, u.email
        FROM enrollments e
        JOIN users u ON e.user_id = u.user_id
        WHERE e.course_id = $1
        ORDER BY e.enrollment_id
        "#,
    )
    .bind(course_id)
    .fetch_all(db)
    .await
}

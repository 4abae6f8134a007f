use sqlx::{types::Json, PgPool};

use crate::courses::repo_types::{Course, CourseSummary, CreatedCourse, NewCourse};

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<CourseSummary>> {
    sqlx::query_as::<_, CourseSummary>(
        r#"
        SELECT course_id, title, course_summary
        FROM courses
        ORDER BY course_id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find(db: &PgPool, course_id: i32) -> sqlx::Result<Option<Course>> {
    sqlx::query_as::<_, Course>(
        r#"
        SELECT course_id, title, course_summary, what_you_will_learn, syllabus_structure
        FROM courses
        WHERE course_id = $1
        "#,
    )
    .bind(course_id)
    .fetch_optional(db)
    .await
}

pub async fn create(db: &PgPool, course: NewCourse) -> sqlx::Result<CreatedCourse> {
    sqlx::query_as::<_, CreatedCourse>(
        r#"
        INSERT INTO courses (title, course_summary, what_you_will_learn, syllabus_structure)
        VALUES ($1, $2, $3, $4)
        RETURNING course_id, title
        "#,
    )
    .bind(course.title)
    .bind(course.course_summary)
    .bind(Json(course.what_you_will_learn))
    .bind(Json(course.syllabus_structure))
    .fetch_one(db)
    .await
}

use sqlx::PgPool;

use crate::content::repo_types::{
    ContentItem, CourseContent, CreatedContent, NewContent, SyllabusEntry,
};

pub async fn list_for_course(db: &PgPool, course_id: i32) -> sqlx::Result<Vec<ContentItem>> {
    sqlx::query_as::<_, ContentItem>(
        r#"
        SELECT content_id, topic_title, topic_order, title, content_type,
               content_order, content_body, video_url
        FROM coursecontent
        WHERE course_id = $1
        ORDER BY topic_order ASC, content_order ASC, content_id ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(db)
    .await
}

pub async fn syllabus_for_course(db: &PgPool, course_id: i32) -> sqlx::Result<Vec<SyllabusEntry>> {
    sqlx::query_as::<_, SyllabusEntry>(
        r#"
        SELECT content_id, topic_title, topic_order, title, content_order, content_type
        FROM coursecontent
        WHERE course_id = $1
        ORDER BY topic_order ASC, content_order ASC, content_id ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(db)
    .await
}

pub async fn find(db: &PgPool, content_id: i32) -> sqlx::Result<Option<CourseContent>> {
    sqlx::query_as::<_, CourseContent>(
        r#"
        SELECT content_id, course_id, topic_title, topic_order, title,
               content_order, content_type, content_body, video_url
        FROM coursecontent
        WHERE content_id = $1
        "#,
    )
    .bind(content_id)
    .fetch_optional(db)
    .await
}

pub async fn create(db: &PgPool, content: NewContent) -> sqlx::Result<CreatedContent> {
    sqlx::query_as::<_, CreatedContent>(
        r#"
        INSERT INTO coursecontent (
            course_id, topic_title, topic_order, title,
            content_order, content_type, content_body, video_url
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING content_id, title, topic_title
        "#,
    )
    .bind(content.course_id)
    .bind(content.topic_title)
    .bind(content.topic_order)
    .bind(content.title)
    .bind(content.content_order)
    .bind(content.content_type)
    .bind(content.content_body)
    .bind(content.video_url)
    .fetch_one(db)
    .await
}

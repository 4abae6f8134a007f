use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    content::{
        dto::{AddContentRequest, AddContentResponse},
        repo,
        repo_types::{ContentItem, CourseContent, NewContent, SyllabusEntry},
    },
    error::{constraint_violation, internal, ApiError, Constraint},
    state::AppState,
    validation::{non_blank, parse_id},
};

const DEFAULT_CONTENT_TYPE: &str = "lecture";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses/:course_id/content", get(list_course_content))
        .route("/courses/:course_id/syllabus", get(get_syllabus))
        .route("/content", post(add_content))
        .route("/content/:content_id", get(get_content))
}

fn course_id_from_path(raw: &str) -> Result<i32, ApiError> {
    parse_id(raw).ok_or_else(|| ApiError::bad_request("Valid Course ID is required."))
}

/// Every item of a course, ordered by topic then position. A course without
/// content is reported as not found.
#[instrument(skip(state))]
pub async fn list_course_content(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<ContentItem>>, ApiError> {
    let course_id = course_id_from_path(&course_id)?;
    let items = repo::list_for_course(&state.db, course_id)
        .await
        .map_err(internal(
            "Failed to retrieve course content due to a server error.",
        ))?;
    if items.is_empty() {
        return Err(ApiError::not_found(
            "Course content not found for this course ID.",
        ));
    }
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn get_syllabus(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<SyllabusEntry>>, ApiError> {
    let course_id = course_id_from_path(&course_id)?;
    let entries = repo::syllabus_for_course(&state.db, course_id)
        .await
        .map_err(internal("Failed to fetch syllabus due to a server error."))?;
    if entries.is_empty() {
        return Err(ApiError::not_found(
            "Syllabus content not found for this course.",
        ));
    }
    Ok(Json(entries))
}

#[instrument(skip(state))]
pub async fn get_content(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> Result<Json<CourseContent>, ApiError> {
    let content_id =
        parse_id(&content_id).ok_or_else(|| ApiError::bad_request("Content ID is required."))?;
    repo::find(&state.db, content_id)
        .await
        .map_err(internal(
            "Failed to fetch course content due to a server error.",
        ))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Course content not found."))
}

fn validate(payload: AddContentRequest) -> Result<NewContent, ApiError> {
    const REQUIRED: &str =
        "Course ID, topic title/order, and content title/order are required fields.";

    let (Some(course_id), Some(topic_title), Some(topic_order), Some(title), Some(content_order)) = (
        payload.course_id,
        non_blank(payload.topic_title),
        payload.topic_order,
        non_blank(payload.title),
        payload.content_order,
    ) else {
        return Err(ApiError::bad_request(REQUIRED));
    };

    let (Some(course_id), Some(topic_order), Some(content_order)) = (
        course_id.as_id(),
        topic_order.as_i32(),
        content_order.as_i32(),
    ) else {
        return Err(ApiError::bad_request(
            "course_id, topic_order and content_order must be integers.",
        ));
    };

    Ok(NewContent {
        course_id,
        topic_title,
        topic_order,
        title,
        content_order,
        content_type: non_blank(payload.content_type)
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        content_body: payload.content_body,
        video_url: payload.video_url,
    })
}

#[instrument(skip(state, payload))]
pub async fn add_content(
    State(state): State<AppState>,
    payload: Result<Json<AddContentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddContentResponse>), ApiError> {
    let Json(payload) = payload?;
    let new_content = validate(payload)?;
    let course_id = new_content.course_id;

    let content = match repo::create(&state.db, new_content).await {
        Ok(c) => c,
        Err(e) => {
            return Err(match constraint_violation(&e) {
                Some(Constraint::Unique) => {
                    warn!(course_id, "duplicate content ordering");
                    ApiError::conflict(
                        "Conflict: Content with this topic order and content order already exists in the course.",
                    )
                }
                Some(Constraint::ForeignKey) => {
                    warn!(course_id, "content for unknown course");
                    ApiError::conflict("Invalid Course ID provided.")
                }
                None => internal("Failed to create course content due to a server error.")(e),
            })
        }
    };

    info!(content_id = content.content_id, course_id, "course content created");
    Ok((
        StatusCode::CREATED,
        Json(AddContentResponse {
            message: "Course content created successfully",
            content,
        }),
    ))
}

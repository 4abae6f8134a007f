use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    courses::{
        dto::{CourseDetailsQuery, CreateCourseRequest, CreateCourseResponse},
        repo,
        repo_types::{Course, CourseSummary, NewCourse},
    },
    error::{internal, ApiError},
    state::AppState,
    validation::{non_blank, parse_id},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/:course_id", get(get_course))
        .route("/course-details", get(get_course_details))
}

#[instrument(skip(state))]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseSummary>>, ApiError> {
    let courses = repo::list(&state.db)
        .await
        .map_err(internal("Failed to fetch courses"))?;
    Ok(Json(courses))
}

#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    course_by_id(&state, Some(&course_id)).await
}

#[instrument(skip(state))]
pub async fn get_course_details(
    State(state): State<AppState>,
    Query(query): Query<CourseDetailsQuery>,
) -> Result<Json<Course>, ApiError> {
    course_by_id(&state, query.course_id.as_deref()).await
}

async fn course_by_id(state: &AppState, raw_id: Option<&str>) -> Result<Json<Course>, ApiError> {
    let course_id = raw_id
        .and_then(parse_id)
        .ok_or_else(|| ApiError::bad_request("Course ID is required"))?;
    repo::find(&state.db, course_id)
        .await
        .map_err(internal("Failed to fetch course details"))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Course not found"))
}

#[instrument(skip(state, payload))]
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateCourseResponse>), ApiError> {
    let Json(payload) = payload?;
    let (Some(title), Some(course_summary)) =
        (non_blank(payload.title), non_blank(payload.course_summary))
    else {
        return Err(ApiError::bad_request(
            "Title and course summary are required fields.",
        ));
    };

    let course = repo::create(
        &state.db,
        NewCourse {
            title,
            course_summary,
            what_you_will_learn: payload.what_you_will_learn.unwrap_or_default(),
            syllabus_structure: payload.syllabus_structure.unwrap_or_default(),
        },
    )
    .await
    .map_err(internal("Failed to create course due to a server error."))?;

    info!(course_id = course.course_id, title = %course.title, "course created");
    Ok((
        StatusCode::CREATED,
        Json(CreateCourseResponse {
            message: "Course created successfully",
            course,
        }),
    ))
}

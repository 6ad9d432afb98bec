use axum::{
    Json,
    extract::{Path, Query, State},
};
use database::services::course::CourseService;
use sea_orm::DatabaseConnection;

use crate::dtos::course::{CourseQueryParams, CourseRequisitesResponse, CourseResponse};
use crate::error::ApiError;

/// Get courses, optionally narrowed by filters combined with logical AND
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of matching courses", body = Vec<CourseResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(db): State<DatabaseConnection>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = CourseService::get_courses(
        &db,
        params.id,
        params.title,
        params.prefix,
        params.credits,
        params.degree_id,
    )
    .await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Get a specific course by its id
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(db): State<DatabaseConnection>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::get_course_by_id(&db, &course_id)
        .await?
        .ok_or(ApiError::NotFound("Course"))?;

    Ok(Json(course.into()))
}

/// Get the requisite records of a course
#[utoipa::path(
    get,
    path = "/courses/{course_id}/requisites",
    params(
        ("course_id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Requisite records for the course", body = Vec<CourseRequisitesResponse>),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Courses"
)]
pub async fn get_requisites(
    State(db): State<DatabaseConnection>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<CourseRequisitesResponse>>, ApiError> {
    let requisites = CourseService::get_requisites(&db, &course_id).await?;

    Ok(Json(
        requisites
            .into_iter()
            .map(CourseRequisitesResponse::from)
            .collect(),
    ))
}

/// Get the ids of the courses that must be completed before this one
#[utoipa::path(
    get,
    path = "/courses/{course_id}/prerequisites",
    params(
        ("course_id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Prerequisite course ids", body = Vec<String>),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Courses"
)]
pub async fn get_prerequisites(
    State(db): State<DatabaseConnection>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let prerequisites = CourseService::get_prerequisites(&db, &course_id).await?;

    Ok(Json(prerequisites))
}

/// Get the ids of the courses that must be taken concurrently with this one
#[utoipa::path(
    get,
    path = "/courses/{course_id}/corequisites",
    params(
        ("course_id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Corequisite course ids", body = Vec<String>),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Courses"
)]
pub async fn get_corequisites(
    State(db): State<DatabaseConnection>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let corequisites = CourseService::get_corequisites(&db, &course_id).await?;

    Ok(Json(corequisites))
}

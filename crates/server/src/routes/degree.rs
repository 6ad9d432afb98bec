use axum::{
    Json,
    extract::{Path, Query, State},
};
use database::services::degree::DegreeService;
use sea_orm::DatabaseConnection;

use crate::dtos::course::CourseResponse;
use crate::dtos::degree::{DegreeQueryParams, DegreeResponse, DegreeSearchParams};
use crate::error::ApiError;

/// Get degrees, optionally narrowed by filters combined with logical AND
#[utoipa::path(
    get,
    path = "/degrees",
    params(DegreeQueryParams),
    responses(
        (status = 200, description = "List of matching degrees", body = Vec<DegreeResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Degrees"
)]
pub async fn get_degrees(
    State(db): State<DatabaseConnection>,
    Query(params): Query<DegreeQueryParams>,
) -> Result<Json<Vec<DegreeResponse>>, ApiError> {
    let degrees =
        DegreeService::get_degrees(&db, params.department, params.level, params.degree_type)
            .await?;

    Ok(Json(degrees.into_iter().map(DegreeResponse::from).collect()))
}

/// Search degrees across type, title, department, level and concentration
#[utoipa::path(
    get,
    path = "/degrees/search",
    params(DegreeSearchParams),
    responses(
        (status = 200, description = "List of matching degrees", body = Vec<DegreeResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Degrees"
)]
pub async fn search_degrees(
    State(db): State<DatabaseConnection>,
    Query(params): Query<DegreeSearchParams>,
) -> Result<Json<Vec<DegreeResponse>>, ApiError> {
    let degrees = DegreeService::search_degrees(
        &db,
        params.degree_type,
        params.title,
        params.department,
        params.level,
        params.concentration,
    )
    .await?;

    Ok(Json(degrees.into_iter().map(DegreeResponse::from).collect()))
}

/// Get a specific degree by its id
#[utoipa::path(
    get,
    path = "/degrees/{degree_id}",
    params(
        ("degree_id" = i32, Path, description = "Degree id")
    ),
    responses(
        (status = 200, description = "Degree found", body = DegreeResponse),
        (status = 400, description = "Non-numeric degree id"),
        (status = 404, description = "Degree not found"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Degrees"
)]
pub async fn get_degree_by_id(
    State(db): State<DatabaseConnection>,
    Path(degree_id): Path<i32>,
) -> Result<Json<DegreeResponse>, ApiError> {
    let degree = DegreeService::get_degree_by_id(&db, degree_id)
        .await?
        .ok_or(ApiError::NotFound("Degree"))?;

    Ok(Json(degree.into()))
}

/// Get all courses belonging to a degree
#[utoipa::path(
    get,
    path = "/degrees/{degree_id}/courses",
    params(
        ("degree_id" = i32, Path, description = "Degree id")
    ),
    responses(
        (status = 200, description = "Member courses of the degree", body = Vec<CourseResponse>),
        (status = 400, description = "Non-numeric degree id"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Degrees"
)]
pub async fn get_courses_for_degree(
    State(db): State<DatabaseConnection>,
    Path(degree_id): Path<i32>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = DegreeService::get_courses_for_degree(&db, degree_id).await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Get all degrees containing a course
#[utoipa::path(
    get,
    path = "/courses/{course_id}/degrees",
    params(
        ("course_id" = String, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Degrees the course belongs to", body = Vec<DegreeResponse>),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Degrees"
)]
pub async fn get_degrees_for_course(
    State(db): State<DatabaseConnection>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<DegreeResponse>>, ApiError> {
    let degrees = DegreeService::get_degrees_for_course(&db, &course_id).await?;

    Ok(Json(degrees.into_iter().map(DegreeResponse::from).collect()))
}

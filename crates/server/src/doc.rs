use crate::routes::{course, degree, health, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        course::get_courses,
        course::get_course_by_id,
        course::get_requisites,
        course::get_prerequisites,
        course::get_corequisites,
        degree::get_degrees,
        degree::search_degrees,
        degree::get_degree_by_id,
        degree::get_courses_for_degree,
        degree::get_degrees_for_course
    ),
    tags(
        (name = "Courses", description = "Course related endpoints"),
        (name = "Degrees", description = "Degree related endpoints"),
        (name = "Health", description = "Service health endpoints"),
    ),
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "Read-only API over college courses and degree programs",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

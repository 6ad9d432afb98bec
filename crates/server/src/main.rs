use axum::{Router, routing::get};
use database::db::create_pool;
use log::info;
use std::env;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::utils::shutdown::shutdown_signal;

mod doc;
mod dtos;
mod error;
mod routes;
#[cfg(test)]
mod test_support;
mod utils;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = create_pool().await.expect("Failed to connect to database");

    let app = Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/courses", get(routes::course::get_courses))
        .route("/courses/{course_id}", get(routes::course::get_course_by_id))
        .route(
            "/courses/{course_id}/requisites",
            get(routes::course::get_requisites),
        )
        .route(
            "/courses/{course_id}/prerequisites",
            get(routes::course::get_prerequisites),
        )
        .route(
            "/courses/{course_id}/corequisites",
            get(routes::course::get_corequisites),
        )
        .route(
            "/courses/{course_id}/degrees",
            get(routes::degree::get_degrees_for_course),
        )
        .route("/degrees", get(routes::degree::get_degrees))
        .route("/degrees/search", get(routes::degree::search_degrees))
        .route("/degrees/{degree_id}", get(routes::degree::get_degree_by_id))
        .route(
            "/degrees/{degree_id}/courses",
            get(routes::degree::get_courses_for_degree),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(db);

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_owned());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

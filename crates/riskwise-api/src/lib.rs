//! riskwise-api
//!
//! Stateless HTTP surface over the scoring engine. Persistence, auth, and
//! chart rendering live in the surrounding web application; this service
//! only computes.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;

pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Question catalog (public schema data)
        .route("/questions", get(routes::questions::list_questions))
        .route("/questions/{key}", get(routes::questions::get_question_detail))
        // Scoring
        .route("/assessments/score", post(routes::assessments::score_assessment))
        .layer(cors)
}

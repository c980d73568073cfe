pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{auth, chat, comments, community, helpdesk, jobs, prediction, resume, roadmap};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment + prediction
        .route("/api/v1/predict", post(prediction::handlers::handle_predict))
        // Roadmaps
        .route(
            "/api/v1/roadmap",
            post(roadmap::handlers::handle_generate_roadmap)
                .get(roadmap::handlers::handle_get_active_roadmap),
        )
        // Resume analysis
        .route(
            "/api/v1/resume/analyze",
            post(resume::handlers::handle_analyze_resume),
        )
        // Accounts
        .route("/api/v1/auth/register", post(auth::handlers::handle_register))
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        .route("/api/v1/auth/me", get(auth::handlers::handle_me))
        // Phase comments
        .route(
            "/api/v1/comments",
            post(comments::handle_create_comment),
        )
        .route(
            "/api/v1/comments/:phase_id",
            get(comments::handle_get_comments),
        )
        // Community chat
        .route(
            "/api/v1/community/send",
            post(community::handlers::handle_send_message),
        )
        .route(
            "/api/v1/community/messages/:channel",
            get(community::handlers::handle_get_messages),
        )
        .route(
            "/api/v1/community/react",
            post(community::handlers::handle_react),
        )
        // Help desk
        .route(
            "/api/v1/helpdesk/ticket",
            post(helpdesk::handle_create_ticket),
        )
        // Jobs
        .route("/api/v1/jobs/match", get(jobs::handlers::handle_job_matches))
        .route("/api/v1/jobs/companies", get(jobs::handlers::handle_companies))
        // Chat assistant
        .route("/api/v1/chat", post(chat::handlers::handle_chat))
        .with_state(state)
}

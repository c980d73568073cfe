//! Help-desk tickets. Creation logs a structured notification line in place
//! of an outbound email integration.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::helpdesk::HelpDeskTicket;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub name: String,
    pub email: String,
    pub issue_type: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CreateTicketResponse {
    pub success: bool,
    pub message: String,
    pub ticket_id: Uuid,
}

/// POST /api/v1/helpdesk/ticket
pub async fn handle_create_ticket(
    State(state): State<AppState>,
    Json(req): Json<CreateTicketRequest>,
) -> Result<Json<CreateTicketResponse>, AppError> {
    for (value, field) in [
        (&req.name, "name"),
        (&req.email, "email"),
        (&req.issue_type, "issue_type"),
        (&req.description, "description"),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }

    let ticket: HelpDeskTicket = sqlx::query_as(
        r#"
        INSERT INTO help_desk_tickets (name, email, issue_type, description)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&req.name)
    .bind(&req.email)
    .bind(&req.issue_type)
    .bind(&req.description)
    .fetch_one(&state.db)
    .await?;

    info!(
        ticket_id = %ticket.id,
        email = %ticket.email,
        issue_type = %ticket.issue_type,
        "support ticket created"
    );

    Ok(Json(CreateTicketResponse {
        success: true,
        message: "Your issue has been submitted successfully.".to_string(),
        ticket_id: ticket.id,
    }))
}

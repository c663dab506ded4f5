use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::concierge;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let today = state.today();

    let reply = {
        let db = state.db.lock().unwrap();
        concierge::answer(&db, today, &req.message)?
    };

    Ok(Json(ChatResponse { reply }))
}

#[derive(Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}

// GET /api/greeting, the opening line for the chat front-end.
pub async fn greeting(State(state): State<Arc<AppState>>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: state.greetings.random_greeting().to_string(),
    })
}

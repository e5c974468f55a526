//! Thread and reply handlers for the Web API.
//!
//! Operations that change a thread's state answer with a plain-text
//! outcome (`success`, `incorrect password`, `reported`); everything else
//! answers with JSON views.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::board::{BoardService, ThreadView};
use crate::web::dto::{
    CreateReplyRequest, CreateThreadRequest, DeleteReplyRequest, DeleteThreadRequest,
    ReportReplyRequest, ReportThreadRequest, ThreadQuery, ValidatedJson, ValidatedQuery,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/threads/:board - Start a thread.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateThreadRequest>,
) -> Result<Json<ThreadView>, ApiError> {
    let service = BoardService::new(&state.db);
    let thread = service
        .create_thread(&board, &req.text, &req.delete_password)
        .await?;
    Ok(Json(thread))
}

/// GET /api/threads/:board - List the most recently bumped threads.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadView>>, ApiError> {
    let service = BoardService::new(&state.db);
    Ok(Json(service.list_recent_threads(&board).await?))
}

/// DELETE /api/threads/:board - Delete a thread with its password.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    ValidatedJson(req): ValidatedJson<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(&state.db);
    let outcome = service
        .delete_thread(req.thread_id, &req.delete_password)
        .await?;
    Ok(outcome.as_str())
}

/// PUT /api/threads/:board - Report a thread.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    ValidatedJson(req): ValidatedJson<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(&state.db);
    Ok(service.report_thread(req.thread_id).await?.as_str())
}

/// POST /api/replies/:board - Reply to a thread.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateReplyRequest>,
) -> Result<Json<ThreadView>, ApiError> {
    let service = BoardService::new(&state.db);
    let thread = service
        .create_reply(&board, req.thread_id, &req.text, &req.delete_password)
        .await?;
    Ok(Json(thread))
}

/// GET /api/replies/:board?thread_id= - Get a thread with all replies.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    ValidatedQuery(query): ValidatedQuery<ThreadQuery>,
) -> Result<Json<ThreadView>, ApiError> {
    let service = BoardService::new(&state.db);
    Ok(Json(service.get_thread(query.thread_id).await?))
}

/// DELETE /api/replies/:board - Delete a reply with its password.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    ValidatedJson(req): ValidatedJson<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(&state.db);
    let outcome = service
        .delete_reply(req.thread_id, req.reply_id, &req.delete_password)
        .await?;
    Ok(outcome.as_str())
}

/// PUT /api/replies/:board - Report a reply.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(_board): Path<String>,
    ValidatedJson(req): ValidatedJson<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    let service = BoardService::new(&state.db);
    let outcome = service.report_reply(req.thread_id, req.reply_id).await?;
    Ok(outcome.as_str())
}

//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::{not_blank, reply_text};

/// Body of `POST /api/threads/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(custom(function = "not_blank"))]
    pub text: String,
    #[validate(custom(function = "not_blank"))]
    pub delete_password: String,
}

/// Body of `DELETE /api/threads/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteThreadRequest {
    pub thread_id: i64,
    #[validate(custom(function = "not_blank"))]
    pub delete_password: String,
}

/// Body of `PUT /api/threads/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportThreadRequest {
    pub thread_id: i64,
}

/// Body of `POST /api/replies/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReplyRequest {
    pub thread_id: i64,
    #[validate(custom(function = "reply_text"))]
    pub text: String,
    #[validate(custom(function = "not_blank"))]
    pub delete_password: String,
}

/// Query of `GET /api/replies/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct ThreadQuery {
    pub thread_id: i64,
}

/// Body of `DELETE /api/replies/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteReplyRequest {
    pub thread_id: i64,
    pub reply_id: i64,
    #[validate(custom(function = "not_blank"))]
    pub delete_password: String,
}

/// Body of `PUT /api/replies/:board`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReportReplyRequest {
    pub thread_id: i64,
    pub reply_id: i64,
}

use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;

use crate::modules::email_signups::use_cases::sign_up::handler::SignUpError;
use crate::modules::email_signups::use_cases::sign_up::schema::{
    ValidationError, ValidationIssue,
};
use crate::shell::state::AppState;

pub const SIGNED_UP_MESSAGE: &str = "Successfully signed up!";
pub const INVALID_EMAIL_ERROR: &str = "Invalid email address";
pub const DUPLICATE_EMAIL_ERROR: &str = "This email is already registered";
pub const INTERNAL_ERROR: &str = "Failed to sign up. Please try again.";

#[derive(Serialize)]
pub struct SignupSummary {
    pub id: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub message: &'static str,
    pub signup: SignupSummary,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationIssue>>,
}

impl ErrorResponse {
    fn message(error: &'static str) -> Self {
        Self {
            error,
            details: None,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return invalid_input(ValidationError::invalid_json(rejection.body_text()))
                .into_response();
        }
    };

    match state.sign_up_handler.handle(&body).await {
        Ok(signup) => (
            StatusCode::CREATED,
            Json(SignUpResponse {
                message: SIGNED_UP_MESSAGE,
                signup: SignupSummary {
                    id: signup.id,
                    email: signup.email,
                },
            }),
        )
            .into_response(),
        Err(SignUpError::Validation(error)) => invalid_input(error).into_response(),
        Err(SignUpError::DuplicateEmail) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message(DUPLICATE_EMAIL_ERROR)),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(error = %error, "email signup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::message(INTERNAL_ERROR)),
            )
                .into_response()
        }
    }
}

fn invalid_input(error: ValidationError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: INVALID_EMAIL_ERROR,
            details: Some(error.issues),
        }),
    )
}

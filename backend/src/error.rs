//! Error handling for the Travel Budget & Weather planner
//!
//! Provides consistent error responses in English and Japanese

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::DomainError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        message_ja: String,
    },

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_ja: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Weather API error ({status:?}): {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation error for a single field
    pub fn invalid(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            message_ja: japanese_message(message),
        }
    }
}

/// Japanese wording for the validation messages raised by the shared crate
fn japanese_message(message: &str) -> String {
    let ja = match message {
        "Invalid email format" => "メールアドレスの形式が正しくありません",
        "Password is required" => "パスワードを入力してください",
        "Password must be at least 6 characters" => "パスワードは6文字以上で入力してください",
        "Username is required" => "ユーザー名を入力してください",
        "Username must be between 2 and 50 characters" => {
            "ユーザー名は2文字以上50文字以下で入力してください"
        }
        "Title is required" => "タイトルを入力してください",
        "Title must be at most 100 characters" => "タイトルは100文字以内で入力してください",
        "Budget cannot be negative" => "予算は0以上で入力してください",
        "Amount cannot be negative" => "金額は0以上で入力してください",
        "Budget is too large" => "予算が大きすぎます",
        "Amount is too large" => "金額が大きすぎます",
        "End date must be on or after the start date" => {
            "終了日は開始日以降の日付を指定してください"
        }
        "Unknown region" => "都道府県が正しくありません",
        "Unknown city for region" => "選択された都道府県に該当する市区町村がありません",
        "City name does not match the catalog" => "市区町村名が正しくありません",
        other => return format!("入力内容が正しくありません: {}", other),
    };
    ja.to_string()
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => AppError::invalid(field, message),
            DomainError::MalformedFeed { .. } => AppError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_ja: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl ErrorDetail {
    fn new(code: &str, message_en: impl Into<String>, message_ja: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message_en: message_en.into(),
            message_ja: message_ja.into(),
            field: None,
            upstream_status: None,
        }
    }

    fn with_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new(
                    "INVALID_CREDENTIALS",
                    "Invalid email or password",
                    "メールアドレスまたはパスワードが正しくありません",
                ),
            ),
            AppError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new(
                    "TOKEN_EXPIRED",
                    "Token has expired",
                    "トークンの有効期限が切れています",
                ),
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("INVALID_TOKEN", "Invalid token", "トークンが無効です"),
            ),
            AppError::Unauthorized { message, message_ja } => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::new("UNAUTHORIZED", message.clone(), message_ja.clone()),
            ),
            AppError::Validation {
                field,
                message,
                message_ja,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("VALIDATION_ERROR", message.clone(), message_ja.clone())
                    .with_field(field),
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new(
                    "VALIDATION_ERROR",
                    msg.clone(),
                    format!("リクエストの内容が正しくありません: {}", msg),
                ),
            ),
            AppError::DuplicateEntry(field) => (
                StatusCode::CONFLICT,
                ErrorDetail::new(
                    "DUPLICATE_ENTRY",
                    format!("A record with this {} already exists", field),
                    format!("この{}は既に登録されています", field),
                )
                .with_field(field),
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new(
                    "NOT_FOUND",
                    format!("{} not found", resource),
                    format!("{}が見つかりません", resource),
                ),
            ),
            AppError::Upstream { status, message } => {
                let mut detail = ErrorDetail::new(
                    "WEATHER_API_ERROR",
                    format!("Weather service error: {}", message),
                    "天気情報の取得に失敗しました",
                );
                detail.upstream_status = *status;
                (StatusCode::BAD_GATEWAY, detail)
            }
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new(
                    "CONFIGURATION_ERROR",
                    format!("Configuration error: {}", msg),
                    "サーバーの設定に問題があります",
                ),
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new(
                    "DATABASE_ERROR",
                    "A database error occurred",
                    "データベースエラーが発生しました",
                ),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new(
                    "INTERNAL_ERROR",
                    msg.clone(),
                    "サーバー内部でエラーが発生しました",
                ),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

//! # 애플리케이션 에러 처리
//!
//! 사용자 RPC 파이프라인 전 계층이 공유하는 닫힌 에러 분류입니다.
//! 각 계층은 에러를 그대로 전달하거나 문맥을 덧붙여 감쌀 뿐, 버리지 않습니다.
//!
//! ## 에러 → HTTP 상태 매핑
//!
//! | AppError | HTTP Status | 발생 계층 |
//! |----------|-------------|-----------|
//! | `InvalidRequest` | 400 Bad Request | Handler (요청 형태 검증) |
//! | `NotFound` | 404 Not Found | Repository |
//! | `DuplicateEmail` | 409 Conflict | UseCase `create_user` |
//! | `EmailConflict` | 409 Conflict | UseCase `update_user` |
//! | `Persistence` | 500 Internal Server Error | Repository |
//! | `UpdateFailed` | 500 Internal Server Error | UseCase `update_user` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! match usecase.get_user(id).await {
//!     Ok(user) => println!("{}", user.name),
//!     Err(AppError::NotFound(msg)) => println!("없음: {}", msg),
//!     Err(e) => return Err(e),
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 문자열 비교나 센티널 값 대신 variant로 구조적 매칭을 합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 필드가 비어 있거나 ID 형식이 잘못된 요청 (재시도 불가)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// ID 또는 이메일에 해당하는 레코드가 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 생성 시 이메일 유일성 위반
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// 수정 시 다른 사용자가 이미 해당 이메일을 소유함
    ///
    /// `DuplicateEmail`과 같은 불변식이지만 호출 지점이 다릅니다.
    #[error("Email conflict: {0}")]
    EmailConflict(String),

    /// 저장소(Persistence Provider) 실패. 원인 메시지를 포함합니다.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// 수정 단계에서 발생한 하위 에러를 감싼 것
    #[error("Update failed: {0}")]
    UpdateFailed(#[source] Box<AppError>),
}

impl AppError {
    /// 에러 종류를 나타내는 짧은 코드 문자열
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::NotFound(_) => "not_found",
            AppError::DuplicateEmail(_) => "duplicate_email",
            AppError::EmailConflict(_) => "email_conflict",
            AppError::Persistence(_) => "persistence_error",
            AppError::UpdateFailed(_) => "update_failed",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail(_) | AppError::EmailConflict(_) => StatusCode::CONFLICT,
            AppError::Persistence(_) | AppError::UpdateFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        }))
    }
}

/// 상태 메시지를 함께 돌려주는 RPC 실패
///
/// 핸들러는 실패 시에도 구조화된 `status`를 반환하므로, 호출자는
/// "설명과 함께 거절됨"과 "전송 계층 실패"를 구분할 수 있습니다.
#[derive(Error, Debug)]
#[error("{status}")]
pub struct RpcFailure {
    /// 클라이언트에게 돌려줄 상태 문자열
    pub status: String,
    /// 실패의 원인
    #[source]
    pub error: AppError,
}

impl RpcFailure {
    /// `"{prefix}: {error}"` 형태의 상태 메시지를 가진 실패를 생성합니다.
    pub fn new(prefix: &str, error: AppError) -> Self {
        Self {
            status: format!("{}: {}", prefix, error),
            error,
        }
    }
}

impl ResponseError for RpcFailure {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "status": self.status,
            "error": self.error.kind(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러를 `AppError::Persistence`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 메시지와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저로 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Persistence(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::Persistence(format!("{}: {}", f(), e)))
    }
}

//! 단일 사용자 조회/삭제 요청 DTO
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::entities::users::user::UserId;

/// `GetUser`, `DeleteUser` 요청 메시지 (ID는 10진수 문자열)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SingleUserRequest {
    #[serde(default)]
    pub id: String,
}

impl SingleUserRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// 문자열 ID를 `UserId`로 파싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRequest` - 숫자가 아닌 ID
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.id
            .parse::<UserId>()
            .map_err(|e| AppError::InvalidRequest(format!("invalid user id '{}': {}", self.id, e)))
    }
}

/// `GetUsersList` 요청 메시지 (필드 없음)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Empty {}

//! 사용자 수정 요청 DTO
//!
//! 다른 메시지와 달리 `id`가 정수로 전달됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::user::{User, UserId};

/// 기존 사용자의 이름/이메일을 덮어쓰는 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 수정할 사용자의 ID
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
}

impl UpdateUserRequest {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<UpdateUserRequest> for User {
    fn from(request: UpdateUserRequest) -> Self {
        User::with_id(UserId(request.id), request.name, request.email)
    }
}

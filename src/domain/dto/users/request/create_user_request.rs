//! 사용자 생성 요청 DTO
//!
//! `CreateUser` RPC의 요청 메시지입니다.
//! 필수 필드 검증은 핸들러에서 유스케이스 호출 전에 수행됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::user::User;

/// 새 사용자 생성을 위한 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름 (비어 있으면 안 됨)
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// 사용자 이메일 (비어 있으면 안 됨)
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        User::new(request.name, request.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_fail_validation() {
        assert!(CreateUserRequest::new("", "a@x").validate().is_err());
        assert!(CreateUserRequest::new("A", "").validate().is_err());
        assert!(CreateUserRequest::new("A", "a@x").validate().is_ok());
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(request.email, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_maps_to_candidate_without_id() {
        let user = User::from(CreateUserRequest::new("Ada", "ada@x.com"));
        assert_eq!(user.id, None);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@x.com");
    }
}

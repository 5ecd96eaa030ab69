//! 상태 문자열 응답 DTO
use serde::{Deserialize, Serialize};

/// `CreateUser`, `UpdateUser`, `DeleteUser`의 응답 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: String,
}

impl Response {
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into() }
    }
}

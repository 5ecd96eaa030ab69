use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// ID는 10진수 문자열로 다시 직렬화됩니다. 타임스탬프는 노출하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email, .. } = user;

        Self {
            id: id.map(|id| id.to_string()).unwrap_or_default(),
            name,
            email,
        }
    }
}

/// 사용자 목록 응답 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersList {
    pub users: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersList {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

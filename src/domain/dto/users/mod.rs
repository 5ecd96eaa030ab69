//! 사용자 RPC 요청/응답 메시지
//!
//! | RPC | 요청 | 응답 |
//! |-----|------|------|
//! | `CreateUser` | [`CreateUserRequest`] | [`Response`] |
//! | `GetUser` | [`SingleUserRequest`] | [`UserResponse`] |
//! | `GetUsersList` | [`Empty`] | [`UsersList`] |
//! | `UpdateUser` | [`UpdateUserRequest`] | [`Response`] |
//! | `DeleteUser` | [`SingleUserRequest`] | [`Response`] |
//!
//! ID는 Get/Delete 요청과 응답에서는 문자열, Update 요청에서는 정수입니다.
//! 기존 클라이언트와의 호환을 위해 이 비대칭을 그대로 유지합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

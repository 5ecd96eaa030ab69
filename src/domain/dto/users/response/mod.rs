//! 사용자 RPC 응답 메시지

pub mod user_response;
pub mod status_response;

pub use user_response::{UserResponse, UsersList};
pub use status_response::Response;

//! 사용자 RPC 요청 메시지

pub mod create_user_request;
pub mod update_user_request;
pub mod single_user_request;

pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;
pub use single_user_request::{Empty, SingleUserRequest};

//! RPC 메시지 DTO 모듈

pub mod users;

pub use users::*;

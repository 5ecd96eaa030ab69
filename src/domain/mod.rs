//! # Domain Layer
//!
//! 사용자 엔티티와 RPC 메시지(DTO)를 정의합니다.
//!
//! - [`entities`] - 저장소와 유스케이스가 다루는 `User` 엔티티
//! - [`dto`] - 전송 계층이 주고받는 요청/응답 메시지

pub mod entities;
pub mod dto;

pub use entities::{User, UserId};

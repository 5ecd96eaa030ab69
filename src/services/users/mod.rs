//! 사용자 관리 유스케이스 모듈
//!
//! 이메일 유일성과 존재 확인 같은 비즈니스 규칙을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{UserService, UserUseCase};
//!
//! let usecase = UserService::new(repo);
//! let user = usecase.create_user(User::new("Ada", "ada@x.com")).await?;
//! ```

pub mod user_service;

pub use user_service::{UserService, UserUseCase};

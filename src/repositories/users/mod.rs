//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 계약과 저장소 기반 구현
//! [`StoreUserRepository`](user_repo::StoreUserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::MemoryUserStore;
//! use crate::repositories::users::user_repo::{StoreUserRepository, UserRepository};
//!
//! let repo = StoreUserRepository::new(Arc::new(MemoryUserStore::new()));
//! let user = repo.get_user_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::{StoreUserRepository, UserRepository};

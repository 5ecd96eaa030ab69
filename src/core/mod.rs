//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 에러 타입과 의존성 조립 지점을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 닫힌 에러 분류 (`InvalidRequest`, `NotFound`, `DuplicateEmail`,
//!   `EmailConflict`, `Persistence`, `UpdateFailed`)
//! - **RpcFailure**: 상태 메시지를 함께 돌려주는 RPC 실패
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 하위 에러에 문맥을 붙여 `Persistence`로 변환
//!
//! ### [`registry`] - 의존성 조립
//! - `build_user_handler`: 저장소 → 리포지토리 → 유스케이스 → 핸들러
//!
//! ## 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorContext};
//!
//! let users = store.scan_all().await.context("failed to list users")?;
//! let user = users.into_iter().next()
//!     .ok_or_else(|| AppError::NotFound("no users".to_string()))?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;

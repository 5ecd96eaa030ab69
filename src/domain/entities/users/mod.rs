//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{User, UserId};
//!
//! // 저장 전 후보 사용자 (ID는 저장소가 할당)
//! let candidate = User::new("Ada", "ada@x.com");
//!
//! // 수정 요청용 사용자 (호출자가 ID 지정)
//! let update = User::with_id(UserId(1), "Ada L.", "ada@x.com");
//! ```

pub mod user;

pub use user::{User, UserId};

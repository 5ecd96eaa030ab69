//! # RPC Handlers Module
//!
//! 외부 RPC 표면을 담당하는 핸들러 계층입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (JSON-over-HTTP RPC)
//! └─────────────────────┬───────────────────────┘
//!                       │ Request/Response 메시지
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증, 메시지 변환          ← Handler Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 사용자 유스케이스                   ← UseCase Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Stores - 레코드 보관                          ← Persistence Provider
//! └─────────────────────────────────────────────┘
//! ```
//!
//! - [`user_handler`] - 전송 계층과 무관한 [`UserHandler`](user_handler::UserHandler)
//! - [`users`] - actix-web 엔드포인트 함수

pub mod user_handler;
pub mod users;

pub use user_handler::UserHandler;

//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env` 파일은 바이너리 시작 시 `PROFILE`에 따라 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소 설정
//! - [`rate_limit_config`] - 요청 속도 제한 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, StoreConfig};
//!
//! let env = Environment::current();
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let backend = StoreConfig::backend();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! export STORE_BACKEND="mongodb"     # memory (기본값), mongodb
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service"
//!
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! 잘못된 값은 경고 로그와 함께 기본값으로 대체됩니다.

pub mod data_config;
pub mod rate_limit_config;

pub use data_config::*;
pub use rate_limit_config::*;

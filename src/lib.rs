//! 사용자 관리 RPC 서비스
//!
//! 사용자 레코드(이름, 이메일)를 생성, 조회, 목록 조회, 수정, 삭제하는
//! 계층형 서비스입니다. 이메일은 사용자 간에 유일합니다.
//!
//! # Features
//!
//! - **RPC 핸들러**: JSON-over-HTTP로 노출되는 다섯 가지 사용자 RPC
//! - **유스케이스**: 이메일 유일성, 존재 확인, 수정 실패 감싸기
//! - **리포지토리**: 저장소 부재를 `NotFound`로 변환하는 데이터 액세스 계약
//! - **저장소**: 인메모리(기본값) 또는 MongoDB
//! - **생성자 주입**: 전역 상태 없이 trait 객체로 조립
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /user.UserService/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 메시지 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 사용자 유스케이스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Memory / MongoDB│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_rpc_service::core::registry::build_user_handler;
//! use user_rpc_service::db::MemoryUserStore;
//! use user_rpc_service::domain::dto::users::request::CreateUserRequest;
//!
//! let handler = build_user_handler(Arc::new(MemoryUserStore::new()));
//! let response = handler.create_user(CreateUserRequest::new("Ada", "ada@example.com")).await?;
//! assert_eq!(response.status, "User Created Successfully");
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;

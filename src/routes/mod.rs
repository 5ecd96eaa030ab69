//! API 라우트 설정 모듈
//!
//! 사용자 RPC 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /user.UserService/*` - 사용자 RPC ([`handlers::users`] 참고)
//!
//! 라우트는 [`UserHandler`](crate::handlers::UserHandler)가
//! `web::Data`로 등록되어 있다고 가정합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let handler = build_user_handler(Arc::new(MemoryUserStore::new()));
//! let app = App::new()
//!     .app_data(web::Data::new(handler))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// RPC 서비스 경로 접두어
pub const USER_SERVICE_SCOPE: &str = "/user.UserService";

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 잘못된 JSON 본문은 InvalidRequest로 응답
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    );

    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 RPC 라우트를 설정합니다
///
/// - `POST /user.UserService/CreateUser`
/// - `POST /user.UserService/GetUser`
/// - `POST /user.UserService/GetUsersList`
/// - `POST /user.UserService/UpdateUser`
/// - `POST /user.UserService/DeleteUser`
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(USER_SERVICE_SCOPE)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::get_users_list)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_rpc_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

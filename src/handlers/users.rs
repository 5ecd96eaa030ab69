//! # User RPC HTTP Endpoints
//!
//! [`UserHandler`]의 다섯 RPC를 JSON-over-HTTP로 노출합니다.
//! 모든 엔드포인트는 `POST` 메서드와 JSON 본문을 사용하며, 경로는
//! `/user.UserService/{Method}` 형태입니다.
//!
//! | 경로 | 요청 | 응답 |
//! |------|------|------|
//! | `POST /user.UserService/CreateUser` | `{name, email}` | `{status}` |
//! | `POST /user.UserService/GetUser` | `{id}` | `{id, name, email}` |
//! | `POST /user.UserService/GetUsersList` | `{}` | `{users: [...]}` |
//! | `POST /user.UserService/UpdateUser` | `{id, name, email}` | `{status}` |
//! | `POST /user.UserService/DeleteUser` | `{id}` | `{status}` |
//!
//! ## 실패 응답
//!
//! 상태 메시지를 갖는 RPC(`CreateUser`, `UpdateUser`, `DeleteUser`)는
//! 실패 시 `{status, error}` 본문을, 나머지는 `{error, message}` 본문을 돌려줍니다.
//! HTTP 상태 코드는 [`AppError`](crate::core::errors::AppError)의 분류를 따릅니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/user.UserService/CreateUser \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"Ada","email":"ada@example.com"}'
//! ```

use actix_web::{post, web, HttpResponse};

use crate::core::errors::{AppError, RpcFailure};
use crate::domain::dto::users::request::{CreateUserRequest, Empty, SingleUserRequest, UpdateUserRequest};
use crate::handlers::user_handler::UserHandler;

#[post("/CreateUser")]
pub async fn create_user(
    handler: web::Data<UserHandler>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, RpcFailure> {
    let response = handler.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/GetUser")]
pub async fn get_user(
    handler: web::Data<UserHandler>,
    payload: web::Json<SingleUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = handler.get_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[post("/GetUsersList")]
pub async fn get_users_list(
    handler: web::Data<UserHandler>,
    payload: web::Json<Empty>,
) -> Result<HttpResponse, AppError> {
    let users = handler.get_users_list(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[post("/UpdateUser")]
pub async fn update_user(
    handler: web::Data<UserHandler>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, RpcFailure> {
    let response = handler.update_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/DeleteUser")]
pub async fn delete_user(
    handler: web::Data<UserHandler>,
    payload: web::Json<SingleUserRequest>,
) -> Result<HttpResponse, RpcFailure> {
    let response = handler.delete_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

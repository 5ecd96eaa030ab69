//! # User RPC Handler
//!
//! 외부 RPC 메시지와 유스케이스의 엔티티 계약 사이의 경계 어댑터입니다.
//!
//! ## 책임
//!
//! - 요청 형태 검증 (`name`, `email` 비어 있음 → `InvalidRequest`, 유스케이스 호출 없음)
//! - 메시지 → [`User`] 변환, [`User`] → 응답 메시지 변환
//! - 에러 → 상태 메시지 변환 ([`RpcFailure`])
//!
//! 핸들러는 호출 범위를 넘는 상태를 갖지 않습니다. 각 호출은 독립적인
//! 요청/응답 한 쌍입니다.
//!
//! ## 상태 메시지
//!
//! | RPC | 성공 | 실패 접두어 |
//! |-----|------|-------------|
//! | `CreateUser` | `User Created Successfully` | `Failed to create user` |
//! | `UpdateUser` | `User updated successfully` | `Failed to update user` |
//! | `DeleteUser` | `User deleted successfully` | `Failed to delete user` |
//!
//! 형태 검증 실패의 접두어는 `bad request`입니다.

use std::sync::Arc;

use log::{error, info, warn};
use validator::Validate;

use crate::core::errors::{AppError, AppResult, RpcFailure};
use crate::domain::dto::users::request::{CreateUserRequest, Empty, SingleUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{Response, UserResponse, UsersList};
use crate::domain::entities::users::user::User;
use crate::services::users::user_service::UserUseCase;

pub const STATUS_CREATED: &str = "User Created Successfully";
pub const STATUS_UPDATED: &str = "User updated successfully";
pub const STATUS_DELETED: &str = "User deleted successfully";
const STATUS_BAD_REQUEST: &str = "bad request";

/// 사용자 RPC 서비스 핸들러
///
/// 생성자로 주입받은 유스케이스 trait 객체에만 의존합니다.
#[derive(Clone)]
pub struct UserHandler {
    usecase: Arc<dyn UserUseCase>,
}

impl UserHandler {
    pub fn new(usecase: Arc<dyn UserUseCase>) -> Self {
        Self { usecase }
    }

    /// `CreateUser` RPC
    ///
    /// # Errors
    ///
    /// * `InvalidRequest` - `name` 또는 `email`이 비어 있음 (유스케이스 미호출)
    /// * `DuplicateEmail` - 이메일이 이미 사용 중
    /// * `Persistence` - 저장소 실패
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<Response, RpcFailure> {
        if let Err(e) = request.validate() {
            warn!("CreateUser 요청 검증 실패: {}", e);
            return Err(RpcFailure::new(
                STATUS_BAD_REQUEST,
                AppError::InvalidRequest(e.to_string()),
            ));
        }

        let candidate = User::from(request);

        match self.usecase.create_user(candidate).await {
            Ok(_) => Ok(Response::new(STATUS_CREATED)),
            Err(e) => {
                error!("CreateUser 실패: {}", e);
                Err(RpcFailure::new("Failed to create user", e))
            }
        }
    }

    /// `GetUser` RPC
    ///
    /// `NotFound`는 변환 없이 그대로 전파됩니다.
    pub async fn get_user(&self, request: SingleUserRequest) -> AppResult<UserResponse> {
        let id = request.user_id()?;
        let user = self.usecase.get_user(id).await?;

        Ok(UserResponse::from(user))
    }

    /// `GetUsersList` RPC
    ///
    /// 사용자가 없으면 빈 목록을 반환합니다.
    pub async fn get_users_list(&self, _request: Empty) -> AppResult<UsersList> {
        let users = self.usecase.get_users_list().await?;
        info!("GetUsersList: {}명", users.len());

        Ok(UsersList::from(users))
    }

    /// `UpdateUser` RPC
    ///
    /// 호출자가 지정한 정수 ID로 사용자를 구성해 유스케이스에 위임합니다.
    pub async fn update_user(&self, request: UpdateUserRequest) -> Result<Response, RpcFailure> {
        if let Err(e) = request.validate() {
            warn!("UpdateUser 요청 검증 실패: {}", e);
            return Err(RpcFailure::new(
                STATUS_BAD_REQUEST,
                AppError::InvalidRequest(e.to_string()),
            ));
        }

        let update = User::from(request);

        match self.usecase.update_user(update).await {
            Ok(()) => Ok(Response::new(STATUS_UPDATED)),
            Err(e) => {
                error!("UpdateUser 실패: {}", e);
                Err(RpcFailure::new("Failed to update user", e))
            }
        }
    }

    /// `DeleteUser` RPC
    pub async fn delete_user(&self, request: SingleUserRequest) -> Result<Response, RpcFailure> {
        let result = match request.user_id() {
            Ok(id) => self.usecase.delete_user(id).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => Ok(Response::new(STATUS_DELETED)),
            Err(e) => {
                error!("DeleteUser 실패: {}", e);
                Err(RpcFailure::new("Failed to delete user", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::core::registry::build_user_handler;
    use crate::db::memory::MemoryUserStore;
    use crate::domain::entities::users::user::UserId;

    fn handler() -> UserHandler {
        build_user_handler(Arc::new(MemoryUserStore::new()))
    }

    /// 호출 횟수만 세는 유스케이스
    #[derive(Default)]
    struct CountingUseCase {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UserUseCase for CountingUseCase {
        async fn create_user(&self, candidate: User) -> AppResult<User> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(candidate)
        }
        async fn get_user(&self, id: UserId) -> AppResult<User> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::NotFound(id.to_string()))
        }
        async fn get_users_list(&self) -> AppResult<Vec<User>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
        async fn update_user(&self, _update: User) -> AppResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        async fn delete_user(&self, _id: UserId) -> AppResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_empty_fields_rejected_before_usecase() {
        let usecase = Arc::new(CountingUseCase::default());
        let handler = UserHandler::new(usecase.clone());

        let missing_name = handler.create_user(CreateUserRequest::new("", "a@x")).await;
        let missing_email = handler.update_user(UpdateUserRequest::new(1, "A", "")).await;

        for result in [missing_name, missing_email] {
            let failure = result.unwrap_err();
            assert!(matches!(failure.error, AppError::InvalidRequest(_)));
            assert!(failure.status.starts_with("bad request"));
        }
        assert_eq!(usecase.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_create_and_get_round_trip() {
        let handler = handler();

        let created = handler.create_user(CreateUserRequest::new("Ada", "ada@x.com")).await.unwrap();
        assert_eq!(created.status, STATUS_CREATED);

        let user = handler.get_user(SingleUserRequest::new("1")).await.unwrap();
        assert_eq!(user, UserResponse {
            id: "1".to_string(),
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
        });
    }

    #[actix_web::test]
    async fn test_duplicate_create_returns_failure_status() {
        let handler = handler();
        handler.create_user(CreateUserRequest::new("A", "a@x")).await.unwrap();

        let failure = handler.create_user(CreateUserRequest::new("B", "a@x")).await.unwrap_err();

        assert!(matches!(failure.error, AppError::DuplicateEmail(_)));
        assert!(failure.status.starts_with("Failed to create user"));
        assert!(failure.status.contains("a@x"));
        assert_eq!(handler.get_users_list(Empty {}).await.unwrap().users.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_missing_user_propagates_not_found() {
        let handler = handler();

        assert!(matches!(
            handler.get_user(SingleUserRequest::new("42")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            handler.get_user(SingleUserRequest::new("forty-two")).await,
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[actix_web::test]
    async fn test_list_maps_every_user() {
        let handler = handler();
        assert!(handler.get_users_list(Empty {}).await.unwrap().users.is_empty());

        handler.create_user(CreateUserRequest::new("A", "a@x")).await.unwrap();
        handler.create_user(CreateUserRequest::new("B", "b@x")).await.unwrap();

        let list = handler.get_users_list(Empty {}).await.unwrap();
        let ids: Vec<&str> = list.users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[actix_web::test]
    async fn test_update_conflict_leaves_records_unchanged() {
        let handler = handler();
        handler.create_user(CreateUserRequest::new("A", "a@x")).await.unwrap();
        handler.create_user(CreateUserRequest::new("B", "b@x")).await.unwrap();

        let failure = handler
            .update_user(UpdateUserRequest::new(1, "A", "b@x"))
            .await
            .unwrap_err();

        assert!(matches!(failure.error, AppError::EmailConflict(_)));
        assert!(failure.status.starts_with("Failed to update user"));
        assert_eq!(handler.get_user(SingleUserRequest::new("1")).await.unwrap().email, "a@x");
    }

    #[actix_web::test]
    async fn test_update_then_get() {
        let handler = handler();
        handler.create_user(CreateUserRequest::new("A", "a@x")).await.unwrap();

        let updated = handler
            .update_user(UpdateUserRequest::new(1, "A2", "a2@x"))
            .await
            .unwrap();
        assert_eq!(updated.status, STATUS_UPDATED);

        let user = handler.get_user(SingleUserRequest::new("1")).await.unwrap();
        assert_eq!((user.name.as_str(), user.email.as_str()), ("A2", "a2@x"));
    }

    #[actix_web::test]
    async fn test_delete_statuses() {
        let handler = handler();
        handler.create_user(CreateUserRequest::new("A", "a@x")).await.unwrap();

        let deleted = handler.delete_user(SingleUserRequest::new("1")).await.unwrap();
        assert_eq!(deleted.status, STATUS_DELETED);

        let failure = handler.delete_user(SingleUserRequest::new("999")).await.unwrap_err();
        assert!(matches!(failure.error, AppError::NotFound(_)));
        assert!(failure.status.starts_with("Failed to delete user"));

        let invalid = handler.delete_user(SingleUserRequest::new("x")).await.unwrap_err();
        assert!(matches!(invalid.error, AppError::InvalidRequest(_)));
    }
}

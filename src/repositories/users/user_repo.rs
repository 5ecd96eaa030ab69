//! # 사용자 리포지토리 구현
//!
//! Persistence Provider([`UserStore`])를 다섯 가지 사용자 연산 계약으로 감쌉니다.
//!
//! ## 특징
//!
//! - **상태 없음**: 캐시를 두지 않으며 모든 상태는 저장소가 소유
//! - **부재의 구분**: 저장소의 `None`을 [`AppError::NotFound`]로 변환
//! - **실패 감싸기**: 저장소 실패는 문맥과 함께 [`AppError::Persistence`]로 변환
//! - **유니크 제약 변환**: 저장소의 이메일 중복 거절은 생성 시 `DuplicateEmail`,
//!   수정 시 `EmailConflict`로 변환

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::store::{StoreError, UserField, UserStore};
use crate::domain::entities::users::user::{User, UserId};

/// 사용자 데이터 액세스 계약
///
/// 유스케이스 계층은 이 trait에만 의존합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    ///
    /// * `Err(AppError::DuplicateEmail)` - 저장소의 유니크 제약에 걸림
    /// * `Err(AppError::Persistence)` - 저장소가 쓰기를 거절함
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// * `Err(AppError::NotFound)` - 해당 ID의 레코드 없음
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// * `Err(AppError::NotFound)` - 해당 이메일의 레코드 없음
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// 전체 사용자 목록. 레코드가 없으면 빈 벡터 (에러 아님)
    async fn get_users_list(&self) -> AppResult<Vec<User>>;

    /// ID로 현재 레코드를 읽고 `name`/`email`을 덮어쓴 뒤 저장합니다.
    async fn update_user(&self, user: User) -> AppResult<()>;

    /// 삭제. 존재하지 않는 ID의 삭제도 이 계층에서는 성공입니다.
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// [`UserStore`] 위에 구현된 기본 리포지토리
pub struct StoreUserRepository {
    store: Arc<dyn UserStore>,
}

impl StoreUserRepository {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn create_user(&self, mut user: User) -> AppResult<User> {
        match self.store.insert(user.clone()).await {
            Ok(id) => {
                user.id = Some(id);
                debug!("사용자 저장 완료: id={}", id);
                Ok(user)
            }
            Err(StoreError::DuplicateEmail(email)) => {
                warn!("저장소가 중복 이메일을 거절했습니다: {}", email);
                Err(AppError::DuplicateEmail(email))
            }
            Err(e) => Err(e).context("unable to create user"),
        }
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.store
            .find_by_id(id)
            .await
            .context("failed to get user")?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.store
            .find_by_field(UserField::Email, email)
            .await
            .with_context(|| format!("failed to look up user by email {}", email))?
            .ok_or_else(|| AppError::NotFound(format!("no user with email {}", email)))
    }

    async fn get_users_list(&self) -> AppResult<Vec<User>> {
        let users = self.store.scan_all().await.context("failed to list users")?;
        debug!("{} users loaded", users.len());
        Ok(users)
    }

    async fn update_user(&self, data: User) -> AppResult<()> {
        let id = data
            .id
            .ok_or_else(|| AppError::InvalidRequest("user id is required for update".to_string()))?;

        let mut user = self.get_user(id).await?;
        user.apply_changes(&data);

        match self.store.overwrite(user).await {
            Ok(()) => Ok(()),
            Err(StoreError::DuplicateEmail(email)) => Err(AppError::EmailConflict(email)),
            Err(StoreError::Missing(id)) => Err(AppError::NotFound(format!("user {} not found", id))),
            Err(e) => Err(e).context("failed to update user"),
        }
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.store
            .delete(id)
            .await
            .with_context(|| format!("failed to delete user {}", id))
    }
}

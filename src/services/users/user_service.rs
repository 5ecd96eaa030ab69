//! # 사용자 관리 유스케이스 구현
//!
//! 레코드 간 불변식을 강제하는 유일한 계층입니다. 모든 연산은 [`UserRepository`]
//! 호출의 조합이며 저장소 세부사항은 이 계층으로 새어 나오지 않습니다.
//!
//! ## 비즈니스 규칙
//!
//! - **이메일 유일성**: 생성/수정 전에 이메일 소유자를 조회
//! - **존재 확인**: 수정/삭제 전에 대상 사용자 조회
//!
//! ## 동시성
//!
//! 확인 후 실행(check-then-act) 패턴이므로 같은 이메일의 동시 생성 두 건이
//! 모두 검사를 통과할 수 있습니다. 이 검사는 최선 노력이며, 최종 방어선은
//! 저장소의 원자적 유니크 제약입니다 ([`crate::db::store`] 참고).
//! 저장소가 거절하면 리포지토리가 같은 에러 종류로 변환해 올려보냅니다.
//!
//! ```text
//! create_user:  get_user_by_email ──found──▶ DuplicateEmail
//!                     │ NotFound
//!                     ▼
//!               repo.create_user
//!
//! update_user:  get_user ──NotFound──▶ NotFound
//!                  │
//!               get_user_by_email ──found(other id)──▶ EmailConflict
//!                  │
//!               repo.update_user ──error──▶ UpdateFailed(cause)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::{User, UserId};
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 유스케이스 계약
///
/// 핸들러 계층은 이 trait에만 의존합니다.
#[async_trait]
pub trait UserUseCase: Send + Sync {
    async fn create_user(&self, candidate: User) -> AppResult<User>;

    async fn get_user(&self, id: UserId) -> AppResult<User>;

    async fn get_users_list(&self) -> AppResult<Vec<User>>;

    async fn update_user(&self, update: User) -> AppResult<()>;

    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// 기본 유스케이스 구현
///
/// 상태를 갖지 않으며, 생성자로 주입받은 리포지토리만 보관합니다.
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserUseCase for UserService {
    /// 새 사용자 생성
    ///
    /// 이메일이 이미 사용 중이면 리포지토리의 생성 연산을 호출하지 않고
    /// `DuplicateEmail`로 실패합니다. 이메일 조회가 `NotFound` 이외의 에러를
    /// 반환하면 그대로 전파합니다.
    async fn create_user(&self, candidate: User) -> AppResult<User> {
        match self.user_repo.get_user_by_email(&candidate.email).await {
            Ok(existing) => {
                warn!(
                    "이메일 중복으로 사용자 생성 거절: {} (기존 id={:?})",
                    candidate.email, existing.id
                );
                return Err(AppError::DuplicateEmail(candidate.email));
            }
            Err(AppError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let created = self.user_repo.create_user(candidate).await?;
        info!("사용자 생성 완료: id={:?}", created.id);

        Ok(created)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.user_repo.get_user(id).await
    }

    async fn get_users_list(&self) -> AppResult<Vec<User>> {
        self.user_repo.get_users_list().await
    }

    /// 사용자 정보 수정
    ///
    /// # 처리 과정
    ///
    /// 1. **존재 확인**: 없으면 `NotFound`
    /// 2. **이메일 확인**: 다른 ID의 사용자가 이미 소유하면 `EmailConflict`.
    ///    자기 자신의 현재 이메일은 충돌이 아닙니다.
    /// 3. **저장**: 실패는 `UpdateFailed`로 감쌉니다. 저장소 유니크 제약에서 온
    ///    `EmailConflict`는 같은 불변식이므로 종류를 유지합니다.
    async fn update_user(&self, update: User) -> AppResult<()> {
        let id = update
            .id
            .ok_or_else(|| AppError::InvalidRequest("user id is required for update".to_string()))?;

        self.user_repo.get_user(id).await?;

        match self.user_repo.get_user_by_email(&update.email).await {
            Ok(owner) if owner.id != Some(id) => {
                warn!(
                    "이메일 충돌로 사용자 수정 거절: id={} email={} (소유자 id={:?})",
                    id, update.email, owner.id
                );
                return Err(AppError::EmailConflict(update.email));
            }
            Ok(_) | Err(AppError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        match self.user_repo.update_user(update).await {
            Ok(()) => {
                info!("사용자 수정 완료: id={}", id);
                Ok(())
            }
            Err(e @ AppError::EmailConflict(_)) => Err(e),
            Err(e) => Err(AppError::UpdateFailed(Box::new(e))),
        }
    }

    /// 사용자 삭제
    ///
    /// 리포지토리의 삭제는 멱등이므로 존재 여부는 여기서 먼저 확인합니다.
    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.get_user(id).await?;

        self.user_repo.delete_user(id).await?;
        info!("사용자 삭제 완료: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::db::memory::MemoryUserStore;
    use crate::repositories::users::user_repo::StoreUserRepository;

    /// 호출 기록을 남기는 리포지토리 래퍼
    struct RecordingRepository {
        inner: StoreUserRepository,
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingRepository {
        fn new() -> Self {
            Self {
                inner: StoreUserRepository::new(Arc::new(MemoryUserStore::new())),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn create_user(&self, user: User) -> AppResult<User> {
            self.record("create_user");
            self.inner.create_user(user).await
        }
        async fn get_user(&self, id: UserId) -> AppResult<User> {
            self.record("get_user");
            self.inner.get_user(id).await
        }
        async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
            self.record("get_user_by_email");
            self.inner.get_user_by_email(email).await
        }
        async fn get_users_list(&self) -> AppResult<Vec<User>> {
            self.record("get_users_list");
            self.inner.get_users_list().await
        }
        async fn update_user(&self, user: User) -> AppResult<()> {
            self.record("update_user");
            self.inner.update_user(user).await
        }
        async fn delete_user(&self, id: UserId) -> AppResult<()> {
            self.record("delete_user");
            self.inner.delete_user(id).await
        }
    }

    fn service() -> (Arc<RecordingRepository>, UserService) {
        let repo = Arc::new(RecordingRepository::new());
        let service = UserService::new(repo.clone());
        (repo, service)
    }

    async fn create(service: &UserService, name: &str, email: &str) -> UserId {
        service
            .create_user(User::new(name, email))
            .await
            .unwrap()
            .id
            .unwrap()
    }

    #[actix_web::test]
    async fn test_round_trip_create_and_get() {
        let (_, service) = service();

        let id = create(&service, "Ada", "ada@x.com").await;
        let user = service.get_user(id).await.unwrap();

        assert_eq!(user.id, Some(id));
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@x.com");
    }

    #[actix_web::test]
    async fn test_duplicate_email_rejected_without_create() {
        let (repo, service) = service();
        create(&service, "A", "a@x").await;

        let result = service.create_user(User::new("B", "a@x")).await;

        assert!(matches!(result, Err(AppError::DuplicateEmail(email)) if email == "a@x"));
        assert_eq!(
            repo.calls(),
            vec!["get_user_by_email", "create_user", "get_user_by_email"]
        );
        assert_eq!(service.get_users_list().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_update_changes_name_and_email() {
        let (_, service) = service();
        let id = create(&service, "A", "a@x").await;

        service.update_user(User::with_id(id, "A2", "a2@x")).await.unwrap();

        let user = service.get_user(id).await.unwrap();
        assert_eq!(user.name, "A2");
        assert_eq!(user.email, "a2@x");
    }

    #[actix_web::test]
    async fn test_update_to_own_email_is_not_a_conflict() {
        let (_, service) = service();
        let id = create(&service, "A", "a@x").await;

        service.update_user(User::with_id(id, "Renamed", "a@x")).await.unwrap();

        assert_eq!(service.get_user(id).await.unwrap().name, "Renamed");
    }

    #[actix_web::test]
    async fn test_update_to_other_users_email_conflicts() {
        let (repo, service) = service();
        let a = create(&service, "A", "a@x").await;
        let b = create(&service, "B", "b@x").await;

        let result = service.update_user(User::with_id(a, "A", "b@x")).await;

        assert!(matches!(result, Err(AppError::EmailConflict(_))));
        assert!(!repo.calls().contains(&"update_user"));
        assert_eq!(service.get_user(a).await.unwrap().email, "a@x");
        assert_eq!(service.get_user(b).await.unwrap().email, "b@x");
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing_user() {
        let (repo, service) = service();

        assert!(matches!(
            service.update_user(User::with_id(UserId(999), "A", "a@x")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_user(UserId(999)).await,
            Err(AppError::NotFound(_))
        ));

        let calls = repo.calls();
        assert!(!calls.contains(&"update_user"));
        assert!(!calls.contains(&"delete_user"));
        assert!(service.get_users_list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_update_without_id_is_invalid() {
        let (_, service) = service();

        assert!(matches!(
            service.update_user(User::new("A", "a@x")).await,
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete_removes_user() {
        let (repo, service) = service();
        let id = create(&service, "A", "a@x").await;

        service.delete_user(id).await.unwrap();

        assert!(matches!(service.get_user(id).await, Err(AppError::NotFound(_))));
        assert!(repo.calls().contains(&"delete_user"));
    }

    #[actix_web::test]
    async fn test_empty_list() {
        let (_, service) = service();
        assert!(service.get_users_list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_persistence_failure_propagates_from_email_lookup() {
        use crate::repositories::users::user_repo::tests::UnavailableStore;

        let repo = Arc::new(StoreUserRepository::new(Arc::new(UnavailableStore)));
        let service = UserService::new(repo);

        assert!(matches!(
            service.create_user(User::new("A", "a@x")).await,
            Err(AppError::Persistence(_))
        ));
    }

    /// 저장 단계에서만 실패하는 리포지토리
    struct FailingUpdateRepository {
        inner: StoreUserRepository,
    }

    #[async_trait]
    impl UserRepository for FailingUpdateRepository {
        async fn create_user(&self, user: User) -> AppResult<User> {
            self.inner.create_user(user).await
        }
        async fn get_user(&self, id: UserId) -> AppResult<User> {
            self.inner.get_user(id).await
        }
        async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
            self.inner.get_user_by_email(email).await
        }
        async fn get_users_list(&self) -> AppResult<Vec<User>> {
            self.inner.get_users_list().await
        }
        async fn update_user(&self, _user: User) -> AppResult<()> {
            Err(AppError::Persistence("disk full".to_string()))
        }
        async fn delete_user(&self, id: UserId) -> AppResult<()> {
            self.inner.delete_user(id).await
        }
    }

    #[actix_web::test]
    async fn test_update_storage_failure_is_wrapped() {
        let service = UserService::new(Arc::new(FailingUpdateRepository {
            inner: StoreUserRepository::new(Arc::new(MemoryUserStore::new())),
        }));
        let id = create(&service, "A", "a@x").await;

        let result = service.update_user(User::with_id(id, "A2", "a2@x")).await;

        match result {
            Err(AppError::UpdateFailed(cause)) => {
                assert!(matches!(*cause, AppError::Persistence(_)));
            }
            other => panic!("expected UpdateFailed, got {:?}", other),
        }
    }
}

//! # Persistence Provider 계약
//!
//! 리포지토리가 소비하는 저장소 인터페이스입니다. 레코드 저장의 유일한 소유자이며,
//! 동시 요청 사이의 유일한 직렬화 지점입니다.
//!
//! 모든 구현체는 이메일 유일성을 단일 원자적 쓰기 안에서 강제해야 합니다.
//! 유스케이스의 조회-후-쓰기 검사는 최선 노력(best-effort)일 뿐이라,
//! 동시에 들어온 두 요청이 모두 검사를 통과할 수 있기 때문입니다.
//! 충돌은 [`StoreError::DuplicateEmail`]로 보고됩니다.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::users::user::{User, UserId};

/// 저장소 계층 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// 다른 레코드가 이미 같은 이메일을 가지고 있음 (유니크 제약 위반)
    #[error("email already stored: {0}")]
    DuplicateEmail(String),

    /// 덮어쓸 레코드가 존재하지 않음
    #[error("no record with id {0}")]
    Missing(UserId),

    /// ID 없이 덮어쓰기를 시도함
    #[error("record has no id")]
    MissingId,

    /// 백엔드 실패 (연결, 직렬화, 잠금 등)
    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 필드 기반 조회에 사용하는 사용자 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
}

impl UserField {
    /// 저장 문서에서의 필드 이름
    pub fn as_str(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
        }
    }

    /// 레코드에서 해당 필드 값을 읽습니다.
    pub fn value_of(self, user: &User) -> &str {
        match self {
            UserField::Name => &user.name,
            UserField::Email => &user.email,
        }
    }
}

/// 사용자 레코드 저장소 (Persistence Provider)
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 레코드를 저장하고 할당된 ID를 반환합니다. 입력의 `id`는 무시됩니다.
    async fn insert(&self, user: User) -> StoreResult<UserId>;

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// 필드 값이 일치하는 첫 레코드를 찾습니다.
    async fn find_by_field(&self, field: UserField, value: &str) -> StoreResult<Option<User>>;

    /// `user.id`의 레코드 전체를 덮어씁니다.
    async fn overwrite(&self, user: User) -> StoreResult<()>;

    /// 레코드를 삭제합니다. 없는 ID의 삭제도 성공입니다.
    async fn delete(&self, id: UserId) -> StoreResult<()>;

    /// 모든 레코드를 ID 오름차순으로 반환합니다.
    async fn scan_all(&self) -> StoreResult<Vec<User>>;
}

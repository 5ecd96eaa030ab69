//! 인메모리 사용자 저장소
//!
//! 단일 프로세스 배포와 테스트에 사용되는 [`UserStore`] 구현입니다.
//! 모든 쓰기는 하나의 쓰기 잠금 안에서 이루어지므로 이메일 유일성 검사와
//! 쓰기가 원자적으로 수행됩니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use log::debug;

use crate::db::store::{StoreError, StoreResult, UserField, UserStore};
use crate::domain::entities::users::user::{User, UserId};

struct MemoryState {
    next_id: i64,
    records: BTreeMap<UserId, User>,
}

impl MemoryState {
    fn email_taken_by_other(&self, email: &str, id: Option<UserId>) -> bool {
        self.records
            .values()
            .any(|record| record.email == email && record.id != id)
    }
}

/// `RwLock<BTreeMap>` 기반 저장소. ID는 1부터 단조 증가합니다.
pub struct MemoryUserStore {
    state: RwLock<MemoryState>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, mut user: User) -> StoreResult<UserId> {
        let mut state = self.write()?;

        if state.email_taken_by_other(&user.email, None) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let id = UserId(state.next_id);
        state.next_id += 1;
        user.id = Some(id);
        state.records.insert(id, user);

        debug!("memory store: inserted user {}", id);
        Ok(id)
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    async fn find_by_field(&self, field: UserField, value: &str) -> StoreResult<Option<User>> {
        Ok(self
            .read()?
            .records
            .values()
            .find(|record| field.value_of(record) == value)
            .cloned())
    }

    async fn overwrite(&self, user: User) -> StoreResult<()> {
        let id = user.id.ok_or(StoreError::MissingId)?;
        let mut state = self.write()?;

        if !state.records.contains_key(&id) {
            return Err(StoreError::Missing(id));
        }
        if state.email_taken_by_other(&user.email, Some(id)) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        state.records.insert(id, user);
        Ok(())
    }

    async fn delete(&self, id: UserId) -> StoreResult<()> {
        let removed = self.write()?.records.remove(&id);
        debug!("memory store: delete user {} (existed: {})", id, removed.is_some());
        Ok(())
    }

    async fn scan_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.read()?.records.values().cloned().collect())
    }
}

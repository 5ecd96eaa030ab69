//! # MongoDB 사용자 저장소
//!
//! `users` 컬렉션을 백엔드로 하는 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **숫자 ID**: `counters` 컬렉션의 `$inc` + upsert로 단조 증가 ID를 발급
//! - **유니크 인덱스**: `email_unique` 인덱스로 동시 생성/수정 시의 이메일 중복을 원자적으로 차단
//! - **에러 변환**: 중복 키 에러(11000)는 [`StoreError::DuplicateEmail`]로 변환

use async_trait::async_trait;
use futures_util::StreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::store::{StoreError, StoreResult, UserField, UserStore};
use crate::db::Database;
use crate::domain::entities::users::user::{User, UserId};

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 저장소
pub struct MongoUserStore {
    db: Database,
}

impl MongoUserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.db.get_database().collection::<Document>(COUNTERS_COLLECTION)
    }

    /// 컬렉션 인덱스를 생성합니다. 애플리케이션 시작 시 한 번 호출합니다.
    ///
    /// 이미 중복 이메일이 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn ensure_indexes(&self) -> StoreResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.users()
            .create_index(email_index)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        info!("MongoDB 인덱스 확인 완료: {}.{}", self.db.database_name(), USERS_COLLECTION);
        Ok(())
    }

    async fn next_id(&self) -> StoreResult<UserId> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.counters()
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .ok_or_else(|| StoreError::Backend("id counter was not created".to_string()))?;

        counter
            .get_i64("seq")
            .map(UserId)
            .map_err(|e| StoreError::Backend(format!("invalid id counter: {}", e)))
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn translate_write_error(err: MongoError, email: &str) -> StoreError {
    if is_duplicate_key(&err) {
        StoreError::DuplicateEmail(email.to_string())
    } else {
        StoreError::Backend(err.to_string())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, mut user: User) -> StoreResult<UserId> {
        let id = self.next_id().await?;
        user.id = Some(id);

        self.users()
            .insert_one(&user)
            .await
            .map_err(|e| translate_write_error(e, &user.email))?;

        debug!("mongo store: inserted user {}", id);
        Ok(id)
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        self.users()
            .find_one(doc! { "_id": id.value() })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn find_by_field(&self, field: UserField, value: &str) -> StoreResult<Option<User>> {
        let mut filter = Document::new();
        filter.insert(field.as_str(), value);

        self.users()
            .find_one(filter)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn overwrite(&self, user: User) -> StoreResult<()> {
        let id = user.id.ok_or(StoreError::MissingId)?;

        let result = self.users()
            .replace_one(doc! { "_id": id.value() }, &user)
            .await
            .map_err(|e| translate_write_error(e, &user.email))?;

        if result.matched_count == 0 {
            return Err(StoreError::Missing(id));
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> StoreResult<()> {
        let result = self.users()
            .delete_one(doc! { "_id": id.value() })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        debug!("mongo store: delete user {} (deleted: {})", id, result.deleted_count);
        Ok(())
    }

    async fn scan_all(&self) -> StoreResult<Vec<User>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let mut cursor = self.users()
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let mut users = Vec::new();
        while let Some(user) = cursor.next().await {
            match user {
                Ok(user) => users.push(user),
                Err(e) => return Err(StoreError::Backend(e.to_string())),
            }
        }

        Ok(users)
    }
}

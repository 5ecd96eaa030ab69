//! User Entity Implementation
//!
//! 시스템이 관리하는 유일한 엔티티인 사용자 모델입니다.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 저장소가 발급하는 불투명한 숫자 식별자
///
/// 응답 메시지와 Get/Delete 요청에서는 10진수 문자열로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(UserId)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId(value)
    }
}

/// 사용자 엔티티
///
/// `id`는 저장소가 생성 시점에 할당하며 이후 변경되지 않습니다.
/// 수정 가능한 필드는 `name`과 `email` 뿐입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 아직 저장되지 않은 후보 사용자 생성 (ID 미할당)
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 호출자가 지정한 ID를 가진 수정용 사용자 생성
    pub fn with_id(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, email)
        }
    }

    /// 수정 가능한 필드(`name`, `email`)만 덮어씁니다. `id`와 `created_at`은 유지됩니다.
    pub fn apply_changes(&mut self, changes: &User) {
        self.name = changes.name.clone();
        self.email = changes.email.clone();
        self.updated_at = Utc::now();
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

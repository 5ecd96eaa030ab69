//! # Composition Root
//!
//! 계층 간 의존성을 생성자 주입으로 연결하는 조립 지점입니다.
//!
//! ```text
//! Arc<dyn UserStore>
//!        │ StoreUserRepository::new
//!        ▼
//! Arc<dyn UserRepository>
//!        │ UserService::new
//!        ▼
//! Arc<dyn UserUseCase>
//!        │ UserHandler::new
//!        ▼
//! UserHandler
//! ```
//!
//! 전역 상태나 지연 초기화 레지스트리는 두지 않습니다. 필요한 만큼
//! 독립된 그래프를 만들 수 있으므로 테스트마다 새 저장소로 조립합니다.

use std::sync::Arc;

use log::debug;

use crate::db::store::UserStore;
use crate::handlers::user_handler::UserHandler;
use crate::repositories::users::user_repo::{StoreUserRepository, UserRepository};
use crate::services::users::user_service::{UserService, UserUseCase};

/// 저장소 위에 리포지토리, 유스케이스, 핸들러를 차례로 조립합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let handler = build_user_handler(Arc::new(MemoryUserStore::new()));
/// ```
pub fn build_user_handler(store: Arc<dyn UserStore>) -> UserHandler {
    let repository: Arc<dyn UserRepository> = Arc::new(StoreUserRepository::new(store));
    let usecase: Arc<dyn UserUseCase> = Arc::new(UserService::new(repository));

    debug!("user handler graph assembled");
    UserHandler::new(usecase)
}

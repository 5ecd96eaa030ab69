//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소(Persistence Provider)를 안정적인 엔티티 단위 계약으로 감쌉니다.
//! 리포지토리는 생성자로 주입받은 `Arc<dyn UserStore>`만 사용합니다.

pub mod users;

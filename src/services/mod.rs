//! 비즈니스 로직을 담당하는 유스케이스 계층 모듈
//!
//! 서비스는 전역 싱글톤이 아니라 생성자로 리포지토리를 주입받습니다.
//! 핸들러는 구체 타입이 아닌 [`users::UserUseCase`] trait에 의존합니다.

pub mod users;

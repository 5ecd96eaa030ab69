//! 요청 속도 제한 설정
//!
//! `actix-governor` 미들웨어에 넘길 값을 환경 변수에서 읽습니다.

use log::info;

use super::data_config::env_or;

const DEFAULT_PER_SECOND: u64 = 100;
const DEFAULT_BURST_SIZE: u32 = 200;

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// 토큰 보충 주기 (초당 요청 수)
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: DEFAULT_PER_SECOND,
            burst_size: DEFAULT_BURST_SIZE,
        }
    }
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 0은 governor 설정이 거절하므로 1로 올립니다.
    ///
    /// ```bash
    /// # .env.dev
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn load() -> Self {
        let config = Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", DEFAULT_PER_SECOND).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", DEFAULT_BURST_SIZE).max(1),
        };

        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

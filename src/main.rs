//! 사용자 RPC 서비스 메인 애플리케이션
//!
//! 설정에 따라 저장소를 선택하고, 계층을 조립한 뒤
//! Actix-web 기반의 HTTP 서버로 사용자 RPC를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_rpc_service::config::{Environment, RateLimitConfig, ServerConfig, StoreBackend, StoreConfig};
use user_rpc_service::core::registry::build_user_handler;
use user_rpc_service::db::{Database, MemoryUserStore, MongoUserStore, UserStore};
use user_rpc_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 RPC 서비스 시작중... (환경: {:?})", Environment::current());

    let store = initialize_store().await?;
    let handler = web::Data::new(build_user_handler(store));

    info!("✅ 서비스 조립 완료");

    start_http_server(handler).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 잘못된 Rate Limiting 설정 또는 서버 실행 오류
async fn start_http_server(handler: web::Data<user_rpc_service::handlers::UserHandler>) -> io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);
    info!("📍 Health check: http://{}:{}/health", bind_address.0, bind_address.1);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid rate limit configuration"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(handler.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 남김
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_rpc_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 저장소를 초기화합니다
///
/// MongoDB를 선택한 경우 연결을 확인하고 `email_unique` 인덱스를 보장합니다.
/// 실패하면 서버를 시작하지 않습니다.
async fn initialize_store() -> io::Result<Arc<dyn UserStore>> {
    match StoreConfig::backend() {
        StoreBackend::Memory => {
            info!("💾 인메모리 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&StoreConfig::mongodb_uri(), &StoreConfig::database_name())
                .await
                .map_err(|e| {
                    error!("MongoDB 연결 실패: {}", e);
                    io::Error::other(e.to_string())
                })?;

            let store = MongoUserStore::new(database);
            store.ensure_indexes().await.map_err(|e| {
                error!("MongoDB 인덱스 생성 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(store))
        }
    }
}

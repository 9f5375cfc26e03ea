//! 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 조립합니다.
//! MongoDB 연결, 미디어 업로더, JWT 토큰 서비스를 생성자 주입으로 연결합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_multipart::form::tempfile::TempFileConfig;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_service::config::{AppConfig, CorsConfig};
use account_service::core::state::AppState;
use account_service::db::Database;
use account_service::repositories::accounts::MongoAccountStore;
use account_service::routes::configure_all_routes;
use account_service::services::accounts::AccountService;
use account_service::services::auth::{JwtCodec, SystemClock, TokenService};
use account_service::services::media::CloudinaryUploader;
use account_service::utils::password::PasswordHasher;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정 서비스 시작중...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };
    info!("환경: {:?}", config.environment);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.database)
        .await
        .expect("데이터베이스 연결 실패");

    let state = build_state(&config, &database).await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let result = start_http_server(config, state).await;

    database.shutdown().await;
    result
}

/// 저장소와 서비스를 조립합니다
async fn build_state(config: &AppConfig, database: &Database) -> std::io::Result<AppState> {
    let hasher = PasswordHasher::new(&config.password);

    let store = Arc::new(MongoAccountStore::new(database, hasher));
    store
        .create_indexes()
        .await
        .map_err(|e| std::io::Error::other(format!("인덱스 생성 실패: {}", e)))?;

    let codec = Arc::new(JwtCodec::new(config.jwt.clone(), Arc::new(SystemClock)));
    let tokens = Arc::new(TokenService::new(codec, store.clone()));
    let uploader = Arc::new(CloudinaryUploader::new(config.media.clone()));
    let accounts = Arc::new(AccountService::new(
        store,
        tokens,
        uploader,
        hasher,
        config.media.max_file_size,
    ));

    Ok(AppState::new(accounts, config.cookies.clone()))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// SIGINT/SIGTERM을 받으면 진행 중인 요청을 마무리한 뒤 반환합니다.
async fn start_http_server(config: AppConfig, state: AppState) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    std::fs::create_dir_all(&config.media.temp_dir)?;
    let temp_dir = config.media.temp_dir.clone();

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let cors_config = config.cors.clone();
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .app_data(TempFileConfig::default().directory(&temp_dir))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(config.server.workers)
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

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=account_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 쿠키 기반 세션을 위해 자격 증명을 허용하므로 Origin은 명시적으로 나열해야 합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

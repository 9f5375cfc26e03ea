//! # 패스워드 해싱
//!
//! bcrypt 해싱과 검증을 감싸는 얇은 래퍼입니다.
//! 계정 저장소의 생성/비밀번호 변경 경로와 로그인 검증이 같은 인스턴스를 공유합니다.
//! bcrypt는 CPU를 오래 점유하므로 워커 스레드 대신 블로킹 스레드풀에서 실행합니다.

use actix_web::web;

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, raw: &str) -> AppResult<String> {
        let raw = raw.to_string();
        let cost = self.cost;
        let start = std::time::Instant::now();

        let hashed = web::block(move || bcrypt::hash(raw, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 해시 형식이 손상된 경우 `InternalError`를 반환합니다.
    pub async fn verify(&self, raw: &str, hashed: &str) -> AppResult<bool> {
        let raw = raw.to_string();
        let hashed = hashed.to_string();

        web::block(move || bcrypt::verify(raw, &hashed))
            .await
            .context("비밀번호 검증 작업 실패")?
            .context("비밀번호 검증 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_hash_and_verify() {
        let hasher = PasswordHasher::with_cost(4);
        let hashed = hasher.hash("secret1").await.unwrap();

        assert_ne!(hashed, "secret1");
        assert!(hasher.verify("secret1", &hashed).await.unwrap());
        assert!(!hasher.verify("wrong", &hashed).await.unwrap());
    }

    #[actix_web::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = PasswordHasher::with_cost(4);
        assert!(hasher.verify("secret1", "not-a-bcrypt-hash").await.is_err());
    }
}

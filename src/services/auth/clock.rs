//! 토큰 발급/검증에 사용하는 시계
//!
//! 테스트에서는 고정 시계를 주입하여 만료 시점을 결정적으로 검증합니다.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub use fixed::FixedClock;

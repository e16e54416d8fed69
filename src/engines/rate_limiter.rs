// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;

use crate::config::settings::RateLimitingSettings;

/// 限流器配置错误
#[derive(Error, Debug)]
pub enum RateLimitError {
    /// 配额参数无效
    #[error("Invalid quota: {0}")]
    InvalidQuota(String),
}

/// 请求限流器特质
///
/// 在发出网络请求前调用 `acquire`，只会延迟、不会拒绝
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// 等待直到获得一个令牌
    async fn acquire(&self);
}

/// 令牌桶限流器
///
/// 进程级配额：容量为 `capacity`，每个 `interval` 补充一个令牌，不区分目标主机
pub struct TokenBucketLimiter {
    inner: DefaultDirectRateLimiter,
}

impl TokenBucketLimiter {
    /// 创建新的令牌桶限流器
    ///
    /// # 参数
    ///
    /// * `capacity` - 桶容量（突发上限）
    /// * `interval` - 补充一个令牌的间隔
    ///
    /// # 返回值
    ///
    /// * `Ok(TokenBucketLimiter)` - 限流器
    /// * `Err(RateLimitError)` - 容量为0或间隔为0
    pub fn new(capacity: u32, interval: Duration) -> Result<Self, RateLimitError> {
        let burst = NonZeroU32::new(capacity)
            .ok_or_else(|| RateLimitError::InvalidQuota("capacity must be > 0".to_string()))?;
        let quota = Quota::with_period(interval)
            .ok_or_else(|| RateLimitError::InvalidQuota("interval must be > 0".to_string()))?
            .allow_burst(burst);

        Ok(Self {
            inner: governor::RateLimiter::direct(quota),
        })
    }
}

#[async_trait]
impl RateLimiter for TokenBucketLimiter {
    async fn acquire(&self) {
        self.inner.until_ready().await;
    }
}

/// 无延迟限流器，用于测试或关闭限流时
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRateLimiter;

#[async_trait]
impl RateLimiter for NoopRateLimiter {
    async fn acquire(&self) {}
}

/// 根据配置构建限流器
pub fn create_rate_limiter(
    settings: &RateLimitingSettings,
) -> Result<Box<dyn RateLimiter>, RateLimitError> {
    if !settings.enabled {
        tracing::warn!("Rate limiting disabled by configuration");
        return Ok(Box::new(NoopRateLimiter));
    }
    let limiter = TokenBucketLimiter::new(
        settings.capacity,
        Duration::from_millis(settings.interval_ms),
    )?;
    Ok(Box::new(limiter))
}

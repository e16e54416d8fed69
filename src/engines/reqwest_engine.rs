// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::engines::rate_limiter::RateLimiter;
use crate::engines::traits::{FetchError, Fetcher};
use async_trait::async_trait;
use bytes::Bytes;
use metrics::counter;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取器，每次请求前先向共享限流器申请令牌。
/// 不做重试，错误直接返回给调用方
pub struct ReqwestFetcher {
    client: reqwest::Client,
    limiter: Arc<dyn RateLimiter>,
}

impl ReqwestFetcher {
    /// 创建新的抓取器
    ///
    /// # 参数
    ///
    /// * `settings` - HTTP客户端配置
    /// * `limiter` - 全局共享的限流器
    pub fn new(settings: &HttpSettings, limiter: Arc<dyn RateLimiter>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, limiter })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    /// 执行HTTP GET
    ///
    /// # 返回值
    ///
    /// * `Ok(Bytes)` - 状态码为200时的完整响应体
    /// * `Err(FetchError)` - 非成功状态或传输失败
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.limiter.acquire().await;
        counter!("wiki_fetch_requests_total").increment(1);

        let start = Instant::now();
        let response = self.client.get(url).send().await.map_err(|source| {
            counter!("wiki_fetch_failures_total").increment(1);
            FetchError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            counter!("wiki_fetch_failures_total").increment(1);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| {
                counter!("wiki_fetch_failures_total").increment(1);
                FetchError::Transport {
                    url: url.to_string(),
                    source,
                }
            })?;

        debug!(
            url,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched"
        );
        Ok(body)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;

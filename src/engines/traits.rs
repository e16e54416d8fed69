// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 远端返回非成功状态码
    #[error("{status} {url}")]
    Status {
        /// HTTP状态码
        status: u16,
        /// 请求地址
        url: String,
    },
    /// 传输层失败（连接、超时、读取响应体）
    #[error("request to {url} failed: {source}")]
    Transport {
        /// 请求地址
        url: String,
        /// 底层错误
        #[source]
        source: reqwest::Error,
    },
    /// 客户端构建失败
    #[error("http client error: {0}")]
    Client(String),
}

impl FetchError {
    /// 远端状态码（仅对 `Status` 有值）
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 抓取器特质
///
/// 所有网络访问都经过该接口，实现方负责在发出请求前遵守全局限流
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 获取指定URL的完整响应体
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}

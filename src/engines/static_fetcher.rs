// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::engines::traits::{FetchError, Fetcher};

/// 测试用的内存抓取器（用于单元测试）
///
/// 按URL返回预置内容，未登记的URL返回404，并记录请求次数
#[derive(Default)]
pub struct StaticFetcher {
    responses: RwLock<HashMap<String, Bytes>>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个URL的响应体
    pub fn insert(&self, url: impl Into<String>, body: impl Into<Bytes>) {
        if let Ok(mut map) = self.responses.write() {
            map.insert(url.into(), body.into());
        }
    }

    /// 已发生的请求次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let found = self
            .responses
            .read()
            .ok()
            .and_then(|map| map.get(url).cloned());
        found.ok_or_else(|| FetchError::Status {
            status: 404,
            url: url.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

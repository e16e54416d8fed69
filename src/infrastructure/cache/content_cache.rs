// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;
use dashmap::DashMap;
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use crate::engines::traits::{FetchError, Fetcher};

/// 缓存错误类型
#[derive(Error, Debug)]
pub enum CacheError {
    /// 未命中后远端获取失败
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// 本地存储读写失败
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// 内容来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    /// 本地已有条目，未访问网络
    Hit,
    /// 本次从远端获取并写入
    Fetched,
}

/// 缓存读取结果
#[derive(Debug, Clone)]
pub struct CachedContent {
    /// 原始字节
    pub bytes: Bytes,
    /// 命中或新获取
    pub source: CacheSource,
}

/// 内容缓存
///
/// 按资源名（页面标题或文件名）寻址的持久缓存，包装抓取器。
/// 条目没有过期与淘汰；同名条目在一次运行中最多触发一次网络请求
pub struct ContentCache {
    storage: Arc<dyn StorageRepository>,
    fetcher: Arc<dyn Fetcher>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl ContentCache {
    /// 创建新的内容缓存
    ///
    /// # 参数
    ///
    /// * `storage` - 条目存储，由缓存独占写入
    /// * `fetcher` - 未命中时使用的抓取器
    pub fn new(storage: Arc<dyn StorageRepository>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            storage,
            fetcher,
            locks: DashMap::new(),
        }
    }

    /// 检查名称是否已有条目
    pub async fn exists(&self, name: &str) -> Result<bool, CacheError> {
        Ok(self.storage.exists(name).await?)
    }

    /// 读取条目，未命中时从 `url` 获取并原样写入
    ///
    /// # 参数
    ///
    /// * `name` - 规范化后的资源名
    /// * `url` - 未命中时的远端位置，由调用方计算
    ///
    /// # 返回值
    ///
    /// * `Ok(CachedContent)` - 内容及其来源
    /// * `Err(CacheError)` - 抓取或存储失败
    pub async fn get(&self, name: &str, url: &str) -> Result<CachedContent, CacheError> {
        if let Some(bytes) = self.storage.get(name).await? {
            counter!("content_cache_hits_total").increment(1);
            debug!(name, "Cache hit");
            return Ok(CachedContent {
                bytes,
                source: CacheSource::Hit,
            });
        }

        let lock = self
            .locks
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        // Another task may have populated the entry while we waited
        if let Some(bytes) = self.storage.get(name).await? {
            counter!("content_cache_hits_total").increment(1);
            debug!(name, "Cache populated by concurrent writer");
            return Ok(CachedContent {
                bytes,
                source: CacheSource::Hit,
            });
        }

        counter!("content_cache_misses_total").increment(1);
        debug!(name, url, "Cache miss");

        let bytes = self.fetcher.fetch(url).await?;
        self.storage.save(name, &bytes).await?;

        Ok(CachedContent {
            bytes,
            source: CacheSource::Fetched,
        })
    }
}

#[cfg(test)]
#[path = "content_cache_test.rs"]
mod tests;

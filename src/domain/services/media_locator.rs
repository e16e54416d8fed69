// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use md5::{Digest, Md5};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;

use crate::infrastructure::cache::content_cache::{CacheError, ContentCache};
use crate::utils::wikitext::to_url_name;

/// 媒体文件获取错误
#[derive(Error, Debug)]
pub enum MediaError {
    /// 缓存或远端获取失败
    #[error("media {name}: {source}")]
    Cache {
        name: String,
        #[source]
        source: CacheError,
    },
    /// 复制到目标目录失败
    #[error("media {name}: failed to write {}: {source}", path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 媒体定位器
///
/// 按媒体存储的目录分片约定计算文件地址：`<md5首字符>/<md5前两字符>/<文件名>`
pub struct MediaLocator {
    upload_base_url: String,
    cache: Arc<ContentCache>,
}

impl MediaLocator {
    /// 创建新的媒体定位器
    ///
    /// # 参数
    ///
    /// * `upload_base_url` - 媒体存储前缀（以 `/` 结尾）
    /// * `cache` - 媒体字节缓存
    pub fn new(upload_base_url: impl Into<String>, cache: Arc<ContentCache>) -> Self {
        Self {
            upload_base_url: upload_base_url.into(),
            cache,
        }
    }

    /// 文件名对应的分片路径（不含前缀），纯函数
    pub fn shard_path(file_name: &str) -> String {
        let name = to_url_name(file_name);
        let digest = hex::encode(Md5::digest(name.as_bytes()));
        format!("{}/{}/{}", &digest[..1], &digest[..2], name)
    }

    /// 计算文件的远端地址，不访问网络
    pub fn resolve(&self, file_name: &str) -> String {
        format!("{}{}", self.upload_base_url, Self::shard_path(file_name))
    }

    /// 经由缓存获取文件，并复制到 `dest_dir` 下
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 复制后的文件路径
    /// * `Err(MediaError)` - 获取或写入失败
    pub async fn retrieve(&self, file_name: &str, dest_dir: &Path) -> Result<PathBuf, MediaError> {
        let name = to_url_name(file_name);
        let content = self
            .cache
            .get(&name, &self.resolve(&name))
            .await
            .map_err(|source| MediaError::Cache {
                name: name.clone(),
                source,
            })?;

        let path = dest_dir.join(&name);
        let io_err = |source| MediaError::Io {
            name: name.clone(),
            path: path.clone(),
            source,
        };
        fs::create_dir_all(dest_dir).await.map_err(io_err)?;
        fs::write(&path, &content.bytes).await.map_err(io_err)?;
        Ok(path)
    }
}

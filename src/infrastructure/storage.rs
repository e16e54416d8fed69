// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

/// 本地文件系统存储实现
///
/// 一个平铺目录，每个键对应一个文件；文件存在即为缓存命中。
/// 写入先落到同目录下的临时文件再重命名，崩溃时不会留下看似有效的半截条目
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn get_full_path(&self, key: &str) -> PathBuf {
        self.base_path.join(key)
    }

    fn get_temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!(".{}.tmp", key))
    }
}

#[async_trait]
impl StorageRepository for LocalStorage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let full_path = self.get_full_path(key);
        let temp_path = self.get_temp_path(key);

        // 确保目录存在
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &full_path).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        let full_path = self.get_full_path(key);

        match fs::read(&full_path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(fs::try_exists(self.get_full_path(key)).await?)
    }
}

/// 测试用的内存存储实现（用于单元测试）
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// 当前条目数
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    /// 是否为空
    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageRepository for InMemoryStorage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let mut map = self.data.write().await;
        map.insert(key.to_string(), Bytes::copy_from_slice(data));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        let map = self.data.read().await;
        Ok(map.get(key).cloned())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let map = self.data.read().await;
        Ok(map.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(!storage.exists("Japan.txt").await.unwrap());
        assert!(storage.get("Japan.txt").await.unwrap().is_none());

        storage.save("Japan.txt", b"<mediawiki/>").await.unwrap();

        assert!(storage.exists("Japan.txt").await.unwrap());
        assert_eq!(
            storage.get("Japan.txt").await.unwrap().as_deref(),
            Some(&b"<mediawiki/>"[..])
        );
        // Only the final entry remains, no temp file
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_local_storage_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("files"));

        storage.save("Flag_of_Chad.svg", b"<svg/>").await.unwrap();
        assert!(dir.path().join("files").join("Flag_of_Chad.svg").exists());
    }

    #[tokio::test]
    async fn test_local_storage_ignores_leftover_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".Chad.txt.tmp"), b"partial").unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(!storage.exists("Chad.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_in_memory_storage() {
        let storage = InMemoryStorage::new();
        assert!(storage.is_empty().await);

        storage.save("a", b"1").await.unwrap();
        assert!(storage.exists("a").await.unwrap());
        assert!(!storage.exists("b").await.unwrap());
        assert_eq!(storage.get("a").await.unwrap().as_deref(), Some(&b"1"[..]));
        assert_eq!(storage.len().await, 1);
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// 应用程序配置设置
///
/// 包含维基端点、HTTP客户端、限流、重定向解析、缓存目录、输出目录与人工修正表
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 维基端点配置
    pub wiki: WikiSettings,
    /// HTTP客户端配置
    pub http: HttpSettings,
    /// 速率限制配置
    pub rate_limiting: RateLimitingSettings,
    /// 重定向解析配置
    pub resolver: ResolverSettings,
    /// 缓存存储配置
    pub storage: StorageSettings,
    /// 输出配置
    pub output: OutputSettings,
    /// 额外的人工修正表
    #[serde(default)]
    pub overrides: OverrideSettings,
}

/// 维基端点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct WikiSettings {
    /// 文章导出端点前缀（标题直接拼接在后面）
    pub export_base_url: String,
    /// 媒体文件存储前缀
    pub upload_base_url: String,
    /// 国家列表所在的种子文章
    pub seed_article: String,
}

/// HTTP客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// User-Agent 请求头
    pub user_agent: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 速率限制配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitingSettings {
    /// 是否启用速率限制
    pub enabled: bool,
    /// 令牌桶容量
    pub capacity: u32,
    /// 补充一个令牌的间隔（毫秒）
    pub interval_ms: u64,
}

/// 重定向解析配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    /// 最多跟随的重定向次数
    pub max_redirects: usize,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 文章缓存目录
    pub pages_dir: String,
    /// 媒体文件缓存目录
    pub files_dir: String,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 卡片输出根目录
    pub root_dir: String,
    /// 国家列表文件路径
    pub country_list_path: String,
}

/// 人工修正表配置
///
/// 与内置表合并，配置中的条目优先
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverrideSettings {
    /// 地图图片修正
    #[serde(default)]
    pub map: HashMap<String, String>,
    /// 国旗图片修正
    #[serde(default)]
    pub flag: HashMap<String, String>,
    /// 首都修正
    #[serde(default)]
    pub capital: HashMap<String, String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与
    /// `WIKICARDS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// 创建配置实例，并在默认文件之后叠加一个额外的配置文件
    pub fn with_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let mut builder = Config::builder()
            // Start with default settings
            .set_default(
                "wiki.export_base_url",
                "https://en.wikipedia.org/wiki/Special:Export/",
            )?
            .set_default(
                "wiki.upload_base_url",
                "https://upload.wikimedia.org/wikipedia/commons/",
            )?
            .set_default("wiki.seed_article", "Member_states_of_the_United_Nations")?
            .set_default(
                "http.user_agent",
                "wikicards/0.1 (+https://github.com/Kirky-X/wikicards)",
            )?
            .set_default("http.timeout_secs", 30)?
            // Default Rate Limiting settings
            .set_default("rate_limiting.enabled", true)?
            .set_default("rate_limiting.capacity", 2)?
            .set_default("rate_limiting.interval_ms", 1000)?
            .set_default("resolver.max_redirects", 16)?
            // Default Storage settings
            .set_default("storage.pages_dir", "pages")?
            .set_default("storage.files_dir", "files")?
            .set_default("output.root_dir", "countries")?
            .set_default("output.country_list_path", "countries.txt")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix("WIKICARDS").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

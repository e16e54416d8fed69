// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::article::Article;
use crate::domain::repositories::article_repository::{ArticleError, ArticleRepository};
use crate::infrastructure::cache::content_cache::ContentCache;
use crate::infrastructure::wiki::export_parser::{parse_first_page, ParseError};
use crate::utils::wikitext::to_url_name;

/// 文章仓库实现
///
/// 原始字节经由内容缓存从导出端点获取，每次查询都重新解析
pub struct ArticleStore {
    cache: Arc<ContentCache>,
    export_base_url: String,
}

impl ArticleStore {
    /// 创建新的文章仓库
    ///
    /// # 参数
    ///
    /// * `cache` - 文章字节缓存
    /// * `export_base_url` - 导出端点前缀，规范化标题直接拼接在后面
    pub fn new(cache: Arc<ContentCache>, export_base_url: impl Into<String>) -> Self {
        Self {
            cache,
            export_base_url: export_base_url.into(),
        }
    }

    /// 标题对应的缓存键
    pub fn cache_key(title: &str) -> String {
        format!("{}.txt", to_url_name(title))
    }

    /// 标题对应的导出地址
    pub fn export_url(&self, title: &str) -> String {
        format!("{}{}", self.export_base_url, to_url_name(title))
    }
}

#[async_trait]
impl ArticleRepository for ArticleStore {
    async fn get_article(&self, title: &str) -> Result<Article, ArticleError> {
        let key = to_url_name(title);
        let content = self
            .cache
            .get(&Self::cache_key(&key), &self.export_url(&key))
            .await
            .map_err(|source| ArticleError::Fetch {
                title: key.clone(),
                source,
            })?;

        let page = parse_first_page(&content.bytes).map_err(|source| match source {
            ParseError::NoPage => ArticleError::NoPage { title: key.clone() },
            source => ArticleError::Parse {
                title: key.clone(),
                source,
            },
        })?;

        let title = if page.title.is_empty() {
            key
        } else {
            page.title
        };
        Ok(Article::new(title, page.text, page.redirect))
    }
}

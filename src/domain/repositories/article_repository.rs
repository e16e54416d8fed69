// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::article::Article;
use crate::infrastructure::cache::content_cache::CacheError;
use crate::infrastructure::wiki::export_parser::ParseError;

/// 文章获取错误
///
/// 区分失败发生在获取、解析还是页面缺失阶段
#[derive(Error, Debug)]
pub enum ArticleError {
    /// 获取原始字节失败
    #[error("get page error: {title}: {source}")]
    Fetch {
        title: String,
        #[source]
        source: CacheError,
    },
    /// 导出文档无法解析
    #[error("parser error: {title}: {source}")]
    Parse {
        title: String,
        #[source]
        source: ParseError,
    },
    /// 导出文档中没有页面
    #[error("page error: {title}: no page in export document")]
    NoPage { title: String },
}

/// 文章仓库特质
///
/// 按标题获取解析后的文章
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// 获取文章，`title` 可以包含空格，实现方负责规范化
    async fn get_article(&self, title: &str) -> Result<Article, ArticleError>;
}

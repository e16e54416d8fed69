// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::counter;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::article::Article;
use crate::domain::repositories::article_repository::{ArticleError, ArticleRepository};
use crate::utils::wikitext::to_url_name;

/// 重定向解析错误
#[derive(Error, Debug)]
pub enum ResolveError {
    /// 链上某篇文章获取失败
    #[error(transparent)]
    Article(#[from] ArticleError),
    /// 重定向成环
    #[error("redirect cycle: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },
    /// 超过允许的重定向次数
    #[error("redirect chain from {title} exceeds {max_depth} hops")]
    TooDeep { title: String, max_depth: usize },
}

/// 重定向解析器
///
/// 反复查询文章仓库，直到得到一个不再重定向的文章
pub struct RedirectResolver {
    articles: Arc<dyn ArticleRepository>,
    max_depth: usize,
}

impl RedirectResolver {
    /// 创建新的重定向解析器
    ///
    /// # 参数
    ///
    /// * `articles` - 文章仓库
    /// * `max_depth` - 最多跟随的重定向次数
    pub fn new(articles: Arc<dyn ArticleRepository>, max_depth: usize) -> Self {
        Self {
            articles,
            max_depth,
        }
    }

    /// 解析标题，返回链末端的文章
    ///
    /// # 返回值
    ///
    /// * `Ok(Article)` - 终端文章；标题本身不是重定向时即为其本身
    /// * `Err(ResolveError)` - 获取失败、成环或链过长
    pub async fn resolve(&self, title: &str) -> Result<Article, ResolveError> {
        let start = to_url_name(title);
        let mut chain = vec![start.clone()];
        let mut visited: HashSet<String> = HashSet::from([start.clone()]);
        let mut article = self.articles.get_article(&start).await?;

        while let Some(target) = article.redirect_target() {
            let next = to_url_name(target);
            if !visited.insert(next.clone()) {
                chain.push(next);
                return Err(ResolveError::Cycle { chain });
            }
            if chain.len() > self.max_depth {
                return Err(ResolveError::TooDeep {
                    title: start,
                    max_depth: self.max_depth,
                });
            }

            debug!(from = %chain[chain.len() - 1], to = %next, "Following redirect");
            counter!("redirect_hops_total").increment(1);
            chain.push(next.clone());
            article = self.articles.get_article(&next).await?;
        }

        Ok(article)
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::counter;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::application::answer::{read_answer, AnswerError};
use crate::application::render::{write_card, CardTemplate};
use crate::config::settings::Settings;
use crate::domain::models::country::CountryRecord;
use crate::domain::repositories::article_repository::ArticleRepository;
use crate::domain::services::country_list::{
    extract_country_names, skip_to_position, write_country_list,
};
use crate::domain::services::field_extractor::{ExtractionError, FieldExtractor};
use crate::domain::services::media_locator::{MediaError, MediaLocator};
use crate::domain::services::overrides::OverrideTables;
use crate::domain::services::redirect_resolver::{RedirectResolver, ResolveError};
use crate::engines::rate_limiter::{create_rate_limiter, RateLimitError, RateLimiter};
use crate::engines::reqwest_engine::ReqwestFetcher;
use crate::engines::traits::{FetchError, Fetcher};
use crate::infrastructure::cache::content_cache::ContentCache;
use crate::infrastructure::storage::LocalStorage;
use crate::infrastructure::wiki::article_store::ArticleStore;
use crate::utils::wikitext::to_url_name;

/// 流水线错误
///
/// 任何一种错误都会终止整次运行
#[derive(Error, Debug)]
pub enum PipelineError {
    /// 限流器配置无效
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),
    /// HTTP客户端构建失败
    #[error(transparent)]
    Client(#[from] FetchError),
    /// 文章获取或重定向解析失败
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// 字段提取失败
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    /// 媒体文件获取失败
    #[error(transparent)]
    Media(#[from] MediaError),
    /// 答案片段缺失
    #[error(transparent)]
    Answer(#[from] AnswerError),
    /// 端点前缀不是合法URL
    #[error("invalid base URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// 输出写入失败
    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 运行选项
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// 只处理这一个国家
    pub country: Option<String>,
    /// 从排序后列表的第几个开始
    pub position: usize,
}

/// 运行摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 列表总数（跳过前）
    pub total: usize,
    /// 实际处理的国家数
    pub processed: usize,
}

/// 卡片生成流水线
///
/// 单线程顺序处理：一次一个国家，任何错误立即终止
pub struct Pipeline {
    resolver: RedirectResolver,
    extractor: FieldExtractor,
    media: MediaLocator,
    seed_article: String,
    output_root: PathBuf,
    country_list_path: PathBuf,
}

impl Pipeline {
    /// 由各组件组装流水线
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        media: MediaLocator,
        extractor: FieldExtractor,
        settings: &Settings,
    ) -> Self {
        Self {
            resolver: RedirectResolver::new(articles, settings.resolver.max_redirects),
            extractor,
            media,
            seed_article: settings.wiki.seed_article.clone(),
            output_root: PathBuf::from(&settings.output.root_dir),
            country_list_path: PathBuf::from(&settings.output.country_list_path),
        }
    }

    /// 按配置构建完整流水线：一个全局限流器、一个抓取器、两个缓存目录
    pub fn from_settings(settings: &Settings) -> Result<Self, PipelineError> {
        for base in [&settings.wiki.export_base_url, &settings.wiki.upload_base_url] {
            Url::parse(base).map_err(|source| PipelineError::InvalidUrl {
                url: base.clone(),
                source,
            })?;
        }

        let limiter: Arc<dyn RateLimiter> = Arc::from(create_rate_limiter(&settings.rate_limiting)?);
        let fetcher: Arc<dyn Fetcher> = Arc::new(ReqwestFetcher::new(&settings.http, limiter)?);

        let pages = Arc::new(ContentCache::new(
            Arc::new(LocalStorage::new(&settings.storage.pages_dir)),
            fetcher.clone(),
        ));
        let files = Arc::new(ContentCache::new(
            Arc::new(LocalStorage::new(&settings.storage.files_dir)),
            fetcher,
        ));

        let articles = Arc::new(ArticleStore::new(pages, &settings.wiki.export_base_url));
        let media = MediaLocator::new(&settings.wiki.upload_base_url, files);
        let extractor = FieldExtractor::new(OverrideTables::from_settings(&settings.overrides));

        info!(
            capacity = settings.rate_limiting.capacity,
            interval = ?Duration::from_millis(settings.rate_limiting.interval_ms),
            "Pipeline initialized"
        );
        Ok(Self::new(articles, media, extractor, settings))
    }

    /// 加载待处理的国家列表
    ///
    /// 指定单个国家时直接使用它，否则扫描种子文章并写出列表文件
    pub async fn load_countries(&self, options: &RunOptions) -> Result<Vec<String>, PipelineError> {
        if let Some(country) = &options.country {
            return Ok(vec![country.clone()]);
        }

        let seed = self.resolver.resolve(&self.seed_article).await?;
        let names = extract_country_names(seed.text());
        write_country_list(&self.country_list_path, &names)
            .await
            .map_err(|source| PipelineError::Output {
                path: self.country_list_path.clone(),
                source,
            })?;
        Ok(names)
    }

    /// 处理单个国家：解析重定向、提取字段、获取媒体、读取答案、写出卡片
    pub async fn process_country(&self, name: &str) -> Result<CountryRecord, PipelineError> {
        let article = self.resolver.resolve(name).await?;
        let key = to_url_name(article.title());
        let body = article.text();

        let map_name = self.extractor.extract_map_image(&key, name, body)?;
        self.media
            .retrieve(&map_name, &self.output_root.join("images"))
            .await?;

        let flag_name = self.extractor.extract_flag_image(&key, name, body)?;
        self.media
            .retrieve(&flag_name, &self.output_root.join("flags").join("images"))
            .await?;

        let capital = self.extractor.extract_capital(&key, name, body)?;

        let answer_path = self
            .output_root
            .join(CardTemplate::Location.relative_path(&key));
        let answer_location = read_answer(&answer_path).await?;

        let record = CountryRecord {
            name: name.to_string(),
            map_image_url: format!("images/{map_name}"),
            flag_image_url: format!("images/{flag_name}"),
            capital,
            answer_location,
        };

        for template in CardTemplate::ALL {
            write_card(&self.output_root, &key, template, &record)
                .await
                .map_err(|source| PipelineError::Output {
                    path: self.output_root.join(template.relative_path(&key)),
                    source,
                })?;
        }
        counter!("countries_rendered_total").increment(1);
        Ok(record)
    }

    /// 执行整次运行
    pub async fn run(&self, options: &RunOptions) -> Result<RunSummary, PipelineError> {
        let countries = self.load_countries(options).await?;
        let total = countries.len();
        info!("len: {}", total);

        if options.position > total {
            warn!(
                position = options.position,
                total, "Start position is past the end of the country list"
            );
        }
        let countries = skip_to_position(countries, options.position);

        for (idx, name) in countries.iter().enumerate() {
            info!("{} : {}", idx + options.position, name);
            self.process_country(name).await?;
        }

        Ok(RunSummary {
            total,
            processed: countries.len(),
        })
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::country::Field;
use crate::domain::services::overrides::OverrideTables;
use crate::utils::wikitext::{parse_wiki_file, parse_wiki_link};

// image_map = Country.svg\n
static IMAGE_MAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"image_map\s+= (.+?)\n").expect("Failed to compile image_map regex"));
static IMAGE_MAP2: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"image_map2\s+= (.+?)\n").expect("Failed to compile image_map2 regex")
});
// image_flag = Country.svg\n
static IMAGE_FLAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"image_flag\s+= (.+?)\n").expect("Failed to compile image_flag regex")
});
// capital = [[Capital]]\n
static CAPITAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"capital\s+= (.+?)\n").expect("Failed to compile capital regex"));

/// 字段提取失败：覆盖表、主模式、备用模式都没有得到值
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{country} {field} failed")]
pub struct ExtractionError {
    /// 失败的字段
    pub field: Field,
    /// 国家名称
    pub country: String,
}

/// 提取层级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 人工修正表
    Override,
    /// 主模板字段
    Primary,
    /// 备用模板字段
    Fallback,
}

/// 提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// 字段值
    pub value: String,
    /// 命中的层级
    pub tier: Tier,
}

/// 一篇文章中提取出的全部字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub map_image: String,
    pub flag_image: String,
    pub capital: String,
}

fn first_capture<'a>(re: &Regex, body: &'a str) -> Option<&'a str> {
    re.captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// 字段提取器
///
/// 每个字段按 覆盖表 → 主模式 → 备用模式（仅地图）的顺序尝试
pub struct FieldExtractor {
    overrides: OverrideTables,
}

impl FieldExtractor {
    /// 创建新的字段提取器
    pub fn new(overrides: OverrideTables) -> Self {
        Self { overrides }
    }

    /// 提取单个字段
    ///
    /// # 参数
    ///
    /// * `field` - 目标字段
    /// * `key` - 规范化的文章键，用于查修正表
    /// * `country` - 国家名称，仅用于错误信息
    /// * `body` - 文章正文
    pub fn extract(
        &self,
        field: Field,
        key: &str,
        country: &str,
        body: &str,
    ) -> Result<Extracted, ExtractionError> {
        if let Some(value) = self.overrides.get(field, key) {
            debug!(%field, key, "Using override");
            return Ok(Extracted {
                value: value.to_string(),
                tier: Tier::Override,
            });
        }

        let clean: fn(&str) -> String = match field {
            Field::ImageMap | Field::ImageFlag => parse_wiki_file,
            Field::Capital => parse_wiki_link,
        };
        let (primary, fallback): (&Regex, Option<&Regex>) = match field {
            Field::ImageMap => (&*IMAGE_MAP, Some(&*IMAGE_MAP2)),
            Field::ImageFlag => (&*IMAGE_FLAG, None),
            Field::Capital => (&*CAPITAL, None),
        };

        if let Some(raw) = first_capture(primary, body) {
            return Ok(Extracted {
                value: clean(raw),
                tier: Tier::Primary,
            });
        }

        if let Some(raw) = fallback.and_then(|re| first_capture(re, body)) {
            debug!(%field, key, "Primary pattern absent, using fallback");
            return Ok(Extracted {
                value: clean(raw),
                tier: Tier::Fallback,
            });
        }

        Err(ExtractionError {
            field,
            country: country.to_string(),
        })
    }

    /// 提取地图图片文件名
    pub fn extract_map_image(
        &self,
        key: &str,
        country: &str,
        body: &str,
    ) -> Result<String, ExtractionError> {
        self.extract(Field::ImageMap, key, country, body)
            .map(|e| e.value)
    }

    /// 提取国旗图片文件名
    pub fn extract_flag_image(
        &self,
        key: &str,
        country: &str,
        body: &str,
    ) -> Result<String, ExtractionError> {
        self.extract(Field::ImageFlag, key, country, body)
            .map(|e| e.value)
    }

    /// 提取首都文本
    pub fn extract_capital(
        &self,
        key: &str,
        country: &str,
        body: &str,
    ) -> Result<String, ExtractionError> {
        self.extract(Field::Capital, key, country, body)
            .map(|e| e.value)
    }

    /// 依次提取全部字段，遇到第一个失败即返回
    pub fn extract_all(
        &self,
        key: &str,
        country: &str,
        body: &str,
    ) -> Result<ExtractedFields, ExtractionError> {
        Ok(ExtractedFields {
            map_image: self.extract_map_image(key, country, body)?,
            flag_image: self.extract_flag_image(key, country, body)?,
            capital: self.extract_capital(key, country, body)?,
        })
    }
}

#[cfg(test)]
#[path = "field_extractor_test.rs"]
mod tests;

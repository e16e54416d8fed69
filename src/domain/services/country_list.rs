// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

// {{Flagicon|Country}} [[Actual Country|Country]]
static COUNTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{Flagicon\|[A-Za-z0-9_ ]+\}\} \[\[(.+?)[|\]]")
        .expect("Failed to compile country regex")
});

/// 从种子文章正文中扫描国家名称，按字节序排序
pub fn extract_country_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = COUNTRY
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect();
    names.sort();
    names
}

/// 将国家列表写为换行分隔的文件（末尾不带换行）
pub async fn write_country_list(path: &Path, names: &[String]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, names.join("\n")).await
}

/// 从排序后的列表中跳过前 `position` 个
pub fn skip_to_position(names: Vec<String>, position: usize) -> Vec<String> {
    names.into_iter().skip(position).collect()
}

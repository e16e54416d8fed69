// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};

use crate::application::answer::QUESTION_SENTINEL;
use crate::domain::models::country::CountryRecord;

/// 卡片模板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTemplate {
    /// 猜位置
    Location,
    /// 看地图认国家
    World,
    /// 首都
    Capital,
    /// 国旗
    Flag,
}

impl CardTemplate {
    /// 全部模板
    pub const ALL: [CardTemplate; 4] = [
        CardTemplate::Location,
        CardTemplate::World,
        CardTemplate::Flag,
        CardTemplate::Capital,
    ];

    /// 用国家记录填充模板
    pub fn render(&self, c: &CountryRecord) -> String {
        match self {
            CardTemplate::Location => format!(
                "Where in the world is **{name}**?\n{QUESTION_SENTINEL}\n{answer}\n\n![Map of {name}]({map})",
                name = c.name,
                answer = c.answer_location,
                map = c.map_image_url,
            ),
            CardTemplate::World => format!(
                "Which country is this?\n\n![Map of a country]({map})\n{QUESTION_SENTINEL}\n**{name}**",
                name = c.name,
                map = c.map_image_url,
            ),
            CardTemplate::Capital => format!(
                "What is the capital of **{name}**?\n{QUESTION_SENTINEL}\n{capital}",
                name = c.name,
                capital = c.capital,
            ),
            CardTemplate::Flag => format!(
                "Which country does this flag belong to?\n\n![Flag of {name}]({flag})\n{QUESTION_SENTINEL}\n**{name}**",
                name = c.name,
                flag = c.flag_image_url,
            ),
        }
    }

    /// 模板输出文件相对于输出根目录的路径
    pub fn relative_path(&self, key: &str) -> PathBuf {
        match self {
            CardTemplate::Location => PathBuf::from(format!("{key}_location.md")),
            CardTemplate::World => PathBuf::from(format!("{key}.md")),
            CardTemplate::Flag => Path::new("flags").join(format!("{key}.md")),
            CardTemplate::Capital => Path::new("capitals").join(format!("{key}.md")),
        }
    }
}

/// 渲染并写出一张卡片，返回写入的路径
pub async fn write_card(
    root: &Path,
    key: &str,
    template: CardTemplate,
    record: &CountryRecord,
) -> std::io::Result<PathBuf> {
    let path = root.join(template.relative_path(key));
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, template.render(record)).await?;
    Ok(path)
}

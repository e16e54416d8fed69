// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 可提取的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// 位置地图图片
    ImageMap,
    /// 国旗图片
    ImageFlag,
    /// 首都
    Capital,
}

impl Field {
    /// 字段在信息框模板中的键名
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ImageMap => "image map",
            Field::ImageFlag => "image flag",
            Field::Capital => "capital",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 国家记录
///
/// 单个国家处理完成后的结果，只供渲染使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// 显示名称
    pub name: String,
    /// 地图图片引用
    pub map_image_url: String,
    /// 国旗图片引用
    pub flag_image_url: String,
    /// 首都文本
    pub capital: String,
    /// 位置问题的答案文本
    pub answer_location: String,
}

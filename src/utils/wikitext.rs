// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 维基标记清洗函数
//!
//! 每条清洗规则是一个独立的纯函数，`parse_wiki_file` 与 `parse_wiki_link`
//! 按固定顺序组合它们

const FILE_TAG: &str = "File:";
const LINK_FILE_TAG: &str = "[[File:";
const LINK_OPEN: &str = "[[";
const LINK_CLOSE: &str = "]]";
const TEMPLATE_PIPE: &str = "{{!}}";

/// 将标题或文件名转换为存储键（空格替换为下划线）
pub fn to_url_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// 取出文件引用中的文件名部分
///
/// 链接形式 `[[File:X|...]]` 取到第一个 `|`（没有 `|` 时取到 `]]`）；
/// 裸形式 `File:X` 取到片段末尾；都不存在时原样返回
pub fn strip_file_prefix(s: &str) -> &str {
    if let Some(i) = s.find(LINK_FILE_TAG) {
        let rest = &s[i + LINK_FILE_TAG.len()..];
        let end = rest
            .find('|')
            .or_else(|| rest.find(LINK_CLOSE))
            .unwrap_or(rest.len());
        &rest[..end]
    } else if let Some(i) = s.find(FILE_TAG) {
        &s[i + FILE_TAG.len()..]
    } else {
        s
    }
}

/// 删除第一个 `<` 到其后第一个 `>`（含）之间的内联注释
///
/// 没有闭合 `>` 时从 `<` 处截断
pub fn strip_angle_comment(s: &str) -> String {
    match s.find('<') {
        Some(i) => match s[i..].find('>') {
            Some(offset) => format!("{}{}", &s[..i], &s[i + offset + 1..]),
            None => s[..i].to_string(),
        },
        None => s.to_string(),
    }
}

/// 从第一个 `{{!}}` 处截断
pub fn truncate_template_pipe(s: &str) -> &str {
    match s.find(TEMPLATE_PIPE) {
        Some(i) => &s[..i],
        None => s,
    }
}

/// 解析文件引用，得到规范化的文件名
///
/// 顺序：取文件名 → 删注释 → 截断 `{{!}}` → 去空白 → 空格转下划线。
/// 注释可能出现在文件名中间，所以必须在规范化之前删除
pub fn parse_wiki_file(s: &str) -> String {
    let name = strip_file_prefix(s);
    let name = strip_angle_comment(name);
    let name = truncate_template_pipe(&name);
    to_url_name(name.trim())
}

/// 取出 `[[...]]` 链接内部的文本并去空白；没有链接时原样返回
pub fn link_interior(s: &str) -> &str {
    match s.find(LINK_OPEN) {
        Some(i) => {
            let rest = &s[i + LINK_OPEN.len()..];
            let end = rest.find(LINK_CLOSE).unwrap_or(rest.len());
            rest[..end].trim()
        }
        None => s,
    }
}

/// 保留第一个 `|` 之后的显示文本
pub fn display_text(s: &str) -> &str {
    match s.find('|') {
        Some(i) => &s[i + 1..],
        None => s,
    }
}

/// 解析维基链接，得到显示文本
///
/// 与文件引用相反：`[[目标|显示]]` 取的是 `|` 之后的显示部分
pub fn parse_wiki_link(s: &str) -> String {
    display_text(link_interior(s)).to_string()
}

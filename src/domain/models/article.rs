// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 文章
///
/// 一个标题对应的已解析内容，可能只是一个重定向占位。创建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    title: String,
    text: String,
    redirect: Option<String>,
}

impl Article {
    /// 创建文章，空的重定向目标视为没有重定向
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        redirect: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            redirect: redirect.filter(|r| !r.trim().is_empty()),
        }
    }

    /// 规范标题
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 原始正文（维基标记）
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 重定向目标标题
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// 是否为重定向占位
    pub fn is_redirect(&self) -> bool {
        self.redirect.is_some()
    }
}

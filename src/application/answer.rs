// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 问题与答案之间的分隔标记
pub const QUESTION_SENTINEL: &str = "<!--question-->";

const IMAGE_MARKER: &str = "![";

/// 答案片段错误
#[derive(Error, Debug)]
pub enum AnswerError {
    /// 片段文件不存在或无法读取
    #[error("missing {} answer: {source}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 分隔标记缺失或重复
    #[error("missing {} answer", path.display())]
    MalformedFragment { path: PathBuf },
}

/// 取出文档的答案部分
///
/// 文档必须恰好包含一个分隔标记；返回去空白后的后半部分
pub fn split_answer(document: &str) -> Option<&str> {
    let mut parts = document.split(QUESTION_SENTINEL);
    let _question = parts.next()?;
    let answer = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(answer.trim())
}

/// 截掉答案中第一个图片引用及其之后的内容
pub fn strip_image(answer: &str) -> &str {
    match answer.find(IMAGE_MARKER) {
        Some(i) => answer[..i].trim(),
        None => answer,
    }
}

/// 读取已有卡片的答案文本，去掉其中的图片引用
pub async fn read_answer(path: &Path) -> Result<String, AnswerError> {
    let document = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AnswerError::Missing {
            path: path.to_path_buf(),
            source,
        })?;

    let answer = split_answer(&document).ok_or_else(|| AnswerError::MalformedFragment {
        path: path.to_path_buf(),
    })?;
    Ok(strip_image(answer).to_string())
}

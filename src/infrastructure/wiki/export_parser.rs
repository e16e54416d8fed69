// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Parse the XML document returned by the wiki's `Special:Export` endpoint.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// 导出文档解析错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// XML格式错误
    #[error("XML parse error: {0}")]
    Xml(String),
    /// 文档中没有页面
    #[error("no page in export document")]
    NoPage,
}

/// 导出文档中的单个页面
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPage {
    /// 页面标题
    pub title: String,
    /// `<redirect title="..."/>` 的目标
    pub redirect: Option<String>,
    /// 第一个修订版本的正文
    pub text: String,
}

fn redirect_title(e: &BytesStart<'_>) -> Result<Option<String>, ParseError> {
    let attr = e
        .try_get_attribute("title")
        .map_err(|err| ParseError::Xml(err.to_string()))?;
    match attr {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|err| ParseError::Xml(err.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

/// 解析导出文档中的第一个页面
pub fn parse_first_page(xml: &[u8]) -> Result<ExportPage, ParseError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    // Element names from the document root down to the current node
    let mut path: Vec<String> = Vec::new();
    let mut page: Option<ExportPage> = None;
    let mut seen_text = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| ParseError::Xml(format!("at {}: {e}", reader.buffer_position())))?;

        match event {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                match name.as_str() {
                    "page" if page.is_none() => page = Some(ExportPage::default()),
                    "redirect" if in_page(&path) => {
                        if let Some(p) = page.as_mut() {
                            p.redirect = redirect_title(&e)?;
                        }
                    }
                    _ => {}
                }
                path.push(name);
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"redirect" && in_page(&path) {
                    if let Some(p) = page.as_mut() {
                        p.redirect = redirect_title(&e)?;
                    }
                }
            }
            Event::End(e) => {
                let name = e.local_name();
                if name.as_ref() == b"text" && in_page(&path) {
                    seen_text = true;
                }
                path.pop();
                if name.as_ref() == b"page" && page.is_some() {
                    break;
                }
            }
            Event::Text(e) => {
                if let Some(p) = page.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| ParseError::Xml(err.to_string()))?;
                    append_text(p, &path, seen_text, &text);
                }
            }
            Event::CData(e) => {
                if let Some(p) = page.as_mut() {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    append_text(p, &path, seen_text, &text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    page.ok_or(ParseError::NoPage)
}

fn in_page(path: &[String]) -> bool {
    path.iter().any(|n| n == "page")
}

fn append_text(page: &mut ExportPage, path: &[String], seen_text: bool, text: &str) {
    match path.last().map(String::as_str) {
        // <page><title>
        Some("title") if path.len() >= 2 && path[path.len() - 2] == "page" => {
            page.title.push_str(text);
        }
        // <page><revision><text>, first revision only
        Some("text") if !seen_text && path.iter().any(|n| n == "revision") => {
            page.text.push_str(text);
        }
        _ => {}
    }
}

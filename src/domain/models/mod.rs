// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 文章（article）：一个维基页面的标题、正文与重定向目标
/// - 国家（country）：卡片字段与渲染所需的国家记录
pub mod article;
pub mod country;

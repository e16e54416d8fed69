// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 包含的仓库接口：
/// - 文章仓库（article_repository）：按标题获取已解析的文章
/// - 存储仓库（storage_repository）：按名称保存和读取字节
pub mod article_repository;
pub mod storage_repository;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：文章与国家记录
/// - 仓库接口（repositories）：文章与存储的抽象接口
/// - 服务（services）：重定向解析、字段提取、媒体定位等领域服务
pub mod models;
pub mod repositories;
pub mod services;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供内容缓存：每个名称最多获取一次，之后从存储中读取
pub mod content_cache;

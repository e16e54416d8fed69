// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供日志初始化与维基文本清洗等纯函数
pub mod telemetry;
pub mod wikitext;

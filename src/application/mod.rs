// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排整次运行：读取已有答案、渲染卡片、逐个国家执行流水线
pub mod answer;
pub mod pipeline;
pub mod render;

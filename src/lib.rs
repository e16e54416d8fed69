// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 卡片生成流水线、答案读取与模板渲染
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// HTTP抓取与全局限流
pub mod engines;

/// 基础设施模块
///
/// 提供缓存、存储、维基导出解析与指标
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 国家列表（country_list）：从种子文章扫描国家名称
/// - 字段提取（field_extractor）：按覆盖表、主模式、备用模式提取卡片字段
/// - 媒体定位（media_locator）：计算媒体文件地址并取回字节
/// - 覆盖表（overrides）：内置及配置提供的字段覆盖值
/// - 重定向解析（redirect_resolver）：沿重定向链找到最终文章
pub mod country_list;
pub mod field_extractor;
pub mod media_locator;
pub mod overrides;
pub mod redirect_resolver;

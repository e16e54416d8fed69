// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节：
/// - 缓存（cache）：以名称为键的内容缓存，未命中时经抓取器获取
/// - 可观测性（observability）：计数指标描述
/// - 存储（storage）：本地文件与内存存储
/// - 维基（wiki）：导出文档解析与文章存取
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod cache;
pub mod observability;
pub mod storage;
pub mod wiki;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取引擎模块
///
/// HTTP抓取器、全局限流器以及测试用的内存抓取器
pub mod rate_limiter;
pub mod reqwest_engine;
pub mod static_fetcher;
pub mod traits;

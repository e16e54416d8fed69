// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;

/// 注册指标描述
///
/// 只登记描述，不安装导出器；未安装记录器时计数为空操作
pub fn register_metrics() {
    describe_counter!(
        "wiki_fetch_requests_total",
        "Total number of HTTP requests sent to the wiki"
    );
    describe_counter!(
        "wiki_fetch_failures_total",
        "Total number of wiki requests that failed or returned a non-200 status"
    );
    describe_counter!(
        "content_cache_hits_total",
        "Total number of content lookups served from the local cache"
    );
    describe_counter!(
        "content_cache_misses_total",
        "Total number of content lookups that required a network fetch"
    );
    describe_counter!(
        "redirect_hops_total",
        "Total number of redirect links followed"
    );
    describe_counter!(
        "countries_rendered_total",
        "Total number of countries whose cards were written"
    );
}

// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use wikicards::application::pipeline::{Pipeline, RunOptions};
use wikicards::config::settings::Settings;
use wikicards::infrastructure::observability::metrics::register_metrics;
use wikicards::utils::telemetry;

/// 从维基文章生成国家知识卡片
#[derive(Parser, Debug)]
#[command(name = "wikicards", version, about)]
struct Cli {
    /// 只处理这一个国家（不写出国家列表文件）
    #[arg(long)]
    country: Option<String>,

    /// 从排序后列表的第几个国家开始
    #[arg(long, default_value_t = 0)]
    position: usize,

    /// 叠加在默认配置之后的额外配置文件
    #[arg(long)]
    config: Option<PathBuf>,
}

/// 主函数
///
/// 初始化日志与指标，加载配置，顺序执行整次运行
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    telemetry::init_telemetry();
    register_metrics();

    // 2. Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::with_file(path),
        None => Settings::new(),
    }
    .context("failed to load configuration")?;
    info!("Configuration loaded");

    // 3. Build and run the pipeline
    let pipeline = Pipeline::from_settings(&settings)?;
    let options = RunOptions {
        country: cli.country,
        position: cli.position,
    };

    match pipeline.run(&options).await {
        Ok(summary) => {
            info!(
                total = summary.total,
                processed = summary.processed,
                "Run complete"
            );
            Ok(())
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            Err(e.into())
        }
    }
}

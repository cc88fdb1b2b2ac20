use anyhow::Context;
use clap::Parser;
use rank_watch::utils::{logger, validation::Validate};
use rank_watch::{LocalStorage, RankPipeline, WatchConfig, WatchEngine};

#[derive(Parser)]
#[command(name = "rank-watch")]
#[command(about = "Checks whether BT-Miners stays within the top ranks on vendor listing pages")]
struct Args {
    /// Path to JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    println!("=== Rank watch started ===");
    tracing::info!(
        "🚀 Rank watch run at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match WatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid JSON");
            std::process::exit(1);
        }
    };

    // 配置錯誤在處理任何 URL 前即中止
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "✅ Configuration loaded: {} URLs, top_n = {}",
        config.urls.len(),
        config.top_n
    );

    let urls = config.urls.clone();
    let top_n = config.top_n;

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline =
        RankPipeline::new(storage, config).context("Failed to build the HTTP client")?;
    let engine = WatchEngine::new(pipeline);

    // 警報只是回報內容，不影響結束碼；只有報表寫出失敗才算整次執行失敗
    let csv_path = engine.run(&urls, top_n).await?;
    tracing::info!("✅ Rank check completed, report saved to {}", csv_path);

    Ok(())
}

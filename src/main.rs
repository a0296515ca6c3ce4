use clap::Parser;
use geo_layers::utils::{error::LayerError, logger};
use geo_layers::{CliConfig, LayerEngine, LayerPipeline, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌（寫到 stderr）
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Layer extraction failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<String, LayerError> {
    let config = cli.resolve()?;
    let pipeline = LayerPipeline::new(LocalStorage::default(), config)?;
    LayerEngine::new(pipeline).run().await
}

use clap::Parser;
use niomag::app::server;
use niomag::utils::logger;
use niomag::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_server_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting niomag API v{}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    server::run(config).await?;

    Ok(())
}

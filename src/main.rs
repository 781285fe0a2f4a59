use clap::Parser;
use testproject::utils::{logger, validation::Validate};
use testproject::{CliConfig, Service};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.load_app_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs || config.json_logs(), config.log_level());

    tracing::info!("Starting {}", config.app.name);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let service = Service::new();

    println!("{}", service.hello());

    Ok(())
}

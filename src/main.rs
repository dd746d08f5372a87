use clap::Parser;
use pressbox::domain::ports::ConfigProvider;
use pressbox::utils::{logger, validation::Validate};
use pressbox::{ArchiveApiClient, CliConfig, RequestEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pressbox CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let spec = config.ticket_spec()?;
    let client = ArchiveApiClient::new(config.api_base())?;
    let engine = RequestEngine::new(
        client.clone(),
        client,
        config.continuous_paper_limit(),
    );

    match engine.run(vec![spec]).await {
        Ok(task_id) => {
            println!("✅ Search submitted, task id: {}", task_id);
        }
        Err(e) => {
            tracing::error!("Submission failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

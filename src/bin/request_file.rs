use clap::Parser;
use pressbox::utils::logger;
use pressbox::{ArchiveApiClient, RequestEngine, RequestFile};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "request_file")]
#[command(about = "Submit a saved batch of search tickets from a TOML request file")]
struct Args {
    /// Path to the TOML request file
    file: PathBuf,

    /// Base URL of the archive search API
    #[arg(long, default_value = "http://localhost:8000/")]
    api_base: String,

    /// Cap on papers fetched for continuous tickets
    #[arg(long, default_value = "2000")]
    paper_limit: usize,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let request = RequestFile::from_file(&args.file)?;
    if let Some(name) = &request.name {
        tracing::info!("Loaded request '{}' with {} ticket(s)", name, request.tickets.len());
    } else {
        tracing::info!("Loaded {} ticket(s)", request.tickets.len());
    }

    let client = ArchiveApiClient::new(&args.api_base)?;
    let engine = RequestEngine::new(client.clone(), client, args.paper_limit);

    match engine.run(request.ticket_specs()).await {
        Ok(task_id) => {
            println!("✅ Search submitted, task id: {}", task_id);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

use clap::Parser;
use industrial_orchestrator::cli::{self, Cli, Command};
use industrial_orchestrator::infrastructure::logging::init_logging;
use industrial_orchestrator::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    match cli.command {
        Command::Serve => cli::serve::run(&config).await,
        Command::Query(args) => cli::query::run(&config, args).await,
        Command::Graph => {
            cli::graph::run();
            Ok(())
        }
    }
}

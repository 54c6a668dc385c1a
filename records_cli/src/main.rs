mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "records")]
#[command(about = "Fetch and summarize one page of the records collection")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Base URL of the records service
    #[arg(long, env = "RECORDS_BASE_URL")]
    base_url: Option<String>,

    #[command(flatten)]
    records: commands::records::RecordsArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("records=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let client = match &cli.base_url {
        Some(url) => records_api::Client::with_base_url(url),
        None => records_api::Client::new(),
    };

    commands::records::run(&cli.records, &client, &cli.output).await
}

use anyhow::Result;
use clap::Args;
use records_api::{Client, Query, RecordQuery};

use crate::output::{print_json, print_open_table, print_summary_status, OutputFormat};

#[derive(Args)]
pub struct RecordsArgs {
    /// Page number
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Filter by color (repeatable, e.g. --color red --color blue)
    #[arg(long = "color")]
    pub colors: Vec<String>,
}

impl RecordsArgs {
    pub fn to_query(&self) -> RecordQuery {
        RecordQuery::default()
            .with_page(self.page)
            .with_colors(&self.colors)
    }
}

pub async fn run(args: &RecordsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let summary = client.retrieve(&args.to_query()).await?;

    match format {
        OutputFormat::Table => {
            print_open_table(&summary.open);
            print_summary_status(&summary);
        }
        OutputFormat::Json => print_json(&summary),
    }

    Ok(())
}

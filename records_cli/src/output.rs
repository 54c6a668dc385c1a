use records_api::types::{OpenRecord, Summary};
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct OpenRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Disposition")]
    disposition: String,
    #[tabled(rename = "Primary")]
    primary: String,
}

fn build_open_rows(open: &[OpenRecord]) -> Vec<OpenRow> {
    open.iter()
        .map(|o| OpenRow {
            id: o.record.id,
            color: o.record.color.clone(),
            disposition: o.record.disposition.to_string(),
            primary: if o.is_primary { "yes" } else { "no" }.to_string(),
        })
        .collect()
}

pub fn print_open_table(open: &[OpenRecord]) {
    println!("{}", Table::new(build_open_rows(open)));
}

pub fn print_summary_status(summary: &Summary) {
    eprintln!("{}", format_status(summary));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_page(page: Option<i64>) -> String {
    page.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
}

fn format_status(summary: &Summary) -> String {
    let ids: Vec<String> = summary.ids.iter().map(|id| id.to_string()).collect();
    format!(
        "Ids [{}] | closed primary: {} | previous: {} | next: {}",
        ids.join(", "),
        summary.closed_primary_count,
        format_page(summary.previous_page),
        format_page(summary.next_page)
    )
}

//! Airfetch - Airtable Record Fetcher
//!
//! Airtableのテーブルからレコードを取得して表示

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use airfetch::cli::Args;
use airfetch::{AirtableClient, Config};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    let client = AirtableClient::new(config.base_id, config.api_key);
    let records = client.fetch_records(&args.table).await?;

    println!("✓ Fetched {} records from {}", records.len(), args.table);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{rendered}");

    Ok(())
}

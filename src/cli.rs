//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// AirtableのテーブルからレコードをフェッチするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "airfetch")]
#[command(about = "Fetch records from an Airtable table", long_about = None)]
pub struct Args {
    /// Table to fetch records from
    pub table: String,

    /// Pretty-print records as indented JSON
    #[arg(long)]
    pub pretty: bool,

    /// Config file path
    #[arg(short, long, default_value = "./airfetch.json")]
    pub config: String,
}

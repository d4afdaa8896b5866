use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drug-records", version, about = "Paginated drug name register")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// SQLite database file
    #[arg(long, global = true, env = "DRUG_RECORDS_DB")]
    pub db: Option<PathBuf>,

    /// Records per page
    #[arg(long, global = true, env = "DRUG_RECORDS_PAGE_SIZE")]
    pub page_size: Option<i64>,

    /// off, error, warn, info, debug or trace
    #[arg(long, global = true, env = "DRUG_RECORDS_LOG")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a drug name
    Create { drug_name: String },
    /// Rename a record
    Update { id: String, drug_name: String },
    /// Remove a record
    Delete { id: String },
    /// Show one record
    Get { id: String },
    /// Show one page of records
    List {
        #[arg(long, default_value_t = 1)]
        page: i64,
    },
    /// Answer JSON requests read line by line from stdin
    Rpc,
    /// Interactive table view (default)
    Browse,
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "korbib",
    version,
    about = "Parallel Korean bible crawler and verse extraction tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every chapter not yet present in the document
    Crawl(CrawlArgs),
    /// Extract merged verses from a saved chapter page
    Extract(ExtractArgs),
    /// Lint the crawled document for extraction gaps
    Verify(VerifyArgs),
    /// Summarize document coverage
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CrawlArgs {
    #[arg(long, default_value = "bible_data.json")]
    pub output: PathBuf,

    #[arg(long, default_value = "error_log.txt")]
    pub error_log: PathBuf,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long)]
    pub books_path: Option<PathBuf>,

    #[arg(long = "book")]
    pub books: Vec<String>,

    #[arg(long)]
    pub max_chapters: Option<usize>,

    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    #[arg(long, default_value_t = 2)]
    pub max_retries: u32,

    #[arg(long, default_value_t = 1000)]
    pub backoff_ms: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[arg(long, default_value = "bible_data.json")]
    pub document: PathBuf,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub fail_on_issues: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = "bible_data.json")]
    pub document: PathBuf,

    #[arg(long)]
    pub books_path: Option<PathBuf>,
}

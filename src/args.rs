use std::num::NonZeroU32;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "DNS server stress testing tool", long_about = None)]
pub struct Args {
    /// DNS server IP or hostname
    #[arg(long)]
    pub server: String,

    /// DNS server port
    #[arg(long, default_value_t = 53)]
    pub port: u16,

    /// Query to test (use %RAND% for random strings)
    #[arg(long)]
    pub query: String,

    /// Expected record content
    #[arg(long)]
    pub expect_content: Option<String>,

    /// Total number of requests
    #[arg(long, default_value_t = 100)]
    pub num_requests: u32,

    /// Number of concurrent workers
    #[arg(long, default_value_t = nonzero_lit::u32!(10))]
    pub concurrency: NonZeroU32,
}

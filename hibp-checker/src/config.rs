use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use hibp_range::{DEFAULT_RANGE_URL, HIBP_RANGE_URL_ENV};

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 6543;

#[derive(Parser, Debug, Clone)]
#[command(name = "hibp-checker")]
#[command(about = "Check whether passwords appear in the Have I Been Pwned breach corpus")]
#[command(version)]
pub struct Args {
    /// Show additional information about user input and allow `?debug` on the server
    #[arg(long)]
    pub debug: bool,

    /// Port for the HTTP server to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Range API endpoint; only the 5 character hash prefix is appended to it
    #[arg(long, env = HIBP_RANGE_URL_ENV, default_value = DEFAULT_RANGE_URL)]
    pub base_url: String,

    /// Directory for server.log and cmd.log
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Timeout in seconds for a single range request
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Only run the HTTP server, without the interactive prompt
    #[arg(long)]
    pub no_interactive: bool,
}

impl Args {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the shared HTTP client used for every range request.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout())
            .build()
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging already initialized: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("Cannot listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Task panicked: {0}")]
    Join(#[from] tokio::task::JoinError),
}

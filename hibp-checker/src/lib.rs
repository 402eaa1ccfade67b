//! Front ends for [`hibp_range`]: an interactive terminal session and an HTTP
//! server, plus the flag parsing and log setup shared by the binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;

pub use config::Args;
pub use error::Error;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Faultmap error registry service
#[derive(Debug, Parser)]
#[command(name = "faultmap", about = "Resolve error codes into localized API error responses")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "faultmap.toml", env = "FAULTMAP_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "FAULTMAP_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Load configuration and error registry, report, and exit
    #[arg(long)]
    pub check: bool,
}

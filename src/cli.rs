//! Command-line arguments.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use clap::Parser;

/// Webhook server for automated deployments.
#[derive(Parser, Debug)]
#[command(name = "arca", version, about, long_about = None)]
pub struct Cli {
    /// Address to bind.
    #[arg(long, env = "ARCA_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "ARCA_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path to the TOML configuration file.
    #[arg(short, long, env = "ARCA_CONFIG", default_value = "config.toml")]
    pub config: PathBuf,

    /// Directory served for non-API paths. The gate bundle lives under `pkg/`.
    #[arg(long, env = "ARCA_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use exposure_check_core::CheckConfig;

/// Check what the network can see about this machine.
///
/// Reports the public address, location, open ports, VPN and Tor use, and DNS leaks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (default: `<config dir>/exposure-check/config.toml`)
    #[arg(short = 'C', long, value_name = "FILE", env = "EXPOSURE_CHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Analysis backend base URL
    #[arg(long, value_name = "URL", env = "EXPOSURE_CHECK_BACKEND")]
    pub backend_url: Option<String>,

    /// Public address discovery endpoint
    #[arg(long, value_name = "URL")]
    pub address_service_url: Option<String>,

    /// Upper bound on ports the backend scans
    #[arg(long, value_name = "N")]
    pub max_ports: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// User agent sent with every request
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Write the session results as JSON into this directory
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Copy to the terminal clipboard once the checks finish
    #[arg(long, value_enum, value_name = "WHAT")]
    pub copy: Option<CopyTarget>,

    /// Disable colored alert output
    #[arg(long)]
    pub no_color: bool,
}

/// What `--copy` places on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CopyTarget {
    /// The public address only
    Address,
    /// One line per result
    Summary,
}

impl Args {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply(&self, mut config: CheckConfig) -> CheckConfig {
        if let Some(url) = &self.backend_url {
            config.backend_url.clone_from(url);
        }
        if let Some(url) = &self.address_service_url {
            config.address_service_url.clone_from(url);
        }
        if self.max_ports.is_some() {
            config.max_ports = self.max_ports;
        }
        if self.timeout.is_some() {
            config.request_timeout_secs = self.timeout;
        }
        if self.user_agent.is_some() {
            config.user_agent.clone_from(&self.user_agent);
        }
        config
    }
}

//! Clap derive structures for the `fanctl` binary.

use clap::{Args, Parser};

/// fanctl -- interactive console for networked ventilation fans
#[derive(Debug, Parser)]
#[command(
    name = "fanctl",
    version,
    about = "Interactive console for controlling networked ventilation fans",
    long_about = "An interactive terminal console for discovering, inspecting, and\n\
        controlling ventilation fans through a controller gateway.\n\n\
        The console runs as a sequence of menus: pick a fan, pick an action,\n\
        answer at most one follow-up question. Refresh re-reads the fleet;\n\
        Quit ends the session."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller gateway address (host, IP, or full URL)
    #[arg(long, short = 'c', env = "CONTROLLER_IP")]
    pub controller: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "FANCTL_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ServerlessNetwork Daemon (serverlessnetd)
//!
//! The main process for the ServerlessNetwork project.
//! It installs logging, brings up the network, runs it, and reports the result.
use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use serverlessnetwork::ServerlessNetwork;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Maximum log level (error, warn, info, debug, trace)
    #[clap(short, long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing (logging)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting ServerlessNetwork Daemon (serverlessnetd)...");

    let mut network = ServerlessNetwork::new();

    let ran = network.run()?;
    info!("ServerlessNetwork run completed. result = {}", ran);

    Ok(())
}

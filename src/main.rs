//! HD Path Recovery Tool
//!
//! Finds which derivation path(s) a hardware wallet used to produce known
//! addresses: expands a fixed set of base path templates by an index range,
//! asks the attached device for the address at each candidate, and reports
//! the first match per target.
//!
//! ## Usage
//!
//! ```bash
//! rustypath -a 0x3721d521C67b2C436170EDC7a3cd9b22758C6471 -i 10
//! rustypath -a 0xAA...,0xBB... # default index depth 5
//! ```
//!
//! ## Device preconditions
//!
//! The device must be connected, unlocked, and running the Ethereum app,
//! with "contract data" allowed and "browser support" off. A misconfigured
//! device makes individual lookups fail, which the search treats as
//! ordinary non-matches - check the warn-level log trail if every target
//! comes back "No paths found".

use std::error::Error;

use clap::Parser;
use tracing::info;

use rustypath::config::{self, base_paths, device_timeout, get_global_config, init_global_config};
use rustypath::ledger::LedgerOracle;
use rustypath::pathspace;
use rustypath::runner::{self, parse_targets, validate_depth};
use rustypath::telemetry::{self, TelemetryConfig};

#[derive(Parser, Debug)]
#[clap(name = "rustypath")]
#[clap(
    about = "Find the HD derivation path behind a hardware wallet address",
    long_about = "Find the HD derivation path behind a hardware wallet address.\n\n\
        The device must be connected, unlocked, and running the Ethereum app, \
        with 'contract data' allowed and 'browser support' disabled."
)]
struct Args {
    /// Comma separated list of addresses to search for
    #[clap(short = 'a', long)]
    addresses: String,

    /// Number of indexes to search along each base path
    /// (default: search.index_depth from config.toml, or 5)
    #[clap(short = 'i', long)]
    index_depth: Option<i64>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_global_config()?;
    let config = get_global_config();
    telemetry::init_tracing(TelemetryConfig::default())?;

    // Input validation happens before the search space is generated
    let targets = parse_targets(&args.addresses)?;
    let index_depth = validate_depth(
        args.index_depth.unwrap_or_else(|| config::index_depth(config)),
    )?;

    let templates = base_paths(config);
    let candidates = pathspace::generate(&templates, index_depth);
    info!(
        targets = targets.len(),
        templates = templates.len(),
        index_depth,
        candidates = candidates.len(),
        "search space generated"
    );

    // One session for the whole run; failure here is fatal before any
    // search begins. The session is released when the oracle drops.
    let mut oracle = LedgerOracle::open(device_timeout(config))?;

    let report = runner::run(&targets, &candidates, &mut oracle).await;
    println!("{}", report.render()?);
    Ok(())
}

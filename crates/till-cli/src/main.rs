use std::io;

use anyhow::Context;
use clap::Parser;
use till_cli::{cli, logging, Cli, Settings};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let settings = Settings::load(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;
    logging::init_with_config(&settings.logging, args.verbose);

    let policy = settings
        .billing_policy()
        .context("invalid [billing] configuration")?;

    cli::run(&args, policy, io::stdin().lock(), io::stdout().lock())
}

//! Command-line interface.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use till_core::desk::{BillingDesk, SalesDesk};
use till_core::{BillCalculator, BillingPolicy, Receipt, SaleCalculator};

use crate::menu;
use crate::prompt::{Prompter, Render};

#[derive(Debug, Parser)]
#[command(name = "till")]
#[command(version, about = "Single-record clinic billing and sale profit/loss calculators")]
pub struct Cli {
    /// Configuration file (defaults to ./till.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log everything at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Receipt format
    #[arg(long, global = true, value_enum, default_value_t = Render::Text)]
    pub format: Render,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// MediSure clinic billing menu
    Billing,

    /// QuickMart profit/loss menu
    Sales,

    /// Compute a result once without starting a menu
    Quote {
        #[command(subcommand)]
        quote: QuoteCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum QuoteCommand {
    /// Bill totals for the given charges
    Bill {
        #[arg(long, allow_negative_numbers = true)]
        consultation_fee: Decimal,

        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        lab_charges: Decimal,

        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        medicine_charges: Decimal,

        /// Apply the insurance discount
        #[arg(long)]
        insured: bool,
    },

    /// Profit or loss for a purchase/selling pair
    Sale {
        /// Total purchase (cost) amount
        #[arg(long, allow_negative_numbers = true)]
        purchase: Decimal,

        /// Total selling amount
        #[arg(long, allow_negative_numbers = true)]
        selling: Decimal,
    },
}

/// Compute the receipt for a quote command.
pub fn quote(policy: BillingPolicy, command: &QuoteCommand) -> till_core::TillResult<Receipt> {
    match command {
        QuoteCommand::Bill {
            consultation_fee,
            lab_charges,
            medicine_charges,
            insured,
        } => {
            let totals = BillCalculator::new(policy).compute(
                *consultation_fee,
                *lab_charges,
                *medicine_charges,
                *insured,
            )?;
            Ok(Receipt::for_bill_totals("Bill Quote", &totals))
        }
        QuoteCommand::Sale { purchase, selling } => {
            let outcome = SaleCalculator::new().compute(*purchase, *selling)?;
            Ok(Receipt::for_sale_outcome("Profit/Loss Quote", &outcome))
        }
    }
}

/// Run a parsed command against the given input and output.
pub fn run<R: BufRead, W: Write>(cli: &Cli, policy: BillingPolicy, input: R, output: W) -> anyhow::Result<()> {
    let mut prompter = Prompter::new(input, output, cli.format);

    match &cli.command {
        Commands::Billing => {
            tracing::info!(rate = %policy.insured_discount_rate(), "starting billing menu");
            let mut desk = BillingDesk::new(policy);
            menu::run_billing(&mut desk, &mut prompter)
        }
        Commands::Sales => {
            tracing::info!("starting sales menu");
            let mut desk = SalesDesk::new();
            menu::run_sales(&mut desk, &mut prompter)
        }
        Commands::Quote { quote: command } => {
            let receipt = quote(policy, command)?;
            prompter.show(&receipt)
        }
    }
}

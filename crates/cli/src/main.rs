//! Cardbank CLI - card registration and transactions from command line
//!
//! Usage:
//! ```bash
//! cardbank register --first-name Amrit --last-name Sutradhar \
//!     --number 1234123412341234 --cvv 1234 --bank SBI --expires "1st December 2025"
//! cardbank deposit 1234123412341234 1234 1000
//! cardbank withdraw 1234123412341234 1234 500
//! cardbank deactivate 1234123412341234 1234
//! cardbank show
//! ```

use anyhow::Result;
use cardbank_atm::{Machine, TransactionKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{account, transaction};

/// Cardbank - a minimal banking backend over a flat-file snapshot
#[derive(Parser)]
#[command(name = "cardbank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Snapshot file path
    #[arg(long, default_value = cardbank_registry::DEFAULT_SNAPSHOT_PATH, global = true)]
    pub data: PathBuf,

    /// Banks served by this instance (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "SBI", global = true)]
    pub banks: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a card and open its vault
    Register {
        /// Holder first name
        #[arg(long)]
        first_name: String,
        /// Holder middle name (optional)
        #[arg(long)]
        middle_name: Option<String>,
        /// Holder last name
        #[arg(long)]
        last_name: String,
        /// Card number (16-19 digits)
        #[arg(long)]
        number: String,
        /// CVV (3-4 digits)
        #[arg(long)]
        cvv: String,
        /// Issuing bank name
        #[arg(long)]
        bank: String,
        /// Expiration date, e.g. "1st December 2025" or "1/12/2025"
        #[arg(long)]
        expires: String,
        /// Transaction limit (defaults to 10000)
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Deactivate a card and destroy its vault
    Deactivate {
        /// Card number
        number: String,
        /// CVV
        cvv: String,
    },

    /// Deposit funds into a card's vault
    Deposit {
        /// Card number
        number: String,
        /// CVV
        cvv: String,
        /// Amount to deposit
        amount: i64,
    },

    /// Withdraw funds from a card's vault
    Withdraw {
        /// Card number
        number: String,
        /// CVV
        cvv: String,
        /// Amount to withdraw
        amount: i64,
    },

    /// Show all served banks and their registered cards
    Show,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Ensure the data directory exists
    if let Some(parent) = cli.data.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let mut machine = Machine::new(cli.banks.clone(), &cli.data)?;

    match cli.command {
        Commands::Register {
            first_name,
            middle_name,
            last_name,
            number,
            cvv,
            bank,
            expires,
            limit,
        } => {
            account::register(
                &mut machine,
                account::RegisterArgs {
                    first_name,
                    middle_name,
                    last_name,
                    number,
                    cvv,
                    bank,
                    expires,
                    limit,
                },
            )?;
        }

        Commands::Deactivate { number, cvv } => {
            account::deactivate(&mut machine, &number, &cvv)?;
        }

        Commands::Deposit { number, cvv, amount } => {
            transaction::transact(&mut machine, &number, &cvv, amount, TransactionKind::Deposit)?;
        }

        Commands::Withdraw { number, cvv, amount } => {
            transaction::transact(&mut machine, &number, &cvv, amount, TransactionKind::Withdraw)?;
        }

        Commands::Show => {
            account::show(&mut machine)?;
        }
    }

    Ok(())
}

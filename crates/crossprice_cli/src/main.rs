//! Crossprice CLI - command line operations for the pricing engine.
//!
//! # Commands
//!
//! - `crossprice price` - Price one contract with all three models
//! - `crossprice implied` - Solve implied volatility from a market price
//! - `crossprice validate` - Run the cross-model validation suite

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Cross-validated European option pricing CLI
#[derive(Parser)]
#[command(name = "crossprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option with the analytic, lattice and Monte Carlo models
    Price {
        /// Underlying spot price
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(long)]
        expiry: f64,

        /// Risk-free rate (continuously compounded)
        #[arg(long, default_value = "0.05")]
        rate: f64,

        /// Annualised volatility
        #[arg(long)]
        volatility: f64,

        /// Option side (call or put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: String,

        /// Lattice step count
        #[arg(long, default_value = "100")]
        n_steps: usize,

        /// Monte Carlo path count
        #[arg(long, default_value = "100000")]
        n_simulations: usize,

        /// Monte Carlo base seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Solve implied volatility from an observed market price
    Implied {
        /// Underlying spot price
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(long)]
        expiry: f64,

        /// Risk-free rate (continuously compounded)
        #[arg(long, default_value = "0.05")]
        rate: f64,

        /// Observed market price
        #[arg(long)]
        market_price: f64,

        /// Option side (call or put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: String,
    },

    /// Run the known-value and cross-model validation suite
    Validate {
        /// Lattice step count for the comparison
        #[arg(long, default_value = "1000")]
        n_steps: usize,

        /// Monte Carlo path count for the comparison
        #[arg(long, default_value = "500000")]
        n_simulations: usize,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
            n_steps,
            n_simulations,
            seed,
            format,
        } => commands::price::run(
            spot,
            strike,
            expiry,
            rate,
            volatility,
            &option_type,
            n_steps,
            n_simulations,
            seed,
            &format,
        ),
        Commands::Implied {
            spot,
            strike,
            expiry,
            rate,
            market_price,
            option_type,
        } => commands::implied::run(spot, strike, expiry, rate, market_price, &option_type),
        Commands::Validate {
            n_steps,
            n_simulations,
            format,
        } => commands::validate::run(n_steps, n_simulations, &format),
    }
}

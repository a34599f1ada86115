//! # salestax
//!
//! Reads shopping-basket lines and prints the receipt.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          salestax binary                                │
//! │                                                                         │
//! │  FILE / stdin ──► ItemParser::parse_all ──► ShoppingBasket ──► stdout   │
//! │                                                 ▲                       │
//! │  SALESTAX_* env ──► CliConfig ──► TaxCalculator─┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! salestax basket.txt
//! echo "1 imported bottle of perfume at 27.99" | salestax --json
//! salestax --demo
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=salestax_core=debug` to see per-item tax.

mod config;
mod error;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliResult;
use salestax_core::{ItemParser, Receipt, ReceiptSummary, ShoppingBasket, TaxCalculator};

/// Baskets printed by `--demo`.
const DEMO_BASKETS: [&str; 3] = [
    "2 book at 12.49\n\
     1 music CD at 14.99\n\
     1 chocolate bar at 0.85",
    "1 imported box of chocolates at 10.00\n\
     1 imported bottle of perfume at 47.50",
    "1 imported bottle of perfume at 27.99\n\
     1 bottle of perfume at 18.99\n\
     1 packet of headache pills at 9.75\n\
     3 imported box of chocolates at 11.25",
];

#[derive(Debug, Parser)]
#[command(name = "salestax")]
#[command(about = "Prints a sales tax receipt for a shopping basket", version)]
struct Options {
    /// Basket file, one `<quantity> <name> at <price>` per line. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the receipt as JSON.
    #[arg(long)]
    json: bool,

    /// Print receipts for the built-in sample baskets and exit.
    #[arg(long, conflicts_with = "input")]
    demo: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let options = Options::parse();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "salestax failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=salestax_core=trace` - Show per-rule tax contributions
/// - Default: warnings, plus info from this binary
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,salestax=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(options: &Options) -> CliResult<()> {
    let config = CliConfig::load()?;
    let calculator = config.tax.build_calculator()?;
    info!(
        basic_rate = config.tax.basic_rate_percent,
        import_duty_rate = config.tax.import_duty_rate_percent,
        rounding_cents = config.tax.rounding_increment_cents,
        "Configuration loaded"
    );

    if options.demo {
        println!("{}", render_demo(&calculator, options.json)?);
        return Ok(());
    }

    let input = match &options.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    println!("{}", render(&input, &calculator, options.json)?);
    Ok(())
}

/// Parses `input` into a basket taxed by `calculator`.
fn price_basket(input: &str, calculator: &TaxCalculator) -> CliResult<ShoppingBasket> {
    let parsed = ItemParser::new().parse_all(input)?;
    let basket = ShoppingBasket::from_parsed(calculator.clone(), parsed)?;
    info!(items = basket.len(), total = %basket.total_price(), "Basket priced");
    Ok(basket)
}

/// Renders the receipt for `input` as text or as one JSON object.
fn render(input: &str, calculator: &TaxCalculator, json: bool) -> CliResult<String> {
    let basket = price_basket(input, calculator)?;
    let receipt = Receipt::new(&basket);

    if json {
        Ok(serde_json::to_string_pretty(&receipt.summary())?)
    } else {
        Ok(receipt.to_string())
    }
}

/// Renders every demo basket: text receipts separated by a blank line, or
/// a single JSON array of summaries.
fn render_demo(calculator: &TaxCalculator, json: bool) -> CliResult<String> {
    let baskets = DEMO_BASKETS
        .iter()
        .map(|input| price_basket(input, calculator))
        .collect::<CliResult<Vec<_>>>()?;

    if json {
        let summaries: Vec<ReceiptSummary> = baskets
            .iter()
            .map(|basket| Receipt::new(basket).summary())
            .collect();
        Ok(serde_json::to_string_pretty(&summaries)?)
    } else {
        let receipts: Vec<String> = baskets
            .iter()
            .map(|basket| Receipt::new(basket).to_string())
            .collect();
        Ok(receipts.join("\n\n"))
    }
}

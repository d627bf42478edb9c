//! Command-line entry point for the Black-Scholes form.
//!
//! Each flag stands in for one form field. Values are passed through as text so
//! the CLI shares the library's parsing and error reporting; an omitted numeric
//! flag behaves like an empty field.

use anyhow::Result;
use bscalc_lib::{evaluate, render, FormFields, PricerConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bscalc")]
#[command(about = "Black-Scholes price of a European call or put option")]
struct Args {
    /// Stock price (S)
    #[arg(long, allow_hyphen_values = true)]
    spot: Option<String>,

    /// Strike price (K)
    #[arg(long, allow_hyphen_values = true)]
    strike: Option<String>,

    /// Time to maturity in years (T)
    #[arg(long, allow_hyphen_values = true)]
    maturity: Option<String>,

    /// Risk-free rate as a decimal (r)
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Volatility as a decimal (sigma)
    #[arg(long, visible_alias = "sigma", allow_hyphen_values = true)]
    volatility: Option<String>,

    /// Option type: call or put
    #[arg(long, default_value = "call")]
    kind: String,

    /// Path to configuration file (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Log pricing details to stderr
    #[arg(long, short)]
    verbose: bool,
}

/// A price was computed and printed.
const EXIT_OK: u8 = 0;
/// The form was rejected (parse, option type or domain error).
const EXIT_PRICING_ERROR: u8 = 1;
/// The configuration could not be loaded or serialised.
const EXIT_CONFIG_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

fn run(args: Args) -> Result<u8> {
    let config = match &args.config {
        Some(path) => PricerConfig::from_file(path)?,
        None => PricerConfig::standard(),
    };

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(EXIT_OK);
    }

    let outcome = evaluate(&form_fields(&args), &config);
    println!("{}", render(&outcome, &config.display));

    Ok(if outcome.is_ok() {
        EXIT_OK
    } else {
        EXIT_PRICING_ERROR
    })
}

fn form_fields(args: &Args) -> FormFields {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    FormFields::new(
        text(&args.spot),
        text(&args.strike),
        text(&args.maturity),
        text(&args.rate),
        text(&args.volatility),
        args.kind.clone(),
    )
}

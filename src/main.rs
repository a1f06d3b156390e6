use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payment_optimizer::PaymentOptimizer;
use payment_optimizer::error::OptimizerError;
use payment_optimizer::interfaces::csv::totals_writer::TotalsWriter;
use payment_optimizer::interfaces::json::input_file::{read_orders, read_payment_methods};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// One `<method> <amount>` line per charged method
    #[default]
    Text,
    /// A JSON object mapping method to amount
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders JSON file
    orders: PathBuf,

    /// Payment methods JSON file
    payment_methods: PathBuf,

    /// Output format for the charged totals
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Logs go to stderr so stdout only carries the totals.
/// Verbosity follows `RUST_LOG`, defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let orders = read_orders(&cli.orders).into_diagnostic()?;
    let methods = read_payment_methods(&cli.payment_methods).into_diagnostic()?;

    if orders.is_empty() {
        return Err(OptimizerError::EmptyInput(format!(
            "no orders were loaded from '{}'",
            cli.orders.display()
        )))
        .into_diagnostic();
    }
    if methods.is_empty() {
        return Err(OptimizerError::EmptyInput(format!(
            "no payment methods were loaded from '{}'",
            cli.payment_methods.display()
        )))
        .into_diagnostic();
    }

    let totals = PaymentOptimizer::new(&methods)
        .optimize(&orders)
        .into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Text => {
            let mut writer = TotalsWriter::new(stdout.lock());
            writer.write_totals(&totals).into_diagnostic()?;
        }
        OutputFormat::Json => {
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &totals).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    Ok(())
}

use clap::Parser;
use consign::application::engine::CommissionEngine;
use consign::domain::payout::PayoutMethod;
use consign::domain::ports::ScheduleSourceBox;
use consign::infrastructure::builtin::BuiltinSchedule;
use consign::infrastructure::json_file::JsonScheduleFile;
use consign::interfaces::csv::quote_reader::QuoteReader;
use consign::interfaces::csv::quote_writer::{QuoteRecord, QuoteWriter};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input quote requests CSV file
    input: PathBuf,

    /// Path to a JSON tier schedule (optional). Defaults to the built-in table.
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Payout method applied to rows that do not specify one
    #[arg(long, default_value = "cash", value_parser = PayoutMethod::from_str)]
    default_payout: PayoutMethod,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let source: ScheduleSourceBox = match cli.schedule {
        Some(path) => Box::new(JsonScheduleFile::new(path)),
        None => Box::new(BuiltinSchedule),
    };
    let schedule = source.load().into_diagnostic()?;
    let engine = CommissionEngine::new(schedule).into_diagnostic()?;

    // Process quote requests
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = QuoteReader::new(file);

    let stdout = io::stdout();
    let mut writer = QuoteWriter::new(stdout.lock());

    for row in reader.quotes() {
        let request = match row {
            Ok(request) => request,
            Err(e) => {
                warn!("skipping malformed row: {e}");
                continue;
            }
        };
        let payout_type = request.payout_or(cli.default_payout);
        match engine.calculate_commission(request.price, payout_type) {
            Ok(outcome) => {
                let record = QuoteRecord::new(request.price, payout_type, &outcome);
                writer.write_record(&record).into_diagnostic()?;
            }
            Err(e) => warn!("skipping quote for {}: {e}", request.price),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

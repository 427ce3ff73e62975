use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use promptpay::PaymentRequest;
use promptpay::config::EncoderConfig;
use promptpay::interfaces::csv::payload_writer::PayloadWriter;
use promptpay::interfaces::csv::request_reader::RequestReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with default country, currency and extra currency presets
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a single PromptPay payload
    Encode {
        /// National ID, tax ID, mobile number or e-wallet ID
        identifier: String,

        /// Amount to pre-fill, with up to two decimal places
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<Decimal>,

        /// Mark the QR code as single-use
        #[arg(long)]
        one_time: bool,

        /// ISO 4217 numeric code or a preset alpha code (THB, EUR)
        #[arg(long)]
        currency: Option<String>,

        /// ISO 3166-1 alpha-2 country code
        #[arg(long)]
        country: Option<String>,

        /// Print identifier kind and payload as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encode every request of a CSV file (identifier, amount, one_time, currency, country)
    Batch {
        /// Input requests CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => EncoderConfig::from_path(path).into_diagnostic()?,
        None => EncoderConfig::default(),
    };
    let builder = config.payload_builder();

    match cli.command {
        Command::Encode {
            identifier,
            amount,
            one_time,
            currency,
            country,
            json,
        } => {
            let mut req = PaymentRequest::new(identifier)
                .one_time(one_time)
                .with_currency(currency.unwrap_or_else(|| config.currency.clone()))
                .with_country(country.unwrap_or_else(|| config.country.clone()));
            if let Some(amount) = amount {
                req = req.with_amount(amount);
            }

            let payload = builder.build(&req).into_diagnostic()?;
            if json {
                let out = serde_json::json!({
                    "identifier": payload.identifier().normalized(),
                    "kind": payload.identifier().kind(),
                    "payload": payload.to_string(),
                });
                println!("{}", out);
            } else {
                println!("{}", payload);
            }
        }
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = RequestReader::new(file);
            let stdout = io::stdout();
            let mut writer = PayloadWriter::new(stdout.lock());

            for record in reader.records() {
                let req = match record {
                    Ok(record) => record.into_request(&config),
                    Err(e) => {
                        eprintln!("Error reading request: {}", e);
                        continue;
                    }
                };
                match builder.encode(&req) {
                    Ok(payload) => writer.write(&req.identifier, &payload).into_diagnostic()?,
                    Err(e) => eprintln!("Error encoding request: {}", e),
                }
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}

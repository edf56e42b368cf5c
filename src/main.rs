use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;
use std::rc::Rc;
use tp_strategies::application::notification_manager::NotificationManager;
use tp_strategies::application::payment_processor::PaymentProcessor;
use tp_strategies::domain::money::Amount;
use tp_strategies::domain::ports::{SinkRef, StatusSink};
use tp_strategies::infrastructure::sink::StdoutSink;
use tp_strategies::interfaces::csv::roster_reader::RosterReader;
use tp_strategies::interfaces::roster::{default_channel_entries, default_payment_entries};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEMO_AMOUNT: Decimal = dec!(100.0);
const DEMO_RECIPIENT: &str = "alice@example.com";
const DEMO_MESSAGE: &str = "Your order has shipped";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the payment and notification demonstrations (default)
    Demo,

    /// Charge every payment method, refunding half of each accepted charge
    Pay {
        /// Amount to charge each method
        #[arg(long)]
        amount: Decimal,

        /// CSV roster with `kind,id,balance` rows. Defaults to the built-in methods.
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Broadcast a message over every channel, highest priority first
    Notify {
        #[arg(long)]
        recipient: String,

        #[arg(long)]
        message: String,

        /// CSV roster with `kind,sender,priority` rows. Defaults to the built-in channels.
        #[arg(long)]
        roster: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = Rc::new(StdoutSink::stdout());
    let sink: SinkRef = stdout.clone();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            sink.emit("=== Payments ===");
            let mut processor = load_payments(None, &sink)?;
            processor.process_payments(DEMO_AMOUNT);

            sink.emit("");
            sink.emit("=== Notifications ===");
            let manager = load_channels(None, &sink)?;
            manager.broadcast(DEMO_RECIPIENT, DEMO_MESSAGE);
        }
        Command::Pay { amount, roster } => {
            let amount = Amount::new(amount).into_diagnostic()?;
            let mut processor = load_payments(roster, &sink)?;
            processor.process_payments(amount.value());
        }
        Command::Notify {
            recipient,
            message,
            roster,
        } => {
            let manager = load_channels(roster, &sink)?;
            manager.broadcast(&recipient, &message);
        }
    }

    stdout.finish().into_diagnostic()
}

fn load_payments(roster: Option<PathBuf>, sink: &SinkRef) -> Result<PaymentProcessor> {
    let mut processor = PaymentProcessor::new();

    let Some(path) = roster else {
        for entry in default_payment_entries() {
            processor.add_method(entry.into_method(sink.clone()));
        }
        return Ok(processor);
    };

    let reader = RosterReader::from_path(&path).into_diagnostic()?;
    for entry in reader.payment_entries() {
        match entry {
            Ok(entry) => processor.add_method(entry.into_method(sink.clone())),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping roster entry");
                eprintln!("Error reading roster entry: {}", e);
            }
        }
    }

    Ok(processor)
}

fn load_channels(roster: Option<PathBuf>, sink: &SinkRef) -> Result<NotificationManager> {
    let mut manager = NotificationManager::new();

    let Some(path) = roster else {
        for entry in default_channel_entries() {
            manager.add_channel(entry.into_channel(sink.clone()));
        }
        return Ok(manager);
    };

    let reader = RosterReader::from_path(&path).into_diagnostic()?;
    for entry in reader.channel_entries() {
        match entry {
            Ok(entry) => manager.add_channel(entry.into_channel(sink.clone())),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping roster entry");
                eprintln!("Error reading roster entry: {}", e);
            }
        }
    }

    Ok(manager)
}

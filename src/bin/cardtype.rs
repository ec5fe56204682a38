//! CLI tool for card number classification and validation.
//!
//! # Usage
//!
//! ```bash
//! # Classify a (partial) card number
//! cardtype classify 3782
//!
//! # Validate a card number
//! cardtype validate 4111111111111111 --output json
//!
//! # Group digits for display, and show the hint for what is missing
//! cardtype format 378282246310005
//! cardtype hint 41111
//!
//! # Replay typing, one keystroke per line
//! cardtype type 4111111111111112
//!
//! # Generate test card numbers
//! cardtype generate --network amex --count 5
//! ```
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`,
//! `-v` for `debug`). They never contain card digits.

use std::process::ExitCode;

use cardtype::format::{self, grouped_display_with_separator};
use cardtype::{
    classify, format_hint, generate, grouped_display, luhn, validate, CardInput, CardNetwork,
    ValidationError,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardtype")]
#[command(author, version, about = "Card network classification and validation tool")]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a card number by its prefix
    Classify {
        /// Card number or leading digits (digits only)
        card_number: String,
    },

    /// Validate a card number
    Validate {
        /// Card number to validate (digits only)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Group a card number for display
    Format {
        /// Card number to format (existing separators are ignored)
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = format::SEPARATOR)]
        separator: String,
    },

    /// Show the grouped digits followed by the hint for the missing ones
    Hint {
        /// Digits typed so far
        card_number: String,
    },

    /// Check if a digit string passes the Luhn algorithm
    Luhn {
        /// Digits to check
        digits: String,
    },

    /// Replay typing a card number one keystroke at a time
    Type {
        /// Characters to type
        keystrokes: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Card network to generate
        #[arg(short, long, default_value = "visa")]
        network: NetworkArg,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Number of digits (defaults to the network's minimum length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Output formatted (with spaces)
        #[arg(short, long)]
        formatted: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Visa,
    Mastercard,
    Discover,
    Amex,
    DinersClub,
    InstaPayment,
    Jcb,
    Maestro,
}

impl From<NetworkArg> for CardNetwork {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Visa => CardNetwork::Visa,
            NetworkArg::Mastercard => CardNetwork::Mastercard,
            NetworkArg::Discover => CardNetwork::Discover,
            NetworkArg::Amex => CardNetwork::Amex,
            NetworkArg::DinersClub => CardNetwork::DinersClub,
            NetworkArg::InstaPayment => CardNetwork::InstaPayment,
            NetworkArg::Jcb => CardNetwork::Jcb,
            NetworkArg::Maestro => CardNetwork::Maestro,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Classify { card_number } => cmd_classify(&card_number),
        Commands::Validate {
            card_number,
            output,
        } => cmd_validate(&card_number, output),
        Commands::Format {
            card_number,
            separator,
        } => cmd_format(&card_number, &separator),
        Commands::Hint { card_number } => cmd_hint(&card_number),
        Commands::Luhn { digits } => cmd_luhn(&digits),
        Commands::Type { keystrokes } => cmd_type(&keystrokes),
        Commands::Generate {
            network,
            count,
            length,
            formatted,
        } => Ok(cmd_generate(network.into(), count, length, formatted)),
    };

    result.unwrap_or_else(|e| {
        tracing::debug!(position = e.position(), "rejected input");
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    })
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn status(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_classify(card_number: &str) -> Result<ExitCode, ValidationError> {
    let definition = classify(card_number)?;
    tracing::debug!(network = %definition.network(), length = card_number.len(), "classified");

    println!("Network: {}", definition.network().name());
    if definition.min_length() == definition.max_length() {
        println!("Length: {}", definition.min_length());
    } else {
        println!(
            "Length: {}-{}",
            definition.min_length(),
            definition.max_length()
        );
    }
    println!("Grouping: {:?}", definition.grouping_positions());
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(card_number: &str, output: OutputFormat) -> Result<ExitCode, ValidationError> {
    let verdict = match validate(card_number) {
        Ok(verdict) => verdict,
        Err(e) => {
            if let OutputFormat::Json = output {
                let body = serde_json::json!({ "valid": false, "error": e.to_string() });
                println!("{}", body);
                return Ok(ExitCode::FAILURE);
            }
            return Err(e);
        }
    };
    tracing::debug!(
        network = %verdict.network().network(),
        length = verdict.length(),
        complete = verdict.is_complete(),
        valid = verdict.is_valid(),
        "validated"
    );

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if verdict.is_valid() { "yes" } else { "no" });
            println!("Network: {}", verdict.network().network().name());
            println!("Length: {}", verdict.length());
            println!(
                "Complete: {}",
                if verdict.is_complete() { "yes" } else { "no" }
            );
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&verdict) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize verdict");
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(status(verdict.is_valid()))
}

fn cmd_format(card_number: &str, separator: &str) -> Result<ExitCode, ValidationError> {
    let digits = format::strip_formatting(card_number);
    let definition = classify(&digits)?;
    let grouped = grouped_display_with_separator(&digits, definition, separator);
    // Drop the separator that follows a completed group at the end
    println!("{}", grouped.strip_suffix(separator).unwrap_or(&grouped));
    Ok(ExitCode::SUCCESS)
}

fn cmd_hint(card_number: &str) -> Result<ExitCode, ValidationError> {
    let definition = classify(card_number)?;
    println!(
        "{}{}",
        grouped_display(card_number, definition),
        format_hint(definition, card_number.len())
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_luhn(digits: &str) -> Result<ExitCode, ValidationError> {
    let passes = luhn::is_valid(digits)?;
    println!("Luhn check: {}", if passes { "PASS" } else { "FAIL" });
    Ok(status(passes))
}

fn cmd_type(keystrokes: &str) -> Result<ExitCode, ValidationError> {
    let mut field = CardInput::new();

    for c in keystrokes.chars() {
        let before = field.len();
        let events = field.push(c)?;
        if field.len() == before {
            tracing::debug!(max_length = field.verdict().network().max_length(), "keystroke ignored");
        } else {
            tracing::debug!(
                length = field.len(),
                network = %field.network(),
                state = ?field.state(),
                events = events.len(),
                "keystroke"
            );
        }

        println!("{:<24}{:?}", format!("{}{}", field.display(), field.hint()), field.state());
        for event in events {
            println!("  {:?}", event);
        }
    }

    Ok(status(field.verdict().is_valid()))
}

fn cmd_generate(
    network: CardNetwork,
    count: usize,
    length: Option<usize>,
    formatted: bool,
) -> ExitCode {
    let prefix = generate::prefix_for_network(network);
    let length = length.unwrap_or_else(|| network.definition().min_length());
    if length <= prefix.len() {
        eprintln!(
            "Error: length must be greater than {} for {}",
            prefix.len(),
            network.name()
        );
        return ExitCode::FAILURE;
    }
    tracing::debug!(%network, count, length, "generating test cards");

    let generator = generate::CardGenerator::new(network).length(length);
    for card in generator.generate_many(count) {
        if formatted {
            let grouped = grouped_display(&card, network.definition());
            println!("{}", grouped.trim_end());
        } else {
            println!("{}", card);
        }
    }

    ExitCode::SUCCESS
}

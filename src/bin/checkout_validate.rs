//! CLI tool for payment input validation.
//!
//! # Usage
//!
//! ```bash
//! # Detect the brand of a (partial) card number
//! checkout-validate detect 3782
//!
//! # Validate a card number, optionally restricted to some brands
//! checkout-validate number "4111 1111 1111 1111" --allowed visa,mc
//!
//! # Validate an expiry date
//! checkout-validate expiry 12/30
//!
//! # Format and parse amounts
//! checkout-validate amount format 123456 EUR --symbol --locale de-DE
//! checkout-validate amount parse "1.234,56" EUR
//!
//! # Validate an IBAN
//! checkout-validate iban "NL91 ABNA 0417 1643 00" --output json
//!
//! # Validate a security code
//! checkout-validate cvc 1234 --card-type amex
//! ```
//!
//! Set `RUST_LOG=debug` to see library diagnostics on stderr.

use checkout_validation::amount::{self, Amount, Locale};
use checkout_validation::expiry::ExpiryDateValidator;
use checkout_validation::iban::{self, Iban};
use checkout_validation::security_code::validate_security_code;
use checkout_validation::{check_card_number, detect, mask, CardType, Validity};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "checkout-validate")]
#[command(author, version, about = "Payment input validation tool")]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect card brands from a (partial) card number
    Detect {
        /// Card number or prefix
        card_number: String,

        /// Restrict detection to these brands (e.g. visa,mc,amex)
        #[arg(short, long, value_delimiter = ',')]
        allowed: Vec<CardType>,
    },

    /// Validate a card number
    Number {
        /// Card number (spaces, dashes and dots allowed)
        card_number: String,

        /// Accepted brands (e.g. visa,mc,amex); all when omitted
        #[arg(short, long, value_delimiter = ',')]
        allowed: Vec<CardType>,

        /// Skip the Luhn checksum
        #[arg(long)]
        no_luhn: bool,
    },

    /// Validate an expiry date
    Expiry {
        /// Expiry date (MM/YY, M/YY or MM/YYYY)
        date: String,

        /// Separator between month and year
        #[arg(short, long, default_value = "/")]
        separator: char,

        /// Months after expiry during which the card is still accepted
        #[arg(long, default_value = "3")]
        max_expired_months: u32,

        /// Maximum years in future to accept
        #[arg(long, default_value = "30")]
        max_years: u32,
    },

    /// Format or parse amounts
    #[command(subcommand)]
    Amount(AmountCommand),

    /// Validate an IBAN
    Iban {
        /// IBAN, grouped or not
        value: String,
    },

    /// Validate a security code (CVC/CVV/CID)
    Cvc {
        /// Security code
        code: String,

        /// Card brand (Amex expects 4 digits, others 3)
        #[arg(short, long)]
        card_type: Option<CardType>,

        /// Accept an empty code
        #[arg(long)]
        optional: bool,
    },
}

#[derive(Subcommand)]
enum AmountCommand {
    /// Render minor units as a major-unit string
    Format {
        /// Value in minor units
        #[arg(allow_hyphen_values = true)]
        value: i64,

        /// ISO 4217 currency code
        currency: String,

        /// Prefix the currency symbol
        #[arg(long)]
        symbol: bool,

        /// Number conventions (e.g. en-US, de-DE)
        #[arg(short, long)]
        locale: Option<Locale>,
    },

    /// Convert a typed major-unit amount into minor units
    Parse {
        /// Amount as typed (e.g. "1,234.56")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// ISO 4217 currency code
        currency: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct DetectResponse {
    detected: Option<CardType>,
    estimated: Vec<CardType>,
    possible: Vec<CardType>,
}

#[derive(Serialize)]
struct NumberResponse {
    validity: Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    card_type: Option<CardType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ExpiryResponse {
    validity: Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

#[derive(Serialize)]
struct AmountFormatResponse {
    formatted: String,
    exponent: u32,
}

#[derive(Serialize)]
struct AmountParseResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    minor_units: Option<i64>,
    exponent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct IbanResponse {
    structure_valid: bool,
    checksum_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sepa: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct CvcResponse {
    validity: Validity,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = cli.output;

    match cli.command {
        Commands::Detect {
            card_number,
            allowed,
        } => cmd_detect(&card_number, &allowed, output),
        Commands::Number {
            card_number,
            allowed,
            no_luhn,
        } => cmd_number(&card_number, &allowed, !no_luhn, output),
        Commands::Expiry {
            date,
            separator,
            max_expired_months,
            max_years,
        } => {
            let validator = ExpiryDateValidator::new()
                .with_separator(separator)
                .with_max_expired_months(max_expired_months)
                .with_max_years_in_future(max_years);
            cmd_expiry(&validator, &date, output)
        }
        Commands::Amount(AmountCommand::Format {
            value,
            currency,
            symbol,
            locale,
        }) => cmd_amount_format(value, &currency, symbol, locale.as_ref(), output),
        Commands::Amount(AmountCommand::Parse { amount, currency }) => {
            cmd_amount_parse(&amount, &currency, output)
        }
        Commands::Iban { value } => cmd_iban(&value, output),
        Commands::Cvc {
            code,
            card_type,
            optional,
        } => cmd_cvc(&code, card_type, optional, output),
    }
}

fn allowed_types(allowed: &[CardType]) -> Option<&[CardType]> {
    if allowed.is_empty() {
        None
    } else {
        Some(allowed)
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn type_names(types: &[CardType]) -> String {
    if types.is_empty() {
        return "none".to_string();
    }
    types.iter().map(|t| t.name()).collect::<Vec<_>>().join(", ")
}

fn cmd_detect(card_number: &str, allowed: &[CardType], output: OutputFormat) -> ExitCode {
    let digits = checkout_validation::format::strip_formatting(card_number);
    let allowed = allowed_types(allowed);

    let response = DetectResponse {
        detected: detect(&digits, allowed),
        estimated: checkout_validation::estimate(&digits, allowed),
        possible: checkout_validation::possible_types(&digits, allowed),
    };

    match output {
        OutputFormat::Text => {
            match response.detected {
                Some(t) => println!("Detected Brand: {}", t.name()),
                None => println!("Detected Brand: Unknown"),
            }
            println!("Estimated: {}", type_names(&response.estimated));
            println!("Possible: {}", type_names(&response.possible));
        }
        OutputFormat::Json => print_json(&response),
    }

    exit_code(response.detected.is_some())
}

fn cmd_number(
    card_number: &str,
    allowed: &[CardType],
    luhn_check: bool,
    output: OutputFormat,
) -> ExitCode {
    let allowed = allowed_types(allowed);

    let response = match check_card_number(card_number, allowed, luhn_check) {
        Ok(digits) => NumberResponse {
            validity: Validity::Valid,
            card_type: detect(&digits, allowed),
            masked: Some(mask::mask_number(&digits)),
            error: None,
        },
        Err(e) => NumberResponse {
            validity: Validity::Invalid,
            card_type: None,
            masked: None,
            error: Some(e.to_string()),
        },
    };

    match output {
        OutputFormat::Text => {
            println!("Validity: {}", response.validity);
            if let Some(t) = response.card_type {
                println!("Brand: {}", t.name());
            }
            if let Some(masked) = &response.masked {
                println!("Masked: {}", masked);
            }
            if let Some(error) = &response.error {
                println!("Error: {}", error);
            }
        }
        OutputFormat::Json => print_json(&response),
    }

    exit_code(response.validity.is_valid())
}

fn cmd_expiry(validator: &ExpiryDateValidator, date: &str, output: OutputFormat) -> ExitCode {
    let result = validator.validate_expiry_date(date);
    let parsed = result.date();

    let response = ExpiryResponse {
        validity: result.validity(),
        month: (!parsed.is_empty()).then(|| parsed.month()),
        year: (!parsed.is_empty()).then(|| parsed.year()),
    };

    match output {
        OutputFormat::Text => {
            println!("Validity: {}", response.validity);
            if !parsed.is_empty() {
                println!("Month: {:02}", parsed.month());
                println!("Year: {}", parsed.year());
                println!("Formatted: {}", parsed);
            }
        }
        OutputFormat::Json => print_json(&response),
    }

    exit_code(result.is_valid())
}

fn cmd_amount_format(
    value: i64,
    currency: &str,
    symbol: bool,
    locale: Option<&Locale>,
    output: OutputFormat,
) -> ExitCode {
    let response = AmountFormatResponse {
        formatted: amount::format(&Amount::new(value, currency), symbol, locale),
        exponent: amount::get_exponent(currency),
    };

    match output {
        OutputFormat::Text => println!("{}", response.formatted),
        OutputFormat::Json => print_json(&response),
    }

    ExitCode::SUCCESS
}

fn cmd_amount_parse(input: &str, currency: &str, output: OutputFormat) -> ExitCode {
    let result = amount::parse_major_amount(currency, input);
    let success = result.is_ok();

    let response = AmountParseResponse {
        exponent: amount::get_exponent(currency),
        minor_units: result.as_ref().ok().copied(),
        error: result.err().map(|e| e.to_string()),
    };

    match output {
        OutputFormat::Text => match (&response.minor_units, &response.error) {
            (Some(units), _) => println!("{}", units),
            (None, Some(error)) => println!("Error: {}", error),
            (None, None) => {}
        },
        OutputFormat::Json => print_json(&response),
    }

    exit_code(success)
}

fn cmd_iban(value: &str, output: OutputFormat) -> ExitCode {
    let structure_valid = iban::validate(value);
    let parsed = Iban::parse(value);

    let response = match &parsed {
        Ok(parsed) => IbanResponse {
            structure_valid,
            checksum_valid: true,
            formatted: Some(parsed.to_string()),
            masked: Some(mask::mask_iban(parsed.value())),
            sepa: Some(parsed.is_sepa()),
            error: None,
        },
        Err(e) => IbanResponse {
            structure_valid,
            checksum_valid: false,
            formatted: None,
            masked: None,
            sepa: None,
            error: Some(e.to_string()),
        },
    };

    match output {
        OutputFormat::Text => {
            println!("Structure: {}", if structure_valid { "VALID" } else { "INVALID" });
            match &parsed {
                Ok(parsed) => {
                    println!("Checksum: VALID");
                    println!("Formatted: {}", parsed);
                    println!("Country: {}", parsed.country_code());
                    println!("SEPA: {}", if parsed.is_sepa() { "yes" } else { "no" });
                }
                Err(e) => println!("Error: {}", e),
            }
        }
        OutputFormat::Json => print_json(&response),
    }

    exit_code(parsed.is_ok())
}

fn cmd_cvc(code: &str, card_type: Option<CardType>, optional: bool, output: OutputFormat) -> ExitCode {
    let result = validate_security_code(code, card_type, optional);
    let response = CvcResponse {
        validity: result.validity(),
    };

    match output {
        OutputFormat::Text => println!("Validity: {}", response.validity),
        OutputFormat::Json => print_json(&response),
    }

    exit_code(result.validity() != Validity::Invalid)
}

use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;

use string_calculator::domain::{
    BareDelimiterPolicy, CalculatorConfig, CustomDelimiterMode, NegativePolicy, OversizePolicy,
};
use string_calculator::unescape_newlines;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Handling of values above `--max-number`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OversizeArg {
    ZeroFill,
    Drop,
    Reject,
}

impl From<OversizeArg> for OversizePolicy {
    fn from(arg: OversizeArg) -> Self {
        match arg {
            OversizeArg::ZeroFill => OversizePolicy::ZeroFill,
            OversizeArg::Drop => OversizePolicy::Drop,
            OversizeArg::Reject => OversizePolicy::Reject,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "string-calculator",
    version,
    about = "Sum delimited numbers read line by line from standard input"
)]
pub struct CliArgs {
    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log: LogLevel,

    /// Delimiter accepted alongside the comma (a literal `\n` means newline)
    #[arg(long, default_value = "\\n")]
    pub delimiter: String,

    /// Sum negative numbers instead of rejecting the line
    #[arg(long, default_value_t = false)]
    pub allow_negatives: bool,

    /// Largest magnitude that takes part in the sum
    #[arg(long, default_value = "1000")]
    pub max_number: Decimal,

    /// Disable the maximum entirely (overrides --max-number)
    #[arg(long, default_value_t = false)]
    pub no_max_number: bool,

    /// What to do with numbers above the maximum
    #[arg(long, value_enum, default_value_t = OversizeArg::ZeroFill)]
    pub oversize: OversizeArg,

    /// Require bare `//x\n` declarations to be a single character
    #[arg(long, default_value_t = false)]
    pub single_char_delimiters: bool,

    /// Declared delimiters replace the defaults instead of adding to them
    #[arg(long, default_value_t = false)]
    pub replace_defaults: bool,
}

impl CliArgs {
    /// Calculator configuration described by the flags
    pub fn to_config(&self) -> CalculatorConfig {
        let delimiter = unescape_newlines(&self.delimiter).into_owned();

        let mut config = CalculatorConfig::new()
            .with_default_delimiters([",".to_string(), delimiter])
            .with_oversize_policy(self.oversize.into());

        config = if self.no_max_number {
            config.without_max_value()
        } else {
            config.with_max_value(self.max_number)
        };

        if self.allow_negatives {
            config = config.with_negative_policy(NegativePolicy::Allow);
        }
        if self.single_char_delimiters {
            config = config.with_bare_delimiter_policy(BareDelimiterPolicy::SingleCharacter);
        }
        if self.replace_defaults {
            config = config.with_custom_delimiter_mode(CustomDelimiterMode::Replace);
        }

        config
    }
}

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use regen_patterns::{CommaMode, FieldOrder, YearDigits};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "regen",
    about = "Generate regular expressions for integers, decimals, dates and phone numbers",
    version
)]
pub struct Cli {
    /// Wrap the pattern so it has to match the whole string
    #[arg(short, long, global = true)]
    pub anchor: bool,

    /// Print a JSON object instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Whole numbers such as 42, -7 or 1,024
    Integer(IntegerArgs),
    /// Decimal numbers such as 3.14
    Decimal(DecimalArgs),
    /// Calendar dates such as 12/31/2024
    Date(DateArgs),
    /// Phone numbers such as (555) 123-4567
    Phone(PhoneArgs),
    /// Read options from a JSON file, or "-" for stdin
    File {
        /// Path to a JSON document with a "class" field
        path: PathBuf,
    },
}

#[derive(Args)]
pub struct IntegerArgs {
    /// Maximum number of digits (unbounded when omitted)
    #[arg(long, value_name = "N")]
    pub max_digits: Option<String>,

    /// Allow a leading minus sign
    #[arg(long)]
    pub negative: bool,

    /// Allow "-0"
    #[arg(long, requires = "negative")]
    pub negative_zero: bool,

    /// Allow zeroes before the first significant digit, as in 007
    #[arg(long)]
    pub leading_zeroes: bool,

    /// Whether thousands are separated with commas
    #[arg(long, value_enum, default_value_t = CommaArg::Never)]
    pub commas: CommaArg,
}

#[derive(Args)]
pub struct DecimalArgs {
    #[command(flatten)]
    pub whole: IntegerArgs,

    /// Maximum number of digits after the point (unbounded when omitted)
    #[arg(long, value_name = "N")]
    pub max_fraction_digits: Option<String>,

    /// Allow zeroes at the end of the fraction, as in 1.50
    #[arg(long)]
    pub trailing_zeroes: bool,
}

#[derive(Args)]
pub struct DateArgs {
    /// Allow "/" between fields
    #[arg(long)]
    pub slash: bool,

    /// Allow "." between fields
    #[arg(long)]
    pub period: bool,

    /// Additional separator characters, each allowed on its own
    #[arg(long, value_name = "CHARS")]
    pub custom: Option<String>,

    /// Require two-digit months and days, as in 01/05
    #[arg(long)]
    pub enforce_zero: bool,

    /// Number of year digits
    #[arg(long, value_enum, default_value_t = YearArg::Four)]
    pub year: YearArg,

    /// Order of the month and day fields
    #[arg(long, value_enum, default_value_t = OrderArg::Mdy)]
    pub order: OrderArg,

    /// Emit named groups for month, day and year
    #[arg(long)]
    pub labels: bool,
}

#[derive(Args)]
pub struct PhoneArgs {
    /// Require this three-digit area code
    #[arg(long, value_name = "CODE")]
    pub area_code: Option<String>,

    /// Accept (555) 123-4567
    #[arg(long)]
    pub parenthesized: bool,

    /// Accept 555-123-4567
    #[arg(long)]
    pub dashed: bool,

    /// Accept 5551234567
    #[arg(long)]
    pub unformatted: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CommaArg {
    Never,
    Optional,
    Required,
}

impl From<CommaArg> for CommaMode {
    fn from(value: CommaArg) -> Self {
        match value {
            CommaArg::Never => CommaMode::Never,
            CommaArg::Optional => CommaMode::Optional,
            CommaArg::Required => CommaMode::Required,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum YearArg {
    Two,
    Four,
    Either,
}

impl From<YearArg> for YearDigits {
    fn from(value: YearArg) -> Self {
        match value {
            YearArg::Two => YearDigits::Two,
            YearArg::Four => YearDigits::Four,
            YearArg::Either => YearDigits::Either,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OrderArg {
    /// Month, day, year
    Mdy,
    /// Day, month, year
    Dmy,
}

impl From<OrderArg> for FieldOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Mdy => FieldOrder::Mdy,
            OrderArg::Dmy => FieldOrder::Dmy,
        }
    }
}

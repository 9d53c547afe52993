use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode bytes as Crockford Base32
    Encode(EncodeArgs),
    /// Decode Crockford Base32 back into bytes
    Decode(DecodeArgs),
    /// Check whether strings are valid Crockford Base32
    Check(CheckArgs),
    /// Print the canonical spelling of Base32 strings
    Normalize(NormalizeArgs),
    /// Compare two Base32 strings, treating synonyms and case as equal
    Compare(CompareArgs),
    /// Show the effective settings
    Config(ConfigArgs),
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Do not print a newline after the encoded text
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Treat whitespace in the input as invalid instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for validity checks
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Strings to check
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Only set the exit status
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Arguments for normalization
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Strings to normalize
    #[arg(required = true)]
    pub inputs: Vec<String>,
}

/// Arguments for comparison
#[derive(Args, Debug)]
pub struct CompareArgs {
    pub left: String,
    pub right: String,
}

/// Arguments for showing settings
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

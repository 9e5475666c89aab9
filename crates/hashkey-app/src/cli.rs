use std::borrow::Cow;
use std::ffi::OsString;

use clap::Parser;
use thiserror::Error;

pub const USAGE: &str = "Usage: hashkey <identifier> [timestamp]";

/// Derive an OTP hash key and print a cURL command for the send endpoint.
///
/// Every argument is positional and taken verbatim, so `-h` and `-V` are
/// hashed like any other value.
#[derive(Debug, Parser)]
#[command(name = "hashkey", about, disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Subject being hashed, e.g. a phone number.
    #[arg(allow_hyphen_values = true)]
    pub identifier: OsString,

    /// Timestamp to hash with; defaults to now in epoch milliseconds.
    #[arg(allow_hyphen_values = true)]
    pub timestamp: Option<OsString>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", USAGE)]
    Usage,
}

impl Cli {
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|_| CliError::Usage)
    }

    /// Non-UTF-8 bytes become U+FFFD.
    pub fn identifier(&self) -> Cow<'_, str> {
        self.identifier.to_string_lossy()
    }

    pub fn timestamp(&self) -> Option<Cow<'_, str>> {
        self.timestamp.as_deref().map(|ts| ts.to_string_lossy())
    }
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logprice")]
#[command(version, about = "Tiered log volume pricing calculator")]
pub struct Cli {
    /// Monthly log event count (raw text, digits only)
    #[arg(short = 'l', long = "logs", value_name = "COUNT")]
    pub logs: Option<String>,

    /// Number of users (raw text, digits only)
    #[arg(short = 'u', long = "users", value_name = "COUNT")]
    pub users: Option<String>,

    /// Enter interactive calculator mode
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Print the active rate schedule
    #[arg(long = "show-tiers")]
    pub show_tiers: bool,

    /// Use a specific config file instead of the default location
    #[arg(long = "config-file", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// True when a one-shot calculation was requested on the command line
    pub fn has_quantities(&self) -> bool {
        self.logs.is_some() || self.users.is_some()
    }
}

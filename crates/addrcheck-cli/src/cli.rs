use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "addrcheck",
    about = "Compare two account addresses as a sanity check",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with presentation settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two addresses and show where they differ
    Compare(CompareArgs),
    /// Check addresses against their mixed-case checksum
    Validate(ValidateArgs),
    /// Print the checksummed form of an address
    Checksum(ChecksumArgs),
    /// Read pasted addresses from stdin, one per line
    Watch(WatchArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Address to check
    pub first: String,
    /// Address to check against
    pub second: String,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

#[derive(Args)]
pub struct ChecksumArgs {
    pub address: String,
}

#[derive(Args)]
pub struct WatchArgs {
    /// Line that empties both inputs
    #[arg(long, default_value = ":clear")]
    pub clear_command: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compare() {
        let cli = Cli::try_parse_from(["addrcheck", "compare", "0xaa", "0xbb"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.first, "0xaa");
            assert_eq!(args.second, "0xbb");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn compare_needs_two_addresses() {
        assert!(Cli::try_parse_from(["addrcheck", "compare", "0xaa"]).is_err());
    }

    #[test]
    fn compare_accepts_empty_strings() {
        let cli = Cli::try_parse_from(["addrcheck", "compare", "", ""]).unwrap();
        assert!(matches!(cli.command, Command::Compare(_)));
    }

    #[test]
    fn parse_validate_many() {
        let cli = Cli::try_parse_from(["addrcheck", "validate", "a", "b", "c"]).unwrap();
        if let Command::Validate(args) = cli.command {
            assert_eq!(args.addresses, vec!["a", "b", "c"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn validate_needs_an_address() {
        assert!(Cli::try_parse_from(["addrcheck", "validate"]).is_err());
    }

    #[test]
    fn parse_checksum() {
        let cli = Cli::try_parse_from(["addrcheck", "checksum", "0xabc"]).unwrap();
        if let Command::Checksum(args) = cli.command {
            assert_eq!(args.address, "0xabc");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_watch_default_clear() {
        let cli = Cli::try_parse_from(["addrcheck", "watch"]).unwrap();
        if let Command::Watch(args) = cli.command {
            assert_eq!(args.clear_command, ":clear");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_globals() {
        let cli = Cli::try_parse_from([
            "addrcheck", "--verbose", "--no-color", "--config", "c.toml", "watch",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["addrcheck", "--format", "json", "checksum", "x"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}

use clap::Parser;
use rat_nav::DestinationKey;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rat-nav-demo")]
#[command(about = "Terminal playground for navigation patterns")]
#[command(version)]
pub struct Cli {
    /// Destination key to open at startup, as a deep link would
    #[arg(long, value_name = "KEY")]
    pub deep_link: Option<DestinationKey>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Milliseconds between animation frames
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rat-nav-demo"]).unwrap();
        assert!(cli.deep_link.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(cli.tick_ms, 30);
    }

    #[test]
    fn test_deep_link_is_taken_verbatim() {
        let cli = Cli::try_parse_from(["rat-nav-demo", "--deep-link", "MyRegisteredView"]).unwrap();
        assert_eq!(cli.deep_link.unwrap(), "MyRegisteredView");
    }

    #[test]
    fn test_empty_deep_link_rejected() {
        assert!(Cli::try_parse_from(["rat-nav-demo", "--deep-link", ""]).is_err());
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Cli::try_parse_from(["rat-nav-demo", "--tick-ms", "0"]).is_err());
    }
}

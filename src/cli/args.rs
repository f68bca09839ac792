use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "menese-wallet")]
#[command(version)]
#[command(about = "Multi-chain wallet operations via the MeneseSDK gateway canister", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured dfx network (e.g. "ic", "local")
    #[arg(long)]
    pub network: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get wallet addresses on all supported chains (free)
    Addresses,
    /// Check balance on one chain (free)
    Balance {
        /// Chain name: sol, solana, icp, xrp, sui, eth, ethereum
        chain: String,
    },
    /// Send tokens on a chain (each send is billed by the gateway)
    Send {
        /// Chain name: sol, icp, btc, eth, arb, xrp, sui, ton
        chain: String,
        /// Amount in the chain's native denomination, e.g. 0.01
        amount: String,
        /// Destination address or principal
        to: String,
    },
    /// Check gateway billing account status (free)
    Account,
    /// Check status of dependencies
    Status,
    /// Initialize configuration
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_balance_with_chain() {
        let cli = Cli::try_parse_from(["menese-wallet", "balance", "sol"]).unwrap();
        match cli.command {
            Commands::Balance { chain } => assert_eq!(chain, "sol"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parses_send_with_all_positionals() {
        let cli =
            Cli::try_parse_from(["menese-wallet", "send", "icp", "1.5", "aaaaa-aa"]).unwrap();
        match cli.command {
            Commands::Send { chain, amount, to } => {
                assert_eq!(chain, "icp");
                assert_eq!(amount, "1.5");
                assert_eq!(to, "aaaaa-aa");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_balance_without_chain() {
        assert!(Cli::try_parse_from(["menese-wallet", "balance"]).is_err());
    }

    #[test]
    fn test_rejects_send_with_missing_args() {
        assert!(Cli::try_parse_from(["menese-wallet", "send", "sol", "0.01"]).is_err());
    }

    #[test]
    fn test_rejects_empty_invocation() {
        assert!(Cli::try_parse_from(["menese-wallet"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["menese-wallet", "stake"]).is_err());
    }

    #[test]
    fn test_network_override_flag() {
        let cli =
            Cli::try_parse_from(["menese-wallet", "--network", "local", "account"]).unwrap();
        assert_eq!(cli.network.as_deref(), Some("local"));
        assert!(matches!(cli.command, Commands::Account));
    }
}

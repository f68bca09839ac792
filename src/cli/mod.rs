/// CLI argument parsing and command handling - Gateway
mod args;
mod commands;

pub use args::{Cli, Commands};
pub use commands::{
    get_account, get_addresses, get_balance, handle_command, send_tokens, show_status,
};

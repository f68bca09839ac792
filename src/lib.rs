pub mod app;
pub mod chains;
pub mod cli;
pub mod constants;
pub mod gateway;
pub mod utils;

pub use app::{load_config, Config};
pub use chains::{balance_query, send_spec, BalanceQuery, SendPlan};
pub use gateway::{CallMode, CanisterCall, DfxGateway, Gateway};
pub use utils::WalletError;

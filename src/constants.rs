/// Constants module to avoid magic numbers in the codebase

// Gateway Canister
pub const DEFAULT_CANISTER_ID: &str = "urs2a-ziaaa-aaaad-aembq-cai";
pub const DEFAULT_NETWORK: &str = "ic"; // "ic" for mainnet, "local" for local replica
pub const DEFAULT_DFX_BIN: &str = "dfx";

// Timeouts
pub const DFX_CALL_TIMEOUT_SECS: u64 = 120;

// Gateway module for chains - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod registry;
mod units;

// Public re-exports - the ONLY way to access chain functionality
pub use registry::{balance_chains, balance_query, send_chains, send_spec, BalanceQuery, SendPlan, SendSpec};
pub use units::to_base_units;

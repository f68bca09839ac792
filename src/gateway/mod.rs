// Gateway module for canister access - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod dfx;
mod invocation;

// Public re-exports - the ONLY way to access canister functionality
pub use dfx::{is_dfx_installed, DfxGateway, Gateway};
pub use invocation::{CallMode, CanisterCall};

#[cfg(test)]
pub use dfx::MockGateway;

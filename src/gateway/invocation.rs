/// Invocation mode on the gateway canister
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    /// Read-only, does not mutate canister state, free of charge
    Query,
    /// State-changing call, billed by the gateway
    Update,
}

/// One canister method invocation, ready to hand to dfx
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanisterCall {
    pub method: String,
    /// Candid argument tuple, e.g. `()` or `("ethereum")`
    pub args: String,
    pub mode: CallMode,
}

impl CanisterCall {
    /// Read-only call with no arguments
    pub fn query(method: impl Into<String>) -> Self {
        Self::query_with_args(method, "()")
    }

    /// Read-only call with an explicit argument tuple
    pub fn query_with_args(method: impl Into<String>, args: impl Into<String>) -> Self {
        Self { method: method.into(), args: args.into(), mode: CallMode::Query }
    }

    /// State-changing call
    pub fn update(method: impl Into<String>, args: impl Into<String>) -> Self {
        Self { method: method.into(), args: args.into(), mode: CallMode::Update }
    }

    /// Render the dfx argument vector for this call.
    ///
    /// `--query` must sit between `call` and `--network`; dfx rejects it
    /// after the positional operands.
    pub fn to_dfx_args(&self, network: &str, canister_id: &str) -> Vec<String> {
        let mut args = vec!["canister".to_string(), "call".to_string()];
        if self.mode == CallMode::Query {
            args.push("--query".to_string());
        }
        args.extend([
            "--network".to_string(),
            network.to_string(),
            canister_id.to_string(),
            self.method.clone(),
            self.args.clone(),
        ]);
        args
    }
}

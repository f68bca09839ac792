use super::units::to_base_units;

/// Read-only balance lookup on one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceQuery {
    /// Canister method to query
    pub method: &'static str,
    /// Display symbol for the chain's native asset
    pub symbol: &'static str,
    /// Candid argument tuple (EVM chains pass an RPC network literal)
    pub args: &'static str,
}

/// Transfer descriptor for one chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SendSpec {
    method: &'static str,
    display: &'static str,
    unit_name: &'static str,
    unit_factor: f64,
    shape: TupleShape,
}

/// A fully-formed transfer request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendPlan {
    /// Canister method to call
    pub method: &'static str,
    /// Asset name used in progress output
    pub display: &'static str,
    /// Name of the chain's smallest unit
    pub unit_name: &'static str,
    /// Amount converted to the smallest unit
    pub units: u128,
    /// Candid argument tuple
    pub args: String,
}

/// Candid tuple layout expected by each transfer method family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TupleShape {
    /// ("<to>", <units>)
    AddressAndAmount,
    /// (principal "<to>", <units>)
    PrincipalAndAmount,
    /// ("<network>", "<to>", "<units>", null)
    EvmAutonomous(&'static str),
    /// ("<to>", "<units>", null)
    AddressAndQuotedAmount,
}

impl SendSpec {
    /// Convert the amount and lay out the candid tuple for this chain
    pub fn plan(&self, amount: f64, to: &str) -> SendPlan {
        let units = to_base_units(amount, self.unit_factor);
        let args = match self.shape {
            TupleShape::AddressAndAmount => format!(r#"("{to}", {units})"#),
            TupleShape::PrincipalAndAmount => format!(r#"(principal "{to}", {units})"#),
            TupleShape::EvmAutonomous(network) => {
                format!(r#"("{network}", "{to}", "{units}", null)"#)
            }
            TupleShape::AddressAndQuotedAmount => format!(r#"("{to}", "{units}", null)"#),
        };
        SendPlan {
            method: self.method,
            display: self.display,
            unit_name: self.unit_name,
            units,
            args,
        }
    }
}

// Ordered tables; the order defines the supported-chain listings shown
// to the user.

const BALANCE_QUERIES: &[(&[&str], BalanceQuery)] = &[
    (
        &["sol", "solana"],
        BalanceQuery { method: "getMySolanaBalance", symbol: "SOL", args: "()" },
    ),
    (
        &["icp"],
        BalanceQuery { method: "getICPBalance", symbol: "ICP", args: "()" },
    ),
    (
        &["xrp"],
        BalanceQuery { method: "getMyXrpBalance", symbol: "XRP", args: "()" },
    ),
    (
        &["sui"],
        BalanceQuery { method: "getMySuiBalance", symbol: "SUI", args: "()" },
    ),
    (
        &["eth", "ethereum"],
        BalanceQuery { method: "getMyEvmBalance", symbol: "ETH", args: r#"("ethereum")"# },
    ),
];

const SEND_SPECS: &[(&[&str], SendSpec)] = &[
    (
        &["sol", "solana"],
        SendSpec {
            method: "sendSolTransaction",
            display: "SOL",
            unit_name: "lamports",
            unit_factor: 1e9,
            shape: TupleShape::AddressAndAmount,
        },
    ),
    (
        &["icp"],
        SendSpec {
            method: "sendICP",
            display: "ICP",
            unit_name: "e8s",
            unit_factor: 1e8,
            shape: TupleShape::PrincipalAndAmount,
        },
    ),
    (
        &["btc", "bitcoin"],
        SendSpec {
            method: "sendBitcoin",
            display: "BTC",
            unit_name: "satoshis",
            unit_factor: 1e8,
            shape: TupleShape::AddressAndAmount,
        },
    ),
    (
        &["eth", "ethereum"],
        SendSpec {
            method: "sendEvmNativeTokenAutonomous",
            display: "ETH",
            unit_name: "wei",
            unit_factor: 1e18,
            shape: TupleShape::EvmAutonomous("ethereum"),
        },
    ),
    (
        &["arb", "arbitrum"],
        SendSpec {
            method: "sendEvmNativeTokenAutonomous",
            display: "ETH on Arbitrum",
            unit_name: "wei",
            unit_factor: 1e18,
            shape: TupleShape::EvmAutonomous("arbitrum"),
        },
    ),
    (
        &["xrp"],
        SendSpec {
            method: "sendXrpAutonomous",
            display: "XRP",
            unit_name: "drops",
            unit_factor: 1e6,
            shape: TupleShape::AddressAndQuotedAmount,
        },
    ),
    (
        &["sui"],
        SendSpec {
            method: "sendSui",
            display: "SUI",
            unit_name: "mist",
            unit_factor: 1e9,
            shape: TupleShape::AddressAndAmount,
        },
    ),
    (
        &["ton"],
        SendSpec {
            method: "sendTonSimple",
            display: "TON",
            unit_name: "nanotons",
            unit_factor: 1e9,
            shape: TupleShape::AddressAndAmount,
        },
    ),
];

// Short names only, matching the listing the gateway documents
const SEND_CHAINS: &[&str] = &["sol", "icp", "btc", "eth", "arb", "xrp", "sui", "ton"];

/// Look up the balance query for a chain (case-insensitive)
pub fn balance_query(chain: &str) -> Option<BalanceQuery> {
    let chain = chain.to_lowercase();
    BALANCE_QUERIES
        .iter()
        .find(|(keys, _)| keys.contains(&chain.as_str()))
        .map(|(_, query)| *query)
}

/// Chains accepted by `balance`, in listing order
pub fn balance_chains() -> Vec<&'static str> {
    BALANCE_QUERIES.iter().flat_map(|(keys, _)| keys.iter().copied()).collect()
}

/// Look up the transfer descriptor for a chain (case-insensitive)
pub fn send_spec(chain: &str) -> Option<&'static SendSpec> {
    let chain = chain.to_lowercase();
    SEND_SPECS
        .iter()
        .find(|(keys, _)| keys.contains(&chain.as_str()))
        .map(|(_, spec)| spec)
}

/// Chains accepted by `send`, in listing order
pub fn send_chains() -> &'static [&'static str] {
    SEND_CHAINS
}

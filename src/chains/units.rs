/// Convert a native-denomination amount to a chain's smallest unit.
///
/// Multiplies in f64 and truncates toward zero, matching the gateway's
/// documented arithmetic. Precision loss is possible for very large
/// amounts; callers treat the result as best-effort.
pub fn to_base_units(amount: f64, factor: f64) -> u128 {
    (amount * factor) as u128
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sol_to_lamports() {
        assert_eq!(to_base_units(0.01, 1e9), 10_000_000);
        assert_eq!(to_base_units(1.0, 1e9), 1_000_000_000);
    }

    #[test]
    fn test_icp_to_e8s() {
        assert_eq!(to_base_units(1.5, 1e8), 150_000_000);
    }

    #[test]
    fn test_eth_to_wei_exceeding_u64() {
        // 20 ETH in wei is above u64::MAX; the widened target must hold it
        let wei = to_base_units(20.0, 1e18);
        assert_eq!(wei, 20_000_000_000_000_000_000);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 0.0000000015 SOL is 1.5 lamports; fractional units are dropped
        assert_eq!(to_base_units(0.0000000015, 1e9), 1);
    }
}

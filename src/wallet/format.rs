//! Display formatting for wallet addresses and balances

const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;
const ETHER_DECIMALS: usize = 18;

/// Characters kept from the start of an address (including `0x`)
const ADDRESS_HEAD: usize = 6;
/// Characters kept from the end of an address
const ADDRESS_TAIL: usize = 4;
/// Characters of the ether string shown in the header
const BALANCE_WIDTH: usize = 5;

/// Shorten an address to `0xABCD...1234`. Short inputs are returned unchanged.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= ADDRESS_HEAD + ADDRESS_TAIL {
        return address.to_string();
    }
    let head: String = chars[..ADDRESS_HEAD].iter().collect();
    let tail: String = chars[chars.len() - ADDRESS_TAIL..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Format a wei amount as ether, e.g. `1.23456`, `2.0`, `0.000001`.
/// Trailing fractional zeros are trimmed but one fractional digit always remains.
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let frac = wei % WEI_PER_ETHER;
    let digits = format!("{:0width$}", frac, width = ETHER_DECIMALS);
    let trimmed = digits.trim_end_matches('0');
    if trimmed.is_empty() {
        format!("{}.0", whole)
    } else {
        format!("{}.{}", whole, trimmed)
    }
}

/// Ether string cut to the header display width (`1.23456` -> `1.234`)
pub fn format_balance(wei: u128) -> String {
    format_ether(wei).chars().take(BALANCE_WIDTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_keeps_head_and_tail() {
        assert_eq!(
            truncate_address("0xABCDEF0123456789abcdef0123456789ABCD1234"),
            "0xABCD...1234"
        );
        assert_eq!(truncate_address("0x12345678"), "0x12345678");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn ether_formatting() {
        assert_eq!(format_ether(0), "0.0");
        assert_eq!(format_ether(WEI_PER_ETHER), "1.0");
        assert_eq!(format_ether(1_234_560_000_000_000_000), "1.23456");
        assert_eq!(format_ether(1_000_000_000_000), "0.000001");
        assert_eq!(format_ether(1), "0.000000000000000001");
        assert_eq!(format_ether(1_500 * WEI_PER_ETHER), "1500.0");
    }

    #[test]
    fn balance_is_cut_to_five_characters() {
        assert_eq!(format_balance(1_234_560_000_000_000_000), "1.234");
        assert_eq!(format_balance(WEI_PER_ETHER / 2), "0.5");
        assert_eq!(format_balance(12_345 * WEI_PER_ETHER), "12345");
    }
}

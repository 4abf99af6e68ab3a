//! Base-5 and hex conversions used by the codec

const BASE: u32 = 5;

/// Hex characters needed to hold any `digits`-wide base-5 numeral
pub(super) fn hex_width_for_base5(digits: usize) -> usize {
    let max = (BASE as u64).pow(digits as u32).saturating_sub(1);
    let bits = u64::BITS - max.leading_zeros();
    (bits as usize).div_ceil(4).max(1)
}

/// Value of a base-5 numeral, most significant digit first
pub(super) fn base5_value(digits: &[u8]) -> u32 {
    digits.iter().fold(0, |acc, &d| acc * BASE + d as u32)
}

/// Exactly `width` base-5 digits of `value`, or `None` when it does not fit
pub(super) fn base5_digits(mut value: u32, width: usize) -> Option<Vec<u8>> {
    let mut digits = vec![0u8; width];
    for slot in digits.iter_mut().rev() {
        *slot = (value % BASE) as u8;
        value /= BASE;
    }
    (value == 0).then_some(digits)
}

/// Lowercase hex, zero-padded to `width`
pub(super) fn to_hex(value: u32, width: usize) -> String {
    format!("{:0width$x}", value, width = width)
}

/// Parse hex digits only; signs and whitespace are rejected
pub(super) fn parse_hex(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}

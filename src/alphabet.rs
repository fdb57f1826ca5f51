//! The standard alphabet used for the compact text form of fixed width sets

/// One symbol per bit position, `0..=62`
pub const STANDARD_TOKENS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_";

const SYMBOLS: &[u8] = STANDARD_TOKENS.as_bytes();

/// Number of symbols in the alphabet
pub const SYMBOL_COUNT: u32 = SYMBOLS.len() as u32;

/// Returns the symbol for bit position `pos`
///
/// ```
/// use enum_bitset::alphabet::symbol_for;
/// assert_eq!(symbol_for(0), Some('0'));
/// assert_eq!(symbol_for(10), Some('A'));
/// assert_eq!(symbol_for(61), Some('z'));
/// assert_eq!(symbol_for(62), Some('_'));
/// assert_eq!(symbol_for(63), None);
/// ```
#[inline]
pub fn symbol_for(pos: u32) -> Option<char> {
    SYMBOLS.get(pos as usize).map(|&b| b as char)
}

/// Returns the bit position of `c`, the inverse of [`symbol_for`]
#[inline]
pub fn position_of(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 36),
        '_' => Some(62),
        _ => None,
    }
}

#[test]
fn test_inverse() {
    assert_eq!(SYMBOL_COUNT, 63);
    for pos in 0..SYMBOL_COUNT {
        let c = symbol_for(pos).unwrap();
        assert_eq!(position_of(c), Some(pos));
    }
    for c in ['-', ' ', '+', 'é', '\0'] {
        assert_eq!(position_of(c), None);
    }
}

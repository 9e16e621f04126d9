//! Order-preserving base32 codec for 128-bit values.
//!
//! The alphabet is the 32 characters `0123456789abcdefghjkmnpqrstvwxyz`,
//! with `i`, `l`, `o`, and `u` excluded as visually ambiguous. Symbols
//! are assigned in increasing order to increasing 5-bit group values and
//! written most-significant group first, so the encoding is monotonic:
//! `a < b` implies `encode(a) < encode(b)` under plain byte comparison.
//! That property is what keeps identifiers sortable by creation time.
//!
//! 26 groups of 5 bits cover 130 bits; the top two bits of the frame are
//! always zero, so the first character of a valid suffix is `'0'`-`'7'`.

use crate::error::SuffixError;

/// Length of an encoded suffix in characters.
pub const ENCODED_LEN: usize = 26;

/// The fixed, ordered 32-symbol alphabet.
const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Marks bytes outside the alphabet in the reverse table.
const INVALID: u8 = 0xff;

/// Reverse lookup: byte value to 5-bit group value.
const DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes a 128-bit value as 26 alphabet characters.
///
/// The output is canonical by construction; `decode(&encode(v))` always
/// succeeds and returns `v`.
#[must_use]
pub fn encode(value: u128) -> String {
    let mut out = [0u8; ENCODED_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        let shift = 125 - 5 * i;
        *slot = ALPHABET[((value >> shift) & 0x1f) as usize];
    }
    out.into_iter().map(char::from).collect()
}

/// Decodes a 26-character suffix back to its 128-bit value.
///
/// Rejects any deviation from canonical form: wrong length, characters
/// outside the alphabet, and first-symbol values above `'7'` (the
/// decoded value would not fit in 128 bits). Nothing is truncated or
/// normalized.
pub fn decode(s: &str) -> Result<u128, SuffixError> {
    let len = s.chars().count();
    if len != ENCODED_LEN {
        return Err(SuffixError::WrongLength(len));
    }
    let mut value: u128 = 0;
    for (i, ch) in s.chars().enumerate() {
        let group = if ch.is_ascii() {
            DECODE[ch as usize]
        } else {
            INVALID
        };
        if group == INVALID {
            return Err(SuffixError::IllegalChar(ch));
        }
        if i == 0 && group > 7 {
            return Err(SuffixError::Overflow);
        }
        value = (value << 5) | u128::from(group);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(0), "00000000000000000000000000");
        assert_eq!(encode(1), "00000000000000000000000001");
        assert_eq!(encode(u128::MAX), "7zzzzzzzzzzzzzzzzzzzzzzzzz");
    }

    #[test]
    fn test_reference_uuid_vector() {
        // Published reference vector for this identifier format.
        let value = uuid::Uuid::parse_str("01890a5d-ac96-774b-bcce-b302099a8057")
            .unwrap()
            .as_u128();
        assert_eq!(encode(value), "01h455vb4pex5vsknk084sn02q");
        assert_eq!(decode("01h455vb4pex5vsknk084sn02q").unwrap(), value);
    }

    #[test]
    fn test_max_valid_first_char() {
        assert_eq!(decode("70000000000000000000000000").unwrap(), 7u128 << 125);
    }

    #[rstest]
    #[case::empty("", SuffixError::WrongLength(0))]
    #[case::too_short("0000000000000000000000000", SuffixError::WrongLength(25))]
    #[case::too_long("000000000000000000000000000", SuffixError::WrongLength(27))]
    #[case::letter_i("0000000000000000000000000i", SuffixError::IllegalChar('i'))]
    #[case::letter_l("000000000000000000000000l0", SuffixError::IllegalChar('l'))]
    #[case::letter_o("00000000000000000000000o00", SuffixError::IllegalChar('o'))]
    #[case::letter_u("0000000000000000000000u000", SuffixError::IllegalChar('u'))]
    #[case::uppercase("000000000000000000000000A0", SuffixError::IllegalChar('A'))]
    #[case::non_ascii("0000000000000000000000000é", SuffixError::IllegalChar('é'))]
    #[case::overflow_eight("80000000000000000000000000", SuffixError::Overflow)]
    #[case::overflow_z("z0000000000000000000000000", SuffixError::Overflow)]
    fn test_decode_rejects(#[case] input: &str, #[case] expected: SuffixError) {
        assert_eq!(decode(input).unwrap_err(), expected);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(value in any::<u128>()) {
            prop_assert_eq!(decode(&encode(value)).unwrap(), value);
        }

        #[test]
        fn prop_order_preserving(a in any::<u128>(), b in any::<u128>()) {
            prop_assert_eq!(a.cmp(&b), encode(a).cmp(&encode(b)));
        }
    }
}

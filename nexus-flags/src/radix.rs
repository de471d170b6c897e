//! Radix formatting and parsing for flag storage.

use alloc::string::String;
use alloc::vec::Vec;

use crate::bits::Bits;
use crate::error::{ParseBitsError, ParseErrorKind};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `value` in `radix` with lowercase digits and no prefix.
///
/// # Panics
///
/// Panics if `radix` is not in `2..=36`.
pub(crate) fn format<B: Bits>(mut value: B, radix: u32) -> String {
    assert!((2..=36).contains(&radix), "radix must be in 2..=36");

    if value.is_zero() {
        return String::from("0");
    }

    let mut digits = Vec::new();
    while !value.is_zero() {
        let (quotient, digit) = value.div_rem(radix);
        digits.push(DIGITS[digit as usize]);
        value = quotient;
    }
    digits.reverse();

    // DIGITS is ASCII
    digits.into_iter().map(char::from).collect()
}

/// Parses `text` in `radix`. Accepts either letter case, rejects signs and
/// whitespace. Digits beyond the storage width wrap, the same truncation
/// numeric input gets.
///
/// # Panics
///
/// Panics if `radix` is not in `2..=36`.
pub(crate) fn parse<B: Bits>(text: &str, radix: u32) -> Result<B, ParseBitsError> {
    assert!((2..=36).contains(&radix), "radix must be in 2..=36");

    if text.is_empty() {
        return Err(ParseBitsError::new(ParseErrorKind::Empty));
    }

    text.chars().try_fold(B::ZERO, |acc, c| {
        let digit = c
            .to_digit(radix)
            .ok_or(ParseBitsError::new(ParseErrorKind::InvalidDigit))?;
        Ok(acc.wrapping_mul_add(radix, digit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bases() {
        assert_eq!(format(0u8, 10), "0");
        assert_eq!(format(255u8, 10), "255");
        assert_eq!(format(255u8, 16), "ff");
        assert_eq!(format(5u32, 2), "101");
        assert_eq!(format(35u32, 36), "z");
        assert_eq!(format(u128::MAX, 10), "340282366920938463463374607431768211455");
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn format_radix_too_small() {
        let _ = format(1u8, 1);
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn format_radix_too_large() {
        let _ = format(1u8, 37);
    }

    #[test]
    fn parse_valid() {
        assert_eq!(parse::<u8>("255", 10), Ok(255));
        assert_eq!(parse::<u16>("FF", 16), Ok(255));
        assert_eq!(parse::<u16>("ff", 16), Ok(255));
        assert_eq!(parse::<u64>("0", 10), Ok(0));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse::<u8>("", 10).unwrap_err().kind(),
            ParseErrorKind::Empty
        );
        assert_eq!(
            parse::<u8>("12a", 10).unwrap_err().kind(),
            ParseErrorKind::InvalidDigit
        );
        assert_eq!(
            parse::<u8>("-1", 10).unwrap_err().kind(),
            ParseErrorKind::InvalidDigit
        );
    }

    #[test]
    fn parse_wraps_at_storage_width() {
        assert_eq!(parse::<u8>("256", 10), Ok(0));
        assert_eq!(parse::<u8>("257", 10), Ok(1));
        assert_eq!(parse::<u16>("1ffff", 16), Ok(0xffff));
        assert_eq!(
            parse::<u32>("340282366920938463463374607431768211457", 10),
            Ok(1)
        );
    }
}

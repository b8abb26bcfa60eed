//! Base-10 digit decomposition.

/// Returns the base-10 digits of `n`, most significant first.
///
/// `decompose(0)` is empty: zero has no digits here, so callers must read an empty
/// sequence as "digit count zero", never as the digit 0. Full operands never hit this
/// because an operation rejects zero operands.
pub fn decompose(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}

/// Concatenates digits (most significant first) back into a number.
/// Leading zeros are dropped; an empty slice yields 0.
pub fn compose(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &d| acc.saturating_mul(10).saturating_add(d as u64))
}

/// Digits of the integer part of a drawn operand.
///
/// Free-form levels draw real operands; the vertical diagram shows their integer part.
pub fn operand_digits(value: f64) -> Vec<u8> {
    if !value.is_finite() {
        return Vec::new();
    }
    decompose(value.abs().trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_zero_is_empty() {
        assert_eq!(decompose(0), Vec::<u8>::new());
    }

    #[test]
    fn test_decompose_keeps_inner_zero() {
        assert_eq!(decompose(205), vec![2, 0, 5]);
    }

    #[test]
    fn test_decompose_single_digit() {
        assert_eq!(decompose(7), vec![7]);
    }

    #[test]
    fn test_decompose_large() {
        assert_eq!(decompose(1_000_000), vec![1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_compose_drops_leading_zeros() {
        assert_eq!(compose(&[0, 3, 0]), 30);
        assert_eq!(compose(&[]), 0);
        assert_eq!(compose(&decompose(98_765)), 98_765);
    }

    #[test]
    fn test_operand_digits_truncates_reals() {
        assert_eq!(operand_digits(42.97), vec![4, 2]);
        assert_eq!(operand_digits(0.5), Vec::<u8>::new());
        assert_eq!(operand_digits(f64::NAN), Vec::<u8>::new());
    }
}

//! Keystroke text to canonical amount.
//!
//! Permissive by contract: anything that is not an ASCII digit is dropped
//! silently. There is no error path.

use crate::{format::NumberFormat, types::Amount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedInput {
    /// Input with every non-digit removed. Leading zeros are kept.
    pub digits:  String,
    /// Grouped rendering of the same value; empty when `digits` is.
    pub display: String,
}

impl NormalizedInput {
    /// `None` when no digits were entered. Saturates at `Amount::MAX`.
    pub fn amount(&self) -> Option<Amount> {
        if self.digits.is_empty() {
            return None;
        }
        Some(self.digits.parse().unwrap_or(Amount::MAX))
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

pub fn normalize(input: &str, fmt: &impl NumberFormat) -> NormalizedInput {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return NormalizedInput::default();
    }

    let significant = digits.trim_start_matches('0');
    let display = if significant.is_empty() {
        "0".to_string()
    } else {
        fmt.group_digits(significant)
    };

    NormalizedInput { digits, display }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::IndianLocale;

    #[test]
    fn strips_everything_but_digits() {
        let n = normalize("₹ 12,00,000/yr", &IndianLocale);
        assert_eq!(n.digits, "1200000");
        assert_eq!(n.display, "12,00,000");
        assert_eq!(n.amount(), Some(1_200_000));
    }

    #[test]
    fn leading_zeros_kept_in_digits_but_not_display() {
        let n = normalize("007", &IndianLocale);
        assert_eq!(n.digits, "007");
        assert_eq!(n.display, "7");
        assert_eq!(n.amount(), Some(7));

        let z = normalize("000", &IndianLocale);
        assert_eq!(z.display, "0");
        assert_eq!(z.amount(), Some(0));
    }

    #[test]
    fn overflow_saturates() {
        let n = normalize("99999999999999999999999", &IndianLocale);
        assert_eq!(n.amount(), Some(Amount::MAX));
    }
}

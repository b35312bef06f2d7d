use serde::Serialize;
use std::fmt;

/// A whole-dollar USD amount.
///
/// Displays as `$` followed by comma-grouped digits: `$0`, `$500`, `$1,500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    #[must_use]
    pub const fn dollars(amount: u32) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        grouped.push('$');
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(Money::dollars(0).to_string(), "$0");
        assert_eq!(Money::dollars(500).to_string(), "$500");
        assert_eq!(Money::dollars(1_500).to_string(), "$1,500");
        assert_eq!(Money::dollars(2_500).to_string(), "$2,500");
        assert_eq!(Money::dollars(1_234_567).to_string(), "$1,234,567");
        assert_eq!(Money::dollars(100_000).to_string(), "$100,000");
    }

    #[test]
    fn orders_by_amount() {
        assert!(Money::dollars(500) < Money::dollars(1_500));
    }
}

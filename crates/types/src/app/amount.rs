// Path: crates/types/src/app/amount.rs
//! Fixed-point quantity of value held by an output.

use crate::error::AmountError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative quantity of value, stored as an integer count of hundredths.
///
/// The text form is strict: ASCII digits, optionally followed by `.` and one or
/// two fractional digits. No sign, exponent or surrounding whitespace is
/// accepted. The canonical rendering always carries exactly two fractional
/// digits (`"50.00"`), and that rendering is what gets persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Number of fractional decimal digits carried by every amount.
    pub const DECIMALS: u32 = 2;
    /// Minor units per whole unit.
    const SCALE: u64 = 10u64.pow(Self::DECIMALS);
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Builds an amount from a raw count of hundredths.
    pub const fn from_minor_units(units: u64) -> Self {
        Amount(units)
    }

    /// Builds an amount from a whole number of units.
    pub fn from_whole(units: u64) -> Option<Self> {
        units.checked_mul(Self::SCALE).map(Amount)
    }

    /// The raw count of hundredths.
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Returns `true` for the zero amount.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Checked subtraction. Returns `None` if `rhs` exceeds `self`.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Malformed(s.to_string()));
        }

        let fraction_units = match fraction {
            None => 0,
            Some(fraction) => {
                if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(AmountError::Malformed(s.to_string()));
                }
                if fraction.len() > Self::DECIMALS as usize {
                    return Err(AmountError::TooPrecise(s.to_string()));
                }
                let digits: u64 = fraction
                    .parse()
                    .map_err(|_| AmountError::Malformed(s.to_string()))?;
                // Right-pad to the full precision: "5" means fifty hundredths.
                digits * 10u64.pow(Self::DECIMALS - fraction.len() as u32)
            }
        };

        // `whole` is all digits here, so the only parse failure is overflow.
        let whole: u64 = whole
            .parse()
            .map_err(|_| AmountError::Overflow(s.to_string()))?;
        whole
            .checked_mul(Self::SCALE)
            .and_then(|units| units.checked_add(fraction_units))
            .map(Amount)
            .ok_or_else(|| AmountError::Overflow(s.to_string()))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_forms() {
        assert_eq!("50".parse::<Amount>().unwrap(), Amount::from_minor_units(5000));
        assert_eq!("20.5".parse::<Amount>().unwrap(), Amount::from_minor_units(2050));
        assert_eq!("0.05".parse::<Amount>().unwrap(), Amount::from_minor_units(5));
        assert_eq!("007.10".parse::<Amount>().unwrap(), Amount::from_minor_units(710));
    }

    #[test]
    fn rejects_loose_text() {
        for bad in ["-1", "+1", " 1", "1 ", "1e3", ".5", "5.", "1.2.3", "abc", "1,5"] {
            assert!(
                matches!(bad.parse::<Amount>(), Err(AmountError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
        assert!(matches!("".parse::<Amount>(), Err(AmountError::Empty)));
        assert!(matches!(
            "0.125".parse::<Amount>(),
            Err(AmountError::TooPrecise(_))
        ));
        assert!(matches!(
            "184467440737095517".parse::<Amount>(),
            Err(AmountError::Overflow(_))
        ));
    }

    #[test]
    fn canonical_text_has_two_decimals() {
        assert_eq!(Amount::from_minor_units(3000).to_string(), "30.00");
        assert_eq!(Amount::from_minor_units(1).to_string(), "0.01");
        assert_eq!("12.3".parse::<Amount>().unwrap().to_string(), "12.30");
    }

    #[test]
    fn serializes_as_string() {
        let amount: Amount = "12.5".parse().unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"12.50\"");
        let back: Amount = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(back, amount);
        assert!(serde_json::from_str::<Amount>("12.5").is_err());
    }

    #[test]
    fn checked_arithmetic() {
        let a = Amount::from_minor_units(u64::MAX);
        assert_eq!(a.checked_add(Amount::from_minor_units(1)), None);
        assert_eq!(Amount::ZERO.checked_sub(Amount::from_minor_units(1)), None);
        assert_eq!(Amount::from_whole(3), Some(Amount::from_minor_units(300)));
    }
}

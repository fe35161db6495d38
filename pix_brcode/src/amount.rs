//! Fixed precision handling of payment amounts.

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
#[allow(missing_docs)]
pub enum ParseAmountError {
    #[error("Negative amounts cannot be encoded in a payment request: {0}")]
    Negative(String),

    #[error("Amounts have at most 2 fractional digits, given a string with {given}")]
    TooPrecise { given: usize },

    #[error(transparent)]
    Parse(#[from] ParseIntError),

    #[error("There was an overflow in converting the string {0}")]
    Overflow(String),
}

/// A payment amount in centavos.
///
/// The wire format carries amounts with a period separator and exactly two
/// fractional digits, so 1250 centavos renders as "12.50".
///
/// ```
/// # use std::str::FromStr;
/// # use pix_brcode::Amount;
/// assert_eq!(Amount::from_str("12.5").unwrap().to_string(), "12.50");
/// assert_eq!(Amount::from_str("12,50").unwrap(), Amount::from_centavos(1250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from its value in centavos.
    pub fn from_centavos(centavos: u64) -> Amount {
        Amount(centavos)
    }

    /// The value in centavos.
    pub fn centavos(&self) -> u64 {
        self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parse a decimal amount, accepting at most two fractional digits.
    ///
    /// Payment forms in pt-BR locales hand over a decimal comma, normalized
    /// here to a period before parsing. A sign is rejected rather than
    /// silently dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let val = s.replacen(',', ".", 1);
        if val.starts_with('-') {
            return Err(ParseAmountError::Negative(s.to_string()));
        }
        let centavos = match val.find('.') {
            Some(idx) => {
                let given = val.len() - idx - 1;
                if given > 2 {
                    return Err(ParseAmountError::TooPrecise { given });
                }
                let without_dot = val.replacen('.', "", 1);
                let units: u64 = without_dot.parse()?;
                let pow = 10u64.pow(2 - given as u32);
                units
                    .checked_mul(pow)
                    .ok_or_else(|| ParseAmountError::Overflow(s.to_string()))?
            }
            None => {
                let units: u64 = val.parse()?;
                units
                    .checked_mul(100)
                    .ok_or_else(|| ParseAmountError::Overflow(s.to_string()))?
            }
        };
        Ok(Amount(centavos))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn check_parse(s: &str, expected_centavos: u64) {
        assert_eq!(
            Amount::from_str(s).unwrap(),
            Amount::from_centavos(expected_centavos),
            "parsing {s}"
        );
    }

    fn check_display(centavos: u64, expected: &str) {
        assert_eq!(Amount::from_centavos(centavos).to_string(), expected);
    }

    #[test]
    fn test_parse() {
        check_parse("12", 1200);
        check_parse("12.5", 1250);
        check_parse("12.50", 1250);
        check_parse("12,50", 1250);
        check_parse("12,5", 1250);
        check_parse("0.01", 1);
        check_parse(".5", 50);
        check_parse("0", 0);
        check_parse("1500", 150000);
    }

    #[test]
    fn test_display() {
        check_display(1250, "12.50");
        check_display(1, "0.01");
        check_display(99, "0.99");
        check_display(0, "0.00");
        check_display(150000, "1500.00");
    }

    #[test]
    fn test_errors() {
        let exp = "Negative amounts cannot be encoded in a payment request: -1";
        assert_eq!(exp, Amount::from_str("-1").unwrap_err().to_string());

        let exp = "Negative amounts cannot be encoded in a payment request: -0,50";
        assert_eq!(exp, Amount::from_str("-0,50").unwrap_err().to_string());

        let exp = "Amounts have at most 2 fractional digits, given a string with 3";
        assert_eq!(exp, Amount::from_str("1.005").unwrap_err().to_string());

        let exp = "invalid digit found in string";
        assert_eq!(exp, Amount::from_str("1..2").unwrap_err().to_string());

        let exp = "invalid digit found in string";
        assert_eq!(exp, Amount::from_str("abc").unwrap_err().to_string());

        let exp = "invalid digit found in string";
        assert_eq!(exp, Amount::from_str("0.1 ").unwrap_err().to_string());

        let exp = "cannot parse integer from empty string";
        assert_eq!(exp, Amount::from_str("").unwrap_err().to_string());

        let max = u64::MAX.to_string();
        let exp = format!("There was an overflow in converting the string {max}");
        assert_eq!(exp, Amount::from_str(&max).unwrap_err().to_string());
    }

    #[test]
    fn test_parse_display_roundtrip() {
        for centavos in [0, 1, 99, 100, 101, 1250, 987654321] {
            let amount = Amount::from_centavos(centavos);
            assert_eq!(Amount::from_str(&amount.to_string()).unwrap(), amount);
        }
    }
}

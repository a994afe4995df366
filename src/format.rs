use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::AppError;

/// Locales the price formatter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Brazilian real, `R$ 1.234,56`.
    #[default]
    PtBr,
    /// US dollar, `$1,234.56`.
    EnUs,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    pub fn currency(&self) -> CurrencyFormat {
        match self {
            Locale::PtBr => CurrencyFormat {
                symbol: "R$ ",
                decimal_sep: ',',
                group_sep: '.',
            },
            Locale::EnUs => CurrencyFormat {
                symbol: "$",
                decimal_sep: '.',
                group_sep: ',',
            },
        }
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(AppError::InvalidInput(format!(
                "unknown locale '{}', expected pt-BR or en-US",
                other
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency rendering rules for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub decimal_sep: char,
    pub group_sep: char,
}

impl CurrencyFormat {
    /// Render `amount` with two decimal places, rounding half away from zero.
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        rounded.set_sign_positive(true);
        rounded.rescale(2);

        let digits = rounded.to_string();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut out = String::with_capacity(digits.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push_str(&group_thousands(int_part, self.group_sep));
        out.push(self.decimal_sep);
        out.push_str(frac_part);
        out
    }
}

/// Insert `sep` between every group of three digits, counting from the right.
fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Format a price in the default locale (pt-BR).
pub fn format_value(amount: Decimal) -> String {
    Locale::default().currency().format(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pt_br() {
        let fmt = Locale::PtBr.currency();
        assert_eq!(fmt.format(Decimal::new(2300, 2)), "R$ 23,00");
        assert_eq!(fmt.format(Decimal::new(199, 1)), "R$ 19,90");
        assert_eq!(fmt.format(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(fmt.format(Decimal::new(100000000, 2)), "R$ 1.000.000,00");
    }

    #[test]
    fn test_en_us() {
        let fmt = Locale::EnUs.currency();
        assert_eq!(fmt.format(Decimal::new(123456, 2)), "$1,234.56");
        assert_eq!(fmt.format(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let fmt = Locale::EnUs.currency();
        assert_eq!(fmt.format(Decimal::new(1005, 3)), "$1.01");
        assert_eq!(fmt.format(Decimal::new(1004, 3)), "$1.00");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_value(Decimal::new(-150, 2)), "-R$ 1,50");
        // Rounds to zero, so no sign.
        assert_eq!(format_value(Decimal::new(-1, 3)), "R$ 0,00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("123456", '.'), "123.456");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}

use crate::decimal::Decimal;
use rug::{Integer, Rational};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_FRACTION_DIGITS: usize = 20;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LiteralError {
    #[error("malformed decimal literal {0:?}")]
    Malformed(String),
    #[error("division by zero")]
    DivisionByZero,
}

/// An exact decimal backed by a GMP rational.
///
/// Nothing is ever rounded during arithmetic; `1 / 3 * 3` is exactly `1`.
/// Rounding only happens when the value is displayed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RugDecimal(pub Rational);

impl RugDecimal {
    pub fn is_integer(&self) -> bool {
        *self.0.denom() == 1
    }
}

// [+-]? digits* ('.' digits*)?, with at least one digit somewhere.
fn parse_literal(literal: &str) -> Result<Rational, LiteralError> {
    let malformed = || LiteralError::Malformed(literal.to_string());

    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let digits = format!("{}{}", whole, fraction);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let mut numerator = Integer::from_str_radix(&digits, 10).map_err(|_| malformed())?;
    if negative {
        numerator = -numerator;
    }
    let exponent = u32::try_from(fraction.len()).map_err(|_| malformed())?;
    let denominator = Integer::from(Integer::u_pow_u(10, exponent));
    Ok(Rational::from((numerator, denominator)))
}

impl Decimal for RugDecimal {
    type Error = LiteralError;

    fn from_literal(literal: &str) -> Result<Self, LiteralError> {
        parse_literal(literal).map(RugDecimal)
    }

    fn add(self, rhs: Self) -> Self {
        RugDecimal(self.0 + rhs.0)
    }

    fn subtract(self, rhs: Self) -> Self {
        RugDecimal(self.0 - rhs.0)
    }

    fn multiply(self, rhs: Self) -> Self {
        RugDecimal(self.0 * rhs.0)
    }

    fn divide(self, rhs: Self) -> Result<Self, LiteralError> {
        if rhs.0.cmp0() == Ordering::Equal {
            return Err(LiteralError::DivisionByZero);
        }
        Ok(RugDecimal(self.0 / rhs.0))
    }
}

impl FromStr for RugDecimal {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, LiteralError> {
        RugDecimal::from_literal(s)
    }
}

// Scales by 10^digits and rounds half away from zero.
fn scaled(value: &Rational, digits: u32) -> Integer {
    let power = Integer::from(Integer::u_pow_u(10, digits));
    let numerator = Integer::from(value.numer() * &power);
    let denominator = value.denom();

    let mut quotient = Integer::from(&numerator / denominator);
    let remainder = Integer::from(&numerator - Integer::from(&quotient * denominator));
    let twice = Integer::from(&remainder * 2u32).abs();
    if twice >= *denominator {
        match numerator.cmp0() {
            Ordering::Less => quotient -= 1,
            _ => quotient += 1,
        }
    }
    quotient
}

// Returns the sign and the unsigned digits.
fn render(value: &RugDecimal, precision: Option<usize>) -> Result<(bool, String), fmt::Error> {
    if precision.is_none() && value.is_integer() {
        let negative = value.0.cmp0() == Ordering::Less;
        return Ok((negative, Integer::from(value.0.numer().abs_ref()).to_string()));
    }

    let digits = precision.unwrap_or(DEFAULT_FRACTION_DIGITS);
    let quotient = scaled(&value.0, u32::try_from(digits).map_err(|_| fmt::Error)?);
    let negative = quotient.cmp0() == Ordering::Less;
    let magnitude = quotient.abs().to_string();
    let magnitude = format!("{:0>width$}", magnitude, width = digits + 1);
    let (whole, fraction) = magnitude.split_at(magnitude.len() - digits);

    // an explicit precision keeps trailing zeros, like floats do
    let fraction = match precision {
        Some(_) => fraction,
        None => fraction.trim_end_matches('0'),
    };

    if fraction.is_empty() {
        Ok((negative, whole.to_string()))
    } else {
        Ok((negative, format!("{}.{}", whole, fraction)))
    }
}

impl fmt::Display for RugDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (negative, digits) = render(self, f.precision())?;
        // width, fill, alignment and `+` behave as they do for integers
        f.pad_integral(!negative, "", &digits)
    }
}

//! The fixed-point decimal value the spec's "decimal" numeric type
//! materializes as: a mantissa and a count of fractional digits.

/// A fixed-point decimal: `mantissa * 10^-scale`.
///
/// `scale` is the number of digits written after the decimal point in the
/// literal, not a normalized exponent — `1.50` round-trips as
/// `Decimal { mantissa: 150, scale: 2 }`, not `{ mantissa: 15, scale: 1 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decimal {
    /// The digits of the literal, sign included, with the decimal point
    /// removed.
    pub mantissa: i128,
    /// The number of `mantissa` digits that fall after the decimal point.
    pub scale: u32,
}

impl Decimal {
    /// Constructs a decimal from a mantissa and scale.
    pub const fn new(mantissa: i128, scale: u32) -> Self {
        Decimal { mantissa, scale }
    }

    /// Constructs an integral decimal (`scale == 0`).
    pub const fn from_integer(value: i128) -> Self {
        Decimal {
            mantissa: value,
            scale: 0,
        }
    }
}

impl From<i128> for Decimal {
    fn from(value: i128) -> Self {
        Decimal::from_integer(value)
    }
}

//! Integer, float, and [`Decimal`] encoding: each converts its value to
//! canonical decimal text and appends it (spec.md §4.3) — no radix prefix,
//! no digit separators, regardless of how the value was decoded.

use crate::{encode::Encode, format::FormatState, value::Decimal};
use std::io::Write as _;

macro_rules! impl_int_encode {
    ($($ty:ty),* $(,)?) => {$(
        impl Encode for $ty {
            fn encode(&self, _state: FormatState, buf: &mut Vec<u8>) {
                write!(buf, "{}", self).expect("writing to a Vec<u8> never fails");
            }
        }
    )*};
}

impl_int_encode!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Encode for f32 {
    fn encode(&self, _state: FormatState, buf: &mut Vec<u8>) {
        write!(buf, "{}", self).expect("writing to a Vec<u8> never fails");
    }
}

impl Encode for f64 {
    fn encode(&self, _state: FormatState, buf: &mut Vec<u8>) {
        write!(buf, "{}", self).expect("writing to a Vec<u8> never fails");
    }
}

impl Encode for Decimal {
    fn encode(&self, _state: FormatState, buf: &mut Vec<u8>) {
        let neg = self.mantissa < 0;
        let magnitude = self.mantissa.unsigned_abs();
        let digits = magnitude.to_string();
        let scale = self.scale as usize;
        if neg {
            buf.push(b'-');
        }
        if scale == 0 {
            buf.extend_from_slice(digits.as_bytes());
            return;
        }
        if digits.len() <= scale {
            buf.push(b'0');
            buf.push(b'.');
            for _ in 0..(scale - digits.len()) {
                buf.push(b'0');
            }
            buf.extend_from_slice(digits.as_bytes());
        } else {
            let split = digits.len() - scale;
            buf.extend_from_slice(digits[..split].as_bytes());
            buf.push(b'.');
            buf.extend_from_slice(digits[split..].as_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Mode;

    fn encode<T: Encode>(value: &T) -> Vec<u8> {
        let mut buf = Vec::new();
        value.encode(FormatState::new(Mode::Compact), &mut buf);
        buf
    }

    #[test]
    fn unsigned_int() {
        assert_eq!(encode(&23u32), b"23");
    }

    #[test]
    fn negative_int() {
        assert_eq!(encode(&-26i8), b"-26");
    }

    #[test]
    fn decimal_with_leading_zero_fraction() {
        assert_eq!(encode(&Decimal::new(5, 3)), b"0.005");
    }

    #[test]
    fn decimal_negative() {
        assert_eq!(encode(&Decimal::new(-150, 2)), b"-1.50");
    }

    #[test]
    fn decimal_integral() {
        assert_eq!(encode(&Decimal::from_integer(7)), b"7");
    }

    #[test]
    fn float_basic() {
        assert_eq!(encode(&3.25f64), b"3.25");
    }
}

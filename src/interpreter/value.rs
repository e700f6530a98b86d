use std::fmt::{Debug, Display};

use crate::util::num::{FormatOptions, format_integer, format_real};

/// The numeric domain a session evaluates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Signed 64 bit integers.
    Integer,
    /// Double precision floating point.
    Real,
}

/// A numeric domain usable as the value type of a session.
///
/// Every literal, symbol and intermediate result of one session lives in the
/// same domain; there is no promotion between domains at runtime. The crate
/// implements it for `f64` (the real domain) and `i64` (the integer domain).
///
/// Operations that the domain cannot represent natively, such as the
/// transcendental functions or exponentiation on integers, go through `f64`
/// and are converted back with [`Number::from_f64`].
pub trait Number: Copy + PartialEq + PartialOrd + Default + Debug + Display + 'static {
    /// Which domain this type implements.
    const DOMAIN: Domain;

    /// Converts the text of a numeric literal into a value.
    ///
    /// # Returns
    /// `None` if the literal is not representable in this domain.
    fn from_literal(text: &str) -> Option<Self>;

    /// Converts a floating-point result back into this domain.
    fn from_f64(value: f64) -> Self;

    /// Widens the value to `f64`.
    fn to_f64(self) -> f64;

    /// Adds `rhs`.
    fn add(self, rhs: Self) -> Self;
    /// Subtracts `rhs`.
    fn sub(self, rhs: Self) -> Self;
    /// Multiplies by `rhs`.
    fn mul(self, rhs: Self) -> Self;
    /// Negates the value.
    fn neg(self) -> Self;

    /// Divides, or returns `None` if the domain traps on this divisor.
    fn div(self, rhs: Self) -> Option<Self>;

    /// Remainder with the sign of the dividend, or `None` if the domain traps
    /// on this divisor.
    fn rem(self, rhs: Self) -> Option<Self>;

    /// Raises `self` to the power `exponent`.
    fn pow(self, exponent: Self) -> Self;

    /// Renders the value as text.
    fn format(self, options: &FormatOptions) -> String;
}

impl Number for f64 {
    const DOMAIN: Domain = Domain::Real;

    /// Accepts `12`, `12.`, `.5`, `12.5` and a lone `.`, which reads as zero.
    ///
    /// # Example
    /// ```
    /// use llcalc::interpreter::value::Number;
    ///
    /// assert_eq!(<f64 as Number>::from_literal("12.5"), Some(12.5));
    /// assert_eq!(<f64 as Number>::from_literal(".5"), Some(0.5));
    /// assert_eq!(<f64 as Number>::from_literal("."), Some(0.0));
    /// assert_eq!(<f64 as Number>::from_literal("1.2.3"), None);
    /// ```
    fn from_literal(text: &str) -> Option<Self> {
        if text == "." {
            return Some(0.0);
        }
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return None;
        }
        text.parse().ok()
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    fn neg(self) -> Self {
        -self
    }

    fn div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }

    fn rem(self, rhs: Self) -> Option<Self> {
        Some(self % rhs)
    }

    fn pow(self, exponent: Self) -> Self {
        self.powf(exponent)
    }

    fn format(self, options: &FormatOptions) -> String {
        format_real(self, options)
    }
}

impl Number for i64 {
    const DOMAIN: Domain = Domain::Integer;

    /// Literals are unsigned, so the magnitude of `i64::MIN` is accepted and
    /// reads as `i64::MIN`. Negating it wraps back to the same value, which
    /// keeps `-9223372036854775808` readable.
    ///
    /// # Example
    /// ```
    /// use llcalc::interpreter::value::Number;
    ///
    /// assert_eq!(<i64 as Number>::from_literal("42"), Some(42));
    /// assert_eq!(<i64 as Number>::from_literal("4.2"), None);
    /// assert_eq!(<i64 as Number>::from_literal("9223372036854775808"), Some(i64::MIN));
    /// assert_eq!(<i64 as Number>::from_literal("9223372036854775809"), None);
    /// assert_eq!(<i64 as Number>::from_literal("99999999999999999999"), None);
    /// ```
    fn from_literal(text: &str) -> Option<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let magnitude: u64 = text.parse().ok()?;
        if magnitude == Self::MIN.unsigned_abs() {
            return Some(Self::MIN);
        }
        Self::try_from(magnitude).ok()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        // saturating, NaN becomes 0
        value as Self
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }

    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }

    fn neg(self) -> Self {
        self.wrapping_neg()
    }

    fn div(self, rhs: Self) -> Option<Self> {
        (rhs != 0).then(|| self.wrapping_div(rhs))
    }

    fn rem(self, rhs: Self) -> Option<Self> {
        (rhs != 0).then(|| self.wrapping_rem(rhs))
    }

    /// # Example
    /// ```
    /// use llcalc::interpreter::value::Number;
    ///
    /// assert_eq!(Number::pow(2_i64, 10), 1024);
    /// assert_eq!(Number::pow(2_i64, -1), 0);
    /// ```
    fn pow(self, exponent: Self) -> Self {
        Self::from_f64(self.to_f64().powf(exponent.to_f64()))
    }

    fn format(self, options: &FormatOptions) -> String {
        format_integer(self, options.radix)
    }
}

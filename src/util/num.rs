/// Default radix for rendered numbers.
pub const DEFAULT_RADIX: u32 = 10;
/// Default number of fractional digits for real numbers.
pub const DEFAULT_DECIMALS: u8 = 8;
/// Largest supported radix (digits `0-9` then `a-z`).
pub const MAX_RADIX: u32 = 36;
/// Largest number of fractional digits rendered for real numbers.
pub const MAX_DECIMALS: u8 = 15;

/// Tolerance within which a rendered real number reads back as the value it
/// was rendered from, for the default radix and number of decimals.
pub const ROUND_EPSILON: f64 = 1e-8;

/// Controls how numbers are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Radix of the rendered digits, between 2 and 36.
    pub radix:    u32,
    /// Maximum number of fractional digits for real numbers, at most
    /// [`MAX_DECIMALS`]. Trailing zeros are stripped.
    pub decimals: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { radix:    DEFAULT_RADIX,
               decimals: DEFAULT_DECIMALS, }
    }
}

/// Renders an integer in the given radix.
///
/// Digits above 9 are lowercase letters. The radix is clamped into `2..=36`.
///
/// # Example
/// ```
/// use llcalc::util::num::format_integer;
///
/// assert_eq!(format_integer(-255, 16), "-ff");
/// assert_eq!(format_integer(0, 2), "0");
/// assert_eq!(format_integer(i64::MIN, 10), "-9223372036854775808");
/// ```
#[must_use]
pub fn format_integer(value: i64, radix: u32) -> String {
    let mut out = String::new();
    if value < 0 {
        out.push('-');
    }
    push_limbs(&mut out, u128_limbs(u128::from(value.unsigned_abs())), radix);
    out
}

/// Renders a real number in fixed-point notation.
///
/// The fractional part is rounded at the last of `options.decimals` places,
/// carrying into the integer part when needed, and trailing zeros are
/// stripped. The integer part is always written out digit by digit, so every
/// finite value renders as a literal the scanner reads back, `f64::MAX`
/// included.
///
/// # Example
/// ```
/// use llcalc::util::num::{FormatOptions, format_real};
///
/// let opts = FormatOptions::default();
/// assert_eq!(format_real(1123.0, &opts), "1123");
/// assert_eq!(format_real(0.1 + 0.2, &opts), "0.3");
/// assert_eq!(format_real(-2.5, &opts), "-2.5");
/// assert_eq!(format_real(std::f64::consts::PI, &opts), "3.14159265");
/// assert_eq!(format_real(0.999_999_999_9, &opts), "1");
/// assert_eq!(format_real(1e39, &opts), format!("1{}", "0".repeat(39)));
/// assert_eq!(format_real(f64::NEG_INFINITY, &opts), "-inf");
/// ```
#[must_use]
pub fn format_real(value: f64, options: &FormatOptions) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let radix = clamp_radix(options.radix);
    let decimals = options.decimals.min(MAX_DECIMALS);
    let base = f64::from(radix);
    let unit = base.powi(i32::from(decimals));

    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let mut frac = ((magnitude - whole) * unit).round();
    if frac >= unit {
        whole += 1.0;
        frac = 0.0;
    }

    let mut digits = Vec::with_capacity(usize::from(decimals));
    for _ in 0..decimals {
        let digit = frac % base;
        frac = (frac / base).trunc();
        digits.push(digit_char(float_digit(digit)));
    }
    digits.reverse();
    while digits.last() == Some(&'0') {
        digits.pop();
    }

    let mut out = String::new();
    if value < 0.0 && (whole > 0.0 || !digits.is_empty()) {
        out.push('-');
    }
    push_limbs(&mut out, integral_limbs(whole), radix);
    if !digits.is_empty() {
        out.push('.');
        out.extend(digits);
    }
    out
}

/// Returns `true` when two reals agree within [`ROUND_EPSILON`], scaled by
/// their magnitude above 1.
///
/// # Example
/// ```
/// use llcalc::util::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(1.0, 1.001));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= ROUND_EPSILON * scale
}

fn clamp_radix(radix: u32) -> u32 {
    radix.clamp(2, MAX_RADIX)
}

/// Appends an unsigned number held as little-endian 32 bit limbs.
fn push_limbs(out: &mut String, mut limbs: Vec<u32>, radix: u32) {
    let radix = u64::from(clamp_radix(radix));
    let start = out.len();
    loop {
        let mut rem = 0_u64;
        for limb in limbs.iter_mut().rev() {
            let current = (rem << 32) | u64::from(*limb);
            *limb = narrow(current / radix);
            rem = current % radix;
        }
        out.push(digit_char(narrow(rem)));

        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        if limbs.is_empty() {
            break;
        }
    }
    // all pushed digits are ASCII
    let reversed: String = out[start..].chars().rev().collect();
    out.truncate(start);
    out.push_str(&reversed);
}

#[allow(clippy::cast_possible_truncation)]
fn u128_limbs(value: u128) -> Vec<u32> {
    (0..4).map(|i| (value >> (32 * i)) as u32).collect()
}

/// Splits a non-negative integral `f64` into limbs exactly.
fn integral_limbs(whole: f64) -> Vec<u32> {
    if whole < 1.0 {
        return Vec::new();
    }

    // whole >= 1 is normal: mantissa * 2^(exponent - 1075)
    let bits = whole.to_bits();
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);
    let exponent = (bits >> 52) & 0x7ff;

    let mut value = u128::from(mantissa);
    let mut limbs = Vec::new();
    if exponent < 1075 {
        value >>= 1075 - exponent;
    } else {
        let shift = exponent - 1075;
        limbs.resize(usize::try_from(shift / 32).unwrap_or_default(), 0);
        value <<= shift % 32;
    }
    limbs.extend(u128_limbs(value));
    limbs
}

fn digit_char(digit: u32) -> char {
    char::from_digit(digit, MAX_RADIX).unwrap_or('?')
}

#[allow(clippy::cast_possible_truncation)]
const fn narrow(value: u64) -> u32 {
    value as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_digit(digit: f64) -> u32 {
    digit as u32
}

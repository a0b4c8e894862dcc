//! Numeric formatting for table cells.
//!
//! Missing values (NaN) never fail: they format to the empty string so a
//! report with gaps in its data still renders.

use crate::error::{FormatError, Result};

/// Notation used when formatting a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Fixed-point, `significant_digits` decimals after the point.
    #[default]
    Fixed,
    /// Exponential, `significant_digits` decimals in the mantissa.
    Scientific,
}

/// How a single value becomes text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub significant_digits: usize,
    pub notation: Notation,
    /// Wrap scientific output in `\num{...}` for siunitx.
    pub tex_mode: bool,
}

impl FormatSpec {
    /// Build a spec, rejecting negative digit counts.
    pub fn new(significant_digits: i32, notation: Notation, tex_mode: bool) -> Result<Self> {
        let significant_digits = usize::try_from(significant_digits)
            .map_err(|_| FormatError::NegativeDigits(significant_digits))?;

        Ok(Self {
            significant_digits,
            notation,
            tex_mode,
        })
    }

    /// Format a value under this spec.
    pub fn format(&self, x: f64) -> String {
        if x.is_nan() {
            return String::new();
        }

        match self.notation {
            Notation::Fixed => format!("{:.*}", self.significant_digits, x),
            Notation::Scientific => {
                let text = exponential(x, self.significant_digits);
                if self.tex_mode {
                    format!("\\num{{{}}}", text)
                } else {
                    text
                }
            }
        }
    }
}

/// Format `x` in fixed-point notation with `sig` decimals.
///
/// # Example
///
/// ```rust
/// use texfrag::fixed;
///
/// assert_eq!(fixed(3.14159, 2).unwrap(), "3.14");
/// assert_eq!(fixed(f64::NAN, 2).unwrap(), "");
/// ```
pub fn fixed(x: f64, sig: i32) -> Result<String> {
    Ok(FormatSpec::new(sig, Notation::Fixed, false)?.format(x))
}

/// Format `x` in scientific notation with `sig` mantissa decimals.
///
/// With `tex_mode` the result is wrapped as `\num{...}`.
///
/// ```rust
/// use texfrag::scientific;
///
/// assert_eq!(scientific(1234.5, 2, true).unwrap(), "\\num{1.23e+03}");
/// assert_eq!(scientific(1234.5, 2, false).unwrap(), "1.23e+03");
/// ```
pub fn scientific(x: f64, sig: i32, tex_mode: bool) -> Result<String> {
    Ok(FormatSpec::new(sig, Notation::Scientific, tex_mode)?.format(x))
}

/// Exponential form with a signed exponent of at least two digits (`1.23e+03`).
fn exponential(x: f64, precision: usize) -> String {
    if x.is_infinite() {
        return if x > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let raw = format!("{:.*e}", precision, x);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };

    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => raw,
    }
}

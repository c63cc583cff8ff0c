//! Compact rendering of numbers for text widgets.
//!
//! [`PrettyFormat`] picks one of four renderings for a number:
//!
//! | Input | Rendering | Example |
//! |-------|-----------|---------|
//! | exactly zero | `0` | `0` |
//! | `|n| < small` or `|n| > large` | scientific, signed 2-digit exponent | `1.234e+04` |
//! | within `snap` of a nonzero integer | integer, truncated toward zero | `2` |
//! | anything else | fixed point, trailing zeros stripped | `0.5` |
//!
//! # Invariants
//!
//! 1. Formatting is a pure function of the number and the format.
//! 2. Fixed-point output never ends in `0` after a decimal point, and never
//!    ends in a bare `.`.
//! 3. Scientific output always carries an explicit exponent sign and at
//!    least two exponent digits.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | `NaN` | `nan` |
//! | `±∞` | `inf` / `-inf` |

/// Formatter settings for [`PrettyNumber`].
///
/// The defaults (`precision = 3`, scientific below `1e-3` or above `1e3`,
/// integer snapping within `1e-3`) are available as [`PrettyFormat::DEFAULT`]
/// and usable in `const` context.
///
/// ```
/// use propbind_format::PrettyFormat;
///
/// let fmt = PrettyFormat::DEFAULT;
/// assert_eq!(fmt.format(0.5), "0.5");
/// assert_eq!(fmt.format(12340.0), "1.234e+04");
/// assert_eq!(fmt.format(3.0002), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrettyFormat {
    /// Digits after the decimal point in fixed and scientific renderings.
    pub precision: usize,
    /// Magnitudes below this switch to scientific notation.
    pub small: f64,
    /// Magnitudes above this switch to scientific notation.
    pub large: f64,
    /// Distance from a nonzero integer under which the integer is printed.
    pub snap: f64,
}

impl PrettyFormat {
    /// The standard formatter.
    pub const DEFAULT: Self = Self {
        precision: 3,
        small: 1e-3,
        large: 1e3,
        snap: 1e-3,
    };

    /// Set the number of fractional digits.
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the magnitude bounds outside of which scientific notation is used.
    #[must_use]
    pub const fn with_scientific_bounds(mut self, small: f64, large: f64) -> Self {
        self.small = small;
        self.large = large;
        self
    }

    /// Set the integer snapping tolerance.
    #[must_use]
    pub const fn with_snap(mut self, snap: f64) -> Self {
        self.snap = snap;
        self
    }

    /// Format a single number.
    #[must_use]
    pub fn format(&self, n: f64) -> String {
        if n == 0.0 {
            return "0".to_string();
        }
        if n.is_nan() {
            return "nan".to_string();
        }
        if n.is_infinite() {
            return if n > 0.0 { "inf" } else { "-inf" }.to_string();
        }

        let magnitude = n.abs();
        if magnitude < self.small || magnitude > self.large {
            return scientific(n, self.precision);
        }

        let truncated = n.trunc();
        if (truncated - n).abs() < self.snap && truncated != 0.0 {
            return format!("{truncated:.0}");
        }

        strip_trailing_zeros(format!("{n:.prec$}", prec = self.precision))
    }
}

impl Default for PrettyFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Render `n` as `d.ddde±XX`.
fn scientific(n: f64, precision: usize) -> String {
    let raw = format!("{n:.precision$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

fn strip_trailing_zeros(mut text: String) -> String {
    if text.contains('.') {
        let keep = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(keep);
    }
    text
}

// ---------------------------------------------------------------------------
// PrettyNumber: scalars and nested sequences
// ---------------------------------------------------------------------------

/// Values that can be rendered by a [`PrettyFormat`].
///
/// Scalars render to a `String`; sequences render element-wise, so a
/// `Vec<Vec<f64>>` renders to a `Vec<Vec<String>>`.
pub trait PrettyNumber {
    /// The rendered shape.
    type Output;

    /// Render with an explicit format.
    fn pretty_with(&self, format: &PrettyFormat) -> Self::Output;

    /// Render with [`PrettyFormat::DEFAULT`].
    fn pretty(&self) -> Self::Output {
        self.pretty_with(&PrettyFormat::DEFAULT)
    }
}

macro_rules! impl_pretty_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PrettyNumber for $ty {
                type Output = String;

                fn pretty_with(&self, format: &PrettyFormat) -> String {
                    format.format(*self as f64)
                }
            }
        )*
    };
}

impl_pretty_scalar!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: PrettyNumber> PrettyNumber for [T] {
    type Output = Vec<T::Output>;

    fn pretty_with(&self, format: &PrettyFormat) -> Self::Output {
        self.iter().map(|item| item.pretty_with(format)).collect()
    }
}

impl<T: PrettyNumber, const N: usize> PrettyNumber for [T; N] {
    type Output = Vec<T::Output>;

    fn pretty_with(&self, format: &PrettyFormat) -> Self::Output {
        self.as_slice().pretty_with(format)
    }
}

impl<T: PrettyNumber> PrettyNumber for Vec<T> {
    type Output = Vec<T::Output>;

    fn pretty_with(&self, format: &PrettyFormat) -> Self::Output {
        self.as_slice().pretty_with(format)
    }
}

impl<T: PrettyNumber + ?Sized> PrettyNumber for &T {
    type Output = T::Output;

    fn pretty_with(&self, format: &PrettyFormat) -> Self::Output {
        (**self).pretty_with(format)
    }
}

/// Format a number, or a nested sequence of numbers, with the default format.
///
/// ```
/// use propbind_format::pretty_number;
///
/// assert_eq!(pretty_number(&0.0), "0");
/// assert_eq!(pretty_number(&[1.5, 2.0]), vec!["1.5", "2"]);
/// ```
#[must_use]
pub fn pretty_number<T: PrettyNumber + ?Sized>(value: &T) -> T::Output {
    value.pretty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_plain() {
        assert_eq!(pretty_number(&0.0), "0");
        assert_eq!(pretty_number(&-0.0), "0");
        assert_eq!(pretty_number(&0_i32), "0");
    }

    #[test]
    fn fixed_point_strips_trailing_zeros() {
        assert_eq!(pretty_number(&0.5), "0.5");
        assert_eq!(pretty_number(&0.25), "0.25");
        assert_eq!(pretty_number(&1.125), "1.125");
        assert_eq!(pretty_number(&-12.75), "-12.75");
        assert_eq!(pretty_number(&0.001), "0.001");
    }

    #[test]
    fn fixed_point_that_rounds_up_has_no_dangling_point() {
        assert_eq!(pretty_number(&0.99996), "1");
    }

    #[test]
    fn near_integers_snap() {
        assert_eq!(pretty_number(&3.0), "3");
        assert_eq!(pretty_number(&3.0002), "3");
        assert_eq!(pretty_number(&-7.0004), "-7");
        assert_eq!(pretty_number(&1000.0), "1000");
        assert_eq!(pretty_number(&42_i64), "42");
    }

    #[test]
    fn snapping_truncates_toward_zero() {
        // 2.9999 is not within tolerance of 2, so it falls back to fixed point.
        assert_eq!(pretty_number(&2.9999), "3");
        assert_eq!(pretty_number(&2.5), "2.5");
    }

    #[test]
    fn large_and_small_go_scientific() {
        assert_eq!(pretty_number(&12340.0), "1.234e+04");
        assert_eq!(pretty_number(&0.0005), "5.000e-04");
        assert_eq!(pretty_number(&-25000.0), "-2.500e+04");
        assert_eq!(pretty_number(&1e10), "1.000e+10");
        assert_eq!(pretty_number(&2e-10), "2.000e-10");
        assert_eq!(pretty_number(&1e100), "1.000e+100");
    }

    #[test]
    fn non_finite() {
        assert_eq!(pretty_number(&f64::NAN), "nan");
        assert_eq!(pretty_number(&f64::INFINITY), "inf");
        assert_eq!(pretty_number(&f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn nested_sequences() {
        assert_eq!(pretty_number(&[0.0, 0.5, 3.0]), vec!["0", "0.5", "3"]);
        let nested = vec![vec![1.0, 2.5], vec![12340.0]];
        assert_eq!(
            pretty_number(&nested),
            vec![vec!["1".to_string(), "2.5".to_string()], vec!["1.234e+04".to_string()]]
        );
        let empty: Vec<f64> = Vec::new();
        assert!(pretty_number(&empty).is_empty());
    }

    #[test]
    fn custom_precision() {
        let fmt = PrettyFormat::DEFAULT.with_precision(1);
        assert_eq!(fmt.format(0.24), "0.2");
        assert_eq!(fmt.format(0.76), "0.8");
        assert_eq!(fmt.format(12340.0), "1.2e+04");
    }

    #[test]
    fn custom_bounds() {
        let fmt = PrettyFormat::DEFAULT.with_scientific_bounds(1e-6, 1e6);
        assert_eq!(fmt.format(12340.0), "12340");
        assert_eq!(fmt.format(0.0005), "0.001");
        assert_eq!(fmt.format(2e6), "2.000e+06");
    }

    #[test]
    fn snap_can_be_disabled() {
        let fmt = PrettyFormat::DEFAULT.with_snap(0.0);
        assert_eq!(fmt.format(3.0), "3");
        assert_eq!(fmt.format(3.0002), "3");
        assert_eq!(fmt.format(3.25), "3.25");
    }

    #[test]
    fn default_matches_const() {
        assert_eq!(PrettyFormat::default(), PrettyFormat::DEFAULT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_fills_missing_fields() {
        let fmt: PrettyFormat = serde_json::from_str(r#"{ "precision": 2 }"#).unwrap();
        assert_eq!(fmt, PrettyFormat::DEFAULT.with_precision(2));
    }

    proptest! {
        #[test]
        fn output_reparses_close_to_input(n in -1.0e6f64..1.0e6) {
            let text = pretty_number(&n);
            let parsed: f64 = text.parse().unwrap();
            let tolerance = if n.abs() > 1e3 || n.abs() < 1e-3 {
                n.abs() * 1e-3
            } else {
                1e-3
            };
            prop_assert!((parsed - n).abs() <= tolerance, "{n} -> {text}");
        }

        #[test]
        fn fixed_point_has_no_trailing_zero(n in 1.0e-3f64..1.0e3) {
            let text = pretty_number(&n);
            if !text.contains('e') && text.contains('.') {
                prop_assert!(!text.ends_with('0'), "{text}");
                prop_assert!(!text.ends_with('.'), "{text}");
            }
        }

        #[test]
        fn sequence_matches_elementwise(values in proptest::collection::vec(-1.0e4f64..1.0e4, 0..16)) {
            let rendered = pretty_number(&values);
            prop_assert_eq!(rendered.len(), values.len());
            for (text, value) in rendered.iter().zip(&values) {
                prop_assert_eq!(text, &pretty_number(value));
            }
        }
    }
}

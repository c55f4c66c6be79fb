//! Strongly-typed numeric primitives for bubblecap (zero-cost newtypes).
//!
//! Design goals:
//! - No raw `f64` in domain logic
//! - Illegal states unrepresentable
//! - A measured line can only carry validated, finite values

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::errors::ColorParseError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
    /// Value is zero or negative when strictly positive required
    NonPositive,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::NonPositive => write!(f, "value is not positive"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in CSS pixels (the canonical unit of caption layout)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a non-negative Px with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Px, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Px(val))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Get the minimum of two lengths
    #[inline]
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// Get the maximum of two lengths
    #[inline]
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Check if this length is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px {
        Px(self.0 + rhs.0)
    }
}
impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}
impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px {
        Px(self.0 * rhs)
    }
}
impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px {
        Px(self.0 / rhs)
    }
}
impl Neg for Px {
    type Output = Px;
    fn neg(self) -> Px {
        Px(-self.0)
    }
}
impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Px) {
        self.0 += rhs.0;
    }
}
impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Px) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-line multiplier on the base font size. Always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct FontScale(f64);

impl FontScale {
    pub const DEFAULT: FontScale = FontScale(1.0);

    /// Create a FontScale with validation (rejects NaN, infinite, zero, negative)
    #[inline]
    pub fn try_new(val: f64) -> Result<FontScale, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val <= 0.0 {
            Err(NumericError::NonPositive)
        } else {
            Ok(FontScale(val))
        }
    }

    /// Get the raw multiplier
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for FontScale {
    fn default() -> Self {
        FontScale::DEFAULT
    }
}

impl fmt::Display for FontScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// FontScale * Px = Px (scaling a length)
impl Mul<Px> for FontScale {
    type Output = Px;
    fn mul(self, rhs: Px) -> Px {
        Px(self.0 * rhs.0)
    }
}

/// Px * FontScale = Px (scaling a length)
impl Mul<FontScale> for Px {
    type Output = Px;
    fn mul(self, rhs: FontScale) -> Px {
        Px(self.0 * rhs.0)
    }
}

/// A caption color: a CSS color name or an `#rgb`/`#rrggbb` hex literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Named(&'static str),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const WHITE: Color = Color::Named("white");
    pub const BLACK: Color = Color::Named("black");
}

/// Color names accepted by [`Color::from_str`].
const NAMED_COLORS: [&str; 19] = [
    "black", "white", "red", "green", "blue", "yellow", "cyan", "magenta", "orange", "purple",
    "brown", "pink", "gray", "grey", "lightgray", "lightgrey", "darkgray", "darkgrey", "silver",
];

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError {
                value: s.to_string(),
            });
        }
        if let Some(name) = NAMED_COLORS.iter().copied().find(|n| *n == lower) {
            return Ok(Color::Named(name));
        }
        Err(ColorParseError {
            value: s.to_string(),
        })
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |c: u8| char::from(c).to_digit(16).map(|d| d as u8);
    match hex.as_bytes() {
        [r, g, b] => {
            let (r, g, b) = (digit(*r)?, digit(*g)?, digit(*b)?);
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        [r1, r2, g1, g2, b1, b2] => Some(Color::Rgb(
            digit(*r1)? * 16 + digit(*r2)?,
            digit(*g1)? * 16 + digit(*g2)?,
            digit(*b1)? * 16 + digit(*b2)?,
        )),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}

//! Line item quantity.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A line item quantity.
///
/// ## Constraints
///
/// - Always at least 1; a zero or negative quantity cannot be represented
/// - Serialized as a bare JSON integer
///
/// User input never fails to produce a quantity: [`Quantity::parse_clamped`]
/// reads the leading integer of the input and clamps anything unusable to 1.
///
/// ## Examples
///
/// ```
/// use quotecart_core::Quantity;
///
/// assert_eq!(Quantity::parse_clamped("4").get(), 4);
/// assert_eq!(Quantity::parse_clamped("12 boxes").get(), 12);
/// assert_eq!(Quantity::parse_clamped("abc").get(), 1);
/// assert_eq!(Quantity::parse_clamped("-3").get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// The smallest representable quantity, used as the default everywhere.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Create a quantity, clamping zero up to one.
    #[must_use]
    pub const fn at_least_one(value: u32) -> Self {
        match NonZeroU32::new(value) {
            Some(n) => Self(n),
            None => Self::ONE,
        }
    }

    /// Parse free-form quantity input.
    ///
    /// Leading whitespace and an optional sign are accepted, then the longest
    /// run of ASCII digits is read; anything after it is ignored. Input with no
    /// digits, or a value below one, yields [`Quantity::ONE`]. Values beyond
    /// `u32::MAX` saturate.
    #[must_use]
    pub fn parse_clamped(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, trimmed.get(1..).unwrap_or("")),
            Some(b'+') => (false, trimmed.get(1..).unwrap_or("")),
            _ => (false, trimmed),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let digits = rest.get(..digits_len).unwrap_or("");
        if negative || digits.is_empty() {
            return Self::ONE;
        }

        let value = digits.bytes().fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });
        Self::at_least_one(value)
    }

    /// Returns the quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add another quantity, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU32> for Quantity {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.get()
    }
}

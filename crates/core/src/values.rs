//! Wire values
//!
//! Sizes, colors, statuses and payment values travel as upper-case strings at
//! the edges; inside the crate they are closed enums.

use thiserror::Error;

/// A string did not name any variant of a closed enum.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} \"{value}\"")]
pub struct UnknownValue {
    /// Human-readable name of the enum that was being parsed.
    pub kind: &'static str,

    /// The rejected input.
    pub value: String,
}

/// Closed enums with a fixed upper-case wire name per variant.
pub trait WireValue: Sized + Copy + 'static {
    /// Name used in parse errors.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The wire name of this variant.
    fn as_str(self) -> &'static str;

    /// Parse a wire name, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValue`] if no variant has that name.
    fn parse_wire(value: &str) -> Result<Self, UnknownValue> {
        let trimmed = value.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownValue {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

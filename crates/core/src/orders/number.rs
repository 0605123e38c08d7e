//! Human-readable order numbers

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rand::Rng;
use serde::{Deserialize, Serialize};

const PREFIX: &str = "ORD-";
const RADIX: u32 = 36;
const SUFFIX_LEN: usize = 6;

/// Order number, e.g. `ORD-482913K7Q2ZD`: the last six digits of the
/// placement time in milliseconds followed by six random base-36 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generate a number for an order placed at `placed_at`.
    pub fn generate(placed_at: Timestamp) -> Self {
        Self::generate_with(placed_at, &mut rand::thread_rng())
    }

    /// Generate with a caller-supplied random source.
    pub fn generate_with<R: Rng + ?Sized>(placed_at: Timestamp, rng: &mut R) -> Self {
        let millis = placed_at.as_millisecond().rem_euclid(1_000_000);

        let suffix: String = (0..SUFFIX_LEN)
            .filter_map(|_| char::from_digit(rng.gen_range(0..RADIX), RADIX))
            .map(|digit| digit.to_ascii_uppercase())
            .collect();

        Self(format!("{PREFIX}{millis:06}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

//! Snowflake ID
//!
//! The top 42 bits hold milliseconds since the platform epoch; the rest are
//! worker, process and increment fields the relay never reads.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Platform Snowflake ID (64-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(u64);

impl Snowflake {
    /// 2015-01-01T00:00:00Z in Unix milliseconds
    pub const EPOCH: u64 = 1_420_070_400_000;

    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Creation time in Unix milliseconds
    #[inline]
    pub const fn timestamp(&self) -> u64 {
        (self.0 >> 22) + Self::EPOCH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid snowflake: expected an unsigned 64-bit integer")]
pub struct SnowflakeParseError;

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Snowflake {
    type Err = SnowflakeParseError;

    /// Surrounding whitespace is ignored, so comma lists with spaces parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self).map_err(|_| SnowflakeParseError)
    }
}

// Downstream consumers are JavaScript; 64-bit ids travel as strings
impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

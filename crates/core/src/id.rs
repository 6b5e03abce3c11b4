//! Strongly-typed user identifier.
//!
//! A `UserId` is always positive: the only ways to build one are the checked
//! constructors below, so a zero or negative id can never reach the directory.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a user, minted by the directory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(NonZeroU64);

impl UserId {
    /// The first identifier the directory hands out.
    pub const FIRST: UserId = UserId(NonZeroU64::MIN);

    /// Build an id from a signed value as it arrives from a request path.
    pub fn from_i64(value: i64) -> Result<Self, DomainError> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id(value.to_string()))
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// The id following this one, or `None` once the id space is exhausted.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    /// Parse a path segment. Errors carry `s` unchanged so callers can echo
    /// it back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(|value| Self::from_i64(value).ok())
            .ok_or_else(|| DomainError::invalid_id(s))
    }
}

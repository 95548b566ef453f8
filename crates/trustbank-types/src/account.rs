//! Bank account types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Balance every newly opened account is seeded with, in cents
pub const INITIAL_BALANCE_CENTS: i64 = 0;

/// Unique account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Create a new random account ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account service level assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountTier {
    /// Entry level, assigned to every new account
    TierOne,
    /// Mid level
    TierTwo,
    /// Top level
    TierThree,
}

impl AccountTier {
    /// The tier every new account starts on
    pub const fn lowest() -> Self {
        Self::TierOne
    }
}

impl std::fmt::Display for AccountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TierOne => write!(f, "tier_one"),
            Self::TierTwo => write!(f, "tier_two"),
            Self::TierThree => write!(f, "tier_three"),
        }
    }
}

impl std::str::FromStr for AccountTier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tier_one" => Ok(Self::TierOne),
            "tier_two" => Ok(Self::TierTwo),
            "tier_three" => Ok(Self::TierThree),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}

/// Error parsing a tier string
#[derive(Debug, Clone)]
pub struct TierParseError(pub String);

impl std::fmt::Display for TierParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid account tier: {}", self.0)
    }
}

impl std::error::Error for TierParseError {}

/// Render a balance in cents as a decimal amount, e.g. `1250` -> `"12.50"`
pub fn format_balance(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

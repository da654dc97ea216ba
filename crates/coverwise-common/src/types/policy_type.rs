//! PolicyType - the lines of business Coverwise prices
//!
//! Serialized as its integer code (LIFE=1, CAR=2, HEALTH=3, PROPERTY=4) so
//! stored records never depend on enum spelling. Codes outside the known
//! lines decode to `Other` and price at the fallback rate.

use serde::{Deserialize, Serialize};

/// Insurance line of business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PolicyType {
    Life,
    Car,
    Health,
    Property,
    /// A line of business with no dedicated pricing rules
    Other(u8),
}

impl PolicyType {
    /// Known policy types in code order
    pub const ALL: [PolicyType; 4] = [
        PolicyType::Life,
        PolicyType::Car,
        PolicyType::Health,
        PolicyType::Property,
    ];

    /// Integer code used at the storage boundary
    pub fn code(self) -> u8 {
        match self {
            PolicyType::Life => 1,
            PolicyType::Car => 2,
            PolicyType::Health => 3,
            PolicyType::Property => 4,
            PolicyType::Other(code) => code,
        }
    }

    /// Resolve an integer code; unknown codes become `Other`
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => PolicyType::Life,
            2 => PolicyType::Car,
            3 => PolicyType::Health,
            4 => PolicyType::Property,
            other => PolicyType::Other(other),
        }
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, PolicyType::Other(_))
    }
}

impl From<u8> for PolicyType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<PolicyType> for u8 {
    fn from(policy_type: PolicyType) -> Self {
        policy_type.code()
    }
}

impl std::fmt::Display for PolicyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyType::Life => f.write_str("LIFE"),
            PolicyType::Car => f.write_str("CAR"),
            PolicyType::Health => f.write_str("HEALTH"),
            PolicyType::Property => f.write_str("PROPERTY"),
            PolicyType::Other(code) => write!(f, "OTHER({})", code),
        }
    }
}

//! Core value types for Coverwise

pub mod categorical;
pub mod policy;
pub mod policy_type;
pub mod premium;
pub mod risk_score;

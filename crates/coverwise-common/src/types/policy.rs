//! Policy record
//!
//! Plain data holder for an insurance policy. The premium field is written
//! only by the pricing engine's repricing call; everything else is set
//! through validated setters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::policy_type::PolicyType;
use super::premium::Premium;
use crate::error::PolicyError;

/// Policy lifecycle status, serialized as its integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PolicyStatus {
    Pending,
    Approved,
    Rejected,
    Active,
    Inactive,
    Expired,
    Cancelled,
}

impl PolicyStatus {
    pub fn code(self) -> u8 {
        match self {
            PolicyStatus::Pending => 1,
            PolicyStatus::Approved => 2,
            PolicyStatus::Rejected => 3,
            PolicyStatus::Active => 4,
            PolicyStatus::Inactive => 5,
            PolicyStatus::Expired => 6,
            PolicyStatus::Cancelled => 7,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, PolicyError> {
        match code {
            1 => Ok(PolicyStatus::Pending),
            2 => Ok(PolicyStatus::Approved),
            3 => Ok(PolicyStatus::Rejected),
            4 => Ok(PolicyStatus::Active),
            5 => Ok(PolicyStatus::Inactive),
            6 => Ok(PolicyStatus::Expired),
            7 => Ok(PolicyStatus::Cancelled),
            other => Err(PolicyError::UnknownStatus(other)),
        }
    }

    /// Statuses reachable from this one
    pub fn allowed_transitions(self) -> &'static [PolicyStatus] {
        use PolicyStatus::*;
        match self {
            Pending => &[Approved, Rejected, Cancelled, Active],
            Approved => &[Active, Cancelled],
            Rejected => &[Cancelled],
            Active => &[Inactive, Expired, Cancelled],
            Inactive => &[Active, Expired, Cancelled],
            Expired => &[Cancelled],
            Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: PolicyStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Cancelled is terminal
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl Default for PolicyStatus {
    fn default() -> Self {
        PolicyStatus::Pending
    }
}

impl TryFrom<u8> for PolicyStatus {
    type Error = PolicyError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<PolicyStatus> for u8 {
    fn from(status: PolicyStatus) -> Self {
        status.code()
    }
}

/// Insurance policy record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_id: String,
    pub customer_id: String,
    pub policy_type: PolicyType,
    coverage_amount: f64,
    premium: Premium,
    status: PolicyStatus,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    #[serde(default)]
    conditions: Vec<String>,
}

impl Policy {
    /// Create a pending policy with no coverage, dates, or premium
    pub fn new(
        policy_id: impl Into<String>,
        customer_id: impl Into<String>,
        policy_type: PolicyType,
    ) -> Self {
        Self {
            policy_id: policy_id.into(),
            customer_id: customer_id.into(),
            policy_type,
            coverage_amount: 0.0,
            premium: Premium::ZERO,
            status: PolicyStatus::Pending,
            start_date: None,
            end_date: None,
            conditions: Vec::new(),
        }
    }

    pub fn coverage_amount(&self) -> f64 {
        self.coverage_amount
    }

    pub fn premium(&self) -> Premium {
        self.premium
    }

    pub fn status(&self) -> PolicyStatus {
        self.status
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn set_coverage_amount(&mut self, amount: f64) -> Result<(), PolicyError> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(PolicyError::InvalidCoverage(amount));
        }
        self.coverage_amount = amount;
        Ok(())
    }

    pub fn set_dates(&mut self, start: NaiveDate, end: NaiveDate) -> Result<(), PolicyError> {
        if end <= start {
            return Err(PolicyError::InvalidDates);
        }
        self.start_date = Some(start);
        self.end_date = Some(end);
        Ok(())
    }

    /// Move to a new status if the transition table allows it
    pub fn update_status(&mut self, next: PolicyStatus) -> Result<(), PolicyError> {
        if !self.status.can_transition_to(next) {
            return Err(PolicyError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        tracing::debug!(policy_id = %self.policy_id, from = ?self.status, to = ?next, "Policy status changed");
        self.status = next;
        Ok(())
    }

    pub fn add_condition(&mut self, condition: &str) -> Result<(), PolicyError> {
        let trimmed = condition.trim();
        if trimmed.is_empty() {
            return Err(PolicyError::BlankCondition);
        }
        self.conditions.push(trimmed.to_string());
        Ok(())
    }

    /// Store a freshly calculated premium
    pub fn apply_premium(&mut self, premium: Premium) {
        self.premium = premium;
    }

    /// A policy is complete once it has ids, coverage, a premium, and dates
    pub fn is_valid(&self) -> bool {
        !self.policy_id.trim().is_empty()
            && !self.customer_id.trim().is_empty()
            && self.coverage_amount > 0.0
            && !self.premium.is_zero()
            && self.start_date.is_some()
            && self.end_date.is_some()
    }
}

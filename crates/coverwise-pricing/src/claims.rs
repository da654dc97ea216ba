//! Claim assessment
//!
//! A filed claim is loaded 5% per distinct supporting document and reduced
//! the longer it waits for assessment, then capped at 150% of the amount
//! claimed.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use coverwise_common::round_currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Loading per distinct evidence document
pub const EVIDENCE_LOADING: Decimal = dec!(0.05);

/// Assessed amount never exceeds this multiple of the claimed amount
pub const MAX_ADJUSTMENT: Decimal = dec!(1.5);

/// Claim lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    #[default]
    Pending,
    Reviewing,
    Approved,
    Rejected,
    Settled,
}

impl ClaimStatus {
    /// Still awaiting a decision
    pub fn is_open(self) -> bool {
        matches!(self, ClaimStatus::Pending | ClaimStatus::Reviewing)
    }
}

/// A claim filed against a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: String,
    pub policy_id: String,
    /// Amount claimed
    pub amount: Decimal,
    #[serde(default)]
    pub status: ClaimStatus,
    #[serde(default)]
    pub evidence_documents: Vec<String>,
    pub date_filed: NaiveDate,
}

impl Claim {
    pub fn new(
        claim_id: impl Into<String>,
        policy_id: impl Into<String>,
        amount: Decimal,
        date_filed: NaiveDate,
    ) -> Self {
        Self {
            claim_id: claim_id.into(),
            policy_id: policy_id.into(),
            amount,
            status: ClaimStatus::Pending,
            evidence_documents: Vec::new(),
            date_filed,
        }
    }

    /// Attach a supporting document; returns false if already attached
    pub fn add_evidence(&mut self, document_id: impl Into<String>) -> bool {
        let document_id = document_id.into();
        if self.evidence_documents.contains(&document_id) {
            return false;
        }
        self.evidence_documents.push(document_id);
        true
    }

    pub fn evidence_count(&self) -> usize {
        self.evidence_documents.iter().collect::<BTreeSet<_>>().len()
    }
}

/// Result of assessing a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimAssessment {
    pub claim_id: String,
    pub status: ClaimStatus,
    pub days_since_filing: i64,
    pub evidence_factor: Decimal,
    pub time_factor: Decimal,
    pub assessed_amount: Decimal,
}

/// Reduction for assessment delay: none within 30 days, 5% within 60, 10% after
pub fn time_factor(days_since_filing: i64) -> Decimal {
    if days_since_filing <= 30 {
        Decimal::ONE
    } else if days_since_filing <= 60 {
        dec!(0.95)
    } else {
        dec!(0.90)
    }
}

/// Assess a claim as of a given date
pub fn assess_claim(claim: &Claim, as_of: NaiveDate) -> ClaimAssessment {
    let days_since_filing = (as_of - claim.date_filed).num_days();
    let evidence_factor = Decimal::ONE + EVIDENCE_LOADING * Decimal::from(claim.evidence_count());
    let time_factor = time_factor(days_since_filing);

    let adjusted = claim.amount * evidence_factor * time_factor;
    let cap = claim.amount * MAX_ADJUSTMENT;
    let assessed_amount = round_currency(adjusted.min(cap).max(Decimal::ZERO));

    debug!(
        claim_id = %claim.claim_id,
        days_since_filing,
        %evidence_factor,
        %time_factor,
        %assessed_amount,
        "Claim assessed"
    );

    ClaimAssessment {
        claim_id: claim.claim_id.clone(),
        status: claim.status,
        days_since_filing,
        evidence_factor,
        time_factor,
        assessed_amount,
    }
}

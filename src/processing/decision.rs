//! Decision policy: maps a total score to a screening outcome

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SHORTLIST_THRESHOLD: f64 = 80.0;
pub const REVIEW_THRESHOLD: f64 = 60.0;

/// Screening outcome. Variants are declared worst to best, so the derived
/// ordering ranks `Shortlisted` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Rejected,
    NeedsReview,
    Shortlisted,
}

/// Display emphasis attached to a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Positive,
    Caution,
    Negative,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Shortlisted => "SHORTLISTED",
            Decision::NeedsReview => "NEEDS REVIEW",
            Decision::Rejected => "REJECTED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Decision::Shortlisted => Severity::Positive,
            Decision::NeedsReview => Severity::Caution,
            Decision::Rejected => Severity::Negative,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn decide(total_score: f64) -> Decision {
    if total_score >= SHORTLIST_THRESHOLD {
        Decision::Shortlisted
    } else if total_score >= REVIEW_THRESHOLD {
        Decision::NeedsReview
    } else {
        Decision::Rejected
    }
}

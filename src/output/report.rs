//! Screening report: the structured result of one screening run

use crate::processing::decision::Decision;
use crate::processing::scoring::ScoreBreakdown;
use crate::processing::skill_matcher::MatchResult;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs. Built fresh per run; holds no timestamps
/// or paths so identical inputs always produce an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub skills: MatchResult,
    pub scores: ScoreBreakdown,
    pub decision: Decision,
    pub highlights: Vec<String>,
}

/// Recommendation for one category that has missing skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub skills: Vec<String>,
}

impl Suggestion {
    pub fn message(&self) -> String {
        format!("Learn {} skills first: {}", self.category, self.skills.join(", "))
    }
}

impl ScreeningReport {
    /// One suggestion per category with missing skills, in taxonomy order
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.skills
            .categories
            .iter()
            .filter(|c| !c.missing.is_empty())
            .map(|c| Suggestion {
                category: c.category.clone(),
                skills: c.missing.clone(),
            })
            .collect()
    }

    pub fn matched_count(&self) -> usize {
        self.skills.categories.iter().map(|c| c.matched.len()).sum()
    }

    pub fn missing_count(&self) -> usize {
        self.skills.categories.iter().map(|c| c.missing.len()).sum()
    }
}

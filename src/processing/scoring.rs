//! Heuristic sub-scores: experience, keyword density, strength highlights
//!
//! All checks are literal substring tests. Callers pass text that has
//! already been case-normalized (see [`TextProcessor`]).
//!
//! [`TextProcessor`]: crate::processing::text_processor::TextProcessor

use log::debug;
use serde::{Deserialize, Serialize};

pub const EXPERIENCE_SCORE_CAP: u32 = 30;
pub const KEYWORD_SCORE_CAP: f64 = 20.0;

const INTERNSHIP_POINTS: u32 = 5;
const PROJECT_POINTS: u32 = 10;
const WORK_HISTORY_POINTS: u32 = 20;
const WORK_HISTORY_TERMS: &[&str] = &["experience", "worked", "developed"];

/// Checklist phrase and the label it contributes, in report order
pub const STRENGTH_CHECKLIST: &[(&str, &str)] = &[
    ("problem solving", "Strong problem-solving skills"),
    ("communication", "Good communication"),
    ("leadership", "Leadership potential"),
    ("teamwork", "Teamwork skills"),
];

/// The four sub-scores and their sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted skill coverage, 0-100
    pub skill_score: f64,
    /// Experience heuristic, 0-30
    pub experience_score: u32,
    /// Job keyword density, 0-20
    pub keyword_score: f64,
    pub total_score: f64,
}

impl ScoreBreakdown {
    pub fn new(skill_score: f64, experience_score: u32, keyword_score: f64) -> Self {
        Self {
            skill_score,
            experience_score,
            keyword_score,
            total_score: skill_score + experience_score as f64 + keyword_score,
        }
    }
}

/// Additive experience points, capped at [`EXPERIENCE_SCORE_CAP`].
/// All three signals together give 35, so the cap applies.
pub fn experience_score(resume_text: &str) -> u32 {
    let mut points = 0;
    if resume_text.contains("internship") {
        points += INTERNSHIP_POINTS;
    }
    if resume_text.contains("project") {
        points += PROJECT_POINTS;
    }
    if WORK_HISTORY_TERMS.iter().any(|term| resume_text.contains(term)) {
        points += WORK_HISTORY_POINTS;
    }

    let score = points.min(EXPERIENCE_SCORE_CAP);
    debug!("Experience points: {} (capped to {})", points, score);
    score
}

/// Percentage of job-description tokens found in the resume, capped at
/// [`KEYWORD_SCORE_CAP`]. Duplicate tokens count each time; an empty job
/// text scores 0.
pub fn keyword_density(resume_text: &str, job_text: &str) -> f64 {
    let mut total = 0usize;
    let mut hits = 0usize;
    for token in job_text.split_whitespace() {
        total += 1;
        if resume_text.contains(token) {
            hits += 1;
        }
    }

    if total == 0 {
        debug!("Job text has no tokens; keyword density is 0");
        return 0.0;
    }

    let density = hits as f64 / total as f64 * 100.0;
    debug!("Keyword density: {}/{} tokens = {:.2}%", hits, total, density);
    density.min(KEYWORD_SCORE_CAP)
}

/// Labels for every checklist phrase present, in checklist order
pub fn strength_highlights(resume_text: &str) -> Vec<String> {
    STRENGTH_CHECKLIST
        .iter()
        .filter(|(phrase, _)| resume_text.contains(phrase))
        .map(|(_, label)| label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_single_signals() {
        assert_eq!(experience_score(""), 0);
        assert_eq!(experience_score("summer internship"), 5);
        assert_eq!(experience_score("capstone project"), 10);
        assert_eq!(experience_score("worked at acme"), 20);
        assert_eq!(experience_score("developed apis"), 20);
    }

    #[test]
    fn test_experience_combinations() {
        assert_eq!(experience_score("internship and project"), 15);
        assert_eq!(experience_score("experience, worked, developed"), 20);
        assert_eq!(experience_score("project experience"), 30);
        // 5 + 10 + 20 = 35 before the cap
        assert_eq!(experience_score("internship project experience"), 30);
    }

    #[test]
    fn test_experience_substring_semantics() {
        // "projects" contains "project"; "Project" does not without normalization
        assert_eq!(experience_score("side projects"), 10);
        assert_eq!(experience_score("Project"), 0);
    }

    #[test]
    fn test_keyword_density_basic() {
        // 1 of 4 tokens present
        assert!((keyword_density("rust developer", "rust go java kotlin") - 20.0).abs() < 1e-9);
        // 1 of 10 tokens present, below the cap
        let job = "rust a1 a2 a3 a4 a5 a6 a7 a8 a9";
        assert!((keyword_density("rust", job) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_density_cap_and_empty() {
        assert_eq!(keyword_density("python sql git", "python sql git"), 20.0);
        assert_eq!(keyword_density("anything", ""), 0.0);
        assert_eq!(keyword_density("anything", "  \n\t "), 0.0);
        assert_eq!(keyword_density("", "python"), 0.0);
    }

    #[test]
    fn test_keyword_density_matches_inside_words() {
        // Job tokens are searched in the whole resume text, not its word set
        assert_eq!(keyword_density("javascript", "script a b c d"), 20.0);
        let job = "sql a1 a2 a3 a4 a5 a6 a7 a8 a9";
        assert!((keyword_density("mysql", job) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_density_counts_duplicates() {
        // "x" present twice, "y" and three absent tokens: 2/10
        let job = "x x b1 b2 b3 b4 b5 b6 b7 b8";
        assert!((keyword_density("x", job) - 20.0).abs() < 1e-9);
        let job = "x b1 b2 b3 b4 b5 b6 b7 b8 b9";
        assert!((keyword_density("x", job) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_strength_highlights_order() {
        let text = "teamwork, leadership and problem solving";
        assert_eq!(
            strength_highlights(text),
            vec![
                "Strong problem-solving skills",
                "Leadership potential",
                "Teamwork skills"
            ]
        );
        assert!(strength_highlights("").is_empty());
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = ScoreBreakdown::new(40.0, 10, 20.0);
        assert_eq!(breakdown.total_score, 70.0);
    }
}

//! Skill matching: partitions each category's phrases into matched / missing
//!
//! A phrase matches when it occurs anywhere in the resume text as a plain
//! substring. There is no word-boundary check, so "git" also matches inside
//! "github".

use crate::error::{Result, ScreenerError};
use crate::processing::taxonomy::Taxonomy;
use aho_corasick::AhoCorasick;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Matched / missing partition for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: String,
    pub weight: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl CategoryMatch {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Fraction of the category's skills found, 0.0 for an empty category
    pub fn coverage(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.matched.len() as f64 / total as f64,
        }
    }

    /// This category's contribution to the skill score
    pub fn weighted_score(&self) -> f64 {
        self.coverage() * self.weight * 100.0
    }
}

/// Per-category partitions plus the aggregated weighted skill score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub categories: Vec<CategoryMatch>,
    pub skill_score: f64,
}

impl MatchResult {
    pub fn category(&self, name: &str) -> Option<&CategoryMatch> {
        self.categories.iter().find(|c| c.category == name)
    }

    pub fn has_missing(&self) -> bool {
        self.categories.iter().any(|c| !c.missing.is_empty())
    }
}

/// Substring matcher over every phrase of a taxonomy
///
/// Matching ignores ASCII case even when the pipeline skips normalization,
/// while the experience, keyword and highlight checks in
/// [`scoring`](crate::processing::scoring) stay literal. "PYTHON Project"
/// unnormalized matches `python` but earns no project points.
pub struct SkillMatcher {
    taxonomy: Taxonomy,
    automaton: AhoCorasick,
    /// Pattern id -> every (category, skill) position using that phrase
    positions: Vec<Vec<(usize, usize)>>,
}

impl SkillMatcher {
    pub fn new(taxonomy: Taxonomy) -> Result<Self> {
        let mut pattern_ids: HashMap<String, usize> = HashMap::new();
        let mut patterns: Vec<String> = Vec::new();
        let mut positions: Vec<Vec<(usize, usize)>> = Vec::new();

        for (cat_idx, category) in taxonomy.categories().iter().enumerate() {
            for (skill_idx, skill) in category.skills.iter().enumerate() {
                let id = *pattern_ids.entry(skill.clone()).or_insert_with(|| {
                    patterns.push(skill.clone());
                    positions.push(Vec::new());
                    patterns.len() - 1
                });
                positions[id].push((cat_idx, skill_idx));
            }
        }

        // Overlapping search needs the standard match kind; every pattern
        // must be reported even when one phrase contains another.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| ScreenerError::invalid_taxonomy("", format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            taxonomy,
            automaton,
            positions,
        })
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn pattern_count(&self) -> usize {
        self.positions.len()
    }

    /// Partition every category and compute the weighted skill score
    pub fn match_skills(&self, resume_text: &str) -> MatchResult {
        let mut found = vec![false; self.positions.len()];
        let mut remaining = found.len();

        for mat in self.automaton.find_overlapping_iter(resume_text) {
            let id = mat.pattern().as_usize();
            if !found[id] {
                found[id] = true;
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }

        let mut present: Vec<Vec<bool>> = self
            .taxonomy
            .categories()
            .iter()
            .map(|c| vec![false; c.skills.len()])
            .collect();
        for (id, hit) in found.iter().enumerate() {
            if *hit {
                for &(cat_idx, skill_idx) in &self.positions[id] {
                    present[cat_idx][skill_idx] = true;
                }
            }
        }

        let categories: Vec<CategoryMatch> = self
            .taxonomy
            .categories()
            .iter()
            .zip(present)
            .map(|(category, flags)| {
                let (matched, missing): (Vec<_>, Vec<_>) = category
                    .skills
                    .iter()
                    .zip(flags)
                    .partition(|(_, hit)| *hit);

                CategoryMatch {
                    category: category.name.clone(),
                    weight: category.weight,
                    matched: matched.into_iter().map(|(s, _)| s.clone()).collect(),
                    missing: missing.into_iter().map(|(s, _)| s.clone()).collect(),
                }
            })
            .collect();

        let skill_score = categories.iter().map(CategoryMatch::weighted_score).sum();

        for category in &categories {
            debug!(
                "Category '{}': {}/{} matched ({:.2} points)",
                category.category,
                category.matched.len(),
                category.total(),
                category.weighted_score()
            );
        }

        MatchResult {
            categories,
            skill_score,
        }
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(Taxonomy::builtin()).expect("Failed to create default skill matcher")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::taxonomy::SkillCategory;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_partition_covers_every_skill() {
        let matcher = SkillMatcher::default();
        let result = matcher.match_skills("python developer with docker and teamwork");

        for (category, m) in matcher.taxonomy().categories().iter().zip(&result.categories) {
            let mut union: Vec<String> = m.matched.iter().chain(&m.missing).cloned().collect();
            let mut expected = category.skills.clone();
            union.sort();
            expected.sort();
            assert_eq!(union, expected);
            assert!(m.matched.iter().all(|s| !m.missing.contains(s)));
        }
    }

    #[test]
    fn test_matched_preserves_taxonomy_order() {
        let matcher = SkillMatcher::default();
        let result = matcher.match_skills("algorithms, git and python");
        let core = result.category("core").unwrap();

        assert_eq!(core.matched, vec!["python", "git", "algorithms"]);
        assert_eq!(core.missing, vec!["sql", "data structures"]);
    }

    #[test]
    fn test_skill_score_weighting() {
        let matcher = SkillMatcher::default();
        // 2/5 core * 50 + 1/3 soft * 30 + 0/3 optional
        let result = matcher.match_skills("python and sql, strong communication");
        assert_close(result.skill_score, 20.0 + 10.0);
    }

    #[test]
    fn test_full_and_empty_resume() {
        let matcher = SkillMatcher::default();
        let all = "python sql git data structures algorithms communication problem solving teamwork machine learning docker aws";
        assert_close(matcher.match_skills(all).skill_score, 100.0);

        let empty = matcher.match_skills("");
        assert_close(empty.skill_score, 0.0);
        assert!(empty.categories.iter().all(|c| c.matched.is_empty()));
        assert!(empty.has_missing());
    }

    #[test]
    fn test_substring_inside_longer_words() {
        let matcher = SkillMatcher::default();
        let result = matcher.match_skills("github actions, mysql");
        let core = result.category("core").unwrap();
        assert!(core.matched.contains(&"git".to_string()));
        assert!(core.matched.contains(&"sql".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = SkillMatcher::default();
        let result = matcher.match_skills("PYTHON, Docker, AWS");
        assert_eq!(result.category("core").unwrap().matched, vec!["python"]);
        assert_eq!(result.category("optional").unwrap().matched, vec!["docker", "aws"]);
    }

    #[test]
    fn test_overlapping_and_shared_phrases() {
        let taxonomy = Taxonomy::new(vec![
            SkillCategory::new("a", vec!["java".into(), "javascript".into()], 0.5),
            SkillCategory::new("b", vec!["javascript".into()], 0.5),
        ])
        .unwrap();
        let matcher = SkillMatcher::new(taxonomy).unwrap();
        assert_eq!(matcher.pattern_count(), 2);

        let result = matcher.match_skills("javascript");
        assert_eq!(result.category("a").unwrap().matched, vec!["java", "javascript"]);
        assert_eq!(result.category("b").unwrap().matched, vec!["javascript"]);
        assert_close(result.skill_score, 100.0);
    }

    #[test]
    fn test_empty_category_contributes_zero() {
        let empty = CategoryMatch {
            category: "empty".into(),
            weight: 1.0,
            matched: vec![],
            missing: vec![],
        };
        assert_eq!(empty.coverage(), 0.0);
        assert_eq!(empty.weighted_score(), 0.0);
    }
}

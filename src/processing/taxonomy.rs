//! Skill taxonomy: weighted categories of recognized skill phrases
//!
//! A [`Taxonomy`] is immutable once built. Every constructor runs the same
//! validation, so a category can never be empty by the time a score is
//! computed from it.

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Static definition of a built-in category
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub weight: f64,
}

/// Categories shipped with the screener. Weights sum to 1.0.
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "core",
        skills: &["python", "sql", "git", "data structures", "algorithms"],
        weight: 0.5,
    },
    BuiltinCategory {
        name: "soft",
        skills: &["communication", "problem solving", "teamwork"],
        weight: 0.3,
    },
    BuiltinCategory {
        name: "optional",
        skills: &["machine learning", "docker", "aws"],
        weight: 0.2,
    },
];

/// A named, weighted group of skill phrases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
    pub weight: f64,
}

impl SkillCategory {
    pub fn new(name: impl Into<String>, skills: Vec<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            skills,
            weight,
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ScreenerError::invalid_taxonomy("", "category name is empty"));
        }
        if !self.weight.is_finite() || !(0.0..=1.0).contains(&self.weight) {
            return Err(ScreenerError::invalid_taxonomy(
                &self.name,
                format!("weight {} is outside [0, 1]", self.weight),
            ));
        }
        if self.skills.is_empty() {
            return Err(ScreenerError::invalid_taxonomy(&self.name, "skill list is empty"));
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            if skill.is_empty() {
                return Err(ScreenerError::invalid_taxonomy(&self.name, "blank skill phrase"));
            }
            if !seen.insert(skill.as_str()) {
                return Err(ScreenerError::invalid_taxonomy(
                    &self.name,
                    format!("duplicate skill phrase '{}'", skill),
                ));
            }
        }
        Ok(())
    }

    /// Lowercase and trim every phrase
    fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.skills = self
            .skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect();
        self
    }
}

/// On-disk schema: `[[categories]]` tables with `name`, `skills`, `weight`
#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    categories: Vec<SkillCategory>,
}

/// Ordered, validated set of skill categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Taxonomy {
    categories: Vec<SkillCategory>,
}

impl Taxonomy {
    /// Build a taxonomy, normalizing phrases and rejecting invalid categories
    pub fn new(categories: Vec<SkillCategory>) -> Result<Self> {
        if categories.is_empty() {
            return Err(ScreenerError::invalid_taxonomy("", "taxonomy has no categories"));
        }

        let categories: Vec<SkillCategory> =
            categories.into_iter().map(SkillCategory::normalized).collect();

        let mut names = HashSet::new();
        for category in &categories {
            category.validate()?;
            if !names.insert(category.name.as_str()) {
                return Err(ScreenerError::invalid_taxonomy(
                    &category.name,
                    "duplicate category name",
                ));
            }
        }

        Ok(Self { categories })
    }

    /// The built-in core / soft / optional taxonomy
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|c| {
                SkillCategory::new(
                    c.name,
                    c.skills.iter().map(|s| s.to_string()).collect(),
                    c.weight,
                )
            })
            .collect();

        // Built-in data is known-valid; skip straight to construction.
        Self { categories }
    }

    /// Parse and validate a taxonomy from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TaxonomyFile = toml::from_str(content)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to parse taxonomy: {}", e)))?;
        Self::new(file.categories)
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn total_weight(&self) -> f64 {
        self.categories.iter().map(|c| c.weight).sum()
    }

    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(SkillCategory::len).sum()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

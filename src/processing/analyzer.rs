//! Screening engine: normalize → score → decide for one resume/job pair

use crate::error::Result;
use crate::output::report::ScreeningReport;
use crate::processing::decision::decide;
use crate::processing::scoring::{experience_score, keyword_density, strength_highlights, ScoreBreakdown};
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::taxonomy::Taxonomy;
use crate::processing::text_processor::TextProcessor;
use log::{debug, info};

/// Stateless screening pipeline over an injected taxonomy
pub struct ScreeningEngine {
    matcher: SkillMatcher,
    text_processor: TextProcessor,
}

impl ScreeningEngine {
    pub fn new(taxonomy: Taxonomy) -> Result<Self> {
        Ok(Self {
            matcher: SkillMatcher::new(taxonomy)?,
            text_processor: TextProcessor::new(),
        })
    }

    /// Enable or disable case folding; with it off, inputs must arrive lowercased
    pub fn with_normalization(mut self, enable: bool) -> Self {
        self.text_processor = self.text_processor.with_lowercase(enable);
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        self.matcher.taxonomy()
    }

    /// Screen one resume against one job description
    pub fn screen(&self, resume_text: &str, job_text: &str) -> ScreeningReport {
        let resume = self.text_processor.normalize(resume_text);
        let job = self.text_processor.normalize(job_text);

        let skills = self.matcher.match_skills(&resume);
        let experience = experience_score(&resume);
        let keywords = keyword_density(&resume, &job);
        let highlights = strength_highlights(&resume);

        let scores = ScoreBreakdown::new(skills.skill_score, experience, keywords);
        let decision = decide(scores.total_score);

        debug!(
            "Scores: skill={:.2} experience={} keyword={:.2}",
            scores.skill_score, scores.experience_score, scores.keyword_score
        );
        info!("Screening total {:.2} -> {}", scores.total_score, decision);

        ScreeningReport {
            skills,
            scores,
            decision,
            highlights,
        }
    }
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self {
            matcher: SkillMatcher::default(),
            text_processor: TextProcessor::new(),
        }
    }
}

//! Scoring core: taxonomy, matching, heuristics, decision and pipeline

pub mod taxonomy;
pub mod text_processor;
pub mod skill_matcher;
pub mod scoring;
pub mod decision;
pub mod analyzer;

//! Ordered, styled report layout shared by every text renderer

use crate::output::report::ScreeningReport;
use crate::processing::decision::Severity;
use serde::Serialize;

pub const REPORT_TITLE: &str = "--- Candidate Screening Result ---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    Title,
    Matched,
    Missing,
    Scores,
    Decision,
    Highlights,
    Suggestions,
}

/// Display emphasis for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineStyle {
    Title,
    Matched,
    Missing,
    Score,
    Decision(Severity),
    Highlight,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub text: String,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub heading: Option<String>,
    pub lines: Vec<ReportLine>,
    /// Preceded by a blank line when rendered as text
    pub separated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub sections: Vec<ReportSection>,
}

impl ReportLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl ReportDocument {
    /// Lay out a report. Highlights and suggestions are omitted when empty.
    pub fn build(report: &ScreeningReport) -> Self {
        let mut sections = Vec::new();

        sections.push(ReportSection {
            kind: SectionKind::Title,
            heading: None,
            lines: vec![ReportLine::new(REPORT_TITLE, LineStyle::Title)],
            separated: false,
        });

        sections.push(ReportSection {
            kind: SectionKind::Matched,
            heading: Some("Matched Skills:".to_string()),
            lines: report
                .skills
                .categories
                .iter()
                .map(|c| ReportLine::new(category_line(&c.category, &c.matched), LineStyle::Matched))
                .collect(),
            separated: true,
        });

        sections.push(ReportSection {
            kind: SectionKind::Missing,
            heading: Some("Missing Skills:".to_string()),
            lines: report
                .skills
                .categories
                .iter()
                .map(|c| ReportLine::new(category_line(&c.category, &c.missing), LineStyle::Missing))
                .collect(),
            separated: true,
        });

        let scores = &report.scores;
        sections.push(ReportSection {
            kind: SectionKind::Scores,
            heading: None,
            lines: vec![
                ReportLine::new(format!("Skill Score: {:.2}", scores.skill_score), LineStyle::Score),
                ReportLine::new(format!("Experience Score: {}", scores.experience_score), LineStyle::Score),
                ReportLine::new(format!("Keyword Score: {:.2}", scores.keyword_score), LineStyle::Score),
                ReportLine::new(format!("Resume Strength Score: {:.2}", scores.total_score), LineStyle::Score),
            ],
            separated: true,
        });

        sections.push(ReportSection {
            kind: SectionKind::Decision,
            heading: None,
            lines: vec![ReportLine::new(
                format!("Final Decision: {}", report.decision.label()),
                LineStyle::Decision(report.decision.severity()),
            )],
            separated: false,
        });

        if !report.highlights.is_empty() {
            sections.push(ReportSection {
                kind: SectionKind::Highlights,
                heading: Some("Strength Highlights:".to_string()),
                lines: report
                    .highlights
                    .iter()
                    .map(|h| ReportLine::new(format!("- {}", h), LineStyle::Highlight))
                    .collect(),
                separated: true,
            });
        }

        let suggestions = report.suggestions();
        if !suggestions.is_empty() {
            sections.push(ReportSection {
                kind: SectionKind::Suggestions,
                heading: Some("Suggestions:".to_string()),
                lines: suggestions
                    .iter()
                    .map(|s| ReportLine::new(s.message(), LineStyle::Suggestion))
                    .collect(),
                separated: true,
            });
        }

        Self { sections }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// "core" -> "Core"
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn category_line(category: &str, skills: &[String]) -> String {
    format!("{}: {}", capitalize(category), skills.join(", "))
}

//! Output formatters: console, plain text, markdown, JSON and HTML

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::document::{capitalize, LineStyle, ReportDocument, SectionKind};
use crate::output::report::ScreeningReport;
use crate::processing::decision::Severity;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const ORANGE: Color = Color::TrueColor { r: 255, g: 165, b: 0 };
const GOLDENROD: Color = Color::TrueColor { r: 218, g: 165, b: 32 };

/// Trait for rendering screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with per-line emphasis
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// Uncolored text, identical line-for-line to the console layout
pub struct PlainTextFormatter;

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    plain_formatter: PlainTextFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Candidate Screening Result</title>
    {% if include_styles %}
    <style>
        body { font-family: Helvetica, Arial, sans-serif; max-width: 900px; margin: 0 auto; padding: 20px; }
        h1 { font-size: 1.4em; }
        h2 { font-size: 1.1em; margin-top: 1.2em; }
        p { margin: 0.2em 0; }
        .matched { color: green; }
        .missing { color: red; }
        .highlight { color: goldenrod; }
        .suggestion { color: orange; }
        .decision { font-weight: bold; }
        .positive { color: green; }
        .caution { color: orange; }
        .negative { color: red; }
    </style>
    {% endif %}
</head>
<body>
    <h1>{{ title }}</h1>
    {% for section in sections %}
    <section class="{{ section.class }}">
        {% if section.has_heading %}<h2>{{ section.heading }}</h2>{% endif %}
        {% for line in section.lines %}
        <p class="{{ line.class }}">{{ line.text }}</p>
        {% endfor %}
    </section>
    {% endfor %}
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    title: String,
    sections: Vec<HtmlSection>,
}

struct HtmlSection {
    class: &'static str,
    has_heading: bool,
    heading: String,
    lines: Vec<HtmlLine>,
}

struct HtmlLine {
    class: &'static str,
    text: String,
}

/// Render a document as plain lines. Shared by console and plain output.
fn render_text(document: &ReportDocument, paint: impl Fn(&str, Option<LineStyle>) -> String) -> String {
    let mut output = String::new();

    for section in &document.sections {
        if section.separated {
            output.push('\n');
        }
        if let Some(heading) = &section.heading {
            output.push_str(&paint(heading, None));
            output.push('\n');
        }
        for line in &section.lines {
            output.push_str(&paint(&line.text, Some(line.style)));
            output.push('\n');
        }
    }

    output
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, style: Option<LineStyle>) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        match style {
            // Headers
            None | Some(LineStyle::Title) => text.bold().to_string(),
            Some(LineStyle::Matched) => text.color(Color::Green).to_string(),
            Some(LineStyle::Missing) => text.color(Color::Red).to_string(),
            Some(LineStyle::Score) => text.to_string(),
            Some(LineStyle::Decision(severity)) => text.color(severity_color(severity)).bold().to_string(),
            Some(LineStyle::Highlight) => text.color(GOLDENROD).to_string(),
            Some(LineStyle::Suggestion) => text.color(ORANGE).to_string(),
        }
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Positive => Color::Green,
        Severity::Caution => ORANGE,
        Severity::Negative => Color::Red,
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let document = ReportDocument::build(report);
        Ok(render_text(&document, |text, style| self.paint(text, style)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let document = ReportDocument::build(report);
        Ok(render_text(&document, |text, _| text.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Plain
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut value = serde_json::to_value(report)?;
        if let Some(object) = value.as_object_mut() {
            object.insert("suggestions".to_string(), serde_json::to_value(report.suggestions())?);
        }

        if self.pretty {
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(serde_json::to_string(&value)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    fn decision_badge(severity: Severity) -> &'static str {
        match severity {
            Severity::Positive => "🟢",
            Severity::Caution => "🟠",
            Severity::Negative => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Candidate Screening Result\n\n");

        output.push_str("## Matched Skills\n\n");
        for category in &report.skills.categories {
            output.push_str(&format!("- **{}:** {}\n", capitalize(&category.category), category.matched.join(", ")));
        }
        output.push('\n');

        output.push_str("## Missing Skills\n\n");
        for category in &report.skills.categories {
            output.push_str(&format!("- **{}:** {}\n", capitalize(&category.category), category.missing.join(", ")));
        }
        output.push('\n');

        let scores = &report.scores;
        output.push_str("## Scores\n\n");
        output.push_str("| Component | Score |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| Skill | {:.2} |\n", scores.skill_score));
        output.push_str(&format!("| Experience | {} |\n", scores.experience_score));
        output.push_str(&format!("| Keyword | {:.2} |\n", scores.keyword_score));
        output.push_str(&format!("| **Resume Strength** | **{:.2}** |\n\n", scores.total_score));

        output.push_str(&format!(
            "**Final Decision:** {} {}\n\n",
            Self::decision_badge(report.decision.severity()),
            report.decision.label()
        ));

        if !report.highlights.is_empty() {
            output.push_str("## Strength Highlights\n\n");
            for highlight in &report.highlights {
                output.push_str(&format!("- {}\n", highlight));
            }
            output.push('\n');
        }

        let suggestions = report.suggestions();
        if !suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for suggestion in &suggestions {
                output.push_str(&format!("- {}\n", suggestion.message()));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn line_class(style: LineStyle) -> &'static str {
        match style {
            LineStyle::Title => "title",
            LineStyle::Matched => "matched",
            LineStyle::Missing => "missing",
            LineStyle::Score => "score",
            LineStyle::Decision(Severity::Positive) => "decision positive",
            LineStyle::Decision(Severity::Caution) => "decision caution",
            LineStyle::Decision(Severity::Negative) => "decision negative",
            LineStyle::Highlight => "highlight",
            LineStyle::Suggestion => "suggestion",
        }
    }

    fn section_class(kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::Title => "title",
            SectionKind::Matched => "matched-skills",
            SectionKind::Missing => "missing-skills",
            SectionKind::Scores => "scores",
            SectionKind::Decision => "decision",
            SectionKind::Highlights => "highlights",
            SectionKind::Suggestions => "suggestions",
        }
    }

    fn create_template_data(&self, report: &ScreeningReport) -> HtmlTemplate {
        let document = ReportDocument::build(report);

        let sections = document
            .sections
            .iter()
            .filter(|s| s.kind != SectionKind::Title)
            .map(|section| HtmlSection {
                class: Self::section_class(section.kind),
                has_heading: section.heading.is_some(),
                heading: section
                    .heading
                    .as_deref()
                    .map(|h| h.trim_end_matches(':').to_string())
                    .unwrap_or_default(),
                lines: section
                    .lines
                    .iter()
                    .map(|line| HtmlLine {
                        class: Self::line_class(line.style),
                        text: line.text.clone(),
                    })
                    .collect(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            title: "Candidate Screening Result".to_string(),
            sections,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let template_data = self.create_template_data(report);
        Ok(template_data.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            plain_formatter: PlainTextFormatter,
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Plain => self.plain_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "candidate".to_string());

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console | OutputFormat::Plain => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_screening{}.{}", base_name, timestamp_suffix, extension)
}

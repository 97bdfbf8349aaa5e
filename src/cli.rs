//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Score a resume against a skills taxonomy and a job description")]
#[command(long_about = "Match a resume against weighted skill categories, score experience and job keyword overlap, and decide SHORTLISTED, NEEDS REVIEW or REJECTED")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen a resume against a job description
    Screen {
        /// Resume file (TXT, MD, PDF) or the resume text itself
        #[arg(short, long)]
        resume: String,

        /// Job description file (TXT, MD) or the job text itself
        #[arg(short, long)]
        job: String,

        /// Output format: console, plain, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save the rendered report to a file (a directory gets a generated name)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Show the skill taxonomy used for scoring
    Taxonomy {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "plain" | "text" | "txt" => Ok(crate::config::OutputFormat::Plain),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, plain, json, markdown, html",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("txt"), Ok(OutputFormat::Plain));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_parse_screen_command() {
        let cli = Cli::try_parse_from([
            "resume-screener",
            "screen",
            "--resume",
            "resume.txt",
            "--job",
            "python sql git",
            "-o",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Screen { resume, job, output, save, no_color } => {
                assert_eq!(resume, "resume.txt");
                assert_eq!(job, "python sql git");
                assert_eq!(output.as_deref(), Some("json"));
                assert!(save.is_none());
                assert!(!no_color);
            }
            _ => panic!("expected screen command"),
        }
    }
}

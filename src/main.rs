//! Resume screener: scores a resume against a skills taxonomy and a job description

use clap::Parser;
use log::{error, info};
use resume_screener::cli::{self, Cli, Commands, ConfigAction};
use resume_screener::config::{Config, OutputFormat};
use resume_screener::error::{Result, ScreenerError};
use resume_screener::input::{InputManager, TextSource};
use resume_screener::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_screener::processing::analyzer::ScreeningEngine;
use resume_screener::processing::taxonomy::Taxonomy;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.unwrap_or_else(Config::config_path);

    // Load configuration
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Screen {
            resume,
            job,
            output,
            save,
            no_color,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ScreenerError::InvalidInput)?,
                None => config.output.format,
            };
            let use_colors = config.output.color_output && !no_color;

            info!("Starting candidate screening");

            let mut input_manager = InputManager::new().with_inline_fallback(config.input.inline_fallback);
            let (resume_text, resume_source) = input_manager.resolve(&resume).await?;
            let (job_text, _) = input_manager.resolve(&job).await?;

            let engine = ScreeningEngine::new(Taxonomy::builtin())?.with_normalization(config.input.normalize_case);
            let report = engine.screen(&resume_text, &job_text);

            let generator = ReportGenerator::with_options(use_colors, true, true);
            let rendered = generator.generate_report(&report, &output_format)?;
            print!("{}", rendered);

            if let Some(save_path) = save {
                // Console output is saved without escape codes
                let content = match output_format {
                    OutputFormat::Console => generator.generate_report(&report, &OutputFormat::Plain)?,
                    _ => rendered,
                };

                let target = if save_path.is_dir() {
                    let stem = match resume_source {
                        TextSource::File(_) => resume.as_str(),
                        TextSource::Inline => "candidate",
                    };
                    save_path.join(suggest_filename(&output_format, stem, config.output.timestamp_filenames))
                } else {
                    save_path
                };

                save_report_to_file(&content, &target)?;
                println!("\n💾 Results saved to {}", target.display());
            }
        }

        Commands::Taxonomy { json } => {
            let taxonomy = Taxonomy::builtin();
            if json {
                println!("{}", serde_json::to_string_pretty(&taxonomy)?);
            } else {
                println!("📚 Skill Taxonomy ({} skills)\n", taxonomy.skill_count());
                for category in taxonomy.categories() {
                    println!("  • {} (weight: {:.1}%)", category.name, category.weight * 100.0);
                    println!("    {}", category.skills.join(", "));
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! # EcoPrompt CLI
//!
//! Estimates the energy, water and carbon cost of AI prompts and suggests
//! leaner rewrites.

mod render;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ecoprompt_engine::config::{default_config_path, load_config, write_default_config};
use ecoprompt_engine::{
    calculate_environmental_impact, compare_prompts, optimize, Config, ImpactOptions,
    ProfileName, PromptType,
};
use render::CheckedPrompt;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "ecoprompt")]
#[command(about = "Environmental impact coach for AI prompts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct ImpactArgs {
    /// Expected answer style (general, code, creative, brief, analysis)
    #[arg(short = 't', long)]
    output_type: Option<String>,

    /// Environmental profile (AZURE_OPENAI, AWS_ANTHROPIC, DEEPSEEK_CHINA)
    #[arg(short, long)]
    profile: Option<String>,

    /// Known response size in tokens, instead of the output ratio
    #[arg(long)]
    output_tokens: Option<u64>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the footprint of one prompt
    Estimate {
        /// Prompt text (read from stdin when omitted)
        text: Option<String>,

        /// Read the prompt from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        #[command(flatten)]
        impact: ImpactArgs,
    },

    /// Compare an original prompt with a shorter version
    Compare {
        /// Original prompt text
        #[arg(long)]
        original: String,

        /// Optimized prompt text
        #[arg(long)]
        optimized: String,

        #[command(flatten)]
        impact: ImpactArgs,
    },

    /// Suggest improvements and rewrite a prompt
    Optimize {
        /// Prompt text (read from stdin when omitted)
        text: Option<String>,

        /// Read the prompt from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        #[command(flatten)]
        impact: ImpactArgs,
    },

    /// Score every prompt file in a directory
    Check {
        /// Directory to check
        path: PathBuf,

        /// Highest acceptable eco score (0-100)
        #[arg(long)]
        eco_threshold: Option<u8>,

        #[command(flatten)]
        impact: ImpactArgs,
    },

    /// List the environmental profiles
    Profiles {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;

    match cli.command {
        Commands::Estimate { text, file, impact } => {
            let prompt = read_prompt(text, file.as_deref())?;
            let options = impact_options(&config, &impact);
            let result = calculate_environmental_impact(&prompt, &options);
            emit_output(&result, &impact, || {
                render::format_impact_text(&result, config.display.units)
            })?;
        }

        Commands::Compare {
            original,
            optimized,
            impact,
        } => {
            let options = impact_options(&config, &impact);
            let comparison = compare_prompts(&original, &optimized, &options);
            emit_output(&comparison, &impact, || {
                render::format_comparison_text(&comparison)
            })?;
        }

        Commands::Optimize { text, file, impact } => {
            let prompt = read_prompt(text, file.as_deref())?;
            let options = impact_options(&config, &impact);
            let report = optimize(&prompt, &options)?;
            emit_output(&report, &impact, || render::format_optimization_text(&report))?;
        }

        Commands::Check {
            path,
            eco_threshold,
            impact,
        } => {
            info!("Checking directory: {}", path.display());
            let eco_threshold = eco_threshold.unwrap_or(config.display.eco_threshold);
            let options = impact_options(&config, &impact);
            let checked = collect_directory_results(&path, &options)?;
            let above = checked
                .iter()
                .filter(|c| c.result.metadata.eco_score.0 > eco_threshold)
                .count();

            let report: Vec<CheckEntry<'_>> = checked
                .iter()
                .map(|c| CheckEntry {
                    file: &c.file,
                    result: &c.result,
                })
                .collect();
            emit_output(&report, &impact, || {
                render::format_check_text(&checked, eco_threshold, &path)
            })?;

            if above > 0 {
                std::process::exit(1);
            }
        }

        Commands::Profiles { format } => {
            let text = match format.as_str() {
                "json" => {
                    let profiles: Vec<_> = ProfileName::ALL
                        .iter()
                        .map(|name| {
                            serde_json::json!({
                                "key": name.key(),
                                "default": *name == ProfileName::default(),
                                "profile": name.profile(),
                            })
                        })
                        .collect();
                    serde_json::to_string_pretty(&profiles)?
                }
                _ => render::format_profiles_text(),
            };
            println!("{}", text);
        }

        Commands::InitConfig { path } => {
            let path = path.unwrap_or_else(default_config_path);
            if path.exists() {
                bail!("Refusing to overwrite existing config: {}", path.display());
            }
            write_default_config(&path)
                .with_context(|| format!("Failed to write config: {}", path.display()))?;
            println!("Default configuration written to: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct CheckEntry<'a> {
    file: &'a str,
    result: &'a ecoprompt_metrics::ImpactResult,
}

/// Merge command-line overrides into the configured defaults
fn impact_options(config: &Config, args: &ImpactArgs) -> ImpactOptions {
    let mut options = config.impact_options();

    if let Some(ref name) = args.output_type {
        options.output_type = PromptType::lookup(name).unwrap_or_else(|| {
            warn!("Unknown output type '{}', using {}", name, PromptType::default());
            PromptType::default()
        });
    }
    if let Some(ref name) = args.profile {
        options.profile = ProfileName::lookup(name).unwrap_or_else(|| {
            warn!("Unknown profile '{}', using {}", name, ProfileName::default());
            ProfileName::default()
        });
    }
    if let Some(tokens) = args.output_tokens {
        options.custom_output_tokens = Some(tokens);
    }

    options
}

fn read_prompt(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read prompt file: {}", path.display()));
    }
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read prompt from stdin")?;
    Ok(buffer)
}

/// Score all prompt files in a directory
fn collect_directory_results(path: &Path, options: &ImpactOptions) -> Result<Vec<CheckedPrompt>> {
    let mut checked = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            !matches!(name, "target" | "node_modules" | ".git" | "dist" | "build")
        })
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }

        let ext = entry_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        if !matches!(ext, "txt" | "md" | "prompt") {
            continue;
        }

        match fs::read_to_string(entry_path) {
            Ok(prompt) => checked.push(CheckedPrompt {
                file: entry_path.display().to_string(),
                result: calculate_environmental_impact(&prompt, options),
            }),
            Err(e) => {
                info!("Skipping {}: {}", entry_path.display(), e);
            }
        }
    }

    Ok(checked)
}

/// Emit a result in the requested format
fn emit_output<T: Serialize>(
    value: &T,
    args: &ImpactArgs,
    render_text: impl FnOnce() -> String,
) -> Result<()> {
    let text = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(value)?,
        "text" => render_text(),
        other => bail!("Unsupported format: {}", other),
    };

    match args.output {
        Some(ref path) => {
            fs::write(path, &text)?;
            eprintln!("Output written to: {}", path.display());
        }
        None => {
            println!("{}", text);
        }
    }

    Ok(())
}

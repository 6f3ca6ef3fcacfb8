// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! # EcoPrompt Engine
//!
//! Estimates the environmental cost of sending a prompt to a large language
//! model. The pipeline is strictly top-down and stateless:
//!
//! text → tokens → energy → {water, carbon} → {analogies, eco score}
//!
//! ```rust,ignore
//! use ecoprompt_engine::{calculate_environmental_impact, ImpactOptions, ProfileName};
//!
//! let options = ImpactOptions::default().with_profile(ProfileName::AwsAnthropic);
//! let impact = calculate_environmental_impact("Explain quantum computing", &options);
//! println!("{} Wh, eco score {}", impact.energy.watt_hours, impact.metadata.eco_score);
//! ```

pub mod analogies;
pub mod carbon;
pub mod config;
pub mod energy;
pub mod error;
pub mod impact;
pub mod optimizer;
pub mod profile;
pub mod score;
pub mod tokens;
pub mod water;

pub use analogies::{carbon_analogies, energy_analogies, water_analogies};
pub use carbon::calculate_carbon;
pub use config::{Config, Units};
pub use energy::{calculate_energy, EnergyBenchmark, BENCHMARKS};
pub use error::{EngineError, Result};
pub use impact::{calculate_environmental_impact, compare_prompts, ImpactOptions};
pub use optimizer::{analyze_prompt, optimize, optimize_prompt, OptimizationReport, PromptAnalysis};
pub use profile::{EnvironmentalProfile, ProfileName};
pub use score::calculate_eco_score;
pub use tokens::{estimate_output_tokens, estimate_tokens, PromptType};
pub use water::calculate_water;

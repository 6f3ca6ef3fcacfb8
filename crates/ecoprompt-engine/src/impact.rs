// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Full impact calculation and prompt comparison

use crate::analogies::{carbon_analogies, energy_analogies, water_analogies};
use crate::carbon::calculate_carbon;
use crate::energy::calculate_energy;
use crate::profile::ProfileName;
use crate::score::calculate_eco_score;
use crate::tokens::{estimate_output_tokens, estimate_tokens, PromptType};
use crate::water::calculate_water;
use chrono::Utc;
use ecoprompt_metrics::*;
use std::ops::Sub;
use tracing::debug;

/// Knobs for a single impact calculation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpactOptions {
    /// Expected answer style, used when no explicit output size is given
    pub output_type: PromptType,
    pub profile: ProfileName,
    /// Known response size; overrides the output ratio when set (even to 0)
    pub custom_output_tokens: Option<u64>,
}

impl ImpactOptions {
    pub fn with_output_type(mut self, output_type: PromptType) -> Self {
        self.output_type = output_type;
        self
    }

    pub fn with_profile(mut self, profile: ProfileName) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_output_tokens(mut self, tokens: u64) -> Self {
        self.custom_output_tokens = Some(tokens);
        self
    }
}

/// Estimate the complete environmental impact of sending `prompt`.
pub fn calculate_environmental_impact(prompt: &str, options: &ImpactOptions) -> ImpactResult {
    let input = estimate_tokens(prompt);
    let output = options
        .custom_output_tokens
        .unwrap_or_else(|| estimate_output_tokens(input, options.output_type));
    let tokens = TokenCount::new(input, output);

    let profile = options.profile.profile();
    let energy = calculate_energy(input, output);
    let water = calculate_water(energy, profile);
    let carbon = calculate_carbon(energy, profile);
    let eco_score = calculate_eco_score(energy, water, carbon);

    debug!(
        "Impact for {} tokens on {}: {:.4} Wh, {:.4} L, {:.6} kgCO2e, score {}",
        tokens.total, options.profile, energy.0, water.0, carbon.0, eco_score
    );

    ImpactResult {
        tokens,
        energy: EnergyImpact {
            watt_hours: energy.0,
            kilowatt_hours: energy.as_kilowatt_hours(),
            analogies: energy_analogies(energy),
        },
        water: WaterImpact {
            liters: water.0,
            milliliters: water.as_milliliters(),
            analogies: water_analogies(water),
        },
        carbon: CarbonImpact {
            kilograms: carbon.0,
            grams: carbon.as_grams(),
            analogies: carbon_analogies(carbon),
        },
        metadata: ImpactMetadata {
            profile_name: profile.name().to_string(),
            region: profile.region().to_string(),
            eco_score,
            rating: eco_score.rating(),
            timestamp: Utc::now(),
        },
    }
}

/// Estimate both prompts and report what the optimized one saves.
pub fn compare_prompts(original: &str, optimized: &str, options: &ImpactOptions) -> ComparisonResult {
    let original = calculate_environmental_impact(original, options);
    let optimized = calculate_environmental_impact(optimized, options);

    let original_tokens = i64::try_from(original.tokens.total).unwrap_or(i64::MAX);
    let optimized_tokens = i64::try_from(optimized.tokens.total).unwrap_or(i64::MAX);

    let savings = Savings {
        energy: saving(original.energy.energy(), optimized.energy.energy(), |e| e.0),
        water: saving(original.water.water(), optimized.water.water(), |w| w.0),
        carbon: saving(original.carbon.carbon(), optimized.carbon.carbon(), |c| c.0),
        tokens: saving(original_tokens, optimized_tokens, |t| t as f64),
    };

    ComparisonResult {
        original,
        optimized,
        savings,
    }
}

fn saving<T>(original: T, optimized: T, value: impl Fn(T) -> f64) -> Saving<T>
where
    T: Copy + Sub<Output = T>,
{
    Saving {
        amount: original - optimized,
        percentage: percentage_saved(value(original), value(optimized)),
    }
}

/// Relative reduction in percent; undefined against a zero original.
fn percentage_saved(original: f64, optimized: f64) -> Option<Fixed> {
    if original == 0.0 {
        return None;
    }
    Some(Fixed::new((1.0 - optimized / original) * 100.0, 1))
}

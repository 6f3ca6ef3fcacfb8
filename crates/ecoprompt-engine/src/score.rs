// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Eco-score: footprint relative to the smallest calibrated query

use crate::carbon::calculate_carbon;
use crate::energy::SHORT;
use crate::profile::ProfileName;
use crate::water::calculate_water;
use ecoprompt_metrics::{Carbon, EcoScore, Energy, Water};

const ENERGY_WEIGHT: f64 = 0.5;
const WATER_WEIGHT: f64 = 0.25;
const CARBON_WEIGHT: f64 = 0.25;

/// Score at which a query matches the baseline exactly
const BASELINE_SCORE: f64 = 50.0;

/// Score a footprint on a 0-100 scale, lower is better.
///
/// Each metric is divided by its value for the short benchmark under the
/// default profile, regardless of which profile produced the inputs. The
/// weighted ratio is scaled so the baseline scores 50 and capped at 100.
pub fn calculate_eco_score(energy: Energy, water: Water, carbon: Carbon) -> EcoScore {
    let baseline_energy = Energy::watt_hours(SHORT.energy_wh);
    let baseline_profile = ProfileName::default().profile();
    let baseline_water = calculate_water(baseline_energy, baseline_profile);
    let baseline_carbon = calculate_carbon(baseline_energy, baseline_profile);

    let composite = ENERGY_WEIGHT * (energy.0 / baseline_energy.0)
        + WATER_WEIGHT * (water.0 / baseline_water.0)
        + CARBON_WEIGHT * (carbon.0 / baseline_carbon.0);

    // Ratios are non-negative, so only the upper bound needs clamping
    EcoScore::new((composite * BASELINE_SCORE).round() as u32)
}

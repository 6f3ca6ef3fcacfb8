// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Water consumption estimation

use crate::profile::EnvironmentalProfile;
use ecoprompt_metrics::{Energy, Water};

/// Estimate water consumed by a query
///
/// Liters = (E / PUE) × WUE_site + E × WUE_source, with E in kWh. The first
/// term is evaporative cooling at the data center, the second is water used
/// by electricity generation.
pub fn calculate_water(energy: Energy, profile: &EnvironmentalProfile) -> Water {
    let kwh = energy.as_kilowatt_hours();
    let on_site = kwh / profile.power_usage_effectiveness() * profile.water_usage_effectiveness_on_site();
    let off_site = kwh * profile.water_usage_effectiveness_off_site();

    Water::liters(on_site + off_site)
}

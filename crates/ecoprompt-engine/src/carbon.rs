// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Carbon emission estimation

use crate::profile::EnvironmentalProfile;
use ecoprompt_metrics::{Carbon, Energy};

/// Estimate carbon emissions from energy consumption
///
/// kgCO2e = E(kWh) × CIF, using the grid intensity of the given profile.
pub fn calculate_carbon(energy: Energy, profile: &EnvironmentalProfile) -> Carbon {
    Carbon::kilograms_co2e(energy.as_kilowatt_hours() * profile.carbon_intensity_factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileName;

    #[test]
    fn test_one_kilowatt_hour_equals_intensity() {
        for name in ProfileName::ALL {
            let profile = name.profile();
            let carbon = calculate_carbon(Energy::watt_hours(1000.0), profile);
            assert_eq!(carbon.0, profile.carbon_intensity_factor());
        }
    }

    #[test]
    fn test_zero_energy_zero_carbon() {
        for name in ProfileName::ALL {
            assert_eq!(calculate_carbon(Energy::ZERO, name.profile()), Carbon::ZERO);
        }
    }

    #[test]
    fn test_dirtier_grid_emits_more() {
        let energy = Energy::watt_hours(0.421);
        let azure = calculate_carbon(energy, ProfileName::AzureOpenAi.profile());
        let deepseek = calculate_carbon(energy, ProfileName::DeepseekChina.profile());
        assert!(deepseek > azure);
    }
}

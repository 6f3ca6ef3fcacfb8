// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Environmental profiles of compute providers
//!
//! Coefficients follow Table 1 of "How Hungry is AI?" (Microsoft Azure,
//! AWS and DeepSeek infrastructure). The registry is fixed at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Registry key of an environmental profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProfileName {
    #[default]
    AzureOpenAi,
    AwsAnthropic,
    DeepseekChina,
}

impl ProfileName {
    pub const ALL: [ProfileName; 3] = [
        ProfileName::AzureOpenAi,
        ProfileName::AwsAnthropic,
        ProfileName::DeepseekChina,
    ];

    /// Strict lookup of a registry key such as `AWS_ANTHROPIC` (case-insensitive)
    pub fn lookup(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "AZURE_OPENAI" => Some(ProfileName::AzureOpenAi),
            "AWS_ANTHROPIC" => Some(ProfileName::AwsAnthropic),
            "DEEPSEEK_CHINA" => Some(ProfileName::DeepseekChina),
            _ => None,
        }
    }

    /// Resolve a registry key; unknown names fall back to the default profile.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            debug!("Unknown profile '{}', falling back to {}", name, ProfileName::default());
            ProfileName::default()
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            ProfileName::AzureOpenAi => "AZURE_OPENAI",
            ProfileName::AwsAnthropic => "AWS_ANTHROPIC",
            ProfileName::DeepseekChina => "DEEPSEEK_CHINA",
        }
    }

    pub fn profile(&self) -> &'static EnvironmentalProfile {
        match self {
            ProfileName::AzureOpenAi => &AZURE_OPENAI,
            ProfileName::AwsAnthropic => &AWS_ANTHROPIC,
            ProfileName::DeepseekChina => &DEEPSEEK_CHINA,
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<String> for ProfileName {
    fn from(name: String) -> Self {
        Self::lookup(&name).unwrap_or_else(|| {
            warn!("Unknown profile '{}' in configuration, using {}", name, ProfileName::default());
            ProfileName::default()
        })
    }
}

impl From<ProfileName> for String {
    fn from(name: ProfileName) -> Self {
        name.key().to_string()
    }
}

/// Physical coefficients of a compute provider and its electricity grid.
///
/// Instances only exist in the static registry, so every coefficient is
/// non-negative and PUE is at least 1.
#[derive(Debug, Serialize)]
pub struct EnvironmentalProfile {
    name: &'static str,
    region: &'static str,
    power_usage_effectiveness: f64,
    water_usage_effectiveness_on_site: f64,
    water_usage_effectiveness_off_site: f64,
    carbon_intensity_factor: f64,
}

impl EnvironmentalProfile {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn region(&self) -> &'static str {
        self.region
    }

    /// Data-center overhead ratio (PUE)
    pub fn power_usage_effectiveness(&self) -> f64 {
        self.power_usage_effectiveness
    }

    /// On-site cooling water, L/kWh
    pub fn water_usage_effectiveness_on_site(&self) -> f64 {
        self.water_usage_effectiveness_on_site
    }

    /// Off-site electricity generation water, L/kWh
    pub fn water_usage_effectiveness_off_site(&self) -> f64 {
        self.water_usage_effectiveness_off_site
    }

    /// kg CO2e per kWh
    pub fn carbon_intensity_factor(&self) -> f64 {
        self.carbon_intensity_factor
    }
}

static AZURE_OPENAI: EnvironmentalProfile = EnvironmentalProfile {
    name: "Azure/OpenAI (Default)",
    region: "US",
    power_usage_effectiveness: 1.12,
    water_usage_effectiveness_on_site: 0.30,
    water_usage_effectiveness_off_site: 3.142,
    carbon_intensity_factor: 0.3528,
};

static AWS_ANTHROPIC: EnvironmentalProfile = EnvironmentalProfile {
    name: "AWS/Anthropic",
    region: "US",
    power_usage_effectiveness: 1.14,
    water_usage_effectiveness_on_site: 0.18,
    water_usage_effectiveness_off_site: 3.142,
    carbon_intensity_factor: 0.385,
};

static DEEPSEEK_CHINA: EnvironmentalProfile = EnvironmentalProfile {
    name: "DeepSeek (China)",
    region: "CN",
    power_usage_effectiveness: 1.27,
    water_usage_effectiveness_on_site: 1.20,
    water_usage_effectiveness_off_site: 6.016,
    carbon_intensity_factor: 0.6,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(ProfileName::lookup("aws_anthropic"), Some(ProfileName::AwsAnthropic));
        assert_eq!(ProfileName::lookup(" DEEPSEEK_CHINA "), Some(ProfileName::DeepseekChina));
        assert_eq!(ProfileName::lookup("GCP"), None);
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(ProfileName::from_name("nonexistent"), ProfileName::AzureOpenAi);
        assert_eq!(ProfileName::from_name(""), ProfileName::default());
    }

    #[test]
    fn test_registry_coefficients_are_physical() {
        for name in ProfileName::ALL {
            let profile = name.profile();
            assert!(profile.power_usage_effectiveness() >= 1.0, "{}", name);
            assert!(profile.water_usage_effectiveness_on_site() >= 0.0);
            assert!(profile.water_usage_effectiveness_off_site() >= 0.0);
            assert!(profile.carbon_intensity_factor() >= 0.0);
        }
    }

    #[test]
    fn test_serde_uses_registry_keys() {
        let json = serde_json::to_string(&ProfileName::DeepseekChina).unwrap();
        assert_eq!(json, "\"DEEPSEEK_CHINA\"");

        let parsed: ProfileName = serde_json::from_str("\"mystery_cloud\"").unwrap();
        assert_eq!(parsed, ProfileName::AzureOpenAi);
    }

    #[test]
    fn test_default_profile_metadata() {
        let profile = ProfileName::default().profile();
        assert_eq!(profile.name(), "Azure/OpenAI (Default)");
        assert_eq!(profile.region(), "US");
    }
}

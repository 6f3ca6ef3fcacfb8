// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! # EcoPrompt Metrics
//!
//! Core data types for the environmental footprint of a language-model prompt.
//! Every value here is produced fresh by one calculation and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul, Sub};

macro_rules! quantity_ops {
    ($ty:ident) => {
        impl Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                $ty(self.0 + rhs.0)
            }
        }

        impl Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                $ty(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $ty {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                $ty(self.0 * rhs)
            }
        }
    };
}

/// Energy measurement in watt-hours
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Energy(pub f64);

impl Energy {
    pub const ZERO: Self = Energy(0.0);

    pub fn watt_hours(wh: f64) -> Self {
        Energy(wh)
    }

    pub fn kilowatt_hours(kwh: f64) -> Self {
        Energy(kwh * 1000.0)
    }

    pub fn as_kilowatt_hours(self) -> f64 {
        self.0 / 1000.0
    }
}

quantity_ops!(Energy);

/// Water consumption in liters
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Water(pub f64);

impl Water {
    pub const ZERO: Self = Water(0.0);

    pub fn liters(l: f64) -> Self {
        Water(l)
    }

    pub fn milliliters(ml: f64) -> Self {
        Water(ml / 1000.0)
    }

    pub fn as_milliliters(self) -> f64 {
        self.0 * 1000.0
    }
}

quantity_ops!(Water);

/// Carbon emissions in kilograms of CO2 equivalent
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Carbon(pub f64);

impl Carbon {
    pub const ZERO: Self = Carbon(0.0);

    pub fn kilograms_co2e(kg: f64) -> Self {
        Carbon(kg)
    }

    pub fn grams_co2e(g: f64) -> Self {
        Carbon(g / 1000.0)
    }

    pub fn as_grams(self) -> f64 {
        self.0 * 1000.0
    }
}

quantity_ops!(Carbon);

/// A number that is displayed and serialized with a fixed count of decimals.
///
/// The unrounded value stays available through [`Fixed::value`]; only the
/// rendering is rounded, so `Fixed::new(0.0295, 2)` prints as `0.03`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed {
    value: f64,
    places: usize,
}

impl Fixed {
    pub fn new(value: f64, places: usize) -> Self {
        Fixed { value, places }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn places(&self) -> usize {
        self.places
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", self.places, self.value)
    }
}

impl Serialize for Fixed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fixed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let value = text.parse::<f64>().map_err(serde::de::Error::custom)?;
        let places = text.split_once('.').map_or(0, |(_, decimals)| decimals.len());
        Ok(Fixed { value, places })
    }
}

/// Token counts for one prompt/response pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub input: u64,
    pub output: u64,
    pub total: u64,
}

impl TokenCount {
    pub fn new(input: u64, output: u64) -> Self {
        TokenCount {
            input,
            output,
            total: input.saturating_add(output),
        }
    }
}

/// Ecological score (0-100, lower is better)
///
/// 50 corresponds to the footprint of the smallest calibration benchmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EcoScore(pub u8);

impl EcoScore {
    pub const MAX: u8 = 100;

    pub fn new(score: u32) -> Self {
        EcoScore(score.min(u32::from(Self::MAX)) as u8)
    }

    pub fn rating(self) -> EcoRating {
        EcoRating::from_score(self)
    }
}

impl fmt::Display for EcoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative band for an [`EcoScore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EcoRating {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryHigh,
}

impl EcoRating {
    pub fn from_score(score: EcoScore) -> Self {
        match score.0 {
            0..=20 => EcoRating::Excellent,
            21..=40 => EcoRating::Good,
            41..=60 => EcoRating::Fair,
            61..=80 => EcoRating::Poor,
            _ => EcoRating::VeryHigh,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EcoRating::Excellent => "Excellent",
            EcoRating::Good => "Good",
            EcoRating::Fair => "Fair",
            EcoRating::Poor => "Poor",
            EcoRating::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for EcoRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everyday equivalents of an energy amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyAnalogies {
    /// Hours of a 10 W LED bulb
    pub led_hours: Fixed,
    pub smartphone_charges: Fixed,
    pub laptop_charges: Fixed,
    /// Cups brewed by a 1000 W coffee maker running 5 minutes
    pub cups_of_coffee: Fixed,
    /// Hours of a 130 W 65" television
    pub tv_hours: Fixed,
    pub google_searches: Fixed,
}

/// Everyday equivalents of a water amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterAnalogies {
    pub cups_of_coffee: Fixed,
    /// 500 mL bottles
    pub water_bottles: Fixed,
    pub gallons: Fixed,
    /// Days of recommended drinking water (2 L/day)
    pub days_of_drinking: Fixed,
}

/// Everyday equivalents of a carbon amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonAnalogies {
    pub driving_km: Fixed,
    pub driving_miles: Fixed,
    /// Trees needed for a year to absorb the emissions
    pub trees_per_year: Fixed,
    /// Days one tree needs to absorb the emissions
    pub tree_days: Fixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyImpact {
    pub watt_hours: f64,
    pub kilowatt_hours: f64,
    pub analogies: EnergyAnalogies,
}

impl EnergyImpact {
    pub fn energy(&self) -> Energy {
        Energy::watt_hours(self.watt_hours)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterImpact {
    pub liters: f64,
    pub milliliters: f64,
    pub analogies: WaterAnalogies,
}

impl WaterImpact {
    pub fn water(&self) -> Water {
        Water::liters(self.liters)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonImpact {
    pub kilograms: f64,
    pub grams: f64,
    pub analogies: CarbonAnalogies,
}

impl CarbonImpact {
    pub fn carbon(&self) -> Carbon {
        Carbon::kilograms_co2e(self.kilograms)
    }
}

/// Descriptive data attached to every impact calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetadata {
    /// Display name of the environmental profile used
    pub profile_name: String,
    pub region: String,
    pub eco_score: EcoScore,
    pub rating: EcoRating,
    /// Wall-clock capture time; excluded from [`ImpactResult::same_measurement`]
    pub timestamp: DateTime<Utc>,
}

/// Complete environmental-impact estimate for one prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub tokens: TokenCount,
    pub energy: EnergyImpact,
    pub water: WaterImpact,
    pub carbon: CarbonImpact,
    pub metadata: ImpactMetadata,
}

impl ImpactResult {
    /// Compare two results while ignoring when they were captured.
    pub fn same_measurement(&self, other: &ImpactResult) -> bool {
        self.tokens == other.tokens
            && self.energy == other.energy
            && self.water == other.water
            && self.carbon == other.carbon
            && self.metadata.profile_name == other.metadata.profile_name
            && self.metadata.region == other.metadata.region
            && self.metadata.eco_score == other.metadata.eco_score
    }
}

/// Absolute and relative reduction of one metric
///
/// `percentage` is `None` when the original value is zero and a relative
/// saving is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saving<T> {
    pub amount: T,
    pub percentage: Option<Fixed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub energy: Saving<Energy>,
    pub water: Saving<Water>,
    pub carbon: Saving<Carbon>,
    /// Tokens saved; negative when the rewritten prompt is longer
    pub tokens: Saving<i64>,
}

/// Original and optimized estimates side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub original: ImpactResult,
    pub optimized: ImpactResult,
    pub savings: Savings,
}

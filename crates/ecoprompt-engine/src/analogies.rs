// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Real-world equivalents for energy, water and carbon amounts

use ecoprompt_metrics::{
    Carbon, CarbonAnalogies, Energy, EnergyAnalogies, Fixed, Water, WaterAnalogies,
};

/// Reference values for the conversions
pub mod physics {
    pub const LED_BULB_WATTS: f64 = 10.0;
    /// Typical phone battery
    pub const SMARTPHONE_CHARGE_WH: f64 = 15.0;
    pub const LAPTOP_CHARGE_WH: f64 = 60.0;
    pub const COFFEE_MAKER_WATTS: f64 = 1000.0;
    pub const COFFEE_BREW_MINUTES: f64 = 5.0;
    /// 65" LED television
    pub const TV_WATTS: f64 = 130.0;
    pub const SEARCH_QUERY_WH: f64 = 0.3;
    /// 8 oz cup
    pub const CUP_ML: f64 = 237.0;
    pub const BOTTLE_ML: f64 = 500.0;
    pub const LITERS_PER_GALLON: f64 = 3.785;
    pub const DRINKING_WATER_LITERS_PER_DAY: f64 = 2.0;
    /// Average gasoline car, kg CO2 per km
    pub const CAR_CO2_KG_PER_KM: f64 = 0.192;
    pub const MILES_PER_KM: f64 = 0.621371;
    pub const TREE_CO2_KG_PER_YEAR: f64 = 21.0;
    pub const DAYS_PER_YEAR: f64 = 365.0;
}

use physics::*;

pub fn energy_analogies(energy: Energy) -> EnergyAnalogies {
    let wh = energy.0;
    let coffee_cup_wh = COFFEE_MAKER_WATTS * COFFEE_BREW_MINUTES / 60.0;

    EnergyAnalogies {
        led_hours: Fixed::new(wh / LED_BULB_WATTS, 2),
        smartphone_charges: Fixed::new(wh / SMARTPHONE_CHARGE_WH, 2),
        laptop_charges: Fixed::new(wh / LAPTOP_CHARGE_WH, 2),
        cups_of_coffee: Fixed::new(wh / coffee_cup_wh, 2),
        tv_hours: Fixed::new(wh / TV_WATTS, 2),
        google_searches: Fixed::new(wh / SEARCH_QUERY_WH, 1),
    }
}

pub fn water_analogies(water: Water) -> WaterAnalogies {
    let liters = water.0;

    WaterAnalogies {
        cups_of_coffee: Fixed::new(water.as_milliliters() / CUP_ML, 2),
        water_bottles: Fixed::new(water.as_milliliters() / BOTTLE_ML, 2),
        gallons: Fixed::new(liters / LITERS_PER_GALLON, 3),
        days_of_drinking: Fixed::new(liters / DRINKING_WATER_LITERS_PER_DAY, 3),
    }
}

pub fn carbon_analogies(carbon: Carbon) -> CarbonAnalogies {
    let km = carbon.0 / CAR_CO2_KG_PER_KM;
    let tree_years = carbon.0 / TREE_CO2_KG_PER_YEAR;

    CarbonAnalogies {
        driving_km: Fixed::new(km, 2),
        driving_miles: Fixed::new(km * MILES_PER_KM, 2),
        trees_per_year: Fixed::new(tree_years, 3),
        tree_days: Fixed::new(tree_years * DAYS_PER_YEAR, 1),
    }
}

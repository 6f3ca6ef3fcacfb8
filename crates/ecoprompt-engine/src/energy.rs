// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Energy model calibrated against measured GPT-4o queries.
//!
//! Replaces a flat per-token cost with piecewise-linear interpolation over
//! three benchmarks (Table 4, "How Hungry is AI?", March 2025).

use ecoprompt_metrics::Energy;
use serde::Serialize;

/// One calibration point of the energy model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyBenchmark {
    pub name: &'static str,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub energy_wh: f64,
    /// Measured spread; informational only
    pub std_dev_wh: f64,
}

/// Calibration points ordered by strictly increasing tokens and energy.
pub const BENCHMARKS: [EnergyBenchmark; 3] = [
    EnergyBenchmark {
        name: "short",
        input_tokens: 100,
        output_tokens: 300,
        total_tokens: 400,
        energy_wh: 0.421,
        std_dev_wh: 0.127,
    },
    EnergyBenchmark {
        name: "medium",
        input_tokens: 1000,
        output_tokens: 1000,
        total_tokens: 2000,
        energy_wh: 1.214,
        std_dev_wh: 0.391,
    },
    EnergyBenchmark {
        name: "long",
        input_tokens: 10000,
        output_tokens: 1500,
        total_tokens: 11500,
        energy_wh: 1.788,
        std_dev_wh: 0.363,
    },
];

/// The cheapest benchmark, used as the eco-score baseline
pub const SHORT: EnergyBenchmark = BENCHMARKS[0];

/// Energy for one prompt/response pair.
///
/// Scales from the origin below the short benchmark, interpolates between
/// benchmarks, and extrapolates past the long one with the medium→long slope.
pub fn calculate_energy(input_tokens: u64, output_tokens: u64) -> Energy {
    let total = input_tokens.saturating_add(output_tokens) as f64;
    let [short, medium, long] = BENCHMARKS.map(|b| (b.total_tokens as f64, b.energy_wh));

    let wh = if total <= short.0 {
        total / short.0 * short.1
    } else if total <= medium.0 {
        linear_interpolate(short, medium, total)
    } else if total <= long.0 {
        linear_interpolate(medium, long, total)
    } else {
        let rate = (long.1 - medium.1) / (long.0 - medium.0);
        long.1 + (total - long.0) * rate
    };

    Energy::watt_hours(wh)
}

fn linear_interpolate((x1, y1): (f64, f64), (x2, y2): (f64, f64), x: f64) -> f64 {
    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_benchmarks_strictly_increasing() {
        for pair in BENCHMARKS.windows(2) {
            assert!(pair[0].total_tokens < pair[1].total_tokens);
            assert!(pair[0].energy_wh < pair[1].energy_wh);
        }
        for b in BENCHMARKS {
            assert_eq!(b.input_tokens + b.output_tokens, b.total_tokens);
        }
    }

    #[test]
    fn test_zero_tokens_zero_energy() {
        assert_eq!(calculate_energy(0, 0), Energy::ZERO);
    }

    #[test]
    fn test_exact_benchmarks() {
        assert!(close(calculate_energy(100, 300).0, 0.421));
        assert!(close(calculate_energy(1000, 1000).0, 1.214));
        assert!(close(calculate_energy(10000, 1500).0, 1.788));
    }

    #[test]
    fn test_below_short_scales_from_origin() {
        let energy = calculate_energy(11, 17);
        assert!(close(energy.0, 28.0 / 400.0 * 0.421));
        assert!((energy.0 - 0.0295).abs() < 1e-4);
    }

    #[test]
    fn test_interpolates_between_benchmarks() {
        // Midpoint of short and medium
        let mid = calculate_energy(600, 600);
        assert!(close(mid.0, (0.421 + 1.214) / 2.0));
    }

    #[test]
    fn test_extrapolates_beyond_long() {
        let slope = (1.788 - 1.214) / (11500.0 - 2000.0);
        let energy = calculate_energy(20000, 1500);
        assert!(close(energy.0, 1.788 + 10000.0 * slope));
    }

    #[test]
    fn test_only_total_matters() {
        assert_eq!(calculate_energy(300, 100), calculate_energy(100, 300));
    }

    #[test]
    fn test_huge_token_counts_stay_finite() {
        let energy = calculate_energy(u64::MAX, 1);
        assert!(energy.0.is_finite());
        assert!(energy.0 >= calculate_energy(u64::MAX / 2, 0).0);
    }

    proptest! {
        #[test]
        fn prop_energy_is_monotonic(total in 0u64..50_000, extra in 0u64..5_000) {
            let lower = calculate_energy(total, 0);
            let higher = calculate_energy(total, extra);
            prop_assert!(higher.0 >= lower.0);
            prop_assert!(lower.0 >= 0.0);
        }

        #[test]
        fn prop_energy_is_continuous_at_benchmarks(idx in 0usize..3) {
            let tokens = BENCHMARKS[idx].total_tokens;
            let at = calculate_energy(tokens, 0).0;
            let after = calculate_energy(tokens + 1, 0).0;
            prop_assert!((after - at).abs() < 1e-3);
        }
    }
}

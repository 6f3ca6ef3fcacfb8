// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Plain-text rendering of impact results

use ecoprompt_engine::{OptimizationReport, ProfileName, Units};
use ecoprompt_metrics::{ComparisonResult, Fixed, ImpactResult, Saving};
use std::fmt::Write;
use std::path::Path;

pub fn format_impact_text(result: &ImpactResult, units: Units) -> String {
    let mut out = String::new();
    let energy = &result.energy.analogies;
    let carbon = &result.carbon.analogies;

    let _ = writeln!(
        out,
        "\nPrompt impact ({}, {})",
        result.metadata.profile_name, result.metadata.region
    );
    let _ = writeln!(
        out,
        "   Tokens:   {} in / {} out / {} total",
        result.tokens.input, result.tokens.output, result.tokens.total
    );

    out.push_str("\n   Footprint:\n");
    let _ = writeln!(out, "     Energy:   {:.2} Wh", result.energy.watt_hours);
    let _ = writeln!(out, "     Water:    {:.1} mL", result.water.milliliters);
    let _ = writeln!(out, "     Carbon:   {:.2} g CO2e", result.carbon.grams);

    let _ = writeln!(
        out,
        "\n   Eco score:  {}/100 ({})",
        result.metadata.eco_score, result.metadata.rating
    );

    out.push_str("\n   Equivalent to:\n");
    let _ = writeln!(out, "     LED bulb:       {} h", energy.led_hours);
    let _ = writeln!(out, "     Phone charges:  {}", energy.smartphone_charges);
    let _ = writeln!(out, "     Coffee brewed:  {} cups", energy.cups_of_coffee);
    let _ = writeln!(out, "     Web searches:   {}", energy.google_searches);
    let _ = writeln!(out, "     Driving:        {}", driving_distance(result, units));
    let _ = writeln!(out, "     Tree absorbs:   {} days", carbon.tree_days);

    out
}

fn driving_distance(result: &ImpactResult, units: Units) -> String {
    match units {
        Units::Metric => format!("{} km", result.carbon.analogies.driving_km),
        Units::Imperial => format!("{} mi", result.carbon.analogies.driving_miles),
    }
}

fn percentage(saving: Option<Fixed>) -> String {
    match saving {
        Some(p) => format!("{}%", p),
        None => "n/a".to_string(),
    }
}

fn saving_line<T>(out: &mut String, label: &str, saving: &Saving<T>, amount: String) {
    let _ = writeln!(out, "     {:<9} {} ({})", label, amount, percentage(saving.percentage));
}

pub fn format_comparison_text(comparison: &ComparisonResult) -> String {
    let mut out = String::new();
    let savings = &comparison.savings;

    let _ = writeln!(
        out,
        "\nOriginal:   {} tokens, {:.4} Wh, eco {}/100",
        comparison.original.tokens.total,
        comparison.original.energy.watt_hours,
        comparison.original.metadata.eco_score
    );
    let _ = writeln!(
        out,
        "Optimized:  {} tokens, {:.4} Wh, eco {}/100",
        comparison.optimized.tokens.total,
        comparison.optimized.energy.watt_hours,
        comparison.optimized.metadata.eco_score
    );

    out.push_str("\n   Savings:\n");
    saving_line(&mut out, "Tokens:", &savings.tokens, savings.tokens.amount.to_string());
    saving_line(
        &mut out,
        "Energy:",
        &savings.energy,
        format!("{:.4} Wh", savings.energy.amount.0),
    );
    saving_line(
        &mut out,
        "Water:",
        &savings.water,
        format!("{:.2} mL", savings.water.amount.as_milliliters()),
    );
    saving_line(
        &mut out,
        "Carbon:",
        &savings.carbon,
        format!("{:.4} g CO2e", savings.carbon.amount.as_grams()),
    );

    out
}

pub fn format_optimization_text(report: &OptimizationReport) -> String {
    let mut out = String::new();

    out.push_str("\nSuggestions:\n");
    if report.analysis.suggestions.is_empty() {
        out.push_str("   - Prompt is already well optimized\n");
    }
    for suggestion in &report.analysis.suggestions {
        let _ = writeln!(out, "   - {}", suggestion);
    }

    let _ = writeln!(out, "\nOptimized prompt:\n   {}", report.optimized_text);
    out.push_str(&format_comparison_text(&report.comparison));

    out
}

pub fn format_profiles_text() -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<16} {:<24} {:<6} {:>6} {:>10} {:>10} {:>8}",
        "KEY", "NAME", "REGION", "PUE", "WUE SITE", "WUE SRC", "CIF"
    );
    for name in ProfileName::ALL {
        let p = name.profile();
        let marker = if name == ProfileName::default() { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:<16} {:<24} {:<6} {:>6.2} {:>10.3} {:>10.3} {:>8.4}{}",
            name.key(),
            p.name(),
            p.region(),
            p.power_usage_effectiveness(),
            p.water_usage_effectiveness_on_site(),
            p.water_usage_effectiveness_off_site(),
            p.carbon_intensity_factor(),
            marker
        );
    }
    out.push_str("\n* default profile (PUE ratio, WUE L/kWh, CIF kgCO2e/kWh)\n");

    out
}

/// One scored prompt file from `check`
pub struct CheckedPrompt {
    pub file: String,
    pub result: ImpactResult,
}

pub fn format_check_text(checked: &[CheckedPrompt], eco_threshold: u8, path: &Path) -> String {
    let mut out = String::new();
    let above: Vec<&CheckedPrompt> = checked
        .iter()
        .filter(|c| c.result.metadata.eco_score.0 > eco_threshold)
        .collect();

    let _ = writeln!(
        out,
        "Checking prompts in: {} (eco threshold: {})\n",
        path.display(),
        eco_threshold
    );
    for entry in &above {
        let _ = writeln!(
            out,
            "  ABOVE THRESHOLD: {} (eco: {}, {} tokens, {:.4} Wh)",
            entry.file,
            entry.result.metadata.eco_score,
            entry.result.tokens.total,
            entry.result.energy.watt_hours
        );
    }

    out.push_str("\n--- Summary ---\n");
    let _ = writeln!(out, "Prompts analyzed:      {}", checked.len());
    let _ = writeln!(out, "Above threshold:       {}", above.len());

    if !checked.is_empty() {
        let count = checked.len() as f64;
        let avg_eco = checked
            .iter()
            .map(|c| f64::from(c.result.metadata.eco_score.0))
            .sum::<f64>()
            / count;
        let total_energy: f64 = checked.iter().map(|c| c.result.energy.watt_hours).sum();
        let total_water: f64 = checked.iter().map(|c| c.result.water.milliliters).sum();
        let total_carbon: f64 = checked.iter().map(|c| c.result.carbon.grams).sum();

        let _ = writeln!(out, "Avg eco score:         {:.1}/100", avg_eco);
        let _ = writeln!(out, "Total est. energy:     {:.4} Wh", total_energy);
        let _ = writeln!(out, "Total est. water:      {:.2} mL", total_water);
        let _ = writeln!(out, "Total est. carbon:     {:.4} g CO2e", total_carbon);
    }

    if above.is_empty() {
        let _ = writeln!(out, "\nResult: PASS (all prompts within eco threshold {})", eco_threshold);
    } else {
        let _ = writeln!(
            out,
            "\nResult: FAIL ({} prompts above eco threshold {})",
            above.len(),
            eco_threshold
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoprompt_engine::{calculate_environmental_impact, compare_prompts, ImpactOptions};

    const PROMPT: &str = "Explain quantum computing in simple terms";

    #[test]
    fn test_impact_text_respects_units() {
        let result = calculate_environmental_impact(PROMPT, &ImpactOptions::default());

        let metric = format_impact_text(&result, Units::Metric);
        assert!(metric.contains("28 total"));
        assert!(metric.contains("(Excellent)"));
        assert!(metric.contains(" km"));

        let imperial = format_impact_text(&result, Units::Imperial);
        assert!(imperial.contains(" mi"));
        assert!(!imperial.contains(" km"));
    }

    #[test]
    fn test_comparison_text_marks_undefined_percentage() {
        let comparison = compare_prompts("", PROMPT, &ImpactOptions::default());
        let text = format_comparison_text(&comparison);
        assert!(text.contains("Tokens:   -28 (n/a)"));
    }

    #[test]
    fn test_profiles_text_lists_registry() {
        let text = format_profiles_text();
        for name in ProfileName::ALL {
            assert!(text.contains(name.key()));
        }
        assert!(text.contains("AZURE_OPENAI"));
    }

    #[test]
    fn test_check_text_pass_and_fail() {
        let small = CheckedPrompt {
            file: "small.txt".to_string(),
            result: calculate_environmental_impact(PROMPT, &ImpactOptions::default()),
        };
        let large = CheckedPrompt {
            file: "large.txt".to_string(),
            result: calculate_environmental_impact(
                &"word ".repeat(2000),
                &ImpactOptions::default(),
            ),
        };

        let pass = format_check_text(&[small], 60, Path::new("prompts"));
        assert!(pass.contains("Result: PASS"));

        let small = CheckedPrompt {
            file: "small.txt".to_string(),
            result: calculate_environmental_impact(PROMPT, &ImpactOptions::default()),
        };
        let fail = format_check_text(&[small, large], 60, Path::new("prompts"));
        assert!(fail.contains("ABOVE THRESHOLD: large.txt"));
        assert!(fail.contains("Result: FAIL (1 prompts"));
    }
}

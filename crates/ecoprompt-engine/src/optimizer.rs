// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Prompt quality heuristics and rewriting
//!
//! A prompt that states its format and constraints up front tends to get a
//! usable answer in one round trip, which is the cheapest query of all.

use crate::error::{EngineError, Result};
use crate::impact::{compare_prompts, ImpactOptions};
use ecoprompt_metrics::ComparisonResult;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static CONTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"context|background|specifically|particular").expect("valid regex"));
static FORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"format|structure|style|markdown|json|list").expect("valid regex"));
static CONSTRAINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"limit|maximum|minimum|between|under|over|brief|concise").expect("valid regex")
});
static PLEASANTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(please|kindly|could you|would you|i would like|can you)\s*").expect("valid regex")
});
static REDUNDANCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(very very|really really|please please)").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const FORMAT_HINT: &str = " Format as a clear, structured response.";
const CONSTRAINT_HINT: &str = " Be concise (max 200 words).";

/// Quality signals detected in a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub suggestions: Vec<String>,
    pub word_count: usize,
    pub has_context: bool,
    pub has_format: bool,
    pub has_constraints: bool,
    pub has_pleasantries: bool,
    pub has_redundancy: bool,
}

/// Heuristic review of a prompt's wording
pub fn analyze_prompt(prompt: &str) -> PromptAnalysis {
    let lower = prompt.to_lowercase();
    let word_count = prompt.split_whitespace().count();

    let has_context = CONTEXT_RE.is_match(&lower);
    let has_format = FORMAT_RE.is_match(&lower);
    let has_constraints = CONSTRAINT_RE.is_match(&lower);
    let has_pleasantries = PLEASANTRY_RE.is_match(&lower);
    let has_redundancy = REDUNDANCY_RE.is_match(&lower);

    let mut suggestions = Vec::new();

    if !has_context && word_count < 20 {
        suggestions.push("Add more context about what you want to achieve".to_string());
    }
    if !has_format {
        suggestions.push("Specify the desired output format (e.g., list, table, JSON)".to_string());
    }
    if !has_constraints {
        suggestions.push("Include constraints (e.g., length limits, key requirements)".to_string());
    }
    if has_pleasantries {
        suggestions.push("Remove pleasantries like \"please\", \"could you\" - be direct".to_string());
    }
    if has_redundancy {
        suggestions.push("Remove redundant words and phrases".to_string());
    }
    if word_count < 10 {
        suggestions.push("Provide more detail to get better results in one shot".to_string());
    }

    PromptAnalysis {
        suggestions,
        word_count,
        has_context,
        has_format,
        has_constraints,
        has_pleasantries,
        has_redundancy,
    }
}

/// Rewrite a prompt according to its analysis.
pub fn optimize_prompt(prompt: &str, analysis: &PromptAnalysis) -> String {
    let stripped = PLEASANTRY_RE.replace_all(prompt, "");
    let mut optimized = REDUNDANCY_RE
        .replace_all(&stripped, |caps: &regex::Captures| {
            caps[0].split(' ').next().unwrap_or_default().to_string()
        })
        .into_owned();

    if !analysis.has_format {
        optimized.push_str(FORMAT_HINT);
    }
    if !analysis.has_constraints {
        optimized.push_str(CONSTRAINT_HINT);
    }

    WHITESPACE_RE.replace_all(&optimized, " ").trim().to_string()
}

/// Analysis, rewrite and footprint comparison for one prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub analysis: PromptAnalysis,
    pub optimized_text: String,
    pub comparison: ComparisonResult,
}

/// Analyze `prompt`, rewrite it and compare the two footprints.
pub fn optimize(prompt: &str, options: &ImpactOptions) -> Result<OptimizationReport> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(EngineError::EmptyPrompt);
    }

    let analysis = analyze_prompt(prompt);
    let optimized_text = optimize_prompt(prompt, &analysis);
    debug!(
        "Optimized prompt: {} -> {} words, {} suggestions",
        analysis.word_count,
        optimized_text.split_whitespace().count(),
        analysis.suggestions.len()
    );

    let comparison = compare_prompts(prompt, &optimized_text, options);

    Ok(OptimizationReport {
        analysis,
        optimized_text,
        comparison,
    })
}

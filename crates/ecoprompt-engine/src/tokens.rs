// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Token estimation from raw prompt text

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Approximate token count using the ~4 chars per token heuristic.
const CHARS_PER_TOKEN: f64 = 4.0;

/// Estimate input tokens for a prompt.
///
/// Counts Unicode scalar values, not bytes or graphemes. Blank text is 0.
pub fn estimate_tokens(text: &str) -> u64 {
    if text.trim().is_empty() {
        return 0;
    }

    (text.chars().count() as f64 / CHARS_PER_TOKEN).ceil() as u64
}

/// Kind of answer expected, which drives the output/input token ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PromptType {
    #[default]
    General,
    Code,
    Creative,
    Brief,
    Analysis,
}

impl PromptType {
    pub const ALL: [PromptType; 5] = [
        PromptType::General,
        PromptType::Code,
        PromptType::Creative,
        PromptType::Brief,
        PromptType::Analysis,
    ];

    pub fn lookup(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "general" => Some(PromptType::General),
            "code" => Some(PromptType::Code),
            "creative" => Some(PromptType::Creative),
            "brief" => Some(PromptType::Brief),
            "analysis" => Some(PromptType::Analysis),
            _ => None,
        }
    }

    /// Resolve a prompt type name; unknown names mean `general`.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            PromptType::General => "general",
            PromptType::Code => "code",
            PromptType::Creative => "creative",
            PromptType::Brief => "brief",
            PromptType::Analysis => "analysis",
        }
    }

    /// Expected response length relative to the prompt
    pub fn output_ratio(&self) -> f64 {
        match self {
            PromptType::General => 1.5,
            PromptType::Code => 2.0,
            PromptType::Creative => 3.0,
            PromptType::Brief => 0.5,
            PromptType::Analysis => 2.5,
        }
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for PromptType {
    fn from(name: String) -> Self {
        Self::lookup(&name).unwrap_or_else(|| {
            warn!("Unknown prompt type '{}' in configuration, using general", name);
            PromptType::General
        })
    }
}

impl From<PromptType> for String {
    fn from(kind: PromptType) -> Self {
        kind.name().to_string()
    }
}

/// Estimate response tokens from the prompt size, rounded to nearest.
pub fn estimate_output_tokens(input_tokens: u64, prompt_type: PromptType) -> u64 {
    (input_tokens as f64 * prompt_type.output_ratio()).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens_basic() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
        assert_eq!(estimate_tokens(&"a".repeat(400)), 100);
    }

    #[test]
    fn test_whitespace_only_is_zero() {
        assert_eq!(estimate_tokens("   \n\t "), 0);
    }

    #[test]
    fn test_whitespace_counts_inside_text() {
        // " ab " is four characters once it has content
        assert_eq!(estimate_tokens(" ab "), 1);
        assert_eq!(estimate_tokens("Explain quantum computing in simple terms"), 11);
    }

    #[test]
    fn test_non_ascii_counts_characters() {
        // 5 characters, 15 bytes
        assert_eq!(estimate_tokens("日本語です"), 2);
    }

    #[test]
    fn test_output_ratios() {
        assert_eq!(estimate_output_tokens(11, PromptType::General), 17);
        assert_eq!(estimate_output_tokens(10, PromptType::Code), 20);
        assert_eq!(estimate_output_tokens(10, PromptType::Creative), 30);
        assert_eq!(estimate_output_tokens(3, PromptType::Brief), 2);
        assert_eq!(estimate_output_tokens(10, PromptType::Analysis), 25);
        assert_eq!(estimate_output_tokens(0, PromptType::Creative), 0);
    }

    #[test]
    fn test_unknown_prompt_type_is_general() {
        assert_eq!(PromptType::from_name("poetry"), PromptType::General);
        assert_eq!(PromptType::from_name("CODE"), PromptType::Code);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Severity classification for an extracted risk finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Ordinal rank used for display ordering (high sorts before low)
    pub fn rank(self) -> u8 {
        match self {
            RiskLevel::High => 0,
            RiskLevel::Medium => 1,
            RiskLevel::Low => 2,
        }
    }

    /// Parse a severity keyword, case-insensitive
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "high" => Some(RiskLevel::High),
            "medium" => Some(RiskLevel::Medium),
            "low" => Some(RiskLevel::Low),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        };
        f.write_str(s)
    }
}

/// A single classified finding extracted from assessment text
///
/// `content` is always non-empty and trimmed; sections whose body is
/// whitespace-only are dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RiskSection {
    pub level: RiskLevel,
    pub content: String,
}

/// Structured result of parsing a raw risk-assessment response
///
/// `summary` is `Some` only when there is non-empty free text that is not
/// attributable to any section: either prose preceding the first recognized
/// heading, or the entire input when no heading is recognized at all (in
/// which case `sections` is empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RiskReport {
    pub summary: Option<String>,
    /// Sections ordered by severity rank, ties in original appearance order
    pub sections: Vec<RiskSection>,
}

//! Quality checks for extracted risk reports
//!
//! Extraction is total, so nothing here is fatal. Warnings flag responses
//! where the model likely ignored the requested output convention; they are
//! logged for observability and never surfaced to clients as errors.

use crate::model::RiskReport;

/// Result of report validation
#[derive(Debug)]
pub struct ReportValidation {
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl ReportValidation {
    /// Create a new validation result with no issues
    pub fn clean() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate an extracted risk report
///
/// Checks:
/// 1. At least one classified section was recognized
/// 2. Section contents are substantial enough to be actionable
pub fn validate_risk_report(report: &RiskReport) -> ReportValidation {
    let mut result = ReportValidation::clean();

    if report.sections.is_empty() {
        result.add_warning(
            "Response contained no structured risk sections; returned as plain summary"
                .to_string(),
        );
    }

    for (i, section) in report.sections.iter().enumerate() {
        if section.content.len() < 10 {
            result.add_warning(format!(
                "Section {} ({} risk) has very short content: '{}'",
                i + 1,
                section.level,
                section.content
            ));
        }
    }

    result
}

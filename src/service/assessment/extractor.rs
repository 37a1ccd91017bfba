//! Risk-section extraction from raw assessment text
//!
//! The generative model is instructed to answer with `High Risk:` /
//! `Medium Risk:` / `Low Risk:` sections, but its output is free text and
//! may ignore the convention entirely. Extraction is total: any input,
//! including empty, yields a well-formed report.

use regex::Regex;

use crate::model::{RiskLevel, RiskReport, RiskSection};

/// Split raw assessment text into a summary and severity-classified sections
///
/// A heading is the case-insensitive word `High`, `Medium` or `Low`,
/// optional whitespace, the word `Risk`, and an optional colon, at the start
/// of a line. A section's content runs from the end of its heading to the
/// start of the next heading or end of input. Keywords appearing mid-line
/// ("there is low risk of delay") are not headings.
///
/// Sections with whitespace-only content are dropped. Text before the first
/// heading becomes the summary; when nothing at all is recognized, the whole
/// trimmed input does. Retained sections are sorted high before medium
/// before low, equal levels keeping their input order.
pub fn extract_risk_report(text: &str) -> RiskReport {
    let heading = Regex::new(r"(?im)^\s*(high|medium|low)\s*risk:?").unwrap();

    struct Heading {
        start: usize,
        body_start: usize,
        level: RiskLevel,
    }

    let mut headings: Vec<Heading> = Vec::new();
    for caps in heading.captures_iter(text) {
        if let (Some(whole), Some(word)) = (caps.get(0), caps.get(1))
            && let Some(level) = RiskLevel::from_keyword(word.as_str())
        {
            headings.push(Heading {
                start: whole.start(),
                body_start: whole.end(),
                level,
            });
        }
    }

    let mut summary = match headings.first() {
        Some(first) => text[..first.start].trim(),
        None => "",
    };

    let mut sections: Vec<RiskSection> = Vec::new();
    for (i, h) in headings.iter().enumerate() {
        let body_end = headings
            .get(i + 1)
            .map(|next| next.start)
            .unwrap_or(text.len());
        let content = text[h.body_start..body_end].trim();
        if !content.is_empty() {
            sections.push(RiskSection {
                level: h.level,
                content: content.to_string(),
            });
        }
    }

    // Nothing usable was recognized: the whole input is the summary
    if sections.is_empty() && summary.is_empty() {
        summary = text.trim();
    }

    sections.sort_by_key(|s| s.level.rank());

    RiskReport {
        summary: if summary.is_empty() {
            None
        } else {
            Some(summary.to_string())
        },
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(level: RiskLevel, content: &str) -> RiskSection {
        RiskSection {
            level,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        let report = extract_risk_report("");
        assert_eq!(report.summary, None);
        assert!(report.sections.is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        let report = extract_risk_report("  \n\t \n");
        assert_eq!(report.summary, None);
        assert!(report.sections.is_empty());
    }

    #[test]
    fn test_three_sections_in_severity_order() {
        let text = "High Risk: indemnification is broad.\n\n\
                    Medium Risk: payment terms are Net 60.\n\n\
                    Low Risk: confidentiality is standard.";
        let report = extract_risk_report(text);

        assert_eq!(report.summary, None);
        assert_eq!(
            report.sections,
            vec![
                section(RiskLevel::High, "indemnification is broad."),
                section(RiskLevel::Medium, "payment terms are Net 60."),
                section(RiskLevel::Low, "confidentiality is standard."),
            ]
        );
    }

    #[test]
    fn test_severity_sort_overrides_input_order() {
        let report = extract_risk_report("Low Risk: A.\nHigh Risk: B.");
        assert_eq!(
            report.sections,
            vec![
                section(RiskLevel::High, "B."),
                section(RiskLevel::Low, "A."),
            ]
        );
    }

    #[test]
    fn test_no_headings_whole_input_is_summary() {
        let report = extract_risk_report("This contract looks fine overall.");
        assert_eq!(
            report.summary.as_deref(),
            Some("This contract looks fine overall.")
        );
        assert!(report.sections.is_empty());
    }

    #[test]
    fn test_leading_prose_becomes_summary() {
        let report = extract_risk_report("Overview text here.\nHigh Risk: liability uncapped.");
        assert_eq!(report.summary.as_deref(), Some("Overview text here."));
        assert_eq!(
            report.sections,
            vec![section(RiskLevel::High, "liability uncapped.")]
        );
    }

    #[test]
    fn test_mid_line_keyword_is_not_a_heading() {
        let report = extract_risk_report("There is low risk of failure here.");
        assert_eq!(
            report.summary.as_deref(),
            Some("There is low risk of failure here.")
        );
        assert!(report.sections.is_empty());
    }

    #[test]
    fn test_case_and_colon_are_flexible() {
        let report = extract_risk_report("HIGH RISK\nuncapped liability\nlow risk: minor issue");
        assert_eq!(report.summary, None);
        assert_eq!(
            report.sections,
            vec![
                section(RiskLevel::High, "uncapped liability"),
                section(RiskLevel::Low, "minor issue"),
            ]
        );
    }

    #[test]
    fn test_missing_space_before_risk_keyword() {
        let report = extract_risk_report("MediumRisk: ambiguous renewal terms.");
        assert_eq!(
            report.sections,
            vec![section(RiskLevel::Medium, "ambiguous renewal terms.")]
        );
    }

    #[test]
    fn test_indented_headings() {
        let text = "    High Risk:\n    - broad indemnification\n    Low Risk:\n    - standard venue clause";
        let report = extract_risk_report(text);
        assert_eq!(report.summary, None);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].level, RiskLevel::High);
        assert_eq!(report.sections[0].content, "- broad indemnification");
        assert_eq!(report.sections[1].level, RiskLevel::Low);
        assert_eq!(report.sections[1].content, "- standard venue clause");
    }

    #[test]
    fn test_multiline_section_content_is_preserved() {
        let text = "High Risk:\n- clause one is unbounded.\n- clause two lacks a cap.\n\nLow Risk:\n- boilerplate is fine.";
        let report = extract_risk_report(text);
        assert_eq!(report.sections.len(), 2);
        assert_eq!(
            report.sections[0].content,
            "- clause one is unbounded.\n- clause two lacks a cap."
        );
    }

    #[test]
    fn test_empty_section_body_is_dropped() {
        let report = extract_risk_report("High Risk:\n\nLow Risk: something minor.");
        assert_eq!(report.summary, None);
        assert_eq!(
            report.sections,
            vec![section(RiskLevel::Low, "something minor.")]
        );
    }

    #[test]
    fn test_all_bodies_empty_without_summary_falls_back_to_full_text() {
        let text = "High Risk:\nMedium Risk:";
        let report = extract_risk_report(text);
        assert!(report.sections.is_empty());
        assert_eq!(report.summary.as_deref(), Some("High Risk:\nMedium Risk:"));
    }

    #[test]
    fn test_all_bodies_empty_with_leading_summary_keeps_summary_only() {
        let text = "Some overview.\nHigh Risk:";
        let report = extract_risk_report(text);
        assert!(report.sections.is_empty());
        assert_eq!(report.summary.as_deref(), Some("Some overview."));
    }

    #[test]
    fn test_duplicate_levels_kept_in_input_order() {
        let text = "High Risk: first finding.\nLow Risk: minor.\nHigh Risk: second finding.";
        let report = extract_risk_report(text);
        assert_eq!(
            report.sections,
            vec![
                section(RiskLevel::High, "first finding."),
                section(RiskLevel::High, "second finding."),
                section(RiskLevel::Low, "minor."),
            ]
        );
    }

    #[test]
    fn test_reparsing_sorted_output_is_stable() {
        let text = "Low Risk: A.\nMedium Risk: B.\nHigh Risk: C.";
        let first = extract_risk_report(text);

        let rendered = first
            .sections
            .iter()
            .map(|s| format!("{} Risk: {}", s.level, s.content))
            .collect::<Vec<_>>()
            .join("\n");
        let second = extract_risk_report(&rendered);

        assert_eq!(first.sections, second.sections);
    }

    #[test]
    fn test_typical_generated_assessment() {
        let text = r#"
    High Risk:
    - The indemnification clause (Section 8.2) is broad and could expose the company to significant liability. It should be revised to be mutual and capped.
    - Termination for convenience clause is missing for our side.

    Medium Risk:
    - The payment terms (Section 4.1) are Net 60, which could impact cash flow. Suggest negotiating for Net 30.

    Low Risk:
    - Confidentiality provisions (Section 6) are standard and appear adequate.
    - Governing law and jurisdiction are appropriate.
  "#;
        let report = extract_risk_report(text);

        assert_eq!(report.summary, None);
        assert_eq!(report.sections.len(), 3);
        assert_eq!(report.sections[0].level, RiskLevel::High);
        assert!(
            report.sections[0]
                .content
                .starts_with("- The indemnification clause")
        );
        assert!(
            report.sections[0]
                .content
                .ends_with("Termination for convenience clause is missing for our side.")
        );
        assert_eq!(report.sections[1].level, RiskLevel::Medium);
        assert_eq!(report.sections[2].level, RiskLevel::Low);
    }
}

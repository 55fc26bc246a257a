//! The quality report shown after an "analysis".
//!
//! Every value here is a literal. The uploaded file never influences it;
//! only its name is echoed back by the upload panel.

use crate::types::CheckStatus;

/// Result of one automated batch check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchCheck {
    pub name: &'static str,
    pub status: CheckStatus,
    pub score: u8,
}

/// Missing values found in one field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MissingField {
    pub field: &'static str,
    pub missing: u32,
    pub percentage: f32,
}

impl MissingField {
    /// Fields above this share of missing values are flagged.
    pub const ALERT_THRESHOLD: f32 = 10.0;

    pub fn is_critical(&self) -> bool {
        self.percentage > Self::ALERT_THRESHOLD
    }

    /// Bar tint for the missingness row.
    pub fn bar_class(&self) -> &'static str {
        if self.is_critical() {
            "progress progress-destructive"
        } else {
            "progress progress-warning"
        }
    }

    /// "891 missing (10.4%)"
    pub fn summary(&self) -> String {
        format!("{} missing ({}%)", self.missing, self.percentage)
    }
}

/// Representation of one demographic category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemographicCoverage {
    pub category: &'static str,
    pub coverage: u8,
}

impl DemographicCoverage {
    /// Text colour: good above 85, fair above 70, poor otherwise.
    pub fn tone_class(&self) -> &'static str {
        match self.coverage {
            c if c > 85 => "text-success",
            c if c > 70 => "text-warning",
            _ => "text-destructive",
        }
    }
}

/// Fixed quality report displayed by the dashboard and upload summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MockQualityReport {
    pub schema_compliance: u8,
    pub missing_data: u8,
    pub demographic_coverage: u8,
    pub total_records: u32,
    pub batch_results: &'static [BatchCheck],
    pub missingness: &'static [MissingField],
    pub demographics: &'static [DemographicCoverage],
}

pub const MOCK_REPORT: MockQualityReport = MockQualityReport {
    schema_compliance: 94,
    missing_data: 12,
    demographic_coverage: 87,
    total_records: 8542,
    batch_results: &[
        BatchCheck { name: "Required Fields", status: CheckStatus::Pass, score: 98 },
        BatchCheck { name: "Data Types", status: CheckStatus::Pass, score: 95 },
        BatchCheck { name: "Value Ranges", status: CheckStatus::Warning, score: 89 },
        BatchCheck { name: "Consistency", status: CheckStatus::Pass, score: 92 },
    ],
    missingness: &[
        MissingField { field: "patient_age", missing: 156, percentage: 1.8 },
        MissingField { field: "tumor_stage", missing: 342, percentage: 4.0 },
        MissingField { field: "treatment_response", missing: 891, percentage: 10.4 },
        MissingField { field: "biomarker_status", missing: 1245, percentage: 14.6 },
    ],
    demographics: &[
        DemographicCoverage { category: "Age Groups", coverage: 92 },
        DemographicCoverage { category: "Gender", coverage: 98 },
        DemographicCoverage { category: "Ethnicity", coverage: 76 },
        DemographicCoverage { category: "Geographic", coverage: 84 },
    ],
};

/// Closing remark under the demographics table.
pub const COVERAGE_SUMMARY: &str = "Overall demographic representation is good, with room for \
     improvement in ethnicity coverage. Consider targeted recruitment for underrepresented groups.";

impl MockQualityReport {
    /// Fields with more than 10% missing values.
    pub fn critical_missing_fields(&self) -> usize {
        self.missingness.iter().filter(|m| m.is_critical()).count()
    }

    /// Headline cards: (label, value, css tone).
    pub fn headline(&self) -> [(&'static str, String, &'static str); 4] {
        [
            ("Schema Compliance", percent(self.schema_compliance), "text-success"),
            ("Missing Data", percent(self.missing_data), "text-warning"),
            ("Demographic Coverage", percent(self.demographic_coverage), "text-primary"),
            ("Total Records", format_count(self.total_records), "text-medical-blue"),
        ]
    }
}

pub fn percent(value: u8) -> String {
    format!("{}%", value)
}

/// Format an integer with comma thousands separators ("8,542").
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_compliance_is_displayed_as_94_percent() {
        let (label, value, _) = &MOCK_REPORT.headline()[0];
        assert_eq!(*label, "Schema Compliance");
        assert_eq!(value, "94%");
    }

    #[test]
    fn test_headline_values() {
        let values: Vec<String> = MOCK_REPORT.headline().into_iter().map(|h| h.1).collect();
        assert_eq!(values, ["94%", "12%", "87%", "8,542"]);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(8542), "8,542");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_two_fields_exceed_missing_threshold() {
        assert_eq!(MOCK_REPORT.critical_missing_fields(), 2);
        let biomarker = MOCK_REPORT.missingness[3];
        assert!(biomarker.is_critical());
        assert_eq!(biomarker.summary(), "1245 missing (14.6%)");
        assert_eq!(MOCK_REPORT.missingness[1].summary(), "342 missing (4%)");
    }

    #[test]
    fn test_demographic_tones() {
        let tones: Vec<&str> = MOCK_REPORT.demographics.iter().map(|d| d.tone_class()).collect();
        assert_eq!(tones, ["text-success", "text-success", "text-warning", "text-warning"]);
        assert_eq!(
            DemographicCoverage { category: "x", coverage: 70 }.tone_class(),
            "text-destructive"
        );
    }

    #[test]
    fn test_only_value_ranges_warns() {
        let warnings: Vec<&str> = MOCK_REPORT
            .batch_results
            .iter()
            .filter(|b| b.status != CheckStatus::Pass)
            .map(|b| b.name)
            .collect();
        assert_eq!(warnings, ["Value Ranges"]);
    }
}

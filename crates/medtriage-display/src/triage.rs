// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triage level to colour and caption mapping.

use medtriage_core::TriageLevel;
use medtriage_core::types::{AnalysisResponse, ChatSession, DiseaseRisk, ReportAnalysisResponse};

use crate::format::format_probability;

/// Colour and captions for one triage level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriagePresentation {
    /// `#RRGGBB` hex colour.
    pub color: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl TriagePresentation {
    pub fn for_level(level: TriageLevel) -> Self {
        match level {
            TriageLevel::High => Self {
                color: "#F44336",
                label: "HIGH",
                description: "High Risk - Seek immediate medical attention",
            },
            TriageLevel::Medium => Self {
                color: "#FF9800",
                label: "MEDIUM",
                description: "Medium Risk - Consult a doctor soon",
            },
            TriageLevel::Low => Self {
                color: "#4CAF50",
                label: "LOW",
                description: "Low Risk - Monitor your symptoms",
            },
            TriageLevel::Unknown => Self {
                color: "#9E9E9E",
                label: "UNKNOWN",
                description: "Not Determined",
            },
        }
    }

    /// Colour as an `(r, g, b)` triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0x9E)
        };
        (channel(0), channel(2), channel(4))
    }
}

/// Colour for a raw triage code. Total: unknown codes and null map to gray.
pub fn triage_color(code: Option<i64>) -> &'static str {
    TriagePresentation::for_level(TriageLevel::from_code(code)).color
}

/// Caption for a raw triage code.
pub fn triage_description(code: Option<i64>) -> &'static str {
    TriagePresentation::for_level(TriageLevel::from_code(code)).description
}

pub fn triage_label(code: Option<i64>) -> &'static str {
    TriagePresentation::for_level(TriageLevel::from_code(code)).label
}

/// Everything needed to render an analysis result.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageBanner {
    pub level: TriageLevel,
    pub presentation: TriagePresentation,
    pub disease: Option<String>,
    pub severity: Option<f64>,
    /// `(name, formatted probability)` pairs in backend order.
    pub diseases: Vec<(String, String)>,
    pub summary: Option<String>,
}

impl TriageBanner {
    pub fn new(code: Option<i64>) -> Self {
        let level = TriageLevel::from_code(code);
        Self {
            level,
            presentation: TriagePresentation::for_level(level),
            disease: None,
            severity: None,
            diseases: Vec::new(),
            summary: None,
        }
    }

    pub fn with_disease(mut self, disease: Option<&str>) -> Self {
        self.disease = disease.map(str::to_owned);
        self
    }

    pub fn with_severity(mut self, severity: Option<f64>) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_ranking(mut self, diseases: &[DiseaseRisk]) -> Self {
        self.diseases = diseases
            .iter()
            .map(|d| (d.name.clone(), format_probability(d.probability_value())))
            .collect();
        self
    }

    pub fn with_summary(mut self, summary: Option<&str>) -> Self {
        self.summary = summary.map(str::to_owned);
        self
    }
}

impl From<&AnalysisResponse> for TriageBanner {
    fn from(r: &AnalysisResponse) -> Self {
        TriageBanner::new(r.triage_level)
            .with_disease(r.disease.as_deref())
            .with_severity(r.severity_score)
            .with_ranking(&r.diseases)
            .with_summary(r.ai_analysis.as_deref())
    }
}

impl From<&ReportAnalysisResponse> for TriageBanner {
    fn from(r: &ReportAnalysisResponse) -> Self {
        TriageBanner::new(r.triage_level)
            .with_severity(r.severity_score)
            .with_ranking(&r.diseases)
            .with_summary(r.analysis.as_deref())
    }
}

impl From<&ChatSession> for TriageBanner {
    fn from(s: &ChatSession) -> Self {
        TriageBanner::new(s.triage_level)
            .with_disease(s.disease.as_deref())
            .with_severity(s.severity_score)
            .with_summary(s.ai_analysis.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medtriage_core::Probability;
    use proptest::prelude::*;

    #[test]
    fn documented_levels() {
        assert_eq!(triage_color(Some(1)), "#F44336");
        assert_eq!(triage_color(Some(2)), "#FF9800");
        assert_eq!(triage_color(Some(3)), "#4CAF50");
        assert_eq!(triage_label(Some(1)), "HIGH");
        assert_eq!(triage_label(Some(2)), "MEDIUM");
        assert_eq!(triage_label(Some(3)), "LOW");
    }

    #[test]
    fn null_is_not_determined() {
        assert_eq!(triage_color(None), "#9E9E9E");
        assert_eq!(triage_description(None), "Not Determined");
        assert_eq!(triage_label(None), "UNKNOWN");
    }

    #[test]
    fn rgb_parses_hex() {
        assert_eq!(TriagePresentation::for_level(TriageLevel::High).rgb(), (0xF4, 0x43, 0x36));
        assert_eq!(
            TriagePresentation::for_level(TriageLevel::Unknown).rgb(),
            (0x9E, 0x9E, 0x9E)
        );
    }

    #[test]
    fn banner_from_analysis() {
        let response = AnalysisResponse {
            disease: Some("Influenza".into()),
            triage_level: Some(2),
            severity_score: Some(0.6),
            diseases: vec![
                DiseaseRisk {
                    name: "Influenza".into(),
                    probability: Some(Probability::new(0.725).unwrap()),
                },
                DiseaseRisk {
                    name: "Cold".into(),
                    probability: None,
                },
            ],
            ..Default::default()
        };
        let banner = TriageBanner::from(&response);
        assert_eq!(banner.level, TriageLevel::Medium);
        assert_eq!(banner.presentation.label, "MEDIUM");
        assert_eq!(banner.disease.as_deref(), Some("Influenza"));
        assert_eq!(
            banner.diseases,
            vec![
                ("Influenza".to_string(), "72%".to_string()),
                ("Cold".to_string(), "N/A".to_string())
            ]
        );
    }

    proptest! {
        #[test]
        fn any_other_code_is_gray(code in any::<i64>().prop_filter("not 1..=3", |c| !(1..=3).contains(c))) {
            prop_assert_eq!(triage_color(Some(code)), "#9E9E9E");
            prop_assert_eq!(triage_description(Some(code)), "Not Determined");
        }
    }
}

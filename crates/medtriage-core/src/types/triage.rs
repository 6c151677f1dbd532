// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triage classification and disease risk values produced by the backend.

use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;
use tracing::warn;

/// Urgency classification assigned by the backend. Level 1 is the most urgent.
///
/// Built totally from whatever integer (or null) the backend sent: anything
/// outside 1..=3 becomes [`TriageLevel::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TriageLevel {
    High,
    Medium,
    Low,
    Unknown,
}

impl TriageLevel {
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => TriageLevel::High,
            Some(2) => TriageLevel::Medium,
            Some(3) => TriageLevel::Low,
            _ => TriageLevel::Unknown,
        }
    }

    /// The wire code, if this level has one.
    pub fn code(self) -> Option<i64> {
        match self {
            TriageLevel::High => Some(1),
            TriageLevel::Medium => Some(2),
            TriageLevel::Low => Some(3),
            TriageLevel::Unknown => None,
        }
    }
}

impl From<Option<i64>> for TriageLevel {
    fn from(code: Option<i64>) -> Self {
        TriageLevel::from_code(code)
    }
}

/// A probability in `[0, 1]`.
///
/// Rejected at decode time when NaN, negative, or above one. Inside a
/// [`DiseaseRisk`] such a value is dropped instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    pub fn new(value: f64) -> Result<Self, String> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(format!("probability must be within [0, 1], got {value}"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Probability::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

/// A candidate disease with its (possibly unknown) probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRisk {
    #[serde(alias = "disease")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_probability")]
    pub probability: Option<Probability>,
}

/// An out-of-range probability becomes `None` so one bad entry does not
/// fail the whole analysis.
fn lenient_probability<'de, D>(deserializer: D) -> Result<Option<Probability>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match Probability::new(value) {
        Ok(p) => Some(p),
        Err(reason) => {
            warn!(%reason, "dropping disease probability");
            None
        }
    }))
}

impl DiseaseRisk {
    pub fn probability_value(&self) -> Option<f64> {
        self.probability.map(Probability::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_codes_map_to_levels() {
        assert_eq!(TriageLevel::from_code(Some(1)), TriageLevel::High);
        assert_eq!(TriageLevel::from_code(Some(2)), TriageLevel::Medium);
        assert_eq!(TriageLevel::from_code(Some(3)), TriageLevel::Low);
    }

    #[test]
    fn null_and_out_of_range_are_unknown() {
        assert_eq!(TriageLevel::from_code(None), TriageLevel::Unknown);
        assert_eq!(TriageLevel::from_code(Some(0)), TriageLevel::Unknown);
        assert_eq!(TriageLevel::from_code(Some(4)), TriageLevel::Unknown);
        assert_eq!(TriageLevel::from_code(Some(-1)), TriageLevel::Unknown);
        assert_eq!(TriageLevel::Unknown.code(), None);
    }

    #[test]
    fn disease_risk_accepts_missing_probability() {
        let risk: DiseaseRisk = serde_json::from_str(r#"{"name": "Influenza"}"#).unwrap();
        assert_eq!(risk.name, "Influenza");
        assert!(risk.probability.is_none());

        let risk: DiseaseRisk =
            serde_json::from_str(r#"{"disease": "Migraine", "probability": null}"#).unwrap();
        assert_eq!(risk.name, "Migraine");
        assert!(risk.probability_value().is_none());
    }

    #[test]
    fn disease_risk_drops_out_of_range_probability() {
        let risk: DiseaseRisk =
            serde_json::from_str(r#"{"name": "X", "probability": -0.1}"#).unwrap();
        assert_eq!(risk.name, "X");
        assert!(risk.probability.is_none());

        let risk: DiseaseRisk =
            serde_json::from_str(r#"{"name": "Flu", "probability": 1.0000001}"#).unwrap();
        assert!(risk.probability.is_none());
    }

    #[test]
    fn mixed_ranking_keeps_valid_entries() {
        let ranking: Vec<DiseaseRisk> = serde_json::from_str(
            r#"[{"name": "Cold", "probability": 0.9}, {"name": "Flu", "probability": 1.0000001}]"#,
        )
        .unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].probability_value(), Some(0.9));
        assert!(ranking[1].probability.is_none());
    }

    #[test]
    fn standalone_probability_still_rejects_out_of_range() {
        let err = serde_json::from_str::<Probability>("1.5").unwrap_err();
        assert!(err.to_string().contains("probability"), "got: {err}");
        assert!(Probability::new(f64::NAN).is_err());
    }

    #[test]
    fn probability_serializes_as_plain_number() {
        let p = Probability::new(0.25).unwrap();
        assert_eq!(serde_json::to_value(p).unwrap(), serde_json::json!(0.25));
    }

    proptest! {
        #[test]
        fn code_round_trip_is_identity_for_known_levels(code in 1i64..=3) {
            prop_assert_eq!(TriageLevel::from_code(Some(code)).code(), Some(code));
        }

        #[test]
        fn unit_interval_is_accepted(v in 0.0f64..=1.0) {
            prop_assert!(Probability::new(v).is_ok());
        }
    }
}

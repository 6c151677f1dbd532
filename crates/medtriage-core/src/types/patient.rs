// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Patient account, health profile, and medical report payloads.

use serde::{Deserialize, Serialize};

use super::triage::{DiseaseRisk, TriageLevel};

/// New patient registration. An OTP is mailed to `email` on success.
#[derive(Debug, Clone, Serialize)]
pub struct PatientRegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Patient identity as returned by login and account-info.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PatientAccount {
    pub patient_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientLoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub account: PatientAccount,
}

/// Initial health profile. Exactly one per patient.
#[derive(Debug, Clone, Serialize)]
pub struct HealthProfileRequest {
    pub patient_id: String,
    pub age: u32,
    pub gender: String,
    /// Height in centimetres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub blood_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_conditions: Option<String>,
}

/// Partial health profile update. Unset fields are not sent and stay
/// unchanged server-side. A new profile picture travels as a separate file part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthProfileUpdate {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub blood_group: Option<String>,
    pub existing_conditions: Option<String>,
}

impl HealthProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == HealthProfileUpdate::default()
    }
}

/// Stored health profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub existing_conditions: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// An uploaded medical document and, once analysed, its findings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MedicalReport {
    pub report_id: i64,
    pub patient_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub file_url: String,
    #[serde(default)]
    pub analysis: Option<String>,
    pub uploaded_at: String,
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
    #[serde(default)]
    pub triage_level: Option<i64>,
    #[serde(default)]
    pub severity_score: Option<f64>,
}

impl MedicalReport {
    /// Whether the backend has finished analysing this report.
    pub fn is_analyzed(&self) -> bool {
        self.analysis.is_some() || self.triage_level.is_some()
    }

    pub fn triage(&self) -> TriageLevel {
        TriageLevel::from_code(self.triage_level)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportList {
    #[serde(default)]
    pub reports: Vec<MedicalReport>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadReportResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub report_id: Option<i64>,
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Findings for a single report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportAnalysisResponse {
    #[serde(default)]
    pub report_id: Option<i64>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub triage_level: Option<i64>,
    #[serde(default)]
    pub severity_score: Option<f64>,
    #[serde(default)]
    pub diseases: Vec<DiseaseRisk>,
}

impl ReportAnalysisResponse {
    pub fn triage(&self) -> TriageLevel {
        TriageLevel::from_code(self.triage_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_flattens_account() {
        let json = r#"{
            "message": "Login successful",
            "patient_id": "P1001",
            "full_name": "Asha Rao",
            "email": "asha@gmail.com",
            "phone": "9876543210"
        }"#;
        let resp: PatientLoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Login successful"));
        assert_eq!(resp.account.patient_id, "P1001");
        assert_eq!(resp.account.full_name, "Asha Rao");
    }

    #[test]
    fn health_profile_request_omits_absent_conditions() {
        let req = HealthProfileRequest {
            patient_id: "P1".into(),
            age: 34,
            gender: "Female".into(),
            height: 162.5,
            weight: 58.0,
            blood_group: "O+".into(),
            existing_conditions: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["age"], 34);
        assert!(json.get("existing_conditions").is_none());
    }

    #[test]
    fn report_before_analysis_has_no_findings() {
        let json = r#"{
            "report_id": 12,
            "patient_id": "P1",
            "file_url": "/media/reports/cbc.pdf",
            "uploaded_at": "2024-03-01T08:15:00Z"
        }"#;
        let report: MedicalReport = serde_json::from_str(json).unwrap();
        assert!(!report.is_analyzed());
        assert_eq!(report.triage(), TriageLevel::Unknown);
        assert!(report.session_id.is_none());
    }

    #[test]
    fn report_analysis_reads_diseases() {
        let json = r#"{
            "report_id": 12,
            "analysis": "Mild anaemia",
            "triage_level": 3,
            "severity_score": 2.5,
            "diseases": [{"name": "Iron deficiency", "probability": 0.62}]
        }"#;
        let resp: ReportAnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.triage(), TriageLevel::Low);
        assert_eq!(resp.diseases.len(), 1);
        assert!(resp.symptoms.is_empty());
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(HealthProfileUpdate::default().is_empty());
        let update = HealthProfileUpdate {
            weight: Some(60.0),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}

// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Doctor account, profile, and patient-review payloads.

use serde::{Deserialize, Serialize};

use super::ai::{ChatSession, QuestionAnswer};
use super::patient::{HealthProfile, MedicalReport, PatientAccount};
use super::triage::DiseaseRisk;

#[derive(Debug, Clone, Serialize)]
pub struct DoctorRegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialization: String,
}

/// Doctor identity as returned by login and account-info.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DoctorAccount {
    pub doc_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorLoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub account: DoctorAccount,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorProfileRequest {
    pub doc_id: String,
    pub specialization: String,
    pub age: u32,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
}

/// Partial doctor profile update; see [`super::patient::HealthProfileUpdate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorProfileUpdate {
    pub specialization: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub experience_years: Option<u32>,
    pub hospital: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DoctorProfile {
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub hospital: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Everything a doctor sees when opening a patient.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientOverview {
    pub patient: PatientAccount,
    #[serde(default)]
    pub health_profile: Option<HealthProfile>,
    #[serde(default)]
    pub sessions: Vec<ChatSession>,
    #[serde(default)]
    pub reports: Vec<MedicalReport>,
}

/// A single session with the questions asked and the full disease ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionDetail {
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(flatten)]
    pub session: ChatSession,
    #[serde(default)]
    pub answers: Vec<QuestionAnswer>,
    #[serde(default)]
    pub diseases: Vec<DiseaseRisk>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveViewedPatientRequest {
    pub doc_id: String,
    pub patient_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ViewedPatient {
    pub patient_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub viewed_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewedPatientList {
    #[serde(default)]
    pub patients: Vec<ViewedPatient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_overview_with_minimal_body() {
        let json = r#"{"patient": {"patient_id": "P1", "full_name": "Ravi"}}"#;
        let overview: PatientOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.patient.patient_id, "P1");
        assert!(overview.health_profile.is_none());
        assert!(overview.sessions.is_empty());
    }

    #[test]
    fn session_detail_flattens_session() {
        let json = r#"{
            "patient_id": "P1",
            "session_id": "S4",
            "symptoms": ["chest pain"],
            "triage_level": 1,
            "severity_score": 8.9,
            "timestamp": "2024-06-10T22:40:00Z",
            "answers": [{"question": "Duration?", "answer": "2 hours"}],
            "diseases": [{"name": "Angina", "probability": 0.4}]
        }"#;
        let detail: SessionDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.session.session_id, "S4");
        assert_eq!(detail.answers[0].answer, "2 hours");
        assert_eq!(detail.diseases[0].name, "Angina");
    }

    #[test]
    fn doctor_login_response_reads_specialization() {
        let json = r#"{"doc_id": "D3", "full_name": "Dr. Meera", "specialization": "Cardiology"}"#;
        let resp: DoctorLoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.account.specialization.as_deref(), Some("Cardiology"));
        assert!(resp.message.is_none());
    }
}

// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Doctor registration, profile, and patient review.

use medtriage_core::TriageError;
use medtriage_core::types::{
    AccountKind, AccountRef, DoctorAccount, DoctorLoginResponse, DoctorProfile,
    DoctorProfileRequest, DoctorProfileUpdate, DoctorRegisterRequest, LoginRequest,
    MessageResponse, PatientOverview, ProfileUpdateResponse, RegisterResponse,
    SaveViewedPatientRequest, SessionDetail, ViewedPatientList,
};
use tracing::info;

use crate::account::AccountApi;
use crate::client::{RequestBody, TriageClient};
use crate::endpoint::Endpoint;
use crate::multipart::{FilePart, FormFields, build_form};

/// Doctor-side operations.
#[derive(Debug, Clone, Copy)]
pub struct DoctorApi<'a> {
    client: &'a TriageClient,
}

impl<'a> DoctorApi<'a> {
    pub(crate) fn new(client: &'a TriageClient) -> Self {
        Self { client }
    }

    pub fn account(&self) -> AccountApi<'a> {
        AccountApi::new(self.client, AccountKind::Doctor)
    }

    pub async fn register(
        &self,
        request: &DoctorRegisterRequest,
    ) -> Result<RegisterResponse, TriageError> {
        self.client
            .call(
                Endpoint::Register(AccountKind::Doctor),
                RequestBody::json(request)?,
            )
            .await
    }

    pub async fn login(
        &self,
        doc_id: &str,
        password: &str,
    ) -> Result<DoctorLoginResponse, TriageError> {
        let request = LoginRequest {
            account: AccountRef::Doctor(doc_id.to_string()),
            password: password.to_string(),
        };
        let response: DoctorLoginResponse = self
            .client
            .call(
                Endpoint::Login(AccountKind::Doctor),
                RequestBody::json(&request)?,
            )
            .await?;
        info!(doc_id = %response.account.doc_id, "doctor logged in");
        Ok(response)
    }

    pub async fn account_info(&self, doc_id: &str) -> Result<DoctorAccount, TriageError> {
        self.client
            .call(
                Endpoint::AccountInfo(AccountRef::Doctor(doc_id.to_string())),
                RequestBody::Empty,
            )
            .await
    }

    pub async fn create_profile(
        &self,
        request: &DoctorProfileRequest,
    ) -> Result<MessageResponse, TriageError> {
        self.client
            .call(Endpoint::CreateDoctorProfile, RequestBody::json(request)?)
            .await
    }

    pub async fn profile(&self, doc_id: &str) -> Result<DoctorProfile, TriageError> {
        self.client
            .call(
                Endpoint::GetDoctorProfile {
                    doc_id: doc_id.to_string(),
                },
                RequestBody::Empty,
            )
            .await
    }

    /// Partially updates the profile; unset fields and a missing picture are
    /// left untouched server-side.
    pub async fn update_profile(
        &self,
        doc_id: &str,
        update: &DoctorProfileUpdate,
        picture: Option<FilePart>,
    ) -> Result<ProfileUpdateResponse, TriageError> {
        if *update == DoctorProfileUpdate::default() && picture.is_none() {
            return Err(TriageError::InvalidInput("nothing to update".into()));
        }
        let form = build_form(
            update.form_fields(),
            picture.map(|p| ("profile_picture", p)),
        )?;
        self.client
            .call(
                Endpoint::UpdateDoctorProfile {
                    doc_id: doc_id.to_string(),
                },
                RequestBody::Multipart(form),
            )
            .await
    }

    pub async fn patient_overview(&self, patient_id: &str) -> Result<PatientOverview, TriageError> {
        self.client
            .call(
                Endpoint::PatientOverview {
                    patient_id: patient_id.to_string(),
                },
                RequestBody::Empty,
            )
            .await
    }

    pub async fn session_detail(&self, session_id: &str) -> Result<SessionDetail, TriageError> {
        self.client
            .call(
                Endpoint::SessionDetail {
                    session_id: session_id.to_string(),
                },
                RequestBody::Empty,
            )
            .await
    }

    /// Records that `doc_id` opened `patient_id`, for the recently-viewed list.
    pub async fn save_viewed_patient(
        &self,
        doc_id: &str,
        patient_id: &str,
    ) -> Result<MessageResponse, TriageError> {
        let request = SaveViewedPatientRequest {
            doc_id: doc_id.to_string(),
            patient_id: patient_id.to_string(),
        };
        self.client
            .call(Endpoint::SaveViewedPatient, RequestBody::json(&request)?)
            .await
    }

    pub async fn viewed_patients(&self, doc_id: &str) -> Result<ViewedPatientList, TriageError> {
        self.client
            .call(
                Endpoint::ListViewedPatients {
                    doc_id: doc_id.to_string(),
                },
                RequestBody::Empty,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medtriage_core::FailureKind;
    use medtriage_core::types::TriageLevel;
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TriageClient {
        TriageClient::with_base_url(&format!("{}/api/", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn login_sends_doc_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/doctor/login/"))
            .and(body_json(serde_json::json!({"doc_id": "D1", "password": "Abcdef1!"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "doc_id": "D1",
                "full_name": "Dr. Mehta",
                "specialization": "Cardiology"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.doctor().login("D1", "Abcdef1!").await.unwrap();
        assert_eq!(response.account.doc_id, "D1");
        assert_eq!(response.account.specialization.as_deref(), Some("Cardiology"));
    }

    #[tokio::test]
    async fn patient_overview_tolerates_missing_sections() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/doctor/patient-overview/P1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "patient": {"patient_id": "P1", "full_name": "Asha Rao"},
                "sessions": [{
                    "session_id": "S1",
                    "timestamp": "2024-01-15T10:30:00Z",
                    "triage_level": 1
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let overview = client.doctor().patient_overview("P1").await.unwrap();
        assert!(overview.health_profile.is_none());
        assert!(overview.reports.is_empty());
        assert_eq!(overview.sessions[0].triage(), TriageLevel::High);
    }

    #[tokio::test]
    async fn session_detail_flattens_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/doctor/session-detail/S1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "patient_id": "P1",
                "session_id": "S1",
                "timestamp": "2024-01-15T10:30:00Z",
                "symptoms": ["fever"],
                "answers": [{"question": "How long?", "answer": "3 days"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let detail = client.doctor().session_detail("S1").await.unwrap();
        assert_eq!(detail.session.session_id, "S1");
        assert_eq!(detail.answers.len(), 1);
    }

    #[tokio::test]
    async fn save_and_list_viewed_patients() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/doctor/save-viewed-patient/"))
            .and(body_json(serde_json::json!({"doc_id": "D1", "patient_id": "P1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "saved"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/doctor/viewed-patients/D1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "patients": [{"patient_id": "P1", "full_name": "Asha Rao"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.doctor().save_viewed_patient("D1", "P1").await.unwrap();
        let list = client.doctor().viewed_patients("D1").await.unwrap();
        assert_eq!(list.patients[0].patient_id, "P1");
    }

    #[tokio::test]
    async fn profile_update_sends_only_set_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/doctor/profile/update/D1/"))
            .and(body_string_contains("name=\"hospital\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "updated"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let update = DoctorProfileUpdate {
            hospital: Some("City General".into()),
            ..Default::default()
        };
        client.doctor().update_profile("D1", &update, None).await.unwrap();

        let requests = server.received_requests().await.unwrap_or_default();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(!body.contains("profile_picture"));
        assert!(!body.contains("name=\"specialization\""));
    }

    #[tokio::test]
    async fn missing_profile_is_application_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/doctor/profile/get/D404/"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"error": "Profile not found"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.doctor().profile("D404").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Application);
        assert_eq!(err.user_message(), "Profile not found");
    }
}

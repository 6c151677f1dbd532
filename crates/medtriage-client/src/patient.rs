// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Patient registration, login, health profile, and medical reports.

use medtriage_core::TriageError;
use medtriage_core::types::{
    AccountKind, AccountRef, HealthProfile, HealthProfileRequest, HealthProfileUpdate,
    LoginRequest, MedicalReport, MessageResponse, PatientAccount, PatientLoginResponse,
    PatientRegisterRequest, ProfileUpdateResponse, RegisterResponse, ReportAnalysisResponse,
    ReportList, UploadReportResponse,
};
use tracing::info;

use crate::account::AccountApi;
use crate::client::{RequestBody, TriageClient};
use crate::endpoint::Endpoint;
use crate::multipart::{FilePart, FormFields, build_form};

/// Patient-side operations.
#[derive(Debug, Clone, Copy)]
pub struct PatientApi<'a> {
    client: &'a TriageClient,
}

impl<'a> PatientApi<'a> {
    pub(crate) fn new(client: &'a TriageClient) -> Self {
        Self { client }
    }

    /// OTP, password reset, and deletion for patient accounts.
    pub fn account(&self) -> AccountApi<'a> {
        AccountApi::new(self.client, AccountKind::Patient)
    }

    /// Creates an unverified account. The backend mails an OTP to the address.
    pub async fn register(
        &self,
        request: &PatientRegisterRequest,
    ) -> Result<RegisterResponse, TriageError> {
        self.client
            .call(
                Endpoint::Register(AccountKind::Patient),
                RequestBody::json(request)?,
            )
            .await
    }

    pub async fn login(
        &self,
        patient_id: &str,
        password: &str,
    ) -> Result<PatientLoginResponse, TriageError> {
        let request = LoginRequest {
            account: AccountRef::Patient(patient_id.to_string()),
            password: password.to_string(),
        };
        let response: PatientLoginResponse = self
            .client
            .call(
                Endpoint::Login(AccountKind::Patient),
                RequestBody::json(&request)?,
            )
            .await?;
        info!(patient_id = %response.account.patient_id, "patient logged in");
        Ok(response)
    }

    pub async fn account_info(&self, patient_id: &str) -> Result<PatientAccount, TriageError> {
        self.client
            .call(
                Endpoint::AccountInfo(AccountRef::Patient(patient_id.to_string())),
                RequestBody::Empty,
            )
            .await
    }

    pub async fn create_health_profile(
        &self,
        request: &HealthProfileRequest,
    ) -> Result<MessageResponse, TriageError> {
        self.client
            .call(Endpoint::CreateHealthProfile, RequestBody::json(request)?)
            .await
    }

    pub async fn health_profile(&self, patient_id: &str) -> Result<HealthProfile, TriageError> {
        self.client
            .call(
                Endpoint::GetHealthProfile {
                    patient_id: patient_id.to_string(),
                },
                RequestBody::Empty,
            )
            .await
    }

    /// Partially updates the health profile.
    ///
    /// Only set fields are sent; `picture` replaces the profile picture when
    /// present and leaves it untouched otherwise.
    pub async fn update_health_profile(
        &self,
        patient_id: &str,
        update: &HealthProfileUpdate,
        picture: Option<FilePart>,
    ) -> Result<ProfileUpdateResponse, TriageError> {
        if update.is_empty() && picture.is_none() {
            return Err(TriageError::InvalidInput("nothing to update".into()));
        }
        let form = build_form(
            update.form_fields(),
            picture.map(|p| ("profile_picture", p)),
        )?;
        self.client
            .call(
                Endpoint::UpdateHealthProfile {
                    patient_id: patient_id.to_string(),
                },
                RequestBody::Multipart(form),
            )
            .await
    }

    pub async fn reports(&self, patient_id: &str) -> Result<ReportList, TriageError> {
        self.client
            .call(
                Endpoint::ListReports {
                    patient_id: patient_id.to_string(),
                },
                RequestBody::Empty,
            )
            .await
    }

    /// Uploads a medical report, optionally tied to a chat session.
    pub async fn upload_report(
        &self,
        patient_id: &str,
        session_id: Option<&str>,
        file: FilePart,
    ) -> Result<UploadReportResponse, TriageError> {
        let mut fields = vec![("patient_id", patient_id.to_string())];
        if let Some(session_id) = session_id {
            fields.push(("session_id", session_id.to_string()));
        }
        let form = build_form(fields, [("file", file)])?;
        let response: UploadReportResponse = self
            .client
            .call(Endpoint::UploadReport, RequestBody::Multipart(form))
            .await?;
        info!(report_id = ?response.report_id, "report uploaded");
        Ok(response)
    }

    /// Asks the backend to analyze a previously uploaded report.
    pub async fn analyze_report(
        &self,
        report_id: i64,
    ) -> Result<ReportAnalysisResponse, TriageError> {
        self.client
            .call(Endpoint::AnalyzeReport { report_id }, RequestBody::Empty)
            .await
    }

    pub async fn report(&self, report_id: i64) -> Result<MedicalReport, TriageError> {
        self.client
            .call(Endpoint::GetReport { report_id }, RequestBody::Empty)
            .await
    }
}

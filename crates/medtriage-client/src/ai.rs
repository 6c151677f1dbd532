// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Symptom sessions, follow-up questions, analysis, and chat history.

use medtriage_core::TriageError;
use medtriage_core::types::{
    AnalysisResponse, AnalyzeRequest, ChatHistory, MessageResponse, QuestionsRequest,
    QuestionsResponse, SaveSymptomsRequest, StartSessionRequest, StartSessionResponse,
    SymptomCatalog,
};
use tracing::{debug, info};

use crate::client::{RequestBody, TriageClient};
use crate::endpoint::Endpoint;
use crate::multipart::{FilePart, build_form};

#[derive(Debug, Clone, Copy)]
pub struct AiApi<'a> {
    client: &'a TriageClient,
}

impl<'a> AiApi<'a> {
    pub(crate) fn new(client: &'a TriageClient) -> Self {
        Self { client }
    }

    /// Symptom vocabulary offered for selection.
    pub async fn symptoms(&self) -> Result<SymptomCatalog, TriageError> {
        self.client
            .call(Endpoint::Symptoms, RequestBody::Empty)
            .await
    }

    /// Opens a new triage session for the patient.
    pub async fn start_session(
        &self,
        patient_id: &str,
    ) -> Result<StartSessionResponse, TriageError> {
        let request = StartSessionRequest {
            patient_id: patient_id.to_string(),
        };
        let response: StartSessionResponse = self
            .client
            .call(Endpoint::StartSession, RequestBody::json(&request)?)
            .await?;
        debug!(session_id = %response.session_id, "session started");
        Ok(response)
    }

    pub async fn save_symptoms(
        &self,
        request: &SaveSymptomsRequest,
    ) -> Result<MessageResponse, TriageError> {
        require_symptoms(&request.symptoms)?;
        self.client
            .call(Endpoint::SaveSymptoms, RequestBody::json(request)?)
            .await
    }

    pub async fn questions(
        &self,
        request: &QuestionsRequest,
    ) -> Result<QuestionsResponse, TriageError> {
        require_symptoms(&request.symptoms)?;
        self.client
            .call(Endpoint::Questions, RequestBody::json(request)?)
            .await
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, TriageError> {
        require_symptoms(&request.symptoms)?;
        let response: AnalysisResponse = self
            .client
            .call(Endpoint::Analyze, RequestBody::json(request)?)
            .await?;
        info!(
            session_id = %request.session_id,
            triage = %response.triage(),
            "analysis complete"
        );
        Ok(response)
    }

    /// Analyzes uploaded files. Each file travels as a repeated `files` part.
    pub async fn analyze_files(
        &self,
        patient_id: &str,
        session_id: Option<&str>,
        files: Vec<FilePart>,
    ) -> Result<AnalysisResponse, TriageError> {
        if files.is_empty() {
            return Err(TriageError::InvalidInput(
                "at least one file is required".into(),
            ));
        }

        let mut fields = vec![("patient_id", patient_id.to_string())];
        if let Some(session_id) = session_id {
            fields.push(("session_id", session_id.to_string()));
        }
        let count = files.len();
        let form = build_form(fields, files.into_iter().map(|f| ("files", f)))?;

        let response: AnalysisResponse = self
            .client
            .call(Endpoint::AnalyzeFile, RequestBody::Multipart(form))
            .await?;
        info!(files = count, triage = %response.triage(), "file analysis complete");
        Ok(response)
    }

    pub async fn chat_history(&self, patient_id: &str) -> Result<ChatHistory, TriageError> {
        self.client
            .call(
                Endpoint::ChatHistory {
                    patient_id: patient_id.to_string(),
                },
                RequestBody::Empty,
            )
            .await
    }
}

fn require_symptoms(symptoms: &[String]) -> Result<(), TriageError> {
    if symptoms.iter().all(|s| s.trim().is_empty()) {
        return Err(TriageError::InvalidInput(
            "select at least one symptom".into(),
        ));
    }
    Ok(())
}

// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Symptom capture, AI analysis, and chat history payloads.

use serde::{Deserialize, Serialize};

use super::triage::{DiseaseRisk, TriageLevel};

/// Symptom vocabulary offered by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymptomCatalog {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartSessionRequest {
    pub patient_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveSymptomsRequest {
    pub patient_id: String,
    pub session_id: String,
    pub symptoms: Vec<String>,
}

/// Ask the backend for follow-up questions about the selected symptoms.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsRequest {
    pub session_id: String,
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FollowUpQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub questions: Vec<FollowUpQuestion>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// Symptom analysis request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub patient_id: String,
    pub session_id: String,
    pub symptoms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<QuestionAnswer>,
}

/// Result of a symptom or file analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    /// Most likely disease, as named by the backend.
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub triage_level: Option<i64>,
    #[serde(default)]
    pub severity_score: Option<f64>,
    #[serde(default)]
    pub diseases: Vec<DiseaseRisk>,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    /// Stored file reference for file-based analyses.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl AnalysisResponse {
    pub fn triage(&self) -> TriageLevel {
        TriageLevel::from_code(self.triage_level)
    }
}

/// One past triage session.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatSession {
    pub session_id: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub triage_level: Option<i64>,
    #[serde(default)]
    pub severity_score: Option<f64>,
    pub timestamp: String,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

impl ChatSession {
    pub fn triage(&self) -> TriageLevel {
        TriageLevel::from_code(self.triage_level)
    }
}

/// Chat history, newest first as delivered by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatHistory {
    #[serde(default)]
    pub sessions: Vec<ChatSession>,
}

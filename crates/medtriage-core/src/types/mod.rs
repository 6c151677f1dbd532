// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire data types mirroring the backend's JSON payloads.
//!
//! These records carry no behavior beyond small derived accessors. Fields the
//! backend may omit decode as `Option` or fall back to an empty default.

pub mod account;
pub mod ai;
pub mod doctor;
pub mod patient;
pub mod triage;

pub use account::{
    AccountKind, AccountRef, ChangePasswordRequest, DeleteAccountRequest, LoginRequest,
    MessageResponse, ProfileUpdateResponse, RegisterResponse, ResetPasswordRequest,
    SendOtpRequest, VerifyOtpRequest,
};
pub use ai::{
    AnalysisResponse, AnalyzeRequest, ChatHistory, ChatSession, FollowUpQuestion,
    QuestionAnswer, QuestionsRequest, QuestionsResponse, SaveSymptomsRequest,
    StartSessionRequest, StartSessionResponse, SymptomCatalog,
};
pub use doctor::{
    DoctorAccount, DoctorLoginResponse, DoctorProfile, DoctorProfileRequest,
    DoctorProfileUpdate, DoctorRegisterRequest, PatientOverview, SaveViewedPatientRequest,
    SessionDetail, ViewedPatient, ViewedPatientList,
};
pub use patient::{
    HealthProfile, HealthProfileRequest, HealthProfileUpdate, MedicalReport,
    PatientAccount, PatientLoginResponse, PatientRegisterRequest, ReportAnalysisResponse,
    ReportList, UploadReportResponse,
};
pub use triage::{DiseaseRisk, Probability, TriageLevel};

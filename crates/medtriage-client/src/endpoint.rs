// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative table of backend endpoints.
//!
//! Each [`Endpoint`] knows its HTTP method, its path segments relative to the
//! configured base URL, and how its body is encoded. Paths always end with a
//! trailing slash, which the backend requires.

use std::borrow::Cow;
use std::fmt;

use medtriage_core::types::{AccountKind, AccountRef};
use reqwest::Method;

/// How a request body is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    Json,
    Multipart,
}

/// One backend capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // Account flows shared by both kinds.
    Register(AccountKind),
    VerifyOtp(AccountKind),
    Login(AccountKind),
    SendResetOtp(AccountKind),
    VerifyResetOtp(AccountKind),
    ResetPassword(AccountKind),
    ChangePassword(AccountKind),
    DeleteAccount(AccountKind),
    AccountInfo(AccountRef),

    // Patient.
    CreateHealthProfile,
    GetHealthProfile { patient_id: String },
    UpdateHealthProfile { patient_id: String },
    ListReports { patient_id: String },
    UploadReport,
    AnalyzeReport { report_id: i64 },
    GetReport { report_id: i64 },

    // Doctor.
    CreateDoctorProfile,
    GetDoctorProfile { doc_id: String },
    UpdateDoctorProfile { doc_id: String },
    PatientOverview { patient_id: String },
    SessionDetail { session_id: String },
    SaveViewedPatient,
    ListViewedPatients { doc_id: String },

    // AI / chat.
    Symptoms,
    SaveSymptoms,
    Questions,
    Analyze,
    AnalyzeFile,
    StartSession,
    ChatHistory { patient_id: String },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::AccountInfo(_)
            | Endpoint::GetHealthProfile { .. }
            | Endpoint::ListReports { .. }
            | Endpoint::GetReport { .. }
            | Endpoint::GetDoctorProfile { .. }
            | Endpoint::PatientOverview { .. }
            | Endpoint::SessionDetail { .. }
            | Endpoint::ListViewedPatients { .. }
            | Endpoint::Symptoms
            | Endpoint::ChatHistory { .. } => Method::GET,
            Endpoint::UpdateHealthProfile { .. } | Endpoint::UpdateDoctorProfile { .. } => {
                Method::PUT
            }
            _ => Method::POST,
        }
    }

    pub fn body_kind(&self) -> BodyKind {
        match self {
            Endpoint::UpdateHealthProfile { .. }
            | Endpoint::UpdateDoctorProfile { .. }
            | Endpoint::UploadReport
            | Endpoint::AnalyzeFile => BodyKind::Multipart,
            Endpoint::AnalyzeReport { .. } => BodyKind::None,
            _ if self.method() == Method::GET => BodyKind::None,
            _ => BodyKind::Json,
        }
    }

    /// POST endpoints are never assumed idempotent.
    pub fn is_idempotent(&self) -> bool {
        matches!(self.method(), Method::GET | Method::PUT)
    }

    /// Path segments relative to the base URL, without the trailing slash.
    pub fn segments(&self) -> Vec<Cow<'_, str>> {
        fn kind_prefix(kind: AccountKind) -> &'static str {
            match kind {
                AccountKind::Patient => "patient",
                AccountKind::Doctor => "doctor",
            }
        }

        let fixed = |parts: &[&'static str]| parts.iter().map(|p| Cow::Borrowed(*p)).collect();

        match self {
            Endpoint::Register(k) => fixed(&[kind_prefix(*k), "register"]),
            Endpoint::VerifyOtp(k) => fixed(&[kind_prefix(*k), "verify-otp"]),
            Endpoint::Login(k) => fixed(&[kind_prefix(*k), "login"]),
            Endpoint::SendResetOtp(k) => fixed(&[kind_prefix(*k), "forgot", "send-otp"]),
            Endpoint::VerifyResetOtp(k) => fixed(&[kind_prefix(*k), "forgot", "verify-otp"]),
            Endpoint::ResetPassword(k) => {
                fixed(&[kind_prefix(*k), "forgot", "reset-password"])
            }
            Endpoint::ChangePassword(k) => fixed(&[kind_prefix(*k), "change-password"]),
            Endpoint::DeleteAccount(k) => fixed(&[kind_prefix(*k), "delete"]),
            Endpoint::AccountInfo(account) => vec![
                Cow::Borrowed(kind_prefix(account.kind())),
                Cow::Borrowed("account-info"),
                Cow::Borrowed(account.id()),
            ],

            Endpoint::CreateHealthProfile => fixed(&["patient", "health", "create"]),
            Endpoint::GetHealthProfile { patient_id } => {
                with_id(&["patient", "health", "get"], patient_id)
            }
            Endpoint::UpdateHealthProfile { patient_id } => {
                with_id(&["patient", "health", "update"], patient_id)
            }
            Endpoint::ListReports { .. } => fixed(&["patient", "reports"]),
            Endpoint::UploadReport => fixed(&["patient", "upload-report"]),
            Endpoint::AnalyzeReport { report_id } => vec![
                Cow::Borrowed("patient"),
                Cow::Borrowed("reports"),
                Cow::Owned(report_id.to_string()),
                Cow::Borrowed("analyze"),
            ],
            Endpoint::GetReport { report_id } => vec![
                Cow::Borrowed("patient"),
                Cow::Borrowed("reports"),
                Cow::Owned(report_id.to_string()),
            ],

            Endpoint::CreateDoctorProfile => fixed(&["doctor", "profile", "create"]),
            Endpoint::GetDoctorProfile { doc_id } => {
                with_id(&["doctor", "profile", "get"], doc_id)
            }
            Endpoint::UpdateDoctorProfile { doc_id } => {
                with_id(&["doctor", "profile", "update"], doc_id)
            }
            Endpoint::PatientOverview { patient_id } => {
                with_id(&["doctor", "patient-overview"], patient_id)
            }
            Endpoint::SessionDetail { session_id } => {
                with_id(&["doctor", "session-detail"], session_id)
            }
            Endpoint::SaveViewedPatient => fixed(&["doctor", "save-viewed-patient"]),
            Endpoint::ListViewedPatients { doc_id } => {
                with_id(&["doctor", "viewed-patients"], doc_id)
            }

            Endpoint::Symptoms => fixed(&["ai", "symptoms"]),
            Endpoint::SaveSymptoms => fixed(&["ai", "save-symptoms"]),
            Endpoint::Questions => fixed(&["ai", "questions"]),
            Endpoint::Analyze => fixed(&["ai", "analyze"]),
            Endpoint::AnalyzeFile => fixed(&["ai", "analyze-file"]),
            Endpoint::StartSession => fixed(&["ai", "start-session"]),
            Endpoint::ChatHistory { patient_id } => {
                with_id(&["ai", "chat", "history"], patient_id)
            }
        }
    }

    /// Query parameters appended to the URL.
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        match self {
            Endpoint::ListReports { patient_id } => vec![("patient_id", patient_id.as_str())],
            _ => Vec::new(),
        }
    }

    /// Relative path with trailing slash, e.g. `patient/reports/12/analyze/`.
    pub fn path(&self) -> String {
        let mut path = self.segments().join("/");
        path.push('/');
        path
    }
}

fn with_id<'a>(parts: &[&'static str], id: &'a str) -> Vec<Cow<'a, str>> {
    parts
        .iter()
        .map(|p| Cow::Borrowed(*p))
        .chain(std::iter::once(Cow::Borrowed(id)))
        .collect()
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_flows_are_prefixed_by_kind() {
        assert_eq!(
            Endpoint::Register(AccountKind::Patient).path(),
            "patient/register/"
        );
        assert_eq!(
            Endpoint::ResetPassword(AccountKind::Doctor).path(),
            "doctor/forgot/reset-password/"
        );
        assert_eq!(
            Endpoint::SendResetOtp(AccountKind::Patient).path(),
            "patient/forgot/send-otp/"
        );
        assert_eq!(
            Endpoint::AccountInfo(AccountRef::Doctor("D9".into())).path(),
            "doctor/account-info/D9/"
        );
    }

    #[test]
    fn report_paths_embed_report_id() {
        assert_eq!(
            Endpoint::AnalyzeReport { report_id: 12 }.path(),
            "patient/reports/12/analyze/"
        );
        assert_eq!(Endpoint::GetReport { report_id: 12 }.path(), "patient/reports/12/");
        let list = Endpoint::ListReports {
            patient_id: "P1".into(),
        };
        assert_eq!(list.path(), "patient/reports/");
        assert_eq!(list.query(), vec![("patient_id", "P1")]);
    }

    #[test]
    fn ai_paths() {
        assert_eq!(Endpoint::Symptoms.path(), "ai/symptoms/");
        assert_eq!(Endpoint::AnalyzeFile.path(), "ai/analyze-file/");
        assert_eq!(
            Endpoint::ChatHistory {
                patient_id: "P1".into()
            }
            .path(),
            "ai/chat/history/P1/"
        );
    }

    #[test]
    fn methods_follow_the_table() {
        assert_eq!(Endpoint::Symptoms.method(), Method::GET);
        assert_eq!(Endpoint::Login(AccountKind::Doctor).method(), Method::POST);
        assert_eq!(
            Endpoint::UpdateHealthProfile {
                patient_id: "P1".into()
            }
            .method(),
            Method::PUT
        );
        assert_eq!(Endpoint::AnalyzeReport { report_id: 1 }.method(), Method::POST);
    }

    #[test]
    fn body_kinds() {
        assert_eq!(Endpoint::UploadReport.body_kind(), BodyKind::Multipart);
        assert_eq!(Endpoint::Analyze.body_kind(), BodyKind::Json);
        assert_eq!(Endpoint::Symptoms.body_kind(), BodyKind::None);
        assert_eq!(
            Endpoint::AnalyzeReport { report_id: 3 }.body_kind(),
            BodyKind::None
        );
    }

    #[test]
    fn only_get_and_put_are_idempotent() {
        assert!(Endpoint::Symptoms.is_idempotent());
        assert!(Endpoint::UpdateDoctorProfile { doc_id: "D1".into() }.is_idempotent());
        assert!(!Endpoint::Register(AccountKind::Patient).is_idempotent());
        assert!(!Endpoint::Analyze.is_idempotent());
    }

    #[test]
    fn display_shows_method_and_path() {
        assert_eq!(Endpoint::StartSession.to_string(), "POST ai/start-session/");
    }
}

// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account identity kinds and the records shared by patient and doctor flows.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two mutually exclusive identity kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Patient,
    Doctor,
}

impl AccountKind {
    /// Both kinds, in a stable order.
    pub const ALL: [AccountKind; 2] = [AccountKind::Patient, AccountKind::Doctor];

    /// Builds the identity reference for this kind from a raw identifier.
    pub fn account_ref(self, id: impl Into<String>) -> AccountRef {
        match self {
            AccountKind::Patient => AccountRef::Patient(id.into()),
            AccountKind::Doctor => AccountRef::Doctor(id.into()),
        }
    }
}

/// A typed account identifier.
///
/// Serializes as `{"patient_id": "..."}` or `{"doc_id": "..."}` and is meant
/// to be flattened into request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRef {
    #[serde(rename = "patient_id")]
    Patient(String),
    #[serde(rename = "doc_id")]
    Doctor(String),
}

impl AccountRef {
    pub fn kind(&self) -> AccountKind {
        match self {
            AccountRef::Patient(_) => AccountKind::Patient,
            AccountRef::Doctor(_) => AccountKind::Doctor,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            AccountRef::Patient(id) | AccountRef::Doctor(id) => id,
        }
    }
}

/// Login with a previously issued account identifier.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    #[serde(flatten)]
    pub account: AccountRef,
    pub password: String,
}

/// Submit the OTP mailed after registration.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Start a password reset by mailing an OTP.
#[derive(Debug, Clone, Serialize)]
pub struct SendOtpRequest {
    pub email: String,
}

/// Final step of the forgot-password flow, after the OTP was verified.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Change the password of a logged-in account.
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    #[serde(flatten)]
    pub account: AccountRef,
    pub old_password: String,
    pub new_password: String,
}

/// Permanently delete an account. The password is re-checked server-side.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAccountRequest {
    #[serde(flatten)]
    pub account: AccountRef,
    pub password: String,
}

/// Plain acknowledgement returned by most mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of a registration: the account is created but unverified until
/// the OTP is confirmed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Result of a multipart profile update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// URL of the stored picture, present when a new picture was uploaded.
    #[serde(default)]
    pub profile_picture: Option<String>,
}

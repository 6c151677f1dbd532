// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account flows shared by patients and doctors: OTP verification, password
//! reset, password change, and deletion.

use medtriage_core::TriageError;
use medtriage_core::types::{
    AccountKind, ChangePasswordRequest, DeleteAccountRequest, MessageResponse,
    ResetPasswordRequest, SendOtpRequest, VerifyOtpRequest,
};
use tracing::info;

use crate::client::{RequestBody, TriageClient};
use crate::endpoint::Endpoint;

/// Account operations for one [`AccountKind`].
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    client: &'a TriageClient,
    kind: AccountKind,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(client: &'a TriageClient, kind: AccountKind) -> Self {
        Self { client, kind }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Confirms the OTP mailed after registration.
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<MessageResponse, TriageError> {
        self.client
            .call(Endpoint::VerifyOtp(self.kind), RequestBody::json(request)?)
            .await
    }

    /// Mails a password-reset OTP.
    pub async fn send_reset_otp(&self, email: &str) -> Result<MessageResponse, TriageError> {
        let request = SendOtpRequest {
            email: email.to_string(),
        };
        self.client
            .call(Endpoint::SendResetOtp(self.kind), RequestBody::json(&request)?)
            .await
    }

    pub async fn verify_reset_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<MessageResponse, TriageError> {
        self.client
            .call(Endpoint::VerifyResetOtp(self.kind), RequestBody::json(request)?)
            .await
    }

    /// Sets a new password after the reset OTP was verified.
    ///
    /// Mismatched confirmation is rejected without a request.
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, TriageError> {
        if request.new_password != request.confirm_password {
            return Err(TriageError::InvalidInput("passwords do not match".into()));
        }
        self.client
            .call(Endpoint::ResetPassword(self.kind), RequestBody::json(request)?)
            .await
    }

    pub async fn change_password(
        &self,
        id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, TriageError> {
        let request = ChangePasswordRequest {
            account: self.kind.account_ref(id),
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.client
            .call(Endpoint::ChangePassword(self.kind), RequestBody::json(&request)?)
            .await
    }

    /// Permanently deletes the account.
    pub async fn delete_account(
        &self,
        id: &str,
        password: &str,
    ) -> Result<MessageResponse, TriageError> {
        let request = DeleteAccountRequest {
            account: self.kind.account_ref(id),
            password: password.to_string(),
        };
        let response = self
            .client
            .call(Endpoint::DeleteAccount(self.kind), RequestBody::json(&request)?)
            .await?;
        info!(kind = %self.kind, "account deleted");
        Ok(response)
    }
}

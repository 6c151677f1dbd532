// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive OTP prompt with a resend countdown.
//!
//! Lines typed on stdin replace the code and submit it. `resend` requests a
//! new code once the countdown has expired. The countdown task lives exactly
//! as long as the prompt.

use colored::Colorize;
use medtriage_client::TriageClient;
use medtriage_core::types::{DoctorRegisterRequest, PatientRegisterRequest, VerifyOtpRequest};
use medtriage_core::{AccountKind, FailureKind, TriageError};
use medtriage_display::{EntryStatus, OtpAction, OtpCountdown, OtpEntry, ResendTimer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// What the code confirms, and how a new one is requested.
pub enum OtpFlow<'a> {
    RegisterPatient(&'a PatientRegisterRequest),
    RegisterDoctor(&'a DoctorRegisterRequest),
    PasswordReset { kind: AccountKind, email: &'a str },
}

impl OtpFlow<'_> {
    fn email(&self) -> &str {
        match self {
            OtpFlow::RegisterPatient(r) => r.email.as_str(),
            OtpFlow::RegisterDoctor(r) => r.email.as_str(),
            OtpFlow::PasswordReset { email, .. } => *email,
        }
    }

    async fn verify(&self, client: &TriageClient, code: String) -> Result<(), TriageError> {
        let request = VerifyOtpRequest {
            email: self.email().to_string(),
            otp: code,
        };
        match self {
            OtpFlow::RegisterPatient(_) => {
                client.account(AccountKind::Patient).verify_otp(&request).await?;
            }
            OtpFlow::RegisterDoctor(_) => {
                client.account(AccountKind::Doctor).verify_otp(&request).await?;
            }
            OtpFlow::PasswordReset { kind, .. } => {
                client.account(*kind).verify_reset_otp(&request).await?;
            }
        }
        Ok(())
    }

    async fn resend(&self, client: &TriageClient) -> Result<(), TriageError> {
        match self {
            OtpFlow::RegisterPatient(r) => {
                client.patient().register(r).await?;
            }
            OtpFlow::RegisterDoctor(r) => {
                client.doctor().register(r).await?;
            }
            OtpFlow::PasswordReset { kind, email } => {
                client.account(*kind).send_reset_otp(email).await?;
            }
        }
        Ok(())
    }
}

/// Prompts until the backend accepts a code or stdin closes.
pub async fn confirm(client: &TriageClient, flow: &OtpFlow<'_>) -> Result<(), TriageError> {
    eprintln!(
        "A 6-digit code was sent to {}. Type it and press enter.",
        flow.email().bold()
    );

    let mut entry = OtpEntry::new();
    let mut countdown = OtpCountdown::start();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            tick = countdown.tick(), if !entry.can_resend() => {
                entry = match tick {
                    Some(()) => entry.tick(),
                    None => expire(entry),
                };
                if entry.can_resend() {
                    eprintln!("{}", "Didn't get it? Type `resend` for a new code.".dimmed());
                }
            }
            line = lines.next_line() => {
                let line = line
                    .map_err(|e| TriageError::Internal(format!("failed to read input: {e}")))?;
                let Some(line) = line else {
                    return Err(TriageError::InvalidInput("no code entered".into()));
                };

                if line.trim().eq_ignore_ascii_case("resend") {
                    let (next, action) = entry.resend();
                    entry = next;
                    match action {
                        Some(OtpAction::Resend) => {
                            flow.resend(client).await?;
                            countdown = OtpCountdown::start();
                            eprintln!("New code sent.");
                        }
                        _ => {
                            if let ResendTimer::Running(secs) = entry.timer() {
                                eprintln!("You can request a new code in {secs}s.");
                            }
                        }
                    }
                    continue;
                }

                let (next, action) = entry.edit(&line).verify();
                entry = next;
                match action {
                    Some(OtpAction::Verify(code)) => match flow.verify(client, code).await {
                        Ok(()) => {
                            debug!("otp accepted");
                            return Ok(());
                        }
                        Err(e) if e.kind() == FailureKind::Application => {
                            eprintln!("{}: {}", "error".red(), e.user_message());
                            entry = entry.edit("");
                        }
                        Err(e) => return Err(e),
                    },
                    _ => {
                        if entry.status() == EntryStatus::SubmittedInvalid {
                            eprintln!("{}", "Enter all 6 digits.".yellow());
                        }
                    }
                }
            }
        }
    }
}

fn expire(mut entry: OtpEntry) -> OtpEntry {
    while !entry.can_resend() {
        entry = entry.tick();
    }
    entry
}

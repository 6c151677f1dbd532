// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation helpers for Medtriage.
//!
//! Pure mappings from backend values to display strings, the password and
//! email rules used by the sign-up forms, and the OTP entry state machine.

pub mod format;
pub mod otp;
pub mod triage;
pub mod validation;

pub use format::{
    TimestampFormatter, format_probability, format_symptom_list, format_timestamp, parse_utc,
};
pub use otp::{EntryStatus, OtpAction, OtpCountdown, OtpEntry, ResendTimer};
pub use triage::{TriageBanner, TriagePresentation, triage_color, triage_description, triage_label};
pub use validation::{PasswordChecklist, is_valid_email, is_valid_password};

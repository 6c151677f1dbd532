// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-time-password entry state and its resend countdown.
//!
//! [`OtpEntry`] is an immutable snapshot: every transition returns a new
//! value and, where the caller has something to do, an [`OtpAction`].
//! [`OtpCountdown`] drives the timer with one tick per second and stops when
//! dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub const OTP_LENGTH: usize = 6;

/// Seconds before a new code may be requested.
pub const OTP_RESEND_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Entering,
    /// Verify was attempted with fewer than six digits.
    SubmittedInvalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendTimer {
    Running(u32),
    Expired,
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpAction {
    Verify(String),
    Resend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEntry {
    code: String,
    status: EntryStatus,
    timer: ResendTimer,
}

impl Default for OtpEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpEntry {
    pub fn new() -> Self {
        Self {
            code: String::new(),
            status: EntryStatus::Entering,
            timer: ResendTimer::Running(OTP_RESEND_SECS),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub fn timer(&self) -> ResendTimer {
        self.timer
    }

    pub fn is_complete(&self) -> bool {
        self.code.len() == OTP_LENGTH
    }

    pub fn can_resend(&self) -> bool {
        self.timer == ResendTimer::Expired
    }

    /// Replaces the typed code. Non-digits are dropped and anything past six
    /// digits is cut off.
    pub fn edit(&self, input: &str) -> Self {
        let code: String = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(OTP_LENGTH)
            .collect();
        Self {
            code,
            status: EntryStatus::Entering,
            timer: self.timer,
        }
    }

    /// Advances the countdown by one second.
    pub fn tick(&self) -> Self {
        let timer = match self.timer {
            ResendTimer::Running(secs) if secs > 1 => ResendTimer::Running(secs - 1),
            _ => ResendTimer::Expired,
        };
        Self {
            timer,
            ..self.clone()
        }
    }

    /// Restarts the countdown. Ignored while the timer is still running.
    pub fn resend(&self) -> (Self, Option<OtpAction>) {
        if !self.can_resend() {
            return (self.clone(), None);
        }
        let next = Self {
            timer: ResendTimer::Running(OTP_RESEND_SECS),
            ..self.clone()
        };
        (next, Some(OtpAction::Resend))
    }

    /// Requests verification. Only a complete code produces an action.
    pub fn verify(&self) -> (Self, Option<OtpAction>) {
        if self.is_complete() {
            return (self.clone(), Some(OtpAction::Verify(self.code.clone())));
        }
        let next = Self {
            status: EntryStatus::SubmittedInvalid,
            ..self.clone()
        };
        (next, None)
    }
}

/// Background ticker for the resend timer.
///
/// Sends one tick per period, `ticks` times, then closes the channel.
/// Dropping the handle aborts the task.
pub struct OtpCountdown {
    ticks: mpsc::Receiver<()>,
    task: JoinHandle<()>,
}

impl std::fmt::Debug for OtpCountdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpCountdown")
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

impl OtpCountdown {
    /// One tick per second for the full resend window.
    pub fn start() -> Self {
        Self::with_period(OTP_RESEND_SECS, Duration::from_secs(1))
    }

    pub fn with_period(ticks: u32, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            for _ in 0..ticks {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    return;
                }
            }
            debug!(ticks, "otp countdown finished");
        });
        Self { ticks: rx, task }
    }

    /// Waits for the next tick. `None` once the countdown has run out.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }
}

impl Drop for OtpCountdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

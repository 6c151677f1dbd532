// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal prompts for passwords and plain lines.

use std::io::{BufRead, IsTerminal, Write};

use medtriage_core::TriageError;
use medtriage_display::PasswordChecklist;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable read instead of prompting, for scripted use.
pub const PASSWORD_ENV_VAR: &str = "MEDTRIAGE_PASSWORD";

/// Reads a password from `MEDTRIAGE_PASSWORD` or an interactive prompt.
pub fn password(label: &str) -> Result<SecretString, TriageError> {
    if let Ok(value) = std::env::var(PASSWORD_ENV_VAR)
        && !value.is_empty()
    {
        return Ok(SecretString::from(value));
    }

    if std::io::stdin().is_terminal() {
        eprint!("{label}: ");
        let value = rpassword::read_password()
            .map_err(|e| TriageError::Internal(format!("failed to read password: {e}")))?;
        if value.is_empty() {
            return Err(TriageError::InvalidInput("empty password not allowed".into()));
        }
        return Ok(SecretString::from(value));
    }

    Err(TriageError::InvalidInput(format!(
        "no password provided. Set {PASSWORD_ENV_VAR} or run interactively."
    )))
}

/// Prompts for a new password twice and checks the acceptance rules.
pub fn new_password() -> Result<SecretString, TriageError> {
    let first = password("New password")?;
    let checklist = PasswordChecklist::check(first.expose_secret());
    if !checklist.is_satisfied() {
        let missing: Vec<&str> = checklist
            .items()
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(rule, _)| rule)
            .collect();
        return Err(TriageError::InvalidInput(format!(
            "password is too weak: {}",
            missing.join(", ")
        )));
    }

    // The env var stands in for both entries.
    if std::env::var(PASSWORD_ENV_VAR).is_ok_and(|v| !v.is_empty()) {
        return Ok(first);
    }
    let second = password("Confirm password")?;
    if first.expose_secret() != second.expose_secret() {
        return Err(TriageError::InvalidInput("passwords do not match".into()));
    }
    Ok(first)
}

/// Reads one trimmed line from stdin.
pub fn line(label: &str) -> Result<String, TriageError> {
    eprint!("{label}: ");
    std::io::stderr()
        .flush()
        .map_err(|e| TriageError::Internal(format!("failed to flush prompt: {e}")))?;
    let mut buf = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut buf)
        .map_err(|e| TriageError::Internal(format!("failed to read input: {e}")))?;
    Ok(buf.trim().to_string())
}

/// Returns `value` if given, otherwise prompts for it.
pub fn or_prompt(value: Option<String>, label: &str) -> Result<String, TriageError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => {
            let v = line(label)?;
            if v.is_empty() {
                return Err(TriageError::InvalidInput(format!("{label} is required")));
            }
            Ok(v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_value_skips_prompt() {
        assert_eq!(or_prompt(Some("P1".into()), "Patient ID").unwrap(), "P1");
    }
}

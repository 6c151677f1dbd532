// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sign-in, registration, and password management commands.

use colored::Colorize;
use medtriage_core::types::{
    DoctorRegisterRequest, PatientRegisterRequest, ResetPasswordRequest,
};
use medtriage_core::{AccountKind, FailureKind, TriageError};
use medtriage_display::{PasswordChecklist, is_valid_email};
use medtriage_prefs::{CredentialStore, KeyValueStore, SavedCredentials};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use crate::Context;
use crate::otp::{self, OtpFlow};
use crate::output;
use crate::prompt;

/// Registration fields not given on the command line are prompted for.
#[derive(Debug, Default)]
pub struct RegisterDetails {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
}

/// Signs in and updates the remembered credentials.
///
/// A remembered password is reused when it belongs to the same identifier,
/// unless `ask_password` is set. If the backend rejects a reused password
/// the user is prompted once. After a successful login the credentials are
/// stored when `remember` is set and blanked otherwise.
pub async fn login(
    ctx: &mut Context,
    kind: AccountKind,
    id: Option<String>,
    remember: bool,
    ask_password: bool,
) -> Result<(), TriageError> {
    let saved = ctx.credentials.load(kind);
    let id = ctx.identifier(kind, id)?;

    let remembered = if ask_password {
        None
    } else {
        remembered_password(saved, &id)
    };
    let reused = remembered.is_some();
    let password = match remembered {
        Some(password) => password,
        None => prompt::password("Password")?,
    };

    let (name, password) = match sign_in(ctx, kind, &id, &password).await {
        Ok(name) => (name, password),
        Err(err) if reused && err.kind() == FailureKind::Application => {
            warn!(%kind, "remembered password rejected");
            output::print_error(&err);
            let password = prompt::password("Password")?;
            let name = sign_in(ctx, kind, &id, &password).await?;
            (name, password)
        }
        Err(err) => return Err(err),
    };

    ctx.credentials
        .save(kind, &id, password.expose_secret(), remember)?;
    println!("Welcome, {}.", name.bold());
    if remember {
        println!("{}", "Credentials remembered on this machine.".dimmed());
    }
    Ok(())
}

/// The remembered password, if it was saved for this identifier.
fn remembered_password(saved: SavedCredentials, id: &str) -> Option<SecretString> {
    (saved.remember && saved.identifier == id && !saved.password.expose_secret().is_empty())
        .then_some(saved.password)
}

async fn sign_in(
    ctx: &Context,
    kind: AccountKind,
    id: &str,
    password: &SecretString,
) -> Result<String, TriageError> {
    let name = match kind {
        AccountKind::Patient => {
            ctx.client
                .patient()
                .login(id, password.expose_secret())
                .await?
                .account
                .full_name
        }
        AccountKind::Doctor => {
            ctx.client
                .doctor()
                .login(id, password.expose_secret())
                .await?
                .account
                .full_name
        }
    };
    Ok(name)
}

pub fn logout(ctx: &mut Context) -> Result<(), TriageError> {
    ctx.credentials.clear_all()?;
    println!("Remembered credentials cleared.");
    Ok(())
}

pub async fn register(
    ctx: &mut Context,
    kind: AccountKind,
    details: RegisterDetails,
) -> Result<(), TriageError> {
    let full_name = prompt::or_prompt(details.full_name, "Full name")?;
    let email = prompt::or_prompt(details.email, "Email")?;
    if !is_valid_email(&email) {
        return Err(TriageError::InvalidInput(
            "enter a valid gmail.com address".into(),
        ));
    }
    let phone = prompt::or_prompt(details.phone, "Phone")?;
    let password = prompt::new_password()?;

    match kind {
        AccountKind::Patient => {
            let request = PatientRegisterRequest {
                full_name,
                email,
                phone,
                password: password.expose_secret().to_string(),
            };
            let response = ctx.client.patient().register(&request).await?;
            output::print_message(response.message.as_deref());
            otp::confirm(&ctx.client, &OtpFlow::RegisterPatient(&request)).await?;
        }
        AccountKind::Doctor => {
            let specialization = prompt::or_prompt(details.specialization, "Specialization")?;
            let request = DoctorRegisterRequest {
                full_name,
                email,
                phone,
                password: password.expose_secret().to_string(),
                specialization,
            };
            let response = ctx.client.doctor().register(&request).await?;
            output::print_message(response.message.as_deref());
            otp::confirm(&ctx.client, &OtpFlow::RegisterDoctor(&request)).await?;
        }
    }

    info!(kind = %kind, "account verified");
    println!("{}", "Account verified. You can now log in.".green());
    Ok(())
}

pub async fn reset_password(
    ctx: &mut Context,
    kind: AccountKind,
    email: Option<String>,
) -> Result<(), TriageError> {
    let email = prompt::or_prompt(email, "Email")?;
    let api = ctx.client.account(kind);

    let response = api.send_reset_otp(&email).await?;
    output::print_message(response.message.as_deref());
    otp::confirm(&ctx.client, &OtpFlow::PasswordReset { kind, email: &email }).await?;

    let password = prompt::new_password()?;
    let request = ResetPasswordRequest {
        email,
        new_password: password.expose_secret().to_string(),
        confirm_password: password.expose_secret().to_string(),
    };
    let response = api.reset_password(&request).await?;
    output::print_message(response.message.as_deref());

    // A remembered password for this kind is now stale.
    forget_password(&mut ctx.credentials, kind)?;
    Ok(())
}

pub async fn change_password(
    ctx: &mut Context,
    kind: AccountKind,
    id: Option<String>,
) -> Result<(), TriageError> {
    let id = ctx.identifier(kind, id)?;
    let old = prompt::password("Current password")?;
    let new = prompt::new_password()?;

    let response = ctx
        .client
        .account(kind)
        .change_password(&id, old.expose_secret(), new.expose_secret())
        .await?;
    output::print_message(response.message.as_deref());

    let saved = ctx.credentials.load(kind);
    if saved.remember && saved.identifier == id {
        ctx.credentials.save(kind, &id, new.expose_secret(), true)?;
    }
    Ok(())
}

pub async fn delete_account(
    ctx: &mut Context,
    kind: AccountKind,
    id: Option<String>,
    yes: bool,
) -> Result<(), TriageError> {
    let id = ctx.identifier(kind, id)?;
    if !yes {
        let answer = prompt::line(&format!("Delete {kind} account {id}? This cannot be undone [y/N]"))?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }
    let password = prompt::password("Password")?;

    let response = ctx
        .client
        .account(kind)
        .delete_account(&id, password.expose_secret())
        .await?;
    output::print_message(response.message.as_deref());

    let saved = ctx.credentials.load(kind);
    if saved.identifier == id {
        ctx.credentials.save(kind, "", "", false)?;
    }
    Ok(())
}

pub async fn whoami(
    ctx: &mut Context,
    kind: AccountKind,
    id: Option<String>,
) -> Result<(), TriageError> {
    let id = ctx.identifier(kind, id)?;
    match kind {
        AccountKind::Patient => {
            let account = ctx.client.patient().account_info(&id).await?;
            println!("  {} ({})", account.full_name.bold(), account.patient_id);
            if let Some(email) = &account.email {
                println!("  {email}");
            }
            if let Some(phone) = &account.phone {
                println!("  {phone}");
            }
        }
        AccountKind::Doctor => {
            let account = ctx.client.doctor().account_info(&id).await?;
            println!("  {} ({})", account.full_name.bold(), account.doc_id);
            if let Some(specialization) = &account.specialization {
                println!("  {specialization}");
            }
            if let Some(email) = &account.email {
                println!("  {email}");
            }
        }
    }
    Ok(())
}

/// Shows which sign-up rules a password meets. Nothing is sent.
pub fn check_password() -> Result<(), TriageError> {
    let password = prompt::password("Password")?;
    let checklist = PasswordChecklist::check(password.expose_secret());
    output::print_checklist(&checklist);
    if !checklist.is_satisfied() {
        return Err(TriageError::InvalidInput("password does not meet the rules".into()));
    }
    Ok(())
}

/// Blanks the remembered password for `kind`, keeping the identifier.
fn forget_password<S: KeyValueStore>(
    credentials: &mut CredentialStore<S>,
    kind: AccountKind,
) -> Result<(), TriageError> {
    let saved = credentials.load(kind);
    if saved.remember {
        credentials.save(kind, &saved.identifier, "", true)?;
    }
    Ok(())
}

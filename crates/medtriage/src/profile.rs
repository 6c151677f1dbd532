// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health profile and doctor commands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use medtriage_client::FilePart;
use medtriage_core::types::{
    DoctorProfileRequest, DoctorProfileUpdate, HealthProfileRequest, HealthProfileUpdate,
};
use medtriage_core::{AccountKind, TriageError};
use medtriage_display::{TriageBanner, format_symptom_list};

use crate::Context;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum HealthCommand {
    /// Show the health profile.
    Show {
        #[arg(long)]
        patient_id: Option<String>,
    },
    /// Create the health profile. Done once per patient.
    Create {
        #[arg(long)]
        patient_id: Option<String>,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        /// Height in centimetres.
        #[arg(long)]
        height: f64,
        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        blood_group: String,
        #[arg(long)]
        conditions: Option<String>,
    },
    /// Change some profile fields or the picture.
    Update {
        #[arg(long)]
        patient_id: Option<String>,
        #[command(flatten)]
        fields: HealthFields,
        #[arg(long)]
        picture: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct HealthFields {
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long)]
    blood_group: Option<String>,
    #[arg(long)]
    conditions: Option<String>,
}

impl From<HealthFields> for HealthProfileUpdate {
    fn from(f: HealthFields) -> Self {
        HealthProfileUpdate {
            age: f.age,
            gender: f.gender,
            height: f.height,
            weight: f.weight,
            blood_group: f.blood_group,
            existing_conditions: f.conditions,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum DoctorCommand {
    /// Show the doctor profile.
    Profile {
        #[arg(long)]
        doc_id: Option<String>,
    },
    /// Create the doctor profile.
    CreateProfile {
        #[arg(long)]
        doc_id: Option<String>,
        #[arg(long)]
        specialization: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        experience: Option<u32>,
        #[arg(long)]
        hospital: Option<String>,
    },
    /// Change some profile fields or the picture.
    UpdateProfile {
        #[arg(long)]
        doc_id: Option<String>,
        #[command(flatten)]
        fields: DoctorFields,
        #[arg(long)]
        picture: Option<PathBuf>,
    },
    /// Show a patient's profile, sessions, and reports.
    Patient {
        patient_id: String,
        #[arg(long)]
        doc_id: Option<String>,
    },
    /// Show one triage session in detail.
    Session { session_id: String },
    /// List recently viewed patients.
    Viewed {
        #[arg(long)]
        doc_id: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct DoctorFields {
    #[arg(long)]
    specialization: Option<String>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    experience: Option<u32>,
    #[arg(long)]
    hospital: Option<String>,
}

impl From<DoctorFields> for DoctorProfileUpdate {
    fn from(f: DoctorFields) -> Self {
        DoctorProfileUpdate {
            specialization: f.specialization,
            age: f.age,
            gender: f.gender,
            experience_years: f.experience,
            hospital: f.hospital,
        }
    }
}

pub async fn run_health(ctx: &Context, command: HealthCommand) -> Result<(), TriageError> {
    let patient = ctx.client.patient();
    match command {
        HealthCommand::Show { patient_id } => {
            let patient_id = ctx.identifier(AccountKind::Patient, patient_id)?;
            let profile = patient.health_profile(&patient_id).await?;
            output::print_health_profile(&profile);
        }
        HealthCommand::Create {
            patient_id,
            age,
            gender,
            height,
            weight,
            blood_group,
            conditions,
        } => {
            let request = HealthProfileRequest {
                patient_id: ctx.identifier(AccountKind::Patient, patient_id)?,
                age,
                gender,
                height,
                weight,
                blood_group,
                existing_conditions: conditions,
            };
            let response = patient.create_health_profile(&request).await?;
            output::print_message(response.message.as_deref());
        }
        HealthCommand::Update {
            patient_id,
            fields,
            picture,
        } => {
            let patient_id = ctx.identifier(AccountKind::Patient, patient_id)?;
            let picture = load_picture(picture.as_deref()).await?;
            let response = patient
                .update_health_profile(&patient_id, &fields.into(), picture)
                .await?;
            output::print_message(response.message.as_deref());
        }
    }
    Ok(())
}

pub async fn run_doctor(ctx: &Context, command: DoctorCommand) -> Result<(), TriageError> {
    let doctor = ctx.client.doctor();
    match command {
        DoctorCommand::Profile { doc_id } => {
            let doc_id = ctx.identifier(AccountKind::Doctor, doc_id)?;
            let profile = doctor.profile(&doc_id).await?;
            output::print_doctor_profile(&profile);
        }
        DoctorCommand::CreateProfile {
            doc_id,
            specialization,
            age,
            gender,
            experience,
            hospital,
        } => {
            let request = DoctorProfileRequest {
                doc_id: ctx.identifier(AccountKind::Doctor, doc_id)?,
                specialization,
                age,
                gender,
                experience_years: experience,
                hospital,
            };
            let response = doctor.create_profile(&request).await?;
            output::print_message(response.message.as_deref());
        }
        DoctorCommand::UpdateProfile {
            doc_id,
            fields,
            picture,
        } => {
            let doc_id = ctx.identifier(AccountKind::Doctor, doc_id)?;
            let picture = load_picture(picture.as_deref()).await?;
            let response = doctor
                .update_profile(&doc_id, &fields.into(), picture)
                .await?;
            output::print_message(response.message.as_deref());
        }
        DoctorCommand::Patient { patient_id, doc_id } => {
            let doc_id = ctx.identifier(AccountKind::Doctor, doc_id)?;
            let overview = doctor.patient_overview(&patient_id).await?;
            output::print_overview(&overview, &ctx.formatter);
            doctor.save_viewed_patient(&doc_id, &patient_id).await?;
        }
        DoctorCommand::Session { session_id } => {
            let detail = doctor.session_detail(&session_id).await?;
            println!(
                "  {}  {}",
                ctx.formatter.format(&detail.session.timestamp),
                format_symptom_list(&detail.session.symptoms)
            );
            for answer in &detail.answers {
                println!("    {} {}", answer.question, answer.answer);
            }
            let banner = TriageBanner::from(&detail.session).with_ranking(&detail.diseases);
            output::print_banner(&banner);
        }
        DoctorCommand::Viewed { doc_id } => {
            let doc_id = ctx.identifier(AccountKind::Doctor, doc_id)?;
            let list = doctor.viewed_patients(&doc_id).await?;
            output::print_viewed(&list.patients, &ctx.formatter);
        }
    }
    Ok(())
}

async fn load_picture(path: Option<&Path>) -> Result<Option<FilePart>, TriageError> {
    match path {
        Some(path) => Ok(Some(FilePart::from_path(path).await?)),
        None => Ok(None),
    }
}

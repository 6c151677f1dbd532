// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Medical report commands.

use std::path::PathBuf;

use clap::Subcommand;
use medtriage_client::FilePart;
use medtriage_core::{AccountKind, TriageError};
use medtriage_display::{TriageBanner, format_symptom_list};

use crate::Context;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    /// List uploaded reports.
    List {
        #[arg(long)]
        patient_id: Option<String>,
    },
    /// Upload a report file.
    Upload {
        path: PathBuf,
        #[arg(long)]
        patient_id: Option<String>,
        /// Attach the report to an existing session.
        #[arg(long)]
        session_id: Option<String>,
        /// Analyze the report right after uploading.
        #[arg(long)]
        analyze: bool,
    },
    /// Show one report.
    Show { report_id: i64 },
    /// Analyze an uploaded report.
    Analyze { report_id: i64 },
}

pub async fn run(ctx: &Context, command: ReportCommand) -> Result<(), TriageError> {
    match command {
        ReportCommand::List { patient_id } => {
            let patient_id = ctx.identifier(AccountKind::Patient, patient_id)?;
            let list = ctx.client.patient().reports(&patient_id).await?;
            output::print_reports(&list.reports, &ctx.formatter);
            Ok(())
        }
        ReportCommand::Upload {
            path,
            patient_id,
            session_id,
            analyze,
        } => {
            let patient_id = ctx.identifier(AccountKind::Patient, patient_id)?;
            let file = FilePart::from_path(&path).await?;
            let response = ctx
                .client
                .patient()
                .upload_report(&patient_id, session_id.as_deref(), file)
                .await?;
            output::print_message(response.message.as_deref());
            match (analyze, response.report_id) {
                (true, Some(report_id)) => analyze_report(ctx, report_id).await,
                (true, None) => Err(TriageError::Internal(
                    "upload succeeded but no report ID was returned".into(),
                )),
                (false, _) => Ok(()),
            }
        }
        ReportCommand::Show { report_id } => {
            let report = ctx.client.patient().report(report_id).await?;
            output::print_reports(std::slice::from_ref(&report), &ctx.formatter);
            if let Some(symptoms) = &report.symptoms {
                println!("  Symptoms: {}", format_symptom_list(symptoms));
            }
            if let Some(analysis) = &report.analysis {
                println!();
                println!("{analysis}");
            }
            Ok(())
        }
        ReportCommand::Analyze { report_id } => analyze_report(ctx, report_id).await,
    }
}

async fn analyze_report(ctx: &Context, report_id: i64) -> Result<(), TriageError> {
    let response = ctx.client.patient().analyze_report(report_id).await?;
    if !response.symptoms.is_empty() {
        println!("Detected: {}", format_symptom_list(&response.symptoms));
    }
    output::print_banner(&TriageBanner::from(&response));
    Ok(())
}

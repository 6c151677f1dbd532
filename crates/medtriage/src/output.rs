// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of triage results, histories, and reports.

use colored::Colorize;
use medtriage_core::TriageError;
use medtriage_core::types::{
    ChatSession, DoctorProfile, HealthProfile, MedicalReport, PatientOverview, ViewedPatient,
};
use medtriage_display::{
    PasswordChecklist, TimestampFormatter, TriageBanner, format_symptom_list,
};

pub fn print_banner(banner: &TriageBanner) {
    let (r, g, b) = banner.presentation.rgb();
    println!();
    println!(
        "  {} {}",
        format!(" {} ", banner.presentation.label)
            .bold()
            .on_truecolor(r, g, b),
        banner.presentation.description.truecolor(r, g, b)
    );
    println!("  {}", "-".repeat(50));

    if let Some(disease) = &banner.disease {
        println!("    Condition: {}", disease.bold());
    }
    if let Some(severity) = banner.severity {
        println!("    Severity:  {severity:.1}");
    }
    if !banner.diseases.is_empty() {
        println!("    Possible conditions:");
        for (name, probability) in &banner.diseases {
            println!("      {name:<30} {probability:>5}");
        }
    }
    if let Some(summary) = &banner.summary {
        println!();
        for line in summary.lines() {
            println!("    {line}");
        }
    }
    println!();
}

pub fn print_sessions(sessions: &[ChatSession], formatter: &TimestampFormatter) {
    if sessions.is_empty() {
        println!("  No past sessions.");
        return;
    }
    for session in sessions {
        let banner = TriageBanner::from(session);
        let (r, g, b) = banner.presentation.rgb();
        println!(
            "  {}  {:<8} {}",
            formatter.format(&session.timestamp).dimmed(),
            banner.presentation.label.truecolor(r, g, b).bold(),
            session.disease.as_deref().unwrap_or("-"),
        );
        println!("      {}", format_symptom_list(&session.symptoms));
    }
}

pub fn print_reports(reports: &[MedicalReport], formatter: &TimestampFormatter) {
    if reports.is_empty() {
        println!("  No reports uploaded.");
        return;
    }
    for report in reports {
        let status = if report.is_analyzed() {
            let level = report.triage();
            level.to_string().normal()
        } else {
            "pending".yellow()
        };
        println!(
            "  #{:<6} {}  {}  {}",
            report.report_id,
            formatter.format(&report.uploaded_at).dimmed(),
            status,
            report.file_url
        );
    }
}

pub fn print_health_profile(profile: &HealthProfile) {
    println!();
    println!("  Health profile");
    println!("  {}", "-".repeat(35));
    row("Age", profile.age.map(|a| a.to_string()));
    row("Gender", profile.gender.clone());
    row("Height", profile.height.map(|h| format!("{h} cm")));
    row("Weight", profile.weight.map(|w| format!("{w} kg")));
    row("Blood group", profile.blood_group.clone());
    row("Conditions", profile.existing_conditions.clone());
    println!();
}

pub fn print_doctor_profile(profile: &DoctorProfile) {
    println!();
    println!("  Doctor profile");
    println!("  {}", "-".repeat(35));
    row("Name", profile.full_name.clone());
    row("Specialization", profile.specialization.clone());
    row("Age", profile.age.map(|a| a.to_string()));
    row("Gender", profile.gender.clone());
    row("Experience", profile.experience_years.map(|y| format!("{y} years")));
    row("Hospital", profile.hospital.clone());
    println!();
}

pub fn print_overview(overview: &PatientOverview, formatter: &TimestampFormatter) {
    println!();
    println!(
        "  {} ({})",
        overview.patient.full_name.bold(),
        overview.patient.patient_id
    );
    if let Some(profile) = &overview.health_profile {
        print_health_profile(profile);
    }
    println!("  Sessions");
    print_sessions(&overview.sessions, formatter);
    println!();
    println!("  Reports");
    print_reports(&overview.reports, formatter);
    println!();
}

pub fn print_viewed(patients: &[ViewedPatient], formatter: &TimestampFormatter) {
    if patients.is_empty() {
        println!("  No recently viewed patients.");
        return;
    }
    for patient in patients {
        println!(
            "  {:<12} {:<30} {}",
            patient.patient_id,
            patient.full_name.as_deref().unwrap_or("-"),
            patient
                .viewed_at
                .as_deref()
                .map(|t| formatter.format(t))
                .unwrap_or_default()
                .dimmed()
        );
    }
}

pub fn print_checklist(checklist: &PasswordChecklist) {
    for (rule, ok) in checklist.items() {
        if ok {
            println!("  {} {rule}", "✓".green());
        } else {
            println!("  {} {rule}", "✗".red());
        }
    }
}

/// Prints the backend's confirmation message, if any.
pub fn print_message(message: Option<&str>) {
    if let Some(message) = message {
        println!("{message}");
    }
}

pub fn print_error(err: &TriageError) {
    eprintln!("{}: {}", "error".red(), err.user_message());
}

fn row(label: &str, value: Option<String>) {
    println!("    {:<15} {}", format!("{label}:"), value.unwrap_or_else(|| "-".into()));
}
